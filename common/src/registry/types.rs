use soroban_sdk::{contracterror, contracttype, Address};

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum RegistryError {
    TokenNotFound = 1,
    NotOwner = 2,
    NotApproved = 3,
}

#[derive(Clone)]
#[contracttype]
pub enum RegistryDataKey {
    TokenCount,        // Last minted token id
    TokenUri(u64),     // Metadata URI for each token id
    Owner(u64),        // Current owner of each token id
    Approved(u64),     // Address allowed to transfer a token on the owner's behalf
    Balance(Address),  // Number of tokens held by an address
}
