use soroban_sdk::{contracterror, contracttype, symbol_short, Address, Symbol};

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum EscrowError {
    AlreadyInitialized = 1,
    NotInitialized = 2,
    Unauthorized = 3,
    // Listing state
    NotListed = 4,
    ListingClosed = 5,
    AlreadyListed = 6,
    ListingOpen = 7,
    UnsettledBalance = 8,
    // Listing terms
    InvalidAmount = 9,
    EscrowExceedsPrice = 10,
    InvalidBuyer = 11,
    CustodyTransferFailed = 12,
    // Finalization blockers, reported in check order
    InspectionNotPassed = 13,
    BuyerApprovalMissing = 14,
    SellerApprovalMissing = 15,
    LenderApprovalMissing = 16,
    InsufficientFunds = 17,
}

/// Roles and collaborators fixed when the escrow is initialized.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct EscrowConfig {
    pub registry: Address,
    pub seller: Address,
    pub inspector: Address,
    pub lender: Address,
    /// Token contract carrying the native value held in escrow.
    pub payment_token: Address,
}

#[contracttype]
#[derive(Clone, Debug, Copy, PartialEq, Eq)]
pub enum ListingStatus {
    Listed = 1,
    Finalized = 2,
    Cancelled = 3,
}

/// One slot per stakeholder. Unanimity means all three are set.
#[contracttype]
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Approvals {
    pub buyer: bool,
    pub seller: bool,
    pub lender: bool,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct EscrowRecord {
    pub buyer: Address,
    pub purchase_price: i128,
    pub escrow_amount: i128,
    pub inspection_passed: bool,
    pub approvals: Approvals,
    pub status: ListingStatus,
}

/// Preconditions `finalize_sale` checks, in the order it checks them.
#[contracttype]
#[derive(Clone, Debug, Copy, PartialEq, Eq)]
pub enum SaleCondition {
    InspectionPassed = 1,
    BuyerApproval = 2,
    SellerApproval = 3,
    LenderApproval = 4,
    SufficientFunds = 5,
}

impl SaleCondition {
    pub fn error(&self) -> EscrowError {
        match self {
            SaleCondition::InspectionPassed => EscrowError::InspectionNotPassed,
            SaleCondition::BuyerApproval => EscrowError::BuyerApprovalMissing,
            SaleCondition::SellerApproval => EscrowError::SellerApprovalMissing,
            SaleCondition::LenderApproval => EscrowError::LenderApprovalMissing,
            SaleCondition::SufficientFunds => EscrowError::InsufficientFunds,
        }
    }
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum EscrowDataKey {
    Listing(u64), // EscrowRecord per asset id
    Held(u64),    // Funds attributed to a listing
    Funded(u64),  // Lender's share of Held
}

pub const CONFIG: Symbol = symbol_short!("CONFIG");
