use super::types::RegistryError as Error;
use soroban_sdk::{contractclient, Address, Env, String};

#[contractclient(name = "PropertyRegistryClient")]
pub trait PropertyRegistryInterface {
    fn name(env: Env) -> String;
    fn symbol(env: Env) -> String;
    fn mint(env: Env, to: Address, token_uri: String) -> u64;
    fn approve(env: Env, owner: Address, spender: Address, token_id: u64) -> Result<(), Error>;
    fn get_approved(env: Env, token_id: u64) -> Option<Address>;
    fn transfer(
        env: Env,
        spender: Address,
        from: Address,
        to: Address,
        token_id: u64,
    ) -> Result<(), Error>;
    fn owner_of(env: Env, token_id: u64) -> Result<Address, Error>;
    fn balance_of(env: Env, owner: Address) -> u32;
    fn token_uri(env: Env, token_id: u64) -> Result<String, Error>;
    fn total_supply(env: Env) -> u64;
    fn exists(env: Env, token_id: u64) -> bool;
}
