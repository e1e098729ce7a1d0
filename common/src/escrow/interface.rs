use super::types::{EscrowConfig, EscrowError as Error, EscrowRecord, ListingStatus, SaleCondition};
use soroban_sdk::{contractclient, Address, Env, Vec};

#[contractclient(name = "EscrowContractClient")]
pub trait EscrowContractTrait {
    fn initialize(
        env: Env,
        registry: Address,
        seller: Address,
        inspector: Address,
        lender: Address,
        payment_token: Address,
    ) -> Result<(), Error>;
    fn version() -> u32;
    fn config(env: Env) -> Result<EscrowConfig, Error>;
    fn registry(env: Env) -> Result<Address, Error>;
    fn seller(env: Env) -> Result<Address, Error>;
    fn inspector(env: Env) -> Result<Address, Error>;
    fn lender(env: Env) -> Result<Address, Error>;

    fn list(
        env: Env,
        id: u64,
        seller: Address,
        buyer: Address,
        purchase_price: i128,
        escrow_amount: i128,
    ) -> Result<(), Error>;
    fn deposit_earnest(env: Env, id: u64, from: Address, amount: i128) -> Result<(), Error>;
    fn fund_purchase(env: Env, id: u64, from: Address, amount: i128) -> Result<(), Error>;
    fn update_inspection_status(
        env: Env,
        id: u64,
        inspector: Address,
        passed: bool,
    ) -> Result<(), Error>;
    fn approve_sale(env: Env, id: u64, approver: Address) -> Result<(), Error>;
    fn finalize_sale(env: Env, id: u64, seller: Address) -> Result<(), Error>;
    fn cancel_sale(env: Env, id: u64, caller: Address) -> Result<(), Error>;
    fn reclaim_property(env: Env, id: u64, seller: Address) -> Result<(), Error>;

    fn get_listing(env: Env, id: u64) -> Result<EscrowRecord, Error>;
    fn status(env: Env, id: u64) -> Option<ListingStatus>;
    fn is_listed(env: Env, id: u64) -> bool;
    fn buyer(env: Env, id: u64) -> Option<Address>;
    fn purchase_price(env: Env, id: u64) -> i128;
    fn escrow_amount(env: Env, id: u64) -> i128;
    fn inspection_passed(env: Env, id: u64) -> bool;
    fn approval(env: Env, id: u64, address: Address) -> bool;
    fn unmet_conditions(env: Env, id: u64) -> Vec<SaleCondition>;
    fn held_balance(env: Env, id: u64) -> i128;
    fn funded_balance(env: Env, id: u64) -> i128;
    fn get_balance(env: Env) -> Result<i128, Error>;
}
