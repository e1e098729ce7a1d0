#![no_std]

mod events;
mod utils;

use common::{
    escrow::{
        interface::EscrowContractTrait,
        types::{
            Approvals, EscrowConfig, EscrowError as Error, EscrowRecord, ListingStatus,
            SaleCondition, CONFIG,
        },
    },
    storage::{has_data, store_data},
};
use events::EscrowEvent;
use soroban_sdk::{contract, contractimpl, Address, Env, Vec};
use utils::{
    contract_clients::get_payment_client,
    helpers::{
        collect_unmet_conditions, get_config, get_funded, get_held, get_open_record, get_record, holds_custody,
        move_custody, pull_funds, record_funding, release_funds, require_role, save_record,
        take_funded,
    },
};

#[contract]
pub struct EscrowContract;

#[contractimpl]
impl EscrowContractTrait for EscrowContract {
    fn initialize(
        env: Env,
        registry: Address,
        seller: Address,
        inspector: Address,
        lender: Address,
        payment_token: Address,
    ) -> Result<(), Error> {
        seller.require_auth();
        if has_data(&env, &CONFIG) {
            return Err(Error::AlreadyInitialized);
        }

        let config = EscrowConfig {
            registry: registry.clone(),
            seller: seller.clone(),
            inspector: inspector.clone(),
            lender: lender.clone(),
            payment_token,
        };
        store_data(&env, &CONFIG, &config);

        EscrowEvent::Initialized(registry, seller, inspector, lender).publish(&env);
        Ok(())
    }

    fn version() -> u32 {
        1
    }

    fn config(env: Env) -> Result<EscrowConfig, Error> {
        get_config(&env)
    }

    fn registry(env: Env) -> Result<Address, Error> {
        Ok(get_config(&env)?.registry)
    }

    fn seller(env: Env) -> Result<Address, Error> {
        Ok(get_config(&env)?.seller)
    }

    fn inspector(env: Env) -> Result<Address, Error> {
        Ok(get_config(&env)?.inspector)
    }

    fn lender(env: Env) -> Result<Address, Error> {
        Ok(get_config(&env)?.lender)
    }

    // The seller approves this contract on the registry before listing,
    // unless custody is still here from a cancelled listing.
    fn list(
        env: Env,
        id: u64,
        seller: Address,
        buyer: Address,
        purchase_price: i128,
        escrow_amount: i128,
    ) -> Result<(), Error> {
        let config: EscrowConfig = get_config(&env)?;
        require_role(&seller, &config.seller)?;

        if purchase_price <= 0 || escrow_amount < 0 {
            return Err(Error::InvalidAmount);
        }
        if escrow_amount > purchase_price {
            return Err(Error::EscrowExceedsPrice);
        }
        if buyer == config.seller || buyer == config.inspector || buyer == config.lender {
            return Err(Error::InvalidBuyer);
        }
        if let Some(existing) = get_record(&env, id) {
            if existing.status == ListingStatus::Listed {
                return Err(Error::AlreadyListed);
            }
        }
        if get_held(&env, id) != 0 {
            return Err(Error::UnsettledBalance);
        }

        if !holds_custody(&env, &config, id) {
            move_custody(
                &env,
                &config,
                id,
                &seller,
                &env.current_contract_address(),
            )?;
        }

        let record = EscrowRecord {
            buyer: buyer.clone(),
            purchase_price,
            escrow_amount,
            inspection_passed: false,
            approvals: Approvals::default(),
            status: ListingStatus::Listed,
        };
        save_record(&env, id, &record);

        EscrowEvent::Listed(id, buyer, purchase_price, escrow_amount).publish(&env);
        Ok(())
    }

    // No floor against escrow_amount here; finalize_sale enforces the total.
    fn deposit_earnest(env: Env, id: u64, from: Address, amount: i128) -> Result<(), Error> {
        let config: EscrowConfig = get_config(&env)?;
        let record: EscrowRecord = get_open_record(&env, id)?;
        require_role(&from, &record.buyer)?;

        pull_funds(&env, &config, id, &from, amount)?;

        EscrowEvent::EarnestDeposited(id, from, amount).publish(&env);
        Ok(())
    }

    fn fund_purchase(env: Env, id: u64, from: Address, amount: i128) -> Result<(), Error> {
        let config: EscrowConfig = get_config(&env)?;
        require_role(&from, &config.lender)?;
        get_open_record(&env, id)?;

        pull_funds(&env, &config, id, &from, amount)?;
        record_funding(&env, id, amount)?;

        EscrowEvent::PurchaseFunded(id, from, amount).publish(&env);
        Ok(())
    }

    fn update_inspection_status(
        env: Env,
        id: u64,
        inspector: Address,
        passed: bool,
    ) -> Result<(), Error> {
        let config: EscrowConfig = get_config(&env)?;
        require_role(&inspector, &config.inspector)?;

        let mut record: EscrowRecord = get_open_record(&env, id)?;
        record.inspection_passed = passed;
        save_record(&env, id, &record);

        EscrowEvent::InspectionUpdated(id, passed).publish(&env);
        Ok(())
    }

    fn approve_sale(env: Env, id: u64, approver: Address) -> Result<(), Error> {
        let config: EscrowConfig = get_config(&env)?;
        approver.require_auth();

        let mut record: EscrowRecord = get_open_record(&env, id)?;
        let is_buyer = approver == record.buyer;
        let is_seller = approver == config.seller;
        let is_lender = approver == config.lender;
        if !(is_buyer || is_seller || is_lender) {
            return Err(Error::Unauthorized);
        }

        record.approvals.buyer |= is_buyer;
        record.approvals.seller |= is_seller;
        record.approvals.lender |= is_lender;
        save_record(&env, id, &record);

        EscrowEvent::SaleApproved(id, approver).publish(&env);
        Ok(())
    }

    fn finalize_sale(env: Env, id: u64, seller: Address) -> Result<(), Error> {
        let config: EscrowConfig = get_config(&env)?;
        require_role(&seller, &config.seller)?;

        let mut record: EscrowRecord = get_open_record(&env, id)?;
        if let Some(blocker) = collect_unmet_conditions(&env, &record, get_held(&env, id)).first() {
            return Err(blocker.error());
        }

        // Title moves first so a registry rejection leaves the funds untouched
        move_custody(
            &env,
            &config,
            id,
            &env.current_contract_address(),
            &record.buyer,
        )?;
        release_funds(&env, &config, id, &seller, record.purchase_price)?;
        take_funded(&env, id);

        record.status = ListingStatus::Finalized;
        save_record(&env, id, &record);

        EscrowEvent::SaleFinalized(id, record.buyer, record.purchase_price).publish(&env);
        Ok(())
    }

    // The lender's funding always goes back to the lender. The buyer's
    // deposits are refunded while inspection has not passed and are
    // forfeited to the seller once it has.
    fn cancel_sale(env: Env, id: u64, caller: Address) -> Result<(), Error> {
        let config: EscrowConfig = get_config(&env)?;
        caller.require_auth();

        let mut record: EscrowRecord = get_open_record(&env, id)?;
        let buyer_may_cancel = caller == record.buyer && !record.inspection_passed;
        if caller != config.seller && !buyer_may_cancel {
            return Err(Error::Unauthorized);
        }

        let funded: i128 = take_funded(&env, id);
        if funded > 0 {
            release_funds(&env, &config, id, &config.lender, funded)?;
            EscrowEvent::FundingReturned(id, config.lender.clone(), funded).publish(&env);
        }

        let recipient: Address = if record.inspection_passed {
            config.seller.clone()
        } else {
            record.buyer.clone()
        };
        let refund: i128 = get_held(&env, id);
        release_funds(&env, &config, id, &recipient, refund)?;

        record.status = ListingStatus::Cancelled;
        save_record(&env, id, &record);

        EscrowEvent::SaleCancelled(id, recipient, refund).publish(&env);
        Ok(())
    }

    fn reclaim_property(env: Env, id: u64, seller: Address) -> Result<(), Error> {
        let config: EscrowConfig = get_config(&env)?;
        require_role(&seller, &config.seller)?;

        match get_record(&env, id).map(|record| record.status) {
            None => return Err(Error::NotListed),
            Some(ListingStatus::Listed) => return Err(Error::ListingOpen),
            Some(ListingStatus::Finalized) => return Err(Error::ListingClosed),
            Some(ListingStatus::Cancelled) => {}
        }

        move_custody(&env, &config, id, &env.current_contract_address(), &seller)?;

        EscrowEvent::CustodyReturned(id, seller).publish(&env);
        Ok(())
    }

    fn get_listing(env: Env, id: u64) -> Result<EscrowRecord, Error> {
        get_record(&env, id).ok_or(Error::NotListed)
    }

    fn status(env: Env, id: u64) -> Option<ListingStatus> {
        get_record(&env, id).map(|record| record.status)
    }

    fn is_listed(env: Env, id: u64) -> bool {
        Self::status(env, id) == Some(ListingStatus::Listed)
    }

    fn buyer(env: Env, id: u64) -> Option<Address> {
        get_record(&env, id).map(|record| record.buyer)
    }

    fn purchase_price(env: Env, id: u64) -> i128 {
        get_record(&env, id).map_or(0, |record| record.purchase_price)
    }

    fn escrow_amount(env: Env, id: u64) -> i128 {
        get_record(&env, id).map_or(0, |record| record.escrow_amount)
    }

    fn inspection_passed(env: Env, id: u64) -> bool {
        get_record(&env, id).map_or(false, |record| record.inspection_passed)
    }

    fn approval(env: Env, id: u64, address: Address) -> bool {
        let Some(record) = get_record(&env, id) else {
            return false;
        };
        let Ok(config) = get_config(&env) else {
            return false;
        };

        (address == record.buyer && record.approvals.buyer)
            || (address == config.seller && record.approvals.seller)
            || (address == config.lender && record.approvals.lender)
    }

    fn unmet_conditions(env: Env, id: u64) -> Vec<SaleCondition> {
        match get_record(&env, id) {
            Some(record) => collect_unmet_conditions(&env, &record, get_held(&env, id)),
            None => Vec::new(&env),
        }
    }

    fn held_balance(env: Env, id: u64) -> i128 {
        get_held(&env, id)
    }

    fn funded_balance(env: Env, id: u64) -> i128 {
        get_funded(&env, id)
    }

    fn get_balance(env: Env) -> Result<i128, Error> {
        let config: EscrowConfig = get_config(&env)?;
        Ok(get_payment_client(&env, &config).balance(&env.current_contract_address()))
    }
}
