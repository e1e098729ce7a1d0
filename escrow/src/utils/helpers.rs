use common::{
    escrow::types::{
        EscrowConfig, EscrowDataKey as DataKey, EscrowError as Error, EscrowRecord,
        ListingStatus, SaleCondition, CONFIG,
    },
    storage::{get_data, get_persistent, remove_persistent, store_persistent},
};
use soroban_sdk::{log, Address, Env, Vec};

use super::contract_clients::{get_payment_client, get_registry_client};

pub fn get_config(env: &Env) -> Result<EscrowConfig, Error> {
    get_data(env, &CONFIG).ok_or(Error::NotInitialized)
}

/// Authenticates `actor` and checks it holds `role`.
pub fn require_role(actor: &Address, role: &Address) -> Result<(), Error> {
    actor.require_auth();
    if actor != role {
        return Err(Error::Unauthorized);
    }
    Ok(())
}

pub fn get_record(env: &Env, id: u64) -> Option<EscrowRecord> {
    get_persistent(env, &DataKey::Listing(id))
}

/// Record for a listing still on the sale path.
pub fn get_open_record(env: &Env, id: u64) -> Result<EscrowRecord, Error> {
    match get_record(env, id) {
        None => Err(Error::NotListed),
        Some(record) if record.status != ListingStatus::Listed => Err(Error::ListingClosed),
        Some(record) => Ok(record),
    }
}

pub fn save_record(env: &Env, id: u64, record: &EscrowRecord) {
    store_persistent(env, &DataKey::Listing(id), record);
}

pub fn get_held(env: &Env, id: u64) -> i128 {
    get_persistent(env, &DataKey::Held(id)).unwrap_or(0)
}

fn set_held(env: &Env, id: u64, amount: i128) {
    store_persistent(env, &DataKey::Held(id), &amount);
}

pub fn get_funded(env: &Env, id: u64) -> i128 {
    get_persistent(env, &DataKey::Funded(id)).unwrap_or(0)
}

/// Credits the lender with `amount` of the funds held for listing `id`.
pub fn record_funding(env: &Env, id: u64, amount: i128) -> Result<(), Error> {
    let funded: i128 = get_funded(env, id)
        .checked_add(amount)
        .ok_or(Error::InvalidAmount)?;
    store_persistent(env, &DataKey::Funded(id), &funded);
    Ok(())
}

/// Clears the lender's share of listing `id` and returns it.
pub fn take_funded(env: &Env, id: u64) -> i128 {
    let funded: i128 = get_funded(env, id);
    if funded != 0 {
        remove_persistent(env, &DataKey::Funded(id));
    }
    funded
}

/// Moves `amount` of the payment token from `from` into escrow, credited to listing `id`.
pub fn pull_funds(
    env: &Env,
    config: &EscrowConfig,
    id: u64,
    from: &Address,
    amount: i128,
) -> Result<i128, Error> {
    if amount <= 0 {
        return Err(Error::InvalidAmount);
    }

    let held: i128 = get_held(env, id)
        .checked_add(amount)
        .ok_or(Error::InvalidAmount)?;

    get_payment_client(env, config).transfer(from, &env.current_contract_address(), &amount);
    set_held(env, id, held);

    Ok(held)
}

/// Pays `amount` out of the funds held for listing `id`.
pub fn release_funds(
    env: &Env,
    config: &EscrowConfig,
    id: u64,
    to: &Address,
    amount: i128,
) -> Result<(), Error> {
    let held: i128 = get_held(env, id);
    if amount > held {
        return Err(Error::InsufficientFunds);
    }

    if amount > 0 {
        get_payment_client(env, config).transfer(&env.current_contract_address(), to, &amount);
    }
    set_held(env, id, held - amount);

    Ok(())
}

pub fn holds_custody(env: &Env, config: &EscrowConfig, id: u64) -> bool {
    matches!(
        get_registry_client(env, config).try_owner_of(&id),
        Ok(Ok(owner)) if owner == env.current_contract_address()
    )
}

/// Asks the registry to move asset `id`, with the escrow acting as spender.
/// A rejected transfer leaves the registry untouched.
pub fn move_custody(
    env: &Env,
    config: &EscrowConfig,
    id: u64,
    from: &Address,
    to: &Address,
) -> Result<(), Error> {
    let registry = get_registry_client(env, config);
    match registry.try_transfer(&env.current_contract_address(), from, to, &id) {
        Ok(Ok(())) => Ok(()),
        _ => {
            log!(env, "custody transfer of {} rejected", id);
            Err(Error::CustodyTransferFailed)
        }
    }
}

pub fn collect_unmet_conditions(
    env: &Env,
    record: &EscrowRecord,
    held: i128,
) -> Vec<SaleCondition> {
    let mut unmet: Vec<SaleCondition> = Vec::new(env);

    if !record.inspection_passed {
        unmet.push_back(SaleCondition::InspectionPassed);
    }
    if !record.approvals.buyer {
        unmet.push_back(SaleCondition::BuyerApproval);
    }
    if !record.approvals.seller {
        unmet.push_back(SaleCondition::SellerApproval);
    }
    if !record.approvals.lender {
        unmet.push_back(SaleCondition::LenderApproval);
    }
    if held < record.purchase_price {
        unmet.push_back(SaleCondition::SufficientFunds);
    }

    unmet
}
