use soroban_sdk::{contract, contractimpl, Address, Env, String};

use crate::events::RegistryEvent;
use common::{
    registry::{
        interface::PropertyRegistryInterface,
        types::{RegistryDataKey as DataKey, RegistryError as Error},
    },
    storage::{get_data, get_persistent, remove_persistent, store_data, store_persistent},
};

const NAME: &str = "Titled Property";
const SYMBOL: &str = "PROP";

#[contract]
pub struct PropertyRegistry;

#[contractimpl]
impl PropertyRegistryInterface for PropertyRegistry {
    fn name(env: Env) -> String {
        String::from_str(&env, NAME)
    }

    fn symbol(env: Env) -> String {
        String::from_str(&env, SYMBOL)
    }

    // Ids are assigned sequentially from 1
    fn mint(env: Env, to: Address, token_uri: String) -> u64 {
        to.require_auth();

        let token_id: u64 = get_data::<_, u64>(&env, &DataKey::TokenCount).unwrap_or(0) + 1;

        store_persistent(&env, &DataKey::TokenUri(token_id), &token_uri);
        store_persistent(&env, &DataKey::Owner(token_id), &to);
        adjust_balance(&env, &to, 1);
        store_data(&env, &DataKey::TokenCount, &token_id);

        RegistryEvent::Mint(token_id, to).publish(&env);

        token_id
    }

    fn approve(env: Env, owner: Address, spender: Address, token_id: u64) -> Result<(), Error> {
        owner.require_auth();

        if Self::owner_of(env.clone(), token_id)? != owner {
            return Err(Error::NotOwner);
        }

        store_persistent(&env, &DataKey::Approved(token_id), &spender);
        RegistryEvent::Approval(token_id, owner, spender).publish(&env);

        Ok(())
    }

    fn get_approved(env: Env, token_id: u64) -> Option<Address> {
        get_persistent(&env, &DataKey::Approved(token_id))
    }

    fn transfer(
        env: Env,
        spender: Address,
        from: Address,
        to: Address,
        token_id: u64,
    ) -> Result<(), Error> {
        spender.require_auth();

        let owner: Address = Self::owner_of(env.clone(), token_id)?;
        if owner != from {
            return Err(Error::NotOwner);
        }

        if spender != owner && Self::get_approved(env.clone(), token_id) != Some(spender) {
            return Err(Error::NotApproved);
        }

        // Approval does not survive a change of owner
        remove_persistent(&env, &DataKey::Approved(token_id));
        store_persistent(&env, &DataKey::Owner(token_id), &to);
        adjust_balance(&env, &from, -1);
        adjust_balance(&env, &to, 1);

        RegistryEvent::Transfer(token_id, from, to).publish(&env);
        Ok(())
    }

    fn owner_of(env: Env, token_id: u64) -> Result<Address, Error> {
        get_persistent(&env, &DataKey::Owner(token_id)).ok_or(Error::TokenNotFound)
    }

    fn balance_of(env: Env, owner: Address) -> u32 {
        get_persistent(&env, &DataKey::Balance(owner)).unwrap_or(0)
    }

    fn token_uri(env: Env, token_id: u64) -> Result<String, Error> {
        get_persistent(&env, &DataKey::TokenUri(token_id)).ok_or(Error::TokenNotFound)
    }

    fn total_supply(env: Env) -> u64 {
        get_data(&env, &DataKey::TokenCount).unwrap_or(0)
    }

    fn exists(env: Env, token_id: u64) -> bool {
        get_persistent::<_, Address>(&env, &DataKey::Owner(token_id)).is_some()
    }
}

fn adjust_balance(env: &Env, owner: &Address, delta: i64) {
    let current: u32 = get_persistent(env, &DataKey::Balance(owner.clone())).unwrap_or(0);
    let updated: u32 = (current as i64 + delta) as u32;
    store_persistent(env, &DataKey::Balance(owner.clone()), &updated);
}
