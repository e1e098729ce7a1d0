#![cfg(test)]
extern crate std;

use crate::contract::PropertyRegistry;
use crate::events::RegistryEvent;
use common::registry::{interface::PropertyRegistryClient, types::RegistryError};
use soroban_sdk::testutils::{Address as _, Events};
use soroban_sdk::{Address, Env, IntoVal, String, Val, Vec};

const TOKEN_URI: &str = "https://ipfs.io/ipfs/QmQVcpsjrA6cr1iJjZAodYwmPekYgbnXGo4DFubJiLc2EB/1.json";

struct RegistryTest {
    env: Env,
    registry_client: PropertyRegistryClient<'static>,
    owner: Address,
    spender: Address,
    recipient: Address,
}

impl RegistryTest {
    fn setup() -> Self {
        let env: Env = Env::default();
        env.mock_all_auths();

        let contract_id: Address = env.register(PropertyRegistry, ());
        let registry_client = PropertyRegistryClient::new(&env, &contract_id);

        let owner: Address = Address::generate(&env);
        let spender: Address = Address::generate(&env);
        let recipient: Address = Address::generate(&env);

        RegistryTest {
            env,
            registry_client,
            owner,
            spender,
            recipient,
        }
    }

    fn mint(&self) -> u64 {
        self.registry_client
            .mint(&self.owner, &String::from_str(&self.env, TOKEN_URI))
    }

    fn emitted(&self, event: RegistryEvent) -> bool {
        let expected: (Address, Vec<Val>, Val) = (
            self.registry_client.address.clone(),
            (event.name(),).into_val(&self.env),
            event.data(&self.env).into_val(&self.env),
        );
        self.env.events().all().contains(expected)
    }
}

#[test]
fn test_mint_assigns_sequential_ids() {
    let test = RegistryTest::setup();

    assert_eq!(test.mint(), 1);
    assert_eq!(test.mint(), 2);
    assert!(test.emitted(RegistryEvent::Mint(2, test.owner.clone())));

    assert_eq!(test.registry_client.total_supply(), 2);
    assert_eq!(test.registry_client.owner_of(&1), test.owner);
    assert_eq!(test.registry_client.balance_of(&test.owner), 2);
    assert_eq!(
        test.registry_client.token_uri(&1),
        String::from_str(&test.env, TOKEN_URI)
    );
    assert!(test.registry_client.exists(&2));
    assert!(!test.registry_client.exists(&3));
}

#[test]
fn test_unknown_token_is_not_found() {
    let test = RegistryTest::setup();

    assert_eq!(
        test.registry_client.try_owner_of(&7),
        Err(Ok(RegistryError::TokenNotFound))
    );
    assert_eq!(
        test.registry_client.try_token_uri(&7),
        Err(Ok(RegistryError::TokenNotFound))
    );
}

#[test]
fn test_approved_spender_can_transfer() {
    let test = RegistryTest::setup();
    let token_id = test.mint();

    test.registry_client
        .approve(&test.owner, &test.spender, &token_id);
    assert_eq!(
        test.registry_client.get_approved(&token_id),
        Some(test.spender.clone())
    );

    test.registry_client
        .transfer(&test.spender, &test.owner, &test.recipient, &token_id);

    assert!(test.emitted(RegistryEvent::Transfer(
        token_id,
        test.owner.clone(),
        test.recipient.clone()
    )));
    assert_eq!(test.registry_client.owner_of(&token_id), test.recipient);
    assert_eq!(test.registry_client.get_approved(&token_id), None);
    assert_eq!(test.registry_client.balance_of(&test.owner), 0);
    assert_eq!(test.registry_client.balance_of(&test.recipient), 1);
}

#[test]
fn test_transfer_without_approval_fails() {
    let test = RegistryTest::setup();
    let token_id = test.mint();

    let result =
        test.registry_client
            .try_transfer(&test.spender, &test.owner, &test.recipient, &token_id);
    assert_eq!(result, Err(Ok(RegistryError::NotApproved)));
    assert_eq!(test.registry_client.owner_of(&token_id), test.owner);
}

#[test]
fn test_transfer_from_wrong_owner_fails() {
    let test = RegistryTest::setup();
    let token_id = test.mint();

    let result =
        test.registry_client
            .try_transfer(&test.recipient, &test.recipient, &test.spender, &token_id);
    assert_eq!(result, Err(Ok(RegistryError::NotOwner)));
}

#[test]
fn test_only_owner_can_approve() {
    let test = RegistryTest::setup();
    let token_id = test.mint();

    let result = test
        .registry_client
        .try_approve(&test.spender, &test.spender, &token_id);
    assert_eq!(result, Err(Ok(RegistryError::NotOwner)));
    assert_eq!(test.registry_client.get_approved(&token_id), None);
}

#[test]
fn test_owner_transfers_directly() {
    let test = RegistryTest::setup();
    let token_id = test.mint();

    test.registry_client
        .transfer(&test.owner, &test.owner, &test.recipient, &token_id);
    assert_eq!(test.registry_client.owner_of(&token_id), test.recipient);

    // Previous owner lost the right to move it
    let result =
        test.registry_client
            .try_transfer(&test.owner, &test.recipient, &test.owner, &token_id);
    assert_eq!(result, Err(Ok(RegistryError::NotApproved)));
}

#[test]
fn test_collection_identity() {
    let test = RegistryTest::setup();

    assert_eq!(
        test.registry_client.name(),
        String::from_str(&test.env, "Titled Property")
    );
    assert_eq!(
        test.registry_client.symbol(),
        String::from_str(&test.env, "PROP")
    );
    assert_eq!(test.registry_client.total_supply(), 0);
}
