#![cfg(test)]

use super::EscrowTest;
use common::escrow::types::EscrowError as Error;
use soroban_sdk::Env;

#[test]
fn test_returns_configured_roles() {
    let test: EscrowTest = EscrowTest::setup_initialized();

    assert_eq!(test.escrow_client.registry(), test.registry_client.address);
    assert_eq!(test.escrow_client.seller(), test.seller);
    assert_eq!(test.escrow_client.inspector(), test.inspector);
    assert_eq!(test.escrow_client.lender(), test.lender);
    assert_eq!(
        test.escrow_client.config().payment_token,
        test.token_client.address
    );
}

#[test]
fn test_initialize_only_once() {
    let test: EscrowTest = EscrowTest::setup_initialized();

    let result = test.escrow_client.try_initialize(
        &test.registry_client.address,
        &test.buyer,
        &test.inspector,
        &test.lender,
        &test.token_client.address,
    );
    assert_eq!(result, Err(Ok(Error::AlreadyInitialized)));
    assert_eq!(test.escrow_client.seller(), test.seller);
}

#[test]
fn test_uninitialized_escrow_rejects_calls() {
    let test: EscrowTest = EscrowTest::setup_no_init(Env::default());

    assert_eq!(
        test.escrow_client.try_seller(),
        Err(Ok(Error::NotInitialized))
    );
    assert_eq!(
        test.escrow_client.try_get_balance(),
        Err(Ok(Error::NotInitialized))
    );
    assert!(!test.escrow_client.is_listed(&1));
}
