#![cfg(test)]

use super::EscrowTest;
use common::escrow::types::EscrowError as Error;

#[test]
fn test_updates_inspection_status() {
    let test: EscrowTest = EscrowTest::setup();

    test.escrow_client
        .update_inspection_status(&1, &test.inspector, &true);

    assert!(test.escrow_client.inspection_passed(&1));
}

#[test]
fn test_last_inspection_result_wins() {
    let test: EscrowTest = EscrowTest::setup();

    test.escrow_client
        .update_inspection_status(&1, &test.inspector, &true);
    test.escrow_client
        .update_inspection_status(&1, &test.inspector, &false);

    assert!(!test.escrow_client.inspection_passed(&1));
}

#[test]
fn test_only_inspector_updates_status() {
    let test: EscrowTest = EscrowTest::setup();

    for caller in [&test.seller, &test.buyer, &test.lender] {
        let result = test
            .escrow_client
            .try_update_inspection_status(&1, caller, &true);
        assert_eq!(result, Err(Ok(Error::Unauthorized)));
    }

    assert!(!test.escrow_client.inspection_passed(&1));
}

#[test]
fn test_inspection_requires_listing() {
    let test: EscrowTest = EscrowTest::setup();

    let result = test
        .escrow_client
        .try_update_inspection_status(&3, &test.inspector, &true);
    assert_eq!(result, Err(Ok(Error::NotListed)));
}
