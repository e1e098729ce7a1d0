use common::{escrow::types::EscrowConfig, registry::interface::PropertyRegistryClient};
use soroban_sdk::{token, Env};

pub fn get_registry_client<'a>(env: &Env, config: &EscrowConfig) -> PropertyRegistryClient<'a> {
    PropertyRegistryClient::new(env, &config.registry)
}

pub fn get_payment_client<'a>(env: &Env, config: &EscrowConfig) -> token::Client<'a> {
    token::Client::new(env, &config.payment_token)
}
