//! Interfaces of the contracts the sale calls out to, and the checks built on
//! them. Each trait only generates a client; the implementations live
//! elsewhere (see the `sale_token` contract for an issuer).

use crate::errors::Error;
use crate::types::SaleConfig;
use soroban_sdk::{contractclient, token, Address, Env};

/// Credits a token entitlement to a contributor, by minting or by transfer
/// from a pre-funded balance.
#[contractclient(name = "TokenIssuerClient")]
pub trait TokenIssuer {
    fn credit_tokens(env: Env, to: Address, amount: i128);
}

#[contractclient(name = "ControllerRegistryClient")]
pub trait ControllerRegistry {
    fn is_controller(env: Env, caller: Address) -> bool;
}

#[contractclient(name = "AllowListClient")]
pub trait AllowList {
    fn is_allowed(env: Env, account: Address) -> bool;
}

/// Require `caller` to have signed and to hold the controller role.
pub fn require_controller(env: &Env, config: &SaleConfig, caller: &Address) -> Result<(), Error> {
    caller.require_auth();
    if is_controller(env, config, caller) {
        Ok(())
    } else {
        Err(Error::Unauthorized)
    }
}

pub fn is_controller(env: &Env, config: &SaleConfig, caller: &Address) -> bool {
    match &config.controller_registry {
        Some(registry) => ControllerRegistryClient::new(env, registry).is_controller(caller),
        None => *caller == config.controller,
    }
}

pub fn require_allowed(env: &Env, config: &SaleConfig, contributor: &Address) -> Result<(), Error> {
    match &config.contributor_gate {
        Some(gate) if !AllowListClient::new(env, gate).is_allowed(contributor) => {
            Err(Error::NotAllowListed)
        }
        _ => Ok(()),
    }
}

/// Move `amount` of the native asset from `from` into the sale's custody.
pub fn pull_native(env: &Env, config: &SaleConfig, from: &Address, amount: i128) {
    token::Client::new(env, &config.native_asset).transfer(
        from,
        &env.current_contract_address(),
        &amount,
    );
}

/// Pay `amount` of the native asset out of custody to `to`.
pub fn push_native(env: &Env, config: &SaleConfig, to: &Address, amount: i128) {
    token::Client::new(env, &config.native_asset).transfer(
        &env.current_contract_address(),
        to,
        &amount,
    );
}

/// Ask the issuer to credit `amount` to `to`. Any failure on the issuer side
/// surfaces as `IssuanceFailed`.
pub fn credit_tokens(env: &Env, config: &SaleConfig, to: &Address, amount: i128) -> Result<(), Error> {
    match TokenIssuerClient::new(env, &config.token_issuer).try_credit_tokens(to, &amount) {
        Ok(Ok(())) => Ok(()),
        _ => Err(Error::IssuanceFailed),
    }
}
