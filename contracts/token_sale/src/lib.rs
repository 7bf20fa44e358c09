#![no_std]

pub mod caps;
pub mod collaborators;
mod contract;
pub mod controller;
mod errors;
pub mod events;
pub mod fixed_point;
pub mod ledger;
pub mod logging;
mod purchase;
mod storage;
mod types;
mod vault;
pub mod window;

#[cfg(test)]
mod test_properties;

pub use contract::{TokenSaleContract, TokenSaleContractClient};
pub use errors::{get_suggestion, Error};
pub use storage::Sale;
pub use types::*;
