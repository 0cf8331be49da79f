pub mod allowlist;
pub mod contract;
mod error;
pub mod guards;
mod helpers;
pub mod migrate;
pub mod msg;
pub mod query;
pub mod state;

pub use crate::error::ContractError;
pub use helpers::CartoonsMinterContract;
