use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Uint128};
use cw_storage_plus::{Item, Map};

#[cw_serde]
pub struct Config {
    /// Only address allowed to toggle phases, rotate roots and withdraw
    pub owner: Addr,
    /// Price per unit in the native denom, same for both mint paths
    pub unit_price: Uint128,
    /// Total supply ceiling across both mint paths
    pub max_supply: u32,
    /// Max quantity per public mint
    pub max_per_tx: u32,
}

pub const CONFIG: Item<Config> = Item::new("config");

/// Active allowlist. Root and cap are replaced together.
#[cw_serde]
pub struct WhitelistRoot {
    /// Lowercase hex, no prefix
    pub root: String,
    /// Cumulative whitelist claims allowed per address
    pub cap: u32,
}

pub const WHITELIST_ROOT: Item<WhitelistRoot> = Item::new("whitelist-root");

#[cw_serde]
#[derive(Default)]
pub struct MintPhases {
    pub whitelist_active: bool,
    pub public_active: bool,
}

pub const MINT_PHASES: Item<MintPhases> = Item::new("mint-phases");

pub const TOTAL_MINTED: Item<u32> = Item::new("total-minted");

/// Whitelist claims per address across every root ever planted
pub const CLAIMED: Map<&Addr, u32> = Map::new("claimed");

pub const COLLECTION: Item<Addr> = Item::new("collection");
