use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::Uint128;
use sg721::{CollectionInfo, RoyaltyInfoResponse};

use crate::state::MintPhases;

#[cw_serde]
pub struct InstantiateMsg {
    /// Allowlist root, hex with or without `0x`
    pub merkle_root: String,
    /// Cumulative whitelist claims allowed per address under this root
    pub max_whitelist_claim: u32,
    /// Price per unit in the native denom
    pub unit_price: Uint128,
    pub max_supply: u32,
    /// Max quantity per public mint
    pub max_per_tx: u32,
    /// Code id of the sg721 collection this minter instantiates
    pub collection_code_id: u64,
    pub collection_name: String,
    pub collection_symbol: String,
    pub collection_info: CollectionInfo<RoyaltyInfoResponse>,
}

#[cw_serde]
pub enum ExecuteMsg {
    /// Mint against the active allowlist. Payment must equal
    /// `unit_price * quantity`.
    WhitelistMint { proof: Vec<String>, quantity: u32 },
    /// Mint without an allowlist, up to `max_per_tx` per call
    PublicMint { quantity: u32 },
    /// Owner only
    SetWhitelistMintActive { active: bool },
    /// Owner only
    SetPublicMintActive { active: bool },
    /// Replace the allowlist root and its cap in one step.
    /// Existing claim counts carry over.
    PlantNewRoot { root: String, cap: u32 },
    /// Send the whole contract balance to the owner
    WithdrawEth {},
    /// Hand ownership to another address
    TransferOwnership { new_owner: String },
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    /// How many whitelist units `address` can still claim with `proof`
    #[returns(AllowedMintAmountResponse)]
    GetAllowedMintAmount { proof: Vec<String>, address: String },
    #[returns(String)]
    Owner {},
    #[returns(ConfigResponse)]
    Config {},
    #[returns(WhitelistRootResponse)]
    WhitelistRoot {},
    #[returns(MintPhasesResponse)]
    MintPhases {},
    #[returns(TotalMintedResponse)]
    TotalMinted {},
    /// Whitelist units ever claimed by `address`
    #[returns(u32)]
    ClaimCount { address: String },
    #[returns(CollectionResponse)]
    Collection {},
}

#[cw_serde]
pub struct MigrateMsg {}

#[cw_serde]
pub struct AllowedMintAmountResponse {
    /// `false` when the proof does not place `address` in the active root
    pub member: bool,
    /// Zero for non-members and for members who used their allowance
    pub amount: u32,
}

#[cw_serde]
pub struct ConfigResponse {
    pub owner: String,
    pub unit_price: Uint128,
    pub max_supply: u32,
    pub max_per_tx: u32,
}

#[cw_serde]
pub struct WhitelistRootResponse {
    pub root: String,
    pub cap: u32,
}

#[cw_serde]
pub struct MintPhasesResponse {
    pub phases: MintPhases,
}

#[cw_serde]
pub struct TotalMintedResponse {
    pub total_minted: u32,
    pub max_supply: u32,
}

#[cw_serde]
pub struct CollectionResponse {
    pub collection: String,
}
