#[cfg(not(feature = "library"))]
use cosmwasm_std::entry_point;
use cosmwasm_std::{to_binary, Binary, Deps, Env, StdResult};

use crate::{
    allowlist::{claimed, current_root, remaining_allowance},
    msg::{
        AllowedMintAmountResponse, CollectionResponse, ConfigResponse, MintPhasesResponse,
        QueryMsg, TotalMintedResponse, WhitelistRootResponse,
    },
    state::{COLLECTION, CONFIG, MINT_PHASES, TOTAL_MINTED},
};

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::GetAllowedMintAmount { proof, address } => {
            to_binary(&query_allowed_mint_amount(deps, proof, address)?)
        }
        QueryMsg::Owner {} => to_binary(&query_owner(deps)?),
        QueryMsg::Config {} => to_binary(&query_config(deps)?),
        QueryMsg::WhitelistRoot {} => to_binary(&query_whitelist_root(deps)?),
        QueryMsg::MintPhases {} => to_binary(&query_mint_phases(deps)?),
        QueryMsg::TotalMinted {} => to_binary(&query_total_minted(deps)?),
        QueryMsg::ClaimCount { address } => to_binary(&query_claim_count(deps, address)?),
        QueryMsg::Collection {} => to_binary(&query_collection(deps)?),
    }
}

pub fn query_allowed_mint_amount(
    deps: Deps,
    proof: Vec<String>,
    address: String,
) -> StdResult<AllowedMintAmountResponse> {
    let addr = deps.api.addr_validate(&address)?;
    let root = current_root(deps.storage)?;
    let allowance = remaining_allowance(deps.storage, &root, &proof, &addr)?;
    Ok(AllowedMintAmountResponse {
        member: allowance.is_member(),
        amount: allowance.amount(),
    })
}

pub fn query_owner(deps: Deps) -> StdResult<String> {
    let config = CONFIG.load(deps.storage)?;
    Ok(config.owner.to_string())
}

pub fn query_config(deps: Deps) -> StdResult<ConfigResponse> {
    let config = CONFIG.load(deps.storage)?;
    Ok(ConfigResponse {
        owner: config.owner.to_string(),
        unit_price: config.unit_price,
        max_supply: config.max_supply,
        max_per_tx: config.max_per_tx,
    })
}

pub fn query_whitelist_root(deps: Deps) -> StdResult<WhitelistRootResponse> {
    let root = current_root(deps.storage)?;
    Ok(WhitelistRootResponse {
        root: root.root,
        cap: root.cap,
    })
}

pub fn query_mint_phases(deps: Deps) -> StdResult<MintPhasesResponse> {
    let phases = MINT_PHASES.load(deps.storage)?;
    Ok(MintPhasesResponse { phases })
}

pub fn query_total_minted(deps: Deps) -> StdResult<TotalMintedResponse> {
    let total_minted = TOTAL_MINTED.load(deps.storage)?;
    let config = CONFIG.load(deps.storage)?;
    Ok(TotalMintedResponse {
        total_minted,
        max_supply: config.max_supply,
    })
}

pub fn query_claim_count(deps: Deps, address: String) -> StdResult<u32> {
    let addr = deps.api.addr_validate(&address)?;
    claimed(deps.storage, &addr)
}

fn query_collection(deps: Deps) -> StdResult<CollectionResponse> {
    let collection = COLLECTION.load(deps.storage)?;
    Ok(CollectionResponse {
        collection: collection.to_string(),
    })
}
