#[cfg(not(feature = "library"))]
use cosmwasm_std::entry_point;
use cosmwasm_std::{
    to_binary, Addr, BankMsg, DepsMut, Empty, Env, Event, MessageInfo, Reply, StdError,
    StdResult, Storage, WasmMsg,
};
use cw2::set_contract_version;
use cw721_base::{ExecuteMsg as Cw721ExecuteMsg, Extension, MintMsg};
use cw_utils::{nonpayable, parse_reply_instantiate_data};
use sg721::InstantiateMsg as Sg721InstantiateMsg;
use sg_std::{CosmosMsg, Response, SubMsg, NATIVE_DENOM};

use crate::allowlist::{
    current_root, new_root, record_claim, remaining_allowance, rotate_root, Allowance,
};
use crate::error::ContractError;
use crate::guards::{exact_payment, mint_price, only_origin, only_owner};
use crate::msg::{ExecuteMsg, InstantiateMsg};
use crate::state::{
    Config, MintPhases, COLLECTION, CONFIG, MINT_PHASES, TOTAL_MINTED, WHITELIST_ROOT,
};

// version info for migration info
pub const CONTRACT_NAME: &str = "crates.io:cartoons-minter";
pub const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

const INIT_COLLECTION_REPLY_ID: u64 = 1;

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    nonpayable(&info)?;
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    if msg.unit_price.is_zero() {
        return Err(StdError::generic_err("unit_price must be greater than zero").into());
    }
    if msg.max_supply == 0 {
        return Err(StdError::generic_err("max_supply must be greater than zero").into());
    }
    if msg.max_per_tx == 0 {
        return Err(StdError::generic_err("max_per_tx must be greater than zero").into());
    }

    let config = Config {
        owner: info.sender.clone(),
        unit_price: msg.unit_price,
        max_supply: msg.max_supply,
        max_per_tx: msg.max_per_tx,
    };
    CONFIG.save(deps.storage, &config)?;

    let root = new_root(&msg.merkle_root, msg.max_whitelist_claim)?;
    WHITELIST_ROOT.save(deps.storage, &root)?;
    MINT_PHASES.save(deps.storage, &MintPhases::default())?;
    TOTAL_MINTED.save(deps.storage, &0u32)?;

    let wasm_msg = WasmMsg::Instantiate {
        code_id: msg.collection_code_id,
        msg: to_binary(&Sg721InstantiateMsg {
            name: msg.collection_name,
            symbol: msg.collection_symbol,
            minter: env.contract.address.to_string(),
            collection_info: msg.collection_info,
        })?,
        funds: vec![],
        admin: Some(info.sender.to_string()),
        label: "Cartoons Collection".to_string(),
    };
    let submsg = SubMsg::reply_on_success(wasm_msg, INIT_COLLECTION_REPLY_ID);

    Ok(Response::new()
        .add_attribute("action", "instantiate")
        .add_attribute("owner", info.sender)
        .add_attribute("merkle_root", root.root)
        .add_attribute("max_whitelist_claim", root.cap.to_string())
        .add_submessage(submsg))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn reply(deps: DepsMut, _env: Env, msg: Reply) -> Result<Response, ContractError> {
    if msg.id != INIT_COLLECTION_REPLY_ID {
        return Err(ContractError::InvalidReplyID {});
    }

    let reply = parse_reply_instantiate_data(msg);
    match reply {
        Ok(res) => {
            let collection = deps.api.addr_validate(&res.contract_address)?;
            COLLECTION.save(deps.storage, &collection)?;

            Ok(Response::default()
                .add_attribute("action", "init_collection_reply")
                .add_attribute("collection", collection))
        }
        Err(_) => Err(ContractError::ReplyOnSuccess {}),
    }
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::WhitelistMint { proof, quantity } => {
            execute_whitelist_mint(deps, info, proof, quantity)
        }
        ExecuteMsg::PublicMint { quantity } => execute_public_mint(deps, info, quantity),
        ExecuteMsg::SetWhitelistMintActive { active } => {
            execute_set_whitelist_mint_active(deps, info, active)
        }
        ExecuteMsg::SetPublicMintActive { active } => {
            execute_set_public_mint_active(deps, info, active)
        }
        ExecuteMsg::PlantNewRoot { root, cap } => execute_plant_new_root(deps, info, root, cap),
        ExecuteMsg::WithdrawEth {} => execute_withdraw(deps, env, info),
        ExecuteMsg::TransferOwnership { new_owner } => {
            execute_transfer_ownership(deps, info, new_owner)
        }
    }
}

/// Mint against the active allowlist. Everything is validated before the
/// first write so a rejected call leaves no trace.
pub fn execute_whitelist_mint(
    deps: DepsMut,
    info: MessageInfo,
    proof: Vec<String>,
    quantity: u32,
) -> Result<Response, ContractError> {
    only_origin(deps.as_ref(), &info)?;

    if !MINT_PHASES.load(deps.storage)?.whitelist_active {
        return Err(ContractError::WhitelistMintNotActive {});
    }

    let root = current_root(deps.storage)?;
    let remaining = match remaining_allowance(deps.storage, &root, &proof, &info.sender)? {
        Allowance::NotMember => return Err(ContractError::InvalidProof {}),
        Allowance::Member(remaining) => remaining,
    };
    if quantity == 0 || quantity > remaining {
        return Err(ContractError::RequestedClaimAmountInvalid {});
    }

    let config = CONFIG.load(deps.storage)?;
    let (minted, total) = check_supply(deps.storage, &config, quantity)?;
    let collection = COLLECTION.load(deps.storage)?;
    let paid = exact_payment(&info, mint_price(config.unit_price, quantity)?)?;

    TOTAL_MINTED.save(deps.storage, &total)?;
    let claimed = record_claim(deps.storage, &info.sender, quantity)?;

    let event = Event::new("whitelist-mint")
        .add_attribute("minter", info.sender.to_string())
        .add_attribute("quantity", quantity.to_string())
        .add_attribute("paid", paid.to_string())
        .add_attribute("claimed", claimed.to_string())
        .add_attribute("cap", root.cap.to_string())
        .add_attribute("total_minted", total.to_string());

    Ok(Response::new()
        .add_messages(mint_msgs(&collection, &info.sender, minted, total)?)
        .add_event(event))
}

pub fn execute_public_mint(
    deps: DepsMut,
    info: MessageInfo,
    quantity: u32,
) -> Result<Response, ContractError> {
    only_origin(deps.as_ref(), &info)?;

    if !MINT_PHASES.load(deps.storage)?.public_active {
        return Err(ContractError::PublicMintNotActive {});
    }

    let config = CONFIG.load(deps.storage)?;
    if quantity == 0 {
        return Err(ContractError::InvalidMintAmount {});
    }
    if quantity > config.max_per_tx {
        return Err(ContractError::MintAmountExceedsLimitPerTx {});
    }

    let (minted, total) = check_supply(deps.storage, &config, quantity)?;
    let collection = COLLECTION.load(deps.storage)?;
    let paid = exact_payment(&info, mint_price(config.unit_price, quantity)?)?;

    TOTAL_MINTED.save(deps.storage, &total)?;

    let event = Event::new("public-mint")
        .add_attribute("minter", info.sender.to_string())
        .add_attribute("quantity", quantity.to_string())
        .add_attribute("paid", paid.to_string())
        .add_attribute("total_minted", total.to_string());

    Ok(Response::new()
        .add_messages(mint_msgs(&collection, &info.sender, minted, total)?)
        .add_event(event))
}

/// Returns the supply before and after minting `quantity`
fn check_supply(
    storage: &dyn Storage,
    config: &Config,
    quantity: u32,
) -> Result<(u32, u32), ContractError> {
    let minted = TOTAL_MINTED.load(storage)?;
    match minted.checked_add(quantity) {
        Some(total) if total <= config.max_supply => Ok((minted, total)),
        _ => Err(ContractError::MaxSupplyExceeded {}),
    }
}

/// One collection mint per unit, token ids continue from the previous supply
fn mint_msgs(collection: &Addr, owner: &Addr, from: u32, to: u32) -> StdResult<Vec<CosmosMsg>> {
    (from + 1..=to)
        .map(|token_id| -> StdResult<CosmosMsg> {
            let mint_msg = Cw721ExecuteMsg::<Extension, Empty>::Mint(MintMsg::<Extension> {
                token_id: token_id.to_string(),
                owner: owner.to_string(),
                token_uri: None,
                extension: None,
            });
            Ok(WasmMsg::Execute {
                contract_addr: collection.to_string(),
                msg: to_binary(&mint_msg)?,
                funds: vec![],
            }
            .into())
        })
        .collect()
}

pub fn execute_set_whitelist_mint_active(
    deps: DepsMut,
    info: MessageInfo,
    active: bool,
) -> Result<Response, ContractError> {
    only_owner(&CONFIG.load(deps.storage)?, &info)?;

    let phases = MINT_PHASES.update(deps.storage, |mut phases| -> StdResult<_> {
        phases.whitelist_active = active;
        Ok(phases)
    })?;

    let event = Event::new("set-whitelist-mint-active")
        .add_attribute("active", phases.whitelist_active.to_string())
        .add_attribute("sender", info.sender);
    Ok(Response::new().add_event(event))
}

pub fn execute_set_public_mint_active(
    deps: DepsMut,
    info: MessageInfo,
    active: bool,
) -> Result<Response, ContractError> {
    only_owner(&CONFIG.load(deps.storage)?, &info)?;

    let phases = MINT_PHASES.update(deps.storage, |mut phases| -> StdResult<_> {
        phases.public_active = active;
        Ok(phases)
    })?;

    let event = Event::new("set-public-mint-active")
        .add_attribute("active", phases.public_active.to_string())
        .add_attribute("sender", info.sender);
    Ok(Response::new().add_event(event))
}

pub fn execute_plant_new_root(
    deps: DepsMut,
    info: MessageInfo,
    root: String,
    cap: u32,
) -> Result<Response, ContractError> {
    only_owner(&CONFIG.load(deps.storage)?, &info)?;

    let root = new_root(&root, cap)?;
    rotate_root(deps.storage, &root)?;

    let event = Event::new("plant-new-root")
        .add_attribute("root", root.root)
        .add_attribute("cap", root.cap.to_string())
        .add_attribute("sender", info.sender);
    Ok(Response::new().add_event(event))
}

/// Sends the whole native balance to the owner
pub fn execute_withdraw(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    only_owner(&config, &info)?;

    let balance = deps
        .querier
        .query_balance(&env.contract.address, NATIVE_DENOM)?;

    let event = Event::new("withdraw")
        .add_attribute("recipient", config.owner.to_string())
        .add_attribute("amount", balance.amount.to_string());

    let mut res = Response::new().add_event(event);
    if !balance.amount.is_zero() {
        res = res.add_message(BankMsg::Send {
            to_address: config.owner.to_string(),
            amount: vec![balance],
        });
    }
    Ok(res)
}

pub fn execute_transfer_ownership(
    deps: DepsMut,
    info: MessageInfo,
    new_owner: String,
) -> Result<Response, ContractError> {
    let mut config = CONFIG.load(deps.storage)?;
    only_owner(&config, &info)?;

    config.owner = deps.api.addr_validate(&new_owner)?;
    CONFIG.save(deps.storage, &config)?;

    let event = Event::new("transfer-ownership")
        .add_attribute("new_owner", config.owner)
        .add_attribute("sender", info.sender);
    Ok(Response::new().add_event(event))
}
