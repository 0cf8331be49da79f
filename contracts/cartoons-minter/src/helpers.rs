use cosmwasm_schema::cw_serde;
use cosmwasm_std::{
    to_binary, Addr, Coin, QuerierWrapper, QueryRequest, StdResult, WasmMsg, WasmQuery,
};
use sg_std::CosmosMsg;

use crate::msg::{AllowedMintAmountResponse, ExecuteMsg, QueryMsg};

/// CartoonsMinterContract is a wrapper around Addr that provides a lot of helpers
#[cw_serde]
pub struct CartoonsMinterContract(pub Addr);

impl CartoonsMinterContract {
    pub fn addr(&self) -> Addr {
        self.0.clone()
    }

    pub fn call_with_funds<T: Into<ExecuteMsg>>(
        &self,
        msg: T,
        funds: Vec<Coin>,
    ) -> StdResult<CosmosMsg> {
        let msg = to_binary(&msg.into())?;
        Ok(WasmMsg::Execute {
            contract_addr: self.addr().into(),
            msg,
            funds,
        }
        .into())
    }

    pub fn public_mint(&self, quantity: u32, funds: Vec<Coin>) -> StdResult<CosmosMsg> {
        self.call_with_funds(ExecuteMsg::PublicMint { quantity }, funds)
    }

    pub fn whitelist_mint(
        &self,
        proof: Vec<String>,
        quantity: u32,
        funds: Vec<Coin>,
    ) -> StdResult<CosmosMsg> {
        self.call_with_funds(ExecuteMsg::WhitelistMint { proof, quantity }, funds)
    }

    pub fn allowed_mint_amount(
        &self,
        querier: &QuerierWrapper,
        proof: Vec<String>,
        address: String,
    ) -> StdResult<AllowedMintAmountResponse> {
        querier.query(&QueryRequest::Wasm(WasmQuery::Smart {
            contract_addr: self.addr().into(),
            msg: to_binary(&QueryMsg::GetAllowedMintAmount { proof, address })?,
        }))
    }
}
