use cosmwasm_schema::cw_serde;
use cosmwasm_std::{
    to_binary, Addr, CosmosMsg, QuerierWrapper, QueryRequest, StdResult, WasmMsg, WasmQuery,
};

use crate::{
    msg::{ExecuteMsg, QueryMsg},
    state::{Config, SaleStatus},
};

/// WhitelistMintContract is a wrapper around Addr that provides helpers
/// for working with this contract.
#[cw_serde]
pub struct WhitelistMintContract(pub Addr);

impl WhitelistMintContract {
    pub fn addr(&self) -> Addr {
        self.0.clone()
    }

    pub fn call<T: Into<ExecuteMsg>>(&self, msg: T) -> StdResult<CosmosMsg> {
        let msg = to_binary(&msg.into())?;
        Ok(WasmMsg::Execute {
            contract_addr: self.addr().into(),
            msg,
            funds: vec![],
        }
        .into())
    }

    pub fn config(&self, querier: &QuerierWrapper) -> StdResult<Config> {
        self.query(querier, QueryMsg::Config {})
    }

    pub fn sale_status(&self, querier: &QuerierWrapper) -> StdResult<SaleStatus> {
        self.query(querier, QueryMsg::SaleStatus {})
    }

    pub fn mint_count(&self, querier: &QuerierWrapper, address: String) -> StdResult<u32> {
        self.query(querier, QueryMsg::MintCount { address })
    }

    pub fn remaining_supply(&self, querier: &QuerierWrapper) -> StdResult<u32> {
        self.query(querier, QueryMsg::RemainingSupply {})
    }

    pub fn is_whitelisted(
        &self,
        querier: &QuerierWrapper,
        address: String,
        proof: Vec<String>,
    ) -> StdResult<bool> {
        self.query(querier, QueryMsg::IsWhitelisted { address, proof })
    }

    fn query<T: serde::de::DeserializeOwned>(
        &self,
        querier: &QuerierWrapper,
        msg: QueryMsg,
    ) -> StdResult<T> {
        querier.query(&QueryRequest::Wasm(WasmQuery::Smart {
            contract_addr: self.addr().into(),
            msg: to_binary(&msg)?,
        }))
    }
}
