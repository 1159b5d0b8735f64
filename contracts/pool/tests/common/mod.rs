#![allow(dead_code)]

pub mod suite;

use cosmwasm_std::testing::mock_env;
use cosmwasm_std::{DepsMut, MessageInfo, Response};

use amm::pool::InstantiateMsg;
use pool::contract::instantiate;
use pool::ContractError;
use test_utils::common_constants::{DECIMALS_18, DECIMALS_6, DENOM_UUSDC, DENOM_UWETH};

pub const POOL_IDENTIFIER: &str = "uusdc.uweth";

/// Instantiates the 6/18 decimals pool used across the tests.
pub fn mock_instantiation(deps: DepsMut, info: MessageInfo) -> Result<Response, ContractError> {
    let msg = InstantiateMsg {
        pool_identifier: POOL_IDENTIFIER.to_string(),
        asset_denoms: vec![DENOM_UUSDC.to_string(), DENOM_UWETH.to_string()],
        asset_decimals: vec![DECIMALS_6, DECIMALS_18],
    };

    instantiate(deps, mock_env(), info, msg)
}
