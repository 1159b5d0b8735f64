use cosmwasm_std::{
    coin, ensure, entry_point, to_json_binary, Binary, Deps, DepsMut, Env, MessageInfo, Response,
    Uint128,
};
use cw2::{get_contract_version, set_contract_version};
use semver::Version;

use amm::constants::LP_SYMBOL;
use amm::pool::{ExecuteMsg, InstantiateMsg, MigrateMsg, PoolInfo, PoolStatus, QueryMsg};
use amm::tokenfactory;

use crate::error::ContractError;
use crate::helpers::validate_pool_identifier;
use crate::state::{POOL, TOTAL_LP_SUPPLY};
use crate::{liquidity, manager, queries};

// version info for migration info
const CONTRACT_NAME: &str = "amm-labs_pool";
const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

/// The maximum decimal precision the pool accepts for an asset.
const MAX_ASSET_DECIMALS: u8 = 18u8;

#[entry_point]
pub fn instantiate(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;
    cw_ownable::initialize_owner(deps.storage, deps.api, Some(info.sender.as_str()))?;

    validate_pool_identifier(&msg.pool_identifier)?;

    ensure!(
        msg.asset_denoms.len() == 2
            && msg.asset_denoms[0] != msg.asset_denoms[1]
            && msg.asset_decimals.len() == 2
            && msg
                .asset_decimals
                .iter()
                .all(|decimals| *decimals <= MAX_ASSET_DECIMALS),
        ContractError::InvalidPoolAssets
    );

    let lp_subdenom = format!("{}.{}", msg.pool_identifier, LP_SYMBOL);
    let lp_denom = format!("{}/{}/{}", amm::coin::FACTORY_PREFIX, env.contract.address, lp_subdenom);

    let assets = msg
        .asset_denoms
        .iter()
        .map(|denom| coin(0u128, denom))
        .collect();

    POOL.save(
        deps.storage,
        &PoolInfo {
            pool_identifier: msg.pool_identifier.clone(),
            asset_denoms: msg.asset_denoms,
            asset_decimals: msg.asset_decimals,
            assets,
            lp_denom: lp_denom.clone(),
            status: PoolStatus::default(),
        },
    )?;
    TOTAL_LP_SUPPLY.save(deps.storage, &Uint128::zero())?;

    Ok(Response::default()
        .add_message(tokenfactory::create_denom(env.contract.address, lp_subdenom))
        .add_attributes(vec![
            ("action", "instantiate".to_string()),
            ("pool_identifier", msg.pool_identifier),
            ("lp_denom", lp_denom),
        ]))
}

#[entry_point]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::ProvideLiquidity { receiver } => {
            liquidity::commands::provide_liquidity(deps, env, info, receiver)
        }
        ExecuteMsg::WithdrawLiquidity => liquidity::commands::withdraw_liquidity(deps, env, info),
        ExecuteMsg::UpdateStatus {
            deposits_enabled,
            withdrawals_enabled,
        } => manager::update_config::update_status(deps, &info, deposits_enabled, withdrawals_enabled),
        ExecuteMsg::UpdateOwnership(action) => {
            cw_ownable::update_ownership(deps, &env.block, &info.sender, action)?;
            Ok(Response::default().add_attributes(vec![("action", "update_ownership".to_string())]))
        }
    }
}

#[entry_point]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> Result<Binary, ContractError> {
    match msg {
        QueryMsg::Pool => Ok(to_json_binary(&queries::query_pool(deps)?)?),
        QueryMsg::SimulateDeposit { deposits } => Ok(to_json_binary(
            &queries::query_simulate_deposit(deps, deposits)?,
        )?),
        QueryMsg::Ownership {} => Ok(to_json_binary(&cw_ownable::get_ownership(deps.storage)?)?),
    }
}

#[entry_point]
pub fn migrate(deps: DepsMut, _env: Env, _msg: MigrateMsg) -> Result<Response, ContractError> {
    let version: Version = CONTRACT_VERSION.parse()?;
    let storage_version: Version = get_contract_version(deps.storage)?.version.parse()?;

    if storage_version >= version {
        return Err(ContractError::MigrateInvalidVersion {
            new_version: version,
            current_version: storage_version,
        });
    }

    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;
    Ok(Response::default())
}
