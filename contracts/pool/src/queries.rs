use cosmwasm_std::{ensure, Coin, Deps};

use amm::pool::{DepositSimulationResponse, PoolInfoResponse};

use crate::error::ContractError;
use crate::helpers::deposit_amounts_in_pool_order;
use crate::math;
use crate::state::{POOL, TOTAL_LP_SUPPLY};

/// Queries the pool state. Returns a [PoolInfoResponse].
pub(crate) fn query_pool(deps: Deps) -> Result<PoolInfoResponse, ContractError> {
    Ok(PoolInfoResponse {
        pool_info: POOL.load(deps.storage)?,
        total_share: TOTAL_LP_SUPPLY.load(deps.storage)?,
    })
}

/// Simulates a deposit against the current reserves, without mutating any
/// state. Returns the shares the pool would mint from the raw amounts next to
/// the decimal-adjusted reference, so callers can measure the divergence
/// between the two. Returns a [DepositSimulationResponse].
pub(crate) fn query_simulate_deposit(
    deps: Deps,
    deposits: Vec<Coin>,
) -> Result<DepositSimulationResponse, ContractError> {
    let pool = POOL.load(deps.storage)?;
    let total_share = TOTAL_LP_SUPPLY.load(deps.storage)?;

    ensure!(!deposits.is_empty(), ContractError::EmptyAssets);
    ensure!(
        deposits.iter().all(|asset| pool
            .asset_denoms
            .iter()
            .any(|denom| denom == &asset.denom)),
        ContractError::AssetMismatch
    );

    let amounts = deposit_amounts_in_pool_order(&deposits, &pool.asset_denoms);
    let reserves = [pool.assets[0].amount, pool.assets[1].amount];
    let decimals = [pool.asset_decimals[0], pool.asset_decimals[1]];

    Ok(DepositSimulationResponse {
        lp_shares: math::compute_lp_mint_amount(amounts, reserves, total_share)?,
        decimal_adjusted_lp_shares: math::compute_lp_mint_amount_normalized(
            amounts,
            reserves,
            decimals,
            total_share,
        )?,
    })
}
