use cosmwasm_std::{ensure, Uint128};

use amm::lp_common::MINIMUM_LIQUIDITY_AMOUNT;
use amm::U256;

use crate::error::ContractError;

/// Integer square root, i.e. the largest `r` such that `r * r <= value`.
///
/// Newton-Raphson on integers: the estimate starts at `value / 2 + 1` and
/// tightens from above on every iteration, so the loop terminates after
/// O(log value) steps. No floating point is involved at any step, as the
/// inputs are products of raw token amounts and exceed what a float mantissa
/// can hold without precision loss.
pub fn isqrt(value: U256) -> U256 {
    if value < U256::from(2u8) {
        return value;
    }

    let mut z = value;
    let mut x = value / U256::from(2u8) + U256::one();

    while x < z {
        z = x;
        x = (value / x + x) / U256::from(2u8);
    }

    z
}

/// Computes the amount of LP shares to mint for a deposit, operating on raw
/// token amounts.
///
/// On the first deposit the pool mints the geometric mean of the two
/// deposited amounts minus [MINIMUM_LIQUIDITY_AMOUNT], which remains locked
/// in the pool. On subsequent deposits it mints the most constraining
/// deposit/reserve ratio. Amounts are used as sent, in each asset's native
/// raw units; this function never consults the assets' decimal precision.
///
/// Updating the reserves and the share supply is up to the caller.
pub fn compute_lp_mint_amount(
    amounts: [Uint128; 2],
    reserves: [Uint128; 2],
    total_share: Uint128,
) -> Result<Uint128, ContractError> {
    if total_share.is_zero() {
        let share = Uint128::new(
            isqrt(
                U256::from(amounts[0].u128())
                    .checked_mul(U256::from(amounts[1].u128()))
                    .ok_or(ContractError::LiquidityShareComputationFailed)?,
            )
            .as_u128(),
        )
        .saturating_sub(MINIMUM_LIQUIDITY_AMOUNT);

        // the share must be above zero after deducting the minimum liquidity,
        // which is locked in the pool
        ensure!(
            !share.is_zero(),
            ContractError::InsufficientInitialLiquidity(MINIMUM_LIQUIDITY_AMOUNT)
        );

        Ok(share)
    } else {
        ensure!(
            !reserves[0].is_zero() && !reserves[1].is_zero(),
            ContractError::ZeroReserve
        );

        let share = std::cmp::min(
            amounts[0].checked_multiply_ratio(total_share, reserves[0])?,
            amounts[1].checked_multiply_ratio(total_share, reserves[1])?,
        );

        ensure!(!share.is_zero(), ContractError::InsufficientLiquidityMinted);

        Ok(share)
    }
}

/// Scales an amount from one decimal precision to another, flooring when
/// scaling down.
pub fn normalize_amount(amount: Uint128, from_decimals: u8, to_decimals: u8) -> Option<Uint128> {
    if from_decimals > to_decimals {
        amount
            .checked_div(Uint128::from(
                10u128.pow(u32::from(from_decimals - to_decimals)),
            ))
            .ok()
    } else {
        amount
            .checked_mul(Uint128::from(
                10u128.pow(u32::from(to_decimals - from_decimals)),
            ))
            .ok()
    }
}

/// Reference share calculation: scales amounts and reserves to the highest
/// decimal precision among the two assets and then applies the same formula
/// as [compute_lp_mint_amount], branch for branch.
///
/// The pool never mints with this value. It exists so callers can measure
/// how far the raw-amount formula drifts when the pool assets disagree on
/// decimal precision.
pub fn compute_lp_mint_amount_normalized(
    amounts: [Uint128; 2],
    reserves: [Uint128; 2],
    decimals: [u8; 2],
    total_share: Uint128,
) -> Result<Uint128, ContractError> {
    let max_decimals = decimals[0].max(decimals[1]);

    let mut normalized_amounts = [Uint128::zero(); 2];
    let mut normalized_reserves = [Uint128::zero(); 2];

    for i in 0..2 {
        normalized_amounts[i] = normalize_amount(amounts[i], decimals[i], max_decimals)
            .ok_or(ContractError::LiquidityShareComputationFailed)?;
        normalized_reserves[i] = normalize_amount(reserves[i], decimals[i], max_decimals)
            .ok_or(ContractError::LiquidityShareComputationFailed)?;
    }

    compute_lp_mint_amount(normalized_amounts, normalized_reserves, total_share)
}
