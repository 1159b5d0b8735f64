use cosmwasm_std::{Addr, Coin, CosmosMsg, StdResult, Uint128};

use crate::tokenfactory;

/// The amount of LP shares locked in the pool on the first deposit, to prevent
/// share-price manipulation via a degenerate first deposit.
pub const MINIMUM_LIQUIDITY_AMOUNT: Uint128 = Uint128::new(1_000u128);

/// Creates the Mint LP message
pub fn mint_lp_token_msg(
    liquidity_asset: String,
    recipient: &Addr,
    sender: &Addr,
    amount: Uint128,
) -> StdResult<CosmosMsg> {
    Ok(tokenfactory::mint(
        sender.clone(),
        Coin {
            denom: liquidity_asset,
            amount,
        },
        recipient.clone().into_string(),
    ))
}

/// Creates the Burn LP message
pub fn burn_lp_asset_msg(
    liquidity_asset: String,
    sender: Addr,
    amount: Uint128,
) -> StdResult<CosmosMsg> {
    Ok(tokenfactory::burn(
        sender.clone(),
        Coin {
            denom: liquidity_asset,
            amount,
        },
        sender.into_string(),
    ))
}
