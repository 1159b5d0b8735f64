use cosmwasm_std::{
    coin, ensure, BankMsg, Coin, CosmosMsg, DepsMut, Env, MessageInfo, Response,
};
use cw_utils::must_pay;

use amm::coin::aggregate_coins;
use amm::common::validate_addr_or_default;
use amm::lp_common::{self, MINIMUM_LIQUIDITY_AMOUNT};

use crate::error::ContractError;
use crate::helpers::deposit_amounts_in_pool_order;
use crate::math;
use crate::state::{POOL, TOTAL_LP_SUPPLY};

pub fn provide_liquidity(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    receiver: Option<String>,
) -> Result<Response, ContractError> {
    let mut pool = POOL.load(deps.storage)?;

    // check if the deposit feature is enabled
    ensure!(
        pool.status.deposits_enabled,
        ContractError::OperationDisabled("provide_liquidity".to_string())
    );

    let deposits = aggregate_coins(info.funds.clone())?;
    ensure!(!deposits.is_empty(), ContractError::EmptyAssets);

    // verify that the assets sent match the ones from the pool
    ensure!(
        deposits.iter().all(|asset| pool
            .asset_denoms
            .iter()
            .any(|denom| denom == &asset.denom)),
        ContractError::AssetMismatch
    );

    let receiver = validate_addr_or_default(&deps.as_ref(), receiver, info.sender.clone());

    let total_share = TOTAL_LP_SUPPLY.load(deps.storage)?;
    let amounts = deposit_amounts_in_pool_order(&deposits, &pool.asset_denoms);
    let reserves = [pool.assets[0].amount, pool.assets[1].amount];

    // raw amounts on purpose, the share calculation never sees asset_decimals
    let shares = math::compute_lp_mint_amount(amounts, reserves, total_share)?;

    let mut messages: Vec<CosmosMsg> = vec![];
    let mut minted = shares;

    if total_share.is_zero() {
        // lock MINIMUM_LIQUIDITY_AMOUNT in the contract forever to mitigate
        // the risk of the first depositor preventing small liquidity
        // providers from joining the pool
        messages.push(lp_common::mint_lp_token_msg(
            pool.lp_denom.clone(),
            &env.contract.address,
            &env.contract.address,
            MINIMUM_LIQUIDITY_AMOUNT,
        )?);

        minted = minted.checked_add(MINIMUM_LIQUIDITY_AMOUNT)?;
    }

    messages.push(lp_common::mint_lp_token_msg(
        pool.lp_denom.clone(),
        &receiver,
        &env.contract.address,
        shares,
    )?);

    // credit the deposits to the pool reserves
    for (i, amount) in amounts.iter().enumerate() {
        pool.assets[i].amount = pool.assets[i].amount.checked_add(*amount)?;
    }

    POOL.save(deps.storage, &pool)?;
    TOTAL_LP_SUPPLY.save(deps.storage, &total_share.checked_add(minted)?)?;

    let pool_reserves = pool
        .assets
        .iter()
        .map(|coin| coin.to_string())
        .collect::<Vec<_>>()
        .join(",");

    Ok(Response::default()
        .add_messages(messages)
        .add_attributes(vec![
            ("action", "provide_liquidity".to_string()),
            ("receiver", receiver.to_string()),
            ("shares", shares.to_string()),
            ("pool_reserves", pool_reserves),
        ]))
}

pub fn withdraw_liquidity(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
) -> Result<Response, ContractError> {
    let mut pool = POOL.load(deps.storage)?;

    // check if the withdrawal feature is enabled
    ensure!(
        pool.status.withdrawals_enabled,
        ContractError::OperationDisabled("withdraw_liquidity".to_string())
    );

    // the LP shares to burn are the funds sent with the transaction
    let burned = must_pay(&info, &pool.lp_denom)?;
    let total_share = TOTAL_LP_SUPPLY.load(deps.storage)?;

    let mut refunds: Vec<Coin> = vec![];
    for asset in pool.assets.iter_mut() {
        let refund = asset.amount.checked_multiply_ratio(burned, total_share)?;

        if !refund.is_zero() {
            refunds.push(coin(refund.u128(), asset.denom.clone()));
        }

        asset.amount = asset.amount.checked_sub(refund)?;
    }

    ensure!(!refunds.is_empty(), ContractError::NothingToWithdraw);

    // the LP shares were sent to the contract, burn them from here
    let messages: Vec<CosmosMsg> = vec![
        lp_common::burn_lp_asset_msg(pool.lp_denom.clone(), env.contract.address, burned)?,
        BankMsg::Send {
            to_address: info.sender.to_string(),
            amount: refunds.clone(),
        }
        .into(),
    ];

    POOL.save(deps.storage, &pool)?;
    TOTAL_LP_SUPPLY.save(deps.storage, &total_share.checked_sub(burned)?)?;

    let refunded = refunds
        .iter()
        .map(|coin| coin.to_string())
        .collect::<Vec<_>>()
        .join(",");

    Ok(Response::default()
        .add_messages(messages)
        .add_attributes(vec![
            ("action", "withdraw_liquidity".to_string()),
            ("sender", info.sender.to_string()),
            ("shares", burned.to_string()),
            ("refunded", refunded),
        ]))
}
