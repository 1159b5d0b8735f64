use cosmwasm_std::testing::{message_info, mock_dependencies, mock_env};
use cosmwasm_std::{coin, from_json, BankMsg, Uint128};
use cw_multi_test::IntoBech32;

use amm::lp_common::burn_lp_asset_msg;
use amm::pool::{ExecuteMsg, PoolInfoResponse, QueryMsg};
use pool::ContractError;
use pool::contract::{execute, query};
use test_utils::common_constants::{DENOM_UUSDC, DENOM_UWETH, ONE_THOUSAND};

use crate::common::{mock_instantiation, POOL_IDENTIFIER};

mod common;

const USDC_DEPOSIT: u128 = 10u128.pow(12);
const WETH_DEPOSIT: u128 = 10u128.pow(24);

#[test]
fn withdraw_returns_proportional_reserves() {
    let mut deps = mock_dependencies();
    let creator = "creator".into_bech32();
    let env = mock_env();

    mock_instantiation(deps.as_mut(), message_info(&creator, &[])).unwrap();
    execute(
        deps.as_mut(),
        env.clone(),
        message_info(
            &creator,
            &[
                coin(USDC_DEPOSIT, DENOM_UUSDC),
                coin(WETH_DEPOSIT, DENOM_UWETH),
            ],
        ),
        ExecuteMsg::ProvideLiquidity { receiver: None },
    )
    .unwrap();

    // burn half of the total share
    let lp_denom = format!(
        "factory/{}/{}.LP",
        env.contract.address,
        POOL_IDENTIFIER
    );
    let burned = 10u128.pow(18) / 2;

    let res = execute(
        deps.as_mut(),
        env.clone(),
        message_info(&creator, &[coin(burned, lp_denom.clone())]),
        ExecuteMsg::WithdrawLiquidity,
    )
    .unwrap();

    assert_eq!(res.messages.len(), 2);
    assert_eq!(
        res.messages[0].msg,
        burn_lp_asset_msg(
            lp_denom,
            env.contract.address.clone(),
            Uint128::new(burned)
        )
        .unwrap()
    );
    assert_eq!(
        res.messages[1].msg,
        BankMsg::Send {
            to_address: creator.to_string(),
            amount: vec![
                coin(USDC_DEPOSIT / 2, DENOM_UUSDC),
                coin(WETH_DEPOSIT / 2, DENOM_UWETH),
            ],
        }
        .into()
    );

    let query_res = query(deps.as_ref(), env, QueryMsg::Pool).unwrap();
    let pool_response: PoolInfoResponse = from_json(query_res).unwrap();
    assert_eq!(
        pool_response.total_share,
        Uint128::new(10u128.pow(18) - burned)
    );
    assert_eq!(
        pool_response.pool_info.assets,
        vec![
            coin(USDC_DEPOSIT / 2, DENOM_UUSDC),
            coin(WETH_DEPOSIT / 2, DENOM_UWETH),
        ]
    );
}

#[test]
fn withdraw_with_wrong_funds_fails() {
    let mut deps = mock_dependencies();
    let creator = "creator".into_bech32();

    mock_instantiation(deps.as_mut(), message_info(&creator, &[])).unwrap();
    execute(
        deps.as_mut(),
        mock_env(),
        message_info(
            &creator,
            &[
                coin(USDC_DEPOSIT, DENOM_UUSDC),
                coin(WETH_DEPOSIT, DENOM_UWETH),
            ],
        ),
        ExecuteMsg::ProvideLiquidity { receiver: None },
    )
    .unwrap();

    // the funds sent are not the LP denom
    let err = execute(
        deps.as_mut(),
        mock_env(),
        message_info(&creator, &[coin(ONE_THOUSAND, DENOM_UUSDC)]),
        ExecuteMsg::WithdrawLiquidity,
    )
    .unwrap_err();

    match err {
        ContractError::PaymentError(_) => {}
        _ => panic!("should return ContractError::PaymentError"),
    }
}

#[test]
fn withdraw_when_disabled_fails() {
    let mut deps = mock_dependencies();
    let creator = "creator".into_bech32();
    let env = mock_env();

    mock_instantiation(deps.as_mut(), message_info(&creator, &[])).unwrap();
    execute(
        deps.as_mut(),
        env.clone(),
        message_info(
            &creator,
            &[
                coin(USDC_DEPOSIT, DENOM_UUSDC),
                coin(WETH_DEPOSIT, DENOM_UWETH),
            ],
        ),
        ExecuteMsg::ProvideLiquidity { receiver: None },
    )
    .unwrap();

    execute(
        deps.as_mut(),
        env.clone(),
        message_info(&creator, &[]),
        ExecuteMsg::UpdateStatus {
            deposits_enabled: None,
            withdrawals_enabled: Some(false),
        },
    )
    .unwrap();

    let lp_denom = format!(
        "factory/{}/{}.LP",
        env.contract.address,
        POOL_IDENTIFIER
    );
    let err = execute(
        deps.as_mut(),
        env,
        message_info(&creator, &[coin(ONE_THOUSAND, lp_denom)]),
        ExecuteMsg::WithdrawLiquidity,
    )
    .unwrap_err();

    match err {
        ContractError::OperationDisabled(operation) => {
            assert_eq!(operation, "withdraw_liquidity")
        }
        _ => panic!("should return ContractError::OperationDisabled"),
    }
}
