use cosmwasm_std::{DepsMut, MessageInfo, Response};
use cw_utils::nonpayable;

use crate::error::ContractError;
use crate::state::POOL;

/// Enables or disables pool operations. Only the contract owner can do this.
pub fn update_status(
    deps: DepsMut,
    info: &MessageInfo,
    deposits_enabled: Option<bool>,
    withdrawals_enabled: Option<bool>,
) -> Result<Response, ContractError> {
    nonpayable(info)?;
    cw_ownable::assert_owner(deps.storage, &info.sender)?;

    let mut pool = POOL.load(deps.storage)?;

    if let Some(deposits_enabled) = deposits_enabled {
        pool.status.deposits_enabled = deposits_enabled;
    }

    if let Some(withdrawals_enabled) = withdrawals_enabled {
        pool.status.withdrawals_enabled = withdrawals_enabled;
    }

    POOL.save(deps.storage, &pool)?;

    Ok(Response::default().add_attributes(vec![
        ("action", "update_status".to_string()),
        (
            "deposits_enabled",
            pool.status.deposits_enabled.to_string(),
        ),
        (
            "withdrawals_enabled",
            pool.status.withdrawals_enabled.to_string(),
        ),
    ]))
}
