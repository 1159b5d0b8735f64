use cosmwasm_std::{ensure, Coin, Uint128};

use amm::coin::FACTORY_MAX_SUBDENOM_SIZE;
use amm::constants::LP_SYMBOL;

use crate::error::ContractError;

/// Validates the pool identifier. It becomes the LP subdenom, so together
/// with the LP symbol suffix it must fit the token factory subdenom limit,
/// and it may only contain characters the token factory accepts.
pub fn validate_pool_identifier(identifier: &str) -> Result<(), ContractError> {
    ensure!(
        !identifier.is_empty()
            && identifier.len() < FACTORY_MAX_SUBDENOM_SIZE - LP_SYMBOL.len()
            && identifier
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '/' || c == '.'),
        ContractError::InvalidPoolIdentifier {
            identifier: identifier.to_string()
        }
    );

    Ok(())
}

/// Maps deposited coins onto the pool's asset order. Assets the sender did
/// not deposit count as zero.
pub fn deposit_amounts_in_pool_order(deposits: &[Coin], asset_denoms: &[String]) -> [Uint128; 2] {
    let mut amounts = [Uint128::zero(); 2];

    for (i, denom) in asset_denoms.iter().take(2).enumerate() {
        if let Some(deposit) = deposits.iter().find(|coin| &coin.denom == denom) {
            amounts[i] = deposit.amount;
        }
    }

    amounts
}
