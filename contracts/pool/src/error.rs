use cosmwasm_std::{CheckedMultiplyRatioError, OverflowError, StdError, Uint128};
use cw_ownable::OwnershipError;
use cw_utils::PaymentError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ContractError {
    #[error(transparent)]
    Std(#[from] StdError),

    #[error(transparent)]
    OwnershipError(#[from] OwnershipError),

    #[error(transparent)]
    PaymentError(#[from] PaymentError),

    #[error(transparent)]
    OverflowError(#[from] OverflowError),

    #[error(transparent)]
    CheckedMultiplyRatioError(#[from] CheckedMultiplyRatioError),

    #[error("Semver parsing error: {0}")]
    SemVer(String),

    #[error("Invalid pool identifier {identifier}")]
    InvalidPoolIdentifier { identifier: String },

    #[error("The pool takes exactly two distinct assets, with decimals for each")]
    InvalidPoolAssets,

    #[error("Operation disabled, {0}")]
    OperationDisabled(String),

    #[error("No assets were sent")]
    EmptyAssets,

    #[error("The asset sent doesn't match the assets in the pool")]
    AssetMismatch,

    #[error("Initial liquidity must mint more than {0} shares")]
    InsufficientInitialLiquidity(Uint128),

    #[error("The deposit mints zero LP shares")]
    InsufficientLiquidityMinted,

    #[error("A pool reserve is zero while LP shares are outstanding")]
    ZeroReserve,

    #[error("Failed to compute the LP share amount")]
    LiquidityShareComputationFailed,

    #[error("Withdrawing these shares returns no pool assets")]
    NothingToWithdraw,

    #[error("Attempt to migrate to version {new_version}, but contract is on a higher version {current_version}")]
    MigrateInvalidVersion {
        new_version: semver::Version,
        current_version: semver::Version,
    },
}

impl From<semver::Error> for ContractError {
    fn from(err: semver::Error) -> Self {
        Self::SemVer(err.to_string())
    }
}
