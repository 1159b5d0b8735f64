use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Coin, Uint128};

#[cw_serde]
pub struct InstantiateMsg {
    /// Identifier the LP subdenom is derived from.
    pub pool_identifier: String,
    /// The denoms of the two assets the pool holds.
    pub asset_denoms: Vec<String>,
    /// The decimal precision of each asset, matching `asset_denoms` by index.
    pub asset_decimals: Vec<u8>,
}

#[cw_serde]
pub enum ExecuteMsg {
    /// Provides liquidity to the pool with the assets sent as funds.
    ProvideLiquidity {
        /// The receiver of the LP shares. If none is provided, the sender
        /// receives them.
        receiver: Option<String>,
    },
    /// Withdraws liquidity from the pool, burning the LP shares sent as funds.
    WithdrawLiquidity,
    /// Enables or disables pool operations. Only the owner can use this.
    UpdateStatus {
        deposits_enabled: Option<bool>,
        withdrawals_enabled: Option<bool>,
    },
    /// Updates the contract's ownership.
    UpdateOwnership(cw_ownable::Action),
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    /// Retrieves the pool state. Returns a [PoolInfoResponse].
    #[returns(PoolInfoResponse)]
    Pool,
    /// Simulates a deposit against the current reserves, without changing any
    /// state. Returns a [DepositSimulationResponse].
    #[returns(DepositSimulationResponse)]
    SimulateDeposit { deposits: Vec<Coin> },
    /// Queries the contract's ownership.
    #[returns(cw_ownable::Ownership<String>)]
    Ownership {},
}

#[cw_serde]
pub struct MigrateMsg {}

/// Feature toggles for the pool operations.
#[cw_serde]
pub struct PoolStatus {
    pub deposits_enabled: bool,
    pub withdrawals_enabled: bool,
}

impl Default for PoolStatus {
    fn default() -> Self {
        Self {
            deposits_enabled: true,
            withdrawals_enabled: true,
        }
    }
}

/// Contains the state of the pool.
#[cw_serde]
pub struct PoolInfo {
    /// The identifier the pool was created with.
    pub pool_identifier: String,
    /// The denoms of the pool assets.
    pub asset_denoms: Vec<String>,
    /// The decimal precision of each asset. Kept as metadata only, the share
    /// calculation operates on raw amounts.
    pub asset_decimals: Vec<u8>,
    /// The pool reserves, in the order of `asset_denoms`.
    pub assets: Vec<Coin>,
    /// The denom of the LP token for this pool.
    pub lp_denom: String,
    /// The status of the pool operations.
    pub status: PoolStatus,
}

#[cw_serde]
pub struct PoolInfoResponse {
    /// The pool state.
    pub pool_info: PoolInfo,
    /// The total LP shares outstanding, including the locked minimum
    /// liquidity.
    pub total_share: Uint128,
}

#[cw_serde]
pub struct DepositSimulationResponse {
    /// The shares the pool mints for the deposit. Computed on raw amounts,
    /// i.e. each asset in its own native units.
    pub lp_shares: Uint128,
    /// Reference value computed with amounts and reserves scaled to the
    /// pool's highest decimal precision before applying the same formula.
    /// Diverges from `lp_shares` when the pool assets disagree on precision.
    pub decimal_adjusted_lp_shares: Uint128,
}
