use amm::pool::PoolInfo;
use cosmwasm_std::Uint128;
use cw_storage_plus::Item;

pub const POOL: Item<PoolInfo> = Item::new("pool");

/// Total LP shares outstanding. The contract is the only minter of the LP
/// denom, so this mirrors the bank supply.
pub const TOTAL_LP_SUPPLY: Item<Uint128> = Item::new("total_lp_supply");
