// Common Token Denominations
pub const DENOM_UOM: &str = "uom";
pub const DENOM_UUSDC: &str = "uusdc";
pub const DENOM_UWETH: &str = "uweth";
pub const DENOM_UWHALE: &str = "uwhale";
pub const DENOM_ULUNA: &str = "uluna";

// Common Amounts and Balances
pub const ONE_THOUSAND: u128 = 1_000;
pub const ONE_MILLION: u128 = 1_000_000;
pub const ONE_BILLION: u128 = 1_000_000_000;
pub const INITIAL_BALANCE: u128 = 1_000_000_000;

// Decimal Constants
pub const DECIMALS_6: u8 = 6;
pub const DECIMALS_12: u8 = 12;
pub const DECIMALS_18: u8 = 18;
