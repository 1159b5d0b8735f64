/// The symbol used as suffix for the LP subdenom, i.e. `{pool_identifier}.{LP_SYMBOL}`.
pub const LP_SYMBOL: &str = "LP";
