use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Smallest purchasable gold increment, in chi
pub const MIN_GOLD_UNIT: Decimal = dec!(0.5);

/// Category id of the gold fund
pub const GOLD_CATEGORY_ID: &str = "gold";

/// Category id of the stock fund that shares liquidity with gold
pub const STOCK_CATEGORY_ID: &str = "stocks";

/// Key under which the serialized ledger state is stored
pub const LEDGER_STATE_KEY: &str = "invest_calc_accumulation";

/// Weight that represents the whole contribution
pub const FULL_WEIGHT: Decimal = dec!(100);

/// Number of cycles projected by default
pub const DEFAULT_SIMULATION_MONTHS: u32 = 12;

/// Longest projection accepted by the simulator (50 years)
pub const MAX_SIMULATION_MONTHS: u32 = 600;

/// Largest accepted contribution (10^18)
pub const MAX_CONTRIBUTION: Decimal = dec!(1000000000000000000);

/// Largest fund balance or debt a cycle will start from (10^24)
pub const MAX_BALANCE: Decimal = dec!(1000000000000000000000000);

/// Smallest accepted price per base unit
pub const MIN_UNIT_PRICE: Decimal = Decimal::ONE;

/// Currency suffix used in narratives
pub const CURRENCY_SYMBOL: &str = "đ";
