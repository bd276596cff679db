/// Palate system version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Maximum ingredients a single recipe rating propagates to.
pub const MAX_PROPAGATION_INGREDIENTS: usize = 50;

/// Minimum and maximum recipe rating.
pub const MIN_RATING: u8 = 1;
pub const MAX_RATING: u8 = 5;
