/// Radius of the donut chart circle, in SVG user units.
pub const CHART_RADIUS: f64 = 80.0;

/// Fixed segment palette, cycled by holding index.
pub const CHART_PALETTE: [&str; 6] = [
    "#3B82F6", "#EF4444", "#10B981", "#F59E0B", "#8B5CF6", "#EC4899",
];

/// Decimal precision for percentage calculations
pub const PERCENT_DECIMAL_PRECISION: u32 = 4;

/// Decimal precision for display
pub const DISPLAY_DECIMAL_PRECISION: u32 = 2;

/// Minimum accepted password length for sign-in
pub const MIN_PASSWORD_LENGTH: usize = 6;

/// Display currency for formatted amounts
pub const DEFAULT_CURRENCY: &str = "USD";
