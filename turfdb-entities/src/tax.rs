use crate::time::Timestamp;

/// The global tax rate applied to bookings.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TaxRate {
    pub percentage: f64,
    pub updated_at: Timestamp,
}

impl TaxRate {
    pub fn is_valid_percentage(percentage: f64) -> bool {
        percentage.is_finite() && percentage >= 0.0
    }
}
