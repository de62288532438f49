//! ROI calculator service.
//!
//! Pure computation for the bundled return-on-investment widget.

use crate::types::errors::RoiError;

/// Trait defining the ROI calculator interface.
pub trait RoiCalculatorTrait {
    fn calculate(&self, investment: f64, revenue: f64, costs: f64) -> Result<f64, RoiError>;
    fn format_roi(&self, roi: f64) -> String;
}

/// Stateless ROI calculator.
pub struct RoiCalculator;

impl RoiCalculator {
    pub fn new() -> Self {
        Self
    }
}

impl Default for RoiCalculator {
    fn default() -> Self {
        Self::new()
    }
}

impl RoiCalculatorTrait for RoiCalculator {
    /// Computes ROI as a percentage: `(revenue - costs - investment) / investment * 100`.
    fn calculate(&self, investment: f64, revenue: f64, costs: f64) -> Result<f64, RoiError> {
        if !investment.is_finite() {
            return Err(RoiError::InvalidInput("initial investment".to_string()));
        }
        if !revenue.is_finite() {
            return Err(RoiError::InvalidInput("total revenue".to_string()));
        }
        if !costs.is_finite() {
            return Err(RoiError::InvalidInput("total costs".to_string()));
        }
        if investment == 0.0 {
            return Err(RoiError::ZeroInvestment);
        }

        let net_profit = revenue - costs - investment;
        Ok(net_profit / investment * 100.0)
    }

    /// Formats an ROI value for display, e.g. `25.00%`.
    fn format_roi(&self, roi: f64) -> String {
        format!("{:.2}%", roi)
    }
}
