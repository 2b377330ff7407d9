//! Ordinary least-squares extrapolation over closing prices.
//!
//! The dashboard's "prediction" is a straight line fit to `(index, close)`
//! pairs, evaluated one step past the last observed point. Not a
//! forecasting model.

use crate::{Prediction, ValidationError};

/// Minimum number of points required for a line fit.
pub const MIN_POINTS: usize = 2;

/// Fitted line `y = slope * x + intercept`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearFit {
    pub slope: f64,
    pub intercept: f64,
}

impl LinearFit {
    /// Fit over `(index, value)` pairs with indices `0..values.len()`.
    pub fn fit(values: &[f64]) -> Result<Self, ValidationError> {
        let n = values.len();
        if n < MIN_POINTS {
            return Err(ValidationError::InsufficientData {
                len: n,
                min: MIN_POINTS,
            });
        }
        if values.iter().any(|value| !value.is_finite()) {
            return Err(ValidationError::NonFiniteValue { field: "close" });
        }

        let count = n as f64;
        let sum_x: f64 = (0..n).map(|x| x as f64).sum();
        let sum_y: f64 = values.iter().sum();
        let sum_xy: f64 = values
            .iter()
            .enumerate()
            .map(|(x, y)| x as f64 * y)
            .sum();
        let sum_xx: f64 = (0..n).map(|x| (x * x) as f64).sum();

        // Denominator is never zero: the x values 0..n are distinct.
        let slope = (count * sum_xy - sum_x * sum_y) / (count * sum_xx - sum_x * sum_x);
        let intercept = (sum_y - slope * sum_x) / count;

        Ok(Self { slope, intercept })
    }

    pub fn predict(&self, x: f64) -> f64 {
        self.slope * x + self.intercept
    }
}

/// Predict the next close one step past the series and report its delta
/// against the live price.
pub fn predict_next_close(
    closes: &[f64],
    current_price: f64,
) -> Result<Prediction, ValidationError> {
    if !current_price.is_finite() || current_price <= 0.0 {
        return Err(ValidationError::NonPositiveValue {
            field: "current_price",
        });
    }

    let fit = LinearFit::fit(closes)?;
    let predicted_price = fit.predict(closes.len() as f64);
    let change = predicted_price - current_price;
    let change_percent = change / current_price * 100.0;

    Ok(Prediction {
        predicted_price,
        change,
        change_percent,
    })
}
