use serde::{Deserialize, Serialize};

use crate::engine::Value;
use crate::formatting::format_si;

/// Policy for displaying computed numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NumberFormat {
    /// Always fixed point, `2.00000`.
    Decimals,
    /// Fixed point, switching to scientific notation when the magnitude is
    /// below 1e-3 or at least 1e3: `3.14159`, `1.23450e4`.
    #[default]
    Threshold,
    /// Scaled by the nearest SI prefix: `12.5k`, `3μ`.
    Si,
}

impl NumberFormat {
    pub fn render(&self, value: Value, precision: usize) -> String {
        match self {
            NumberFormat::Decimals => value.decimals(precision),
            NumberFormat::Threshold => {
                let magnitude = value
                    .number()
                    .abs();
                if magnitude != 0.0 && !(1e-3..1e3).contains(&magnitude) {
                    value.scientific(precision)
                } else {
                    value.decimals(precision)
                }
            }
            NumberFormat::Si => format_si(value.number(), precision),
        }
    }
}
