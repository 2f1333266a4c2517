use serde::{Deserialize, Serialize};

use super::MapId;
use crate::error::{Error, Result};

/// Standalone location descriptor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Map {
    pub id: MapId,
    pub latitude: f64,
    pub longitude: f64,
    pub direction: String,
}

impl Map {
    pub fn new(
        id: impl Into<MapId>,
        latitude: f64,
        longitude: f64,
        direction: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            latitude,
            longitude,
            direction: direction.into(),
        }
    }

    /// Human-readable location line.
    ///
    /// Coordinates print as JVM doubles do: plain decimals with at least one
    /// fractional digit (`-74.0`, `40.7`) for magnitudes in `[1e-3, 1e7)`,
    /// scientific notation (`1.0E-4`, `1.0E7`) outside it.
    pub fn show_location(&self) -> String {
        format!(
            "Latitud: {}, Longitud: {}, Dirección: {}",
            jvm_double(self.latitude),
            jvm_double(self.longitude),
            self.direction
        )
    }

    pub fn relocate(&mut self, latitude: f64, longitude: f64, direction: impl Into<String>) {
        self.latitude = latitude;
        self.longitude = longitude;
        self.direction = direction.into();
    }

    /// Places near this location. No search backend exists, so this always
    /// fails with [`Error::NotImplemented`].
    pub fn get_nearby_places(&self) -> Result<Vec<Map>> {
        Err(Error::NotImplemented("nearby place search"))
    }
}

fn jvm_double(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        let sign = if value.is_sign_negative() { "-" } else { "" };
        return format!("{}Infinity", sign);
    }

    let magnitude = value.abs();
    if magnitude == 0.0 || (1e-3..1e7).contains(&magnitude) {
        return format!("{:?}", value);
    }

    // `{:e}` gives the shortest digits, e.g. `1e-4` or `-2.5e8`
    let scientific = format!("{:e}", value);
    match scientific.split_once('e') {
        Some((mantissa, exponent)) if mantissa.contains('.') => {
            format!("{}E{}", mantissa, exponent)
        }
        Some((mantissa, exponent)) => format!("{}.0E{}", mantissa, exponent),
        None => scientific,
    }
}
