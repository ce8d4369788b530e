use serde::{Deserialize, Serialize};
use std::fmt;

/// Transport modes offered by the trip form, each tied to a fixed emission
/// factor in kg CO2 per passenger-km.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransportMode {
    Plane,
    PlaneFirst,
    GasCar,
    ElectricCar,
    Bus,
    Train,
    Bike,
}

impl TransportMode {
    /// Modes in form display order.
    pub const ALL: [TransportMode; 7] = [
        TransportMode::Plane,
        TransportMode::PlaneFirst,
        TransportMode::GasCar,
        TransportMode::ElectricCar,
        TransportMode::Bus,
        TransportMode::Train,
        TransportMode::Bike,
    ];

    pub fn factor(self) -> f64 {
        match self {
            TransportMode::Plane => 0.255,
            TransportMode::PlaneFirst => 0.350,
            TransportMode::GasCar => 0.120,
            TransportMode::ElectricCar => 0.050,
            TransportMode::Bus => 0.068,
            TransportMode::Train => 0.041,
            TransportMode::Bike => 0.011,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            TransportMode::Plane => "Avião (classe econômica)",
            TransportMode::PlaneFirst => "Avião (primeira classe)",
            TransportMode::GasCar => "Carro a gasolina",
            TransportMode::ElectricCar => "Carro elétrico",
            TransportMode::Bus => "Ônibus",
            TransportMode::Train => "Trem",
            TransportMode::Bike => "Bicicleta",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            TransportMode::Plane => "plane",
            TransportMode::PlaneFirst => "plane_first",
            TransportMode::GasCar => "gas_car",
            TransportMode::ElectricCar => "electric_car",
            TransportMode::Bus => "bus",
            TransportMode::Train => "train",
            TransportMode::Bike => "bike",
        }
    }
}

impl fmt::Display for TransportMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_mode_has_a_positive_factor() {
        for mode in TransportMode::ALL {
            assert!(mode.factor() > 0.0, "{mode} factor must be positive");
        }
    }

    #[test]
    fn serde_name_matches_display() -> Result<(), Box<dyn std::error::Error>> {
        for mode in TransportMode::ALL {
            let value = serde_json::to_value(mode)?;
            assert_eq!(value, serde_json::Value::String(mode.to_string()));
        }
        Ok(())
    }

    #[test]
    fn parses_snake_case_identifier() -> Result<(), Box<dyn std::error::Error>> {
        let mode: TransportMode = serde_json::from_str("\"electric_car\"")?;
        assert_eq!(mode, TransportMode::ElectricCar);
        assert_eq!(mode.factor(), 0.050);
        Ok(())
    }
}
