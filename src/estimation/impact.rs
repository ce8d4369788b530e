use serde::Serialize;

/// Lower bound (kg CO2) of the moderate tier.
pub const MODERATE_THRESHOLD_KG: f64 = 50.0;
/// Lower bound (kg CO2) of the high tier.
pub const HIGH_THRESHOLD_KG: f64 = 150.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ImpactTier {
    Low,
    Moderate,
    High,
}

impl ImpactTier {
    pub fn label(self) -> &'static str {
        match self {
            ImpactTier::Low => "Baixo Impacto",
            ImpactTier::Moderate => "Impacto Moderado",
            ImpactTier::High => "Alto Impacto",
        }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            ImpactTier::Low => "impact-low",
            ImpactTier::Moderate => "impact-medium",
            ImpactTier::High => "impact-high",
        }
    }
}

/// Boundary values belong to the higher tier.
pub fn classify_impact(total_co2_kg: f64) -> ImpactTier {
    if total_co2_kg < MODERATE_THRESHOLD_KG {
        ImpactTier::Low
    } else if total_co2_kg < HIGH_THRESHOLD_KG {
        ImpactTier::Moderate
    } else {
        ImpactTier::High
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boundaries_belong_to_higher_tier() {
        assert_eq!(classify_impact(49.999), ImpactTier::Low);
        assert_eq!(classify_impact(50.0), ImpactTier::Moderate);
        assert_eq!(classify_impact(149.999), ImpactTier::Moderate);
        assert_eq!(classify_impact(150.0), ImpactTier::High);
    }

    #[test]
    fn classification_is_monotonic() {
        let mut previous = classify_impact(0.0);
        let mut total = 0.0;
        while total < 400.0 {
            let tier = classify_impact(total);
            assert!(tier >= previous, "tier dropped at {total} kg");
            previous = tier;
            total += 0.25;
        }
        assert_eq!(previous, ImpactTier::High);
    }

    #[test]
    fn presentation_text_matches_tier() {
        assert_eq!(ImpactTier::Low.label(), "Baixo Impacto");
        assert_eq!(ImpactTier::Moderate.css_class(), "impact-medium");
        assert_eq!(ImpactTier::High.css_class(), "impact-high");
    }
}
