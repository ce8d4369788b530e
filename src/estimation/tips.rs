//! Advice selection for the results panel.
//!
//! Tip sets are static and keyed by [`TipCategory`]. The category is derived
//! from the raw emission factor through an ordered decision chain, so a factor
//! inside the car range resolves to `Car` even when it equals the bus factor.

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TipCategory {
    Plane,
    Car,
    Bus,
    Train,
    Bike,
}

impl TipCategory {
    pub const ALL: [TipCategory; 5] = [
        TipCategory::Plane,
        TipCategory::Car,
        TipCategory::Bus,
        TipCategory::Train,
        TipCategory::Bike,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            TipCategory::Plane => "plane",
            TipCategory::Car => "car",
            TipCategory::Bus => "bus",
            TipCategory::Train => "train",
            TipCategory::Bike => "bike",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|category| category.as_str().eq_ignore_ascii_case(value))
    }
}

impl fmt::Display for TipCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

const PLANE_FLOOR: f64 = 0.255;
const CAR_RANGE_MIN: f64 = 0.050;
const CAR_RANGE_MAX: f64 = 0.120;
const BUS_FACTOR: f64 = 0.068;
const TRAIN_FACTOR: f64 = 0.041;

/// Maps an emission factor to the tip set shown for it.
///
/// Evaluation order is fixed: plane floor, then the inclusive car range, then
/// the exact bus and train factors, then bike as the fallback. The car range
/// contains the bus factor, so the bus branch is unreachable for 0.068.
#[allow(clippy::float_cmp)]
pub fn classify_tip_category(factor: f64) -> TipCategory {
    if factor >= PLANE_FLOOR {
        TipCategory::Plane
    } else if (CAR_RANGE_MIN..=CAR_RANGE_MAX).contains(&factor) {
        TipCategory::Car
    } else if factor == BUS_FACTOR {
        TipCategory::Bus
    } else if factor == TRAIN_FACTOR {
        TipCategory::Train
    } else {
        TipCategory::Bike
    }
}

static PLANE_TIPS: [&str; 4] = [
    "Escolha voos diretos sempre que possível - decolagens e pousos consomem mais combustível",
    "Considere compensar suas emissões através de programas de créditos de carbono",
    "Viaje com bagagem leve - menos peso significa menos combustível",
    "Prefira classe econômica - ocupa menos espaço e emite menos CO₂ por passageiro",
];

static CAR_TIPS: [&str; 4] = [
    "Compartilhe a viagem com outras pessoas para dividir as emissões",
    "Mantenha a velocidade constante e moderada para economizar combustível",
    "Verifique a pressão dos pneus regularmente",
    "Considere alugar um veículo híbrido ou elétrico para viagens longas",
];

static BUS_TIPS: [&str; 3] = [
    "Ônibus já é uma opção sustentável! Continue priorizando transporte coletivo",
    "Prefira empresas que investem em frotas modernas e eficientes",
    "Combine ônibus com outros meios de transporte público no destino",
];

static TRAIN_TIPS: [&str; 3] = [
    "Excelente escolha! Trens são um dos meios mais sustentáveis",
    "Aproveite a viagem de trem para trabalhar ou relaxar",
    "Incentive outras pessoas a considerar viagens de trem",
];

static BIKE_TIPS: [&str; 3] = [
    "Parabéns! Você escolheu o meio mais sustentável",
    "Planeje rotas seguras e agradáveis para incentivar outros ciclistas",
    "Lembre-se de usar equipamentos de segurança adequados",
];

/// Tips for a category, in display order.
pub fn lookup_tips(category: TipCategory) -> &'static [&'static str] {
    match category {
        TipCategory::Plane => &PLANE_TIPS,
        TipCategory::Car => &CAR_TIPS,
        TipCategory::Bus => &BUS_TIPS,
        TipCategory::Train => &TRAIN_TIPS,
        TipCategory::Bike => &BIKE_TIPS,
    }
}
