use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ElementDistribution {
    pub fire: usize,
    pub earth: usize,
    pub air: usize,
    pub water: usize,
}

impl ElementDistribution {
    pub fn total(&self) -> usize {
        self.fire + self.earth + self.air + self.water
    }
}

#[derive(Debug, Clone, Copy, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ModalityDistribution {
    pub cardinal: usize,
    pub fixed: usize,
    pub mutable: usize,
}

impl ModalityDistribution {
    pub fn total(&self) -> usize {
        self.cardinal + self.fixed + self.mutable
    }
}

#[derive(Debug, Clone, Copy, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PolarityDistribution {
    pub positive: usize,
    pub negative: usize,
}

/// Planet counts by house class
#[derive(Debug, Clone, Copy, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HouseDistribution {
    pub angular: usize,
    pub succedent: usize,
    pub cadent: usize,
}

/// Planet counts by house quadrant (1–3, 4–6, 7–9, 10–12)
#[derive(Debug, Clone, Copy, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuadrantDistribution {
    pub first: usize,
    pub second: usize,
    pub third: usize,
    pub fourth: usize,
}

/// Planet counts by hemisphere. The four six-house sets overlap, so these
/// totals are not independent.
#[derive(Debug, Clone, Copy, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HemisphereDistribution {
    pub eastern: usize,
    pub western: usize,
    pub northern: usize,
    pub southern: usize,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanetCounts {
    pub by_sign: BTreeMap<String, usize>,
    pub by_house: BTreeMap<u8, usize>,
    pub by_element: ElementDistribution,
    pub by_modality: ModalityDistribution,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AspectCounts {
    pub major: usize,
    pub minor: usize,
    pub by_type: BTreeMap<String, usize>,
}

/// Pattern counts. Grand crosses and yods are heuristic presence flags,
/// not verified closed figures.
#[derive(Debug, Clone, Copy, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SpecialPatterns {
    pub grand_trines: usize,
    pub t_squares: usize,
    pub grand_crosses: usize,
    pub yods: usize,
}
