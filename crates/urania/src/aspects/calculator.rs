use crate::aspects::types::{Aspect, AspectType};
use crate::chart::config::ChartConfig;
use crate::chart::types::Planet;
use crate::ephemeris::calc::aspect_angle;

/// Pairwise aspect detection over a set of placed planets.
pub struct AspectCalculator;

impl AspectCalculator {
    pub fn new() -> Self {
        Self
    }

    /// Compute every aspect between every unordered planet pair.
    ///
    /// For each pair, every enabled aspect type whose configured orb covers
    /// the measured deviation produces a record — the boundary is inclusive,
    /// and a pair within orb of several types gets one record per type.
    pub fn compute(&self, planets: &[Planet], config: &ChartConfig) -> Vec<Aspect> {
        let mut aspects = Vec::new();

        for i in 0..planets.len() {
            for j in (i + 1)..planets.len() {
                let p1 = &planets[i];
                let p2 = &planets[j];

                let separation = aspect_angle(p1.longitude, p2.longitude);

                for kind in AspectType::ALL {
                    if !config.display.show_aspects.shows(kind) {
                        continue;
                    }

                    let allowed_orb = config.orbs.orb_for(kind);
                    let deviation = (separation.angle - kind.angle()).abs();

                    if deviation <= allowed_orb {
                        let applying = p1.speed.abs() > p2.speed.abs();
                        aspects.push(Aspect::new(
                            p1.id, p2.id, kind, deviation, allowed_orb, applying,
                        ));
                    }
                }
            }
        }

        aspects
    }
}

impl Default for AspectCalculator {
    fn default() -> Self {
        Self::new()
    }
}
