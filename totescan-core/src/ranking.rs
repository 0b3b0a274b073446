//! Candidate ranking
//!
//! Orders the particles of one frame by how much of the image they cover.
//! The ordering is an explicit contract:
//!
//! - key: `percent_area`, largest first
//! - ties: detection order (the sort is stable)
//! - NaN or infinite areas sort after every finite area
//!
//! Only the first ranked particle is scored. A smaller particle is never
//! tried when the largest one fails classification.

use alloc::vec::Vec;
use core::cmp::Ordering;

use crate::constants::MAX_AREA_PERCENT;
use crate::particle::ParticleMeasurement;

/// Particles of one frame, largest first
#[derive(Debug, Clone, PartialEq)]
pub struct Ranking {
    ranked: Vec<ParticleMeasurement>,
}

impl Ranking {
    /// The primary candidate
    pub fn primary(&self) -> &ParticleMeasurement {
        // Never empty: `rank` returns None instead
        &self.ranked[0]
    }

    /// All particles in rank order
    pub fn as_slice(&self) -> &[ParticleMeasurement] {
        &self.ranked
    }

    /// Number of ranked particles
    pub fn len(&self) -> usize {
        self.ranked.len()
    }

    /// False for every ranking `rank` hands out
    pub fn is_empty(&self) -> bool {
        self.ranked.is_empty()
    }

    /// Take the ranked particles
    pub fn into_vec(self) -> Vec<ParticleMeasurement> {
        self.ranked
    }
}

/// Sort key: finite areas as-is, anything else below every finite area
fn ranking_key(particle: &ParticleMeasurement) -> f64 {
    if particle.percent_area.is_finite() {
        particle.percent_area
    } else {
        f64::NEG_INFINITY
    }
}

/// Descending by key; `Equal` keeps detection order under a stable sort
fn by_size_descending(a: &ParticleMeasurement, b: &ParticleMeasurement) -> Ordering {
    ranking_key(b).total_cmp(&ranking_key(a))
}

/// Rank a frame's particles, `None` when there are none.
pub fn rank(particles: &[ParticleMeasurement]) -> Option<Ranking> {
    if particles.is_empty() {
        return None;
    }

    let mut ranked = particles.to_vec();
    ranked.sort_by(by_size_descending);
    Some(Ranking { ranked })
}

/// The particle [`rank`] would put first, found with a single scan.
pub fn primary_candidate(particles: &[ParticleMeasurement]) -> Option<&ParticleMeasurement> {
    particles.iter().fold(None, keep_larger)
}

/// Strictly larger only: the earlier particle wins a tie
fn keep_larger<'a>(
    best: Option<&'a ParticleMeasurement>,
    particle: &'a ParticleMeasurement,
) -> Option<&'a ParticleMeasurement> {
    match best {
        Some(current) if by_size_descending(particle, current) != Ordering::Less => best,
        _ => Some(particle),
    }
}

/// True when the particle survives the area filter.
///
/// Keeps percent-areas in `[area_minimum_percent, 100]` whose measurements
/// are all finite.
pub fn passes_area_filter(particle: &ParticleMeasurement, area_minimum_percent: f64) -> bool {
    particle.is_finite()
        && (area_minimum_percent..=MAX_AREA_PERCENT).contains(&particle.percent_area)
}

/// Drop particles outside `[area_minimum_percent, 100]` percent of the image.
///
/// Inclusive at both ends; order is preserved. Particles with a non-finite
/// measurement are dropped too.
pub fn filter_by_area(
    particles: &[ParticleMeasurement],
    area_minimum_percent: f64,
) -> Vec<ParticleMeasurement> {
    particles
        .iter()
        .filter(|p| passes_area_filter(p, area_minimum_percent))
        .copied()
        .collect()
}

/// Primary candidate among the particles that pass the area filter, and how
/// many passed.
///
/// Same answer as [`primary_candidate`] over [`filter_by_area`], without
/// building the filtered list.
pub fn filtered_primary(
    particles: &[ParticleMeasurement],
    area_minimum_percent: f64,
) -> (Option<&ParticleMeasurement>, usize) {
    particles
        .iter()
        .filter(|p| passes_area_filter(p, area_minimum_percent))
        .fold((None, 0), |(best, count), particle| {
            (keep_larger(best, particle), count + 1)
        })
}
