//! Island placement under weighted selection and exclusion radii

use glam::{Vec2, Vec3};
use rand::Rng;
use rand::seq::SliceRandom;

use crate::core::error::Error;
use crate::core::types::Result;
use crate::terrain::noise::NoiseConfig;

use super::config::{NoiseRanges, WorldConfig};
use super::island::{IslandTemplate, PlacedIsland};

/// Planner output row: where an island goes plus the terrain parameters
/// synthesized for it.
#[derive(Clone, Debug)]
pub struct Placement<'a> {
    pub island: PlacedIsland<'a>,
    pub noise: NoiseConfig,
    pub height_multiplier: f32,
}

/// Plan the island layout for one world.
///
/// The starting template is placed at the origin unconditionally, then the
/// candidate grid is shuffled and the leading `pool * spawn_probability`
/// points become placement attempts — a fixed attempt count rather than a
/// per-point coin flip, which bounds total work up front. Attempts that land
/// inside an existing island's clearance are skipped without retry.
///
/// Planning is sequential by construction: every exclusion check depends on
/// all placements accepted before it.
pub fn plan<'a, R: Rng>(cfg: &'a WorldConfig, rng: &mut R) -> Result<Vec<Placement<'a>>> {
    if cfg.world_half_extent < 0 {
        return Err(Error::InvalidWorldExtent(cfg.world_half_extent));
    }
    let total_weight: u64 = cfg.catalog.iter().map(|t| u64::from(t.weight)).sum();
    if total_weight == 0 {
        return Err(Error::ZeroCatalogWeight);
    }
    if cfg.starting_template.mesh.is_empty() {
        return Err(Error::MissingStartingMesh);
    }

    let mut placements = Vec::new();
    placements.push(make_placement(
        &cfg.starting_template,
        Vec3::ZERO,
        &cfg.noise_ranges,
        rng,
    ));

    let half = cfg.world_half_extent;
    let side = half as i64 * 2 + 1;
    let mut candidates = Vec::with_capacity((side * side) as usize);
    for x in -half..=half {
        for z in -half..=half {
            candidates.push((x, z));
        }
    }
    candidates.shuffle(rng);

    let spawn_probability = cfg.spawn_probability.clamp(0.0, 1.0);
    let attempts = (candidates.len() as f32 * spawn_probability).round() as usize;

    let (height_lo, height_hi) = ordered(cfg.min_height, cfg.max_height);

    let mut rejected = 0usize;
    for &(x, z) in candidates.iter().take(attempts) {
        let template = select_weighted(&cfg.catalog, total_weight, rng);

        // The height offset is drawn before the clearance check so the check
        // runs against the candidate's true center, vertical offset included.
        let height = rng.gen_range(height_lo..=height_hi);
        let candidate = Vec3::new(x as f32, height, z as f32);

        if is_obstructed(&placements, candidate, template.exclusion_radius) {
            log::debug!("rejected ({x}, {z}) for {}: too close", template.name);
            rejected += 1;
            continue;
        }

        placements.push(make_placement(template, candidate, &cfg.noise_ranges, rng));
    }

    log::info!(
        "placed {} islands ({} attempts, {} rejected)",
        placements.len(),
        attempts,
        rejected
    );
    Ok(placements)
}

fn make_placement<'a, R: Rng>(
    template: &'a IslandTemplate,
    position: Vec3,
    ranges: &NoiseRanges,
    rng: &mut R,
) -> Placement<'a> {
    let yaw_degrees = rng.gen_range(0.0f32..360.0);
    let (noise, height_multiplier) = synthesize_noise(&template.base_noise, ranges, rng);
    Placement {
        island: PlacedIsland {
            template,
            position,
            yaw_degrees,
            exclusion_radius: template.exclusion_radius,
        },
        noise,
        height_multiplier,
    }
}

/// Draw a fresh terrain parameter set for one placed island.
///
/// Starts from the template's authored config and overwrites the randomized
/// fields, so every island carries independent terrain parameters.
pub fn synthesize_noise<R: Rng>(
    base: &NoiseConfig,
    ranges: &NoiseRanges,
    rng: &mut R,
) -> (NoiseConfig, f32) {
    let mut noise = base.clone();
    noise.scale = sample_range(rng, ranges.scale);
    noise.persistence = sample_range(rng, ranges.persistence);
    noise.lacunarity = sample_range(rng, ranges.lacunarity);
    let height_multiplier = sample_range(rng, ranges.height_multiplier);
    let (octaves_lo, octaves_hi) = if ranges.octaves.0 <= ranges.octaves.1 {
        ranges.octaves
    } else {
        (ranges.octaves.1, ranges.octaves.0)
    };
    noise.octaves = rng.gen_range(octaves_lo..=octaves_hi);
    noise.seed = rng.gen_range(0..i64::MAX);
    noise.offset = Vec2::new(
        sample_range(rng, (-ranges.offset_range, ranges.offset_range)),
        sample_range(rng, (-ranges.offset_range, ranges.offset_range)),
    );
    (noise, height_multiplier)
}

fn sample_range<R: Rng>(rng: &mut R, range: (f32, f32)) -> f32 {
    let (lo, hi) = ordered(range.0, range.1);
    rng.gen_range(lo..=hi)
}

fn ordered(a: f32, b: f32) -> (f32, f32) {
    if a <= b { (a, b) } else { (b, a) }
}

/// Weighted draw over the catalog.
///
/// The inclusive comparison gives the first entry a marginally larger share
/// at the range boundary; known, accepted bias.
fn select_weighted<'a, R: Rng>(
    catalog: &'a [IslandTemplate],
    total_weight: u64,
    rng: &mut R,
) -> &'a IslandTemplate {
    let r = rng.gen_range(0..total_weight);
    let mut cumulative = 0u64;
    for template in catalog {
        cumulative += u64::from(template.weight);
        if r <= cumulative {
            return template;
        }
    }
    // Unreachable while r < total_weight; the walk covers the full range.
    &catalog[catalog.len() - 1]
}

/// An island may not stand closer to an existing one than the larger of the
/// two exclusion radii (not their sum). Distances are 3D, so vertical offsets
/// count.
fn is_obstructed(placements: &[Placement], candidate: Vec3, radius: f32) -> bool {
    placements.iter().any(|p| {
        let dist = p.island.position.distance(candidate);
        dist < p.island.exclusion_radius || dist < radius
    })
}
