//! World generation pipeline — plans the island layout, then sculpts each
//! placed island's terrain.

pub mod config;
pub mod island;
pub mod layout;

pub use config::{NoiseRanges, WorldConfig};
pub use island::{IslandTemplate, MeshTemplate, PlacedIsland};
pub use layout::{Placement, plan};

use rand::Rng;
use rayon::prelude::*;

use crate::core::types::Result;
use crate::terrain::sculptor::{TerrainMeshResult, sculpt};

/// One fully generated island: placement plus sculpted geometry
#[derive(Debug)]
pub struct GeneratedIsland<'a> {
    pub placement: Placement<'a>,
    pub mesh: TerrainMeshResult,
}

/// Orchestrates layout planning and per-island terrain sculpting.
///
/// The only component aware of both the planner and the sculptor.
pub struct GenerationPipeline<'a> {
    cfg: &'a WorldConfig,
}

impl<'a> GenerationPipeline<'a> {
    pub fn new(cfg: &'a WorldConfig) -> Self {
        Self { cfg }
    }

    /// Generate the whole world in one batch.
    ///
    /// Planning is sequential; sculpting fans out across islands with rayon
    /// since each sculpt is a pure transform of its own placement.
    pub fn generate<R: Rng>(&self, rng: &mut R) -> Result<Vec<GeneratedIsland<'a>>> {
        let start = std::time::Instant::now();
        let placements = layout::plan(self.cfg, rng)?;

        let islands: Vec<GeneratedIsland> = placements
            .into_par_iter()
            .map(|placement| {
                let template = placement.island.template;
                let mesh = sculpt(
                    &template.mesh.vertices,
                    &template.mesh.triangles,
                    &placement.noise,
                    // Linear height curve, clamped outside its key range.
                    |h| h.clamp(0.0, 1.0),
                    placement.height_multiplier,
                    |t| template.gradient.evaluate(t),
                );
                GeneratedIsland { placement, mesh }
            })
            .collect();

        log::info!(
            "generated {} islands in {:.2}s",
            islands.len(),
            start.elapsed().as_secs_f64()
        );
        Ok(islands)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::Error;
    use crate::terrain::gradient::ColorGradient;
    use crate::terrain::noise::NoiseConfig;
    use glam::Vec3;
    use rand::SeedableRng;
    use rand_pcg::Pcg64Mcg;
    use std::sync::Arc;

    fn template(name: &str, weight: u32, exclusion_radius: f32) -> IslandTemplate {
        IslandTemplate {
            name: name.to_string(),
            mesh: Arc::new(MeshTemplate::grid(4.0, 6)),
            base_noise: NoiseConfig::default(),
            gradient: ColorGradient::island(),
            weight,
            exclusion_radius,
        }
    }

    fn config() -> WorldConfig {
        WorldConfig {
            world_half_extent: 8,
            spawn_probability: 0.2,
            min_height: -25.0,
            max_height: 25.0,
            starting_template: template("haven", 0, 4.0),
            catalog: vec![template("meadow", 60, 3.0), template("crag", 40, 5.0)],
            noise_ranges: NoiseRanges::default(),
        }
    }

    #[test]
    fn test_pipeline_sculpts_every_placement() {
        let cfg = config();
        let pipeline = GenerationPipeline::new(&cfg);
        let islands = pipeline.generate(&mut Pcg64Mcg::seed_from_u64(4)).unwrap();

        assert!(!islands.is_empty());
        for island in &islands {
            let template = island.placement.island.template;
            assert_eq!(island.mesh.triangles.len(), template.mesh.triangles.len());
            assert_eq!(island.mesh.vertices.len(), template.mesh.triangles.len() * 3);
        }
    }

    #[test]
    fn test_pipeline_sculpts_starting_island() {
        let cfg = config();
        let pipeline = GenerationPipeline::new(&cfg);
        let islands = pipeline.generate(&mut Pcg64Mcg::seed_from_u64(4)).unwrap();

        let start = &islands[0];
        assert_eq!(start.placement.island.position, Vec3::ZERO);
        assert!(!start.mesh.vertices.is_empty());
    }

    #[test]
    fn test_pipeline_deterministic_for_a_seed() {
        let cfg = config();
        let pipeline = GenerationPipeline::new(&cfg);
        let a = pipeline.generate(&mut Pcg64Mcg::seed_from_u64(21)).unwrap();
        let b = pipeline.generate(&mut Pcg64Mcg::seed_from_u64(21)).unwrap();

        assert_eq!(a.len(), b.len());
        for (ia, ib) in a.iter().zip(&b) {
            assert_eq!(ia.placement.island.position, ib.placement.island.position);
            assert_eq!(ia.mesh, ib.mesh);
        }
    }

    #[test]
    fn test_pipeline_propagates_config_errors() {
        let mut cfg = config();
        for t in &mut cfg.catalog {
            t.weight = 0;
        }
        let pipeline = GenerationPipeline::new(&cfg);
        let err = pipeline.generate(&mut Pcg64Mcg::seed_from_u64(1)).unwrap_err();
        assert!(matches!(err, Error::ZeroCatalogWeight));
    }
}
