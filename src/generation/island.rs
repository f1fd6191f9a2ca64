//! Island template catalog data

use std::sync::Arc;

use glam::Vec3;

use crate::terrain::gradient::ColorGradient;
use crate::terrain::noise::NoiseConfig;
use crate::terrain::sculptor::TemplateVertex;

/// Template mesh shared between catalog entries and placements.
///
/// Sculpting never mutates a template; each placed island gets its own
/// deformed copy.
#[derive(Clone, Debug)]
pub struct MeshTemplate {
    pub vertices: Vec<TemplateVertex>,
    pub triangles: Vec<[u32; 3]>,
}

impl MeshTemplate {
    pub fn new(vertices: Vec<TemplateVertex>, triangles: Vec<[u32; 3]>) -> Self {
        Self { vertices, triangles }
    }

    /// Square plane spanning [-half_size, half_size]² with `resolution`
    /// quads per side, perimeter vertices marked as boundary.
    ///
    /// Fixture geometry for tests, benches, and the demo binary; production
    /// templates come from externally authored meshes.
    pub fn grid(half_size: f32, resolution: u32) -> Self {
        let n = resolution.max(1);
        let side = n + 1;
        let step = half_size * 2.0 / n as f32;

        let mut vertices = Vec::with_capacity((side * side) as usize);
        for row in 0..side {
            for col in 0..side {
                let position = Vec3::new(
                    -half_size + col as f32 * step,
                    -half_size + row as f32 * step,
                    0.0,
                );
                let on_edge = row == 0 || col == 0 || row == n || col == n;
                vertices.push(if on_edge {
                    TemplateVertex::boundary(position)
                } else {
                    TemplateVertex::new(position)
                });
            }
        }

        let mut triangles = Vec::with_capacity((n * n * 2) as usize);
        for row in 0..n {
            for col in 0..n {
                let i = row * side + col;
                triangles.push([i, i + side, i + 1]);
                triangles.push([i + 1, i + side, i + side + 1]);
            }
        }

        Self { vertices, triangles }
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }
}

/// Catalog entry: island mesh plus terrain parameters and spawn weighting.
///
/// Plain data, never mutated by planning; the planner draws a fresh noise
/// config per placement starting from `base_noise`.
#[derive(Clone, Debug)]
pub struct IslandTemplate {
    /// Diagnostic name, used in logs and the world manifest
    pub name: String,
    pub mesh: Arc<MeshTemplate>,
    pub base_noise: NoiseConfig,
    pub gradient: ColorGradient,
    /// Likelihood of this island being chosen, relative to the catalog total
    pub weight: u32,
    /// Minimum center-to-center clearance enforced against other islands
    pub exclusion_radius: f32,
}

/// One accepted placement.
///
/// `position` includes the vertical offset; `yaw_degrees` is presentation
/// only and plays no part in exclusion checks.
#[derive(Clone, Copy, Debug)]
pub struct PlacedIsland<'a> {
    pub template: &'a IslandTemplate,
    pub position: Vec3,
    pub yaw_degrees: f32,
    pub exclusion_radius: f32,
}
