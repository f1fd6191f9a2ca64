//! Template-mesh displacement and flat-shaded coloring

use glam::Vec3;

use crate::math::Aabb;
use crate::terrain::gradient::Color;
use crate::terrain::noise::{NoiseConfig, NoiseField};

/// One vertex of the undeformed template mesh.
///
/// Boundary vertices are invariant anchors: sculpting always leaves them at
/// height zero so neighboring geometry keeps a seamless border.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TemplateVertex {
    pub position: Vec3,
    pub is_boundary: bool,
}

impl TemplateVertex {
    pub fn new(position: Vec3) -> Self {
        Self { position, is_boundary: false }
    }

    pub fn boundary(position: Vec3) -> Self {
        Self { position, is_boundary: true }
    }
}

/// Sculpted island geometry.
///
/// Vertices are split per triangle for flat shading, so `vertices`, `colors`,
/// and `normals` each hold three entries per triangle — the output vertex
/// count is `3 * triangles.len()`, not the template's vertex count.
#[derive(Clone, Debug, PartialEq)]
pub struct TerrainMeshResult {
    pub vertices: Vec<Vec3>,
    pub triangles: Vec<[u32; 3]>,
    pub colors: Vec<Color>,
    pub normals: Vec<Vec3>,
    pub bounds: Aabb,
    pub min_height: f32,
    pub max_height: f32,
}

impl TerrainMeshResult {
    fn empty() -> Self {
        Self {
            vertices: Vec::new(),
            triangles: Vec::new(),
            colors: Vec::new(),
            normals: Vec::new(),
            bounds: Aabb::default(),
            min_height: 0.0,
            max_height: 0.0,
        }
    }
}

/// Displace a template mesh by fractal noise and color it by height.
///
/// Pass 1 writes `height_curve(noise) * height_multiplier` into each vertex's
/// z axis (planar axes untouched), pinning boundary vertices to zero and
/// tracking the height extrema. Pass 2 splits vertices per triangle, colors
/// each face from its mean height via `color_gradient`, and recomputes
/// per-face normals and bounds.
///
/// Triangle indices must be in range for `template`. An empty template or
/// triangle list yields an empty, valid result.
pub fn sculpt(
    template: &[TemplateVertex],
    triangles: &[[u32; 3]],
    cfg: &NoiseConfig,
    height_curve: impl Fn(f32) -> f32,
    height_multiplier: f32,
    color_gradient: impl Fn(f32) -> Color,
) -> TerrainMeshResult {
    if template.is_empty() || triangles.is_empty() {
        return TerrainMeshResult::empty();
    }

    let field = NoiseField::new(cfg);
    let scale = cfg.safe_scale();

    let mut displaced = Vec::with_capacity(template.len());
    let mut min_height = f32::MAX;
    let mut max_height = f32::MIN;
    for v in template {
        let p = v.position;
        let final_height = if v.is_boundary {
            0.0
        } else {
            let raw = field.height(p.x * scale, p.y * scale);
            height_curve(raw) * height_multiplier
        };
        min_height = min_height.min(final_height);
        max_height = max_height.max(final_height);
        displaced.push(Vec3::new(p.x, p.y, final_height));
    }

    let mut vertices = Vec::with_capacity(triangles.len() * 3);
    let mut out_triangles = Vec::with_capacity(triangles.len());
    let mut colors = Vec::with_capacity(triangles.len() * 3);
    let mut normals = Vec::with_capacity(triangles.len() * 3);

    for (i, tri) in triangles.iter().enumerate() {
        let [a, b, c] = tri.map(|idx| displaced[idx as usize]);

        let avg_height = (a.z + b.z + c.z) / 3.0;
        let t = inverse_lerp(min_height, max_height, avg_height).clamp(0.0, 1.0);
        let color = color_gradient(t);
        let normal = (b - a).cross(c - a).normalize_or_zero();

        let base = (i * 3) as u32;
        vertices.extend_from_slice(&[a, b, c]);
        out_triangles.push([base, base + 1, base + 2]);
        colors.extend_from_slice(&[color; 3]);
        normals.extend_from_slice(&[normal; 3]);
    }

    let bounds = Aabb::from_points(&vertices);

    TerrainMeshResult {
        vertices,
        triangles: out_triangles,
        colors,
        normals,
        bounds,
        min_height,
        max_height,
    }
}

fn inverse_lerp(a: f32, b: f32, v: f32) -> f32 {
    let span = b - a;
    if span.abs() <= f32::EPSILON {
        0.0
    } else {
        (v - a) / span
    }
}
