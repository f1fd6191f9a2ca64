//! World generator binary — plans an island layout, sculpts every island,
//! and writes a placement manifest.
//!
//! Usage: cargo run --release --bin generate_world -- [OPTIONS]
//!
//! Options:
//!   --size <EXTENT>     World half-extent in grid units (default: 50)
//!   --seed <SEED>       Random seed (default: 12345)
//!   --probability <P>   Spawn probability over the candidate pool (default: 0.01)
//!   --out <PATH>        Manifest output path (default: manifest.json)

use std::sync::Arc;

use rand::SeedableRng;
use rand_pcg::Pcg64Mcg;
use serde_json::json;

use islegen::generation::{
    GenerationPipeline, IslandTemplate, MeshTemplate, NoiseRanges, WorldConfig,
};
use islegen::terrain::gradient::ColorGradient;
use islegen::terrain::noise::NoiseConfig;

fn main() {
    islegen::core::logging::init();

    let args: Vec<String> = std::env::args().collect();
    let half_extent = parse_i32_arg(&args, "--size").unwrap_or(50);
    let seed = parse_u64_arg(&args, "--seed").unwrap_or(12345);
    let probability = parse_f32_arg(&args, "--probability").unwrap_or(0.01);
    let out = parse_str_arg(&args, "--out").unwrap_or_else(|| "manifest.json".to_string());

    println!("=== Islegen World Generator ===");
    println!("Extent:      ±{} grid units", half_extent);
    println!("Seed:        {}", seed);
    println!("Probability: {}", probability);
    println!("Output:      {}", out);
    println!();

    let cfg = WorldConfig {
        world_half_extent: half_extent,
        spawn_probability: probability,
        min_height: -25.0,
        max_height: 25.0,
        starting_template: island("haven", 10.0, 20, 0, 15.0),
        catalog: vec![
            island("meadow", 8.0, 16, 60, 12.0),
            island("highland", 12.0, 24, 30, 20.0),
            island("crag", 6.0, 12, 10, 8.0),
        ],
        noise_ranges: NoiseRanges::default(),
    };

    let mut rng = Pcg64Mcg::seed_from_u64(seed);
    let pipeline = GenerationPipeline::new(&cfg);
    let islands = match pipeline.generate(&mut rng) {
        Ok(islands) => islands,
        Err(e) => {
            log::error!("generation failed: {e}");
            std::process::exit(1);
        }
    };

    let manifest = json!({
        "seed": seed,
        "world_half_extent": half_extent,
        "spawn_probability": probability,
        "islands": islands.iter().map(|i| {
            let placed = &i.placement.island;
            json!({
                "template": placed.template.name,
                "position": [placed.position.x, placed.position.y, placed.position.z],
                "yaw_degrees": placed.yaw_degrees,
                "exclusion_radius": placed.exclusion_radius,
                "noise": i.placement.noise,
                "height_multiplier": i.placement.height_multiplier,
                "vertex_count": i.mesh.vertices.len(),
                "height_range": [i.mesh.min_height, i.mesh.max_height],
            })
        }).collect::<Vec<_>>(),
    });

    std::fs::write(&out, serde_json::to_string_pretty(&manifest).unwrap())
        .expect("Failed to write manifest");

    let vertex_total: usize = islands.iter().map(|i| i.mesh.vertices.len()).sum();
    println!();
    println!("=== Generation Complete ===");
    println!("Islands:  {}", islands.len());
    println!("Vertices: {} across all sculpted meshes", vertex_total);
    println!("Manifest: {}", out);
}

/// Catalog entry with a grid fixture mesh standing in for authored assets.
fn island(name: &str, half_size: f32, resolution: u32, weight: u32, radius: f32) -> IslandTemplate {
    IslandTemplate {
        name: name.to_string(),
        mesh: Arc::new(MeshTemplate::grid(half_size, resolution)),
        base_noise: NoiseConfig::default(),
        gradient: ColorGradient::island(),
        weight,
        exclusion_radius: radius,
    }
}

fn parse_f32_arg(args: &[String], flag: &str) -> Option<f32> {
    args.iter().position(|a| a == flag)
        .and_then(|i| args.get(i + 1))
        .and_then(|s| s.parse().ok())
}

fn parse_i32_arg(args: &[String], flag: &str) -> Option<i32> {
    args.iter().position(|a| a == flag)
        .and_then(|i| args.get(i + 1))
        .and_then(|s| s.parse().ok())
}

fn parse_u64_arg(args: &[String], flag: &str) -> Option<u64> {
    args.iter().position(|a| a == flag)
        .and_then(|i| args.get(i + 1))
        .and_then(|s| s.parse().ok())
}

fn parse_str_arg(args: &[String], flag: &str) -> Option<String> {
    args.iter().position(|a| a == flag)
        .and_then(|i| args.get(i + 1))
        .map(|s| s.clone())
}
