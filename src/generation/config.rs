//! World-generation configuration

use serde::{Deserialize, Serialize};

use super::island::IslandTemplate;

/// Inclusive value ranges used to randomize each placed island's terrain.
///
/// Endpoints given in either order are accepted; the planner orders them
/// before sampling.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct NoiseRanges {
    pub scale: (f32, f32),
    pub persistence: (f32, f32),
    pub lacunarity: (f32, f32),
    pub height_multiplier: (f32, f32),
    pub octaves: (u32, u32),
    /// Sample offsets are drawn from [-offset_range, offset_range] per axis
    pub offset_range: f32,
}

impl Default for NoiseRanges {
    fn default() -> Self {
        Self {
            scale: (1.0, 6.0),
            persistence: (0.3, 0.6),
            lacunarity: (1.0, 2.0),
            height_multiplier: (0.25, 0.75),
            octaves: (1, 3),
            offset_range: 100.0,
        }
    }
}

/// Configuration for one world-generation run
#[derive(Clone, Debug)]
pub struct WorldConfig {
    /// Candidate grid points span [-half_extent, half_extent] on both axes
    pub world_half_extent: i32,
    /// Fraction of the candidate pool converted into placement attempts
    pub spawn_probability: f32,
    /// Vertical offset range applied to accepted placements
    pub min_height: f32,
    pub max_height: f32,
    /// Always placed at the world origin before any other attempt
    pub starting_template: IslandTemplate,
    pub catalog: Vec<IslandTemplate>,
    pub noise_ranges: NoiseRanges,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_noise_ranges_default() {
        let ranges = NoiseRanges::default();
        assert_eq!(ranges.scale, (1.0, 6.0));
        assert_eq!(ranges.lacunarity, (1.0, 2.0));
        assert_eq!(ranges.height_multiplier, (0.25, 0.75));
        assert_eq!(ranges.octaves, (1, 3));
        assert_eq!(ranges.offset_range, 100.0);
        assert!(ranges.persistence.0 <= ranges.persistence.1);
    }
}
