//! Error types for world generation

use thiserror::Error;

/// Main error type for the generator.
///
/// Every variant is a fatal configuration error: planning aborts and no
/// partial world is returned. Degenerate but well-formed inputs (an empty
/// template mesh handed to the sculptor, zero octaves, near-zero scale) are
/// absorbed instead of surfaced here.
#[derive(Debug, Error)]
pub enum Error {
    #[error("world half-extent must be non-negative, got {0}")]
    InvalidWorldExtent(i32),

    #[error("island catalog has zero total spawn weight")]
    ZeroCatalogWeight,

    #[error("starting island template has no mesh")]
    MissingStartingMesh,
}
