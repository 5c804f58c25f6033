//! Tunable generator parameters. Defaults reproduce the reference digger.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Upper bound on either grid dimension.
pub const MAX_DIMENSION: usize = 4096;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    pub width: usize,
    pub height: usize,
    /// Inclusive range for both room width and room depth.
    pub min_room_size: i32,
    pub max_room_size: i32,
    pub min_corridor_length: i32,
    pub max_corridor_length: i32,
    /// Room-or-corridor attempts per doorway candidate.
    pub max_tries: u32,
    /// Reject corridors that do not run into existing floor.
    pub prune_dead_ends: bool,
    /// Stop after this many resolved candidates.
    pub max_iterations: Option<usize>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            width: 80,
            height: 25,
            min_room_size: 3,
            max_room_size: 6,
            min_corridor_length: 2,
            max_corridor_length: 6,
            max_tries: 5,
            prune_dead_ends: true,
            max_iterations: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("grid must be at least 1x1, got {width}x{height}")]
    EmptyGrid { width: usize, height: usize },
    #[error("grid dimension {value} exceeds the maximum of {max}", max = MAX_DIMENSION)]
    DimensionTooLarge { value: usize },
    #[error("room size must be at least 1, got {0}")]
    RoomTooSmall(i32),
    #[error("room size range {min}..={max} is empty")]
    InvertedRoomRange { min: i32, max: i32 },
    #[error("corridor length must be at least 1, got {0}")]
    CorridorTooShort(i32),
    #[error("corridor length range {min}..={max} is empty")]
    InvertedCorridorRange { min: i32, max: i32 },
    #[error("max_tries must be at least 1")]
    NoTries,
}

impl GeneratorConfig {
    pub fn with_size(width: usize, height: usize) -> Self {
        Self { width, height, ..Self::default() }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::EmptyGrid { width: self.width, height: self.height });
        }
        for value in [self.width, self.height] {
            if value > MAX_DIMENSION {
                return Err(ConfigError::DimensionTooLarge { value });
            }
        }
        if self.min_room_size < 1 {
            return Err(ConfigError::RoomTooSmall(self.min_room_size));
        }
        if self.min_room_size > self.max_room_size {
            return Err(ConfigError::InvertedRoomRange {
                min: self.min_room_size,
                max: self.max_room_size,
            });
        }
        if self.min_corridor_length < 1 {
            return Err(ConfigError::CorridorTooShort(self.min_corridor_length));
        }
        if self.min_corridor_length > self.max_corridor_length {
            return Err(ConfigError::InvertedCorridorRange {
                min: self.min_corridor_length,
                max: self.max_corridor_length,
            });
        }
        if self.max_tries == 0 {
            return Err(ConfigError::NoTries);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_matches_reference_constants_and_validates() {
        let config = GeneratorConfig::default();
        assert_eq!((config.min_room_size, config.max_room_size), (3, 6));
        assert_eq!((config.min_corridor_length, config.max_corridor_length), (2, 6));
        assert_eq!(config.max_tries, 5);
        assert!(config.prune_dead_ends);
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn tiny_grids_are_valid() {
        assert_eq!(GeneratorConfig::with_size(1, 1).validate(), Ok(()));
        assert_eq!(GeneratorConfig::with_size(3, 3).validate(), Ok(()));
    }

    #[test]
    fn rejects_zero_sized_and_oversized_grids() {
        assert_eq!(
            GeneratorConfig::with_size(0, 10).validate(),
            Err(ConfigError::EmptyGrid { width: 0, height: 10 })
        );
        assert_eq!(
            GeneratorConfig::with_size(10, MAX_DIMENSION + 1).validate(),
            Err(ConfigError::DimensionTooLarge { value: MAX_DIMENSION + 1 })
        );
    }

    #[test]
    fn rejects_inverted_ranges() {
        let rooms = GeneratorConfig { min_room_size: 5, max_room_size: 4, ..Default::default() };
        assert_eq!(rooms.validate(), Err(ConfigError::InvertedRoomRange { min: 5, max: 4 }));

        let corridors =
            GeneratorConfig { min_corridor_length: 0, ..GeneratorConfig::default() };
        assert_eq!(corridors.validate(), Err(ConfigError::CorridorTooShort(0)));

        let tries = GeneratorConfig { max_tries: 0, ..GeneratorConfig::default() };
        let err = tries.validate().expect_err("zero tries should be rejected");
        assert!(err.to_string().contains("max_tries"), "unexpected message: {err}");
    }
}
