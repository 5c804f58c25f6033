//! Generator settings from a TOML file plus command-line overrides.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use digger_core::GeneratorConfig;

#[derive(Debug, Default)]
pub struct Overrides {
    pub width: Option<usize>,
    pub height: Option<usize>,
    pub keep_dead_ends: bool,
    pub max_tries: Option<u32>,
    pub max_iterations: Option<usize>,
}

pub fn load_config(path: &Path) -> Result<GeneratorConfig> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;
    toml::from_str(&text)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))
}

pub fn apply_overrides(config: &mut GeneratorConfig, overrides: &Overrides) {
    if let Some(width) = overrides.width {
        config.width = width;
    }
    if let Some(height) = overrides.height {
        config.height = height;
    }
    if overrides.keep_dead_ends {
        config.prune_dead_ends = false;
    }
    if let Some(max_tries) = overrides.max_tries {
        config.max_tries = max_tries;
    }
    if overrides.max_iterations.is_some() {
        config.max_iterations = overrides.max_iterations;
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::NamedTempFile;

    use super::*;

    fn write_config(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().expect("temp file should be created");
        file.write_all(contents.as_bytes()).expect("temp file should be writable");
        file
    }

    #[test]
    fn partial_file_keeps_defaults_for_missing_keys() {
        let file = write_config("width = 40\nprune_dead_ends = false\n");
        let config = load_config(file.path()).expect("partial config should parse");

        assert_eq!(config.width, 40);
        assert!(!config.prune_dead_ends);
        assert_eq!(config.height, GeneratorConfig::default().height);
        assert_eq!(config.max_tries, 5);
    }

    #[test]
    fn full_file_round_trips_every_field() {
        let file = write_config(
            "width = 30\nheight = 12\nmin_room_size = 2\nmax_room_size = 4\n\
             min_corridor_length = 3\nmax_corridor_length = 8\nmax_tries = 9\n\
             prune_dead_ends = true\nmax_iterations = 500\n",
        );
        let config = load_config(file.path()).expect("full config should parse");
        assert_eq!(
            config,
            GeneratorConfig {
                width: 30,
                height: 12,
                min_room_size: 2,
                max_room_size: 4,
                min_corridor_length: 3,
                max_corridor_length: 8,
                max_tries: 9,
                prune_dead_ends: true,
                max_iterations: Some(500),
            }
        );
    }

    #[test]
    fn malformed_file_reports_its_path() {
        let file = write_config("width = \"wide\"\n");
        let err = load_config(file.path()).expect_err("string width should be rejected");
        assert!(
            format!("{err:#}").contains("Failed to parse config file"),
            "error should name the parse step: {err:#}"
        );
    }

    #[test]
    fn missing_file_is_an_error() {
        let dir = tempfile::tempdir().expect("temp dir should be created");
        let err = load_config(&dir.path().join("absent.toml")).expect_err("missing file");
        assert!(format!("{err:#}").contains("Failed to read config file"));
    }

    #[test]
    fn command_line_values_override_the_file() {
        let mut config = GeneratorConfig::with_size(30, 12);
        apply_overrides(
            &mut config,
            &Overrides {
                width: Some(64),
                keep_dead_ends: true,
                max_iterations: Some(10),
                ..Overrides::default()
            },
        );
        assert_eq!(config.width, 64);
        assert_eq!(config.height, 12);
        assert!(!config.prune_dead_ends);
        assert_eq!(config.max_iterations, Some(10));
        assert_eq!(config.max_tries, 5);
    }
}
