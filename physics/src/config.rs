//! Loading and saving tunables and level content.
//!
//! Any serde type with a `Default` opts in through [`Config`]. The file format
//! is picked from the extension: `.ron` or `.toml`.

use std::path::Path;

use serde::{Serialize, de::DeserializeOwned};

use crate::{
    collision::{CollisionSettings, RegistrySettings},
    level::LevelContent,
    motion::MotionTuning,
};

#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error in {path}: {message}")]
    Parse { path: String, message: String },

    #[error("Serialization error: {0}")]
    Serialize(String),

    #[error("Unsupported format: {0} (expected .ron or .toml)")]
    UnsupportedFormat(String),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Format {
    Ron,
    Toml,
}

impl Format {
    fn from_path(path: &Path) -> Result<Self, ConfigError> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("ron") => Ok(Self::Ron),
            Some("toml") => Ok(Self::Toml),
            _ => Err(ConfigError::UnsupportedFormat(path.display().to_string())),
        }
    }
}

pub trait Config: Serialize + DeserializeOwned + Default {
    /// Parse `Self` from a `.ron` or `.toml` file.
    fn load_from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let format = Format::from_path(path)?;
        let contents = std::fs::read_to_string(path)?;

        let parsed = match format {
            Format::Ron => ron::from_str(&contents).map_err(|e| e.to_string()),
            Format::Toml => toml::from_str(&contents).map_err(|e| e.to_string()),
        };
        parsed.map_err(|message| ConfigError::Parse {
            path: path.display().to_string(),
            message,
        })
    }

    /// Like [`Config::load_from_file`], but falls back to `Default` when the
    /// file does not exist. Any other failure is still an error.
    fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if !path.exists() {
            log::info!("{} not found, using defaults", path.display());
            return Ok(Self::default());
        }
        Self::load_from_file(path)
    }

    fn save_to_file(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let path = path.as_ref();
        let contents = match Format::from_path(path)? {
            Format::Ron => ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())
                .map_err(|e| ConfigError::Serialize(e.to_string()))?,
            Format::Toml => {
                toml::to_string_pretty(self).map_err(|e| ConfigError::Serialize(e.to_string()))?
            }
        };
        std::fs::write(path, contents)?;
        Ok(())
    }
}

impl Config for CollisionSettings {}
impl Config for RegistrySettings {}
impl Config for MotionTuning {}
impl Config for LevelContent {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::level::{GroundSegment, Platform, PlatformKind};
    use std::path::PathBuf;

    fn scratch(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("runner-physics-{}-{}", std::process::id(), name))
    }

    #[test]
    fn unknown_extension_is_rejected() {
        let err = CollisionSettings::load_from_file("settings.json").unwrap_err();
        assert!(matches!(err, ConfigError::UnsupportedFormat(_)));

        let err = CollisionSettings::default()
            .save_to_file(scratch("settings.yaml"))
            .unwrap_err();
        assert!(matches!(err, ConfigError::UnsupportedFormat(_)));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = MotionTuning::load_from_file(scratch("does-not-exist.ron")).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let tuning = MotionTuning::load_or_default(scratch("absent.toml")).unwrap();
        assert_eq!(tuning, MotionTuning::default());
    }

    #[test]
    fn partial_toml_keeps_other_defaults() {
        let path = scratch("partial.toml");
        std::fs::write(&path, "grounding_tolerance = 0.05\n").unwrap();

        let settings = CollisionSettings::load_from_file(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(settings.grounding_tolerance, 0.05);
        assert_eq!(
            settings.landing_band_above,
            CollisionSettings::default().landing_band_above
        );
    }

    #[test]
    fn malformed_ron_reports_parse_error() {
        let path = scratch("broken.ron");
        std::fs::write(&path, "(ground: [ (z: ").unwrap();

        let err = LevelContent::load_from_file(&path).unwrap_err();
        std::fs::remove_file(&path).ok();

        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn level_saved_as_ron_loads_back() {
        let level = LevelContent {
            ground: vec![GroundSegment {
                x: 0.0,
                z: -10.0,
                length: 20.0,
                width: 4.0,
                rock_layer_height: 0.2,
            }],
            platforms: vec![Platform {
                x: 1.0,
                y: 1.5,
                z: -6.0,
                width: 2.0,
                height: 0.3,
                depth: 2.0,
                kind: PlatformKind::Crumbling,
            }],
            ..Default::default()
        };
        let path = scratch("level.ron");

        level.save_to_file(&path).unwrap();
        let loaded = LevelContent::load_from_file(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(loaded, level);
    }
}
