//! Simulation configuration.
//!
//! Loaded from an optional JSON file, then overridden by command-line flags.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::cli::Args;
use crate::models::constants::FRAME_RATE;
use crate::models::errors::{GameError, GameResult};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    pub seed: u64,
    /// Raw difficulty level. Values outside 1-5 degrade to defaults.
    pub difficulty: u32,
    pub frame_rate: f64,
    pub max_frames: u64,
    /// Print a JSON scene snapshot once per simulated second.
    pub emit_snapshots: bool,
}

impl Default for SimConfig {
    fn default() -> Self {
        SimConfig {
            seed: 0,
            difficulty: 1,
            frame_rate: FRAME_RATE,
            max_frames: 60 * 60 * 10,
            emit_snapshots: false,
        }
    }
}

impl SimConfig {
    pub fn from_json(text: &str) -> GameResult<Self> {
        let config: SimConfig = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> GameResult<Self> {
        let text = std::fs::read_to_string(path)?;
        log::debug!("Loaded config from {}", path.display());
        Self::from_json(&text)
    }

    /// Build the effective config: file (if given) then flags.
    pub fn resolve(args: &Args) -> GameResult<Self> {
        let mut config = match &args.config {
            Some(path) => Self::load(path)?,
            None => Self::default(),
        };
        config.apply_args(args);
        config.validate()?;
        Ok(config)
    }

    pub fn apply_args(&mut self, args: &Args) {
        if let Some(seed) = args.seed {
            self.seed = seed;
        }
        if let Some(difficulty) = args.difficulty {
            self.difficulty = difficulty;
        }
        if let Some(frames) = args.frames {
            self.max_frames = frames;
        }
        if args.json {
            self.emit_snapshots = true;
        }
    }

    pub fn validate(&self) -> GameResult<()> {
        if !(self.frame_rate.is_finite() && self.frame_rate > 0.0) {
            return Err(GameError::Config(format!("frame_rate must be positive, got {}", self.frame_rate)));
        }
        Ok(())
    }

    /// Seconds per frame.
    pub fn frame_delta(&self) -> f64 {
        1.0 / self.frame_rate
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn missing_fields_use_defaults() {
        let config = SimConfig::from_json(r#"{ "seed": 99 }"#).unwrap();
        assert_eq!(
            config,
            SimConfig {
                seed: 99,
                ..SimConfig::default()
            }
        );
    }

    #[test]
    fn rejects_bad_frame_rate() {
        let err = SimConfig::from_json(r#"{ "frame_rate": 0 }"#).unwrap_err();
        assert!(matches!(err, GameError::Config(_)));
    }

    #[test]
    fn rejects_malformed_json() {
        assert!(matches!(SimConfig::from_json("{ seed"), Err(GameError::Json(_))));
    }

    #[test]
    fn flags_override_file_values() {
        let mut config = SimConfig::from_json(r#"{ "seed": 1, "difficulty": 2 }"#).unwrap();
        let args = Args {
            seed: Some(5),
            frames: Some(100),
            json: true,
            ..Args::default()
        };
        config.apply_args(&args);
        assert_eq!(config.seed, 5);
        assert_eq!(config.difficulty, 2);
        assert_eq!(config.max_frames, 100);
        assert!(config.emit_snapshots);
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = SimConfig::load(Path::new("/definitely/not/here.json")).unwrap_err();
        assert!(matches!(err, GameError::IoError(_)));
    }
}
