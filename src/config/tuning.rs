use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::game::walker::Scene;

/// All tunable scene parameters, loaded from tuning.ron.
#[derive(Debug, Clone, PartialEq, Resource, Serialize, Deserialize)]
pub struct Tuning {
    /// Fixed timestep in seconds; one walker step per tick.
    pub dt: f32,
    /// Scrollable world width in pixels.
    pub level_width: f32,
    /// Actor screen x and leftmost walker position.
    pub start_offset: f32,
    /// Distance of the letter from the right end of the world.
    pub target_inset: f32,
    /// Pixels moved per tick.
    pub step_speed: f32,
    pub sprite_count: u8,
    /// Seconds between run frames.
    pub frame_interval: f32,
    pub actor_size: f32,
    pub letter_size: f32,
    /// Height of the ground line above the window bottom, as a fraction of window height.
    pub ground_ratio: f32,
    pub letter_bob_px: f32,
    pub letter_bob_period: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            dt: 1.0 / 60.0,
            level_width: 1380.0,
            start_offset: 100.0,
            target_inset: 150.0,
            step_speed: 3.0,
            sprite_count: 6,
            frame_interval: 0.1,
            actor_size: 64.0,
            letter_size: 35.0,
            ground_ratio: 0.1,
            letter_bob_px: 12.0,
            letter_bob_period: 1.0,
        }
    }
}

impl Tuning {
    /// Get the data directory for tuning files.
    pub fn data_dir() -> PathBuf {
        let base = dirs::data_dir().unwrap_or_else(|| PathBuf::from("."));
        base.join("letter_walk")
    }

    /// Path to the tuning file.
    pub fn file_path() -> PathBuf {
        Self::data_dir().join("tuning.ron")
    }

    pub fn target_offset(&self) -> f32 {
        self.level_width - self.target_inset
    }

    pub fn scene(&self) -> Scene {
        Scene {
            world_width: self.level_width,
            start: self.start_offset,
            target: self.target_offset(),
            step_speed: self.step_speed,
            sprite_count: self.sprite_count,
            frame_interval: self.frame_interval,
        }
    }

    /// Reject values that would break the walker bounds or the sprite layout.
    pub fn validate(&self) -> Result<(), String> {
        let positive = |name: &str, v: f32| {
            if v.is_finite() && v > 0.0 {
                Ok(())
            } else {
                Err(format!("{name} must be positive and finite, got {v}"))
            }
        };
        positive("dt", self.dt)?;
        positive("level_width", self.level_width)?;
        positive("step_speed", self.step_speed)?;
        positive("frame_interval", self.frame_interval)?;
        positive("actor_size", self.actor_size)?;
        positive("letter_size", self.letter_size)?;
        positive("letter_bob_period", self.letter_bob_period)?;
        if !(0.0..=1.0).contains(&self.ground_ratio) {
            return Err(format!("ground_ratio must lie in [0, 1], got {}", self.ground_ratio));
        }
        if !self.letter_bob_px.is_finite() || self.letter_bob_px < 0.0 {
            return Err(format!("letter_bob_px must be >= 0, got {}", self.letter_bob_px));
        }
        if !self.start_offset.is_finite() || self.start_offset < 0.0 {
            return Err(format!("start_offset must be >= 0, got {}", self.start_offset));
        }
        if !self.target_inset.is_finite() || self.target_inset < 0.0 {
            return Err(format!("target_inset must be >= 0, got {}", self.target_inset));
        }
        let target = self.target_offset();
        if target <= self.start_offset {
            return Err(format!(
                "target offset {target} must lie beyond start offset {}",
                self.start_offset
            ));
        }
        if self.sprite_count == 0 {
            return Err("sprite_count must be at least 1".into());
        }
        Ok(())
    }

    fn parse(contents: &str) -> Result<Self, String> {
        let tuning: Self = ron::from_str(contents).map_err(|e| e.to_string())?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Load from file, or create default if not found.
    pub fn load_or_default() -> Self {
        let path = Self::file_path();
        if path.exists() {
            match std::fs::read_to_string(&path) {
                Ok(contents) => match Self::parse(&contents) {
                    Ok(tuning) => {
                        info!("Loaded tuning from {:?}", path);
                        return tuning;
                    }
                    Err(e) => {
                        warn!("Rejected tuning.ron: {e}, using defaults");
                        return Self::default();
                    }
                },
                Err(e) => {
                    warn!("Failed to read tuning.ron: {e}, using defaults");
                    return Self::default();
                }
            }
        }
        let tuning = Self::default();
        tuning.save();
        tuning
    }

    /// Save current tuning to file.
    pub fn save(&self) {
        self.save_to(&Self::file_path());
    }

    /// Write pretty RON to `path`, creating its directory. Failures are logged, not returned.
    pub fn save_to(&self, path: &Path) {
        if let Some(parent) = path.parent() {
            if let Err(e) = std::fs::create_dir_all(parent) {
                warn!("Failed to create {:?}: {e}", parent);
            }
        }
        match self.to_ron() {
            Ok(s) => {
                if let Err(e) = std::fs::write(path, s) {
                    warn!("Failed to write tuning.ron: {e}");
                }
            }
            Err(e) => {
                warn!("Failed to serialize tuning: {e}");
            }
        }
    }

    fn to_ron(&self) -> Result<String, ron::Error> {
        ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())
    }

    /// Reload from file (called by key press).
    pub fn reload(&mut self) {
        *self = Self::load_or_default();
        info!("Tuning reloaded");
    }
}
