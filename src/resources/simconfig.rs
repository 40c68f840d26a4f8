//! Simulation configuration resource.
//!
//! Tunables for the simulation loaded from an INI file. Every key has a
//! default, so a missing file is never fatal.
//!
//! # Configuration File Format
//!
//! ```ini
//! [simulation]
//! seek_speed = 0.2
//! arrival_epsilon = 0.01
//! bound = 1.0
//!
//! [selection]
//! changed_activates = true
//!
//! [spawn]
//! count = 10
//! seed = 42
//! spread = 0.5
//! initial_speed = 0.0
//! texture = res/ant.png
//! sprite_scale = 0.05
//!
//! [debug]
//! enabled = false
//! ```

use bevy_ecs::prelude::*;
use configparser::ini::Ini;
use log::info;
use std::path::PathBuf;

use crate::error::ConfigError;

/// Default safe values for startup
const DEFAULT_SEEK_SPEED: f32 = 0.2;
const DEFAULT_ARRIVAL_EPSILON: f32 = 0.01;
const DEFAULT_BOUND: f32 = 1.0;
const DEFAULT_CHANGED_ACTIVATES: bool = true;
const DEFAULT_SPAWN_COUNT: u32 = 10;
const DEFAULT_SEED: u64 = 42;
const DEFAULT_SPREAD: f32 = 0.5;
const DEFAULT_INITIAL_SPEED: f32 = 0.0;
const DEFAULT_TEXTURE: &str = "res/ant.png";
const DEFAULT_SPRITE_SCALE: f32 = 0.05;
const DEFAULT_DEBUG: bool = false;
const DEFAULT_CONFIG_PATH: &str = "./config.ini";

/// Simulation configuration resource.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct SimConfig {
    /// Constant speed of a seeking unit, in world units per second.
    pub seek_speed: f32,
    /// Distance to the target under which a job counts as done.
    pub arrival_epsilon: f32,
    /// Half extent of the square playfield on x and y.
    pub bound: f32,
    /// Whether `SelectionChanged` received while idle starts a drag.
    pub changed_activates: bool,
    /// Number of units scattered at startup.
    pub spawn_count: u32,
    /// Seed for the scatter random source.
    pub seed: u64,
    /// Initial positions are uniform in `[-spread, spread)` on x and y.
    pub spread: f32,
    /// When positive, each unit starts moving at this speed in a random heading.
    pub initial_speed: f32,
    /// Texture key given to every scattered unit.
    pub texture: String,
    /// Uniform sprite scale of scattered units.
    pub sprite_scale: f32,
    /// Start with debug point rendering enabled.
    pub debug: bool,
    /// Path to the configuration file.
    pub config_path: PathBuf,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl SimConfig {
    /// Create a new configuration with safe default values.
    pub fn new() -> Self {
        Self {
            seek_speed: DEFAULT_SEEK_SPEED,
            arrival_epsilon: DEFAULT_ARRIVAL_EPSILON,
            bound: DEFAULT_BOUND,
            changed_activates: DEFAULT_CHANGED_ACTIVATES,
            spawn_count: DEFAULT_SPAWN_COUNT,
            seed: DEFAULT_SEED,
            spread: DEFAULT_SPREAD,
            initial_speed: DEFAULT_INITIAL_SPEED,
            texture: DEFAULT_TEXTURE.to_string(),
            sprite_scale: DEFAULT_SPRITE_SCALE,
            debug: DEFAULT_DEBUG,
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
        }
    }

    /// Create a new configuration with a custom config file path.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: path.into(),
            ..Self::new()
        }
    }

    /// Load configuration from the INI file.
    ///
    /// Missing values retain their current (default) values.
    pub fn load_from_file(&mut self) -> Result<(), ConfigError> {
        let mut config = Ini::new();
        config.load(&self.config_path).map_err(|reason| ConfigError::Load {
            path: self.config_path.clone(),
            reason,
        })?;
        self.apply(&config);
        Ok(())
    }

    /// Load configuration from INI text instead of a file.
    pub fn load_from_str(&mut self, text: &str) -> Result<(), ConfigError> {
        let mut config = Ini::new();
        config
            .read(text.to_string())
            .map_err(|reason| ConfigError::Load {
                path: self.config_path.clone(),
                reason,
            })?;
        self.apply(&config);
        Ok(())
    }

    fn apply(&mut self, config: &Ini) {
        // [simulation] section
        if let Some(v) = config.getfloat("simulation", "seek_speed").ok().flatten() {
            self.seek_speed = v as f32;
        }
        if let Some(v) = config
            .getfloat("simulation", "arrival_epsilon")
            .ok()
            .flatten()
        {
            self.arrival_epsilon = v as f32;
        }
        if let Some(v) = config.getfloat("simulation", "bound").ok().flatten() {
            self.bound = v as f32;
        }

        // [selection] section
        if let Some(v) = config
            .getbool("selection", "changed_activates")
            .ok()
            .flatten()
        {
            self.changed_activates = v;
        }

        // [spawn] section
        if let Some(v) = config.getuint("spawn", "count").ok().flatten() {
            self.spawn_count = v as u32;
        }
        if let Some(v) = config.getuint("spawn", "seed").ok().flatten() {
            self.seed = v;
        }
        if let Some(v) = config.getfloat("spawn", "spread").ok().flatten() {
            self.spread = v as f32;
        }
        if let Some(v) = config.getfloat("spawn", "initial_speed").ok().flatten() {
            self.initial_speed = v as f32;
        }
        if let Some(v) = config.get("spawn", "texture") {
            self.texture = v;
        }
        if let Some(v) = config.getfloat("spawn", "sprite_scale").ok().flatten() {
            self.sprite_scale = v as f32;
        }

        // [debug] section
        if let Some(v) = config.getbool("debug", "enabled").ok().flatten() {
            self.debug = v;
        }

        info!(
            "Loaded config: seek_speed={}, epsilon={}, bound={}, changed_activates={}, spawn={}x '{}' (seed={})",
            self.seek_speed,
            self.arrival_epsilon,
            self.bound,
            self.changed_activates,
            self.spawn_count,
            self.texture,
            self.seed
        );
    }

    /// Save configuration to the INI file.
    ///
    /// Creates the file if it doesn't exist.
    pub fn save_to_file(&self) -> Result<(), ConfigError> {
        let mut config = Ini::new();

        config.set("simulation", "seek_speed", Some(self.seek_speed.to_string()));
        config.set(
            "simulation",
            "arrival_epsilon",
            Some(self.arrival_epsilon.to_string()),
        );
        config.set("simulation", "bound", Some(self.bound.to_string()));

        config.set(
            "selection",
            "changed_activates",
            Some(self.changed_activates.to_string()),
        );

        config.set("spawn", "count", Some(self.spawn_count.to_string()));
        config.set("spawn", "seed", Some(self.seed.to_string()));
        config.set("spawn", "spread", Some(self.spread.to_string()));
        config.set(
            "spawn",
            "initial_speed",
            Some(self.initial_speed.to_string()),
        );
        config.set("spawn", "texture", Some(self.texture.clone()));
        config.set("spawn", "sprite_scale", Some(self.sprite_scale.to_string()));

        config.set("debug", "enabled", Some(self.debug.to_string()));

        config
            .write(&self.config_path)
            .map_err(|source| ConfigError::Save {
                path: self.config_path.clone(),
                source,
            })?;

        info!("Saved config to {:?}", self.config_path);

        Ok(())
    }
}
