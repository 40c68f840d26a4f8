//! ECS resources made available to systems.
//!
//! Overview
//! - `debugmode` – presence enables debug point rendering
//! - `drawqueue` – draw submissions collected by the render pass
//! - `jobqueue` – FIFO of move requests awaiting an idle entity
//! - `selectionregion` – current drag rectangle and selecting flag
//! - `simconfig` – tunables loaded from the INI configuration file
//! - `spawnsequence` – counter handing out spawn order numbers
//! - `texturestore` – texture handles keyed by string ids
//! - `worldtime` – frame delta and elapsed simulation time
pub mod debugmode;
pub mod drawqueue;
pub mod jobqueue;
pub mod selectionregion;
pub mod simconfig;
pub mod spawnsequence;
pub mod texturestore;
pub mod worldtime;
