//! # lf_core - Deterministic Number-Pick Draw Game Engine
//!
//! This library implements the Lucky Five selection game: pick a fixed
//! count of numbers from a pool, draw unique random numbers, and count the
//! matches.
//!
//! ## Features
//! - 100% deterministic draws (same seed + same events = same result)
//! - UI-agnostic: the engine drives injected display/control/feedback surfaces
//! - JSON API for easy integration with UI hosts

pub mod api;
pub mod config;
pub mod engine;
pub mod error;
pub mod models;
pub mod state;
pub mod surface;

// Re-export main API functions
pub use api::{
    game_view_json, new_game_json, request_draw_json, reset_game_json, toggle_number_json,
};
pub use config::GameConfig;
pub use engine::SelectionGame;
pub use error::{GameError, Result};

// Re-export core game types
pub use models::{
    DrawOutcome, DrawRequestResult, DrawSlot, GamePhase, GameView, Message, MessageKind,
    ToggleOutcome,
};

// Re-export session management
pub use state::{get_session, get_session_mut, reset_session, set_session, SessionGame};

// Re-export UI seams
pub use surface::{ControlSurface, DisplaySurface, FeedbackSurface, NullSurface, ViewSurface};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const SCHEMA_VERSION: u8 = 1;
