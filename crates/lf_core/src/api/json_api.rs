//! JSON API for the selection game
//!
//! String-in/string-out boundary over the global session, for UI hosts
//! that embed the engine without holding Rust state. Failures come back as
//! `"CODE: message"` strings with stable codes.

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::config::GameConfig;
use crate::engine::SelectionGame;
use crate::error::GameError;
use crate::models::{DrawRequestResult, GamePhase, GameView, ToggleOutcome};
use crate::state;
use crate::surface::ViewSurface;
use crate::SCHEMA_VERSION;

pub mod error_codes {
    pub const INVALID_REQUEST: &str = "E_INVALID_REQUEST";
    pub const UNSUPPORTED_SCHEMA: &str = "E_UNSUPPORTED_SCHEMA";
    pub const INVALID_CONFIG: &str = "E_INVALID_CONFIG";
    pub const OUT_OF_POOL: &str = "E_OUT_OF_POOL";
    pub const SELECTION_FULL: &str = "E_SELECTION_FULL";
    pub const INCOMPLETE_SELECTION: &str = "E_INCOMPLETE_SELECTION";
    pub const INTERNAL: &str = "E_INTERNAL";
}

fn err_code(code: &str, message: impl std::fmt::Display) -> String {
    format!("{code}: {message}")
}

fn map_game_error(error: GameError) -> String {
    let code = match &error {
        GameError::InvalidConfig(_) => error_codes::INVALID_CONFIG,
        GameError::OutOfPool { .. } => error_codes::OUT_OF_POOL,
        GameError::SelectionFull { .. } => error_codes::SELECTION_FULL,
        GameError::IncompleteSelection { .. } => error_codes::INCOMPLETE_SELECTION,
        GameError::SerializationError(_) | GameError::DeserializationError(_) => {
            error_codes::INTERNAL
        }
    };
    err_code(code, error)
}

#[derive(Debug, Deserialize)]
pub struct NewGameRequest {
    pub schema_version: u8,
    /// Fixed RNG seed for reproducible draws; entropy-seeded when absent
    #[serde(default)]
    pub seed: Option<u64>,
    /// Game rules; defaults (10 / 5 / 3) when absent
    #[serde(default)]
    pub config: Option<GameConfig>,
}

#[derive(Debug, Deserialize)]
pub struct ToggleRequest {
    pub number: u8,
}

#[derive(Debug, Serialize)]
pub struct GameResponse {
    pub schema_version: u8,
    pub phase: GamePhase,
    /// What the request did: "started", "added", "removed", "ignored",
    /// "drawn", "restarted", "reset" or "view"
    pub outcome: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub draw_numbers: Option<Vec<u8>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub match_count: Option<u8>,
    pub view: GameView,
}

fn respond(
    outcome: &str,
    draw_numbers: Option<Vec<u8>>,
    match_count: Option<u8>,
) -> Result<String, String> {
    let game = state::get_session();
    let response = GameResponse {
        schema_version: SCHEMA_VERSION,
        phase: game.phase(),
        outcome: outcome.to_string(),
        draw_numbers,
        match_count,
        view: game.surface().view().clone(),
    };
    serde_json::to_string(&response)
        .map_err(|e| err_code(error_codes::INTERNAL, GameError::from(e)))
}

/// Install a fresh game as the global session.
///
/// Request: `{"schema_version": 1, "seed": 42, "config": {"pool_size": 10}}`
/// (seed and config optional). Responds with the initial view.
pub fn new_game_json(request: &str) -> Result<String, String> {
    info!("Processing new game request");
    let request: NewGameRequest = serde_json::from_str(request)
        .map_err(|e| err_code(error_codes::INVALID_REQUEST, GameError::from(e)))?;
    if request.schema_version != SCHEMA_VERSION {
        return Err(err_code(
            error_codes::UNSUPPORTED_SCHEMA,
            format!("expected schema_version {}, got {}", SCHEMA_VERSION, request.schema_version),
        ));
    }

    let config = request.config.unwrap_or_default();
    let game = match request.seed {
        Some(seed) => SelectionGame::with_seed(config, ViewSurface::new(), seed),
        None => SelectionGame::new(config, ViewSurface::new()),
    }
    .map_err(map_game_error)?;

    state::set_session(game);
    info!("New game session installed (pool 1-{})", config.pool_size);
    respond("started", None, None)
}

/// Toggle a number in or out of the selection.
///
/// Request: `{"number": 7}`. Rejections (out of pool, selection full) come
/// back as error codes; the warning text is also in the session view.
pub fn toggle_number_json(request: &str) -> Result<String, String> {
    let request: ToggleRequest = serde_json::from_str(request)
        .map_err(|e| err_code(error_codes::INVALID_REQUEST, GameError::from(e)))?;
    debug!("Processing toggle request for number {}", request.number);

    let result = {
        let mut game = state::get_session_mut();
        game.toggle_number(request.number)
    };
    match result {
        Ok(ToggleOutcome::Added) => respond("added", None, None),
        Ok(ToggleOutcome::Removed) => respond("removed", None, None),
        Ok(ToggleOutcome::Ignored) => respond("ignored", None, None),
        Err(error) => {
            warn!("Toggle request rejected: {}", error);
            Err(map_game_error(error))
        }
    }
}

/// Resolve a draw request against the current selection. After a completed
/// draw the same call restarts the game.
pub fn request_draw_json() -> Result<String, String> {
    info!("Processing draw request");
    let result = {
        let mut game = state::get_session_mut();
        game.request_draw()
    };
    match result {
        Ok(DrawRequestResult::Drawn(outcome)) => {
            let match_count = outcome.match_count();
            respond("drawn", Some(outcome.numbers), Some(match_count))
        }
        Ok(DrawRequestResult::Restarted) => respond("restarted", None, None),
        Err(error) => {
            warn!("Draw request rejected: {}", error);
            Err(map_game_error(error))
        }
    }
}

/// Clear the session back to the selecting phase, keeping config and RNG.
pub fn reset_game_json() -> Result<String, String> {
    info!("Processing reset request");
    {
        let mut game = state::get_session_mut();
        game.reset();
    }
    respond("reset", None, None)
}

/// Read-only snapshot of the current session.
pub fn game_view_json() -> Result<String, String> {
    debug!("Processing view request");
    respond("view", None, None)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::SESSION_TEST_LOCK;
    use serde_json::{json, Value};

    fn parse(response: &str) -> Value {
        serde_json::from_str(response).unwrap()
    }

    fn start_seeded(seed: u64) {
        let request = json!({ "schema_version": 1, "seed": seed }).to_string();
        new_game_json(&request).unwrap();
    }

    #[test]
    fn test_new_game_reports_initial_view() {
        let _guard = SESSION_TEST_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        start_seeded(1);

        let parsed = parse(&game_view_json().unwrap());
        assert_eq!(parsed["schema_version"], 1);
        assert_eq!(parsed["phase"], "selecting");
        assert_eq!(parsed["outcome"], "view");
        assert_eq!(parsed["view"]["selected_slots"].as_array().unwrap().len(), 5);
        assert_eq!(parsed["view"]["draw_label"], "Draw");
        assert_eq!(parsed["view"]["message"]["kind"], "default");
    }

    #[test]
    fn test_unsupported_schema_rejected() {
        let _guard = SESSION_TEST_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        let request = json!({ "schema_version": 9 }).to_string();
        let error = new_game_json(&request).unwrap_err();
        assert!(error.starts_with(error_codes::UNSUPPORTED_SCHEMA));
    }

    #[test]
    fn test_malformed_request_rejected() {
        let _guard = SESSION_TEST_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        assert!(new_game_json("not json").unwrap_err().starts_with(error_codes::INVALID_REQUEST));
        assert!(toggle_number_json("{}").unwrap_err().starts_with(error_codes::INVALID_REQUEST));
    }

    #[test]
    fn test_invalid_config_rejected() {
        let _guard = SESSION_TEST_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        let request = json!({
            "schema_version": 1,
            "config": { "pool_size": 4, "max_selection": 5 }
        })
        .to_string();
        let error = new_game_json(&request).unwrap_err();
        assert!(error.starts_with(error_codes::INVALID_CONFIG));
    }

    #[test]
    fn test_toggle_outcomes_round_trip() {
        let _guard = SESSION_TEST_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        start_seeded(2);

        let added = parse(&toggle_number_json(&json!({ "number": 4 }).to_string()).unwrap());
        assert_eq!(added["outcome"], "added");
        assert_eq!(added["view"]["highlighted"], json!([4]));

        let removed = parse(&toggle_number_json(&json!({ "number": 4 }).to_string()).unwrap());
        assert_eq!(removed["outcome"], "removed");
        assert_eq!(removed["view"]["highlighted"], json!([]));

        let error = toggle_number_json(&json!({ "number": 11 }).to_string()).unwrap_err();
        assert!(error.starts_with(error_codes::OUT_OF_POOL));
    }

    #[test]
    fn test_selection_full_code_and_view_warning() {
        let _guard = SESSION_TEST_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        start_seeded(3);
        for number in 1..=5 {
            toggle_number_json(&json!({ "number": number }).to_string()).unwrap();
        }

        let error = toggle_number_json(&json!({ "number": 6 }).to_string()).unwrap_err();
        assert!(error.starts_with(error_codes::SELECTION_FULL));

        // The user-visible warning is in the session view
        let parsed = parse(&game_view_json().unwrap());
        assert_eq!(parsed["view"]["message"]["kind"], "warning");
    }

    #[test]
    fn test_incomplete_draw_code() {
        let _guard = SESSION_TEST_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        start_seeded(4);
        toggle_number_json(&json!({ "number": 1 }).to_string()).unwrap();

        let error = request_draw_json().unwrap_err();
        assert!(error.starts_with(error_codes::INCOMPLETE_SELECTION));

        let parsed = parse(&game_view_json().unwrap());
        assert_eq!(parsed["phase"], "selecting");
    }

    #[test]
    fn test_draw_then_restart_flow() {
        let _guard = SESSION_TEST_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        start_seeded(5);
        for number in [2, 4, 6, 8, 10] {
            toggle_number_json(&json!({ "number": number }).to_string()).unwrap();
        }

        let drawn = parse(&request_draw_json().unwrap());
        assert_eq!(drawn["outcome"], "drawn");
        assert_eq!(drawn["phase"], "drawn");
        let numbers = drawn["draw_numbers"].as_array().unwrap();
        assert_eq!(numbers.len(), 5);
        let match_count = drawn["match_count"].as_u64().unwrap();
        assert!(match_count <= 5);
        assert_eq!(drawn["view"]["draw_label"], "Restart draw");

        let restarted = parse(&request_draw_json().unwrap());
        assert_eq!(restarted["outcome"], "restarted");
        assert_eq!(restarted["phase"], "selecting");
        assert_eq!(restarted["view"]["highlighted"], json!([]));
    }

    #[test]
    fn test_reset_returns_neutral_view() {
        let _guard = SESSION_TEST_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        start_seeded(6);
        toggle_number_json(&json!({ "number": 3 }).to_string()).unwrap();

        let reset = parse(&reset_game_json().unwrap());
        assert_eq!(reset["outcome"], "reset");
        assert_eq!(reset["view"]["highlighted"], json!([]));
        assert_eq!(reset["view"]["message"]["kind"], "default");
    }
}
