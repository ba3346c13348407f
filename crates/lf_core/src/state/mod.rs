//! Global Game Session
//!
//! Thread-safe global session used by the JSON API boundary. Hosts that
//! embed the engine directly can ignore this module and own their
//! `SelectionGame` instance; the JSON functions go through here so a host
//! speaking only strings never has to hold Rust state.

use once_cell::sync::Lazy;
use std::sync::{Arc, RwLock};

use crate::config::GameConfig;
use crate::engine::SelectionGame;
use crate::surface::ViewSurface;

/// Game type held by the global session: the recording surface backs the
/// JSON responses.
pub type SessionGame = SelectionGame<ViewSurface>;

/// Global game session singleton
pub static GAME_SESSION: Lazy<Arc<RwLock<SessionGame>>> =
    Lazy::new(|| Arc::new(RwLock::new(default_session())));

fn default_session() -> SessionGame {
    SelectionGame::new(GameConfig::default(), ViewSurface::new())
        .expect("default game config is valid")
}

/// Get a read lock on the global session
pub fn get_session() -> std::sync::RwLockReadGuard<'static, SessionGame> {
    GAME_SESSION.read().expect("GAME_SESSION lock poisoned")
}

/// Get a write lock on the global session
pub fn get_session_mut() -> std::sync::RwLockWriteGuard<'static, SessionGame> {
    GAME_SESSION.write().expect("GAME_SESSION lock poisoned")
}

/// Reset the global session to a fresh default game
pub fn reset_session() {
    *GAME_SESSION.write().expect("GAME_SESSION lock poisoned") = default_session();
}

/// Replace the global session with a configured game
pub fn set_session(game: SessionGame) {
    *GAME_SESSION.write().expect("GAME_SESSION lock poisoned") = game;
}

/// Serializes tests that touch the global session; the test harness runs
/// modules in parallel threads.
#[cfg(test)]
pub(crate) static SESSION_TEST_LOCK: std::sync::Mutex<()> = std::sync::Mutex::new(());

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::GamePhase;

    #[test]
    fn test_session_replace_and_reset() {
        let _guard = SESSION_TEST_LOCK.lock().unwrap_or_else(|e| e.into_inner());

        let config = GameConfig { pool_size: 6, max_selection: 2, match_threshold: 1 };
        let game = SelectionGame::with_seed(config, ViewSurface::new(), 3).unwrap();
        set_session(game);
        assert_eq!(get_session().config().pool_size, 6);

        get_session_mut().toggle_number(4).unwrap();
        assert_eq!(get_session().selected_count(), 1);

        reset_session();
        let session = get_session();
        assert_eq!(session.config().pool_size, 10);
        assert_eq!(session.selected_count(), 0);
        assert_eq!(session.phase(), GamePhase::Selecting);
    }
}
