//! Core data types shared by the engine, the surfaces and the JSON API.

use serde::{Deserialize, Serialize};

/// Input availability flag: toggles are only honored while `Selecting`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GamePhase {
    Selecting,
    Drawn,
}

/// Style category of the current feedback message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageKind {
    #[default]
    Default,
    Warning,
    Success,
}

/// Single current-message slot. Every emission replaces the previous
/// message and kind entirely; there is no queue and no history.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Message {
    pub text: String,
    pub kind: MessageKind,
}

impl Message {
    pub fn new(text: impl Into<String>, kind: MessageKind) -> Self {
        Self { text: text.into(), kind }
    }

    pub fn neutral(text: impl Into<String>) -> Self {
        Self::new(text, MessageKind::Default)
    }

    pub fn warning(text: impl Into<String>) -> Self {
        Self::new(text, MessageKind::Warning)
    }

    pub fn success(text: impl Into<String>) -> Self {
        Self::new(text, MessageKind::Success)
    }
}

/// What a toggle request did to the selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleOutcome {
    /// Number added to the first empty selection slot
    Added,
    /// Number removed from its slot (the slot stays empty until refilled)
    Removed,
    /// Toggles are locked while a draw result is on display
    Ignored,
}

/// Result of one completed draw. `numbers` is always exactly
/// `max_selection` unique pool members sorted ascending; `matches` is the
/// sorted intersection with the player's selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrawOutcome {
    pub numbers: Vec<u8>,
    pub matches: Vec<u8>,
}

impl DrawOutcome {
    pub fn match_count(&self) -> u8 {
        self.matches.len() as u8
    }

    /// Whether a drawn number belongs to the player's selection.
    pub fn is_hit(&self, number: u8) -> bool {
        self.matches.contains(&number)
    }
}

/// How a draw request resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DrawRequestResult {
    /// A fresh draw was generated and matched against the selection
    Drawn(DrawOutcome),
    /// The draw control doubles as restart after a completed draw
    Restarted,
}

/// One draw display slot: the drawn number and its match highlight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DrawSlot {
    pub number: Option<u8>,
    pub hit: bool,
}

/// Complete presentational state, as recorded by
/// [`ViewSurface`](crate::surface::ViewSurface). Everything a renderer
/// needs to repaint the game from scratch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameView {
    /// Pool members currently shown highlighted, sorted ascending
    pub highlighted: Vec<u8>,
    /// Selected-number display slots, in selection order with gaps
    pub selected_slots: Vec<Option<u8>>,
    /// Drawn-number display slots with match-highlight flags
    pub draw_slots: Vec<DrawSlot>,
    pub draw_visible: bool,
    pub draw_enabled: bool,
    pub draw_label: String,
    pub message: Message,
}

impl Default for GameView {
    fn default() -> Self {
        Self {
            highlighted: Vec::new(),
            selected_slots: Vec::new(),
            draw_slots: Vec::new(),
            draw_visible: false,
            draw_enabled: true,
            draw_label: String::new(),
            message: Message::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phase_serialization_tags() {
        assert_eq!(serde_json::to_string(&GamePhase::Selecting).unwrap(), "\"selecting\"");
        assert_eq!(serde_json::to_string(&GamePhase::Drawn).unwrap(), "\"drawn\"");
        assert_eq!(serde_json::to_string(&MessageKind::Warning).unwrap(), "\"warning\"");
    }

    #[test]
    fn test_draw_outcome_hits() {
        let outcome = DrawOutcome { numbers: vec![1, 2, 3, 4, 5], matches: vec![2, 4] };
        assert_eq!(outcome.match_count(), 2);
        assert!(outcome.is_hit(2));
        assert!(outcome.is_hit(4));
        assert!(!outcome.is_hit(3));
    }

    #[test]
    fn test_message_replaces_entirely() {
        let mut current = Message::neutral("Please select exactly 5 numbers.");
        assert_eq!(current.kind, MessageKind::Default);
        current = Message::warning("You can only select up to 5 numbers.");
        assert_eq!(current.kind, MessageKind::Warning);
        assert!(current.text.contains("up to 5"));
    }
}
