//! Selection Game Engine
//!
//! `SelectionGame` owns the complete pick/draw/reset state machine. It
//! mutates nothing but its own fields and the injected surface, and all
//! outcomes (draw numbers, match count, messages) are computed
//! synchronously on the calling thread - any reveal animation or delay is
//! the surface's business, after the fact.
//!
//! Draws come from a seedable `ChaCha8Rng`: the same seed and the same
//! event sequence reproduce the same results.

pub mod draw;
pub mod messages;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info, warn};

use crate::config::GameConfig;
use crate::error::{GameError, Result};
use crate::models::{DrawOutcome, DrawRequestResult, GamePhase, ToggleOutcome};
use crate::surface::{ControlSurface, DisplaySurface, FeedbackSurface};

/// The game state machine, generic over the injected UI surface.
pub struct SelectionGame<U> {
    config: GameConfig,
    phase: GamePhase,
    /// Selected-number display slots. Selection order is preserved and a
    /// removed number leaves a gap; the next pick fills the first gap.
    slots: Vec<Option<u8>>,
    last_draw: Option<DrawOutcome>,
    rng: ChaCha8Rng,
    surface: U,
}

impl<U> SelectionGame<U>
where
    U: DisplaySurface + ControlSurface + FeedbackSurface,
{
    /// Create a game with an entropy-seeded RNG.
    pub fn new(config: GameConfig, surface: U) -> Result<Self> {
        Self::with_rng(config, surface, ChaCha8Rng::from_entropy())
    }

    /// Create a game with a fixed seed for reproducible draws.
    pub fn with_seed(config: GameConfig, surface: U, seed: u64) -> Result<Self> {
        Self::with_rng(config, surface, ChaCha8Rng::seed_from_u64(seed))
    }

    fn with_rng(config: GameConfig, surface: U, rng: ChaCha8Rng) -> Result<Self> {
        config.validate()?;
        let mut game = Self {
            slots: vec![None; config.max_selection as usize],
            config,
            phase: GamePhase::Selecting,
            last_draw: None,
            rng,
            surface,
        };
        // Paint the initial state through the surface
        game.reset();
        Ok(game)
    }

    /// Toggle a pool member in or out of the selection.
    ///
    /// Locked (silently ignored) while a draw result is on display. A
    /// number outside the pool is host misuse and the one hard error here;
    /// a full selection rejects the pick with a visible warning and leaves
    /// the selection untouched.
    pub fn toggle_number(&mut self, number: u8) -> Result<ToggleOutcome> {
        if !self.config.contains(number) {
            return Err(GameError::OutOfPool { number, pool_size: self.config.pool_size });
        }
        if self.phase == GamePhase::Drawn {
            debug!("toggle of {} ignored: draw already resolved", number);
            return Ok(ToggleOutcome::Ignored);
        }

        let outcome = if let Some(slot) = self.slot_of(number) {
            // Deselecting is always allowed; the slot keeps its position
            // empty until the next pick claims it
            self.slots[slot] = None;
            self.surface.set_pool_highlight(number, false);
            self.surface.set_selected_slot(slot, None);
            ToggleOutcome::Removed
        } else if let Some(slot) = self.first_empty_slot() {
            self.slots[slot] = Some(number);
            self.surface.set_pool_highlight(number, true);
            self.surface.set_selected_slot(slot, Some(number));
            ToggleOutcome::Added
        } else {
            let limit = self.config.max_selection;
            warn!("pick of {} rejected: selection already holds {} numbers", number, limit);
            self.surface.show_message(&messages::selection_full(limit));
            return Err(GameError::SelectionFull { limit });
        };

        // The draw control only appears once the selection is complete
        self.surface.set_draw_visible(self.selected_count() == self.config.max_selection);
        debug!("toggled {}: {:?}", number, outcome);
        Ok(outcome)
    }

    /// Resolve a draw request.
    ///
    /// After a completed draw the control is reused as restart. An
    /// incomplete selection rejects the request with a visible warning and
    /// mutates nothing.
    pub fn request_draw(&mut self) -> Result<DrawRequestResult> {
        if self.phase == GamePhase::Drawn {
            info!("restart requested via draw control");
            self.reset();
            return Ok(DrawRequestResult::Restarted);
        }

        let expected = self.config.max_selection;
        let found = self.selected_count();
        if found != expected {
            warn!("draw rejected: {} of {} numbers selected", found, expected);
            self.surface.show_message(&messages::incomplete_selection(expected));
            return Err(GameError::IncompleteSelection { expected, found });
        }

        // Lock the control while the draw resolves
        self.surface.set_draw_enabled(false);

        let numbers = draw::generate_numbers(&mut self.rng, &self.config);
        let selection = self.selection();
        let matches = draw::matched_numbers(&selection, &numbers);
        let outcome = DrawOutcome { numbers, matches };

        for (slot, number) in outcome.numbers.iter().enumerate() {
            self.surface.set_draw_slot(slot, Some(*number), outcome.is_hit(*number));
        }
        self.surface
            .show_message(&messages::draw_report(outcome.match_count(), self.config.match_threshold));

        self.surface.set_draw_label(messages::RESTART_LABEL);
        self.surface.set_draw_enabled(true);
        self.phase = GamePhase::Drawn;
        self.last_draw = Some(outcome.clone());

        info!("draw resolved: {} of {} matched", outcome.match_count(), expected);
        Ok(DrawRequestResult::Drawn(outcome))
    }

    /// Return to the initial state: empty selection, no draw on display,
    /// neutral prompt. Safe to call repeatedly.
    pub fn reset(&mut self) {
        for slot in 0..self.slots.len() {
            if let Some(number) = self.slots[slot].take() {
                self.surface.set_pool_highlight(number, false);
            }
            self.surface.set_selected_slot(slot, None);
            self.surface.set_draw_slot(slot, None, false);
        }
        self.last_draw = None;
        self.phase = GamePhase::Selecting;

        self.surface.set_draw_label(messages::DRAW_LABEL);
        self.surface.set_draw_enabled(true);
        self.surface.set_draw_visible(false);
        self.surface.show_message(&messages::select_prompt(self.config.max_selection));
        debug!("game reset");
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Currently selected numbers in slot (selection) order.
    pub fn selection(&self) -> Vec<u8> {
        self.slots.iter().flatten().copied().collect()
    }

    pub fn selected_count(&self) -> u8 {
        self.slots.iter().flatten().count() as u8
    }

    pub fn is_selected(&self, number: u8) -> bool {
        self.slots.contains(&Some(number))
    }

    /// The outcome currently on display, if a draw has resolved.
    pub fn last_draw(&self) -> Option<&DrawOutcome> {
        self.last_draw.as_ref()
    }

    pub fn surface(&self) -> &U {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut U {
        &mut self.surface
    }

    pub fn into_surface(self) -> U {
        self.surface
    }

    fn slot_of(&self, number: u8) -> Option<usize> {
        self.slots.iter().position(|slot| *slot == Some(number))
    }

    fn first_empty_slot(&self) -> Option<usize> {
        self.slots.iter().position(|slot| slot.is_none())
    }
}
