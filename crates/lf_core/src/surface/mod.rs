//! UI surface seams
//!
//! The engine never talks to a concrete renderer. It drives three narrow
//! traits injected at construction time, so the state machine is testable
//! against a recording surface and embeddable behind any real one.

mod view;

pub use view::ViewSurface;

use crate::models::Message;

/// Per-pool-member presentation plus the two fixed slot rows.
pub trait DisplaySurface {
    /// Toggle the highlight state of one pool member.
    fn set_pool_highlight(&mut self, number: u8, highlighted: bool);

    /// Write or clear one selected-number display slot.
    fn set_selected_slot(&mut self, slot: usize, number: Option<u8>);

    /// Write or clear one drawn-number display slot. `hit` marks the slot
    /// as matching the player's selection.
    fn set_draw_slot(&mut self, slot: usize, number: Option<u8>, hit: bool);
}

/// The draw-trigger control, which doubles as the restart trigger after a
/// completed draw.
pub trait ControlSurface {
    fn set_draw_visible(&mut self, visible: bool);
    fn set_draw_enabled(&mut self, enabled: bool);
    fn set_draw_label(&mut self, label: &str);
}

/// Single-slot feedback channel. Each call replaces the previous message.
pub trait FeedbackSurface {
    fn show_message(&mut self, message: &Message);
}

/// No-op surface for headless use and property tests.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSurface;

impl DisplaySurface for NullSurface {
    fn set_pool_highlight(&mut self, _number: u8, _highlighted: bool) {}
    fn set_selected_slot(&mut self, _slot: usize, _number: Option<u8>) {}
    fn set_draw_slot(&mut self, _slot: usize, _number: Option<u8>, _hit: bool) {}
}

impl ControlSurface for NullSurface {
    fn set_draw_visible(&mut self, _visible: bool) {}
    fn set_draw_enabled(&mut self, _enabled: bool) {}
    fn set_draw_label(&mut self, _label: &str) {}
}

impl FeedbackSurface for NullSurface {
    fn show_message(&mut self, _message: &Message) {}
}
