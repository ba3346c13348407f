//! Recording surface
//!
//! Projects every engine effect into a [`GameView`] snapshot. The JSON API
//! session renders from it, the CLI repaints from it, and tests assert on
//! it directly.

use crate::models::{DrawSlot, GameView, Message};

use super::{ControlSurface, DisplaySurface, FeedbackSurface};

#[derive(Debug, Clone, Default)]
pub struct ViewSurface {
    view: GameView,
}

impl ViewSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self) -> &GameView {
        &self.view
    }

    pub fn into_view(self) -> GameView {
        self.view
    }
}

impl DisplaySurface for ViewSurface {
    fn set_pool_highlight(&mut self, number: u8, highlighted: bool) {
        // `highlighted` is kept sorted so repeated repaints are stable
        match self.view.highlighted.binary_search(&number) {
            Ok(idx) if !highlighted => {
                self.view.highlighted.remove(idx);
            }
            Err(idx) if highlighted => {
                self.view.highlighted.insert(idx, number);
            }
            _ => {}
        }
    }

    fn set_selected_slot(&mut self, slot: usize, number: Option<u8>) {
        grow_to(&mut self.view.selected_slots, slot + 1);
        self.view.selected_slots[slot] = number;
    }

    fn set_draw_slot(&mut self, slot: usize, number: Option<u8>, hit: bool) {
        grow_to(&mut self.view.draw_slots, slot + 1);
        self.view.draw_slots[slot] = DrawSlot { number, hit };
    }
}

impl ControlSurface for ViewSurface {
    fn set_draw_visible(&mut self, visible: bool) {
        self.view.draw_visible = visible;
    }

    fn set_draw_enabled(&mut self, enabled: bool) {
        self.view.draw_enabled = enabled;
    }

    fn set_draw_label(&mut self, label: &str) {
        self.view.draw_label = label.to_string();
    }
}

impl FeedbackSurface for ViewSurface {
    fn show_message(&mut self, message: &Message) {
        self.view.message = message.clone();
    }
}

fn grow_to<T: Default + Clone>(slots: &mut Vec<T>, len: usize) {
    if slots.len() < len {
        slots.resize(len, T::default());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::MessageKind;

    #[test]
    fn test_highlight_set_is_sorted_and_deduplicated() {
        let mut surface = ViewSurface::new();
        surface.set_pool_highlight(7, true);
        surface.set_pool_highlight(2, true);
        surface.set_pool_highlight(7, true);
        assert_eq!(surface.view().highlighted, vec![2, 7]);

        surface.set_pool_highlight(7, false);
        surface.set_pool_highlight(7, false);
        assert_eq!(surface.view().highlighted, vec![2]);
    }

    #[test]
    fn test_slots_grow_on_demand() {
        let mut surface = ViewSurface::new();
        surface.set_selected_slot(2, Some(9));
        assert_eq!(surface.view().selected_slots, vec![None, None, Some(9)]);

        surface.set_draw_slot(1, Some(4), true);
        assert_eq!(surface.view().draw_slots.len(), 2);
        assert_eq!(surface.view().draw_slots[1], DrawSlot { number: Some(4), hit: true });
    }

    #[test]
    fn test_message_replaced_in_place() {
        let mut surface = ViewSurface::new();
        surface.show_message(&Message::warning("first"));
        surface.show_message(&Message::success("second"));
        assert_eq!(surface.view().message.text, "second");
        assert_eq!(surface.view().message.kind, MessageKind::Success);
    }
}
