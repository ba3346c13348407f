//! User-facing feedback text and control labels, kept in one place.

use crate::models::Message;

/// Initial label of the draw control.
pub const DRAW_LABEL: &str = "Draw";
/// Label after a completed draw, when the control doubles as restart.
pub const RESTART_LABEL: &str = "Restart draw";

/// Neutral prompt shown while selecting.
pub fn select_prompt(max_selection: u8) -> Message {
    Message::neutral(format!("Please select exactly {} numbers.", max_selection))
}

/// Warning for an attempt to pick past the selection limit.
pub fn selection_full(max_selection: u8) -> Message {
    Message::warning(format!("You can only select up to {} numbers.", max_selection))
}

/// Warning for a draw request before the selection is complete.
pub fn incomplete_selection(max_selection: u8) -> Message {
    Message::warning(format!("Please select exactly {} numbers before drawing.", max_selection))
}

/// Verdict for a completed draw. Below the threshold is a warning, at or
/// above it a success naming the match count.
pub fn draw_report(match_count: u8, match_threshold: u8) -> Message {
    if match_count < match_threshold {
        Message::warning(format!("Your matches are less than {}.", match_threshold))
    } else {
        Message::success(format!("Congratulations! You have {} matching numbers!", match_count))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::MessageKind;

    #[test]
    fn test_two_matches_is_below_threshold_warning() {
        let message = draw_report(2, 3);
        assert_eq!(message.kind, MessageKind::Warning);
        assert_eq!(message.text, "Your matches are less than 3.");
    }

    #[test]
    fn test_four_matches_is_success_naming_count() {
        let message = draw_report(4, 3);
        assert_eq!(message.kind, MessageKind::Success);
        assert!(message.text.contains('4'));
    }

    #[test]
    fn test_threshold_is_inclusive() {
        assert_eq!(draw_report(3, 3).kind, MessageKind::Success);
        assert_eq!(draw_report(0, 3).kind, MessageKind::Warning);
    }

    #[test]
    fn test_prompt_and_warning_wording() {
        assert_eq!(select_prompt(5).text, "Please select exactly 5 numbers.");
        assert_eq!(selection_full(5).text, "You can only select up to 5 numbers.");
        assert_eq!(
            incomplete_selection(5).text,
            "Please select exactly 5 numbers before drawing."
        );
    }
}
