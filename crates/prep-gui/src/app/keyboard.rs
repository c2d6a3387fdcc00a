//! Keyboard shortcut handling.
//!
//! Handles:
//! - Left / Right arrows: previous / next topic in store order
//! - Tab: Concept → Example; Shift+Tab: Example → Concept
//!
//! Every shortcut is a silent no-op when its precondition fails (no
//! category, no topic, or at a list boundary).

use iced::Task;
use iced::keyboard;
use iced::keyboard::key::Named;

use crate::app::App;
use crate::message::Message;
use crate::state::Direction;

impl App {
    /// Handle a key press from the keyboard subscription.
    #[allow(clippy::needless_pass_by_value)]
    pub fn handle_key_press(
        &mut self,
        key: keyboard::Key,
        modifiers: keyboard::Modifiers,
    ) -> Task<Message> {
        match key.as_ref() {
            keyboard::Key::Named(Named::ArrowLeft) => {
                self.state.navigate_topic(Direction::Previous);
                Task::none()
            }

            keyboard::Key::Named(Named::ArrowRight) => {
                self.state.navigate_topic(Direction::Next);
                Task::none()
            }

            keyboard::Key::Named(Named::Tab) => {
                self.state.switch_view_via_key(modifiers.shift());
                Task::none()
            }

            _ => Task::none(),
        }
    }
}
