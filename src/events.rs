//! Backend-neutral input events.
//!
//! The SDL front end translates its native events into these, and the GUI manager
//! posts [`InputEvent::TextEntryFinished`] back into the queue.

use glam::Vec2;

/// Keys the game reacts to. Everything else is reported as [`Key::Other`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Key {
    Space,
    Return,
    Backspace,
    Escape,
    Other,
}

#[derive(Clone, Debug, PartialEq)]
pub enum InputEvent {
    /// The window was asked to close.
    Quit,
    KeyDown(Key),
    KeyUp(Key),
    /// A mouse button was released at the given position.
    MouseUp { pos: Vec2 },
    /// Text typed by the user, already composed by the backend.
    TextInput(String),
    /// The pointer or focus left the window.
    WindowLeave,
    /// A text entry widget was submitted with RETURN.
    TextEntryFinished { id: &'static str, text: String },
}

impl InputEvent {
    /// Returns `true` if this is the global quit signal.
    pub fn is_quit(&self) -> bool {
        matches!(self, InputEvent::Quit)
    }

    /// Returns `true` if any event in the slice is the global quit signal.
    pub fn contains_quit(events: &[InputEvent]) -> bool {
        events.iter().any(InputEvent::is_quit)
    }
}
