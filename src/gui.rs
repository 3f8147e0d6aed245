//! Minimal retained-mode widgets: text entries owned by a [`GuiManager`], and
//! stateless image [`Button`]s that handlers rebuild and hit-test every frame.

use glam::Vec2;
use smallvec::SmallVec;
use tracing::trace;

use crate::events::{InputEvent, Key};
use crate::geometry::Rect;
use crate::render::{Color, FontSize, ImageHandle, Surface};

/// A single-line text input box.
#[derive(Debug, Clone, PartialEq)]
pub struct TextEntry {
    pub id: &'static str,
    pub rect: Rect,
    text: String,
    focused: bool,
}

impl TextEntry {
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }
}

/// Owns the widgets registered by the current screen.
///
/// Widgets are registered once in a handler's `on_enter` and dropped by
/// [`GuiManager::clear_and_reset`] when the screen is left.
#[derive(Debug, Default)]
pub struct GuiManager {
    entries: SmallVec<[TextEntry; 2]>,
}

impl GuiManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a text entry, replacing any existing entry with the same id.
    pub fn add_text_entry(&mut self, id: &'static str, rect: Rect) {
        self.entries.retain(|entry| entry.id != id);
        self.entries.push(TextEntry {
            id,
            rect,
            text: String::new(),
            focused: false,
        });
    }

    pub fn entry(&self, id: &str) -> Option<&TextEntry> {
        self.entries.iter().find(|entry| entry.id == id)
    }

    pub fn text(&self, id: &str) -> Option<&str> {
        self.entry(id).map(TextEntry::text)
    }

    pub fn set_text(&mut self, id: &str, text: &str) {
        if let Some(entry) = self.entries.iter_mut().find(|entry| entry.id == id) {
            entry.text.clear();
            entry.text.push_str(text);
        }
    }

    /// Gives keyboard focus to the entry `id`, taking it from every other entry.
    pub fn focus(&mut self, id: &str) {
        for entry in self.entries.iter_mut() {
            entry.focused = entry.id == id;
        }
    }

    pub fn clear_and_reset(&mut self) {
        self.entries.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Feeds a raw input event to the focused widget.
    ///
    /// Returns the event the widget emits in response, if any. The driver queues it
    /// for the next frame, the same way a widget toolkit posts to the event queue.
    pub fn process_event(&mut self, event: &InputEvent) -> Option<InputEvent> {
        let entry = self.entries.iter_mut().find(|entry| entry.focused)?;

        match event {
            InputEvent::TextInput(text) => {
                entry
                    .text
                    .extend(text.chars().filter(|c| !c.is_whitespace() && !c.is_control()));
                None
            }
            InputEvent::KeyDown(Key::Backspace) => {
                entry.text.pop();
                None
            }
            InputEvent::KeyDown(Key::Return) => {
                trace!(id = entry.id, text = %entry.text, "Text entry submitted");
                Some(InputEvent::TextEntryFinished {
                    id: entry.id,
                    text: entry.text.clone(),
                })
            }
            _ => None,
        }
    }

    pub fn draw(&self, surface: &mut dyn Surface) {
        for entry in self.entries.iter() {
            let border = if entry.focused { Color::WHITE } else { Color::GRAY };
            surface.fill_rect(entry.rect, border);
            let inner = Rect::from_pos_size(entry.rect.pos + Vec2::splat(2.0), entry.rect.size - Vec2::splat(4.0));
            surface.fill_rect(inner, Color::BLACK);

            if !entry.text.is_empty() {
                let measured = surface.text_size(&entry.text, FontSize::Small);
                let pos = Vec2::new(
                    inner.left() + 4.0,
                    inner.top() + (inner.height() - measured.y) / 2.0,
                );
                surface.draw_text(&entry.text, pos, FontSize::Small, Color::WHITE);
            }
        }
    }
}

/// An image button that reports clicks from mouse-up events.
#[derive(Debug, Clone, Copy)]
pub struct Button {
    pub rect: Rect,
    pub image: ImageHandle,
    pub label: Option<&'static str>,
}

impl Button {
    pub fn new(pos: Vec2, size: Vec2, image: ImageHandle) -> Self {
        Self {
            rect: Rect::from_pos_size(pos, size),
            image,
            label: None,
        }
    }

    pub fn with_label(mut self, label: &'static str) -> Self {
        self.label = Some(label);
        self
    }

    pub fn draw(&self, surface: &mut dyn Surface) {
        surface.blit(&self.image, self.rect);
        if let Some(label) = self.label {
            let measured = surface.text_size(label, FontSize::Medium);
            let pos = self.rect.pos + (self.rect.size - measured) / 2.0;
            surface.draw_text(label, pos, FontSize::Medium, Color::WHITE);
        }
    }

    /// Returns `true` if the event is a mouse release inside this button.
    pub fn is_click(&self, event: &InputEvent) -> bool {
        match event {
            InputEvent::MouseUp { pos } => self.rect.contains_point(*pos),
            _ => false,
        }
    }

    pub fn clicked(&self, events: &[InputEvent]) -> bool {
        events.iter().any(|event| self.is_click(event))
    }
}
