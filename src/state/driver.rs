use std::collections::HashMap;

use tracing::{debug, error, info};

use super::{GameState, Services, StateHandler, StateHandlerContext, Storage};
use crate::events::InputEvent;
use crate::gui::GuiManager;
use crate::handlers::QuitHandler;
use crate::render::{Color, Surface};

/// Runs the state machine one frame at a time.
///
/// The driver does not own the window or the clock; the front end measures the frame
/// time, drains its event queue and presents the surface after [`Driver::step`].
///
/// A handler returning a state with no registered handler is not caught immediately:
/// the next `step` notices it, logs an error and forces [`GameState::GameQuit`].
pub struct Driver {
    handlers: HashMap<GameState, Box<dyn StateHandler>>,
    current: GameState,
    previous: Option<GameState>,
    storage: Storage,
    gui: GuiManager,
    services: Services,
    /// Events emitted by widgets, delivered at the start of the next frame.
    posted: Vec<InputEvent>,
    frames: u64,
}

impl Driver {
    /// Creates a driver starting in [`GameState::MainMenu`], with only the quit handler registered.
    pub fn new(services: Services) -> Self {
        let mut handlers: HashMap<GameState, Box<dyn StateHandler>> = HashMap::new();
        handlers.insert(GameState::GameQuit, Box::new(QuitHandler));

        Self {
            handlers,
            current: GameState::MainMenu,
            previous: None,
            storage: Storage::default(),
            gui: GuiManager::new(),
            services,
            posted: Vec::new(),
            frames: 0,
        }
    }

    pub fn with_initial_state(mut self, state: GameState) -> Self {
        self.current = state;
        self
    }

    /// Registers the handler for `state`, returning the handler it replaces.
    pub fn register(&mut self, state: GameState, handler: Box<dyn StateHandler>) -> Option<Box<dyn StateHandler>> {
        self.handlers.insert(state, handler)
    }

    pub fn register_all(&mut self, handlers: impl IntoIterator<Item = (GameState, Box<dyn StateHandler>)>) {
        for (state, handler) in handlers {
            self.register(state, handler);
        }
    }

    pub fn is_registered(&self, state: GameState) -> bool {
        self.handlers.contains_key(&state)
    }

    /// The state the next `step` will process.
    pub fn state(&self) -> GameState {
        self.current
    }

    /// The state processed by the last `step`, if any.
    pub fn previous_state(&self) -> Option<GameState> {
        self.previous
    }

    pub fn is_running(&self) -> bool {
        self.current != GameState::GameQuit
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn storage(&self) -> &Storage {
        &self.storage
    }

    pub fn storage_mut(&mut self) -> &mut Storage {
        &mut self.storage
    }

    pub fn gui(&self) -> &GuiManager {
        &self.gui
    }

    /// Runs one frame and returns the state the machine is in afterwards.
    ///
    /// `events` is this frame's drained input queue and `delta` the seconds since the
    /// previous frame. The surface is cleared before the handler draws and the GUI is
    /// drawn on top afterwards.
    pub fn step(&mut self, events: Vec<InputEvent>, surface: &mut dyn Surface, delta: f32) -> GameState {
        let mut frame_events = std::mem::take(&mut self.posted);
        frame_events.extend(events);

        surface.clear(Color::BLACK);

        if !self.handlers.contains_key(&self.current) {
            error!(
                state = %self.current,
                "Game entered a state with no handler. This is a programming error."
            );
            self.current = GameState::GameQuit;
        }

        let state = self.current;
        let Some(handler) = self.handlers.get_mut(&state) else {
            // Only reachable if the quit handler itself was unregistered
            self.previous = Some(state);
            return state;
        };

        let mut ctx = StateHandlerContext::new(
            state,
            &frame_events,
            &mut *surface,
            Some(&mut self.gui),
            delta,
            &mut self.storage,
            &mut self.services,
        );

        if self.previous != Some(state) {
            debug!("Entering state {state}");
            handler.on_enter(&mut ctx);
        }

        let mut next = handler.process(&mut ctx);

        // Closing the window wins over whatever the handler asked for
        if InputEvent::contains_quit(&frame_events) {
            if next != GameState::GameQuit {
                info!("Exit requested. Exiting...");
            }
            next = GameState::GameQuit;
        }

        if let Some(gui) = ctx.gui() {
            for event in frame_events.iter() {
                if let Some(posted) = gui.process_event(event) {
                    self.posted.push(posted);
                }
            }
        }

        if next != state {
            debug!("Leaving state {state} for {next}");
            ctx.state = next;
            handler.on_exit(&mut ctx);
        }

        self.gui.draw(surface);

        self.previous = Some(state);
        self.current = next;
        self.frames += 1;

        next
    }

    /// Releases what the handlers left behind; called once after the loop ends.
    pub fn shutdown(&mut self) {
        self.services.audio.stop();
        self.gui.clear_and_reset();
        self.posted.clear();
        info!(frames = self.frames, "State machine stopped");
    }
}
