use crate::state::{GameState, StateHandler, StateHandlerContext};

/// Terminal state; the driver stops looping once it is reached.
#[derive(Debug, Default, Clone, Copy)]
pub struct QuitHandler;

impl StateHandler for QuitHandler {
    fn process(&mut self, _ctx: &mut StateHandlerContext<'_>) -> GameState {
        GameState::GameQuit
    }
}
