mod common;

use arg::arithmetic::Difficulty;
use arg::asset::Asset;
use arg::audio::Clip;
use arg::constants::{MENU_VOLUME, VIEWPORT_SIZE};
use arg::events::{InputEvent, Key};
use arg::handlers::{
    default_handlers, DifficultyHandler, GameModeHandler, LevelEndHandler, LevelPauseHandler, MainMenuHandler,
    ScoreHandler, ANSWER_INPUT_ID,
};
use arg::scores::ScoreRecord;
use arg::state::{Driver, GameMode, GameState, RunOutcome, StateHandler};
use common::{click_at, recording_services, AudioCall, Harness, RecordingSurface, StaticAssets};
use pretty_assertions::assert_eq;
use speculoos::prelude::*;
use strum::IntoEnumIterator;

// Button centers, by screen
const START: (f32, f32) = (450.0, 125.0);
const SCORES: (f32, f32) = (450.0, 250.0);
const QUIT: (f32, f32) = (450.0, 375.0);
const MATH: (f32, f32) = (325.0, 350.0);
const CARD: (f32, f32) = (575.0, 350.0);
const EASY: (f32, f32) = (225.0, 350.0);
const HARD: (f32, f32) = (675.0, 350.0);
const INFINITE: (f32, f32) = (450.0, 225.0);
const LEFT: (f32, f32) = (225.0, 350.0);
const MIDDLE: (f32, f32) = (450.0, 350.0);
const RIGHT: (f32, f32) = (675.0, 350.0);
const SCORE_BACK: (f32, f32) = (450.0, 425.0);

fn at((x, y): (f32, f32)) -> InputEvent {
    click_at(x, y)
}

fn assets() -> StaticAssets {
    StaticAssets::default()
}

mod main_menu {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn buttons_pick_next_state() {
        let mut handler = MainMenuHandler::new(&mut assets()).unwrap();
        let mut harness = Harness::default();

        for (button, expected) in [
            (START, GameState::GameMode),
            (SCORES, GameState::Score),
            (QUIT, GameState::GameQuit),
        ] {
            let next = harness.process(&mut handler, GameState::MainMenu, &[at(button)], 0.0);
            assert_eq!(next, expected);
        }
    }

    #[test]
    fn stays_without_clicks() {
        let mut handler = MainMenuHandler::new(&mut assets()).unwrap();
        let mut harness = Harness::default();
        let events = [InputEvent::KeyDown(Key::Return), at((10.0, 10.0))];
        assert_eq!(harness.process(&mut handler, GameState::MainMenu, &events, 0.0), GameState::MainMenu);
    }

    #[test]
    fn first_click_wins() {
        let mut handler = MainMenuHandler::new(&mut assets()).unwrap();
        let mut harness = Harness::default();
        let next = harness.process(&mut handler, GameState::MainMenu, &[at(SCORES), at(QUIT)], 0.0);
        assert_eq!(next, GameState::Score);
    }

    #[test]
    fn music_starts_once() {
        let mut handler = MainMenuHandler::new(&mut assets()).unwrap();
        let mut harness = Harness::default();
        harness.enter(&mut handler, GameState::MainMenu);
        harness.enter(&mut handler, GameState::MainMenu);

        assert_eq!(
            *harness.audio.calls.borrow(),
            vec![AudioCall::Volume(MENU_VOLUME), AudioCall::Play(Clip::MenuTheme)]
        );
    }
}

mod game_mode {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn math_selects_mode() {
        let mut handler = GameModeHandler::new(&mut assets()).unwrap();
        let mut harness = Harness::default();
        let next = harness.process(&mut handler, GameState::GameMode, &[at(MATH)], 0.0);

        assert_eq!(next, GameState::Difficulty);
        assert_eq!(harness.storage.live_mode, Some(GameMode::Math));
    }

    #[test]
    fn flashcards_are_unavailable() {
        let mut handler = GameModeHandler::new(&mut assets()).unwrap();
        let mut harness = Harness::default();
        let next = harness.process(&mut handler, GameState::GameMode, &[at(CARD)], 0.0);

        assert_eq!(next, GameState::GameMode);
        assert_that(&harness.storage.live_mode).is_none();
    }
}

mod difficulty {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn each_button_stores_its_tier() {
        for (button, expected) in [
            (EASY, Difficulty::Easy),
            (MIDDLE, Difficulty::Medium),
            (HARD, Difficulty::Hard),
            (INFINITE, Difficulty::Infinite),
        ] {
            let mut handler = DifficultyHandler::new(&mut assets()).unwrap();
            let mut harness = Harness::default();
            let next = harness.process(&mut handler, GameState::Difficulty, &[at(button)], 0.0);

            assert_eq!(next, GameState::LevelPlay);
            assert_eq!(harness.storage.difficulty, Some(expected));
            assert_eq!(harness.storage.live_mode, Some(GameMode::Math));
        }
    }

    #[test]
    fn loads_infinity_image() {
        let mut loader = assets();
        DifficultyHandler::new(&mut loader).unwrap();
        assert_that(&loader.loaded).contains(Asset::Infinity);
    }
}

mod level_pause {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn resume_by_button_or_space() {
        let mut handler = LevelPauseHandler::new(&mut assets()).unwrap();
        let mut harness = Harness::default();

        let next = harness.process(&mut handler, GameState::LevelPause, &[at(LEFT)], 0.0);
        assert_eq!(next, GameState::LevelPlay);
        let next = harness.process(&mut handler, GameState::LevelPause, &[InputEvent::KeyUp(Key::Space)], 0.0);
        assert_eq!(next, GameState::LevelPlay);
        assert_that(&harness.storage.reset).is_false();
    }

    #[test]
    fn back_abandons_run() {
        let mut handler = LevelPauseHandler::new(&mut assets()).unwrap();
        let mut harness = Harness::default();

        let next = harness.process(&mut handler, GameState::LevelPause, &[at(MIDDLE)], 0.0);
        assert_eq!(next, GameState::MainMenu);
        assert_that(&harness.storage.reset).is_true();
    }

    #[test]
    fn quit_exits() {
        let mut handler = LevelPauseHandler::new(&mut assets()).unwrap();
        let mut harness = Harness::default();
        let next = harness.process(&mut handler, GameState::LevelPause, &[at(RIGHT)], 0.0);
        assert_eq!(next, GameState::GameQuit);
    }
}

mod level_end {
    use super::*;
    use pretty_assertions::assert_eq;

    fn ended(harness: &mut Harness, difficulty: Difficulty, outcome: RunOutcome, score: u32) {
        harness.storage.difficulty = Some(difficulty);
        harness.storage.live_mode = Some(GameMode::Math);
        harness.storage.end_game = Some(outcome);
        harness.storage.last_score = Some(score);
        harness.storage.last_play_time = Some(42.5);
    }

    #[test]
    fn infinite_runs_are_recorded() {
        let mut handler = LevelEndHandler::new(&mut assets()).unwrap();
        let mut harness = Harness::default();
        ended(&mut harness, Difficulty::Infinite, RunOutcome::Finished, 12);

        harness.enter(&mut handler, GameState::LevelEnd);
        harness.process(&mut handler, GameState::LevelEnd, &[], 0.0);

        let board = harness.services.scores.leaderboard("math");
        assert_eq!(board.top, vec![ScoreRecord { score: 12, time: 42.5 }]);
        assert_that(&harness.surface.has_text("Nice Run!")).is_true();
        assert_that(&harness.surface.has_text("SCORE: 12")).is_true();
        assert_that(&harness.surface.has_text("BEST: 12")).is_true();
    }

    #[test]
    fn fixed_tier_runs_are_not_recorded() {
        let mut handler = LevelEndHandler::new(&mut assets()).unwrap();
        let mut harness = Harness::default();
        ended(&mut harness, Difficulty::Hard, RunOutcome::Lost, 3);

        harness.enter(&mut handler, GameState::LevelEnd);
        harness.process(&mut handler, GameState::LevelEnd, &[], 0.0);

        assert_that(&harness.services.scores.leaderboard("math").is_empty()).is_true();
        assert_that(&harness.surface.has_text("You Lose.")).is_true();
    }

    #[test]
    fn won_run_message() {
        let mut handler = LevelEndHandler::new(&mut assets()).unwrap();
        let mut harness = Harness::default();
        ended(&mut harness, Difficulty::Easy, RunOutcome::Won, 20);

        harness.enter(&mut handler, GameState::LevelEnd);
        harness.process(&mut handler, GameState::LevelEnd, &[], 0.0);
        assert_that(&harness.surface.has_text("You Win!")).is_true();
    }

    #[test]
    fn buttons_and_quit_stops_music() {
        let mut handler = LevelEndHandler::new(&mut assets()).unwrap();
        let mut harness = Harness::default();
        ended(&mut harness, Difficulty::Easy, RunOutcome::Lost, 0);
        harness.enter(&mut handler, GameState::LevelEnd);

        assert_eq!(harness.process(&mut handler, GameState::LevelEnd, &[at(LEFT)], 0.0), GameState::LevelPlay);
        assert_eq!(harness.process(&mut handler, GameState::LevelEnd, &[at(MIDDLE)], 0.0), GameState::MainMenu);
        assert_that(&*harness.audio.calls.borrow()).does_not_contain(AudioCall::Stop);

        assert_eq!(harness.process(&mut handler, GameState::LevelEnd, &[at(RIGHT)], 0.0), GameState::GameQuit);
        assert_that(&*harness.audio.calls.borrow()).contains(AudioCall::Stop);
    }
}

mod score {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn lists_recorded_runs() {
        let mut handler = ScoreHandler::new(&mut assets()).unwrap();
        let mut harness = Harness::default();
        harness
            .services
            .scores
            .record("math", ScoreRecord { score: 17, time: 60.0 })
            .unwrap();

        harness.enter(&mut handler, GameState::Score);
        let next = harness.process(&mut handler, GameState::Score, &[], 0.0);

        assert_eq!(next, GameState::Score);
        assert_that(&harness.surface.has_text("1. 17 (60.0s)")).is_true();
        assert_that(&harness.surface.has_text("5. -")).is_true();
    }

    #[test]
    fn back_returns_to_menu() {
        let mut handler = ScoreHandler::new(&mut assets()).unwrap();
        let mut harness = Harness::default();
        harness.enter(&mut handler, GameState::Score);
        let next = harness.process(&mut handler, GameState::Score, &[at(SCORE_BACK)], 0.0);
        assert_eq!(next, GameState::MainMenu);
    }
}

#[test]
fn default_handlers_cover_every_state() {
    let handlers = default_handlers(&mut assets(), VIEWPORT_SIZE).unwrap();
    let mut driver = Driver::new(arg::state::Services::headless());
    driver.register_all(handlers);

    for state in GameState::iter() {
        assert_that(&driver.is_registered(state)).is_true();
    }
}

#[test]
fn missing_asset_fails_handler_construction() {
    let mut loader = StaticAssets {
        missing: Some(Asset::MenuBorder),
        ..StaticAssets::default()
    };
    assert_that(&default_handlers(&mut loader, VIEWPORT_SIZE).is_err()).is_true();
}

/// Menus, a short run, a pause and an abandoned run, through the real handlers.
#[test]
fn menus_to_level_and_back() {
    let (services, audio) = recording_services();
    let mut driver = Driver::new(services);
    driver.register_all(default_handlers(&mut assets(), VIEWPORT_SIZE).unwrap());
    let mut surface = RecordingSurface::new();
    let frame = 1.0 / 60.0;

    let mut step = |driver: &mut Driver, events: Vec<InputEvent>| driver.step(events, &mut surface, frame);

    assert_eq!(step(&mut driver, vec![at(START)]), GameState::GameMode);
    assert_eq!(step(&mut driver, vec![at(MATH)]), GameState::Difficulty);
    assert_eq!(step(&mut driver, vec![at(EASY)]), GameState::LevelPlay);
    assert_eq!(step(&mut driver, vec![]), GameState::LevelPlay);
    assert_that(&driver.gui().entry(ANSWER_INPUT_ID)).is_some();

    assert_eq!(step(&mut driver, vec![InputEvent::KeyUp(Key::Space)]), GameState::LevelPause);
    assert_that(&driver.gui().is_empty()).is_true();
    assert_eq!(step(&mut driver, vec![at(MIDDLE)]), GameState::MainMenu);
    assert_that(&driver.storage().reset).is_true();
    assert_eq!(step(&mut driver, vec![]), GameState::MainMenu);

    assert_eq!(step(&mut driver, vec![at(QUIT)]), GameState::GameQuit);
    assert_that(&driver.is_running()).is_false();
    assert_that(&*audio.calls.borrow()).contains(AudioCall::Play(Clip::MenuTheme));
}
