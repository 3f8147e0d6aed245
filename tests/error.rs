use std::io;

use arg::asset::{resolve_asset, Asset};
use arg::error::{ArithmeticError, AssetError, GameError, GameResult, PlatformError, StoreError};
use speculoos::prelude::*;

#[test]
fn conversions_wrap_the_source() {
    let error: GameError = AssetError::NotFound("night.jpg".to_string()).into();
    assert!(matches!(error, GameError::Asset(AssetError::NotFound(_))));

    let error: GameError = ArithmeticError::InvalidDifficulty("foo".to_string()).into();
    assert!(matches!(error, GameError::Arithmetic(_)));

    let error: GameError = StoreError::from(io::Error::other("disk full")).into();
    assert!(matches!(error, GameError::Store(StoreError::Io(_))));

    let error: GameError = PlatformError::NoHomeDirectory.into();
    assert!(matches!(error, GameError::Platform(_)));
}

#[test]
fn messages_name_the_problem() {
    let error = ArithmeticError::InvalidDifficulty("foo".to_string());
    assert_that(&error.to_string()).contains("foo");

    let error: GameError = AssetError::NotFound("assets/night.jpg".to_string()).into();
    assert_that(&error.to_string()).contains("assets/night.jpg");

    let error = GameError::Sdl("no video device".to_string());
    assert_that(&error.to_string()).is_equal_to("SDL error: no video device".to_string());
}

#[test]
fn question_mark_propagates() {
    fn load() -> GameResult<()> {
        resolve_asset(std::path::Path::new("/definitely/not/here"), Asset::Font)?;
        Ok(())
    }

    assert!(matches!(load(), Err(GameError::Asset(AssetError::NotFound(_)))));
}
