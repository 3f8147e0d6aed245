use std::path::PathBuf;

use arg::config::{load_config, Config};
use figment::Jail;
use pretty_assertions::assert_eq;

#[test]
fn defaults_without_environment() {
    Jail::expect_with(|_jail| {
        let config = load_config().expect("config loads");
        assert_eq!(config, Config::default());
        assert_eq!(config.assets_dir, PathBuf::from("assets"));
        Ok(())
    });
}

#[test]
fn reads_prefixed_variables() {
    Jail::expect_with(|jail| {
        jail.set_env("ARG_ASSETS_DIR", "/opt/arg/assets");
        jail.set_env("ARG_DATA_FILE", "/tmp/arg-scores.json");
        jail.set_env("ARG_FPS", "30");
        jail.set_env("ARG_MUTED", "true");

        let config = load_config().expect("config loads");
        assert_eq!(config.assets_dir, PathBuf::from("/opt/arg/assets"));
        assert_eq!(config.score_file().unwrap(), PathBuf::from("/tmp/arg-scores.json"));
        assert_eq!(config.fps, 30);
        assert!(config.muted);
        Ok(())
    });
}

#[test]
fn rejects_malformed_values() {
    Jail::expect_with(|jail| {
        jail.set_env("ARG_FPS", "fast");
        assert!(load_config().is_err());
        Ok(())
    });
}

#[test]
fn score_file_defaults_to_data_dir() {
    Jail::expect_with(|jail| {
        jail.set_env("HOME", "/home/player");
        jail.set_env("XDG_DATA_HOME", "");
        jail.set_env("APPDATA", "C:\\Users\\player\\AppData\\Roaming");

        let path = Config::default().score_file().expect("data dir resolves");
        assert!(path.ends_with("arg/arg.json") || path.ends_with("arg\\arg.json"));
        Ok(())
    });
}
