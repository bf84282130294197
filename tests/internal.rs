use lingolog::config::Config;
use lingolog::internal::{self, ENV_VAR};
use lingolog::{Level, LoggerFactory};
use std::env;
use std::process::Command;

/// Marks the re-executed test binary, which is the only place the env threshold is set.
const CHILD_VAR: &str = "LINGOLOG_TEST_CHILD";

#[test]
fn env_threshold_survives_init_without_internal_level() {
    let status = Command::new(env::current_exe().unwrap())
        .args(["--exact", "env_threshold_child", "--test-threads=1"])
        .env(ENV_VAR, "debug")
        .env(CHILD_VAR, "1")
        .status()
        .unwrap();
    assert!(status.success());
}

#[test]
fn env_threshold_child() {
    if env::var_os(CHILD_VAR).is_none() {
        return;
    }

    let config = Config::parse("[console]\nenabled = false").unwrap();
    let session = lingolog::init(&config).unwrap();

    assert!(internal::enabled(Level::Debug));
    session.finish(LoggerFactory::root()).unwrap();
}
