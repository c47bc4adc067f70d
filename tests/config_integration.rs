//! Configuration tests. None of these open a window: geometry validation
//! runs before any raylib call, and INI persistence is plain file IO.

use std::fs;
use std::path::PathBuf;

use raylib::prelude::ConfigFlags;
use rlstage::{Config, Engine, Error};

fn temp_ini(name: &str) -> PathBuf {
    std::env::temp_dir().join(name)
}

#[test]
fn default_values() {
    let cfg = Config::default();

    assert_eq!(cfg.width, 800);
    assert_eq!(cfg.height, 600);
    assert_eq!(cfg.window_mode, 0);
    assert_eq!(cfg.title, "rlstage");
    assert_eq!(cfg.target_fps, 60);
    assert!(cfg.load_assets);
    assert!(!cfg.is_fullscreen());
}

#[test]
fn validate_rejects_bad_geometry() {
    let mut cfg = Config::default();

    cfg.width = 0;
    assert!(matches!(
        cfg.validate(),
        Err(Error::InvalidConfig { width: 0, .. })
    ));

    cfg.width = 100;
    cfg.height = 0;
    assert!(matches!(cfg.validate(), Err(Error::InvalidConfig { .. })));

    cfg.height = -5;
    assert!(matches!(cfg.validate(), Err(Error::InvalidConfig { .. })));

    cfg.width = 100;
    cfg.height = 100;
    assert!(cfg.validate().is_ok());

    cfg.width = 0;
    cfg.height = 0;
    assert!(cfg.validate().is_err());
}

#[test]
fn validate_allows_any_geometry_in_fullscreen() {
    let mut cfg = Config::default();
    cfg.width = 0;
    cfg.height = 0;
    cfg.window_mode = ConfigFlags::FLAG_FULLSCREEN_MODE as u32;

    assert!(cfg.is_fullscreen());
    assert!(cfg.validate().is_ok());
}

#[test]
fn bad_geometry_is_fatal_to_engine_construction() {
    // Validation fails before any window work, so this is safe headless.
    let mut cfg = Config::default();
    cfg.load_assets = false;
    cfg.width = -1;

    assert!(matches!(
        Engine::new(cfg),
        Err(Error::InvalidConfig { width: -1, .. })
    ));
}

#[test]
fn ini_round_trip() {
    let path = temp_ini("rlstage_roundtrip.ini");

    let mut cfg = Config::default();
    cfg.width = 1280;
    cfg.height = 720;
    cfg.title = "round trip".to_string();
    cfg.target_fps = 120;
    cfg.window_mode =
        ConfigFlags::FLAG_WINDOW_RESIZABLE as u32 | ConfigFlags::FLAG_VSYNC_HINT as u32;
    cfg.load_assets = false;
    cfg.save_to_file(&path).expect("save failed");

    let mut loaded = Config::default();
    loaded.load_from_file(&path).expect("load failed");

    assert_eq!(loaded.width, 1280);
    assert_eq!(loaded.height, 720);
    assert_eq!(loaded.title, "round trip");
    assert_eq!(loaded.target_fps, 120);
    assert_ne!(
        loaded.window_mode & ConfigFlags::FLAG_WINDOW_RESIZABLE as u32,
        0
    );
    assert_ne!(loaded.window_mode & ConfigFlags::FLAG_VSYNC_HINT as u32, 0);
    assert!(!loaded.is_fullscreen());
    assert!(!loaded.load_assets);

    fs::remove_file(&path).ok();
}

#[test]
fn ini_partial_file_keeps_remaining_defaults() {
    let path = temp_ini("rlstage_partial.ini");
    fs::write(&path, "[window]\nwidth = 1024\n").expect("fixture write failed");

    let mut cfg = Config::default();
    cfg.load_from_file(&path).expect("load failed");

    assert_eq!(cfg.width, 1024);
    assert_eq!(cfg.height, 600);
    assert_eq!(cfg.target_fps, 60);
    assert_eq!(cfg.title, "rlstage");

    fs::remove_file(&path).ok();
}

#[test]
fn ini_missing_file_is_an_error() {
    let mut cfg = Config::default();
    let err = cfg
        .load_from_file(temp_ini("rlstage_does_not_exist.ini"))
        .unwrap_err();
    assert!(matches!(err, Error::Load { .. }));
}
