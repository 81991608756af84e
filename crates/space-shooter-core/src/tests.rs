use glam::DVec3;

use crate::commands::PlayerCommand;
use crate::config::{load_json, ArenaConfig, ConfigError, ShipConfig};
use crate::constants::*;
use crate::enums::BoostRelease;
use crate::input::InputAction;
use crate::types::*;

fn assert_vec_near(actual: DVec3, expected: DVec3) {
    assert!(
        (actual - expected).length() < 1e-9,
        "expected {expected:?}, got {actual:?}"
    );
}

// ---- Rotator ----

#[test]
fn test_rotator_from_direction() {
    let r = Rotator::from_direction(DVec3::new(0.0, 1.0, 0.0));
    assert!((r.yaw - 90.0).abs() < 1e-9);
    assert!(r.pitch.abs() < 1e-9);

    let r = Rotator::from_direction(DVec3::new(1.0, 0.0, 1.0));
    assert!(r.yaw.abs() < 1e-9);
    assert!((r.pitch - 45.0).abs() < 1e-9);

    assert_eq!(Rotator::from_direction(DVec3::ZERO), Rotator::ZERO);
}

#[test]
fn test_rotator_rotates_gun_offset() {
    // Aiming right swings a forward offset onto the right axis.
    let right = Rotator::from_direction(DVec3::new(0.0, 1.0, 0.0));
    assert_vec_near(right.rotate_vector(DEFAULT_GUN_OFFSET), DVec3::new(0.0, 90.0, 0.0));

    let back = Rotator::from_direction(DVec3::new(-1.0, 0.0, 0.0));
    assert_vec_near(back.rotate_vector(DEFAULT_GUN_OFFSET), DVec3::new(-90.0, 0.0, 0.0));

    let up = Rotator::new(90.0, 0.0);
    assert_vec_near(up.forward(), DVec3::Z);
}

#[test]
fn test_forward_matches_direction() {
    let dir = DVec3::new(0.3, -0.7, 0.2).normalize();
    assert_vec_near(Rotator::from_direction(dir).forward(), dir);
}

// ---- Vector helpers ----

#[test]
fn test_clamp_to_max_size() {
    let clamped = clamp_to_max_size(DVec3::new(1.0, 1.0, 0.0), 1.0);
    assert!((clamped.length() - 1.0).abs() < 1e-12);
    assert!((clamped.x - clamped.y).abs() < 1e-12);

    let short = DVec3::new(0.3, 0.4, 0.0);
    assert_eq!(clamp_to_max_size(short, 1.0), short);
    assert_eq!(clamp_to_max_size(DVec3::ZERO, 1.0), DVec3::ZERO);
}

#[test]
fn test_safe_normal_2d_drops_vertical() {
    assert_vec_near(safe_normal_2d(DVec3::new(3.0, 4.0, 9.0)), DVec3::new(0.6, 0.8, 0.0));
    assert_eq!(safe_normal_2d(DVec3::new(0.0, 0.0, -1.0)), DVec3::ZERO);
}

#[test]
fn test_plane_project_removes_normal_component() {
    let projected = plane_project(DVec3::new(10.0, 5.0, 0.0), DVec3::new(-1.0, 0.0, 0.0));
    assert_vec_near(projected, DVec3::new(0.0, 5.0, 0.0));
}

#[test]
fn test_aabb_orders_corners() {
    let b = Aabb::new(DVec3::new(5.0, -1.0, 2.0), DVec3::new(-5.0, 1.0, 0.0));
    assert_eq!(b.min, DVec3::new(-5.0, -1.0, 0.0));
    assert_eq!(b.max, DVec3::new(5.0, 1.0, 2.0));
    assert!(b.contains(DVec3::new(0.0, 0.0, 1.0)));
    assert!(!b.contains(DVec3::new(0.0, 2.0, 1.0)));
    assert!(b.expanded(1.5).contains(DVec3::new(0.0, 2.0, 1.0)));
}

#[test]
fn test_sim_time_advance() {
    let mut time = SimTime::default();
    for _ in 0..TICK_RATE {
        time.advance(DT);
    }
    assert_eq!(time.tick, TICK_RATE as u64);
    assert!((time.elapsed_secs - 1.0).abs() < 1e-9);
}

// ---- Commands ----

#[test]
fn test_player_command_tagged_json() {
    let cmd = PlayerCommand::PressAction {
        action: InputAction::SpeedBoost,
    };
    let json = serde_json::to_string(&cmd).unwrap();
    assert_eq!(json, r#"{"type":"PressAction","action":"SpeedBoost"}"#);

    let back: PlayerCommand = serde_json::from_str(r#"{"type":"StartMatch"}"#).unwrap();
    assert_eq!(back, PlayerCommand::StartMatch);
}

// ---- Config ----

#[test]
fn test_ship_config_defaults() {
    let config = ShipConfig::default();
    assert_eq!(config.move_speed, 1000.0);
    assert_eq!(config.boost_speed(), 2500.0);
    assert_eq!(config.gun_offset, DVec3::new(90.0, 0.0, 0.0));
    assert_eq!(config.fire_interval, 0.1);
    assert_eq!(config.boost_release, BoostRelease::RestoreSaved);
    assert!(config.fire_sound.is_some());
    config.validate().unwrap();
}

#[test]
fn test_partial_config_json_keeps_defaults() {
    let json = r#"{ "move_speed": 600.0, "fire_sound": null, "boost_release": "SubtractDelta" }"#;
    let config: ShipConfig = serde_json::from_str(json).unwrap();
    assert_eq!(config.move_speed, 600.0);
    assert_eq!(config.boost_delta, SPEED_BOOST_DELTA);
    assert_eq!(config.boost_release, BoostRelease::SubtractDelta);
    assert!(config.fire_sound.is_none());
    assert_eq!(config.projectile.speed, PROJECTILE_SPEED);
}

#[test]
fn test_config_validation_rejects_bad_values() {
    let config = ShipConfig {
        fire_interval: 0.0,
        ..Default::default()
    };
    match config.validate() {
        Err(ConfigError::Invalid { field, .. }) => assert_eq!(field, "fire_interval"),
        other => panic!("expected invalid fire_interval, got {other:?}"),
    }

    let config = ShipConfig {
        move_speed: f64::NAN,
        ..Default::default()
    };
    assert!(config.validate().is_err());

    let arena = ArenaConfig {
        player_start: DVec3::new(ARENA_HALF_EXTENT + 1.0, 0.0, 0.0),
        ..Default::default()
    };
    assert!(arena.validate().is_err());
    ArenaConfig::default().validate().unwrap();
}

#[test]
fn test_load_json_reports_missing_file() {
    let path = std::env::temp_dir().join("space_shooter_missing_config.json");
    let _ = std::fs::remove_file(&path);
    let err = load_json::<ShipConfig>(&path).unwrap_err();
    assert!(matches!(err, ConfigError::Io { .. }));
}

#[test]
fn test_load_json_reads_file() {
    let dir = std::env::temp_dir().join("space_shooter_core_config_test");
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("ship.json");
    std::fs::write(&path, r#"{ "fire_interval": 0.25 }"#).unwrap();

    let config: ShipConfig = load_json(&path).unwrap();
    assert_eq!(config.fire_interval, 0.25);

    std::fs::write(&path, "{ not json").unwrap();
    assert!(matches!(
        load_json::<ShipConfig>(&path),
        Err(ConfigError::Parse(_))
    ));
    let _ = std::fs::remove_dir_all(&dir);
}
