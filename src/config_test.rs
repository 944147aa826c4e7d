use super::*;

#[test]
fn default_matches_reference_values() {
    let c = Config::default();
    assert_eq!(c.side, 80);
    assert_eq!(c.move_speed, 40);
    assert_eq!(c.tick_ms, 20);
    assert_eq!(c.z_policy, ZIndexPolicy::Monotonic);
    assert_eq!(c.hit_mode, HitMode::Inclusive);
    assert!(c.sort_each_tick);
    assert_eq!(c.default_color, "black");
    assert_eq!(c.highlight_color, "red");
    assert_eq!(c.label_color, "white");
    assert!(c.seed.is_none());
    assert!(c.validate().is_ok());
}

#[test]
fn from_json_empty_object_is_default() {
    let c = Config::from_json("{}").unwrap();
    assert_eq!(c, Config::default());
}

#[test]
fn from_json_partial_overrides() {
    let c = Config::from_json(
        r#"{"side": 50, "move_speed": 10, "hit_mode": "half_open",
            "z_policy": {"kind": "random_probe", "reclaim_on_delete": true}, "seed": 9}"#,
    )
    .unwrap();
    assert_eq!(c.side, 50);
    assert_eq!(c.move_speed, 10);
    assert_eq!(c.hit_mode, HitMode::HalfOpen);
    assert_eq!(c.z_policy, ZIndexPolicy::RandomProbe { reclaim_on_delete: true });
    assert_eq!(c.seed, Some(9));
    assert_eq!(c.tick_ms, 20);
}

#[test]
fn from_json_malformed_is_parse_error() {
    assert!(matches!(Config::from_json("{side:"), Err(ConfigError::Parse(_))));
    assert!(matches!(Config::from_json(r#"{"side": "big"}"#), Err(ConfigError::Parse(_))));
}

#[test]
fn from_json_does_not_check_side_against_default_canvas() {
    let mut c = Config::from_json(r#"{"side": 500}"#).unwrap();
    assert_eq!(c.side, 500);

    c.canvas_width = 1000;
    c.canvas_height = 1000;
    assert!(c.validate().is_ok());
}

#[test]
fn from_json_leaves_range_checks_to_validate() {
    let c = Config::from_json(r#"{"move_speed": 0}"#).unwrap();
    assert!(matches!(c.validate(), Err(ConfigError::NonPositiveMoveSpeed(0))));
}

#[test]
fn validate_rejects_non_positive_side() {
    let c = Config { side: 0, ..Config::default() };
    assert!(matches!(c.validate(), Err(ConfigError::NonPositiveSide(0))));
}

#[test]
fn validate_rejects_non_positive_speed() {
    let c = Config { move_speed: -5, ..Config::default() };
    assert!(matches!(c.validate(), Err(ConfigError::NonPositiveMoveSpeed(-5))));
}

#[test]
fn validate_rejects_zero_tick() {
    let c = Config { tick_ms: 0, ..Config::default() };
    assert!(matches!(c.validate(), Err(ConfigError::ZeroTick)));
}

#[test]
fn validate_rejects_side_larger_than_canvas() {
    let c = Config { canvas_width: 60, ..Config::default() };
    let err = c.validate().unwrap_err();
    assert_eq!(err.to_string(), "box side 80 does not fit a 60x400 canvas");
}

#[test]
fn css_color_maps_both_states() {
    let c = Config::default();
    assert_eq!(c.css_color(BoxColor::Default), "black");
    assert_eq!(c.css_color(BoxColor::Highlighted), "red");
}

#[test]
fn fence_uses_canvas_dimensions() {
    let c = Config { canvas_width: 640, canvas_height: 480, ..Config::default() };
    assert_eq!(c.fence(), Fence::new(640, 480));
}
