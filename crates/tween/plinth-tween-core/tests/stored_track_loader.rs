use plinth_tween_core::{parse_stored_track_json, Config, Ease, InterpolationType, TweenError};

fn approx(a: f64, b: f64, eps: f64) {
    assert!((a - b).abs() <= eps, "left={a} right={b} eps={eps}");
}

#[test]
fn manifest_lists_all_tracks() {
    let keys = plinth_test_fixtures::tracks::keys();
    assert_eq!(keys, vec!["bounce-mixed", "fade-linear", "path-vec2"]);
}

#[test]
fn fade_fixture_is_sorted_and_linear() {
    let json = plinth_test_fixtures::tracks::json("fade-linear").expect("load fixture");
    let track = parse_stored_track_json::<f64>(&json).expect("parse stored track");

    let positions: Vec<f64> = track.nodes().iter().map(|n| n.position).collect();
    assert_eq!(positions, vec![0.0, 1.0, 2.0]);
    assert!(track
        .nodes()
        .iter()
        .all(|n| n.in_type == InterpolationType::Linear && n.out_type == InterpolationType::Linear));
    assert_eq!(track.get_value(0.5).unwrap(), 0.75);
    assert_eq!(track.get_value(5.0).unwrap(), 0.0);
}

#[test]
fn bounce_fixture_mixes_modes() {
    let json = plinth_test_fixtures::tracks::json("bounce-mixed").expect("load fixture");
    let track = parse_stored_track_json::<f64>(&json).expect("parse stored track");
    assert_eq!(track.config().solver_iterations, 60);

    // Amounts without an explicit type imply an ease.
    let first = track.node(0).unwrap();
    assert_eq!(first.out_type, InterpolationType::Ease);
    assert_eq!(first.in_type, InterpolationType::Linear);

    let cfg = Config {
        solver_iterations: 60,
        ..Config::default()
    };
    let mut ease = Ease::from_config(0.0, 10.0, &cfg);
    ease.set_strengths(0.6, 0.4);
    approx(track.get_value(0.5).unwrap(), ease.value(0.5), 1e-12);

    // Outbound step on the second node.
    assert_eq!(track.get_value(1.5).unwrap(), 10.0);
    // Linear into a zero-strength ease is still a straight line.
    assert_eq!(track.get_value(2.5).unwrap(), 6.0);
}

#[test]
fn path_fixture_carries_array_values() {
    let json = plinth_test_fixtures::tracks::json("path-vec2").expect("load fixture");
    let track = parse_stored_track_json::<[f64; 2]>(&json).expect("parse stored track");
    assert_eq!(track.get_value(2.0).unwrap(), [4.0, -2.0]);
    assert_eq!(track.get_value(6.0).unwrap(), [8.0, -4.0]);
    assert_eq!(track.get_value(8.0).unwrap(), [8.0, 4.0]);
}

#[test]
fn malformed_json_is_a_parse_error() {
    let err = parse_stored_track_json::<f64>("{ \"nodes\": [ { \"position\": 1.0 } ] }")
        .expect_err("missing value");
    assert_eq!(err.category(), "parse");

    let err = parse_stored_track_json::<f64>(r#"{ "nodes": [ { "position": 0, "value": 1, "in": "bouncy" } ] }"#)
        .expect_err("unknown interpolation");
    assert!(matches!(err, TweenError::Parse { .. }));

    assert!(parse_stored_track_json::<f64>("not json").is_err());
}

#[test]
fn empty_node_list_parses_to_empty_track() {
    let track = parse_stored_track_json::<f64>(r#"{ "nodes": [] }"#).unwrap();
    assert!(track.is_empty());
    assert_eq!(track.get_value(0.0), Err(TweenError::EmptyTrack));
}
