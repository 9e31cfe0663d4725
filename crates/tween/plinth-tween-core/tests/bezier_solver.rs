use plinth_tween_core::{Bezier, Config, TweenError, Vec2};

fn approx(a: f64, b: f64, eps: f64) {
    assert!((a - b).abs() <= eps, "left={a} right={b} eps={eps}");
}

/// Monotonic X, and Y control points spaced so that y(t) == t.
fn round_trip_curve() -> Bezier {
    Bezier::new(vec![
        Vec2::new(0.0, 0.0),
        Vec2::new(0.2, 1.0 / 3.0),
        Vec2::new(0.8, 2.0 / 3.0),
        Vec2::new(1.0, 1.0),
    ])
    .expect("non-empty curve")
}

#[test]
fn default_iterations_is_one_hundred() {
    assert_eq!(round_trip_curve().iterations(), 100);
}

#[test]
fn round_trip_with_default_iterations_is_precise() {
    let b = round_trip_curve();
    for i in 0..=50 {
        let t = i as f64 / 50.0;
        let recovered = b.solve_y_for_x(b.get_x(t)).unwrap();
        approx(recovered, t, 1e-6);
    }
}

#[test]
fn round_trip_with_ten_iterations_is_coarse_but_bounded() {
    let mut b = round_trip_curve();
    b.set_iterations(10);
    let mut worst = 0.0f64;
    for i in 0..=50 {
        let t = i as f64 / 50.0;
        let err = (b.solve_y_for_x(b.get_x(t)).unwrap() - t).abs();
        worst = worst.max(err);
    }
    assert!(worst < 1e-2, "worst error {worst}");
}

#[test]
fn solve_x_for_y_inverts_the_other_axis() {
    let b = round_trip_curve();
    for i in 0..=20 {
        let t = i as f64 / 20.0;
        approx(b.solve_x_for_y(b.get_y(t)).unwrap(), b.get_x(t), 1e-9);
    }
}

#[test]
fn decreasing_curves_solve_too() {
    let b = Bezier::new(vec![
        Vec2::new(1.0, 0.0),
        Vec2::new(0.7, 0.5),
        Vec2::new(0.3, 0.5),
        Vec2::new(0.0, 1.0),
    ])
    .unwrap();
    for i in 0..=10 {
        let t = i as f64 / 10.0;
        approx(b.solve_y_for_x(b.get_x(t)).unwrap(), b.get_y(t), 1e-9);
    }
}

#[test]
fn degenerate_axis_is_an_error() {
    let b = Bezier::new(vec![
        Vec2::new(0.5, 0.0),
        Vec2::new(0.2, 0.5),
        Vec2::new(0.5, 1.0),
    ])
    .unwrap();
    assert_eq!(b.solve_y_for_x(0.4), Err(TweenError::DegenerateRange));
    // Y still spans a range, so the other direction works.
    assert!(b.solve_x_for_y(0.5).is_ok());
}

#[test]
fn empty_curve_is_rejected() {
    assert_eq!(Bezier::new(Vec::new()), Err(TweenError::EmptyCurve));
}

#[test]
fn five_point_curve_uses_repeated_blending() {
    // Quartic with all Y weights on the middle point: y(t) = 6 t^2 (1-t)^2.
    let b = Bezier::new(vec![
        Vec2::new(0.0, 0.0),
        Vec2::new(0.25, 0.0),
        Vec2::new(0.5, 1.0),
        Vec2::new(0.75, 0.0),
        Vec2::new(1.0, 0.0),
    ])
    .unwrap();
    for i in 0..=10 {
        let t = i as f64 / 10.0;
        approx(b.get_x(t), t, 1e-12);
        approx(b.get_y(t), 6.0 * t * t * (1.0 - t) * (1.0 - t), 1e-12);
    }
}

#[test]
fn point_editing_is_bounds_checked() {
    let mut b = round_trip_curve();
    b.set_point(1, Vec2::new(0.1, 0.1)).unwrap();
    assert_eq!(b.point(1).unwrap(), Vec2::new(0.1, 0.1));
    assert_eq!(
        b.set_point(4, Vec2::default()),
        Err(TweenError::IndexOutOfRange { index: 4, len: 4 })
    );
    assert!(b.point(9).is_err());
}

#[test]
fn set_points_overwrites_and_extends() {
    let mut b = round_trip_curve();
    b.set_points(&[Vec2::new(0.9, 0.9), Vec2::new(2.0, 2.0)], 3)
        .unwrap();
    assert_eq!(b.points().len(), 5);
    assert_eq!(b.point(3).unwrap(), Vec2::new(0.9, 0.9));
    assert_eq!(b.point(4).unwrap(), Vec2::new(2.0, 2.0));
    assert!(b.set_points(&[Vec2::default()], 6).is_err());

    b.set_all_points(Vec2::new(1.0, 2.0));
    assert!(b.points().iter().all(|p| *p == Vec2::new(1.0, 2.0)));
}

#[test]
fn config_sets_iterations() {
    let cfg = Config {
        solver_iterations: 12,
        ..Config::default()
    };
    let b = Bezier::with_config(vec![Vec2::new(0.0, 0.0), Vec2::new(1.0, 1.0)], &cfg).unwrap();
    assert_eq!(b.iterations(), 12);
    approx(b.solve_y_for_x(0.5).unwrap(), 0.5, 1e-3);
}

#[test]
fn serde_round_trip_keeps_points_and_iterations() {
    let mut b = round_trip_curve();
    b.set_iterations(30);
    let json = serde_json::to_string(&b).unwrap();
    let back: Bezier = serde_json::from_str(&json).unwrap();
    assert_eq!(back, b);
}
