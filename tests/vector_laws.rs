use physics_core::core::constants::PI;
use physics_core::{Error, Result, Vector2};
use proptest::prelude::*;

fn component() -> impl Strategy<Value = f64> {
    -1.0e6..1.0e6
}

fn vector() -> impl Strategy<Value = Vector2> {
    (component(), component()).prop_map(Vector2::from)
}

proptest! {
    #[test]
    fn addition_commutes(a in vector(), b in vector()) {
        prop_assert_eq!(a + b, b + a);
    }

    #[test]
    fn subtraction_is_negated_reverse(a in vector(), b in vector()) {
        prop_assert_eq!(a - b, -(b - a));
    }

    #[test]
    fn scalar_multiplication_commutes(v in vector(), k in component()) {
        prop_assert_eq!(v * k, k * v);
    }

    /// Integer components and power-of-two scalars keep every step exact.
    #[test]
    fn scale_then_divide_round_trips(
        x in -1_000_000i32..1_000_000,
        y in -1_000_000i32..1_000_000,
        e in -8i32..8,
    ) {
        let v = Vector2::new(f64::from(x), f64::from(y));
        let k = 2f64.powi(e);
        prop_assert_eq!((v * k).try_div(k).unwrap(), v);
    }

    #[test]
    fn divide_by_zero_always_fails(v in vector()) {
        prop_assert!(matches!(v.try_div(0.0), Err(Error::DivisionByZero(_))));
    }

    #[test]
    fn unit_is_scale_by_inverse_squared_length(v in vector()) {
        prop_assume!(v != Vector2::ZERO);
        let mag = v.x * v.x + v.y * v.y;
        let u = v.unit().unwrap();
        prop_assert!((u.x - v.x * (1.0 / mag)).abs() <= 1e-15 * u.x.abs().max(f64::MIN_POSITIVE));
        prop_assert!((u.y - v.y * (1.0 / mag)).abs() <= 1e-15 * u.y.abs().max(f64::MIN_POSITIVE));
    }

    #[test]
    fn polar_round_trip_recovers_angle(m in 1.0e-3..1.0e3, theta in -PI + 1e-9..PI) {
        let v = Vector2::from_magnitude_angle(m, theta);
        prop_assert!((v.angle() - theta).abs() < 1e-9);
    }

    #[test]
    fn in_place_forms_match_pure_forms(a in vector(), b in vector(), k in 1.0..1.0e3) {
        let mut c = a;
        c += b;
        prop_assert_eq!(c, a + b);
        c -= b;
        prop_assert_eq!(c, a + b - b);
        c *= k;
        prop_assert_eq!(c, (a + b - b) * k);
        let expected = c.try_div(k).unwrap();
        c.try_div_assign(k).unwrap();
        prop_assert_eq!(c, expected);
    }
}

#[test]
fn unit_of_zero_vector_fails() {
    assert!(matches!(
        Vector2::ZERO.unit(),
        Err(Error::DivisionByZero(_))
    ));
}

#[test]
fn unit_matches_scale_exactly() -> Result<()> {
    let v = Vector2::new(3.0, 4.0);
    assert_eq!(v.unit()?, v.try_div(25.0)?);
    assert_eq!(Vector2::new(2.0, 0.0).unit()?, Vector2::new(2.0, 0.0) * 0.25);
    Ok(())
}

#[test]
fn divide_three_six() -> Result<()> {
    let v = Vector2::new(3.0, 6.0);
    assert!(matches!(v.try_div(0.0), Err(Error::DivisionByZero(_))));
    // Reflected zero over non-zero components is exactly zero.
    assert_eq!(Vector2::scalar_div(0.0, v)?, Vector2::ZERO);
    Ok(())
}

#[test]
fn projectile_launch_vector() {
    let v = Vector2::from_magnitude_angle(30.0, physics_core::core::deg_to_rad(45.0));
    assert!((v.x - v.y).abs() < 1e-12);
    assert!((v.angle() - PI / 4.0).abs() < 1e-12);
    assert_eq!(v.to_string(), format!("X: {} Y: {}", v.x, v.y));
}

#[test]
fn checked_operations_reject_results_beyond_f64_max() {
    let big = Vector2::new(f64::MAX, f64::MAX);
    assert!(matches!(big.try_add(big), Err(Error::InvalidParam(_))));
    assert!(matches!(big.try_scale(2.0), Err(Error::InvalidParam(_))));
    assert!(matches!(
        Vector2::try_from_magnitude_angle(1.0, f64::NAN),
        Err(Error::InvalidParam(_))
    ));
    // The largest representable sum still succeeds.
    let half = Vector2::new(f64::MAX / 2.0, 0.0);
    assert!(half.try_add(half).is_ok());
}

#[test]
fn angle_stays_in_half_open_range_for_negative_zero() {
    for v in [
        -Vector2::new(1.0, 0.0),
        Vector2::new(-2.5, -0.0),
        -Vector2::new(f64::MAX, 0.0),
    ] {
        let ang = v.angle();
        assert!(ang > -PI && ang <= PI, "angle {ang} of {v} out of range");
        assert_eq!(ang, PI);
    }
}
