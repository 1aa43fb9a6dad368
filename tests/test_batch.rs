use solar_geometry::angles;
use solar_geometry::batch::*;
use solar_geometry::Precision;

macro_rules! assert_approx {
    ($left:expr, $right:expr, $tol:expr) => {
        let (l, r) = ($left as f64, $right as f64);
        assert!(
            (l - r).abs() <= $tol,
            "assert_approx failed: left={}, right={}, diff={}, tol={}",
            l, r, (l - r).abs(), $tol
        );
    };
}

const HOUR_ANGLES: [f64; 7] = [-90.0, -60.0, -30.0, 0.0, 30.0, 60.0, 90.0];

#[test]
fn test_declinations_match_scalar() {
    let days: Vec<i32> = (1..=365).step_by(7).collect();
    let out = declinations(&days);
    assert_eq!(out.len(), days.len());
    for (&n, &d) in days.iter().zip(&out) {
        assert_eq!(d, angles::declination(n));
    }
}

#[test]
fn test_hour_angle_roundtrip_batch() {
    let hours = [0.5, 6.0, 12.0, 17.25, 23.0];
    let has = hour_angles(&hours);
    assert_eq!(has[2], 0.0);
    let back = solar_hours(&has);
    for (&h, &b) in hours.iter().zip(&back) {
        assert_approx!(b, h, 1e-9);
    }
}

#[test]
fn test_zenith_and_altitude_batches() {
    let decl = angles::declination(172);
    let zen = zenith_angles(decl, 39.8, &HOUR_ANGLES);
    let alt = altitude_angles(decl, 39.8, &HOUR_ANGLES, Precision::Double);
    assert_eq!(zen.len(), HOUR_ANGLES.len());
    for i in 0..HOUR_ANGLES.len() {
        assert_eq!(zen[i], angles::zenith_angle(decl, 39.8, HOUR_ANGLES[i]));
        assert_approx!(zen[i] + alt[i], 90.0, 1e-9);
    }
    // Symmetric about solar noon.
    assert_approx!(zen[0], zen[6], 1e-9);
    assert_approx!(zen[1], zen[5], 1e-9);
}

#[test]
fn test_single_precision_batch_close_to_double() {
    let single = altitude_angles(10.0, 45.0, &HOUR_ANGLES, Precision::Single);
    let double = altitude_angles(10.0, 45.0, &HOUR_ANGLES, Precision::Double);
    for (s, d) in single.iter().zip(&double) {
        assert_approx!(*s, *d, 1e-3);
    }
}

#[test]
fn test_azimuth_batch() {
    let az = azimuth_angles(0.0, 40.0, &HOUR_ANGLES);
    assert_approx!(az[3], 180.0, 1e-9);
    assert!(az[0] < 180.0, "morning sun should be east of south");
    assert!(az[6] > 180.0, "afternoon sun should be west of south");
}

#[test]
fn test_horizontal_incidence_equals_zenith() {
    let decl = angles::declination(80);
    let inc = incidence_angles(decl, 39.8, 0.0, 0.0, &HOUR_ANGLES);
    let zen = zenith_angles(decl, 39.8, &HOUR_ANGLES);
    for (i, z) in inc.iter().zip(&zen) {
        assert_approx!(*i, *z, 1e-9);
    }
}

#[test]
fn test_empty_input() {
    assert!(hour_angles(&[]).is_empty());
    assert!(zenith_angles(0.0, 0.0, &[]).is_empty());
    assert!(zenith_table(&[], 0.0, &HOUR_ANGLES).is_empty());
}

#[test]
fn test_zenith_table_shape() {
    let days = [21, 172, 355];
    let table = zenith_table(&days, 39.8, &HOUR_ANGLES);
    assert_eq!(table.len(), 3);
    assert!(table.iter().all(|row| row.len() == HOUR_ANGLES.len()));
    // Noon sun is highest in June, lowest in December.
    assert!(table[1][3] < table[0][3]);
    assert!(table[2][3] > table[0][3]);
}
