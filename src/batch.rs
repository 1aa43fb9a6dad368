//! Slice entry points for the angle kernels in [`crate::angles`].
//!
//! Every function maps its scalar counterpart over the input, preserving
//! order and length. With the `parallel` feature the map runs on rayon.

use crate::angles;
use crate::types::Precision;

#[cfg(feature = "parallel")]
fn elementwise<T, F>(inputs: &[T], kernel: F) -> Vec<f64>
where
    T: Sync,
    F: Fn(&T) -> f64 + Sync + Send,
{
    use rayon::prelude::*;
    inputs.par_iter().map(kernel).collect()
}

#[cfg(not(feature = "parallel"))]
fn elementwise<T, F>(inputs: &[T], kernel: F) -> Vec<f64>
where
    T: Sync,
    F: Fn(&T) -> f64 + Sync + Send,
{
    inputs.iter().map(kernel).collect()
}

/// Lenient declination for day numbers already validated upstream.
pub fn declinations(day_numbers: &[i32]) -> Vec<f64> {
    elementwise(day_numbers, |&n| angles::declination(n))
}

pub fn hour_angles(solar_hours: &[f64]) -> Vec<f64> {
    elementwise(solar_hours, |&h| angles::hour_angle_from_solar_hour(h))
}

pub fn solar_hours(hour_angles: &[f64]) -> Vec<f64> {
    elementwise(hour_angles, |&ha| angles::solar_hour_from_hour_angle(ha))
}

pub fn zenith_angles(declination: f64, latitude: f64, hour_angles: &[f64]) -> Vec<f64> {
    elementwise(hour_angles, |&ha| {
        angles::zenith_angle(declination, latitude, ha)
    })
}

pub fn altitude_angles(
    declination: f64,
    latitude: f64,
    hour_angles: &[f64],
    precision: Precision,
) -> Vec<f64> {
    elementwise(hour_angles, |&ha| {
        angles::altitude_angle_with(declination, latitude, ha, precision)
    })
}

pub fn azimuth_angles(declination: f64, latitude: f64, hour_angles: &[f64]) -> Vec<f64> {
    elementwise(hour_angles, |&ha| {
        angles::azimuth_angle(declination, latitude, ha)
    })
}

pub fn incidence_angles(
    declination: f64,
    latitude: f64,
    tilt: f64,
    orientation: f64,
    hour_angles: &[f64],
) -> Vec<f64> {
    elementwise(hour_angles, |&ha| {
        angles::incidence_angle(declination, latitude, tilt, orientation, ha)
    })
}

/// Zenith angles over a shared hour-angle grid, one row per day.
pub fn zenith_table(day_numbers: &[i32], latitude: f64, hour_angles: &[f64]) -> Vec<Vec<f64>> {
    day_numbers
        .iter()
        .map(|&n| zenith_angles(angles::declination(n), latitude, hour_angles))
        .collect()
}
