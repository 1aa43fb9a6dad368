use chrono::{DateTime, TimeZone, Timelike, Utc};

use crate::calendar::day_number_of;
use crate::error::{check_day_number, Result};
use crate::types::{EotModel, Precision, Site, SolarPosition, SunriseSunset};

pub const EARTH_AXIAL_TILT: f64 = 23.45;
pub const DEGREES_PER_HOUR: f64 = 15.0;
pub const DEG_TO_RAD: f64 = std::f64::consts::PI / 180.0;
pub const RAD_TO_DEG: f64 = 180.0 / std::f64::consts::PI;

pub fn deg_to_rad(deg: f64) -> f64 {
    deg * DEG_TO_RAD
}

pub fn rad_to_deg(rad: f64) -> f64 {
    rad * RAD_TO_DEG
}

/// Wraps an angle into [0°, 360°).
pub fn normalize_angle(angle: f64) -> f64 {
    let wrapped = angle.rem_euclid(360.0);
    // rem_euclid rounds tiny negative inputs up to exactly 360.
    if wrapped >= 360.0 {
        0.0
    } else {
        wrapped
    }
}

/// Solar declination in degrees, without a domain check.
pub fn declination(n: i32) -> f64 {
    EARTH_AXIAL_TILT * deg_to_rad(360.0 * (n as f64 + 284.0) / 365.0).sin()
}

/// Solar declination, rejecting day numbers outside `1..=366`.
pub fn declination_checked(n: i32) -> Result<f64> {
    check_day_number(n).map(declination)
}

/// Hour angle for a solar hour. Negative hours are taken from the previous
/// midnight, so `-1.0` behaves like `23.0`.
pub fn hour_angle_from_solar_hour(hour: f64) -> f64 {
    let hour = if hour < 0.0 { hour + 24.0 } else { hour };
    DEGREES_PER_HOUR * (hour - 12.0)
}

pub fn solar_hour_from_hour_angle(hour_angle: f64) -> f64 {
    hour_angle / DEGREES_PER_HOUR + 12.0
}

/// `cos(zenith)`, equivalently `sin(altitude)`, unclamped.
fn sun_height_cosine(declination: f64, latitude: f64, hour_angle: f64) -> f64 {
    let (dec, lat, ha) = (
        deg_to_rad(declination),
        deg_to_rad(latitude),
        deg_to_rad(hour_angle),
    );
    lat.cos() * dec.cos() * ha.cos() + lat.sin() * dec.sin()
}

pub fn zenith_angle(declination: f64, latitude: f64, hour_angle: f64) -> f64 {
    let cos_zenith = sun_height_cosine(declination, latitude, hour_angle);
    rad_to_deg(cos_zenith.clamp(-1.0, 1.0).acos())
}

pub fn altitude_angle(declination: f64, latitude: f64, hour_angle: f64) -> f64 {
    altitude_angle_with(declination, latitude, hour_angle, Precision::Double)
}

/// Solar altitude evaluated at the requested numeric width.
pub fn altitude_angle_with(
    declination: f64,
    latitude: f64,
    hour_angle: f64,
    precision: Precision,
) -> f64 {
    match precision {
        Precision::Double => {
            let sin_alt = sun_height_cosine(declination, latitude, hour_angle);
            rad_to_deg(sin_alt.clamp(-1.0, 1.0).asin())
        }
        Precision::Single => {
            let (dec, lat, ha) = (
                (declination as f32).to_radians(),
                (latitude as f32).to_radians(),
                (hour_angle as f32).to_radians(),
            );
            let sin_alt = lat.cos() * dec.cos() * ha.cos() + lat.sin() * dec.sin();
            f64::from(sin_alt.clamp(-1.0, 1.0).asin().to_degrees())
        }
    }
}

/// Angle of incidence of beam radiation on a tilted, oriented surface.
///
/// Reduces to [`zenith_angle`] for a horizontal surface.
/// `orientation` is in (-180°, 180°], 0° facing south; see
/// [`crate::Surface::from_compass`] for the (0°, 360°) convention.
pub fn incidence_angle(
    declination: f64,
    latitude: f64,
    tilt: f64,
    orientation: f64,
    hour_angle: f64,
) -> f64 {
    let (dec, lat, ha) = (
        deg_to_rad(declination),
        deg_to_rad(latitude),
        deg_to_rad(hour_angle),
    );
    let (til, ori) = (deg_to_rad(tilt), deg_to_rad(orientation));
    let cos_inc = dec.sin() * (lat.sin() * til.cos() - lat.cos() * til.sin() * ori.cos())
        + dec.cos()
            * (lat.cos() * til.cos() * ha.cos()
                + lat.sin() * til.sin() * ori.cos() * ha.cos()
                + til.sin() * ori.sin() * ha.sin());
    rad_to_deg(cos_inc.clamp(-1.0, 1.0).acos())
}

/// Solar azimuth, 0° = north, clockwise, in [0°, 360°).
pub fn azimuth_angle(declination: f64, latitude: f64, hour_angle: f64) -> f64 {
    let (dec, lat, ha) = (
        deg_to_rad(declination),
        deg_to_rad(latitude),
        deg_to_rad(hour_angle),
    );
    let sin_az = -dec.cos() * ha.sin();
    let cos_az = dec.sin() * lat.cos() - dec.cos() * lat.sin() * ha.cos();
    normalize_angle(rad_to_deg(sin_az.atan2(cos_az)))
}

/// Equation of time in minutes (Spencer series).
pub fn equation_of_time(n: i32) -> f64 {
    equation_of_time_with(n, EotModel::Spencer)
}

pub fn equation_of_time_with(n: i32, model: EotModel) -> f64 {
    match model {
        EotModel::Spencer => {
            let b = deg_to_rad((n - 1) as f64 * (360.0 / 365.0));
            229.18
                * (0.000075 + 0.001868 * b.cos()
                    - 0.032077 * b.sin()
                    - 0.014615 * (2.0 * b).cos()
                    - 0.040849 * (2.0 * b).sin())
        }
        EotModel::Approximate => {
            let b = deg_to_rad(360.0 * (n - 81) as f64 / 364.0);
            9.87 * (2.0 * b).sin() - 7.53 * b.cos() - 1.5 * b.sin()
        }
    }
}

/// Hours to add to local standard time to get apparent solar time.
fn solar_time_correction(n: i32, longitude: f64, std_meridian: f64) -> f64 {
    (4.0 * (longitude - std_meridian) + equation_of_time(n)) / 60.0
}

/// Apparent (true) solar time from local standard clock time, in hours.
pub fn apparent_solar_time(
    local_standard_hours: f64,
    n: i32,
    longitude: f64,
    std_meridian: f64,
) -> f64 {
    local_standard_hours + solar_time_correction(n, longitude, std_meridian)
}

/// Inverse of [`apparent_solar_time`].
pub fn local_standard_time(
    apparent_solar_hours: f64,
    n: i32,
    longitude: f64,
    std_meridian: f64,
) -> f64 {
    apparent_solar_hours - solar_time_correction(n, longitude, std_meridian)
}

/// Sunrise and sunset for a latitude and day, in apparent solar hours.
///
/// Polar night collapses to solar noon; polar day spans the whole day.
pub fn estimate_sunrise_sunset(latitude: f64, n: i32) -> SunriseSunset {
    let lat_rad = deg_to_rad(latitude);
    let decl_rad = deg_to_rad(declination(n));
    let cos_h = -lat_rad.tan() * decl_rad.tan();

    if cos_h >= 1.0 {
        SunriseSunset {
            sunrise: 12.0,
            sunset: 12.0,
        }
    } else if cos_h <= -1.0 {
        SunriseSunset {
            sunrise: 0.0,
            sunset: 24.0,
        }
    } else {
        let half_day = rad_to_deg(cos_h.acos()) / DEGREES_PER_HOUR;
        SunriseSunset {
            sunrise: 12.0 - half_day,
            sunset: 12.0 + half_day,
        }
    }
}

/// Solar position at a site for a day number and local standard clock time.
pub fn solar_position_at(site: &Site, n: i32, local_standard_hours: f64) -> SolarPosition {
    let eot = equation_of_time(n);
    let decl = declination(n);
    let ast = apparent_solar_time(local_standard_hours, n, site.longitude, site.std_meridian)
        .rem_euclid(24.0);
    let ha = hour_angle_from_solar_hour(ast);
    let zenith = zenith_angle(decl, site.latitude, ha);
    SolarPosition {
        day_number: n,
        declination: decl,
        equation_of_time: eot,
        apparent_solar_time: ast,
        hour_angle: ha,
        zenith,
        altitude: 90.0 - zenith,
        azimuth: azimuth_angle(decl, site.latitude, ha),
    }
}

/// Solar position for a zoned date-time. The instant is converted to UTC
/// and the longitude correction is taken from the Greenwich meridian.
pub fn solar_position<Tz: TimeZone>(
    latitude: f64,
    longitude: f64,
    dt: &DateTime<Tz>,
) -> SolarPosition {
    let utc = dt.with_timezone(&Utc);
    let utc_hours = utc.hour() as f64 + utc.minute() as f64 / 60.0 + utc.second() as f64 / 3600.0;
    let site = Site {
        latitude,
        longitude,
        std_meridian: 0.0,
    };
    solar_position_at(&site, day_number_of(&utc), utc_hours)
}
