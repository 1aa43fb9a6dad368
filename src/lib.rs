pub mod angles;
pub mod batch;
pub mod calendar;
pub mod config;
pub mod error;
pub mod point;
pub mod sun_path;
pub mod types;
pub mod vector;

pub use angles::{
    altitude_angle, altitude_angle_with, apparent_solar_time, azimuth_angle, declination,
    declination_checked, deg_to_rad, equation_of_time, equation_of_time_with,
    estimate_sunrise_sunset, hour_angle_from_solar_hour, incidence_angle, local_standard_time,
    normalize_angle, rad_to_deg, solar_hour_from_hour_angle, solar_position, solar_position_at,
    zenith_angle, DEGREES_PER_HOUR, DEG_TO_RAD, EARTH_AXIAL_TILT, RAD_TO_DEG,
};

pub use calendar::{
    day_number, day_number_of, day_numbers, month_day_from_day_number, Hms, CUMULATIVE_DAYS,
    RECOMMENDED_DAYS, SEVEN_DAYS, SOLSTICE_EQUINOX_DAYS,
};

pub use config::SunPathConfig;
pub use error::{Result, SolarError};
pub use point::{Color, Naming, PointRange, SpatialPoint, AZIMUTH_SENTINEL};
pub use sun_path::{interpolate_angle, sun_path, sun_paths, SunPath, SunPathSample};
pub use types::{EotModel, Precision, Site, SolarPosition, SunriseSunset, Surface};
pub use vector::Displacement;
