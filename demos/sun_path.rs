use chrono::TimeZone;
use chrono_tz::America::Chicago;

use solar_geometry::{
    day_number, solar_position, sun_paths, Hms, SpatialPoint, SunPathConfig, Surface,
    SOLSTICE_EQUINOX_DAYS,
};

fn main() {
    env_logger::init();

    let config = SunPathConfig::from_toml_str(
        r#"
        step_minutes = 60
        radius = 10.0

        [site]
        latitude = 39.8
        longitude = -89.6
        std_meridian = -90.0
        "#,
    )
    .unwrap();
    let site = config.site;

    let dt = Chicago.with_ymd_and_hms(2026, 3, 21, 12, 0, 0).unwrap();
    let pos = solar_position(site.latitude, site.longitude, &dt);
    let panel = Surface::from_compass(30.0, 180.0);

    println!("=== Solar Position ===");
    println!(
        "Location: Springfield, IL ({:.1}°N, {:.1}°W)",
        site.latitude, -site.longitude
    );
    println!("Date/Time: {}", dt);
    println!("Day number: {}", pos.day_number);
    println!("Declination: {:.2}°", pos.declination);
    println!("Equation of Time: {:.2} minutes", pos.equation_of_time);
    println!(
        "Apparent solar time: {:.0}",
        Hms::from_decimal_hours(pos.apparent_solar_time)
    );
    println!("Hour Angle: {:.2}°", pos.hour_angle);
    println!("Zenith Angle: {:.2}°", pos.zenith);
    println!("Altitude: {:.2}°", pos.altitude);
    println!("Azimuth: {:.2}° (0°=N, 90°=E, 180°=S)", pos.azimuth);
    println!(
        "Incidence on 30° south panel: {:.2}°",
        panel.incidence_angle(pos.declination, site.latitude, pos.hour_angle)
    );
    println!();

    let paths = sun_paths(&config, &SOLSTICE_EQUINOX_DAYS).unwrap();
    for (path, &(month, day)) in paths.iter().zip(&SOLSTICE_EQUINOX_DAYS) {
        println!(
            "=== Sun path {:02}/{:02} (day {}) ===",
            month,
            day,
            day_number(month, day).unwrap()
        );
        println!(
            "Sunrise {:.0}, sunset {:.0}",
            Hms::from_decimal_hours(path.sunrise_sunset.sunrise),
            Hms::from_decimal_hours(path.sunrise_sunset.sunset)
        );
        for point in path.points() {
            println!("  {}", point);
        }
        println!();
    }

    println!("=== Shading geometry ===");
    let corner = SpatialPoint::new(2.0, 1.0, 0.0).unwrap().named("C");
    let pivot = SpatialPoint::new(1.0, 1.0, 0.0).unwrap().named("O");
    let rotated = corner.rotate_about(&pivot, 90.0);
    println!("{}", corner);
    println!("{}", rotated);
    if let Some((az, angle)) = corner.angle_between(&rotated) {
        println!(
            "Azimuth of C: {:.2}°, angle between C and C' from the origin: {:.2}°",
            az, angle
        );
    }
}
