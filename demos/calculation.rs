use chrono::TimeZone;
use chrono_tz::America::Chicago;

use wheel_of_the_year::calculations::{
    current_season, julian_day, moon_phase_info, nearest_sabbat, planetary_positions,
    solar_cycle_phase, sun_sign,
};

fn main() -> Result<(), wheel_of_the_year::Error> {
    let dt = Chicago.with_ymd_and_hms(2026, 3, 21, 12, 0, 0).unwrap();

    let moon = moon_phase_info(&dt);
    let sign = sun_sign(&dt);
    let next = nearest_sabbat(&dt)?;
    let cycle = solar_cycle_phase(&dt)?;

    println!("=== Wheel of the Year ===");
    println!("Date/Time: {}", dt);
    println!("Julian Day: {:.5}", julian_day(&dt));
    println!();
    println!("--- Moon ---");
    println!(
        "{} {} ({:.1}% lit, phase {:.4})",
        moon.descriptor.emoji, moon.descriptor.name, moon.illumination, moon.phase
    );
    println!();
    println!("--- Sun & Season ---");
    println!("Sun sign: {} {} ({}, {})", sign.symbol, sign.name, sign.element, sign.quality);
    println!("Season: {}", current_season(&dt).name());
    println!(
        "Next sabbat: {} {} in {} days ({})",
        next.sabbat.emoji, next.sabbat.name, next.days_until, next.next_date
    );
    println!();
    println!("--- Planets ---");
    for p in planetary_positions(&dt) {
        println!(
            "{:<8} {} {:>7.2}°  {} {:.1}°",
            p.name, p.symbol, p.longitude, p.sign_name, p.sign_degree
        );
    }
    println!();
    println!("--- Solar Cycle {} ---", cycle.cycle_number);
    println!(
        "{}: progress {:.1}%, ~{} sunspots, {:.1} years remaining",
        cycle.stage.label(),
        cycle.progress * 100.0,
        cycle.sunspot_estimate,
        cycle.years_remaining
    );
    Ok(())
}
