use chrono::{Datelike, Duration, NaiveDate, TimeZone, Utc};
use chrono_tz::America::Chicago;

use wheel_of_the_year::calculations::*;
use wheel_of_the_year::tables::{MOON_PHASES, PLANETS, SABBATS, SOLAR_CYCLE, ZODIAC};
use wheel_of_the_year::types::{CycleStage, Season, SolarCycleEpoch, UpcomingSabbat};
use wheel_of_the_year::Error;

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

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn sabbat(name: &str) -> &'static wheel_of_the_year::Sabbat {
    SABBATS.iter().find(|s| s.name == name).unwrap()
}

// ── Julian Day ──

#[test]
fn test_julian_day_j2000() {
    let dt = Utc.with_ymd_and_hms(2000, 1, 1, 12, 0, 0).unwrap();
    assert_eq!(julian_day(&dt), 2451545.0);
}

#[test]
fn test_julian_day_unix_epoch() {
    let dt = Utc.with_ymd_and_hms(1970, 1, 1, 0, 0, 0).unwrap();
    assert_eq!(julian_day(&dt), 2440587.5);
}

#[test]
fn test_julian_day_converts_offset_to_utc() {
    let chicago = Chicago.with_ymd_and_hms(2000, 1, 1, 6, 0, 0).unwrap();
    assert_eq!(julian_day(&chicago), 2451545.0);
}

#[test]
fn test_julian_day_time_of_day_fraction() {
    let midnight = Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap();
    let six_pm = Utc.with_ymd_and_hms(2024, 3, 1, 18, 0, 0).unwrap();
    assert_approx!(julian_day(&six_pm) - julian_day(&midnight), 0.75, 1e-9);
}

#[test]
fn test_julian_day_across_leap_day() {
    let feb28 = Utc.with_ymd_and_hms(2024, 2, 28, 12, 0, 0).unwrap();
    let mar1 = Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap();
    assert_eq!(julian_day(&mar1) - julian_day(&feb28), 2.0);
}

#[test]
fn test_julian_centuries_zero_at_j2000() {
    let dt = Utc.with_ymd_and_hms(2000, 1, 1, 12, 0, 0).unwrap();
    assert_eq!(julian_centuries(&dt), 0.0);
}

// ── NormalizeAngle ──

#[test]
fn test_normalize_angle_basic() {
    let cases: &[(f64, f64)] = &[
        (0.0, 0.0),
        (45.0, 45.0),
        (360.0, 0.0),
        (361.0, 1.0),
        (-1.0, 359.0),
        (-90.0, 270.0),
        (720.0, 0.0),
        (-450.0, 270.0),
    ];
    for &(input, expected) in cases {
        assert_approx!(normalize_angle(input), expected, 1e-9);
    }
}

#[test]
fn test_normalize_angle_tiny_negative_stays_below_360() {
    let a = normalize_angle(-1e-15);
    assert!((0.0..360.0).contains(&a), "{}", a);
}

#[test]
fn test_round_to() {
    assert_eq!(round_to(12.3456, 2), 12.35);
    assert_eq!(round_to(12.34, 1), 12.3);
    assert_eq!(round_to(99.96, 1), 100.0);
}

// ── Moon phase ──

#[test]
fn test_moon_phase_zero_at_reference_new_moon() {
    let epoch = Utc.with_ymd_and_hms(2000, 1, 6, 18, 14, 0).unwrap();
    assert_eq!(epoch.timestamp(), REFERENCE_NEW_MOON_UNIX);
    assert_eq!(moon_phase(&epoch), 0.0);
}

#[test]
fn test_moon_phase_periodic() {
    let synodic_ms = (SYNODIC_MONTH * 86_400_000.0).round() as i64;
    let start = Utc.with_ymd_and_hms(2023, 5, 10, 3, 0, 0).unwrap();
    let p0 = moon_phase(&start);
    let p1 = moon_phase(&(start + Duration::milliseconds(synodic_ms)));
    let p5 = moon_phase(&(start + Duration::milliseconds(synodic_ms * 5)));
    assert!(p0 > 0.01 && p0 < 0.99, "pick a start away from the wrap: {}", p0);
    assert_approx!(p1, p0, 1e-6);
    assert_approx!(p5, p0, 1e-6);
}

#[test]
fn test_moon_phase_half_cycle_is_full() {
    let epoch = Utc.with_ymd_and_hms(2000, 1, 6, 18, 14, 0).unwrap();
    let half = Duration::milliseconds((SYNODIC_MONTH * 43_200_000.0).round() as i64);
    let info = moon_phase_info(&(epoch + half));
    assert_approx!(info.phase, 0.5, 1e-6);
    assert_eq!(info.index, 4);
    assert_eq!(info.descriptor.name, "Full Moon");
    assert_eq!(info.illumination, 100.0);
}

#[test]
fn test_moon_phase_before_reference_epoch() {
    let before = Utc.with_ymd_and_hms(1999, 12, 30, 0, 0, 0).unwrap();
    let p = moon_phase(&before);
    assert!((0.0..1.0).contains(&p), "{}", p);
    assert!(p > 0.7, "a week before new moon should be waning: {}", p);
}

#[test]
fn test_moon_phase_and_illumination_bounded() {
    let start = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
    for step in 0..(4 * 730) {
        let dt = start + Duration::hours(6 * step);
        let info = moon_phase_info(&dt);
        assert!((0.0..1.0).contains(&info.phase), "{}: {}", dt, info.phase);
        assert!(
            (0.0..=100.0).contains(&info.illumination),
            "{}: {}",
            dt,
            info.illumination
        );
        assert!(info.index < 8);
        assert_eq!(info.descriptor.name, MOON_PHASES[info.index].name);
    }
}

#[test]
fn test_moon_phase_index_octants() {
    assert_eq!(moon_phase_index(0.0), 0);
    assert_eq!(moon_phase_index(0.0624), 0);
    assert_eq!(moon_phase_index(0.0625), 1);
    assert_eq!(moon_phase_index(0.25), 2);
    assert_eq!(moon_phase_index(0.5), 4);
    assert_eq!(moon_phase_index(0.75), 6);
    assert_eq!(moon_phase_index(0.9), 7);
    assert_eq!(moon_phase_index(0.97), 0);
}

#[test]
fn test_illumination_curve() {
    assert_approx!(illumination(0.0), 0.0, 1e-9);
    assert_approx!(illumination(0.25), 50.0, 1e-9);
    assert_approx!(illumination(0.5), 100.0, 1e-9);
    assert_approx!(illumination(0.75), 50.0, 1e-9);
}

#[test]
fn test_moon_info_at_new_moon() {
    let epoch = Utc.with_ymd_and_hms(2000, 1, 6, 18, 14, 0).unwrap();
    let info = moon_phase_info(&epoch);
    assert_eq!(info.descriptor.name, "New Moon");
    assert_eq!(info.descriptor.icon, "mdi:moon-new");
    assert_eq!(info.illumination, 0.0);
}

// ── Planets ──

#[test]
fn test_planetary_positions_table_order() {
    let dt = Utc.with_ymd_and_hms(2024, 6, 21, 0, 0, 0).unwrap();
    let positions = planetary_positions(&dt);
    assert_eq!(positions.len(), 10);
    for (pos, planet) in positions.iter().zip(PLANETS.iter()) {
        assert_eq!(pos.name, planet.name);
        assert_eq!(pos.symbol, planet.symbol);
        assert_eq!(pos.color, planet.color);
    }
}

#[test]
fn test_planetary_positions_at_j2000_are_base_longitudes() {
    let dt = Utc.with_ymd_and_hms(2000, 1, 1, 12, 0, 0).unwrap();
    let positions = planetary_positions(&dt);

    let sun = &positions[0];
    assert_approx!(sun.longitude, 280.46646, 1e-9);
    assert_eq!(sun.sign_index, 9);
    assert_eq!(sun.sign_name, "Capricorn");
    assert_approx!(sun.sign_degree, 10.46646, 1e-9);

    let moon = &positions[1];
    assert_eq!(moon.sign_name, "Scorpio");

    let mars = &positions[4];
    assert_eq!(mars.sign_name, "Pisces");
    assert_approx!(mars.sign_degree, 25.433, 1e-9);
}

#[test]
fn test_sun_longitude_advances_about_one_degree_per_day() {
    let a = Utc.with_ymd_and_hms(2024, 4, 1, 0, 0, 0).unwrap();
    let b = a + Duration::days(1);
    let la = planetary_positions(&a)[0].longitude;
    let lb = planetary_positions(&b)[0].longitude;
    assert_approx!(normalize_angle(lb - la), 0.9856, 0.001);
}

#[test]
fn test_planetary_sign_ranges_hold_over_time() {
    let start = Utc.with_ymd_and_hms(1990, 1, 1, 0, 0, 0).unwrap();
    for step in 0..2000 {
        let dt = start + Duration::hours(127 * step);
        for p in planetary_positions(&dt) {
            assert!((0.0..360.0).contains(&p.longitude), "{} {}", p.name, p.longitude);
            assert!(p.sign_index < 12);
            assert!(
                (0.0..30.0).contains(&p.sign_degree),
                "{} {}",
                p.name,
                p.sign_degree
            );
            assert_eq!(p.sign_name, ZODIAC[p.sign_index].name);
            assert_eq!(p.sign_symbol, ZODIAC[p.sign_index].symbol);
        }
    }
}

#[test]
fn test_zodiac_placement_exhaustive() {
    for tenth in 0..3600 {
        let lon = tenth as f64 / 10.0;
        let (idx, deg) = zodiac_placement(lon);
        assert_eq!(idx, tenth / 300, "longitude {}", lon);
        assert!((0.0..30.0).contains(&deg), "longitude {}: {}", lon, deg);
    }
    assert_eq!(zodiac_placement(0.0), (0, 0.0));
    assert_eq!(zodiac_placement(30.0), (1, 0.0));
    assert_eq!(zodiac_placement(330.0).0, 11);
}

// ── Sun sign ──

#[test]
fn test_sun_sign_boundaries() {
    let cases: &[(u32, u32, &str)] = &[
        (12, 22, "Capricorn"),
        (12, 31, "Capricorn"),
        (1, 1, "Capricorn"),
        (1, 19, "Capricorn"),
        (1, 20, "Aquarius"),
        (2, 18, "Aquarius"),
        (2, 19, "Pisces"),
        (3, 20, "Pisces"),
        (3, 21, "Aries"),
        (6, 20, "Gemini"),
        (6, 21, "Cancer"),
        (12, 21, "Sagittarius"),
    ];
    for &(m, d, expected) in cases {
        assert_eq!(sun_sign_for(m, d).name, expected, "{:02}-{:02}", m, d);
    }
}

#[test]
fn test_sun_sign_windows_cover_every_day_once() {
    let mut day = date(2024, 1, 1);
    while day.year() == 2024 {
        let (m, d) = (day.month(), day.day());
        let matches = ZODIAC.iter().filter(|z| sign_contains(z, m, d)).count();
        assert_eq!(matches, 1, "{}", day);
        day = day.succ_opt().unwrap();
    }
}

#[test]
fn test_sun_sign_uses_local_calendar_date() {
    let utc = Utc.with_ymd_and_hms(2024, 1, 20, 3, 0, 0).unwrap();
    assert_eq!(sun_sign(&utc).name, "Aquarius");
    assert_eq!(sun_sign(&utc.with_timezone(&Chicago)).name, "Capricorn");
}

#[test]
fn test_sun_sign_fallback_is_first_entry() {
    assert_eq!(sun_sign_for(13, 1).name, ZODIAC[0].name);
}

// ── Season ──

#[test]
fn test_season_boundaries() {
    assert_eq!(season_for_month(3), Season::Spring);
    assert_eq!(season_for_month(2), Season::Winter);
    assert_eq!(season_for_month(12), Season::Winter);
    assert_eq!(season_for_month(6), Season::Summer);
    assert_eq!(season_for_month(8), Season::Summer);
    assert_eq!(season_for_month(9), Season::Autumn);
    assert_eq!(season_for_month(11), Season::Autumn);
}

#[test]
fn test_season_info_lists_its_months() {
    for month in 1..=12 {
        let season = season_for_month(month);
        let info = season_info(season);
        assert_eq!(info.season, season);
        assert!(info.months.contains(&month), "month {}", month);
    }
}

#[test]
fn test_current_season_ignores_day() {
    let first = Utc.with_ymd_and_hms(2024, 11, 1, 0, 0, 0).unwrap();
    let last = Utc.with_ymd_and_hms(2024, 11, 30, 23, 59, 59).unwrap();
    assert_eq!(current_season(&first), Season::Autumn);
    assert_eq!(current_season(&last), Season::Autumn);
}

// ── Sabbats ──

#[test]
fn test_days_until_sabbat_zero_on_the_day() {
    for s in SABBATS.iter() {
        let today = date(2025, s.month, s.day);
        assert_eq!(days_until_sabbat_on(s, today).unwrap(), 0, "{}", s.name);
        assert_eq!(next_sabbat_on(s, today).unwrap(), today);
    }
}

#[test]
fn test_days_until_sabbat_ignores_time_of_day() {
    let late = Utc.with_ymd_and_hms(2024, 6, 21, 23, 59, 59).unwrap();
    assert_eq!(days_until_sabbat(sabbat("Litha"), &late).unwrap(), 0);
}

#[test]
fn test_passed_sabbat_rolls_to_next_year() {
    let yule = sabbat("Yule");
    let next = next_sabbat_on(yule, date(2024, 12, 22)).unwrap();
    assert_eq!(next, date(2025, 12, 21));
    assert_eq!(days_until_sabbat_on(yule, date(2024, 12, 22)).unwrap(), 364);
}

#[test]
fn test_upcoming_sabbat_stays_this_year() {
    let litha = sabbat("Litha");
    assert_eq!(next_sabbat_on(litha, date(2024, 6, 20)).unwrap(), date(2024, 6, 21));
    assert_eq!(days_until_sabbat_on(litha, date(2024, 6, 20)).unwrap(), 1);
}

#[test]
fn test_sabbat_date_out_of_range() {
    let err = sabbat_date(sabbat("Yule"), i32::MAX).unwrap_err();
    assert!(matches!(err, Error::DateOutOfRange { .. }));
}

#[test]
fn test_sabbat_schedule_is_in_table_order() {
    let schedule = sabbat_schedule_on(date(2024, 3, 1)).unwrap();
    let names: Vec<&str> = schedule.iter().map(|u| u.sabbat.name).collect();
    assert_eq!(
        names,
        ["Yule", "Imbolc", "Ostara", "Beltane", "Litha", "Lughnasadh", "Mabon", "Samhain"]
    );
    assert!(schedule.iter().all(|u| u.days_until >= 0 && u.days_until < 366));
}

#[test]
fn test_nearest_sabbat_examples() {
    let n = nearest_sabbat_on(date(2024, 11, 1)).unwrap();
    assert_eq!(n.sabbat.name, "Yule");
    assert_eq!(n.days_until, 50);

    let n = nearest_sabbat_on(date(2024, 12, 22)).unwrap();
    assert_eq!(n.sabbat.name, "Imbolc");
    assert_eq!(n.next_date, date(2025, 2, 1));
    assert_eq!(n.days_until, 41);
}

#[test]
fn test_nearest_tie_goes_to_earlier_entry() {
    let today = date(2024, 1, 1);
    let schedule = vec![
        UpcomingSabbat { sabbat: &SABBATS[3], days_until: 5, next_date: today },
        UpcomingSabbat { sabbat: &SABBATS[1], days_until: 2, next_date: today },
        UpcomingSabbat { sabbat: &SABBATS[0], days_until: 2, next_date: today },
    ];
    let nearest = nearest_of(&schedule).unwrap();
    assert_eq!(nearest.sabbat.name, SABBATS[1].name);
    assert!(nearest_of(&[]).is_none());
}

#[test]
fn test_nearest_sabbat_is_deterministic() {
    let now = Utc.with_ymd_and_hms(2024, 9, 1, 8, 0, 0).unwrap();
    let a = nearest_sabbat(&now).unwrap();
    let b = nearest_sabbat(&now).unwrap();
    assert_eq!(a, b);
    assert_eq!(a.sabbat.name, "Mabon");
}

// ── Solar cycle ──

fn cycle_bounds() -> (chrono::DateTime<Utc>, chrono::DateTime<Utc>) {
    (
        Utc.with_ymd_and_hms(2019, 12, 1, 0, 0, 0).unwrap(),
        Utc.with_ymd_and_hms(2030, 6, 1, 0, 0, 0).unwrap(),
    )
}

#[test]
fn test_solar_cycle_start() {
    let (start, _) = cycle_bounds();
    let c = solar_cycle_phase(&start).unwrap();
    assert_eq!(c.cycle_number, 25);
    assert_eq!(c.progress, 0.0);
    assert_eq!(c.phase, 0.0);
    assert_eq!(c.sunspot_estimate, 10);
    assert_eq!(c.stage, CycleStage::EarlyAscending);
}

#[test]
fn test_solar_cycle_end() {
    let (_, end) = cycle_bounds();
    let c = solar_cycle_phase(&end).unwrap();
    assert_eq!(c.progress, 1.0);
    assert_approx!(c.phase, 0.0, 1e-12);
    assert_eq!(c.sunspot_estimate, 10);
    assert_eq!(c.years_remaining, 0.0);
    assert_eq!(c.stage, CycleStage::LateDescending);
}

#[test]
fn test_solar_cycle_midpoint() {
    let (start, end) = cycle_bounds();
    let mid = start + (end - start) / 2;
    let c = solar_cycle_phase(&mid).unwrap();
    assert_approx!(c.progress, 0.5, 1e-12);
    assert_approx!(c.phase, 1.0, 1e-12);
    assert_eq!(c.sunspot_estimate, 200);
    assert_eq!(c.stage, CycleStage::SolarMaximum);
    assert_approx!(c.years_remaining, 5.25, 0.01);
}

#[test]
fn test_solar_cycle_clamps_outside_window() {
    let before = Utc.with_ymd_and_hms(2010, 1, 1, 0, 0, 0).unwrap();
    let after = Utc.with_ymd_and_hms(2040, 1, 1, 0, 0, 0).unwrap();
    assert_eq!(solar_cycle_phase(&before).unwrap().progress, 0.0);
    let late = solar_cycle_phase(&after).unwrap();
    assert_eq!(late.progress, 1.0);
    assert_eq!(late.years_remaining, 0.0);
}

#[test]
fn test_solar_cycle_custom_epoch() {
    let epoch = SolarCycleEpoch {
        cycle_number: 99,
        minimum_year: 2000,
        minimum_month: 1,
        maximum_year: 2005,
        maximum_month: 1,
        next_minimum_year: 2010,
        next_minimum_month: 1,
    };
    let dt = Utc.with_ymd_and_hms(2002, 1, 1, 0, 0, 0).unwrap();
    let c = solar_cycle_phase_for(&epoch, &dt).unwrap();
    assert_eq!(c.cycle_number, 99);
    assert_approx!(c.progress, 0.2, 0.001);
    assert_eq!(c.stage, CycleStage::Ascending);
}

#[test]
fn test_solar_cycle_inverted_epoch_is_rejected() {
    let epoch = SolarCycleEpoch {
        next_minimum_year: 2010,
        ..SOLAR_CYCLE
    };
    let dt = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
    let err = solar_cycle_phase_for(&epoch, &dt).unwrap_err();
    assert!(matches!(err, Error::InvalidConfig(_)));
}

#[test]
fn test_cycle_stage_thresholds() {
    assert_eq!(CycleStage::from_progress(0.0), CycleStage::EarlyAscending);
    assert_eq!(CycleStage::from_progress(0.1499), CycleStage::EarlyAscending);
    assert_eq!(CycleStage::from_progress(0.15), CycleStage::Ascending);
    assert_eq!(CycleStage::from_progress(0.4), CycleStage::SolarMaximum);
    assert_eq!(CycleStage::from_progress(0.6), CycleStage::Descending);
    assert_eq!(CycleStage::from_progress(0.85), CycleStage::LateDescending);
    assert_eq!(CycleStage::from_progress(1.0), CycleStage::LateDescending);
    assert_eq!(CycleStage::SolarMaximum.label(), "Solar Maximum");
}

// ── Timestamp parsing ──

#[test]
fn test_parse_timestamp_naive_is_utc() {
    let dt = parse_timestamp("2024-06-21T00:00:00").unwrap();
    assert_eq!(dt, Utc.with_ymd_and_hms(2024, 6, 21, 0, 0, 0).unwrap());
    let spaced = parse_timestamp("2024-06-21 00:00:00").unwrap();
    assert_eq!(spaced, dt);
}

#[test]
fn test_parse_timestamp_with_offset() {
    let dt = parse_timestamp("2024-06-21T02:00:00+02:00").unwrap();
    assert_eq!(dt, Utc.with_ymd_and_hms(2024, 6, 21, 0, 0, 0).unwrap());
    assert_eq!(dt.offset().local_minus_utc(), 7200);
}

#[test]
fn test_parse_timestamp_rejects_garbage() {
    assert!(matches!(
        parse_timestamp("midsummer"),
        Err(Error::InvalidTimestamp(_))
    ));
}

// ── End to end ──

#[test]
fn test_litha_2024_scenario() {
    let now = Utc.with_ymd_and_hms(2024, 6, 21, 0, 0, 0).unwrap();
    assert_eq!(current_season(&now).name(), "Summer");
    assert_eq!(sun_sign(&now).name, "Cancer");
    let nearest = nearest_sabbat(&now).unwrap();
    assert_eq!(nearest.sabbat.name, "Litha");
    assert_eq!(nearest.days_until, 0);
}
