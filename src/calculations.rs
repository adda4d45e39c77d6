use std::f64::consts::PI;

use chrono::{DateTime, Datelike, FixedOffset, NaiveDate, NaiveDateTime, TimeZone, Timelike, Utc};

use crate::error::{Error, Result};
use crate::tables::{MOON_PHASES, PLANETS, SABBATS, SEASONS, SOLAR_CYCLE, ZODIAC};
use crate::types::{
    CycleStage, MoonPhaseInfo, Planet, PlanetPosition, Sabbat, Season, SeasonInfo,
    SolarCycleEpoch, SolarCyclePhase, UpcomingSabbat, ZodiacSign,
};

pub const J2000: f64 = 2451545.0;
pub const DAYS_PER_JULIAN_CENTURY: f64 = 36525.0;
pub const SYNODIC_MONTH: f64 = 29.53058770576;
/// 2000-01-06 18:14:00 UTC, a known new moon.
pub const REFERENCE_NEW_MOON_UNIX: i64 = 947_182_440;
pub const SECONDS_PER_DAY: f64 = 86_400.0;
pub const DAYS_PER_YEAR: f64 = 365.25;

const TIMESTAMP_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S"];

pub fn normalize_angle(angle: f64) -> f64 {
    let a = angle.rem_euclid(360.0);
    if a >= 360.0 {
        0.0
    } else {
        a
    }
}

pub fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}

/// Parses RFC 3339, or a naive `YYYY-MM-DDTHH:MM:SS` timestamp taken as UTC.
pub fn parse_timestamp(input: &str) -> Result<DateTime<FixedOffset>> {
    let input = input.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(input) {
        return Ok(dt);
    }
    for fmt in TIMESTAMP_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(input, fmt) {
            return Ok(Utc.from_utc_datetime(&naive).fixed_offset());
        }
    }
    Err(Error::InvalidTimestamp(input.to_string()))
}

fn fractional_days_since_unix<Tz: TimeZone>(dt: &DateTime<Tz>, unix_secs: i64) -> f64 {
    let secs = (dt.timestamp() - unix_secs) as f64;
    let nanos = dt.timestamp_subsec_nanos() as f64 / 1e9;
    (secs + nanos) / SECONDS_PER_DAY
}

// ── Julian Day ──

pub fn julian_day<Tz: TimeZone>(dt: &DateTime<Tz>) -> f64 {
    let utc = dt.with_timezone(&Utc);
    let hour = utc.hour() as f64 + utc.minute() as f64 / 60.0 + utc.second() as f64 / 3600.0;

    let month = utc.month() as i64;
    let a = (14 - month).div_euclid(12);
    let y = utc.year() as i64 + 4800 - a;
    let m = month + 12 * a - 3;
    let jdn = utc.day() as i64
        + (153 * m + 2).div_euclid(5)
        + 365 * y
        + y.div_euclid(4)
        - y.div_euclid(100)
        + y.div_euclid(400)
        - 32045;

    jdn as f64 + (hour - 12.0) / 24.0
}

pub fn julian_centuries<Tz: TimeZone>(dt: &DateTime<Tz>) -> f64 {
    (julian_day(dt) - J2000) / DAYS_PER_JULIAN_CENTURY
}

// ── Moon ──

pub fn moon_phase<Tz: TimeZone>(dt: &DateTime<Tz>) -> f64 {
    let days_since = fractional_days_since_unix(dt, REFERENCE_NEW_MOON_UNIX);
    let lunations = days_since / SYNODIC_MONTH;
    let phase = lunations - lunations.floor();
    if phase >= 1.0 {
        0.0
    } else {
        phase
    }
}

pub fn moon_phase_index(phase: f64) -> usize {
    ((phase * 8.0 + 0.5).floor() as usize) % 8
}

/// Cosine approximation of the illuminated fraction, as a percentage.
pub fn illumination(phase: f64) -> f64 {
    (1.0 - (phase * 2.0 * PI).cos()) / 2.0 * 100.0
}

pub fn moon_phase_info<Tz: TimeZone>(dt: &DateTime<Tz>) -> MoonPhaseInfo {
    let phase = moon_phase(dt);
    let index = moon_phase_index(phase);
    MoonPhaseInfo {
        descriptor: &MOON_PHASES[index],
        phase,
        illumination: round_to(illumination(phase), 1),
        index,
    }
}

// ── Planets ──

pub fn ecliptic_longitude(planet: &Planet, centuries: f64) -> f64 {
    normalize_angle(planet.l0 + planet.rate * centuries + planet.l1 * centuries * centuries)
}

/// Splits a longitude in [0, 360) into its 30° sign sector and the degree within it.
pub fn zodiac_placement(longitude: f64) -> (usize, f64) {
    let sign_index = (longitude / 30.0).floor() as usize % 12;
    (sign_index, longitude % 30.0)
}

pub fn planet_position(planet: &Planet, centuries: f64) -> PlanetPosition {
    let longitude = ecliptic_longitude(planet, centuries);
    let (sign_index, sign_degree) = zodiac_placement(longitude);
    let sign = &ZODIAC[sign_index];
    PlanetPosition {
        name: planet.name,
        symbol: planet.symbol,
        color: planet.color,
        longitude,
        sign_index,
        sign_degree,
        sign_name: sign.name,
        sign_symbol: sign.symbol,
    }
}

pub fn planetary_positions<Tz: TimeZone>(dt: &DateTime<Tz>) -> Vec<PlanetPosition> {
    let t = julian_centuries(dt);
    PLANETS.iter().map(|p| planet_position(p, t)).collect()
}

// ── Sun sign ──

pub fn sign_contains(sign: &ZodiacSign, month: u32, day: u32) -> bool {
    (month == sign.start_month && day >= sign.start_day)
        || (month == sign.end_month && day <= sign.end_day)
}

pub fn sun_sign_for(month: u32, day: u32) -> &'static ZodiacSign {
    ZODIAC
        .iter()
        .find(|z| sign_contains(z, month, day))
        .unwrap_or(&ZODIAC[0])
}

pub fn sun_sign<Tz: TimeZone>(dt: &DateTime<Tz>) -> &'static ZodiacSign {
    let date = dt.date_naive();
    sun_sign_for(date.month(), date.day())
}

// ── Season ──

pub fn season_for_month(month: u32) -> Season {
    match month {
        3..=5 => Season::Spring,
        6..=8 => Season::Summer,
        9..=11 => Season::Autumn,
        _ => Season::Winter,
    }
}

pub fn current_season<Tz: TimeZone>(dt: &DateTime<Tz>) -> Season {
    season_for_month(dt.date_naive().month())
}

pub fn season_info(season: Season) -> &'static SeasonInfo {
    let idx = match season {
        Season::Spring => 0,
        Season::Summer => 1,
        Season::Autumn => 2,
        Season::Winter => 3,
    };
    &SEASONS[idx]
}

// ── Sabbats ──

pub fn sabbat_date(sabbat: &Sabbat, year: i32) -> Result<NaiveDate> {
    NaiveDate::from_ymd_opt(year, sabbat.month, sabbat.day).ok_or(Error::DateOutOfRange {
        year,
        month: sabbat.month,
        day: sabbat.day,
    })
}

pub fn next_sabbat_on(sabbat: &Sabbat, today: NaiveDate) -> Result<NaiveDate> {
    let this_year = sabbat_date(sabbat, today.year())?;
    if this_year < today {
        sabbat_date(sabbat, today.year() + 1)
    } else {
        Ok(this_year)
    }
}

pub fn days_until_sabbat_on(sabbat: &Sabbat, today: NaiveDate) -> Result<i64> {
    let next = next_sabbat_on(sabbat, today)?;
    Ok((next - today).num_days())
}

pub fn next_sabbat_date<Tz: TimeZone>(sabbat: &Sabbat, now: &DateTime<Tz>) -> Result<NaiveDate> {
    next_sabbat_on(sabbat, now.date_naive())
}

pub fn days_until_sabbat<Tz: TimeZone>(sabbat: &Sabbat, now: &DateTime<Tz>) -> Result<i64> {
    days_until_sabbat_on(sabbat, now.date_naive())
}

/// Every sabbat's next occurrence, in wheel order starting at Yule.
pub fn sabbat_schedule_on(today: NaiveDate) -> Result<Vec<UpcomingSabbat>> {
    SABBATS
        .iter()
        .map(|sabbat| {
            let next_date = next_sabbat_on(sabbat, today)?;
            Ok(UpcomingSabbat {
                sabbat,
                days_until: (next_date - today).num_days(),
                next_date,
            })
        })
        .collect()
}

/// Earliest upcoming entry; on a tie the one listed first wins.
pub fn nearest_of(schedule: &[UpcomingSabbat]) -> Option<UpcomingSabbat> {
    let mut nearest: Option<UpcomingSabbat> = None;
    for entry in schedule {
        if nearest.map_or(true, |best| entry.days_until < best.days_until) {
            nearest = Some(*entry);
        }
    }
    nearest
}

pub fn nearest_sabbat_on(today: NaiveDate) -> Result<UpcomingSabbat> {
    let schedule = sabbat_schedule_on(today)?;
    nearest_of(&schedule).ok_or(Error::DateOutOfRange {
        year: today.year(),
        month: today.month(),
        day: today.day(),
    })
}

pub fn nearest_sabbat<Tz: TimeZone>(now: &DateTime<Tz>) -> Result<UpcomingSabbat> {
    nearest_sabbat_on(now.date_naive())
}

// ── Solar cycle ──

pub fn month_start(year: i32, month: u32) -> Result<DateTime<Utc>> {
    NaiveDate::from_ymd_opt(year, month, 1)
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| Utc.from_utc_datetime(&naive))
        .ok_or(Error::DateOutOfRange {
            year,
            month,
            day: 1,
        })
}

pub fn solar_cycle_phase_for<Tz: TimeZone>(
    epoch: &SolarCycleEpoch,
    dt: &DateTime<Tz>,
) -> Result<SolarCyclePhase> {
    let cycle_start = month_start(epoch.minimum_year, epoch.minimum_month)?;
    let cycle_end = month_start(epoch.next_minimum_year, epoch.next_minimum_month)?;
    let start_unix = cycle_start.timestamp();

    let cycle_len = fractional_days_since_unix(&cycle_end, start_unix);
    if cycle_len <= 0.0 {
        return Err(Error::InvalidConfig(format!(
            "solar cycle {} ends before it starts",
            epoch.cycle_number
        )));
    }
    let elapsed = fractional_days_since_unix(dt, start_unix);
    let progress = (elapsed / cycle_len).clamp(0.0, 1.0);
    let phase = (progress * PI).sin();
    let sunspot_estimate = (10.0 + 190.0 * phase).round() as u32;
    let years_remaining = ((cycle_len - elapsed) / DAYS_PER_YEAR).max(0.0);

    Ok(SolarCyclePhase {
        cycle_number: epoch.cycle_number,
        progress,
        phase,
        sunspot_estimate,
        stage: CycleStage::from_progress(progress),
        years_remaining,
    })
}

pub fn solar_cycle_phase<Tz: TimeZone>(dt: &DateTime<Tz>) -> Result<SolarCyclePhase> {
    solar_cycle_phase_for(&SOLAR_CYCLE, dt)
}
