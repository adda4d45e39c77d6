use chrono::{DateTime, TimeZone};
use serde::Serialize;
use serde_json::{json, Map, Value};

use crate::calculations::{
    current_season, moon_phase_info, nearest_of, nearest_sabbat, next_sabbat_on,
    planetary_positions, round_to, sabbat_schedule_on, season_info, solar_cycle_phase, sun_sign,
};
use crate::error::Result;
use crate::tables::DOMAIN;
use crate::types::{PlanetPosition, Sabbat, UpcomingSabbat};

pub const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DeviceInfo {
    pub identifier: &'static str,
    pub name: &'static str,
    pub manufacturer: &'static str,
    pub model: &'static str,
    pub sw_version: &'static str,
}

pub const DEVICE_INFO: DeviceInfo = DeviceInfo {
    identifier: DOMAIN,
    name: "Wheel of the Year",
    manufacturer: "Pagan Calendar",
    model: "Astronomical",
    sw_version: env!("CARGO_PKG_VERSION"),
};

/// One polled value as handed to the host: a state plus side-channel attributes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SensorState {
    pub unique_id: String,
    pub name: String,
    pub icon: &'static str,
    pub state: Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit: Option<&'static str>,
    /// Every entity belongs to the single wheel device.
    pub device: DeviceInfo,
    pub attributes: Map<String, Value>,
}

fn attributes(value: Value) -> Map<String, Value> {
    match value {
        Value::Object(map) => map,
        _ => Map::new(),
    }
}

fn slug(name: &str) -> String {
    name.to_lowercase()
}

fn sabbat_state(upcoming: &UpcomingSabbat) -> SensorState {
    let sabbat = upcoming.sabbat;
    SensorState {
        unique_id: format!("wheel_sabbat_{}", slug(sabbat.name)),
        name: sabbat.name.to_string(),
        icon: sabbat.icon,
        state: json!(upcoming.days_until),
        unit: Some("days"),
        device: DEVICE_INFO,
        attributes: attributes(json!({
            "sabbat_name": sabbat.name,
            "alt_name": sabbat.alt_name,
            "type": sabbat.kind.as_str(),
            "emoji": sabbat.emoji,
            "next_date": upcoming.next_date.format(DATE_FORMAT).to_string(),
            "color": sabbat.color,
            "dark_color": sabbat.dark_color,
            "description": sabbat.description,
            "traditions": sabbat.traditions,
            "is_today": upcoming.days_until == 0,
        })),
    }
}

pub fn sabbat_sensor<Tz: TimeZone>(
    sabbat: &'static Sabbat,
    now: &DateTime<Tz>,
) -> Result<SensorState> {
    let today = now.date_naive();
    let next_date = next_sabbat_on(sabbat, today)?;
    Ok(sabbat_state(&UpcomingSabbat {
        sabbat,
        days_until: (next_date - today).num_days(),
        next_date,
    }))
}

fn next_sabbat_state(nearest: &UpcomingSabbat) -> SensorState {
    let sabbat = nearest.sabbat;
    SensorState {
        unique_id: "wheel_next_sabbat".to_string(),
        name: "Next Sabbat".to_string(),
        icon: "mdi:calendar-star",
        state: json!(sabbat.name),
        unit: None,
        device: DEVICE_INFO,
        attributes: attributes(json!({
            "alt_name": sabbat.alt_name,
            "days_until": nearest.days_until,
            "next_date": nearest.next_date.format(DATE_FORMAT).to_string(),
            "emoji": sabbat.emoji,
            "type": sabbat.kind.as_str(),
            "color": sabbat.color,
            "dark_color": sabbat.dark_color,
            "description": sabbat.description,
            "traditions": sabbat.traditions,
        })),
    }
}

pub fn next_sabbat_sensor<Tz: TimeZone>(now: &DateTime<Tz>) -> Result<SensorState> {
    let nearest = nearest_sabbat(now)?;
    Ok(next_sabbat_state(&nearest))
}

pub fn moon_phase_sensor<Tz: TimeZone>(now: &DateTime<Tz>) -> SensorState {
    let info = moon_phase_info(now);
    let d = info.descriptor;
    SensorState {
        unique_id: "wheel_moon_phase".to_string(),
        name: "Moon Phase".to_string(),
        icon: d.icon,
        state: json!(d.name),
        unit: None,
        device: DEVICE_INFO,
        attributes: attributes(json!({
            "emoji": d.emoji,
            "illumination": info.illumination,
            "phase_number": round_to(info.phase, 4),
            "phase_index": info.index,
            "magick": d.magick,
            "description": d.description,
        })),
    }
}

pub fn sun_sign_sensor<Tz: TimeZone>(now: &DateTime<Tz>) -> SensorState {
    let sign = sun_sign(now);
    SensorState {
        unique_id: "wheel_sun_sign".to_string(),
        name: "Sun Sign".to_string(),
        icon: sign.icon,
        state: json!(sign.name),
        unit: None,
        device: DEVICE_INFO,
        attributes: attributes(json!({
            "symbol": sign.symbol,
            "element": sign.element,
            "quality": sign.quality,
            "ruler": sign.ruler,
            "description": sign.description,
            "start_date": format!("{:02}-{:02}", sign.start_month, sign.start_day),
            "end_date": format!("{:02}-{:02}", sign.end_month, sign.end_day),
        })),
    }
}

pub fn season_sensor<Tz: TimeZone>(now: &DateTime<Tz>) -> SensorState {
    let info = season_info(current_season(now));
    SensorState {
        unique_id: "wheel_season".to_string(),
        name: "Current Season".to_string(),
        icon: info.icon,
        state: json!(info.season.name()),
        unit: None,
        device: DEVICE_INFO,
        attributes: attributes(json!({
            "emoji": info.emoji,
            "months": info.months,
            "description": info.description,
            "long_description": info.long_description,
        })),
    }
}

fn planet_state(p: &PlanetPosition) -> SensorState {
    let sign_degree = round_to(p.sign_degree, 1);
    SensorState {
        unique_id: format!("wheel_planet_{}", slug(p.name)),
        name: format!("{} Position", p.name),
        icon: "mdi:earth",
        state: json!(format!("{} {:.0}°", p.sign_name, sign_degree)),
        unit: None,
        device: DEVICE_INFO,
        attributes: attributes(json!({
            "planet_symbol": p.symbol,
            "sign_name": p.sign_name,
            "sign_symbol": p.sign_symbol,
            "sign_degree": sign_degree,
            "ecliptic_longitude": round_to(p.longitude, 2),
        })),
    }
}

pub fn planet_sensors<Tz: TimeZone>(now: &DateTime<Tz>) -> Vec<SensorState> {
    planetary_positions(now).iter().map(planet_state).collect()
}

pub fn solar_cycle_sensor<Tz: TimeZone>(now: &DateTime<Tz>) -> Result<SensorState> {
    let cycle = solar_cycle_phase(now)?;
    Ok(SensorState {
        unique_id: "wheel_solar_cycle".to_string(),
        name: "Solar Cycle".to_string(),
        icon: "mdi:weather-sunny-alert",
        state: json!(cycle.stage.label()),
        unit: None,
        device: DEVICE_INFO,
        attributes: attributes(json!({
            "cycle_number": cycle.cycle_number,
            "progress": round_to(cycle.progress, 4),
            "phase": round_to(cycle.phase, 4),
            "sunspot_estimate": cycle.sunspot_estimate,
            "years_remaining": round_to(cycle.years_remaining, 1),
        })),
    })
}

fn planet_summary(p: &PlanetPosition) -> Value {
    json!({
        "name": p.name,
        "symbol": p.symbol,
        "color": p.color,
        "longitude": round_to(p.longitude, 2),
        "sign_index": p.sign_index,
        "sign_degree": round_to(p.sign_degree, 1),
        "sign_name": p.sign_name,
        "sign_symbol": p.sign_symbol,
    })
}

/// Aggregate consumed by the dashboard card.
pub fn wheel_state_sensor<Tz: TimeZone>(now: &DateTime<Tz>) -> Result<SensorState> {
    let moon = moon_phase_info(now);
    let sign = sun_sign(now);
    let season = current_season(now);
    let schedule = sabbat_schedule_on(now.date_naive())?;
    let nearest = nearest_of(&schedule);
    let cycle = solar_cycle_phase(now)?;

    let sabbats: Vec<Value> = schedule
        .iter()
        .map(|u| {
            json!({
                "name": u.sabbat.name,
                "emoji": u.sabbat.emoji,
                "days_until": u.days_until,
                "next_date": u.next_date.format(DATE_FORMAT).to_string(),
                "color": u.sabbat.color,
                "dark_color": u.sabbat.dark_color,
            })
        })
        .collect();
    let planets: Vec<Value> = planetary_positions(now).iter().map(planet_summary).collect();

    Ok(SensorState {
        unique_id: "wheel_state".to_string(),
        name: "Wheel State".to_string(),
        icon: "mdi:rotate-right",
        state: json!(nearest.map(|n| n.sabbat.name).unwrap_or("Unknown")),
        unit: None,
        device: DEVICE_INFO,
        attributes: attributes(json!({
            "moon_phase": moon.descriptor.name,
            "moon_illumination": moon.illumination,
            "moon_emoji": moon.descriptor.emoji,
            "moon_phase_number": round_to(moon.phase, 4),
            "sun_sign": sign.name,
            "sun_sign_symbol": sign.symbol,
            "season": season.name(),
            "next_sabbat": nearest.map(|n| n.sabbat.name),
            "next_sabbat_days": nearest.map(|n| n.days_until),
            "sabbats": sabbats,
            "planets": planets,
            "solar_cycle": {
                "cycle_number": cycle.cycle_number,
                "label": cycle.stage.label(),
                "progress": round_to(cycle.progress, 4),
                "sunspot_estimate": cycle.sunspot_estimate,
            },
        })),
    })
}

/// Every entity, in registration order.
pub fn all_sensors<Tz: TimeZone>(now: &DateTime<Tz>) -> Result<Vec<SensorState>> {
    let schedule = sabbat_schedule_on(now.date_naive())?;

    let mut states: Vec<SensorState> = schedule.iter().map(sabbat_state).collect();
    if let Some(nearest) = nearest_of(&schedule) {
        states.push(next_sabbat_state(&nearest));
    }
    states.push(moon_phase_sensor(now));
    states.push(sun_sign_sensor(now));
    states.push(season_sensor(now));
    states.extend(planet_sensors(now));
    states.push(solar_cycle_sensor(now)?);
    states.push(wheel_state_sensor(now)?);
    Ok(states)
}
