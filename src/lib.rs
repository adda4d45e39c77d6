pub mod calculations;
pub mod config;
pub mod error;
pub mod poller;
pub mod resources;
pub mod sensors;
pub mod tables;
pub mod types;

pub use calculations::{
    current_season, days_until_sabbat, days_until_sabbat_on, ecliptic_longitude, illumination,
    julian_centuries, julian_day, month_start, moon_phase, moon_phase_index, moon_phase_info,
    nearest_of, nearest_sabbat, nearest_sabbat_on, next_sabbat_date, next_sabbat_on,
    normalize_angle, parse_timestamp, planet_position, planetary_positions, round_to,
    sabbat_date, sabbat_schedule_on, season_for_month, season_info, sign_contains,
    solar_cycle_phase, solar_cycle_phase_for, sun_sign, sun_sign_for, zodiac_placement,
    DAYS_PER_JULIAN_CENTURY, DAYS_PER_YEAR, J2000, REFERENCE_NEW_MOON_UNIX, SYNODIC_MONTH,
};

pub use config::Config;
pub use error::{Error, Result};

pub use poller::{poll_once, run, JsonLinesSink, LatestSink, StateSink};

pub use resources::{
    card_url, register_card, register_card_or_warn, versioned_card_url, JsonFileRegistry,
    MemoryRegistry, Registration, ResourceItem, ResourceRegistry,
};

pub use sensors::{
    all_sensors, moon_phase_sensor, next_sabbat_sensor, planet_sensors, sabbat_sensor,
    season_sensor, solar_cycle_sensor, sun_sign_sensor, wheel_state_sensor, SensorState,
    DEVICE_INFO,
};

pub use tables::{DOMAIN, MOON_PHASES, PLANETS, SABBATS, SEASONS, SOLAR_CYCLE, ZODIAC};

pub use types::{
    CycleStage, MoonPhaseDescriptor, MoonPhaseInfo, Planet, PlanetPosition, Sabbat, SabbatKind,
    Season, SeasonInfo, SolarCycleEpoch, SolarCyclePhase, UpcomingSabbat, ZodiacSign,
};
