use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Season {
    Spring,
    Summer,
    Autumn,
    Winter,
}

impl Season {
    pub fn name(self) -> &'static str {
        match self {
            Season::Spring => "Spring",
            Season::Summer => "Summer",
            Season::Autumn => "Autumn",
            Season::Winter => "Winter",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SabbatKind {
    /// Solstice or equinox.
    Solar,
    #[serde(rename = "cross")]
    CrossQuarter,
}

impl SabbatKind {
    pub fn as_str(self) -> &'static str {
        match self {
            SabbatKind::Solar => "solar",
            SabbatKind::CrossQuarter => "cross",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Sabbat {
    pub name: &'static str,
    pub alt_name: &'static str,
    pub icon: &'static str,
    pub emoji: &'static str,
    pub month: u32,
    pub day: u32,
    pub kind: SabbatKind,
    pub color: &'static str,
    pub dark_color: &'static str,
    pub description: &'static str,
    pub traditions: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ZodiacSign {
    pub name: &'static str,
    pub symbol: &'static str,
    pub element: &'static str,
    pub quality: &'static str,
    pub ruler: &'static str,
    pub start_month: u32,
    pub start_day: u32,
    pub end_month: u32,
    pub end_day: u32,
    pub icon: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MoonPhaseDescriptor {
    pub name: &'static str,
    pub emoji: &'static str,
    pub icon: &'static str,
    pub magick: &'static str,
    pub description: &'static str,
}

/// Mean longitude model: `L = l0 + rate*T + l1*T^2`, T in Julian centuries.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Planet {
    pub name: &'static str,
    pub symbol: &'static str,
    pub color: &'static str,
    pub l0: f64,
    pub rate: f64,
    pub l1: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SolarCycleEpoch {
    pub cycle_number: u32,
    pub minimum_year: i32,
    pub minimum_month: u32,
    pub maximum_year: i32,
    pub maximum_month: u32,
    pub next_minimum_year: i32,
    pub next_minimum_month: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SeasonInfo {
    pub season: Season,
    pub months: [u32; 3],
    pub icon: &'static str,
    pub emoji: &'static str,
    pub description: &'static str,
    pub long_description: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MoonPhaseInfo {
    pub descriptor: &'static MoonPhaseDescriptor,
    /// Fraction of the synodic month in [0, 1); 0 = new, 0.5 = full.
    pub phase: f64,
    /// Percent illuminated, one decimal.
    pub illumination: f64,
    pub index: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PlanetPosition {
    pub name: &'static str,
    pub symbol: &'static str,
    pub color: &'static str,
    pub longitude: f64,
    pub sign_index: usize,
    pub sign_degree: f64,
    pub sign_name: &'static str,
    pub sign_symbol: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UpcomingSabbat {
    pub sabbat: &'static Sabbat,
    pub days_until: i64,
    pub next_date: chrono::NaiveDate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum CycleStage {
    EarlyAscending,
    Ascending,
    SolarMaximum,
    Descending,
    LateDescending,
}

impl CycleStage {
    pub fn from_progress(progress: f64) -> Self {
        if progress < 0.15 {
            CycleStage::EarlyAscending
        } else if progress < 0.4 {
            CycleStage::Ascending
        } else if progress < 0.6 {
            CycleStage::SolarMaximum
        } else if progress < 0.85 {
            CycleStage::Descending
        } else {
            CycleStage::LateDescending
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            CycleStage::EarlyAscending => "Early Ascending",
            CycleStage::Ascending => "Ascending",
            CycleStage::SolarMaximum => "Solar Maximum",
            CycleStage::Descending => "Descending",
            CycleStage::LateDescending => "Late Descending",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SolarCyclePhase {
    pub cycle_number: u32,
    pub progress: f64,
    pub phase: f64,
    pub sunspot_estimate: u32,
    pub stage: CycleStage,
    pub years_remaining: f64,
}
