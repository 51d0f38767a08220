//! Course condition dashboard.

use crate::catalog::ConditionReport;
use crate::weather::WeatherReading;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CourseCondition {
    Firm,
    Standard,
    Wet,
    Closed,
}

impl CourseCondition {
    pub const ALL: [CourseCondition; 4] = [
        CourseCondition::Firm,
        CourseCondition::Standard,
        CourseCondition::Wet,
        CourseCondition::Closed,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CourseCondition::Firm => "firm",
            CourseCondition::Standard => "standard",
            CourseCondition::Wet => "wet",
            CourseCondition::Closed => "closed",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CourseCondition::Firm => "Firm",
            CourseCondition::Standard => "Standard",
            CourseCondition::Wet => "Wet / Soft",
            CourseCondition::Closed => "Closed",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            CourseCondition::Firm => "Ideal links conditions. Ball runs well, greens fast.",
            CourseCondition::Standard => "Good playing conditions. Normal ball flight expected.",
            CourseCondition::Wet => {
                "Soft underfoot. Less run on fairways. Check for winter rules."
            }
            CourseCondition::Closed => {
                "Course not available for play. Contact club for details."
            }
        }
    }

    pub fn is_playable(&self) -> bool {
        !matches!(self, CourseCondition::Closed)
    }
}

impl fmt::Display for CourseCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CourseCondition {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown course condition '{}'", s))
    }
}

/// How the links at Birkdale play for a given prevailing wind.
pub const WIND_GUIDE: &[(&str, &str)] = &[
    ("SW", "Natural links wind. Front nine downwind, back nine into. Typical Royal Birkdale experience."),
    ("W", "Strong off the Irish Sea. Holes 12-15 particularly exposed. Scoring deteriorates."),
    ("NW", "Cross-wind on many holes. The dune corridors funnel unpredictably. Difficult to control flight."),
    ("N", "Unusual direction. Course changes character significantly. Par is a good score."),
    ("E", "Off the land. Course plays differently, more accommodating on the exposed holes."),
    ("S", "Relatively sheltered. Scoring typically better than SW/W. Good for scoring rounds."),
];

/// Guide entry for a 16-point compass direction, if the guide covers it.
pub fn wind_effect(direction: &str) -> Option<&'static str> {
    WIND_GUIDE
        .iter()
        .find(|(d, _)| d.eq_ignore_ascii_case(direction))
        .map(|(_, effect)| *effect)
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConditionRow {
    pub slug: String,
    pub name: String,
    pub condition: CourseCondition,
    pub label: &'static str,
    pub description: &'static str,
    pub playable: bool,
    pub notes: String,
}

impl From<&ConditionReport> for ConditionRow {
    fn from(report: &ConditionReport) -> Self {
        Self {
            slug: report.slug.clone(),
            name: report.name.clone(),
            condition: report.condition,
            label: report.condition.label(),
            description: report.condition.description(),
            playable: report.condition.is_playable(),
            notes: report.notes.clone(),
        }
    }
}

/// Wind fields are `None` when no live reading is available.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConditionDashboard {
    pub courses: Vec<ConditionRow>,
    pub wind_speed_mph: Option<u32>,
    pub wind_direction: Option<&'static str>,
    pub wind_effect: Option<&'static str>,
}

impl ConditionDashboard {
    /// Rows with the given condition; `None` keeps every row.
    pub fn filtered(&self, condition: Option<CourseCondition>) -> Vec<&ConditionRow> {
        self.courses
            .iter()
            .filter(|row| condition.map_or(true, |c| row.condition == c))
            .collect()
    }

    pub fn playable_count(&self) -> usize {
        self.courses.iter().filter(|row| row.playable).count()
    }
}

pub fn build_dashboard(
    reports: &[ConditionReport],
    weather: Option<WeatherReading>,
) -> ConditionDashboard {
    let wind_direction = weather.map(|w| w.wind_direction);

    ConditionDashboard {
        courses: reports.iter().map(ConditionRow::from).collect(),
        wind_speed_mph: weather.map(|w| w.wind_speed_mph),
        wind_direction,
        wind_effect: wind_direction.and_then(wind_effect),
    }
}
