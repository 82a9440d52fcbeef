//! Input schema: the twelve model features, their ranges and the
//! categorical label tables.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of features the model consumes.
pub const FEATURE_COUNT: usize = 12;

/// How a feature is presented and encoded
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FeatureKind {
    /// Closed list of labels; the stored value is the 1-based label position
    Categorical(&'static [&'static str]),
    /// Free numeric entry checked against the range
    Continuous,
}

/// Static description of one model input
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeatureSpec {
    /// Display name, identical to the training column name
    pub name: &'static str,
    pub kind: FeatureKind,
    /// Inclusive lower bound
    pub min: f64,
    /// Inclusive upper bound
    pub max: f64,
}

impl FeatureSpec {
    /// Inclusive range check. NaN never passes.
    pub fn contains(&self, value: f64) -> bool {
        self.min <= value && value <= self.max
    }

    pub fn is_categorical(&self) -> bool {
        matches!(self.kind, FeatureKind::Categorical(_))
    }

    /// Display labels of a categorical feature, in code order
    pub fn labels(&self) -> Option<&'static [&'static str]> {
        match self.kind {
            FeatureKind::Categorical(labels) => Some(labels),
            FeatureKind::Continuous => None,
        }
    }
}

/// The model features in the exact order of the model input vector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Feature {
    Seasons,
    Month,
    Day,
    Hour,
    Holiday,
    FunctioningDay,
    Temperature,
    WindSpeed,
    Visibility,
    SolarRadiation,
    Rainfall,
    Snowfall,
}

const SCHEMA: [FeatureSpec; FEATURE_COUNT] = [
    FeatureSpec {
        name: "Seasons",
        kind: FeatureKind::Categorical(&Season::LABELS),
        min: 1.0,
        max: 4.0,
    },
    FeatureSpec {
        name: "Month",
        kind: FeatureKind::Categorical(&Month::LABELS),
        min: 1.0,
        max: 12.0,
    },
    FeatureSpec {
        name: "Day",
        kind: FeatureKind::Continuous,
        min: 1.0,
        max: 31.0,
    },
    FeatureSpec {
        name: "Hour",
        kind: FeatureKind::Continuous,
        min: 0.0,
        max: 23.0,
    },
    FeatureSpec {
        name: "Holiday",
        kind: FeatureKind::Continuous,
        min: 0.0,
        max: 1.0,
    },
    FeatureSpec {
        name: "Functioning Day",
        kind: FeatureKind::Continuous,
        min: 0.0,
        max: 1.0,
    },
    FeatureSpec {
        name: "Temperature(°C)",
        kind: FeatureKind::Continuous,
        min: -17.8,
        max: 39.4,
    },
    FeatureSpec {
        name: "Wind speed (m/s)",
        kind: FeatureKind::Continuous,
        min: 0.0,
        max: 1.686399,
    },
    FeatureSpec {
        name: "Visibility (10m)",
        kind: FeatureKind::Continuous,
        min: 1.0,
        max: 44.429720,
    },
    FeatureSpec {
        name: "Solar Radiation (MJ/m2)",
        kind: FeatureKind::Continuous,
        min: 0.0,
        max: 1.201470,
    },
    FeatureSpec {
        name: "Rainfall(mm)",
        kind: FeatureKind::Continuous,
        min: 0.0,
        max: 3.583519,
    },
    FeatureSpec {
        name: "Snowfall (cm)",
        kind: FeatureKind::Continuous,
        min: 0.0,
        max: 2.282382,
    },
];

impl Feature {
    /// All features in model input order
    pub const ALL: [Feature; FEATURE_COUNT] = [
        Feature::Seasons,
        Feature::Month,
        Feature::Day,
        Feature::Hour,
        Feature::Holiday,
        Feature::FunctioningDay,
        Feature::Temperature,
        Feature::WindSpeed,
        Feature::Visibility,
        Feature::SolarRadiation,
        Feature::Rainfall,
        Feature::Snowfall,
    ];

    /// Position in the model input vector
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn spec(self) -> &'static FeatureSpec {
        &SCHEMA[self.index()]
    }

    pub fn name(self) -> &'static str {
        self.spec().name
    }

    /// Continuous features in validation order
    pub fn continuous() -> impl Iterator<Item = Feature> {
        Self::ALL.into_iter().filter(|f| !f.spec().is_categorical())
    }
}

impl fmt::Display for Feature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Season of the year, encoded 1..=4
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Season {
    #[default]
    Spring = 1,
    Summer = 2,
    Autumn = 3,
    Winter = 4,
}

impl Season {
    pub const ALL: [Season; 4] = [Season::Spring, Season::Summer, Season::Autumn, Season::Winter];
    pub const LABELS: [&'static str; 4] = ["Spring", "Summer", "Autumn", "Winter"];

    pub fn code(self) -> u8 {
        self as u8
    }

    pub fn label(self) -> &'static str {
        Self::LABELS[self as usize - 1]
    }

    pub fn from_code(code: u8) -> Option<Self> {
        Self::ALL.get(usize::from(code).checked_sub(1)?).copied()
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.label() == label)
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl TryFrom<String> for Season {
    type Error = String;

    fn try_from(label: String) -> Result<Self, Self::Error> {
        Self::from_label(&label).ok_or_else(|| format!("unknown season label '{}'", label))
    }
}

impl From<Season> for String {
    fn from(season: Season) -> Self {
        season.label().to_string()
    }
}

/// Calendar month, encoded 1..=12
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Month {
    #[default]
    January = 1,
    February = 2,
    March = 3,
    April = 4,
    May = 5,
    June = 6,
    July = 7,
    August = 8,
    September = 9,
    October = 10,
    November = 11,
    December = 12,
}

impl Month {
    pub const ALL: [Month; 12] = [
        Month::January,
        Month::February,
        Month::March,
        Month::April,
        Month::May,
        Month::June,
        Month::July,
        Month::August,
        Month::September,
        Month::October,
        Month::November,
        Month::December,
    ];
    pub const LABELS: [&'static str; 12] = [
        "January",
        "February",
        "March",
        "April",
        "May",
        "June",
        "July",
        "August",
        "September",
        "October",
        "November",
        "December",
    ];

    pub fn code(self) -> u8 {
        self as u8
    }

    pub fn label(self) -> &'static str {
        Self::LABELS[self as usize - 1]
    }

    pub fn from_code(code: u8) -> Option<Self> {
        Self::ALL.get(usize::from(code).checked_sub(1)?).copied()
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|m| m.label() == label)
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl TryFrom<String> for Month {
    type Error = String;

    fn try_from(label: String) -> Result<Self, Self::Error> {
        Self::from_label(&label).ok_or_else(|| format!("unknown month label '{}'", label))
    }
}

impl From<Month> for String {
    fn from(month: Month) -> Self {
        month.label().to_string()
    }
}
