use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Declares a string-backed enum that keeps unrecognized catalog values
/// instead of rejecting the whole file.
macro_rules! string_enum {
    ($(#[$meta:meta])* $name:ident { $($variant:ident => $text:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
        #[serde(from = "String", into = "String")]
        pub enum $name {
            $($variant,)+
            Other(String),
        }

        impl $name {
            pub fn as_str(&self) -> &str {
                match self {
                    $(Self::$variant => $text,)+
                    Self::Other(raw) => raw.as_str(),
                }
            }
        }

        impl From<String> for $name {
            fn from(raw: String) -> Self {
                match raw.as_str() {
                    $($text => Self::$variant,)+
                    _ => Self::Other(raw),
                }
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                value.as_str().to_string()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

string_enum!(BoardType {
    FishHybrid => "fish/hybrid",
    Longboard => "longboard",
    PerformanceShortboard => "performance_shortboard",
    Gun => "gun",
    TwinFin => "twin_fin",
});

string_enum!(
    /// Categorical construction trait rating.
    Rating {
        Low => "low",
        Medium => "medium",
        MediumHigh => "medium-high",
        High => "high",
        Good => "good",
        Excellent => "excellent",
    }
);

string_enum!(BreakType {
    BeachBreak => "beach_break",
    ReefBreak => "reef_break",
    PointBreak => "point_break",
    Unknown => "unknown",
});

impl Default for BreakType {
    fn default() -> Self {
        BreakType::Unknown
    }
}

string_enum!(WaveQuality {
    Forgiving => "forgiving",
    Excellent => "excellent",
    Challenging => "challenging",
});

string_enum!(SkillLevel {
    BeginnerFriendly => "beginner_friendly",
    Intermediate => "intermediate",
    Advanced => "advanced",
});

string_enum!(CrowdFactor {
    Low => "low",
    Medium => "medium",
    High => "high",
});

pub const DEFAULT_CONSTRUCTION: &str = "pu";

fn default_construction() -> String {
    DEFAULT_CONSTRUCTION.to_string()
}

#[derive(Deserialize)]
#[serde(untagged)]
enum TextOrNumber {
    Text(String),
    Number(f64),
}

impl From<TextOrNumber> for String {
    fn from(value: TextOrNumber) -> Self {
        match value {
            TextOrNumber::Text(text) => text,
            TextOrNumber::Number(number) => number.to_string(),
        }
    }
}

fn dimension<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    TextOrNumber::deserialize(deserializer).map(String::from)
}

fn optional_dimension<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<TextOrNumber>::deserialize(deserializer).map(|value| value.map(String::from))
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Board {
    pub name: String,
    #[serde(deserialize_with = "dimension")]
    pub length: String,
    #[serde(default, deserialize_with = "optional_dimension")]
    pub width: Option<String>,
    pub volume: f64,
    #[serde(rename = "type")]
    pub board_type: BoardType,
    pub ideal_wave_range: [f64; 2],
    pub ideal_period_range: [f64; 2],
    #[serde(default = "default_construction")]
    pub construction: String,
    #[serde(default)]
    pub description: String,
}

impl Board {
    pub fn width_label(&self) -> &str {
        self.width.as_deref().unwrap_or("N/A")
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Construction {
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub durability: Option<Rating>,
    #[serde(default)]
    pub flex: Option<Rating>,
    #[serde(default)]
    pub paddle_power: Option<Rating>,
    #[serde(default)]
    pub small_wave_performance: Option<Rating>,
    #[serde(default)]
    pub powerful_wave_performance: Option<Rating>,
    #[serde(default)]
    pub description: Option<String>,
}

impl Construction {
    /// Traditional PU/polyester, used when no construction catalog is available.
    pub fn builtin_pu() -> Self {
        Self {
            full_name: Some("Polyurethane/Polyester".to_string()),
            durability: Some(Rating::Medium),
            flex: Some(Rating::High),
            paddle_power: Some(Rating::Medium),
            small_wave_performance: Some(Rating::Good),
            powerful_wave_performance: Some(Rating::Excellent),
            description: Some("Traditional polyurethane foam with polyester resin.".to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpotCharacteristics {
    #[serde(default)]
    pub wave_quality: Option<WaveQuality>,
    #[serde(default)]
    pub skill_level: Option<SkillLevel>,
    #[serde(default)]
    pub crowd_factor: Option<CrowdFactor>,
    #[serde(default)]
    pub best_boards: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Spot {
    pub name: String,
    #[serde(rename = "type", default)]
    pub break_type: BreakType,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub characteristics: Option<SpotCharacteristics>,
    pub surfline_id: String,
}
