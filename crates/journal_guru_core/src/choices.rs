//! Preset choices offered by the composer form.

use serde::{Deserialize, Serialize};

/// Sentinel selection meaning the user supplies free text instead.
pub const OTHER: &str = "Other";

/// A preset option: the value sent on the wire and the label shown to users.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Choice {
    /// Value placed in the request
    pub value: &'static str,
    /// Human-readable label
    pub label: &'static str,
}

impl Choice {
    const fn new(value: &'static str, label: &'static str) -> Self {
        Self { value, label }
    }

    /// True for the free-text sentinel.
    pub fn is_other(&self) -> bool {
        self.value == OTHER
    }
}

/// Life issues the form offers, ending with the free-text sentinel.
pub const ISSUE_CHOICES: &[Choice] = &[
    Choice::new("Being More Present", "Being More Present"),
    Choice::new("recent health diagnosis", "Recent Health Diagnosis"),
    Choice::new("new job", "New Job"),
    Choice::new(OTHER, "Other (specify below)"),
];

/// Philosophical lenses the form offers, ending with the free-text sentinel.
///
/// `budism` keeps the spelling existing clients already send.
pub const LENS_CHOICES: &[Choice] = &[
    Choice::new("christian", "Christian"),
    Choice::new("stoic", "Stoic"),
    Choice::new("budism", "Buddhism"),
    Choice::new("rastafarianism", "Rastafarianism"),
    Choice::new(OTHER, "Other (specify below)"),
];

/// Age ranges offered by the form.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    strum::EnumIter,
    strum::EnumString,
    strum::Display,
    strum::IntoStaticStr,
)]
pub enum AgeRange {
    /// 15 to 25
    #[strum(serialize = "15-25")]
    #[serde(rename = "15-25")]
    From15To25,
    /// 26 to 35
    #[strum(serialize = "26-35")]
    #[serde(rename = "26-35")]
    From26To35,
    /// 36 to 45
    #[strum(serialize = "36-45")]
    #[serde(rename = "36-45")]
    From36To45,
    /// 46 to 55
    #[strum(serialize = "46-55")]
    #[serde(rename = "46-55")]
    From46To55,
    /// Older than 55
    #[strum(serialize = "over 55")]
    #[serde(rename = "over 55")]
    Over55,
}

impl AgeRange {
    /// Wire value of this age range.
    pub fn as_str(&self) -> &'static str {
        self.into()
    }

    /// Label shown in the form.
    pub fn label(&self) -> &'static str {
        match self {
            AgeRange::Over55 => "Over 55",
            other => other.as_str(),
        }
    }
}

/// Number of prompts the user can ask for.
///
/// Carried as display text on the wire; the relay never loops over it.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    strum::EnumIter,
    strum::EnumString,
    strum::Display,
    strum::IntoStaticStr,
)]
pub enum PromptCount {
    /// A single prompt
    #[strum(serialize = "1")]
    #[serde(rename = "1")]
    One,
    /// Between three and five prompts
    #[strum(serialize = "3-5")]
    #[serde(rename = "3-5")]
    ThreeToFive,
    /// Ten prompts
    #[strum(serialize = "10")]
    #[serde(rename = "10")]
    Ten,
    /// Fifteen prompts
    #[strum(serialize = "15")]
    #[serde(rename = "15")]
    Fifteen,
}

impl PromptCount {
    /// Wire value of this count.
    pub fn as_str(&self) -> &'static str {
        self.into()
    }
}
