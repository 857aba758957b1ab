//! Onboarding Model

use super::profile::{BusinessHours, DayHours, DayHoursPatch, Weekday};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub const CUISINE_OPTIONS: [&str; 11] = [
    "North Indian",
    "South Indian",
    "Chinese",
    "Italian",
    "Continental",
    "Fast Food",
    "Healthy Food",
    "Desserts",
    "Beverages",
    "Bakery",
    "Other",
];

/// Wizard step
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OnboardingStep {
    #[default]
    Basic,
    Address,
    Hours,
}

impl OnboardingStep {
    pub fn number(&self) -> u8 {
        match self {
            Self::Basic => 1,
            Self::Address => 2,
            Self::Hours => 3,
        }
    }

    pub fn next(&self) -> Option<Self> {
        match self {
            Self::Basic => Some(Self::Address),
            Self::Address => Some(Self::Hours),
            Self::Hours => None,
        }
    }

    pub fn prev(&self) -> Option<Self> {
        match self {
            Self::Basic => None,
            Self::Address => Some(Self::Basic),
            Self::Hours => Some(Self::Address),
        }
    }
}

/// Mon-Sat 09:00-18:00, Sunday closed
pub fn default_onboarding_hours() -> BusinessHours {
    Weekday::ALL
        .into_iter()
        .map(|day| {
            let hours = if day == Weekday::Sunday {
                DayHours::closed("09:00", "18:00")
            } else {
                DayHours::open("09:00", "18:00")
            };
            (day, hours)
        })
        .collect()
}

/// In-progress onboarding form
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OnboardingDraft {
    pub step: OnboardingStep,
    pub kitchen_name: String,
    pub cuisine_type: String,
    pub address: String,
    pub business_hours: BusinessHours,
    pub submitted: bool,
}

impl Default for OnboardingDraft {
    fn default() -> Self {
        Self {
            step: OnboardingStep::Basic,
            kitchen_name: String::new(),
            cuisine_type: String::new(),
            address: String::new(),
            business_hours: default_onboarding_hours(),
            submitted: false,
        }
    }
}

/// `PATCH /api/onboarding` body
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OnboardingUpdate {
    #[serde(default)]
    pub kitchen_name: Option<String>,
    #[serde(default)]
    pub cuisine_type: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub business_hours: Option<BTreeMap<Weekday, DayHoursPatch>>,
}

/// Returned by a successful submit
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OnboardingSubmitted {
    pub draft: OnboardingDraft,
    /// Where the dashboard goes next
    pub next: String,
}
