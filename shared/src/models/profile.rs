//! Vendor Profile Model

use crate::error::{AppError, ErrorCode};
use chrono::NaiveTime;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use validator::ValidateEmail;

/// Day of week, Monday first
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Weekday {
    pub const ALL: [Weekday; 7] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
        Weekday::Sunday,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Monday => "monday",
            Self::Tuesday => "tuesday",
            Self::Wednesday => "wednesday",
            Self::Thursday => "thursday",
            Self::Friday => "friday",
            Self::Saturday => "saturday",
            Self::Sunday => "sunday",
        }
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Weekday {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|d| d.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| AppError::validation(format!("Unknown day: {s}")))
    }
}

/// Opening hours for one day, times as `HH:MM`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayHours {
    pub open: bool,
    pub start_time: String,
    pub end_time: String,
}

impl DayHours {
    pub fn open(start: &str, end: &str) -> Self {
        Self {
            open: true,
            start_time: start.into(),
            end_time: end.into(),
        }
    }

    pub fn closed(start: &str, end: &str) -> Self {
        Self {
            open: false,
            start_time: start.into(),
            end_time: end.into(),
        }
    }

    /// Closed days are not checked; open days need valid times with start before end.
    pub fn validate(&self, day: Weekday) -> Result<(), AppError> {
        if !self.open {
            return Ok(());
        }
        let start = parse_hhmm(&self.start_time);
        let end = parse_hhmm(&self.end_time);
        match (start, end) {
            (Some(start), Some(end)) if start < end => Ok(()),
            (Some(_), Some(_)) => Err(AppError::with_message(
                ErrorCode::InvalidBusinessHours,
                format!("{day}: opening time must be before closing time"),
            )
            .with_detail("day", day.as_str())),
            _ => Err(AppError::with_message(
                ErrorCode::InvalidBusinessHours,
                format!("{day}: times must be HH:MM"),
            )
            .with_detail("day", day.as_str())),
        }
    }
}

/// Partial update of one day's hours
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DayHoursPatch {
    #[serde(default)]
    pub open: Option<bool>,
    #[serde(default)]
    pub start_time: Option<String>,
    #[serde(default)]
    pub end_time: Option<String>,
}

impl DayHoursPatch {
    pub fn apply(self, hours: &mut DayHours) {
        if let Some(open) = self.open {
            hours.open = open;
        }
        if let Some(start) = self.start_time {
            hours.start_time = start;
        }
        if let Some(end) = self.end_time {
            hours.end_time = end;
        }
    }
}

pub type BusinessHours = BTreeMap<Weekday, DayHours>;

pub fn parse_hhmm(value: &str) -> Option<NaiveTime> {
    if value.len() != 5 {
        return None;
    }
    NaiveTime::parse_from_str(value, "%H:%M").ok()
}

pub fn validate_hours(hours: &BusinessHours) -> Result<(), AppError> {
    for (day, h) in hours {
        h.validate(*day)?;
    }
    Ok(())
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BankDetails {
    pub account_number: String,
    pub ifsc_code: String,
    pub account_name: String,
    pub bank_name: String,
}

/// Vendor profile
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VendorProfile {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub kitchen_name: String,
    pub cuisine_type: String,
    pub address: String,
    pub fssai_number: String,
    pub business_hours: BusinessHours,
    pub bank_details: BankDetails,
}

impl VendorProfile {
    /// Set a field by name; `bank_details.<field>` addresses the nested record.
    pub fn set_field(&mut self, name: &str, value: String) -> Result<(), AppError> {
        let slot = match name.split_once('.') {
            None => match name {
                "name" => &mut self.name,
                "email" => &mut self.email,
                "phone" => &mut self.phone,
                "kitchen_name" => &mut self.kitchen_name,
                "cuisine_type" => &mut self.cuisine_type,
                "address" => &mut self.address,
                "fssai_number" => &mut self.fssai_number,
                _ => return Err(unknown_field(name)),
            },
            Some(("bank_details", child)) => match child {
                "account_number" => &mut self.bank_details.account_number,
                "ifsc_code" => &mut self.bank_details.ifsc_code,
                "account_name" => &mut self.bank_details.account_name,
                "bank_name" => &mut self.bank_details.bank_name,
                _ => return Err(unknown_field(name)),
            },
            Some(_) => return Err(unknown_field(name)),
        };
        *slot = value;
        Ok(())
    }

    /// Checks run before a draft replaces the live profile
    pub fn validate(&self) -> Result<(), AppError> {
        let required = [
            ("name", &self.name),
            ("email", &self.email),
            ("phone", &self.phone),
            ("kitchen_name", &self.kitchen_name),
            ("address", &self.address),
        ];
        for (field, value) in required {
            if value.trim().is_empty() {
                return Err(AppError::required_field(field));
            }
        }
        if !self.email.validate_email() {
            return Err(AppError::validation("Invalid email address").with_detail("field", "email"));
        }
        validate_hours(&self.business_hours)
    }
}

fn unknown_field(name: &str) -> AppError {
    AppError::with_message(
        ErrorCode::ProfileUnknownField,
        format!("Unknown profile field: {name}"),
    )
    .with_detail("field", name)
}

/// `PATCH /api/profile/draft` body
#[derive(Debug, Clone, Deserialize)]
pub struct EditFieldRequest {
    pub field: String,
    pub value: String,
}
