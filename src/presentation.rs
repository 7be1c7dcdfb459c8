// ABOUTME: Formatting and validation helpers consumed by view code
// ABOUTME: Dates, numbers, activity labels, e-mail/password checks and body-mass index
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fmt;
use std::sync::OnceLock;

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use regex::Regex;

use crate::errors::ClientError;
use crate::models::{ActivityType, Intensity};

const DATE_FORMAT: &str = "%d/%m/%Y";
const DATETIME_FORMAT: &str = "%d/%m/%Y %H:%M";

/// Characters accepted as "special" by [`validate_password`]
pub const PASSWORD_SPECIAL_CHARS: &str = "!@#$%^&*()_+-=[]{}|;:,.<>?";

/// Minimum password length
pub const PASSWORD_MIN_LENGTH: usize = 8;

enum Parsed {
    DateTime(NaiveDateTime),
    Date(NaiveDate),
}

fn parse_timestamp(input: &str) -> Option<Parsed> {
    if let Ok(timestamp) = DateTime::parse_from_rfc3339(input) {
        return Some(Parsed::DateTime(timestamp.naive_local()));
    }
    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M"]
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(input, format).ok())
        .map(Parsed::DateTime)
        .or_else(|| {
            NaiveDate::parse_from_str(input, "%Y-%m-%d")
                .ok()
                .map(Parsed::Date)
        })
}

/// `dd/mm/yyyy HH:MM` for an ISO-8601 timestamp
///
/// Empty input gives an empty string; unparseable input is echoed back.
#[must_use]
pub fn format_datetime(input: &str) -> String {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return String::new();
    }
    match parse_timestamp(trimmed) {
        Some(Parsed::DateTime(timestamp)) => timestamp.format(DATETIME_FORMAT).to_string(),
        Some(Parsed::Date(date)) => format!("{} 00:00", date.format(DATE_FORMAT)),
        None => input.to_owned(),
    }
}

/// `dd/mm/yyyy` for an ISO-8601 date or timestamp
///
/// Empty input gives an empty string; unparseable input is echoed back.
#[must_use]
pub fn format_date(input: &str) -> String {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return String::new();
    }
    match parse_timestamp(trimmed) {
        Some(Parsed::DateTime(timestamp)) => timestamp.format(DATE_FORMAT).to_string(),
        Some(Parsed::Date(date)) => date.format(DATE_FORMAT).to_string(),
        None => input.to_owned(),
    }
}

/// Fixed-point rendering; a missing value renders as `"0"`
#[must_use]
pub fn format_number(value: Option<f64>, decimals: usize) -> String {
    value.map_or_else(|| "0".to_owned(), |value| format!("{value:.decimals$}"))
}

/// Display label for an activity type wire value; unknown values are echoed
#[must_use]
pub fn activity_type_label(raw: &str) -> String {
    let label = match raw.parse::<ActivityType>() {
        Ok(ActivityType::Running) => "🏃 Running",
        Ok(ActivityType::Walking) => "🚶 Walking",
        Ok(ActivityType::Cycling) => "🚴 Cycling",
        Ok(ActivityType::Strength) => "💪 Strength training",
        Ok(ActivityType::Swimming) => "🏊 Swimming",
        Ok(ActivityType::MartialArts) => "🥋 Martial arts",
        Ok(ActivityType::Yoga) => "🧘 Yoga",
        Err(_) => return raw.to_owned(),
    };
    label.to_owned()
}

/// Display label for an intensity wire value; unknown values are echoed
#[must_use]
pub fn intensity_label(raw: &str) -> String {
    let label = match raw.parse::<Intensity>() {
        Ok(Intensity::Low) => "🟢 Low",
        Ok(Intensity::Moderate) => "🟡 Moderate",
        Ok(Intensity::High) => "🔴 High",
        Err(_) => return raw.to_owned(),
    };
    label.to_owned()
}

fn email_regex() -> Option<&'static Regex> {
    static EMAIL_REGEX: OnceLock<Option<Regex>> = OnceLock::new();
    EMAIL_REGEX
        .get_or_init(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").ok())
        .as_ref()
}

/// Loose `local@domain.tld` shape check
#[must_use]
pub fn validate_email(email: &str) -> bool {
    email_regex().is_some_and(|regex| regex.is_match(email))
}

/// Result of [`validate_password`]; the first unmet rule wins
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PasswordCheck {
    /// Every rule is met
    Strong,
    /// Fewer than [`PASSWORD_MIN_LENGTH`] characters
    TooShort,
    /// No uppercase letter
    MissingUppercase,
    /// No lowercase letter
    MissingLowercase,
    /// No digit
    MissingDigit,
    /// No character from [`PASSWORD_SPECIAL_CHARS`]
    MissingSpecial,
}

impl PasswordCheck {
    /// Whether the password is acceptable
    #[must_use]
    pub const fn is_valid(self) -> bool {
        matches!(self, Self::Strong)
    }

    /// Short hint for the form
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::Strong => "Strong password",
            Self::TooShort => "At least 8 characters",
            Self::MissingUppercase => "Needs an uppercase letter",
            Self::MissingLowercase => "Needs a lowercase letter",
            Self::MissingDigit => "Needs a digit",
            Self::MissingSpecial => "Needs a special character",
        }
    }
}

impl fmt::Display for PasswordCheck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Password strength rules
#[must_use]
pub fn validate_password(password: &str) -> PasswordCheck {
    if password.chars().count() < PASSWORD_MIN_LENGTH {
        PasswordCheck::TooShort
    } else if !password.chars().any(|c| c.is_ascii_uppercase()) {
        PasswordCheck::MissingUppercase
    } else if !password.chars().any(|c| c.is_ascii_lowercase()) {
        PasswordCheck::MissingLowercase
    } else if !password.chars().any(|c| c.is_ascii_digit()) {
        PasswordCheck::MissingDigit
    } else if !password.chars().any(|c| PASSWORD_SPECIAL_CHARS.contains(c)) {
        PasswordCheck::MissingSpecial
    } else {
        PasswordCheck::Strong
    }
}

/// Body-mass index rounded to one decimal
///
/// `None` when either measurement is missing, zero or negative.
#[must_use]
pub fn calculate_bmi(weight_kg: f64, height_cm: f64) -> Option<f64> {
    if !(weight_kg.is_finite() && height_cm.is_finite()) || weight_kg <= 0.0 || height_cm <= 0.0 {
        return None;
    }
    let height_m = height_cm / 100.0;
    let bmi = weight_kg / (height_m * height_m);
    Some((bmi * 10.0).round() / 10.0)
}

/// WHO body-mass index bands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BmiClass {
    /// Below 18.5
    Underweight,
    /// 18.5 to under 25
    Normal,
    /// 25 to under 30
    Overweight,
    /// 30 to under 35
    ObesityClassI,
    /// 35 to under 40
    ObesityClassII,
    /// 40 and above
    ObesityClassIII,
}

impl BmiClass {
    /// Human-readable band name
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Underweight => "Underweight",
            Self::Normal => "Normal weight",
            Self::Overweight => "Overweight",
            Self::ObesityClassI => "Obesity class I",
            Self::ObesityClassII => "Obesity class II",
            Self::ObesityClassIII => "Obesity class III",
        }
    }
}

impl fmt::Display for BmiClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Band for a body-mass index value
#[must_use]
pub fn classify_bmi(bmi: f64) -> BmiClass {
    match bmi {
        b if b < 18.5 => BmiClass::Underweight,
        b if b < 25.0 => BmiClass::Normal,
        b if b < 30.0 => BmiClass::Overweight,
        b if b < 35.0 => BmiClass::ObesityClassI,
        b if b < 40.0 => BmiClass::ObesityClassII,
        _ => BmiClass::ObesityClassIII,
    }
}

/// Text shown after a successful action
#[must_use]
pub fn success_message(message: &str) -> String {
    format!("✅ {message}")
}

/// Text shown for a failed action; the error's own message is used as-is
#[must_use]
pub fn error_message(error: &ClientError) -> String {
    format!("❌ Error: {error}")
}

/// Text for a yes/no confirmation prompt
#[must_use]
pub fn confirmation_prompt(message: &str) -> String {
    format!("⚠️ {message}")
}

/// Whether an answer to [`confirmation_prompt`] accepts it (`y`, `yes`, `s`, `sim`)
#[must_use]
pub fn is_confirmed(answer: &str) -> bool {
    matches!(
        answer.trim().to_lowercase().as_str(),
        "y" | "yes" | "s" | "sim"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_datetime_variants() {
        assert_eq!(format_datetime("2025-03-07T08:05:00"), "07/03/2025 08:05");
        assert_eq!(format_datetime("2025-03-07 18:30:12.123"), "07/03/2025 18:30");
        assert_eq!(format_datetime("2025-03-07T08:05:00+00:00"), "07/03/2025 08:05");
        assert_eq!(format_datetime(""), "");
        assert_eq!(format_datetime("yesterday"), "yesterday");
    }

    #[test]
    fn test_format_date_drops_time() {
        assert_eq!(format_date("2025-12-31T23:59:59"), "31/12/2025");
        assert_eq!(format_date("2025-12-31"), "31/12/2025");
        assert_eq!(format_date("  "), "");
    }

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(Some(12.345), 2), "12.35");
        assert_eq!(format_number(Some(3.0), 1), "3.0");
        assert_eq!(format_number(None, 2), "0");
    }

    #[test]
    fn test_labels_echo_unknown_values() {
        assert_eq!(activity_type_label("corrida"), "🏃 Running");
        assert_eq!(activity_type_label("artesmarciais"), "🥋 Martial arts");
        assert_eq!(activity_type_label("parkour"), "parkour");
        assert_eq!(intensity_label("alta"), "🔴 High");
        assert_eq!(intensity_label("extrema"), "extrema");
    }

    #[test]
    fn test_validate_email() {
        assert!(validate_email("ana@example.com"));
        assert!(!validate_email("ana@example"));
        assert!(!validate_email("ana example@x.com"));
        assert!(!validate_email("@example.com"));
    }

    #[test]
    fn test_validate_password_first_failure_wins() {
        assert_eq!(validate_password("Ab1!"), PasswordCheck::TooShort);
        assert_eq!(validate_password("abcdefg1!"), PasswordCheck::MissingUppercase);
        assert_eq!(validate_password("ABCDEFG1!"), PasswordCheck::MissingLowercase);
        assert_eq!(validate_password("Abcdefgh!"), PasswordCheck::MissingDigit);
        assert_eq!(validate_password("Abcdefg12"), PasswordCheck::MissingSpecial);
        let strong = validate_password("Abcdef1[");
        assert!(strong.is_valid());
        assert_eq!(strong.to_string(), "Strong password");
    }

    #[test]
    fn test_bmi() {
        assert_eq!(calculate_bmi(70.0, 175.0), Some(22.9));
        assert_eq!(calculate_bmi(0.0, 175.0), None);
        assert_eq!(calculate_bmi(70.0, 0.0), None);

        assert_eq!(classify_bmi(18.4), BmiClass::Underweight);
        assert_eq!(classify_bmi(18.5), BmiClass::Normal);
        assert_eq!(classify_bmi(29.9), BmiClass::Overweight);
        assert_eq!(classify_bmi(30.0), BmiClass::ObesityClassI);
        assert_eq!(classify_bmi(39.9), BmiClass::ObesityClassII);
        assert_eq!(classify_bmi(40.0), BmiClass::ObesityClassIII);
    }

    #[test]
    fn test_messages() {
        assert_eq!(success_message("Saved"), "✅ Saved");
        assert_eq!(
            error_message(&ClientError::server(400, "Email já cadastrado")),
            "❌ Error: Email já cadastrado"
        );
        assert_eq!(confirmation_prompt("Delete?"), "⚠️ Delete?");
    }

    #[test]
    fn test_is_confirmed() {
        assert!(is_confirmed("y\n"));
        assert!(is_confirmed(" YES "));
        assert!(is_confirmed("sim"));
        assert!(!is_confirmed(""));
        assert!(!is_confirmed("n"));
        assert!(!is_confirmed("yess"));
    }
}
