//! Raw form input and its numeric view.
//!
//! Every field is kept as text so that a half-typed value (`""`, `"-"`,
//! `"12."`) is representable. Text becomes a number only through
//! [`parse_or_zero`], applied uniformly by [`InputFields::parse`].

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// One of the eight input fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Field {
    TotalHours,
    ProductiveHours,
    PlannedTasks,
    CompletedTasks,
    ValuePerHour,
    CostPerDistraction,
    Distractions,
    RecoveryMinutes,
}

impl Field {
    /// All fields in form order.
    pub const ALL: [Field; 8] = [
        Field::TotalHours,
        Field::ProductiveHours,
        Field::PlannedTasks,
        Field::CompletedTasks,
        Field::ValuePerHour,
        Field::CostPerDistraction,
        Field::Distractions,
        Field::RecoveryMinutes,
    ];

    /// Stable kebab-case key, also used for CLI flags.
    pub fn key(self) -> &'static str {
        match self {
            Field::TotalHours => "total-hours",
            Field::ProductiveHours => "productive-hours",
            Field::PlannedTasks => "planned-tasks",
            Field::CompletedTasks => "completed-tasks",
            Field::ValuePerHour => "value-per-hour",
            Field::CostPerDistraction => "cost-per-distraction",
            Field::Distractions => "distractions",
            Field::RecoveryMinutes => "recovery-minutes",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Field::TotalHours => "Total hours",
            Field::ProductiveHours => "Productive hours",
            Field::PlannedTasks => "Planned tasks",
            Field::CompletedTasks => "Completed tasks",
            Field::ValuePerHour => "Value per hour",
            Field::CostPerDistraction => "Estimated cost per distraction",
            Field::Distractions => "Distractions",
            Field::RecoveryMinutes => "Average recovery time",
        }
    }

    pub fn unit(self) -> &'static str {
        match self {
            Field::TotalHours | Field::ProductiveHours => "hours",
            Field::PlannedTasks | Field::CompletedTasks => "tasks",
            Field::ValuePerHour => "currency/hour",
            Field::CostPerDistraction => "currency",
            Field::Distractions => "count",
            Field::RecoveryMinutes => "minutes",
        }
    }
}

impl FromStr for Field {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('_', "-");
        Field::ALL
            .into_iter()
            .find(|field| field.key() == normalized)
            .ok_or_else(|| format!("unknown field: {s}"))
    }
}

/// The eight textual form fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputFields {
    #[serde(default)]
    pub total_hours: String,
    #[serde(default)]
    pub productive_hours: String,
    #[serde(default)]
    pub planned_tasks: String,
    #[serde(default)]
    pub completed_tasks: String,
    #[serde(default)]
    pub value_per_hour: String,
    #[serde(default)]
    pub cost_per_distraction: String,
    #[serde(default)]
    pub distractions: String,
    #[serde(default)]
    pub recovery_minutes: String,
}

impl InputFields {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::TotalHours => &self.total_hours,
            Field::ProductiveHours => &self.productive_hours,
            Field::PlannedTasks => &self.planned_tasks,
            Field::CompletedTasks => &self.completed_tasks,
            Field::ValuePerHour => &self.value_per_hour,
            Field::CostPerDistraction => &self.cost_per_distraction,
            Field::Distractions => &self.distractions,
            Field::RecoveryMinutes => &self.recovery_minutes,
        }
    }

    pub fn set(&mut self, field: Field, text: impl Into<String>) {
        let slot = match field {
            Field::TotalHours => &mut self.total_hours,
            Field::ProductiveHours => &mut self.productive_hours,
            Field::PlannedTasks => &mut self.planned_tasks,
            Field::CompletedTasks => &mut self.completed_tasks,
            Field::ValuePerHour => &mut self.value_per_hour,
            Field::CostPerDistraction => &mut self.cost_per_distraction,
            Field::Distractions => &mut self.distractions,
            Field::RecoveryMinutes => &mut self.recovery_minutes,
        };
        *slot = text.into();
    }

    /// Builder-style [`set`](Self::set).
    pub fn with(mut self, field: Field, text: impl Into<String>) -> Self {
        self.set(field, text);
        self
    }

    /// Parse every field with [`parse_or_zero`].
    pub fn parse(&self) -> ParsedInputs {
        ParsedInputs {
            total_hours: parse_or_zero(&self.total_hours),
            productive_hours: parse_or_zero(&self.productive_hours),
            planned_tasks: parse_or_zero(&self.planned_tasks),
            completed_tasks: parse_or_zero(&self.completed_tasks),
            value_per_hour: parse_or_zero(&self.value_per_hour),
            cost_per_distraction: parse_or_zero(&self.cost_per_distraction),
            distractions: parse_or_zero(&self.distractions),
            recovery_minutes: parse_or_zero(&self.recovery_minutes),
        }
    }
}

/// Numeric view of [`InputFields`]. Every value is finite.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ParsedInputs {
    pub total_hours: f64,
    pub productive_hours: f64,
    pub planned_tasks: f64,
    pub completed_tasks: f64,
    pub value_per_hour: f64,
    pub cost_per_distraction: f64,
    pub distractions: f64,
    pub recovery_minutes: f64,
}

/// Parse the leading decimal literal of `text`, or return 0.
///
/// Surrounding whitespace is ignored and anything after the literal is
/// dropped, so `"7.5 h"` reads as 7.5. Text with no leading number, and
/// literals that do not yield a finite value, read as 0.
pub fn parse_or_zero(text: &str) -> f64 {
    let trimmed = text.trim();
    let literal = &trimmed[..leading_literal_len(trimmed)];
    match literal.parse::<f64>() {
        Ok(value) if value.is_finite() => value,
        _ => 0.0,
    }
}

/// Byte length of the longest `[+-]digits[.digits][(e|E)[+-]digits]` prefix.
fn leading_literal_len(s: &str) -> usize {
    let bytes = s.as_bytes();
    let mut i = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        i += 1;
    }

    let int_start = i;
    while i < bytes.len() && bytes[i].is_ascii_digit() {
        i += 1;
    }
    let mut digits = i - int_start;

    if i < bytes.len() && bytes[i] == b'.' {
        let frac_start = i + 1;
        let mut j = frac_start;
        while j < bytes.len() && bytes[j].is_ascii_digit() {
            j += 1;
        }
        if digits > 0 || j > frac_start {
            digits += j - frac_start;
            i = j;
        }
    }

    if digits == 0 {
        return 0;
    }

    // An exponent only counts when it has at least one digit.
    if i < bytes.len() && matches!(bytes[i], b'e' | b'E') {
        let mut j = i + 1;
        if j < bytes.len() && matches!(bytes[j], b'+' | b'-') {
            j += 1;
        }
        let exp_start = j;
        while j < bytes.len() && bytes[j].is_ascii_digit() {
            j += 1;
        }
        if j > exp_start {
            i = j;
        }
    }

    i
}
