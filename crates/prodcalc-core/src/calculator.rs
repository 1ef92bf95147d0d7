//! In-memory form snapshot.
//!
//! Holds the textual fields being edited and the result of the last
//! calculation request. Editing a field never touches the result; only
//! [`Calculator::calculate`] does, and it replaces the result wholesale.

use serde::{Deserialize, Serialize};

use crate::input::{Field, InputFields, ParsedInputs};
use crate::metrics::DerivedMetrics;
use crate::scenario::{ImprovementScenario, ScenarioRatios};

/// Result of one calculation request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Calculation {
    pub inputs: ParsedInputs,
    pub metrics: DerivedMetrics,
    pub scenarios: Vec<ImprovementScenario>,
}

impl Calculation {
    /// Run the engine on `fields`. `None` when total hours is not positive.
    pub fn run(fields: &InputFields, ratios: &ScenarioRatios) -> Option<Self> {
        let inputs = fields.parse();
        let metrics = DerivedMetrics::compute(&inputs)?;
        let scenarios = ratios.project(&inputs, &metrics);
        Some(Self {
            inputs,
            metrics,
            scenarios,
        })
    }
}

/// Form state: fields plus the last result.
#[derive(Debug, Clone, Default)]
pub struct Calculator {
    fields: InputFields,
    ratios: ScenarioRatios,
    result: Option<Calculation>,
}

impl Calculator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Calculator using custom scenario ratios.
    pub fn with_ratios(ratios: ScenarioRatios) -> Self {
        Self {
            ratios,
            ..Self::default()
        }
    }

    pub fn fields(&self) -> &InputFields {
        &self.fields
    }

    pub fn field(&self, field: Field) -> &str {
        self.fields.get(field)
    }

    pub fn set(&mut self, field: Field, text: impl Into<String>) {
        self.fields.set(field, text);
    }

    pub fn set_fields(&mut self, fields: InputFields) {
        self.fields = fields;
    }

    /// Recompute from the current fields and replace the stored result.
    pub fn calculate(&mut self) -> Option<&Calculation> {
        self.result = Calculation::run(&self.fields, &self.ratios);
        if self.result.is_none() {
            tracing::debug!("calculation cleared: total hours not positive");
        }
        self.result.as_ref()
    }

    /// Last result; `None` before the first request or after a guarded one.
    pub fn result(&self) -> Option<&Calculation> {
        self.result.as_ref()
    }

    pub fn reset(&mut self) {
        self.fields = InputFields::default();
        self.result = None;
    }
}
