//! Improvement scenarios.
//!
//! Three fixed-ratio "what-if" projections. Nothing is searched or optimized:
//! each row scales one input by a constant and re-applies the formulas in
//! [`crate::metrics`] to price the difference.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::input::ParsedInputs;
use crate::metrics::{self, DerivedMetrics};

/// Which input a scenario improves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScenarioArea {
    ReduceDistractions,
    IncreaseProductiveHours,
    ImproveTaskEfficiency,
}

impl ScenarioArea {
    pub fn label(self) -> &'static str {
        match self {
            ScenarioArea::ReduceDistractions => "Reduce Distractions",
            ScenarioArea::IncreaseProductiveHours => "Increase Productive Hours",
            ScenarioArea::ImproveTaskEfficiency => "Improve Task Efficiency",
        }
    }

    /// Unit of the `current` and `optimized` values.
    pub fn unit(self) -> ScenarioUnit {
        match self {
            ScenarioArea::ReduceDistractions => ScenarioUnit::Count,
            ScenarioArea::IncreaseProductiveHours => ScenarioUnit::Hours,
            ScenarioArea::ImproveTaskEfficiency => ScenarioUnit::TasksPerHour,
        }
    }
}

impl fmt::Display for ScenarioArea {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScenarioUnit {
    Count,
    Hours,
    TasksPerHour,
}

impl ScenarioUnit {
    pub fn suffix(self) -> &'static str {
        match self {
            ScenarioUnit::Count => "",
            ScenarioUnit::Hours => "h",
            ScenarioUnit::TasksPerHour => "/h",
        }
    }
}

/// One "what-if" row.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ImprovementScenario {
    pub area: ScenarioArea,
    pub current: f64,
    pub optimized: f64,
    /// `optimized - current`; negative when the improvement is a reduction.
    pub gain: f64,
    /// Currency recovered or earned under the scenario.
    pub added_value: f64,
    /// Efficiency score recomputed on the projected inputs.
    pub projected_score: f64,
}

/// Fixed ratios applied by the three scenarios.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScenarioRatios {
    /// Fraction of distractions removed.
    #[serde(default = "default_distraction_reduction")]
    pub distraction_reduction: f64,
    /// Fractional increase of productive hours.
    #[serde(default = "default_productive_hours_increase")]
    pub productive_hours_increase: f64,
    /// Fractional increase of tasks completed per productive hour.
    #[serde(default = "default_task_efficiency_increase")]
    pub task_efficiency_increase: f64,
}

fn default_distraction_reduction() -> f64 {
    0.5
}
fn default_productive_hours_increase() -> f64 {
    0.15
}
fn default_task_efficiency_increase() -> f64 {
    0.2
}

impl Default for ScenarioRatios {
    fn default() -> Self {
        Self {
            distraction_reduction: default_distraction_reduction(),
            productive_hours_increase: default_productive_hours_increase(),
            task_efficiency_increase: default_task_efficiency_increase(),
        }
    }
}

impl ScenarioRatios {
    /// Build the three scenarios, in display order.
    pub fn project(
        &self,
        inputs: &ParsedInputs,
        metrics: &DerivedMetrics,
    ) -> Vec<ImprovementScenario> {
        vec![
            self.reduce_distractions(inputs, metrics),
            self.increase_productive_hours(inputs),
            self.improve_task_efficiency(inputs, metrics),
        ]
    }

    fn reduce_distractions(
        &self,
        inputs: &ParsedInputs,
        metrics: &DerivedMetrics,
    ) -> ImprovementScenario {
        let current = inputs.distractions;
        let optimized = current * (1.0 - self.distraction_reduction);
        let projected = ParsedInputs {
            distractions: optimized,
            ..*inputs
        };
        let projected_value_lost = metrics::value_lost(
            metrics::time_lost_hours(optimized, inputs.recovery_minutes),
            inputs.value_per_hour,
            optimized,
            inputs.cost_per_distraction,
        );

        ImprovementScenario {
            area: ScenarioArea::ReduceDistractions,
            current,
            optimized,
            gain: optimized - current,
            added_value: metrics.value_lost - projected_value_lost,
            projected_score: metrics::score_for(&projected),
        }
    }

    fn increase_productive_hours(&self, inputs: &ParsedInputs) -> ImprovementScenario {
        let current = inputs.productive_hours;
        let optimized = current * (1.0 + self.productive_hours_increase);
        let gain = optimized - current;
        let projected = ParsedInputs {
            productive_hours: optimized,
            ..*inputs
        };

        ImprovementScenario {
            area: ScenarioArea::IncreaseProductiveHours,
            current,
            optimized,
            gain,
            added_value: gain * inputs.value_per_hour,
            projected_score: metrics::score_for(&projected),
        }
    }

    fn improve_task_efficiency(
        &self,
        inputs: &ParsedInputs,
        metrics: &DerivedMetrics,
    ) -> ImprovementScenario {
        let current = metrics.task_efficiency;
        let optimized = current * (1.0 + self.task_efficiency_increase);
        let gain = optimized - current;
        let extra_tasks = gain * inputs.productive_hours;
        let value_per_task = if inputs.completed_tasks > 0.0 {
            inputs.productive_hours * inputs.value_per_hour / inputs.completed_tasks
        } else {
            0.0
        };
        let projected = ParsedInputs {
            completed_tasks: inputs.completed_tasks + extra_tasks,
            ..*inputs
        };

        ImprovementScenario {
            area: ScenarioArea::ImproveTaskEfficiency,
            current,
            optimized,
            gain,
            added_value: extra_tasks * value_per_task,
            projected_score: metrics::score_for(&projected),
        }
    }
}
