//! Metrics engine.
//!
//! Turns the parsed form into six derived numbers. Every division is guarded
//! by an explicit check of its denominator; a zero denominator yields 0.

use serde::{Deserialize, Serialize};

use crate::input::{InputFields, ParsedInputs};

/// Weight of the productivity rate in the efficiency score.
pub const PRODUCTIVITY_WEIGHT: f64 = 0.4;
/// Weight of the task completion rate in the efficiency score.
pub const COMPLETION_WEIGHT: f64 = 0.4;
/// Weight of the distraction-management score in the efficiency score.
pub const DISTRACTION_WEIGHT: f64 = 0.2;
/// Upper bound of the efficiency score and of each of its components.
pub const MAX_SCORE: f64 = 10.0;

/// Numbers derived from one set of inputs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DerivedMetrics {
    /// Productive hours over total hours, in percent.
    pub productivity_rate: f64,
    /// Completed tasks over planned tasks, in percent.
    pub task_completion_rate: f64,
    /// Weighted composite, 0 to 10.
    pub efficiency_score: f64,
    /// Hours spent recovering from distractions.
    pub time_lost_hours: f64,
    /// Currency lost to distractions.
    pub value_lost: f64,
    /// Completed tasks per productive hour.
    pub task_efficiency: f64,
}

impl DerivedMetrics {
    /// Compute metrics from raw text fields.
    ///
    /// Returns `None` when total hours is not positive.
    pub fn from_fields(fields: &InputFields) -> Option<Self> {
        Self::compute(&fields.parse())
    }

    /// Compute metrics from already parsed inputs.
    ///
    /// Returns `None` when total hours is not positive.
    pub fn compute(inputs: &ParsedInputs) -> Option<Self> {
        if inputs.total_hours <= 0.0 {
            tracing::debug!(
                total_hours = inputs.total_hours,
                "total hours not positive, no metrics"
            );
            return None;
        }

        let productivity_rate = productivity_rate(inputs.productive_hours, inputs.total_hours);
        let task_completion_rate =
            task_completion_rate(inputs.completed_tasks, inputs.planned_tasks);
        let time_lost_hours = time_lost_hours(inputs.distractions, inputs.recovery_minutes);
        let value_lost = value_lost(
            time_lost_hours,
            inputs.value_per_hour,
            inputs.distractions,
            inputs.cost_per_distraction,
        );
        let task_efficiency = task_efficiency(inputs.completed_tasks, inputs.productive_hours);
        let efficiency_score = efficiency_score(
            productivity_rate,
            task_completion_rate,
            distraction_score(time_lost_hours, inputs.productive_hours),
        );

        let metrics = Self {
            productivity_rate,
            task_completion_rate,
            efficiency_score,
            time_lost_hours,
            value_lost,
            task_efficiency,
        };
        tracing::debug!(?metrics, "computed metrics");
        Some(metrics)
    }
}

pub fn productivity_rate(productive_hours: f64, total_hours: f64) -> f64 {
    if total_hours > 0.0 {
        productive_hours / total_hours * 100.0
    } else {
        0.0
    }
}

pub fn task_completion_rate(completed_tasks: f64, planned_tasks: f64) -> f64 {
    if planned_tasks > 0.0 {
        completed_tasks / planned_tasks * 100.0
    } else {
        0.0
    }
}

pub fn time_lost_hours(distractions: f64, recovery_minutes: f64) -> f64 {
    distractions * recovery_minutes / 60.0
}

/// Recovery time priced at the hourly value, plus the flat per-distraction cost.
pub fn value_lost(
    time_lost_hours: f64,
    value_per_hour: f64,
    distractions: f64,
    cost_per_distraction: f64,
) -> f64 {
    time_lost_hours * value_per_hour + distractions * cost_per_distraction
}

pub fn task_efficiency(completed_tasks: f64, productive_hours: f64) -> f64 {
    if productive_hours > 0.0 {
        completed_tasks / productive_hours
    } else {
        0.0
    }
}

/// Share of productive time not eaten by recovery, scaled to 0..=10.
pub fn distraction_score(time_lost_hours: f64, productive_hours: f64) -> f64 {
    if productive_hours > 0.0 {
        (1.0 - time_lost_hours / productive_hours).clamp(0.0, 1.0) * MAX_SCORE
    } else {
        0.0
    }
}

/// Weighted composite of the two rates (in percent) and the distraction score.
///
/// Each rate contributes at most 10 points before weighting, so overshooting
/// input (more productive hours than total hours) cannot push the score past 10.
pub fn efficiency_score(
    productivity_rate: f64,
    task_completion_rate: f64,
    distraction_score: f64,
) -> f64 {
    let productivity = (productivity_rate / 10.0).clamp(0.0, MAX_SCORE);
    let completion = (task_completion_rate / 10.0).clamp(0.0, MAX_SCORE);
    let distraction = distraction_score.clamp(0.0, MAX_SCORE);

    (PRODUCTIVITY_WEIGHT * productivity
        + COMPLETION_WEIGHT * completion
        + DISTRACTION_WEIGHT * distraction)
        .clamp(0.0, MAX_SCORE)
}

/// Efficiency score of `inputs` alone, without logging; 0 when total hours
/// is not positive. Used to price what-if projections.
pub fn score_for(inputs: &ParsedInputs) -> f64 {
    if inputs.total_hours <= 0.0 {
        return 0.0;
    }
    efficiency_score(
        productivity_rate(inputs.productive_hours, inputs.total_hours),
        task_completion_rate(inputs.completed_tasks, inputs.planned_tasks),
        distraction_score(
            time_lost_hours(inputs.distractions, inputs.recovery_minutes),
            inputs.productive_hours,
        ),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::Field;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    fn sample() -> ParsedInputs {
        ParsedInputs {
            total_hours: 8.0,
            productive_hours: 6.0,
            planned_tasks: 10.0,
            completed_tasks: 8.0,
            value_per_hour: 60.0,
            cost_per_distraction: 5.0,
            distractions: 6.0,
            recovery_minutes: 10.0,
        }
    }

    #[test]
    fn no_metrics_without_positive_total_hours() {
        for total in [0.0, -1.0, -0.0001] {
            let inputs = ParsedInputs {
                total_hours: total,
                ..sample()
            };
            assert!(DerivedMetrics::compute(&inputs).is_none());
        }
        assert!(DerivedMetrics::from_fields(&InputFields::new()).is_none());
    }

    #[test]
    fn productivity_rate_is_percentage() {
        assert!(close(productivity_rate(5.0, 10.0), 50.0));
        assert_eq!(productivity_rate(5.0, 0.0), 0.0);
    }

    #[test]
    fn task_completion_rate_zero_without_planned_tasks() {
        assert_eq!(task_completion_rate(5.0, 0.0), 0.0);
        assert_eq!(task_completion_rate(1000.0, 0.0), 0.0);
        assert!(close(task_completion_rate(3.0, 4.0), 75.0));
    }

    #[test]
    fn time_lost_converts_minutes_to_hours() {
        assert!(close(time_lost_hours(10.0, 5.0), 50.0 / 60.0));
    }

    #[test]
    fn task_efficiency_guards_zero_hours() {
        assert_eq!(task_efficiency(5.0, 0.0), 0.0);
        assert!(close(task_efficiency(5.0, 2.0), 2.5));
    }

    #[test]
    fn value_lost_includes_flat_cost() {
        // 1 hour lost at 60/h plus 6 distractions at 5 each
        assert!(close(value_lost(1.0, 60.0, 6.0, 5.0), 90.0));
    }

    #[test]
    fn distraction_score_bounds() {
        assert_eq!(distraction_score(0.0, 0.0), 0.0);
        assert!(close(distraction_score(0.0, 4.0), 10.0));
        assert!(close(distraction_score(1.0, 4.0), 7.5));
        assert_eq!(distraction_score(10.0, 4.0), 0.0);
    }

    #[test]
    fn computes_full_sample() {
        let m = DerivedMetrics::compute(&sample()).unwrap();
        assert!(close(m.productivity_rate, 75.0));
        assert!(close(m.task_completion_rate, 80.0));
        assert!(close(m.time_lost_hours, 1.0));
        assert!(close(m.value_lost, 90.0));
        assert!(close(m.task_efficiency, 8.0 / 6.0));
        // 0.4*7.5 + 0.4*8 + 0.2*(1 - 1/6)*10
        let expected = 3.0 + 3.2 + 0.2 * (5.0 / 6.0) * 10.0;
        assert!(close(m.efficiency_score, expected));
    }

    #[test]
    fn efficiency_score_is_capped() {
        let inputs = ParsedInputs {
            total_hours: 1.0,
            productive_hours: 50.0,
            planned_tasks: 1.0,
            completed_tasks: 40.0,
            ..ParsedInputs::default()
        };
        let m = DerivedMetrics::compute(&inputs).unwrap();
        assert!(close(m.efficiency_score, MAX_SCORE));
    }

    #[test]
    fn negative_inputs_keep_score_in_range() {
        let inputs = ParsedInputs {
            total_hours: 8.0,
            productive_hours: -4.0,
            planned_tasks: 5.0,
            completed_tasks: -5.0,
            ..ParsedInputs::default()
        };
        let m = DerivedMetrics::compute(&inputs).unwrap();
        assert_eq!(m.efficiency_score, 0.0);
        assert_eq!(m.task_efficiency, 0.0);
    }

    #[test]
    fn score_for_matches_computed_score() {
        let inputs = sample();
        let metrics = DerivedMetrics::compute(&inputs).unwrap();
        assert_eq!(score_for(&inputs), metrics.efficiency_score);

        let idle = ParsedInputs {
            total_hours: 0.0,
            ..inputs
        };
        assert_eq!(score_for(&idle), 0.0);
    }

    #[test]
    fn from_fields_parses_text() {
        let fields = InputFields::new()
            .with(Field::TotalHours, "10")
            .with(Field::ProductiveHours, "5 hrs")
            .with(Field::CompletedTasks, "five");
        let m = DerivedMetrics::from_fields(&fields).unwrap();
        assert!(close(m.productivity_rate, 50.0));
        assert_eq!(m.task_completion_rate, 0.0);
        assert_eq!(m.task_efficiency, 0.0);
    }
}
