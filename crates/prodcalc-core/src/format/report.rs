//! Formatted report: metric and scenario rows as display strings.

use std::fmt::Write as _;

use super::{DisplayOptions, Layout};
use crate::calculator::Calculation;
use crate::scenario::ImprovementScenario;

/// Shown instead of a report when total hours is not positive.
pub const NO_RESULT_MESSAGE: &str = "No results: total hours must be greater than zero.";

const SCENARIO_HEADERS: [&str; 6] = ["Area", "Current", "Optimized", "Gain", "Added value", "Score"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetricRow {
    pub label: &'static str,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScenarioRow {
    pub area: &'static str,
    pub current: String,
    pub optimized: String,
    pub gain: String,
    pub added_value: String,
    pub projected_score: String,
}

impl ScenarioRow {
    fn cells(&self) -> [&str; 6] {
        [
            self.area,
            self.current.as_str(),
            self.optimized.as_str(),
            self.gain.as_str(),
            self.added_value.as_str(),
            self.projected_score.as_str(),
        ]
    }
}

/// A calculation rendered with one set of [`DisplayOptions`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub metrics: Vec<MetricRow>,
    /// `None` when scenarios are toggled off.
    pub scenarios: Option<Vec<ScenarioRow>>,
}

impl Report {
    pub fn build(calculation: &Calculation, options: &DisplayOptions) -> Self {
        let m = &calculation.metrics;
        let metrics = vec![
            MetricRow {
                label: "Productivity rate",
                value: options.percent(m.productivity_rate),
            },
            MetricRow {
                label: "Task completion rate",
                value: options.percent(m.task_completion_rate),
            },
            MetricRow {
                label: "Efficiency score",
                value: format!("{} / 10", options.number(m.efficiency_score)),
            },
            MetricRow {
                label: "Time lost to distractions",
                value: format!("{} h", options.number(m.time_lost_hours)),
            },
            MetricRow {
                label: "Value lost",
                value: options.currency(m.value_lost),
            },
            MetricRow {
                label: "Task efficiency",
                value: format!("{} tasks/h", options.number(m.task_efficiency)),
            },
        ];

        let scenarios = options.show_scenarios.then(|| {
            calculation
                .scenarios
                .iter()
                .map(|s| scenario_row(s, options))
                .collect()
        });

        Self { metrics, scenarios }
    }

    /// Render as text in the given layout. Output ends with a newline.
    pub fn render(&self, layout: Layout) -> String {
        match layout {
            Layout::Detailed => self.render_detailed(),
            Layout::Compact => self.render_compact(),
        }
    }

    fn render_detailed(&self) -> String {
        let mut out = String::new();
        let label_width = self
            .metrics
            .iter()
            .map(|row| row.label.chars().count())
            .max()
            .unwrap_or(0);

        out.push_str("Productivity Metrics\n");
        for row in &self.metrics {
            let _ = writeln!(out, "  {:<label_width$}  {}", row.label, row.value);
        }

        if let Some(rows) = &self.scenarios {
            let mut widths = SCENARIO_HEADERS.map(|h| h.chars().count());
            for row in rows {
                for (width, cell) in widths.iter_mut().zip(row.cells()) {
                    *width = (*width).max(cell.chars().count());
                }
            }

            out.push_str("\nImprovement Scenarios\n");
            push_table_line(&mut out, &SCENARIO_HEADERS, &widths);
            for row in rows {
                push_table_line(&mut out, &row.cells(), &widths);
            }
        }
        out
    }

    fn render_compact(&self) -> String {
        let mut out = String::new();
        for row in &self.metrics {
            let _ = writeln!(out, "{}: {}", row.label, row.value);
        }
        if let Some(rows) = &self.scenarios {
            for row in rows {
                let _ = writeln!(
                    out,
                    "{}: {} -> {} ({}), {} added, score {}",
                    row.area,
                    row.current,
                    row.optimized,
                    row.gain,
                    row.added_value,
                    row.projected_score
                );
            }
        }
        out
    }
}

fn scenario_row(scenario: &ImprovementScenario, options: &DisplayOptions) -> ScenarioRow {
    let suffix = scenario.area.unit().suffix();
    let gain = options.number(scenario.gain);
    let gain_sign = if scenario.gain > 0.0 && gain != options.number(0.0) {
        "+"
    } else {
        ""
    };

    ScenarioRow {
        area: scenario.area.label(),
        current: format!("{}{suffix}", options.number(scenario.current)),
        optimized: format!("{}{suffix}", options.number(scenario.optimized)),
        gain: format!("{gain_sign}{gain}{suffix}"),
        added_value: options.currency(scenario.added_value),
        projected_score: options.number(scenario.projected_score),
    }
}

fn push_table_line(out: &mut String, cells: &[&str; 6], widths: &[usize; 6]) {
    out.push_str("  ");
    for (i, (cell, &width)) in cells.iter().zip(widths).enumerate() {
        if i == 0 {
            let _ = write!(out, "{cell:<width$}");
        } else {
            let _ = write!(out, "  {cell:>width$}");
        }
    }
    out.push('\n');
}
