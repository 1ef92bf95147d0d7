//! Integration tests for the metrics engine.
//!
//! Covers the full path from raw form text through the calculator to a
//! formatted report.

use prodcalc_core::{
    Calculation, Calculator, DerivedMetrics, DisplayOptions, Field, InputFields, Layout, Report,
    ScenarioArea, ScenarioRatios,
};

fn fields(pairs: &[(Field, &str)]) -> InputFields {
    pairs
        .iter()
        .fold(InputFields::new(), |acc, (field, text)| acc.with(*field, *text))
}

#[test]
fn missing_or_non_positive_total_hours_yields_no_result() {
    for total in ["", "0", "-3", "abc", "  ", "-0.5"] {
        let form = fields(&[
            (Field::TotalHours, total),
            (Field::ProductiveHours, "5"),
            (Field::CompletedTasks, "3"),
        ]);
        assert!(
            DerivedMetrics::from_fields(&form).is_none(),
            "total hours {total:?} produced metrics"
        );
        assert!(Calculation::run(&form, &ScenarioRatios::default()).is_none());
    }
}

#[test]
fn productivity_rate_half_day() {
    let form = fields(&[(Field::TotalHours, "10"), (Field::ProductiveHours, "5")]);
    let metrics = DerivedMetrics::from_fields(&form).unwrap();
    assert_eq!(metrics.productivity_rate, 50.0);
}

#[test]
fn completion_rate_zero_without_plan() {
    for completed in ["0", "1", "12", "999"] {
        let form = fields(&[
            (Field::TotalHours, "8"),
            (Field::PlannedTasks, "0"),
            (Field::CompletedTasks, completed),
        ]);
        let metrics = DerivedMetrics::from_fields(&form).unwrap();
        assert_eq!(metrics.task_completion_rate, 0.0);
    }
}

#[test]
fn time_lost_for_ten_five_minute_distractions() {
    let form = fields(&[
        (Field::TotalHours, "8"),
        (Field::Distractions, "10"),
        (Field::RecoveryMinutes, "5"),
    ]);
    let metrics = DerivedMetrics::from_fields(&form).unwrap();
    assert!((metrics.time_lost_hours - 50.0 / 60.0).abs() < 1e-12);
}

#[test]
fn task_efficiency_without_productive_hours() {
    let form = fields(&[
        (Field::TotalHours, "8"),
        (Field::CompletedTasks, "5"),
        (Field::ProductiveHours, "0"),
    ]);
    let metrics = DerivedMetrics::from_fields(&form).unwrap();
    assert_eq!(metrics.task_efficiency, 0.0);
    assert!(metrics.efficiency_score.is_finite());
}

#[test]
fn reduce_distractions_scenario_halves_count() {
    let mut calc = Calculator::new();
    calc.set(Field::TotalHours, "8");
    calc.set(Field::Distractions, "10");
    let result = calc.calculate().unwrap();
    let row = result
        .scenarios
        .iter()
        .find(|s| s.area == ScenarioArea::ReduceDistractions)
        .unwrap();
    assert_eq!(row.optimized, 5.0);
    assert_eq!(row.gain, -5.0);
}

#[test]
fn identical_inputs_give_identical_reports() {
    let form = fields(&[
        (Field::TotalHours, "7.5"),
        (Field::ProductiveHours, "5.25"),
        (Field::PlannedTasks, "9"),
        (Field::CompletedTasks, "7"),
        (Field::ValuePerHour, "85"),
        (Field::CostPerDistraction, "3"),
        (Field::Distractions, "12"),
        (Field::RecoveryMinutes, "8"),
    ]);
    let options = DisplayOptions::default();

    let first = Calculation::run(&form, &ScenarioRatios::default()).unwrap();
    let second = Calculation::run(&form, &ScenarioRatios::default()).unwrap();
    assert_eq!(first, second);

    let a = Report::build(&first, &options).render(Layout::Detailed);
    let b = Report::build(&second, &options).render(Layout::Detailed);
    assert_eq!(a, b);
}

#[test]
fn full_workflow_report() {
    let mut calc = Calculator::new();
    calc.set(Field::TotalHours, "40");
    calc.set(Field::ProductiveHours, "30");
    calc.set(Field::PlannedTasks, "20");
    calc.set(Field::CompletedTasks, "15");
    calc.set(Field::ValuePerHour, "75");
    calc.set(Field::CostPerDistraction, "0");
    calc.set(Field::Distractions, "30");
    calc.set(Field::RecoveryMinutes, "20");

    let result = calc.calculate().unwrap().clone();
    // 30 * 20 min = 10 h lost, priced at 75/h
    assert_eq!(result.metrics.time_lost_hours, 10.0);
    assert_eq!(result.metrics.value_lost, 750.0);

    let text = Report::build(&result, &DisplayOptions::default()).render(Layout::Compact);
    assert!(text.contains("Productivity rate: 75.00%"));
    assert!(text.contains("Task completion rate: 75.00%"));
    assert!(text.contains("Value lost: $750.00"));
    assert!(text.contains("Task efficiency: 0.50 tasks/h"));
    assert!(text.contains("Reduce Distractions: 30.00 -> 15.00 (-15.00), $375.00 added"));
}
