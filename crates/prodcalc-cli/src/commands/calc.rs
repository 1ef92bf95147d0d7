use clap::Args;
use prodcalc_core::{Calculator, Config, DisplayOverrides, Field, Layout, Report, NO_RESULT_MESSAGE};

/// Form fields are taken as raw text; anything unparsable counts as zero.
#[derive(Args, Debug, Default)]
pub struct CalcArgs {
    /// Total hours tracked
    #[arg(long, allow_hyphen_values = true)]
    pub total_hours: Option<String>,
    /// Hours spent on productive work
    #[arg(long, allow_hyphen_values = true)]
    pub productive_hours: Option<String>,
    /// Tasks planned for the period
    #[arg(long, allow_hyphen_values = true)]
    pub planned_tasks: Option<String>,
    /// Tasks completed in the period
    #[arg(long, allow_hyphen_values = true)]
    pub completed_tasks: Option<String>,
    /// Value of one productive hour
    #[arg(long, allow_hyphen_values = true)]
    pub value_per_hour: Option<String>,
    /// Estimated flat cost of one distraction
    #[arg(long, allow_hyphen_values = true)]
    pub cost_per_distraction: Option<String>,
    /// Number of distractions
    #[arg(long, allow_hyphen_values = true)]
    pub distractions: Option<String>,
    /// Average minutes needed to recover from a distraction
    #[arg(long, allow_hyphen_values = true)]
    pub recovery_minutes: Option<String>,

    /// Decimal places in the output (0-6)
    #[arg(long)]
    pub decimals: Option<u8>,
    /// Show improvement scenarios
    #[arg(long, overrides_with = "no_scenarios")]
    pub scenarios: bool,
    /// Hide improvement scenarios
    #[arg(long, overrides_with = "scenarios")]
    pub no_scenarios: bool,
    /// Report layout (detailed, compact)
    #[arg(long)]
    pub layout: Option<Layout>,
    /// Print the raw calculation as JSON
    #[arg(long)]
    pub json: bool,
}

impl CalcArgs {
    fn fields(&self) -> [(Field, Option<&str>); 8] {
        [
            (Field::TotalHours, self.total_hours.as_deref()),
            (Field::ProductiveHours, self.productive_hours.as_deref()),
            (Field::PlannedTasks, self.planned_tasks.as_deref()),
            (Field::CompletedTasks, self.completed_tasks.as_deref()),
            (Field::ValuePerHour, self.value_per_hour.as_deref()),
            (Field::CostPerDistraction, self.cost_per_distraction.as_deref()),
            (Field::Distractions, self.distractions.as_deref()),
            (Field::RecoveryMinutes, self.recovery_minutes.as_deref()),
        ]
    }

    fn overrides(&self) -> DisplayOverrides {
        let show_scenarios = if self.scenarios {
            Some(true)
        } else if self.no_scenarios {
            Some(false)
        } else {
            None
        };
        DisplayOverrides {
            decimal_places: self.decimals,
            show_scenarios,
            layout: self.layout,
        }
    }
}

pub fn run(args: CalcArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;
    let options = config.resolve_display(&args.overrides())?;

    let mut calculator = Calculator::with_ratios(config.scenarios);
    for (field, text) in args.fields() {
        if let Some(text) = text {
            calculator.set(field, text);
        }
    }

    let result = calculator.calculate();
    tracing::debug!(has_result = result.is_some(), "calculation finished");

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    match result {
        Some(calculation) => {
            let report = Report::build(calculation, &options);
            print!("{}", report.render(options.layout));
        }
        None => println!("{NO_RESULT_MESSAGE}"),
    }
    Ok(())
}
