//! # prodcalc Core Library
//!
//! This library provides the core logic of prodcalc, a productivity
//! calculator. It follows a CLI-first layout: every operation is available
//! through the standalone `prodcalc` binary, which is a thin layer over this
//! crate.
//!
//! ## Architecture
//!
//! - **Input**: eight free-text form fields, parsed with a single
//!   parse-or-zero rule
//! - **Metrics**: pure derivation of six productivity figures, absent when
//!   total hours is not positive
//! - **Scenarios**: three fixed-ratio "what-if" projections priced with the
//!   same formulas
//! - **Format**: precision, currency convention and layout applied to a
//!   finished calculation
//! - **Storage**: TOML-based configuration
//!
//! ## Key Components
//!
//! - [`Calculator`]: form snapshot holding fields and the last result
//! - [`DerivedMetrics`]: the six computed numbers
//! - [`ScenarioRatios`]: improvement scenario projection
//! - [`Report`]: formatted output
//! - [`Config`]: application configuration management

pub mod calculator;
pub mod error;
pub mod format;
pub mod input;
pub mod metrics;
pub mod scenario;
pub mod storage;

pub use calculator::{Calculation, Calculator};
pub use error::{ConfigError, CoreError, ValidationError};
pub use format::{
    CurrencyFormat, DisplayOptions, DisplayOverrides, Layout, Report, SymbolPosition,
    NO_RESULT_MESSAGE,
};
pub use input::{parse_or_zero, Field, InputFields, ParsedInputs};
pub use metrics::DerivedMetrics;
pub use scenario::{ImprovementScenario, ScenarioArea, ScenarioRatios, ScenarioUnit};
pub use storage::Config;
