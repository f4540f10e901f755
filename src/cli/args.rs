// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

use crate::inference::{DEFAULT_MODEL, DEFAULT_THRESHOLD};
use clap::Parser;

/// CLI arguments parser.
#[derive(Parser, Debug)]
#[command(name = "predict_attrition")]
#[command(author, version, about, long_about = None)]
#[command(after_help = r#"Feature order:
    MonthlyIncome OverTime Age TotalWorkingYears DailyRate YearsAtCompany
    MonthlyRate HourlyRate DistanceFromHome StockOptionLevel
    YearsWithCurrManager PercentSalaryHike YearsInCurrentRole
    NumCompaniesWorked

Examples:
    predict_attrition 5000 Yes 35 10 800 5 14000 60 12 1 3 15 4 2
    predict_attrition --model attrition_model.json 5000 No 35 10 800 5 14000 60 12 1 3 15 4 2
    predict_attrition --threshold 0.5 --verbose 5000 Yes 35 10 800 5 14000 60 12 1 3 15 4 2"#)]
pub struct Cli {
    /// Feature values in schema order (14 expected)
    #[arg(value_name = "FEATURE")]
    pub features: Vec<String>,

    /// Path to the model artifact
    #[arg(short, long, default_value = DEFAULT_MODEL)]
    pub model: String,

    /// Decision threshold for the positive class
    #[arg(long, default_value_t = DEFAULT_THRESHOLD)]
    pub threshold: f64,

    /// Show verbose output on standard error
    #[arg(long, default_value_t = false)]
    pub verbose: bool,
}
