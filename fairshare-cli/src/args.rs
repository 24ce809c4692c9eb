use clap::{Parser, ValueEnum};
use fairshare_domain::RoundingMode;
use fairshare_presentation::ReportFormat;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PlannerKind {
    /// Largest debtor pays largest creditor
    Greedy,
    /// Fewest possible transfers, greedy for large groups
    Minimal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Rounding {
    /// Halves round away from zero
    HalfUp,
    /// Halves round to the even neighbour
    HalfEven,
}

impl From<Rounding> for RoundingMode {
    fn from(rounding: Rounding) -> Self {
        match rounding {
            Rounding::HalfUp => Self::HalfUp,
            Rounding::HalfEven => Self::HalfEven,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

impl From<OutputFormat> for ReportFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Text => Self::Text,
            OutputFormat::Json => Self::Json,
        }
    }
}

/// Split shared expenses and print who pays whom.
#[derive(Debug, Parser)]
#[command(name = "fairshare", version)]
pub struct Args {
    /// Total expense to split equally (defaults to the sum paid)
    #[arg(long, conflicts_with = "items")]
    pub total: Option<String>,

    /// Amount a participant paid, repeatable
    #[arg(long = "paid", value_name = "NAME=AMOUNT")]
    pub paid: Vec<String>,

    /// Item shared by some participants, repeatable
    #[arg(long = "item", value_name = "ITEM=AMOUNT:NAME,NAME")]
    pub items: Vec<String>,

    /// JSON request file
    #[arg(long, value_name = "FILE", conflicts_with_all = ["total", "paid", "items"])]
    pub input: Option<PathBuf>,

    #[arg(long, env = "FAIRSHARE_PLANNER", value_enum, default_value_t = PlannerKind::Greedy)]
    pub planner: PlannerKind,

    /// Decimal places of the currency
    #[arg(long, env = "FAIRSHARE_SCALE", default_value_t = 2)]
    pub scale: u32,

    #[arg(long, env = "FAIRSHARE_ROUNDING", value_enum, default_value_t = Rounding::HalfUp)]
    pub rounding: Rounding,

    #[arg(long, env = "FAIRSHARE_CURRENCY_SYMBOL", default_value = "₹")]
    pub currency_symbol: String,

    #[arg(long, env = "FAIRSHARE_FORMAT", value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}
