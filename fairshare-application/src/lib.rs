#![warn(clippy::uninlined_format_args)]

pub mod command_syntax;
pub mod error;
pub mod input;
pub mod model;
pub mod ports;
pub mod split_processor;

pub use error::{PlanningError, SplitError, SyntaxError};
pub use input::{RawParticipant, parse_participants, parse_total};
pub use model::{PersonSummary, SettlementReport, SplitMode, SplitRequest};
pub use ports::TransferPlanner;
pub use split_processor::SplitProcessor;
