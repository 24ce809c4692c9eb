#![warn(clippy::uninlined_format_args)]

pub mod planner;
pub mod request_file;

pub use planner::{ExactTransferPlanner, GreedyTransferPlanner};
pub use request_file::{RequestFileError, load_request, parse_request};
