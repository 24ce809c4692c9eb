#![warn(clippy::uninlined_format_args)]

pub mod report_presenter;

pub use report_presenter::{ReportFormat, ReportPresenter};
