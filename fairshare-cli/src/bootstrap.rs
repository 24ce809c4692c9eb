use crate::args::{Args, PlannerKind};
use fairshare_application::{
    RawParticipant, SplitRequest, TransferPlanner,
    command_syntax::{parse_assignment, parse_item},
    parse_participants, parse_total,
};
use fairshare_domain::CurrencyContext;
use fairshare_i18n as i18n;
use fairshare_infrastructure::{
    ExactTransferPlanner, GreedyTransferPlanner, RequestFileError, load_request,
};
use std::borrow::Cow;
use tracing_subscriber::EnvFilter;

pub type CliResult<T> = Result<T, Cow<'static, str>>;

/// Loads `.env` into the process environment; a missing file is fine.
pub fn load_env() {
    match dotenvy::dotenv() {
        Err(err) if !err.not_found() => eprintln!("Warning: failed to load .env: {err}"),
        _ => {}
    }
}

/// Logs go to stderr so that report output stays clean.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

pub fn build_planner(kind: PlannerKind, context: CurrencyContext) -> Box<dyn TransferPlanner> {
    match kind {
        PlannerKind::Greedy => Box::new(GreedyTransferPlanner::new(context)),
        PlannerKind::Minimal => Box::new(ExactTransferPlanner::new(context)),
    }
}

pub fn build_request(args: &Args) -> CliResult<SplitRequest> {
    if let Some(path) = &args.input {
        return load_request(path).map_err(|err| match err {
            RequestFileError::InvalidInput(err) => invalid_input(err),
            other => other.to_string().into(),
        });
    }

    if args.paid.is_empty() {
        return Err(i18n::MISSING_PARTICIPANTS.into());
    }

    let raw = args
        .paid
        .iter()
        .map(|entry| parse_assignment(entry))
        .collect::<Result<Vec<RawParticipant>, _>>()
        .map_err(|err| err.to_string())?;
    let participants = parse_participants(&raw).map_err(invalid_input)?;

    if !args.items.is_empty() {
        let items = args
            .items
            .iter()
            .map(|entry| parse_item(entry))
            .collect::<Result<Vec<_>, _>>()
            .map_err(|err| err.to_string())?;
        return Ok(SplitRequest::itemized(participants, items));
    }

    let total = args
        .total
        .as_deref()
        .map(parse_total)
        .transpose()
        .map_err(invalid_input)?;
    Ok(SplitRequest::equal(participants, total))
}

pub fn invalid_input(err: impl std::fmt::Display) -> Cow<'static, str> {
    format!("{}: {err}", i18n::INVALID_INPUT).into()
}
