mod args;
mod bootstrap;

use args::Args;
use bootstrap::{CliResult, build_planner, build_request, init_logging, invalid_input, load_env};
use clap::Parser;
use fairshare_application::{SplitError, SplitProcessor};
use fairshare_domain::{BalanceCalculator, CurrencyContext};
use fairshare_i18n as i18n;
use fairshare_presentation::ReportPresenter;
use std::process;

fn main() {
    load_env();
    let args = Args::parse();
    init_logging();

    if let Err(err) = run(&args) {
        eprintln!("Error: {err}");
        process::exit(1);
    }
}

fn run(args: &Args) -> CliResult<()> {
    let context =
        CurrencyContext::new(args.scale, args.rounding.into()).map_err(|err| err.to_string())?;
    let request = build_request(args)?;

    let planner = build_planner(args.planner, context);
    let processor = SplitProcessor::new(BalanceCalculator::new(context), planner.as_ref());

    let report = processor.process(&request).map_err(|err| match err {
        SplitError::InvalidInput(err) => invalid_input(err),
        SplitError::Planning(err) => {
            format!("{}: {err}", i18n::SETTLEMENT_CALCULATION_FAILED).into()
        }
    })?;

    let presenter = ReportPresenter::new(args.currency_symbol.as_str(), context.scale());
    let output = presenter
        .render(&report, args.format.into())
        .map_err(|err| format!("Failed to render report: {err}"))?;
    print!("{output}");
    if !output.ends_with('\n') {
        println!();
    }
    Ok(())
}
