extern crate argparse;
extern crate paycon;
extern crate tracing;
extern crate tracing_subscriber;

use argparse::{ArgumentParser, Store, StoreTrue, Collect};
use std::{io, process};
use std::io::Write;
use paycon::{convert, infer, report, schedule, units};
use paycon::units::TimeUnit;
use tracing::debug;

#[derive(Clone)]
struct PayconParameter {
    pub values: Vec<f64>,
    pub input: String,
    pub output: String,
    pub schedule: schedule::Schedule,
    pub layout: report::Layout,
    pub verbose: bool,
}

impl Default for PayconParameter {
    fn default() -> Self {
        PayconParameter {
            values: Vec::new(),
            input: "".to_string(), //Empty means infer per value
            output: "hwmy".to_string(),
            schedule: schedule::Schedule::default(),
            layout: report::Layout::default(),
            verbose: false,
        }
    }
}

fn init_tracing(verbose: bool) -> io::Result<()> {
    let level = if verbose { "debug" } else { "warn" };

    let filter = tracing_subscriber::EnvFilter::try_from_env("PAYCON_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init()
        .map_err(|e| io::Error::new(io::ErrorKind::Other, format!("Could not initialize logging: {}", e)))
}

/// Validate the parameters and write the converted amounts to `out`.
///
/// Nothing is written unless every flag is valid.
fn run<W: Write>(param: &PayconParameter, out: &mut W) -> io::Result<()> {
    if !param.schedule.is_valid() {
        return Err(io::Error::new(io::ErrorKind::InvalidInput, format!("Weekly hours must be a positive number, got {}", param.schedule.weekly_hours)));
    }

    let input_unit = match param.input.as_str() {
        "" => None,
        unit => Some(unit.parse::<TimeUnit>()?)
    };
    let output_units = units::parse_unit_list(&param.output)?;

    debug!(?input_unit, ?output_units, weekly_hours = param.schedule.weekly_hours, "starting conversion");

    let entries : Vec<_> = param.values.iter().map(|value| {
        let quote = infer::quote(*value, input_unit);

        (quote, convert::convert(&quote, &param.schedule))
    }).collect();

    report::render(out, param.layout, &entries, &output_units)
}

fn main() -> io::Result<()> {
    let mut param = PayconParameter::default();
    let mut table = false;

    {
        let mut ap = ArgumentParser::new();

        ap.set_description("Converts given pay amounts between hourly, weekly, monthly and yearly rates.");

        ap.refer(&mut param.input).add_option(&["-i", "--input"], Store, "The time unit the given amounts are paid over: h, w, m or y. Guessed from each amount if not given.");
        ap.refer(&mut param.output).add_option(&["-o", "--output"], Store, "The time units to print, as a run of letters (default hwmy)");
        ap.refer(&mut param.schedule.weekly_hours).add_option(&["-t", "--time"], Store, "Hours worked per week (default 40)");
        ap.refer(&mut table).add_option(&["--table"], StoreTrue, "Print one table row per amount instead of a list");
        ap.refer(&mut param.verbose).add_option(&["-v", "--verbose"], StoreTrue, "Verbose mode");
        ap.refer(&mut param.values).add_argument("amount", Collect, "The pay amounts to convert").required();

        ap.parse_args_or_exit();
    }

    if table {
        param.layout = report::Layout::Table;
    }

    init_tracing(param.verbose)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if let Err(e) = run(&param, &mut out) {
        eprintln!("paycon: {}", e);
        process::exit(1);
    }

    Ok(())
}
