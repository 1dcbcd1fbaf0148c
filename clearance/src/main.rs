use std::io::{self, Write};

use anyhow::{Context, Result};
use clap::{App, Arg, ArgMatches};
use tracing::{info, Level};
use tracing_subscriber::EnvFilter;

use clearance::{input, report};
use minefield::Exercise;

fn main() -> Result<()> {
    let matches = App::new("Clearance")
        .version("1.0")
        .author("Zachary Stewart <zachary@zstewart.com>")
        .about("Runs a mine clearing exercise script against a field and scores it.")
        .arg(
            Arg::with_name("field")
                .value_name("FIELD")
                .help("file holding the starting field, one row per line")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::with_name("script")
                .value_name("SCRIPT")
                .help("file holding the script, one step of commands per line")
                .required(true)
                .index(2),
        )
        .arg(
            Arg::with_name("verbose")
                .short("v")
                .long("verbose")
                .multiple(true)
                .help("log more detail to stderr; repeat for more"),
        )
        .arg(
            Arg::with_name("score_only")
                .long("score-only")
                .help("print only the final verdict"),
        )
        .get_matches();

    init_logging(&matches);

    // Both are required, so clap has already rejected a missing path.
    let field_path = matches.value_of("field").unwrap_or_default();
    let script_path = matches.value_of("script").unwrap_or_default();

    let field = input::read_field(field_path)
        .with_context(|| format!("invalid field file {}", field_path))?;
    let script = input::read_script(script_path)
        .with_context(|| format!("invalid script file {}", script_path))?;

    let mut exercise = Exercise::new(field);
    let debrief = exercise.run(&script);
    info!(verdict = %debrief.verdict, steps = debrief.steps.len(), "exercise complete");

    let stdout = io::stdout();
    let mut out = stdout.lock();
    report::write_debrief(&mut out, &debrief, matches.is_present("score_only"))
        .context("unable to write report")?;
    out.flush().context("unable to write report")?;
    Ok(())
}

/// Install a stderr subscriber. `RUST_LOG` takes precedence over the `-v` count.
fn init_logging(matches: &ArgMatches) {
    let level = match matches.occurrences_of("verbose") {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level.to_string()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
