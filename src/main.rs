use std::ffi::OsString;
use std::io::{self, Write};
use std::process::ExitCode;
use std::time::Duration;

use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};

use city_distance::{ClientConfig, DistanceUnit, GeoClient, GeoError};

#[derive(Parser, Debug)]
#[command(name = "city-distance", version)]
#[command(about = "Find the distance between two cities.", long_about = None)]
#[command(override_usage = "city-distance [OPTIONS] CITY-A CITY-B\n       city-distance [ --help ]")]
struct Cli {
    /// Unit to display distance (km or miles)
    #[arg(short, long, default_value_t = String::from("km"))]
    unit: String,

    /// Geocoding API key. Requests are sent unauthenticated if omitted.
    #[arg(long, env = "GOOGLE_API_KEY", hide_env_values = true)]
    api_key: Option<String>,

    /// Give up if both places are not resolved within this many seconds
    #[arg(long, value_name = "SECS")]
    timeout: Option<u64>,

    /// Print the resolved address of each place to stderr
    #[arg(short, long, default_value_t = false)]
    verbose: bool,

    /// First place name
    #[arg(value_name = "CITY-A")]
    place_a: String,

    /// Second place name
    #[arg(value_name = "CITY-B")]
    place_b: String,
}

const EXIT_OK: u8 = 0;
const EXIT_FAILURE: u8 = 1;

#[tokio::main]
async fn main() -> ExitCode {
    let _ = dotenvy::dotenv();
    env_logger::init();

    let code = execute(
        std::env::args_os(),
        ClientConfig::from_env,
        &mut io::stdout(),
        &mut io::stderr(),
    )
    .await;
    ExitCode::from(code)
}

/// Runs one invocation and returns the process exit status.
///
/// Usage text and the distance go to `out`; diagnostics go to `err`. Nothing is written to
/// `out` when a lookup fails.
async fn execute<I, T, C>(
    args: I,
    load_config: C,
    out: &mut impl Write,
    err: &mut impl Write,
) -> u8
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
    C: FnOnce() -> Result<ClientConfig, GeoError>,
{
    // clap handles --help before anything else is validated.
    let cli = match Cli::try_parse_from(args) {
        Ok(cli) => cli,
        Err(parse_err) => return usage_exit(parse_err, out, err),
    };

    let unit: DistanceUnit = match cli.unit.parse() {
        Ok(unit) => unit,
        Err(unit_err) => {
            let _ = writeln!(err, "error: {}", unit_err);
            print_usage(out);
            return EXIT_FAILURE;
        }
    };

    let result = match load_config() {
        Ok(config) => run(&cli, config, unit, err).await,
        Err(config_err) => Err(config_err),
    };

    match result {
        Ok(distance) => {
            let _ = writeln!(out, "{:.6}", distance);
            EXIT_OK
        }
        Err(run_err) => {
            log::error!(
                "Failed to compute distance between '{}' and '{}': {:?}",
                cli.place_a,
                cli.place_b,
                run_err
            );
            let _ = writeln!(err, "error: {}", run_err);
            EXIT_FAILURE
        }
    }
}

async fn run(
    cli: &Cli,
    mut config: ClientConfig,
    unit: DistanceUnit,
    err: &mut impl Write,
) -> Result<f64, GeoError> {
    if cli.api_key.is_some() {
        config = config.with_api_key(cli.api_key.clone());
    }
    if let Some(secs) = cli.timeout {
        config = config.with_timeout(Some(Duration::from_secs(secs)));
    }

    let client = GeoClient::from_config(config)?;
    let (a, b) = client.resolve_pair(&cli.place_a, &cli.place_b).await?;
    if cli.verbose {
        let _ = writeln!(err, "{} -> {}", cli.place_a, a.formatted_address);
        let _ = writeln!(err, "{} -> {}", cli.place_b, b.formatted_address);
    }

    Ok(city_distance::distance(a.coordinate, b.coordinate, unit))
}

fn usage_exit(parse_err: clap::Error, out: &mut impl Write, err: &mut impl Write) -> u8 {
    match parse_err.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
            let _ = write!(out, "{}", parse_err.render());
            EXIT_OK
        }
        _ => {
            let _ = writeln!(err, "{}", parse_err.render());
            print_usage(out);
            EXIT_FAILURE
        }
    }
}

fn print_usage(out: &mut impl Write) {
    let _ = write!(out, "{}", Cli::command().render_help());
}
