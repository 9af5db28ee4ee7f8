use std::thread;
use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use marsclock::constants::{Degree, GALE_CRATER_LONGITUDE_WEST};
use marsclock::martian_time::MartianTime;
use marsclock::params::MarsClockParams;
use marsclock::time::EarthInstant;
use serde::Serialize;
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "marsclock")]
#[command(about = "Show Mars time (MSD, MCT, LMST) for an Earth instant")]
struct Cli {
    /// Earth timestamp, e.g. "2000-01-06T00:00:00 UTC" (defaults to now)
    #[arg(long, conflicts_with = "unix_ms")]
    at: Option<String>,

    /// Earth instant as milliseconds since the Unix epoch
    #[arg(long, allow_negative_numbers = true)]
    unix_ms: Option<f64>,

    /// Longitude west of the Mars prime meridian, degrees (default: Gale crater)
    #[arg(long, default_value_t = GALE_CRATER_LONGITUDE_WEST, allow_negative_numbers = true)]
    longitude: Degree,

    /// TAI - UTC in seconds
    #[arg(long)]
    leap_seconds: Option<f64>,

    /// Reduce angles with the historical truncation and leave local times unwrapped
    #[arg(long)]
    legacy: bool,

    /// Print a JSON document instead of text
    #[arg(long)]
    json: bool,

    /// Refresh every N milliseconds until interrupted (only with the current time)
    #[arg(long, conflicts_with_all = ["at", "unix_ms"])]
    watch: Option<u64>,
}

#[derive(Serialize)]
struct Report<'a> {
    #[serde(flatten)]
    mars: &'a MartianTime,
    sol_date: String,
    coordinated_clock: String,
    longitude_west: Degree,
    local_mean_solar_time: f64,
    local_mean_clock: String,
    local_true_clock: String,
}

fn build_params(cli: &Cli) -> anyhow::Result<MarsClockParams> {
    let base = if cli.legacy {
        MarsClockParams::legacy()
    } else {
        MarsClockParams::default()
    };

    let params = MarsClockParams::builder()
        .leap_seconds(cli.leap_seconds.unwrap_or(base.leap_seconds))
        .angle_reduction(base.angle_reduction)
        .wrap_local_time(base.wrap_local_time)
        .build()?;

    Ok(params)
}

fn resolve_instant(cli: &Cli) -> anyhow::Result<EarthInstant> {
    let instant = match (&cli.at, cli.unix_ms) {
        (Some(at), _) => at
            .parse::<EarthInstant>()
            .with_context(|| format!("invalid --at value {at:?}"))?,
        (None, Some(ms)) => EarthInstant::from_unix_millis(ms)?,
        (None, None) => EarthInstant::now()?,
    };
    Ok(instant)
}

fn print_report(mars: &MartianTime, longitude: Degree, json: bool) -> anyhow::Result<()> {
    let sol_date = mars.sol_date()?;
    let mct = mars.coordinated_clock()?;
    let lmst = mars.local_mean_solar_time(longitude)?;
    let lmst_clock = mars.local_mean_clock(longitude)?;
    let ltst_clock = mars.local_true_clock(longitude)?;

    if json {
        let report = Report {
            mars,
            sol_date: sol_date.to_string(),
            coordinated_clock: mct.to_string(),
            longitude_west: longitude,
            local_mean_solar_time: lmst,
            local_mean_clock: lmst_clock.to_string(),
            local_true_clock: ltst_clock.to_string(),
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("Mars Sol Date            {sol_date}");
        println!("Mars Coordinated Time    {mct}");
        println!("Local Mean Solar Time    {lmst_clock}  ({longitude}° W)");
        println!("Local True Solar Time    {ltst_clock}");
        println!("Solar longitude (Ls)     {:.4}°", mars.solar_longitude);
        println!("Heliocentric distance    {:.6} AU", mars.heliocentric_distance);
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let params = build_params(&cli)?;
    debug!(?params, "mars clock parameters");

    match cli.watch {
        Some(interval_ms) => loop {
            let mars = MartianTime::now(&params)?;
            print_report(&mars, cli.longitude, cli.json)?;
            println!();
            thread::sleep(Duration::from_millis(interval_ms.max(1)));
        },
        None => {
            let instant = resolve_instant(&cli)?;
            debug!(%instant, "earth instant");
            let mars = MartianTime::compute(instant, &params);
            print_report(&mars, cli.longitude, cli.json)
        }
    }
}
