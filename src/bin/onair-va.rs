use anyhow::Result;
use clap::{Args, Parser, Subcommand, ValueEnum};
use onair_va::{Client, Flight, Notification, Settings};
use onair_va::{models::CashFlowEntry, storage};
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(
    name = "onair-va",
    version,
    about = "Fetch & store OnAir virtual-airline company data"
)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Fetch one or all resources (and optionally save them).
    Get(GetArgs),
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq)]
enum Resource {
    Notifications,
    Flights,
    Cashflow,
    All,
}

#[derive(ValueEnum, Clone, Debug)]
enum OutFormat {
    Csv,
    Json,
}

#[derive(Args, Debug)]
struct GetArgs {
    /// Resource to fetch.
    #[arg(short, long, value_enum, default_value_t = Resource::All)]
    resource: Resource,
    /// Company (virtual airline) id. Falls back to ONAIR_COMPANY_ID.
    #[arg(short, long)]
    company: Option<String>,
    /// API key. Falls back to ONAIR_API_KEY (environment or .env).
    #[arg(long)]
    api_key: Option<String>,
    /// Save results to file (format inferred by --format or extension).
    /// Requires a single --resource, not `all`.
    #[arg(long)]
    out: Option<PathBuf>,
    /// Output format (csv or json). If omitted, inferred from --out extension.
    #[arg(long, value_enum)]
    format: Option<OutFormat>,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    match cli.cmd {
        Command::Get(args) => cmd_get(args),
    }
}

fn cmd_get(args: GetArgs) -> Result<()> {
    let settings = Settings::load(args.api_key.clone(), args.company.clone())?;
    let client = Client::new(settings.api_key)?;
    let company = &settings.company_id;

    if args.out.is_some() && args.resource == Resource::All {
        anyhow::bail!("--out requires a single --resource (notifications, flights, or cashflow)");
    }
    let fmt = args.out.as_ref().map(|path| match args.format {
        Some(OutFormat::Csv) => "csv".to_string(),
        Some(OutFormat::Json) => "json".to_string(),
        None => path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("csv")
            .to_ascii_lowercase(),
    });

    match args.resource {
        Resource::Notifications => {
            let notifications = client.notifications(company)?;
            print_notifications(&notifications);
            if let Some(path) = args.out.as_ref() {
                save(path, fmt.as_deref(), |p, f| match f {
                    "csv" => storage::save_notifications_csv(&notifications, p),
                    _ => storage::save_json(&notifications, p),
                })?;
            }
        }
        Resource::Flights => {
            let flights = client.flights(company)?;
            print_flights(&flights);
            if let Some(path) = args.out.as_ref() {
                save(path, fmt.as_deref(), |p, f| match f {
                    "csv" => storage::save_flights_csv(&flights, p),
                    _ => storage::save_json(&flights, p),
                })?;
            }
        }
        Resource::Cashflow => {
            let cashflow = client.cash_flow(company)?;
            print_cashflow(&cashflow.entries);
            if let Some(path) = args.out.as_ref() {
                save(path, fmt.as_deref(), |p, f| match f {
                    "csv" => storage::save_cashflow_csv(&cashflow, p),
                    _ => storage::save_json(&cashflow, p),
                })?;
            }
        }
        Resource::All => {
            // Sequential fetches; the first failure aborts the whole run.
            print_notifications(&client.notifications(company)?);
            print_flights(&client.flights(company)?);
            print_cashflow(&client.cash_flow(company)?.entries);
        }
    }

    Ok(())
}

fn save(
    path: &Path,
    fmt: Option<&str>,
    write: impl FnOnce(&Path, &str) -> Result<()>,
) -> Result<()> {
    let fmt = fmt.unwrap_or("json");
    match fmt {
        "csv" | "json" => write(path, fmt)?,
        other => anyhow::bail!("unsupported format: {}", other),
    }
    eprintln!("Saved to {}", path.display());
    Ok(())
}

fn print_notifications(notifications: &[Notification]) {
    for n in notifications {
        println!(
            "[{}] {} amount={:.2} read={} ({})",
            n.zulu_event_time, n.description, n.amount, n.is_read, n.id
        );
    }
}

fn print_flights(flights: &[Flight]) {
    for f in flights {
        println!(
            "{} -> {}  start={} end={} registered={} ({})",
            f.departure_airport.icao,
            f.arrival_actual_airport.icao,
            f.start_time,
            f.end_time.as_deref().unwrap_or("in progress"),
            f.registered,
            f.id
        );
    }
}

fn print_cashflow(entries: &[CashFlowEntry]) {
    for e in entries {
        println!(
            "{}  {:+.2}  {} carry_forward={} ({})",
            e.creation_date, e.amount, e.description, e.carry_forward, e.id
        );
    }
}
