//! Semsearch: semantic service search from the terminal
//!
//! This is the main entry point for the application.

use anyhow::Result;
use semsearch::{
    config::Settings,
    controller::SearchController,
    search::{Coordinates, SearchClient},
    view,
};
use std::path::{Path, PathBuf};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

#[tokio::main]
async fn main() -> Result<()> {
    let args = match CliArgs::parse(std::env::args().skip(1)) {
        Ok(args) => args,
        Err(message) => {
            eprintln!("{message}");
            eprintln!("Run 'semsearch --help' for usage.");
            std::process::exit(2);
        }
    };

    if args.help {
        print_usage();
        return Ok(());
    }
    if args.version {
        println!("semsearch v{}", semsearch::VERSION);
        return Ok(());
    }

    let settings = load_settings(args.config.as_deref())?;

    FmtSubscriber::builder()
        .with_max_level(if settings.general.debug {
            Level::DEBUG
        } else {
            Level::INFO
        })
        .with_target(false)
        .init();

    let client = SearchClient::from_settings(&settings)?;

    if args.status {
        let available = client.check_status().await;
        println!(
            "{}: {}",
            settings.backend.base_url,
            if available { "available" } else { "unavailable" }
        );
        std::process::exit(i32::from(!available));
    }

    let raw_query = args.query.join(" ");
    if raw_query.trim().is_empty() {
        print_usage();
        std::process::exit(2);
    }

    info!(
        "{} (backend: {})",
        settings.general.instance_name, settings.backend.base_url
    );

    let mut controller = SearchController::new();
    controller
        .run(&client, &raw_query, args.limit, args.coordinates())
        .await;

    print!("{}", view::render(&controller.view()));
    Ok(())
}

/// Parsed command-line arguments
#[derive(Debug, Default, PartialEq)]
struct CliArgs {
    query: Vec<String>,
    limit: Option<u32>,
    latitude: Option<f64>,
    longitude: Option<f64>,
    config: Option<PathBuf>,
    status: bool,
    help: bool,
    version: bool,
}

impl CliArgs {
    fn parse(mut args: impl Iterator<Item = String>) -> std::result::Result<Self, String> {
        let mut parsed = Self::default();

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "-h" | "--help" => parsed.help = true,
                "-V" | "--version" => parsed.version = true,
                "--status" => parsed.status = true,
                "--limit" => parsed.limit = Some(Self::value(&arg, args.next())?),
                "--lat" => parsed.latitude = Some(Self::value(&arg, args.next())?),
                "--lon" => parsed.longitude = Some(Self::value(&arg, args.next())?),
                "-c" | "--config" => {
                    let path = args.next().ok_or("--config requires a path")?;
                    parsed.config = Some(PathBuf::from(path));
                }
                other if other.starts_with('-') => {
                    return Err(format!("unknown option: {other}"));
                }
                _ => parsed.query.push(arg),
            }
        }

        if parsed.latitude.is_some() != parsed.longitude.is_some() {
            return Err("--lat and --lon must be given together".to_string());
        }
        Ok(parsed)
    }

    fn value<T: std::str::FromStr>(
        flag: &str,
        raw: Option<String>,
    ) -> std::result::Result<T, String> {
        raw.ok_or_else(|| format!("{flag} requires a value"))?
            .parse()
            .map_err(|_| format!("invalid value for {flag}"))
    }

    fn coordinates(&self) -> Option<Coordinates> {
        match (self.latitude, self.longitude) {
            (Some(latitude), Some(longitude)) => Some(Coordinates::new(latitude, longitude)),
            _ => None,
        }
    }
}

/// Load settings from file or use defaults
fn load_settings(override_path: Option<&Path>) -> Result<Settings> {
    if let Some(path) = override_path {
        let mut settings = Settings::from_file(path)?;
        settings.merge_env();
        return Ok(settings);
    }

    if let Ok(path) = std::env::var("SEMSEARCH_SETTINGS_PATH") {
        let path = PathBuf::from(path);
        if path.exists() {
            let mut settings = Settings::from_file(&path)?;
            settings.merge_env();
            return Ok(settings);
        }
    }

    let paths = [
        PathBuf::from("settings.yml"),
        PathBuf::from("config/settings.yml"),
        dirs::config_dir()
            .map(|p| p.join("semsearch/settings.yml"))
            .unwrap_or_default(),
    ];

    for path in paths.iter() {
        if path.exists() {
            let mut settings = Settings::from_file(path)?;
            settings.merge_env();
            return Ok(settings);
        }
    }

    let mut settings = Settings::default();
    settings.merge_env();
    Ok(settings)
}

/// Print usage information
fn print_usage() {
    println!(
        r#"
semsearch v{}
A semantic service search client written in Rust

USAGE:
    semsearch [OPTIONS] <QUERY>...
    semsearch --status

OPTIONS:
    --limit <N>          Maximum number of results to request
    --lat <DEGREES>      Searcher latitude (requires --lon)
    --lon <DEGREES>      Searcher longitude (requires --lat)
    --status             Probe backend availability and exit
    -c, --config <FILE>  Path to configuration file
    -h, --help           Print help information
    -V, --version        Print version information

ENVIRONMENT VARIABLES:
    SEMSEARCH_SETTINGS_PATH  Path to settings.yml
    SEMSEARCH_BASE_URL       Backend base address
    SEMSEARCH_LIMIT          Default result limit
    SEMSEARCH_TIMEOUT        Request timeout in seconds
    SEMSEARCH_DEBUG          Enable debug logging (true/false)
"#,
        semsearch::VERSION
    );
}
