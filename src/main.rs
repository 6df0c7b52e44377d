use clap::{Args, Parser};
use std::{io, path::PathBuf, process::ExitCode};
use tracing::debug;

use gin_log_parser::{setup_logging, AppError, Config, LogAnalyzer};

/// Filter Gin access logs read from stdin and print them or their statistics.
#[derive(Parser)]
#[command(author, version, about)]
struct Cli {
    #[command(flatten)]
    common: CommonArgs,

    #[command(flatten)]
    filter: FilterArgs,

    #[command(flatten)]
    output: OutputArgs,
}

#[derive(Args)]
struct CommonArgs {
    /// Path to an optional config file (yaml, json or toml)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Dump default config and exit
    #[arg(long = "dump-default-config")]
    dump_default: bool,
}

#[derive(Args)]
struct FilterArgs {
    /// HTTP method to filter
    #[arg(long)]
    method: Option<String>,

    /// Status code to filter (0 disables the filter)
    #[arg(long, allow_negative_numbers = true)]
    code: Option<i64>,

    /// Date to filter (format: YYYY/MM/DD)
    #[arg(long)]
    date: Option<String>,

    /// URL path to filter
    #[arg(long)]
    url: Option<String>,

    /// IP address to filter
    #[arg(long)]
    ip: Option<String>,
}

#[derive(Args)]
struct OutputArgs {
    /// Output filtered logs instead of statistics
    #[arg(long)]
    raw: bool,

    /// Output logs in JSON format
    #[arg(long)]
    json: bool,
}

impl Cli {
    /// Command line flags take precedence over file and environment settings.
    fn apply(self, config: &mut Config) {
        let filter = &mut config.filter;
        if let Some(method) = self.filter.method {
            filter.method = method;
        }
        if let Some(code) = self.filter.code {
            filter.code = code;
        }
        if let Some(date) = self.filter.date {
            filter.date = date;
        }
        if let Some(url) = self.filter.url {
            filter.url = url;
        }
        if let Some(ip) = self.filter.ip {
            filter.ip = ip;
        }

        config.output.raw |= self.output.raw;
        config.output.json |= self.output.json;
    }
}

fn run(cli: Cli) -> Result<(), AppError> {
    let mut config = Config::load(cli.common.config.as_deref())?;
    let config_path = cli.common.config.clone();
    cli.apply(&mut config);

    let _guard = setup_logging(&config.logging)?;
    match config_path {
        Some(path) => debug!("Loaded config from {}", path.display()),
        None => debug!("No config file given, using defaults and environment"),
    }

    let analyzer = LogAnalyzer::new(config)?;
    let stdin = io::stdin().lock();
    let mut stdout = io::stdout().lock();

    analyzer.run(stdin, &mut stdout)
}

fn main() -> ExitCode {
    // Parse command line args
    let cli = Cli::parse();

    if cli.common.dump_default {
        return match serde_yaml::to_string(&Config::default()) {
            Ok(yaml) => {
                print!("{}", yaml);
                ExitCode::SUCCESS
            }
            Err(e) => {
                eprintln!("Failed to encode default config: {}", e);
                ExitCode::FAILURE
            }
        };
    }

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}
