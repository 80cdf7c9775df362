use cidr_viewer::config::{AnalyzerConfig, ServerConfig, DEFAULT_BIND_ADDRESS};
use cidr_viewer::models::{AnalysisRequest, CidrRange};
use cidr_viewer::output::{cidr_csv_row, cidr_line, print_csv, print_report, CSV_HEADER};
use clap::{Parser, Subcommand, ValueEnum};
use log::LevelFilter;
use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::config::{Appender, Config, Root};
use log4rs::encode::pattern::PatternEncoder;
use std::error::Error;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Analyze IPv4 CIDR allocations: gaps, overlaps and addressing facts.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// log4rs configuration file
    #[arg(long, env = "CIDR_VIEWER_LOG_CONFIG", default_value = "log4rs.yml", global = true)]
    log_config: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the HTTP API
    Serve {
        /// Listen address
        #[arg(long, env = "CIDR_VIEWER_BIND", default_value = DEFAULT_BIND_ADDRESS)]
        bind: SocketAddr,

        /// Per-request timeout in seconds
        #[arg(
            long,
            env = "CIDR_VIEWER_REQUEST_TIMEOUT_SECS",
            default_value_t = cidr_viewer::config::DEFAULT_REQUEST_TIMEOUT_SECS
        )]
        request_timeout_secs: u64,

        #[command(flatten)]
        analyzer: AnalyzerArgs,
    },
    /// Analyze CIDRs given on the command line and/or in a request file
    Analyze {
        /// Untagged CIDRs
        cidrs: Vec<String>,

        /// CIDR tagged as a VPC block (repeatable)
        #[arg(long = "vpc")]
        vpc_cidrs: Vec<String>,

        /// CIDR tagged as a subnet (repeatable)
        #[arg(long = "subnet")]
        subnet_cidrs: Vec<String>,

        /// JSON file shaped like the /api/analyze request body
        #[arg(long)]
        input: Option<PathBuf>,

        #[arg(long, value_enum, default_value_t = Format::Terminal)]
        format: Format,

        #[command(flatten)]
        analyzer: AnalyzerArgs,
    },
    /// Validate a single CIDR
    Validate {
        cidr: String,

        #[arg(long, value_enum, default_value_t = Format::Terminal)]
        format: Format,
    },
}

#[derive(clap::Args, Debug)]
struct AnalyzerArgs {
    /// Maximum pairwise comparisons during overlap detection
    #[arg(
        long,
        env = "CIDR_VIEWER_MAX_OVERLAP_COMPARISONS",
        default_value_t = cidr_viewer::config::DEFAULT_MAX_OVERLAP_COMPARISONS
    )]
    max_overlap_comparisons: usize,
}

impl From<&AnalyzerArgs> for AnalyzerConfig {
    fn from(args: &AnalyzerArgs) -> Self {
        AnalyzerConfig {
            max_overlap_comparisons: args.max_overlap_comparisons,
        }
    }
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum Format {
    Terminal,
    Csv,
    Json,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // Do as little as possible in main.rs as it can't contain any tests
    dotenv::dotenv().ok();
    let args = Args::parse();
    init_logging(&args.log_config)?;
    log::info!("#Start main() v{}", env!("CARGO_PKG_VERSION"));

    match args.command {
        Command::Serve {
            bind,
            request_timeout_secs,
            analyzer,
        } => {
            let config = ServerConfig {
                bind_address: bind,
                request_timeout: Duration::from_secs(request_timeout_secs),
                analyzer: AnalyzerConfig::from(&analyzer),
            };
            log::info!("Configuration: {:?}", config);
            cidr_viewer::api::serve(config).await?;
        }
        Command::Analyze {
            cidrs,
            vpc_cidrs,
            subnet_cidrs,
            input,
            format,
            analyzer,
        } => {
            let mut request = match input {
                Some(path) => read_request(&path)?,
                None => AnalysisRequest::default(),
            };
            request.extend(AnalysisRequest {
                cidrs,
                vpc_cidrs,
                subnet_cidrs,
            });
            let result = cidr_viewer::analyze(&request, &AnalyzerConfig::from(&analyzer));
            match format {
                Format::Terminal => print_report(&result),
                Format::Csv => print_csv(&result),
                Format::Json => println!("{}", serde_json::to_string_pretty(&result)?),
            }
        }
        Command::Validate { cidr, format } => {
            let result = cidr_viewer::validate_cidr(&cidr);
            print_validation(&result, format)?;
            if !result.valid {
                std::process::exit(1);
            }
        }
    }

    Ok(())
}

fn print_validation(cidr: &CidrRange, format: Format) -> Result<(), Box<dyn Error>> {
    match format {
        Format::Json => println!("{}", serde_json::to_string_pretty(cidr)?),
        Format::Csv => println!("{CSV_HEADER}\n{}", cidr_csv_row(cidr)),
        Format::Terminal => println!("{}", cidr_line(cidr)),
    }
    Ok(())
}

/// Read an analysis request, reporting the JSON path of any parse error.
fn read_request(path: &Path) -> Result<AnalysisRequest, Box<dyn Error>> {
    let json = std::fs::read_to_string(path)
        .map_err(|e| format!("Error reading {}: {e}", path.display()))?;
    let mut deserializer = serde_json::Deserializer::from_str(&json);
    let request: AnalysisRequest = serde_path_to_error::deserialize(&mut deserializer)
        .map_err(|e| format!("Error parsing {}: path={} error={}", path.display(), e.path(), e))?;
    Ok(request)
}

/// Use the log4rs file when present, otherwise log `info` to stderr.
fn init_logging(log_config: &Path) -> Result<(), Box<dyn Error>> {
    if log_config.exists() {
        match log4rs::init_file(log_config, Default::default()) {
            Ok(()) => return Ok(()),
            Err(e) => eprintln!("Error initializing log4rs from {}: {e}", log_config.display()),
        }
    }

    let stderr = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new("{d(%Y-%m-%dT%H:%M:%S)} {h({l})} {t} - {m}{n}")))
        .build();
    let config = Config::builder()
        .appender(Appender::builder().build("stderr", Box::new(stderr)))
        .build(Root::builder().appender("stderr").build(LevelFilter::Info))?;
    log4rs::init_config(config)?;
    Ok(())
}
