use clap::{Parser, Subcommand};
use yijing::cli::{cast, list_hexagrams, show_hexagram, CastOptions};
use yijing::{random_hexagram, EntropySource, OutputFormat};
use std::path::PathBuf;
use std::process::ExitCode;

/// Version info from build.rs
const VERSION: &str = env!("YIJING_VERSION");
const PROFILE: &str = env!("YIJING_PROFILE");
const GIT_HASH: &str = env!("YIJING_GIT_HASH");

fn get_version() -> &'static str {
    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();
    VERSION_STRING.get_or_init(|| format!("{} {} ({})", PROFILE, VERSION, GIT_HASH))
}

#[derive(Parser)]
#[command(name = "yijing")]
#[command(author, about = "Cast I Ching hexagrams with the three-coin method", long_about = None)]
struct Cli {
    /// Print version
    #[arg(short = 'V', long)]
    version: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Cast a hexagram and print the full reading
    #[command(alias = "c")]
    Cast {
        /// Derive the entropy from a phrase (reproducible)
        #[arg(long, conflicts_with_all = ["bytes", "file"])]
        seed: Option<String>,

        /// Use these three bytes, as six hex digits
        #[arg(long, conflicts_with = "file")]
        bytes: Option<String>,

        /// Read the first three bytes of a file
        #[arg(long)]
        file: Option<PathBuf>,

        /// Output format
        #[arg(long, default_value = "text", value_parser = parse_format)]
        format: OutputFormat,
    },

    /// Describe a hexagram by King Wen number
    #[command(alias = "s")]
    Show {
        /// Hexagram number (1-64)
        number: u8,

        /// Output format
        #[arg(long, default_value = "text", value_parser = parse_format)]
        format: OutputFormat,
    },

    /// List all 64 hexagrams
    #[command(alias = "l")]
    List,
}

fn parse_format(s: &str) -> Result<OutputFormat, String> {
    s.parse().map_err(|e| format!("{}", e))
}

fn entropy_source(seed: Option<String>, bytes: Option<String>, file: Option<PathBuf>) -> EntropySource {
    match (seed, bytes, file) {
        (Some(seed), _, _) => EntropySource::Seed(seed),
        (_, Some(bytes), _) => EntropySource::Hex(bytes),
        (_, _, Some(file)) => EntropySource::File(file),
        _ => EntropySource::Os,
    }
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    if cli.version {
        println!("yijing {}", get_version());
        return ExitCode::SUCCESS;
    }

    let result = match cli.command {
        // Bare invocation prints just the number of a freshly cast hexagram
        None => random_hexagram().map(|n| println!("{}", n)),

        Some(Commands::Cast {
            seed,
            bytes,
            file,
            format,
        }) => {
            let options = CastOptions {
                source: entropy_source(seed, bytes, file),
                format,
            };
            cast(&options).map(|reading| print!("{}", reading))
        }

        Some(Commands::Show { number, format }) => {
            show_hexagram(number, format).map(|info| print!("{}", info))
        }

        Some(Commands::List) => {
            print!("{}", list_hexagrams());
            Ok(())
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
