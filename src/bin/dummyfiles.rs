use std::{path::PathBuf, process::ExitCode};

use clap::{ArgAction, ArgGroup, Parser};
use dummyfiles::{output::default_base_dir, ContentMode, Progress, RunConfig, SizeSpec};
use tracing::{error, level_filters::LevelFilter};
use tracing_subscriber::{fmt::time::ChronoLocal, EnvFilter};

/// Creates dummy files for program testing.
///
/// Files of each requested size are filled with random bytes, a repeated
/// fixed value, or a repeated sequence of values.
#[derive(Parser)]
#[command(version, disable_version_flag = true)]
#[command(group(ArgGroup::new("size").required(true).args(["list", "range"])))]
#[command(group(ArgGroup::new("content").required(true).args(["random", "fixed", "sequential"])))]
struct Args {
    /// List of file sizes in bytes (e.g. -l 10 100 200 2000000)
    #[arg(short, long, num_args = 1.., allow_negative_numbers = true)]
    list: Option<Vec<i64>>,

    /// Inclusive range of file sizes in bytes (e.g. -r 10 20)
    #[arg(short, long, num_args = 2, value_names = ["A", "B"], allow_negative_numbers = true)]
    range: Option<Vec<i64>>,

    /// Number of files to create per size
    #[arg(short = 'm', long, default_value_t = 1, allow_negative_numbers = true)]
    howmany: i64,

    /// Output directory
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Base location for the default timestamped output directory
    #[arg(long, env = "DUMMYFILES_BASE_DIR")]
    base_dir: Option<PathBuf>,

    /// Fill files with random bytes
    #[arg(long, visible_alias = "rnd")]
    random: bool,

    /// Fill files with a repeated hex value (e.g. --fixed 09AB)
    #[arg(long, visible_alias = "fix", value_name = "HEX")]
    fixed: Option<String>,

    /// Fill files with a sequence of values between two hex bounds (e.g. --seq 00 FF)
    #[arg(long, visible_alias = "seq", num_args = 2, value_names = ["START", "END"])]
    sequential: Option<Vec<String>>,

    /// Hide the progress bar
    #[arg(short, long)]
    quiet: bool,

    /// Print version
    #[arg(short = 'v', long, action = ArgAction::Version)]
    version: Option<bool>,
}

impl Args {
    fn size_spec(&self) -> SizeSpec {
        match (&self.list, self.range.as_deref()) {
            (_, Some(&[a, b])) => SizeSpec::Range(a, b),
            (Some(list), _) => SizeSpec::List(list.clone()),
            _ => SizeSpec::List(Vec::new()),
        }
    }

    fn content_mode(&self) -> Result<ContentMode, dummyfiles::ConfigError> {
        if let Some(value) = &self.fixed {
            return ContentMode::fixed_from_hex(value);
        }
        if let Some([start, end]) = self.sequential.as_deref() {
            return ContentMode::sequential_from_hex(start, end);
        }
        Ok(ContentMode::Random)
    }

    fn into_config(self) -> Result<RunConfig, dummyfiles::ConfigError> {
        let mode = self.content_mode()?;
        let sizes = self.size_spec();
        let base_dir = self.base_dir.unwrap_or_else(default_base_dir);
        RunConfig::new(&sizes, self.howmany, self.output, base_dir, mode)
    }
}

fn main() -> ExitCode {
    let args = Args::parse();
    let quiet = args.quiet;

    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy();
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_timer(ChronoLocal::new("%Y-%m-%d %H:%M:%S".to_string()))
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::with_default(subscriber, || {
        let config = match args.into_config() {
            Ok(config) => config,
            Err(err) => {
                error!("{err}");
                return ExitCode::from(dummyfiles::EXIT_BAD_ARGUMENTS);
            }
        };
        let mut progress = Progress::new(!quiet);
        match dummyfiles::run(&config, &mut progress) {
            Ok(_) => ExitCode::SUCCESS,
            Err(err) => {
                error!("{err:#}");
                ExitCode::FAILURE
            }
        }
    })
}
