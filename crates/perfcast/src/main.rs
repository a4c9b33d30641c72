use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};

use anyhow::Result;
use clap::{Parser, Subcommand};
use clap_verbosity_flag::{InfoLevel, Verbosity};
use itertools::Itertools;
use mimalloc::MiMalloc;
use perfcast_models::RunOptions;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::format::FmtSpan;

// Use mimalloc for better performance in allocation-heavy workloads.
#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

/// Predict the symbolic execution time of compute kernels on a hardware
/// target from microbenchmark measurements of the host CPU.
#[derive(Parser)]
#[command(author, version, about)]
struct Cli {
    #[command(flatten)]
    verbose: Verbosity<InfoLevel>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Predict a kernel's symbolic cost for a hardware description
    ///
    /// Reads a JSON hardware description and prints the selected model's
    /// cost expression in the problem size n.
    Predict {
        /// Path to the hardware description JSON (reads stdin if not specified)
        hardware: Option<String>,

        /// Model to run, in {kernel}/{target} form
        #[arg(short, long, default_value = perfcast_models::find_max::MODEL_NAME)]
        model: String,

        /// Output file path (writes to stdout if not specified)
        #[arg(short, long)]
        output: Option<String>,

        /// Emit the prediction as JSON instead of a text report
        #[arg(long)]
        json: bool,
    },

    /// List the registered models and their declared parameters
    Models,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize structured logging. Output goes to stderr so predictions
    // on stdout remain clean for piping. Default to warn, allowlist our crates.
    const CRATES: &[&str] =
        &["perfcast", "perfcast_models", "perfcast_schemas"];
    let level = cli.verbose.tracing_level_filter();
    let allowlist = CRATES.iter().map(|c| format!("{c}={level}")).join(",");
    let filter = EnvFilter::new(format!("warn,{allowlist}"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_span_events(FmtSpan::ENTER | FmtSpan::CLOSE)
        .init();

    match cli.command {
        Commands::Predict {
            hardware,
            model,
            output,
            json,
        } => {
            // Lock stdin/stdout once up front rather than on each call.
            // The handles must outlive the locks, so bind them here first.
            let stdin = std::io::stdin();
            let reader: Box<dyn Read> = match hardware {
                Some(path) => Box::new(BufReader::new(File::open(path)?)),
                None => Box::new(stdin.lock()),
            };

            let stdout = std::io::stdout();
            let mut writer: Box<dyn Write> = match output {
                Some(path) => Box::new(BufWriter::new(File::create(path)?)),
                None => Box::new(stdout.lock()),
            };

            let options = RunOptions {
                model: Some(model),
                json,
            };
            perfcast_models::run(reader, &mut *writer, &options)?;
            Ok(())
        }
        Commands::Models => {
            let stdout = std::io::stdout();
            let mut writer = stdout.lock();
            for (name, model) in perfcast_models::registry() {
                writeln!(
                    writer,
                    "{name}  kernel={}  target={}",
                    model.kernel(),
                    model.target()
                )?;
                writeln!(
                    writer,
                    "    parameters: {}",
                    model.parameters().iter().join(", ")
                )?;
            }
            Ok(())
        }
    }
}
