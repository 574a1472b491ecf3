mod cli;
mod cli_main;

use clap::Parser;
use cli::features::{resolve_config, run_features, FeatureOverrides};
use cli::stats::{run_coverage, run_gc, run_stats};
use cli_main::{Cli, Commands};
use rayon::ThreadPoolBuilder;
use raptor_features::error::Result;
use tracing::{error, info};
use tracing_subscriber::FmtSubscriber;

fn main() {
    let cli = Cli::parse();

    let level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber).expect("Setting tracing default failed");

    if let Err(e) = run(cli.command) {
        error!("{}", e);
        std::process::exit(1);
    }
}

fn run(command: Commands) -> Result<()> {
    match command {
        Commands::Features {
            input,
            output,
            format,
            config,
            min_run,
            no_repeats,
            max_scan_len,
            max_contigs,
            strict,
            threads,
        } => {
            info!("Starting feature extraction: input = {}, threads = {}", input, threads);

            if let Err(e) = ThreadPoolBuilder::new().num_threads(threads).build_global() {
                tracing::warn!("Could not configure thread pool: {}", e);
            }

            let overrides = FeatureOverrides {
                min_run,
                no_repeats,
                max_scan_len,
                max_contigs,
                strict,
            };
            let config = resolve_config(config.as_deref(), &overrides)?;
            run_features(&input, &output, format, config)
        }

        Commands::Stats {
            input,
            format,
            percentiles,
        } => run_stats(&input, format, &percentiles),

        Commands::Coverage { reads, genome_size } => {
            info!("Estimating coverage for {} (genome size {})", reads, genome_size);
            run_coverage(&reads, genome_size)
        }

        Commands::Gc { input } => run_gc(&input),
    }
}
