use raptor_features::config::FeatureConfig;
use raptor_features::error::Result;
use raptor_features::features::FeatureBuilder;
use raptor_features::io::export::{export_feature_table, TableFormat};
use raptor_features::io::fasta::read_contigs;
use std::time::Instant;
use tracing::info;

/// Command line overrides applied on top of the config file.
#[derive(Debug, Default)]
pub struct FeatureOverrides {
    pub min_run: Option<usize>,
    pub no_repeats: bool,
    pub max_scan_len: Option<usize>,
    pub max_contigs: Option<usize>,
    pub strict: bool,
}

pub fn resolve_config(config_path: Option<&str>, overrides: &FeatureOverrides) -> Result<FeatureConfig> {
    let mut config = match config_path {
        Some(path) => FeatureConfig::from_file(path)?,
        None => FeatureConfig::default(),
    };

    if let Some(min_run) = overrides.min_run {
        config.min_run_threshold = min_run;
    }
    if overrides.no_repeats {
        config.detect_repeats = false;
    }
    if let Some(limit) = overrides.max_scan_len {
        config.max_repeat_scan_len = if limit == 0 { None } else { Some(limit) };
    }
    if overrides.max_contigs.is_some() {
        config.max_contigs_per_batch = overrides.max_contigs;
    }
    if overrides.strict {
        config.strict_alphabet = true;
    }

    config.validate()?;
    Ok(config)
}

pub fn run_features(
    input: &str,
    output: &str,
    format: Option<TableFormat>,
    config: FeatureConfig,
) -> Result<()> {
    let start = Instant::now();
    let contigs = read_contigs(input)?;

    let builder = FeatureBuilder::new(config)?;
    let stats = builder.statistics(&contigs)?;
    info!(
        "Assembly: {} contigs, {} bp, N50 = {}, N90 = {}, L50 = {}",
        stats.contig_count, stats.total_length, stats.n50, stats.n90, stats.l50
    );

    let table = builder.build_with_statistics(&contigs, &stats)?;
    let format = format.unwrap_or_else(|| TableFormat::from_path(output));
    export_feature_table(&table, output, format)?;

    info!("Feature extraction completed in {:.2}s", start.elapsed().as_secs_f32());
    Ok(())
}
