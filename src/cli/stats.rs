use clap::ValueEnum;
use raptor_features::contig::ContigSet;
use raptor_features::error::Result;
use raptor_features::io::fasta::read_contigs;
use raptor_features::io::reads::summarize_reads;
use raptor_features::stats::gc::{gc_content, gc_content_set};
use raptor_features::stats::AssemblyStatistics;
use tracing::info;

/// Output of the `stats` subcommand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StatsFormat {
    Json,
    Tsv,
}

pub fn assembly_statistics(input: &str, percentiles: &[f64]) -> Result<AssemblyStatistics> {
    let contigs = read_contigs(input)?;
    AssemblyStatistics::compute(&contigs, percentiles)
}

/// Header line and value line for the TSV report.
pub fn render_tsv(stats: &AssemblyStatistics) -> String {
    let mut headers: Vec<String> = [
        "contigs", "total_len", "max_len", "min_len", "median_len", "avg_len", "n50", "n90",
        "l50", "gc",
    ]
    .iter()
    .map(|h| h.to_string())
    .collect();
    let mut values = vec![
        stats.contig_count.to_string(),
        stats.total_length.to_string(),
        stats.max_len.to_string(),
        stats.min_len.to_string(),
        format!("{:.1}", stats.median_len),
        format!("{:.2}", stats.mean_len),
        stats.n50.to_string(),
        stats.n90.to_string(),
        stats.l50.to_string(),
        stats.gc_percent.map(|gc| format!("{:.2}", gc)).unwrap_or_default(),
    ];
    for v in &stats.nx {
        headers.push(format!("N{}", v.percentile));
        headers.push(format!("L{}", v.percentile));
        values.push(v.nx.to_string());
        values.push(v.lx.to_string());
    }
    format!("{}\n{}", headers.join("\t"), values.join("\t"))
}

pub fn run_stats(input: &str, format: StatsFormat, percentiles: &[f64]) -> Result<()> {
    info!("Calculating assembly statistics for: {}", input);
    let stats = assembly_statistics(input, percentiles)?;

    match format {
        StatsFormat::Json => println!("{}", serde_json::to_string_pretty(&stats)?),
        StatsFormat::Tsv => println!("{}", render_tsv(&stats)),
    }
    Ok(())
}

pub fn run_coverage(reads: &str, genome_size: u64) -> Result<()> {
    let summary = summarize_reads(reads)?;
    let coverage = summary.coverage(genome_size)?;
    println!("reads\tmean_read_len\tgenome_size\tcoverage");
    println!(
        "{}\t{:.2}\t{}\t{:.2}",
        summary.read_count, summary.mean_read_length, genome_size, coverage
    );
    Ok(())
}

/// Per-contig `(id, length, gc%)` rows and the assembly-wide GC%. Fails as
/// a whole if any contig has no bases.
pub fn gc_rows(contigs: &ContigSet) -> Result<(Vec<(String, usize, f64)>, f64)> {
    let rows = contigs
        .iter()
        .map(|c| Ok((c.id.clone(), c.len(), gc_content(&c.sequence)?)))
        .collect::<Result<Vec<_>>>()?;
    let total = gc_content_set(contigs)?;
    Ok((rows, total))
}

pub fn run_gc(input: &str) -> Result<()> {
    let contigs = read_contigs(input)?;
    let (rows, total) = gc_rows(&contigs)?;

    println!("ID\tlength\tgc");
    for (id, len, gc) in rows {
        println!("{}\t{}\t{:.2}", id, len, gc);
    }
    println!("*\t{}\t{:.2}", contigs.total_length(), total);
    Ok(())
}
