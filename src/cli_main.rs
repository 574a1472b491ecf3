use clap::{Parser, Subcommand};
use crate::cli::stats::StatsFormat;
use raptor_features::io::export::TableFormat;

#[derive(Parser, Debug)]
#[command(name = "raptor-features", version, about = "Per-contig quality features for genome assemblies", long_about = None)]
pub struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Compute one feature row per contig
    Features {
        /// Input contigs FASTA(.gz)
        #[arg(short, long)]
        input: String,

        /// Output table path, `-` for stdout
        #[arg(short, long, default_value = "-")]
        output: String,

        /// Output format (defaults to the output file extension, else CSV)
        #[arg(long, value_enum)]
        format: Option<TableFormat>,

        /// JSON config file; command line flags override its values
        #[arg(short, long)]
        config: Option<String>,

        /// Minimum diagonal run length counted as a repeat
        #[arg(long)]
        min_run: Option<usize>,

        /// Skip the dot-plot repeat scan and the Nb_repeats column
        #[arg(long)]
        no_repeats: bool,

        /// Do not scan contigs longer than this many bases for repeats (0 = no limit)
        #[arg(long)]
        max_scan_len: Option<usize>,

        /// Emit rows for at most this many contigs
        #[arg(long)]
        max_contigs: Option<usize>,

        /// Reject sequences containing non-IUPAC characters
        #[arg(long)]
        strict: bool,

        /// Number of threads
        #[arg(long, default_value_t = num_cpus::get())]
        threads: usize,
    },

    /// Display assembly statistics (N50, N90, L50, length distribution, GC)
    Stats {
        /// Input contigs FASTA(.gz)
        #[arg(short, long)]
        input: String,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = StatsFormat::Tsv)]
        format: StatsFormat,

        /// Nx percentiles to report
        #[arg(long, value_delimiter = ',', default_values_t = vec![50.0, 90.0])]
        percentiles: Vec<f64>,
    },

    /// Estimate sequencing coverage from a read file
    Coverage {
        /// Reads in FASTA or FASTQ(.gz)
        #[arg(short, long)]
        reads: String,

        /// Target genome size in bases
        #[arg(short, long)]
        genome_size: u64,
    },

    /// Report GC content per contig and for the whole assembly
    Gc {
        /// Input contigs FASTA(.gz)
        #[arg(short, long)]
        input: String,
    },
}
