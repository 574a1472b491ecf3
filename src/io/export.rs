use crate::error::Result;
use crate::features::FeatureTable;
use clap::ValueEnum;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;
use tracing::info;

/// Serialisation of a feature table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum TableFormat {
    Csv,
    Tsv,
    Json,
}

impl TableFormat {
    /// Pick a format from a file extension, defaulting to CSV.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Self {
        match path.as_ref().extension().and_then(|e| e.to_str()) {
            Some("tsv") | Some("txt") => TableFormat::Tsv,
            Some("json") => TableFormat::Json,
            _ => TableFormat::Csv,
        }
    }
}

pub fn write_table<W: Write>(table: &FeatureTable, writer: &mut W, format: TableFormat) -> Result<()> {
    match format {
        TableFormat::Csv => table.write_delimited(writer, b','),
        TableFormat::Tsv => table.write_delimited(writer, b'\t'),
        TableFormat::Json => table.write_json(writer),
    }
}

/// Write a feature table to `output_path`, or to stdout when the path is `-`.
pub fn export_feature_table(table: &FeatureTable, output_path: &str, format: TableFormat) -> Result<()> {
    if output_path == "-" {
        let stdout = io::stdout();
        let mut writer = BufWriter::new(stdout.lock());
        write_table(table, &mut writer, format)?;
        writer.flush()?;
        return Ok(());
    }

    let file = File::create(Path::new(output_path))?;
    let mut writer = BufWriter::new(file);
    write_table(table, &mut writer, format)?;
    writer.flush()?;
    info!("Wrote {} feature rows to {}", table.len(), output_path);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FeatureConfig;
    use crate::contig::ContigSet;
    use crate::features::build_features;
    use tempfile::tempdir;

    #[test]
    fn test_format_from_path() {
        assert_eq!(TableFormat::from_path("out.tsv"), TableFormat::Tsv);
        assert_eq!(TableFormat::from_path("out.json"), TableFormat::Json);
        assert_eq!(TableFormat::from_path("out.csv"), TableFormat::Csv);
        assert_eq!(TableFormat::from_path("out"), TableFormat::Csv);
    }

    #[test]
    fn test_export_feature_table() {
        let set = ContigSet::from_pairs(vec![("c1", "AAAA"), ("c2", "AAAAAAAA")]).unwrap();
        let table = build_features(&set, &FeatureConfig::default()).unwrap();

        let dir = tempdir().unwrap();
        let path = dir.path().join("features.csv");
        export_feature_table(&table, path.to_str().unwrap(), TableFormat::Csv).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].ends_with("Dev_from_L50,Nb_repeats"));
        assert!(lines[1].starts_with("c1,4,4,0,"));
    }
}
