use crate::error::Result;
use crate::features::vector::FeatureVector;
use csv::WriterBuilder;
use serde::ser::{Serialize, SerializeStruct, Serializer};
use std::io::Write;

/// Column names in output order. Downstream consumers rely on both.
pub const FEATURE_COLUMNS: [&str; 8] = [
    "ID",
    "Core_length",
    "Dev_from_max",
    "Dev_from_min",
    "Dev_from_avg",
    "Dev_from_med",
    "Dev_from_N50",
    "Dev_from_L50",
];

pub const REPEAT_COLUMN: &str = "Nb_repeats";

/// Ordered feature rows for one assembly.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FeatureTable {
    pub has_repeats: bool,
    pub rows: Vec<FeatureVector>,
}

/// One row as written out: the repeat column is present for every row of a
/// table that has it, `null`/empty when the contig was not scanned.
struct TableRow<'a> {
    row: &'a FeatureVector,
    with_repeats: bool,
}

impl Serialize for TableRow<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let row = self.row;
        let len = FEATURE_COLUMNS.len() + usize::from(self.with_repeats);
        let mut s = serializer.serialize_struct("FeatureVector", len)?;
        s.serialize_field(FEATURE_COLUMNS[0], &row.id)?;
        s.serialize_field(FEATURE_COLUMNS[1], &row.length)?;
        s.serialize_field(FEATURE_COLUMNS[2], &row.dev_from_max)?;
        s.serialize_field(FEATURE_COLUMNS[3], &row.dev_from_min)?;
        s.serialize_field(FEATURE_COLUMNS[4], &row.dev_from_avg)?;
        s.serialize_field(FEATURE_COLUMNS[5], &row.dev_from_median)?;
        s.serialize_field(FEATURE_COLUMNS[6], &row.dev_from_n50)?;
        s.serialize_field(FEATURE_COLUMNS[7], &row.dev_from_l50)?;
        if self.with_repeats {
            s.serialize_field(REPEAT_COLUMN, &row.repeat_count)?;
        }
        s.end()
    }
}

impl FeatureTable {
    pub fn new(rows: Vec<FeatureVector>, has_repeats: bool) -> Self {
        FeatureTable { has_repeats, rows }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn columns(&self) -> Vec<&'static str> {
        let mut columns = FEATURE_COLUMNS.to_vec();
        if self.has_repeats {
            columns.push(REPEAT_COLUMN);
        }
        columns
    }

    fn table_rows(&self) -> impl Iterator<Item = TableRow<'_>> {
        self.rows.iter().map(move |row| TableRow {
            row,
            with_repeats: self.has_repeats,
        })
    }

    /// Write a header line and one record per row. Contigs skipped by the
    /// repeat scan get an empty `Nb_repeats` cell.
    pub fn write_delimited<W: Write>(&self, writer: &mut W, delimiter: u8) -> Result<()> {
        let mut wtr = WriterBuilder::new()
            .delimiter(delimiter)
            .has_headers(false)
            .from_writer(writer);
        wtr.write_record(self.columns())?;
        for row in self.table_rows() {
            wtr.serialize(row)?;
        }
        wtr.flush()?;
        Ok(())
    }

    pub fn write_json<W: Write>(&self, writer: &mut W) -> Result<()> {
        let rows: Vec<TableRow<'_>> = self.table_rows().collect();
        serde_json::to_writer_pretty(&mut *writer, &rows)?;
        writeln!(writer)?;
        Ok(())
    }
}
