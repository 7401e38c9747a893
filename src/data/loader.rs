use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use super::error::{DataError, Result};
use super::model::{Measurement, PathwayMembership, ProteinMeasurements};

/// Column-0 value of the pathway table's header row.
pub const PATHWAY_HEADER_LABEL: &str = "#term ID";

// Measurement table columns (0-based, whitespace separated).
const PROTEIN_COLUMN: usize = 1;
const X_COLUMN: usize = 3;
const Y_COLUMN: usize = 4;
const MIN_MEASUREMENT_FIELDS: usize = Y_COLUMN + 1;

// ---------------------------------------------------------------------------
// Pathway table
// ---------------------------------------------------------------------------

/// Load the tab-separated pathway table and drop its header row.
pub fn load_pathways(path: &Path) -> Result<PathwayMembership> {
    let file = File::open(path)?;
    let pathways = read_pathways(BufReader::new(file))?;
    log::info!(
        "Loaded {} pathways from {}",
        pathways.len(),
        path.display()
    );
    Ok(pathways)
}

/// Parse tab-separated pathway rows from any reader.
///
/// Each line is one row. The header line is parsed as an ordinary row and
/// removed afterwards by [`remove_header_row`]. A blank line is a row with
/// no fields and fails.
pub fn read_pathways<R: BufRead>(reader: R) -> Result<PathwayMembership> {
    let rows = reader
        .lines()
        .map(|line| split_tab_row(&line?))
        .collect::<Result<Vec<Vec<String>>>>()?;

    let mut pathways = index_pathway_rows(&rows)?;
    remove_header_row(&mut pathways)?;
    Ok(pathways)
}

/// Split one line on tabs, honouring `"` quoting.
fn split_tab_row(line: &str) -> Result<Vec<String>> {
    if line.is_empty() {
        return Ok(Vec::new());
    }
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(b'\t')
        .has_headers(false)
        .from_reader(line.as_bytes());
    let mut record = csv::StringRecord::new();
    reader.read_record(&mut record)?;
    Ok(record.iter().map(str::to_owned).collect())
}

/// Build the membership map from rows of fields.
///
/// Field 0 names the pathway, the last field holds its comma-separated
/// members. A later row with the same pathway replaces the earlier one.
pub fn index_pathway_rows<I, R, S>(rows: I) -> Result<PathwayMembership>
where
    I: IntoIterator<Item = R>,
    R: AsRef<[S]>,
    S: AsRef<str>,
{
    let mut pathways = PathwayMembership::new();
    for (row_no, row) in rows.into_iter().enumerate() {
        let fields = row.as_ref();
        let (Some(first), Some(last)) = (fields.first(), fields.last()) else {
            return Err(DataError::malformed_row(row_no + 1, 1, 0));
        };
        let members: Vec<String> = last.as_ref().split(',').map(str::to_owned).collect();
        if pathways.insert(first.as_ref(), members).is_some() {
            log::debug!("Pathway '{}' redefined on line {}", first.as_ref(), row_no + 1);
        }
    }
    Ok(pathways)
}

/// Remove the header row that was read in as data.
///
/// Fails when the table has no row keyed by [`PATHWAY_HEADER_LABEL`].
pub fn remove_header_row(pathways: &mut PathwayMembership) -> Result<Vec<String>> {
    let header = pathways
        .remove(PATHWAY_HEADER_LABEL)
        .ok_or_else(|| DataError::MissingHeaderMarker(PATHWAY_HEADER_LABEL.to_string()))?;
    log::debug!("Removed pathway header row ({} columns)", header.len());
    Ok(header)
}

// ---------------------------------------------------------------------------
// Measurement table
// ---------------------------------------------------------------------------

/// Load the whitespace-separated measurement table.
pub fn load_measurements(path: &Path) -> Result<ProteinMeasurements> {
    let file = File::open(path)?;
    let measurements = read_measurements(BufReader::new(file))?;
    log::info!(
        "Loaded {} protein measurements from {}",
        measurements.len(),
        path.display()
    );
    Ok(measurements)
}

/// Layout: one header line (skipped), then per line
/// `<any> <protein> <any> <x> <y> [...]`.
pub fn read_measurements<R: BufRead>(reader: R) -> Result<ProteinMeasurements> {
    let mut lines = reader.lines();
    lines.next().ok_or(DataError::MissingHeaderLine)??;

    let mut measurements = ProteinMeasurements::new();
    // Line numbers are 1-based and count the header.
    for (idx, line) in lines.enumerate() {
        let line_no = idx + 2;
        let line = line?;
        let fields: Vec<&str> = line.split_whitespace().collect();
        if fields.len() < MIN_MEASUREMENT_FIELDS {
            return Err(DataError::malformed_row(
                line_no,
                MIN_MEASUREMENT_FIELDS,
                fields.len(),
            ));
        }

        let x = parse_field(&fields, X_COLUMN, line_no)?;
        let y = parse_field(&fields, Y_COLUMN, line_no)?;
        let protein = fields[PROTEIN_COLUMN];
        if measurements.insert(protein, Measurement::new(x, y)).is_some() {
            log::debug!("Protein '{protein}' redefined on line {line_no}");
        }
    }
    Ok(measurements)
}

fn parse_field(fields: &[&str], column: usize, line: usize) -> Result<f64> {
    let raw = fields[column];
    raw.parse::<f64>()
        .map_err(|_| DataError::non_numeric(line, column, raw))
}
