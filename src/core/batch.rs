use crate::core::classifier::Classifier;
use crate::domain::model::{Category, Measurement};
use crate::utils::error::{Result, SorterError};
use serde::{Deserialize, Serialize};
use std::io::{Read, Write};

const INVALID_LABEL: &str = "INVALID";
const OUTPUT_HEADER: [&str; 6] = ["id", "width", "height", "length", "mass", "category"];

#[derive(Debug, Deserialize)]
struct ManifestRow {
    #[serde(default)]
    id: Option<String>,
    width: f64,
    height: f64,
    length: f64,
    mass: f64,
}

#[derive(Debug, Serialize)]
struct SortedRow<'a> {
    id: Option<&'a str>,
    width: f64,
    height: f64,
    length: f64,
    mass: f64,
    category: &'a str,
}

/// Per-category counts for one manifest.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct BatchSummary {
    pub standard: usize,
    pub special: usize,
    pub rejected: usize,
    pub invalid: usize,
}

impl BatchSummary {
    pub fn total(&self) -> usize {
        self.standard + self.special + self.rejected + self.invalid
    }

    fn record(&mut self, category: Category) {
        match category {
            Category::Standard => self.standard += 1,
            Category::Special => self.special += 1,
            Category::Rejected => self.rejected += 1,
        }
    }
}

/// Reads a `width,height,length,mass` manifest (with an optional `id` column)
/// and writes it back with a `category` column appended.
///
/// Rows with negative measurements are labelled `INVALID` and counted; they do
/// not stop the batch. Malformed CSV does.
pub fn classify_csv<R: Read, W: Write>(
    classifier: &Classifier,
    reader: R,
    writer: W,
) -> Result<BatchSummary> {
    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    // header goes out even when the manifest has no rows
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);
    wtr.write_record(OUTPUT_HEADER)?;
    let mut summary = BatchSummary::default();

    for (index, row) in rdr.deserialize::<ManifestRow>().enumerate() {
        let row = row?;
        let measurement = Measurement::new(row.width, row.height, row.length, row.mass);

        let label = match classifier.classify_measurement(&measurement) {
            Ok(category) => {
                summary.record(category);
                category.as_str()
            }
            Err(SorterError::InvalidMeasurement { field, measurement }) => {
                tracing::warn!(row = index + 1, field, %measurement, "skipping invalid package");
                summary.invalid += 1;
                INVALID_LABEL
            }
            Err(e) => return Err(e),
        };

        wtr.serialize(SortedRow {
            id: row.id.as_deref(),
            width: row.width,
            height: row.height,
            length: row.length,
            mass: row.mass,
            category: label,
        })?;
    }

    wtr.flush()?;

    tracing::info!(
        total = summary.total(),
        standard = summary.standard,
        special = summary.special,
        rejected = summary.rejected,
        invalid = summary.invalid,
        "manifest sorted"
    );

    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(input: &str) -> Result<(BatchSummary, String)> {
        let mut out = Vec::new();
        let summary = classify_csv(&Classifier::default(), input.as_bytes(), &mut out)?;
        Ok((summary, String::from_utf8(out).unwrap()))
    }

    #[test]
    fn test_classify_manifest_with_ids() {
        let input = "\
id,width,height,length,mass
a,99,99,99,19
b,100,100,100,10
c,150,100,100,20
d,-1,0,0,0
";
        let (summary, output) = run(input).unwrap();

        assert_eq!(
            summary,
            BatchSummary {
                standard: 1,
                special: 1,
                rejected: 1,
                invalid: 1,
            }
        );
        assert_eq!(summary.total(), 4);

        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines[0], "id,width,height,length,mass,category");
        assert!(lines[1].starts_with("a,") && lines[1].ends_with(",STANDARD"));
        assert!(lines[2].ends_with(",SPECIAL"));
        assert!(lines[3].ends_with(",REJECTED"));
        assert!(lines[4].starts_with("d,") && lines[4].ends_with(",INVALID"));
    }

    #[test]
    fn test_manifest_without_id_column() {
        let input = "width,height,length,mass\n99, 99, 99, 20\n";
        let (summary, output) = run(input).unwrap();

        assert_eq!(summary.special, 1);
        assert!(output.lines().nth(1).unwrap().ends_with(",SPECIAL"));
    }

    #[test]
    fn test_malformed_row_fails_the_batch() {
        let input = "width,height,length,mass\n1,2,three,4\n";
        assert!(matches!(run(input), Err(SorterError::Csv(_))));
    }

    #[test]
    fn test_empty_manifest() {
        let (summary, output) = run("width,height,length,mass\n").unwrap();
        assert_eq!(summary.total(), 0);
        assert_eq!(output, "id,width,height,length,mass,category\n");
    }
}
