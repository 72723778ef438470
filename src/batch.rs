//! CSV batch calculation
//!
//! Input rows carry the same raw text fields as a single calculation:
//!
//! ```text
//! lat_a,lon_a,azimuth,distance_km,lat_b,lon_b,name
//! 50.0,10.0,90,100,50.0,11.0,alpha
//! "50,0","10,0",90,100,50,11,bravo
//! ```
//!
//! Rows are computed in parallel. A row that cannot be read or computed is
//! written as `INVALID_INPUT` instead of failing the whole batch.

use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;
use std::time::{Duration, Instant};

use rayon::prelude::*;
use serde::Deserialize;
use tracing::{info, warn};

use crate::calculator::AzimuthCalculator;
use crate::error::{Error, Result};
use crate::input::CalculationInput;
use crate::types::AzimuthCalculationResult;

/// Marker written in place of values for rows that produced no result
pub const INVALID_INPUT: &str = "INVALID_INPUT";

/// One input row of a batch
///
/// Every field is read as text so the same comma-tolerant parsing applies
/// as for a single calculation.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct BatchRow {
    #[serde(default)]
    pub lat_a: String,
    #[serde(default)]
    pub lon_a: String,
    #[serde(default)]
    pub azimuth: String,
    #[serde(default)]
    pub distance_km: String,
    #[serde(default)]
    pub lat_b: String,
    #[serde(default)]
    pub lon_b: String,
    #[serde(default)]
    pub name: Option<String>,
}

impl BatchRow {
    /// The calculation fields of this row
    pub fn input(&self) -> CalculationInput {
        CalculationInput {
            lat_a: self.lat_a.clone(),
            lon_a: self.lon_a.clone(),
            azimuth: self.azimuth.clone(),
            distance_km: self.distance_km.clone(),
            lat_b: self.lat_b.clone(),
            lon_b: self.lon_b.clone(),
        }
    }
}

/// Summary of a processed batch
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BatchStats {
    pub total: usize,
    pub successful: usize,
    pub failed: usize,
    pub elapsed: Duration,
}

impl BatchStats {
    pub fn execution_time_ms(&self) -> f64 {
        self.elapsed.as_secs_f64() * 1000.0
    }
}

/// Reads batch rows from CSV
///
/// Records that fail to deserialize are kept as empty rows, with their
/// `name` when it can be recovered, so they show up as failures in the
/// report. More than `max_rows` records is an error.
pub fn read_rows<R: Read>(reader: R, max_rows: usize) -> Result<Vec<BatchRow>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = csv_reader.byte_headers()?.clone();
    let name_index = headers.iter().position(|h| h == b"name");

    let mut rows = Vec::new();
    for (index, record) in csv_reader.byte_records().enumerate() {
        if rows.len() >= max_rows {
            return Err(Error::InvalidFormat(format!(
                "Batch exceeds the limit of {} rows",
                max_rows
            )));
        }

        let record = record?;
        match record.deserialize::<BatchRow>(Some(&headers)) {
            Ok(row) => rows.push(row),
            Err(e) => {
                let name = name_index
                    .and_then(|i| record.get(i))
                    .filter(|field| !field.is_empty())
                    .map(|field| String::from_utf8_lossy(field).into_owned());

                warn!(row = index + 1, name = ?name, error = %e, "unreadable batch row");
                rows.push(BatchRow {
                    name,
                    ..BatchRow::default()
                });
            }
        }
    }

    Ok(rows)
}

/// Computes every row in parallel; `None` for rows without a result
pub fn process_rows(
    calculator: &AzimuthCalculator,
    rows: &[BatchRow],
) -> Vec<Option<AzimuthCalculationResult>> {
    rows.par_iter()
        .map(|row| {
            let request = row.input().parse()?;
            calculator.try_calculate_request(&request).ok()
        })
        .collect()
}

/// Writes the result report: `#` statistics lines, then one CSV record per row
pub fn write_report<W: Write>(
    mut writer: W,
    rows: &[BatchRow],
    results: &[Option<AzimuthCalculationResult>],
    stats: &BatchStats,
) -> Result<()> {
    writeln!(writer, "# Statistics")?;
    writeln!(writer, "# Total rows: {}", stats.total)?;
    writeln!(writer, "# Successful: {}", stats.successful)?;
    writeln!(writer, "# Failed: {}", stats.failed)?;
    writeln!(writer, "# Execution time: {:.2} ms", stats.execution_time_ms())?;

    let has_names = rows.iter().any(|row| row.name.is_some());
    let mut csv_writer = csv::Writer::from_writer(&mut writer);

    if has_names {
        csv_writer.write_record(["name", "target_lat", "target_lon", "azimuth_from_b"])?;
    } else {
        csv_writer.write_record(["target_lat", "target_lon", "azimuth_from_b"])?;
    }

    for (row, result) in rows.iter().zip(results) {
        let mut record = Vec::with_capacity(4);
        if has_names {
            record.push(row.name.clone().unwrap_or_default());
        }

        match result {
            Some(result) => {
                record.push(result.target.latitude.to_string());
                record.push(result.target.longitude.to_string());
                record.push(format!("{:.2}", result.azimuth_from_b));
            }
            None => record.extend(std::iter::repeat(INVALID_INPUT.to_string()).take(3)),
        }

        csv_writer.write_record(&record)?;
    }

    csv_writer.flush()?;
    Ok(())
}

/// Reads, computes and reports a whole batch
pub fn process_csv<R: Read, W: Write>(
    calculator: &AzimuthCalculator,
    reader: R,
    writer: W,
    max_rows: usize,
) -> Result<BatchStats> {
    let start = Instant::now();

    let rows = read_rows(reader, max_rows)?;
    let results = process_rows(calculator, &rows);

    let successful = results.iter().filter(|r| r.is_some()).count();
    let stats = BatchStats {
        total: rows.len(),
        successful,
        failed: rows.len() - successful,
        elapsed: start.elapsed(),
    };

    write_report(writer, &rows, &results, &stats)?;

    info!(
        total = stats.total,
        successful = stats.successful,
        failed = stats.failed,
        elapsed_ms = stats.execution_time_ms(),
        "batch processed"
    );

    Ok(stats)
}

/// [`process_csv`] between two files
pub fn process_file<P: AsRef<Path>, Q: AsRef<Path>>(
    calculator: &AzimuthCalculator,
    input_path: P,
    output_path: Q,
    max_rows: usize,
) -> Result<BatchStats> {
    let input = BufReader::new(File::open(input_path)?);
    let mut output = BufWriter::new(File::create(output_path)?);

    let stats = process_csv(calculator, input, &mut output, max_rows)?;
    output.flush()?;

    Ok(stats)
}
