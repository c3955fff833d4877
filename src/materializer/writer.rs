use std::io::{self, Write};

use super::config::OutputFormat;
use super::dataset::Dataset;

/// Serialization strategy for a materialized dataset. Both writers emit
/// the same logical layout (label then 784 pixels, one record per row) so
/// the pipeline stays a single code path.
pub trait RecordWriter {
    fn write_records(&self, dataset: &Dataset, out: &mut dyn Write) -> io::Result<()>;
}

impl OutputFormat {
    pub fn writer(&self) -> Box<dyn RecordWriter> {
        match self {
            OutputFormat::Binary => Box::new(BinaryWriter),
            OutputFormat::Csv => Box::new(CsvWriter),
        }
    }
}

/// Raw contiguous bytes, 785 per record, no header and no delimiters.
pub struct BinaryWriter;

impl RecordWriter for BinaryWriter {
    fn write_records(&self, dataset: &Dataset, out: &mut dyn Write) -> io::Result<()> {
        for record in dataset.records() {
            out.write_all(&[record.label])?;
            out.write_all(record.pixels)?;
        }
        Ok(())
    }
}

/// One line per record, 785 comma-separated decimal fields, no header row.
pub struct CsvWriter;

impl RecordWriter for CsvWriter {
    fn write_records(&self, dataset: &Dataset, out: &mut dyn Write) -> io::Result<()> {
        for record in dataset.records() {
            write!(out, "{}", record.label)?;
            for pixel in record.pixels {
                write!(out, ",{}", pixel)?;
            }
            out.write_all(b"\n")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::materializer::dataset::{IMAGE_SIZE, RECORD_WIDTH};

    fn two_record_dataset() -> Dataset {
        let mut pixels = vec![255u8; IMAGE_SIZE];
        pixels.extend(vec![1u8; IMAGE_SIZE]);
        Dataset::from_idx_parts(vec![5, 0], pixels).unwrap()
    }

    #[test]
    fn binary_layout_is_label_then_pixels() {
        let dataset = two_record_dataset();
        let mut out = Vec::new();
        BinaryWriter.write_records(&dataset, &mut out).unwrap();

        assert_eq!(out.len(), 2 * RECORD_WIDTH);
        assert_eq!(out[0], 5);
        assert!(out[1..RECORD_WIDTH].iter().all(|&b| b == 255));
        assert_eq!(out[RECORD_WIDTH], 0);
        assert!(out[RECORD_WIDTH + 1..].iter().all(|&b| b == 1));
    }

    #[test]
    fn binary_output_for_empty_dataset_is_empty() {
        let dataset = Dataset::from_idx_parts(Vec::new(), Vec::new()).unwrap();
        let mut out = Vec::new();
        BinaryWriter.write_records(&dataset, &mut out).unwrap();
        assert!(out.is_empty());
    }

    #[test]
    fn csv_rows_have_full_width_and_newline_terminator() {
        let dataset = two_record_dataset();
        let mut out = Vec::new();
        CsvWriter.write_records(&dataset, &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.ends_with('\n'));
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        for line in &lines {
            assert_eq!(line.split(',').count(), RECORD_WIDTH);
        }
        assert!(lines[0].starts_with("5,255,255"));
        assert!(lines[1].starts_with("0,1,1"));
    }

    #[test]
    fn csv_fields_equal_binary_bytes() {
        let dataset = two_record_dataset();

        let mut binary = Vec::new();
        BinaryWriter.write_records(&dataset, &mut binary).unwrap();

        let mut csv = Vec::new();
        CsvWriter.write_records(&dataset, &mut csv).unwrap();
        let parsed: Vec<u8> = String::from_utf8(csv)
            .unwrap()
            .lines()
            .flat_map(|line| line.split(',').map(|f| f.parse().unwrap()))
            .collect();

        assert_eq!(parsed, binary);
    }
}
