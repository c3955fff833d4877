use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use super::config::MaterializeConfig;
use super::dataset::Dataset;
use super::error::DatasetError;
use super::idx_source;

#[derive(Debug)]
pub struct MaterializeSummary {
    pub records: usize,
    pub bytes_written: u64,
    pub output_path: PathBuf,
}

/// Run the whole pipeline once: decompress both idx files, pair labels
/// with image rows, serialize in the configured format. Single pass, no
/// retries; any failure aborts the run with nothing written.
pub fn materialize(config: &MaterializeConfig) -> Result<MaterializeSummary, DatasetError> {
    let labels = idx_source::read_labels(&config.labels_path())?;
    let pixels = idx_source::read_images(&config.images_path())?;
    let dataset = Dataset::from_idx_parts(labels, pixels)?;

    let output_path = config.output_path();
    let bytes_written = write_atomic(&dataset, config, &output_path)?;

    Ok(MaterializeSummary {
        records: dataset.len(),
        bytes_written,
        output_path,
    })
}

// Serialize into a sibling temp file and rename it over the target, so a
// failed run never leaves a partial output file behind. An existing file
// at the target path is replaced.
fn write_atomic(
    dataset: &Dataset,
    config: &MaterializeConfig,
    output_path: &Path,
) -> Result<u64, DatasetError> {
    let write_err = |source: std::io::Error| DatasetError::WriteOutput {
        path: output_path.to_owned(),
        source,
    };

    let dir = output_path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or(Path::new("."));
    let tmp = NamedTempFile::new_in(dir).map_err(write_err)?;

    let mut out = BufWriter::new(tmp.as_file());
    config
        .format
        .writer()
        .write_records(dataset, &mut out)
        .map_err(write_err)?;
    out.flush().map_err(write_err)?;
    drop(out);

    let bytes_written = tmp.as_file().metadata().map_err(write_err)?.len();
    tmp.persist(output_path).map_err(|e| write_err(e.error))?;

    Ok(bytes_written)
}
