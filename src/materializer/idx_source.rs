use std::fs::File;
use std::io::{BufReader, ErrorKind, Read};
use std::path::Path;

use flate2::read::GzDecoder;

use super::error::DatasetError;

pub const LABEL_HEADER_LEN: usize = 8;
pub const IMAGE_HEADER_LEN: usize = 16;

/// Decompress the labels file and return the payload after the 8 byte
/// idx1 header. One byte per example.
pub fn read_labels(path: &Path) -> Result<Vec<u8>, DatasetError> {
    read_gz_payload(path, LABEL_HEADER_LEN)
}

/// Decompress the images file and return the payload after the 16 byte
/// idx3 header. Flat row-major pixel bytes, 784 per example.
pub fn read_images(path: &Path) -> Result<Vec<u8>, DatasetError> {
    read_gz_payload(path, IMAGE_HEADER_LEN)
}

// The header (magic number, counts, dims) is discarded rather than parsed;
// the record count is derived from the label payload length instead.
fn read_gz_payload(path: &Path, header_len: usize) -> Result<Vec<u8>, DatasetError> {
    let file = File::open(path).map_err(|source| {
        if source.kind() == ErrorKind::NotFound {
            DatasetError::InputNotFound(path.to_owned())
        } else {
            DatasetError::ReadInput {
                path: path.to_owned(),
                source,
            }
        }
    })?;

    let mut decoder = GzDecoder::new(BufReader::new(file));
    let mut bytes = Vec::new();
    decoder
        .read_to_end(&mut bytes)
        .map_err(|source| DatasetError::ReadInput {
            path: path.to_owned(),
            source,
        })?;

    if bytes.len() < header_len {
        return Err(DatasetError::TruncatedHeader {
            path: path.to_owned(),
            len: bytes.len(),
            expected: header_len,
        });
    }

    Ok(bytes.split_off(header_len))
}
