use super::error::DatasetError;

pub const IMAGE_WIDTH: usize = 28;
pub const IMAGE_SIZE: usize = IMAGE_WIDTH * IMAGE_WIDTH;
pub const RECORD_WIDTH: usize = IMAGE_SIZE + 1;

/// One example: the class label followed by its flattened 28x28 image.
pub struct Record<'a> {
    pub label: u8,
    pub pixels: &'a [u8],
}

/// The whole split held in memory: a label vector plus an N x 784 pixel
/// matrix stored flat. Built once per run, serialized once, then dropped.
#[derive(Debug)]
pub struct Dataset {
    labels: Vec<u8>,
    pixels: Vec<u8>,
}

impl Dataset {
    /// Pair up decompressed idx payloads. The pixel byte count must be
    /// exactly 784 per label; anything else means the two files do not
    /// belong to the same split or one of them is truncated.
    pub fn from_idx_parts(labels: Vec<u8>, pixels: Vec<u8>) -> Result<Self, DatasetError> {
        let expected = labels.len() * IMAGE_SIZE;
        if pixels.len() != expected {
            return Err(DatasetError::SizeMismatch {
                labels: labels.len(),
                pixel_bytes: pixels.len(),
                expected,
            });
        }

        Ok(Self { labels, pixels })
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Records in input order, no copying.
    pub fn records(&self) -> impl Iterator<Item = Record<'_>> {
        self.labels
            .iter()
            .zip(self.pixels.chunks_exact(IMAGE_SIZE))
            .map(|(&label, pixels)| Record { label, pixels })
    }
}
