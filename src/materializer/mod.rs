pub mod config;
pub mod dataset;
pub mod error;
pub mod idx_source;
pub mod materializer;
pub mod writer;

pub use config::{MaterializeConfig, Mode, OutputFormat};
pub use dataset::{Dataset, Record, IMAGE_SIZE, RECORD_WIDTH};
pub use error::DatasetError;
pub use materializer::{materialize, MaterializeSummary};
pub use writer::{BinaryWriter, CsvWriter, RecordWriter};
