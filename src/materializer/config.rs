use std::path::{Path, PathBuf};
use std::str::FromStr;

use super::error::DatasetError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    Train,
    Test,
}

impl Mode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Train => "train",
            Mode::Test => "test",
        }
    }

    pub fn labels_file_name(&self) -> String {
        format!("{}-labels-idx1-ubyte.gz", self.as_str())
    }

    pub fn images_file_name(&self) -> String {
        format!("{}-images-idx3-ubyte.gz", self.as_str())
    }
}

impl FromStr for Mode {
    type Err = DatasetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "train" => Ok(Mode::Train),
            "test" => Ok(Mode::Test),
            _ => Err(DatasetError::UnknownMode(s.to_string())),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Binary,
    Csv,
}

impl OutputFormat {
    // The csv name carries no mode, matching the original output layout
    pub fn default_output_name(&self, mode: Mode) -> String {
        match self {
            OutputFormat::Binary => format!("fashion-mnist-{}.dataset", mode.as_str()),
            OutputFormat::Csv => "fashion-mnist.csv".to_string(),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = DatasetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "binary" => Ok(OutputFormat::Binary),
            "csv" => Ok(OutputFormat::Csv),
            _ => Err(DatasetError::UnknownFormat(s.to_string())),
        }
    }
}

pub struct MaterializeConfig {
    pub mode: Mode,
    pub input_dir: PathBuf,
    pub output_path: Option<PathBuf>,
    pub format: OutputFormat,
}

impl MaterializeConfig {
    pub fn new(mode: Mode) -> Self {
        Self {
            mode,
            input_dir: PathBuf::from("."),
            output_path: None,
            format: OutputFormat::Binary,
        }
    }

    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    pub fn with_input_dir(mut self, dir: impl AsRef<Path>) -> Self {
        self.input_dir = dir.as_ref().to_owned();
        self
    }

    pub fn with_output_path(mut self, path: impl AsRef<Path>) -> Self {
        self.output_path = Some(path.as_ref().to_owned());
        self
    }

    pub fn labels_path(&self) -> PathBuf {
        self.input_dir.join(self.mode.labels_file_name())
    }

    pub fn images_path(&self) -> PathBuf {
        self.input_dir.join(self.mode.images_file_name())
    }

    pub fn output_path(&self) -> PathBuf {
        match &self.output_path {
            Some(path) => path.clone(),
            None => self.input_dir.join(self.format.default_output_name(self.mode)),
        }
    }
}
