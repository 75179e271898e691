use std::fmt;
use std::path::PathBuf;

#[derive(Debug)]
pub enum Error {
    /// Input file could not be opened or read
    SourceUnavailable {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Data row without exactly eight tab-separated fields
    MalformedRow { row: usize, fields: usize },
    /// Time, Year or Plays column is not an integer
    InvalidFieldType,
    /// Report file could not be created or written
    SinkUnavailable {
        path: PathBuf,
        source: std::io::Error,
    },
    ConfigParse(String),
}

impl Error {
    /// Process exit code for this failure. Usage errors exit with 2 from clap.
    pub fn exit_code(&self) -> u8 {
        match self {
            Error::SourceUnavailable { .. } => 3,
            Error::MalformedRow { .. } => 4,
            Error::InvalidFieldType => 5,
            Error::SinkUnavailable { .. } => 6,
            Error::ConfigParse(_) => 7,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::SourceUnavailable { path, source } => write!(
                f,
                "Error opening file. Check that it exists and try again. ({}: {})",
                path.display(),
                source
            ),
            Error::MalformedRow { row, fields } => write!(
                f,
                "Row {} contains {} values. It should contain {}.",
                row,
                fields,
                crate::types::FIELD_COUNT
            ),
            Error::InvalidFieldType => write!(f, "Record contains data of invalid type."),
            Error::SinkUnavailable { path, source } => write!(
                f,
                "Error writing to report file. Exiting... ({}: {})",
                path.display(),
                source
            ),
            Error::ConfigParse(msg) => write!(f, "Configuration parse error: {}", msg),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::SourceUnavailable { source, .. } | Error::SinkUnavailable { source, .. } => {
                Some(source)
            }
            _ => None,
        }
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::ConfigParse(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
