//! Data sample loading
//!
//! Reads a CSV text file and converts it into a sample. The conversion is all
//! or nothing: a single token that is not a number, or a number outside the
//! admission range, rejects the whole file.

use std::{
    fs, io,
    path::{Path, PathBuf},
};

/// Open interval `(min, max)` of admitted values
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValueRange {
    pub min: f64,
    pub max: f64,
}

impl ValueRange {
    /// Both ends are exclusive; NaN is never contained.
    #[must_use]
    pub fn contains(&self, value: f64) -> bool {
        value > self.min && value < self.max
    }
}

#[derive(Debug, derive_more::Display, derive_more::Error)]
pub enum LoadError {
    #[display("Directory cannot be empty")]
    DirectoryEmpty,
    #[display("File directory does not exist: {}", path.display())]
    SourceNotFound { path: PathBuf },
    #[display("Failed to read data sample: {}", path.display())]
    Read { path: PathBuf, source: io::Error },
    #[display("Data sample contains invalid numbers: {}", path.display())]
    ConversionFailed {
        path: PathBuf,
        source: ConversionError,
    },
}

/// Why a token of the data sample was rejected
#[derive(Debug, Clone, PartialEq, derive_more::Display, derive_more::Error)]
pub enum ConversionError {
    #[display("token #{index} ({token:?}) is not a number")]
    InvalidNumber { index: usize, token: String },
    #[display("value {value} is outside the admitted range ({min}, {max})")]
    OutOfRange { value: f64, min: f64, max: f64 },
}

/// Returns the data sample path, rejecting a missing or empty one.
///
/// # Errors
///
/// Returns [`LoadError::DirectoryEmpty`] if no path or an empty path is given.
pub fn require_source(source: Option<&Path>) -> Result<&Path, LoadError> {
    match source {
        Some(path) if !path.as_os_str().is_empty() => Ok(path),
        _ => Err(LoadError::DirectoryEmpty),
    }
}

/// Loads the data sample stored at `path`.
///
/// # Errors
///
/// * [`LoadError::SourceNotFound`] - if the path is not an existing file
/// * [`LoadError::Read`] - if the file cannot be read as UTF-8 text
/// * [`LoadError::ConversionFailed`] - if any token is rejected, see [`parse_sample`]
pub fn load_sample(path: &Path, range: ValueRange) -> Result<Vec<f64>, LoadError> {
    if !path.is_file() {
        return Err(LoadError::SourceNotFound {
            path: path.to_owned(),
        });
    }

    let text = fs::read_to_string(path).map_err(|source| LoadError::Read {
        path: path.to_owned(),
        source,
    })?;
    let sample = parse_sample(&text, range).map_err(|source| LoadError::ConversionFailed {
        path: path.to_owned(),
        source,
    })?;

    log::debug!("Parsed {} values from {}", sample.len(), path.display());
    Ok(sample)
}

/// Converts comma, carriage return or newline separated text into a sample.
///
/// Empty tokens are skipped and surrounding whitespace is ignored. Every other
/// token must parse as `f64` and lie strictly inside `range`.
///
/// # Errors
///
/// Returns the first rejected token.
pub fn parse_sample(text: &str, range: ValueRange) -> Result<Vec<f64>, ConversionError> {
    text.split([',', '\r', '\n'])
        .filter(|token| !token.is_empty())
        .enumerate()
        .map(|(index, token)| {
            let value = token.trim().parse::<f64>().map_err(|_| {
                ConversionError::InvalidNumber {
                    index,
                    token: token.to_owned(),
                }
            })?;
            if !range.contains(value) {
                return Err(ConversionError::OutOfRange {
                    value,
                    min: range.min,
                    max: range.max,
                });
            }
            Ok(value)
        })
        .collect()
}
