//! # Error reporting for reading of transportation problem files
//!
//! A collection of enums and structures describing any problems encountered during reading and
//! parsing.
use std::error::Error;
use std::fmt;
use std::fmt::Display;
use std::io;

use crate::algorithm::error::SolveError;

/// An `ImportError` is created when an error was encountered during IO or parsing.
///
/// It is the highest error in the io error hierarchy.
#[derive(Debug)]
pub enum ImportError {
    /// The file to read isn't found, or the reading of file couldn't start or was interrupted.
    IO(io::Error),
    /// Contents of the file could not be parsed into a table of numbers.
    Parse(ParseError),
    /// The numbers were read, but they don't describe a valid problem.
    ///
    /// For example, a row might contain more costs than there are demand nodes.
    Inconsistent(SolveError),
}

impl Display for ImportError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ImportError::IO(error) => error.fmt(f),
            ImportError::Parse(error) => error.fmt(f),
            ImportError::Inconsistent(error) => write!(f, "InconsistencyError: {}", error),
        }
    }
}

impl Error for ImportError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            ImportError::IO(error) => Some(error),
            ImportError::Parse(error) => Some(error),
            ImportError::Inconsistent(error) => Some(error),
        }
    }
}

impl From<ParseError> for ImportError {
    fn from(error: ParseError) -> Self {
        ImportError::Parse(error)
    }
}

impl From<SolveError> for ImportError {
    fn from(error: SolveError) -> Self {
        ImportError::Inconsistent(error)
    }
}

/// A `ParseError` represents all errors encountered during parsing.
///
/// It may hold the error that caused it, or the file location at which it was caused.
#[derive(Debug)]
pub struct ParseError {
    description: String,
    source: Option<ParseErrorSource>,
}

/// A `ParseErrorSource` can be used with a `ParseError` to describe its cause.
///
/// It can be either a file line number and line contents, or another error.
#[derive(Debug)]
enum ParseErrorSource {
    FileLocation(usize, String),
    Other(Box<dyn Error + Send + Sync>),
}

impl Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "ParseError: {}", self.description)?;

        match &self.source {
            Some(ParseErrorSource::FileLocation(line_number, line)) => {
                write!(f, "\n\tCaused at line\t{}:\t{}", line_number, line)
            },
            Some(ParseErrorSource::Other(error)) => write!(f, "\n\tCaused by\t{}", error),
            None => Ok(()),
        }
    }
}

impl Error for ParseError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match &self.source {
            Some(ParseErrorSource::Other(error)) => Some(error.as_ref()),
            _ => None,
        }
    }
}

impl ParseError {
    /// Create a new `ParseError` with only a description.
    ///
    /// # Arguments
    ///
    /// * `description`: What's wrong at the moment of creation.
    pub fn new(description: impl Into<String>) -> Self {
        Self { description: description.into(), source: None }
    }

    /// Create a new `ParseError` with a line of the file as a cause.
    ///
    /// # Arguments
    ///
    /// * `description`: What's wrong at the moment of creation.
    /// * `file_location`: Line number (starting at 1) and the line that caused the error.
    pub fn with_file_location(description: impl Into<String>, file_location: FileLocation) -> Self {
        let (line_number, line) = file_location;
        Self {
            description: description.into(),
            source: Some(ParseErrorSource::FileLocation(line_number, line.to_string())),
        }
    }

    /// Wrap a new `ParseError` around an error from elsewhere, like failing to parse a number.
    ///
    /// # Arguments
    ///
    /// * `error`: What caused this `ParseError`.
    /// * `description`: What's wrong at the moment of creation.
    pub fn wrap_other(error: impl Error + Send + Sync + 'static, description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            source: Some(ParseErrorSource::Other(Box::new(error))),
        }
    }
}

/// A `FileLocation` references a line in the file by its line number and contents.
pub type FileLocation<'a> = (usize, &'a str);
