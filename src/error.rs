//! Error types for algokit.
//!
//! ## Key Components
//!
//! - [`InputError`]: The batch input is malformed (missing or non-integer
//!   token, negative declared count, trailing input). Processing of the
//!   stream stops at the first one.
//! - [`ConfigError`]: A parameter parsed fine but is invalid for the
//!   algorithm (e.g. zero cache capacity). The whole run fails rather than
//!   printing a meaningless result.
//! - [`BatchError`]: Everything a batch run can fail with, including I/O on
//!   stdin and stdout.
//!
//! ## Example Usage
//!
//! ```
//! use algokit::error::ConfigError;
//! use algokit::policy::belady::simulate;
//!
//! let faults: Result<usize, ConfigError> = simulate(2, &[1, 2, 3, 2, 1, 4]);
//! assert_eq!(faults, Ok(5));
//!
//! // Invalid capacity is rejected before any replay happens
//! let bad = simulate(0, &[1, 2, 3]);
//! assert!(bad.is_err());
//! ```

use std::fmt;
use std::io;

// ---------------------------------------------------------------------------
// ConfigError
// ---------------------------------------------------------------------------

/// Error returned when an algorithm parameter is invalid.
///
/// Produced by fallible constructors such as
/// [`OfflineOptimalCache::try_new`](crate::policy::belady::OfflineOptimalCache::try_new)
/// and by [`Job::try_new`](crate::schedule::Job::try_new). Carries a
/// human-readable description of which parameter failed validation.
///
/// # Example
///
/// ```
/// use algokit::policy::belady::OfflineOptimalCache;
///
/// let err = OfflineOptimalCache::try_new(-3, &[1u32, 2]).unwrap_err();
/// assert!(err.to_string().contains("capacity"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigError(String);

impl ConfigError {
    /// Creates a new `ConfigError` with the given description.
    #[inline]
    pub fn new(msg: impl Into<String>) -> Self {
        Self(msg.into())
    }

    /// Returns the error description.
    #[inline]
    pub fn message(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::error::Error for ConfigError {}

// ---------------------------------------------------------------------------
// InputError
// ---------------------------------------------------------------------------

/// What went wrong while reading batch input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputErrorKind {
    /// Input ended while a value was still expected.
    UnexpectedEof {
        /// Description of the missing value.
        expected: &'static str,
    },
    /// A token could not be parsed as an integer of the required width.
    InvalidInteger {
        /// The offending token.
        token: String,
    },
    /// A declared count (instances, requests, nodes, jobs) was negative.
    NegativeCount {
        /// The declared value.
        value: i64,
    },
    /// A DFS node line contained no label.
    BlankLine,
    /// Non-whitespace input remained after the last instance.
    TrailingInput {
        /// The first unexpected token.
        token: String,
    },
}

/// Error returned when batch input is malformed.
///
/// Records the 1-based instance number when the failure happened while
/// reading an instance (as opposed to the batch header or trailer).
///
/// # Example
///
/// ```
/// use algokit::input::Scanner;
///
/// let mut scanner = Scanner::new("12 abc");
/// assert_eq!(scanner.next_int::<i64>(), Ok(12));
///
/// let err = scanner.next_int::<i64>().unwrap_err();
/// assert!(err.to_string().contains("abc"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputError {
    kind: InputErrorKind,
    instance: Option<usize>,
}

impl InputError {
    /// Creates a new `InputError` of the given kind.
    #[inline]
    pub fn new(kind: InputErrorKind) -> Self {
        Self {
            kind,
            instance: None,
        }
    }

    /// Attaches the 1-based instance number the error occurred in.
    #[inline]
    pub fn in_instance(mut self, instance: usize) -> Self {
        self.instance = Some(instance);
        self
    }

    /// Returns the error kind.
    #[inline]
    pub fn kind(&self) -> &InputErrorKind {
        &self.kind
    }

    /// Returns the 1-based instance number, if known.
    #[inline]
    pub fn instance(&self) -> Option<usize> {
        self.instance
    }
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("malformed input")?;
        if let Some(instance) = self.instance {
            write!(f, " in instance {instance}")?;
        }
        match &self.kind {
            InputErrorKind::UnexpectedEof { expected } => {
                write!(f, ": unexpected end of input, expected {expected}")
            },
            InputErrorKind::InvalidInteger { token } => {
                write!(f, ": `{token}` is not a valid integer")
            },
            InputErrorKind::NegativeCount { value } => {
                write!(f, ": declared count {value} is negative")
            },
            InputErrorKind::BlankLine => f.write_str(": node line has no label"),
            InputErrorKind::TrailingInput { token } => {
                write!(f, ": unexpected trailing input starting at `{token}`")
            },
        }
    }
}

impl std::error::Error for InputError {}

// ---------------------------------------------------------------------------
// BatchError
// ---------------------------------------------------------------------------

/// Error returned by [`run_batch`](crate::batch::run_batch).
#[derive(Debug)]
pub enum BatchError {
    /// Input could not be parsed.
    Input(InputError),
    /// An instance carried an invalid parameter.
    Config {
        /// 1-based instance number.
        instance: usize,
        /// The underlying validation failure.
        source: ConfigError,
    },
    /// Reading input or writing results failed.
    Io(io::Error),
}

impl fmt::Display for BatchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BatchError::Input(err) => fmt::Display::fmt(err, f),
            BatchError::Config { instance, source } => {
                write!(f, "invalid parameter in instance {instance}: {source}")
            },
            BatchError::Io(err) => write!(f, "i/o error: {err}"),
        }
    }
}

impl std::error::Error for BatchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            BatchError::Input(err) => Some(err),
            BatchError::Config { source, .. } => Some(source),
            BatchError::Io(err) => Some(err),
        }
    }
}

impl From<InputError> for BatchError {
    fn from(err: InputError) -> Self {
        BatchError::Input(err)
    }
}

impl From<io::Error> for BatchError {
    fn from(err: io::Error) -> Self {
        BatchError::Io(err)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
