//! Semantic error types for the stepmatch library.
//!
//! This module defines the error hierarchy for stepmatch, following the
//! principle of using semantic error enums (via `thiserror`) for conditions the
//! caller might inspect or map to a report status, while reserving opaque
//! errors (`eyre::Report`) for the application boundary.

use std::sync::Arc;

use thiserror::Error;

use crate::registry::Keyword;

/// Errors raised while compiling a step pattern.
///
/// A pattern error is fatal for the binding being registered: the binding is
/// not added to the registry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PatternError {
    /// A `{` was opened but never closed.
    #[error("unclosed placeholder at byte {position} in pattern '{pattern}'")]
    UnclosedPlaceholder {
        /// The pattern being compiled.
        pattern: String,
        /// Byte offset of the opening brace.
        position: usize,
    },

    /// The placeholder name is empty or not an identifier.
    #[error("invalid placeholder name '{name}' in pattern '{pattern}'")]
    InvalidName {
        /// The pattern being compiled.
        pattern: String,
        /// The offending name.
        name: String,
    },

    /// The placeholder carries a type tag other than `d`, `f` or `w`.
    #[error("unknown type '{tag}' for placeholder '{name}' in pattern '{pattern}'")]
    UnknownType {
        /// The pattern being compiled.
        pattern: String,
        /// The placeholder name.
        name: String,
        /// The unrecognised type tag.
        tag: String,
    },

    /// The same placeholder name appears more than once.
    #[error("placeholder '{name}' appears more than once in pattern '{pattern}'")]
    DuplicateName {
        /// The pattern being compiled.
        pattern: String,
        /// The repeated name.
        name: String,
    },
}

/// Errors raised while converting captured text into a typed value.
///
/// Conversion failures never surface to callers of resolution: the candidate
/// capture is rejected and matching continues with other spans and bindings.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConversionError {
    /// The text could not be represented as a signed 64-bit integer.
    #[error("'{text}' is not a valid integer")]
    Integer {
        /// The captured text.
        text: String,
    },

    /// The text could not be represented as a finite float.
    #[error("'{text}' is not a valid float")]
    Float {
        /// The captured text.
        text: String,
    },
}

/// Errors raised by typed accessors on context attributes and step arguments.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValueError {
    /// No value is stored under the requested name.
    #[error("no value named '{name}'")]
    Missing {
        /// The requested name.
        name: String,
    },

    /// A value exists but has a different kind.
    #[error("value '{name}' is {found}, expected {expected}")]
    KindMismatch {
        /// The requested name.
        name: String,
        /// The kind the accessor expected.
        expected: &'static str,
        /// The kind actually stored.
        found: &'static str,
    },
}

/// Errors raised by step handlers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HandlerError {
    /// An assertion made by the handler did not hold.
    #[error("assertion failed: {message}")]
    Assertion {
        /// Description of the failed assertion.
        message: String,
    },

    /// The handler read a context attribute or argument of the wrong shape.
    #[error(transparent)]
    Value(#[from] ValueError),
}

impl HandlerError {
    /// Builds an assertion failure from a message.
    pub fn assertion(message: impl Into<String>) -> Self {
        Self::Assertion {
            message: message.into(),
        }
    }
}

/// Errors raised while resolving or invoking a step.
#[derive(Debug, Clone, Error)]
pub enum StepError {
    /// No binding matches the sentence under its keyword or the wildcard.
    #[error("undefined step: {keyword} {sentence}")]
    NoMatch {
        /// The effective keyword used for resolution.
        keyword: Keyword,
        /// The sentence text.
        sentence: String,
    },

    /// The resolved handler failed.
    #[error("step failed: {keyword} {sentence}: {source}")]
    Failure {
        /// The effective keyword used for resolution.
        keyword: Keyword,
        /// The sentence text.
        sentence: String,
        /// The handler error.
        source: HandlerError,
    },
}

/// Errors raised while reading or parsing feature files.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FeatureError {
    /// The feature file or directory could not be read.
    #[error("failed to read '{path}': {message}")]
    Read {
        /// The path being read.
        path: String,
        /// A description of the I/O failure.
        message: String,
    },

    /// The feature text is not valid Gherkin.
    #[error("{path}: {message}")]
    Syntax {
        /// The path of the feature, or `<inline>` for in-memory text.
        path: String,
        /// The Gherkin parser's report, including line and column.
        message: String,
    },

    /// The feature uses a construct the runner does not support.
    #[error("{path}:{line}: {message}")]
    Parse {
        /// The path of the feature, or `<inline>` for in-memory text.
        path: String,
        /// One-based line number.
        line: usize,
        /// A description of the problem.
        message: String,
    },
}

/// Errors that can occur during configuration loading and validation.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be parsed.
    #[error("failed to parse configuration file: {message}")]
    ParseError {
        /// A description of the parse error.
        message: String,
    },

    /// A configuration value failed validation.
    #[error("invalid configuration value for '{field}': {reason}")]
    InvalidValue {
        /// The name of the invalid field.
        field: String,
        /// The reason the value is invalid.
        reason: String,
    },

    /// The `OrthoConfig` library returned an error during configuration loading.
    ///
    /// This wraps errors from the layered configuration system, including:
    /// - Configuration file parsing errors
    /// - Environment variable parsing errors
    /// - Missing required fields after layer merging
    #[error("configuration loading failed: {0}")]
    OrthoConfig(Arc<ortho_config::OrthoError>),
}

/// Top-level error type for the stepmatch library.
///
/// This enum aggregates the domain-specific errors into a single type. At the
/// application boundary (main.rs) these errors are converted to
/// `eyre::Report` for human-readable reporting.
#[derive(Debug, Error)]
pub enum StepmatchError {
    /// A step pattern failed to compile.
    #[error(transparent)]
    Pattern(#[from] PatternError),

    /// A step could not be resolved or failed.
    #[error(transparent)]
    Step(#[from] StepError),

    /// A feature file could not be read or parsed.
    #[error(transparent)]
    Feature(#[from] FeatureError),

    /// An error occurred during configuration.
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// A specialised `Result` type for stepmatch operations.
pub type Result<T> = std::result::Result<T, StepmatchError>;

#[cfg(test)]
mod tests {
    use super::*;
    use eyre::Report;
    use rstest::{fixture, rstest};

    /// Fixture providing a sample pattern text.
    #[fixture]
    fn pattern() -> String {
        String::from("the first number is {number:x}")
    }

    #[rstest]
    fn pattern_error_unknown_type_displays_correctly(pattern: String) {
        let error = PatternError::UnknownType {
            pattern,
            name: String::from("number"),
            tag: String::from("x"),
        };
        assert_eq!(
            error.to_string(),
            "unknown type 'x' for placeholder 'number' in pattern 'the first number is {number:x}'"
        );
    }

    #[rstest]
    fn pattern_error_unclosed_displays_position() {
        let error = PatternError::UnclosedPlaceholder {
            pattern: String::from("I add {number"),
            position: 6,
        };
        assert_eq!(
            error.to_string(),
            "unclosed placeholder at byte 6 in pattern 'I add {number'"
        );
    }

    #[rstest]
    #[case(
        ValueError::Missing { name: String::from("price") },
        "no value named 'price'"
    )]
    #[case(
        ValueError::KindMismatch {
            name: String::from("price"),
            expected: "float",
            found: "text",
        },
        "value 'price' is text, expected float"
    )]
    fn value_error_displays_correctly(#[case] error: ValueError, #[case] expected: &str) {
        assert_eq!(error.to_string(), expected);
    }

    #[rstest]
    fn handler_error_wraps_value_error_transparently() {
        let error = HandlerError::from(ValueError::Missing {
            name: String::from("result"),
        });
        assert_eq!(error.to_string(), "no value named 'result'");
    }

    #[rstest]
    fn step_failure_includes_keyword_sentence_and_cause() {
        let error = StepError::Failure {
            keyword: Keyword::Then,
            sentence: String::from("the result is 7"),
            source: HandlerError::assertion("Expected 7, got 5"),
        };
        assert_eq!(
            error.to_string(),
            "step failed: then the result is 7: assertion failed: Expected 7, got 5"
        );
    }

    #[rstest]
    fn step_no_match_displays_as_undefined() {
        let error = StepError::NoMatch {
            keyword: Keyword::When,
            sentence: String::from("I divide by zero"),
        };
        assert_eq!(error.to_string(), "undefined step: when I divide by zero");
    }

    #[rstest]
    fn feature_parse_error_displays_location() {
        let error = FeatureError::Parse {
            path: String::from("features/math.feature"),
            line: 4,
            message: String::from("data tables are not supported"),
        };
        assert_eq!(
            error.to_string(),
            "features/math.feature:4: data tables are not supported"
        );
    }

    #[rstest]
    fn feature_syntax_error_displays_path_and_report() {
        let error = FeatureError::Syntax {
            path: String::from("features/math.feature"),
            message: String::from("Error at 3:5: {\"Given\"}"),
        };
        assert_eq!(
            error.to_string(),
            "features/math.feature: Error at 3:5: {\"Given\"}"
        );
    }

    #[rstest]
    fn config_error_ortho_config_displays_correctly() {
        let ortho_error = ortho_config::OrthoError::Validation {
            key: String::from("logging.level"),
            message: String::from("unknown level"),
        };
        let error = ConfigError::OrthoConfig(Arc::new(ortho_error));
        assert_eq!(
            error.to_string(),
            "configuration loading failed: Validation failed for 'logging.level': unknown level"
        );
    }

    #[rstest]
    #[case(
        StepmatchError::from(PatternError::InvalidName {
            pattern: String::from("a {} b"),
            name: String::new(),
        }),
        "invalid placeholder name '' in pattern 'a {} b'"
    )]
    #[case(
        StepmatchError::from(ConfigError::InvalidValue {
            field: String::from("STEPMATCH_RUNNER_DRY_RUN"),
            reason: String::from("expected bool (true/false), got 'maybe'"),
        }),
        "invalid configuration value for 'STEPMATCH_RUNNER_DRY_RUN': expected bool (true/false), got 'maybe'"
    )]
    #[case(
        StepmatchError::from(StepError::NoMatch {
            keyword: Keyword::Given,
            sentence: String::from("nothing"),
        }),
        "undefined step: given nothing"
    )]
    fn eyre_report_preserves_error_messages(
        #[case] error: StepmatchError,
        #[case] expected: &str,
    ) {
        let report = Report::from(error);
        assert_eq!(report.to_string(), expected);
    }
}
