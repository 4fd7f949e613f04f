//! Step pattern compilation and matching.
//!
//! A pattern is literal text interleaved with `{name}` or `{name:type}`
//! placeholders. Literal text is matched verbatim: quotes, parentheses and
//! other characters that would be syntax in a regular expression carry no
//! special meaning. `{{` and `}}` stand for literal braces.
//!
//! | Tag    | Matches                                         | Converts to |
//! |--------|-------------------------------------------------|-------------|
//! | `d`    | optional `-` followed by ASCII digits           | `i64`       |
//! | `f`    | optional `-`, digits with at most one `.`       | `f64`       |
//! | `w`    | letters, digits and underscores                 | text        |
//! | (none) | shortest non-empty run bounded by what follows  | text        |

mod args;
mod matcher;


use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

pub use args::{Argument, StepArgs};

use crate::context::Value;
use crate::error::{ConversionError, PatternError};

/// The conversion applied to a placeholder's captured text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaceholderKind {
    /// `{name:d}`: signed integer.
    Integer,
    /// `{name:f}`: decimal number.
    Float,
    /// `{name:w}`: a single word.
    Word,
    /// `{name}`: any non-empty text.
    Any,
}

impl PlaceholderKind {
    fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "d" => Some(Self::Integer),
            "f" => Some(Self::Float),
            "w" => Some(Self::Word),
            _ => None,
        }
    }

    /// Returns the type tag written after the colon, if any.
    #[must_use]
    pub const fn tag(self) -> Option<char> {
        match self {
            Self::Integer => Some('d'),
            Self::Float => Some('f'),
            Self::Word => Some('w'),
            Self::Any => None,
        }
    }

    pub(crate) fn convert(self, text: &str) -> Result<Value, ConversionError> {
        match self {
            Self::Integer => text
                .parse::<i64>()
                .map(Value::Int)
                .map_err(|_| ConversionError::Integer {
                    text: text.to_owned(),
                }),
            Self::Float => match text.parse::<f64>() {
                Ok(value) if value.is_finite() => Ok(Value::Float(value)),
                _ => Err(ConversionError::Float {
                    text: text.to_owned(),
                }),
            },
            Self::Word | Self::Any => Ok(Value::Text(text.to_owned())),
        }
    }
}

/// A named slot in a pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placeholder {
    name: String,
    kind: PlaceholderKind,
}

impl Placeholder {
    /// Returns the placeholder name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the placeholder kind.
    #[must_use]
    pub const fn kind(&self) -> PlaceholderKind {
        self.kind
    }
}

/// One element of a compiled pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Text that must appear verbatim.
    Literal(String),
    /// A slot capturing part of the sentence.
    Placeholder(Placeholder),
}

/// A compiled, immutable step pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pattern {
    source: String,
    segments: Vec<Segment>,
}

impl Pattern {
    /// Compiles a pattern string.
    ///
    /// # Errors
    ///
    /// Returns [`PatternError`] for an unclosed `{`, an empty or invalid
    /// placeholder name, a repeated name or an unknown type tag.
    pub fn compile(source: &str) -> Result<Self, PatternError> {
        let segments = Compiler::new(source).run()?;
        Ok(Self {
            source: source.to_owned(),
            segments,
        })
    }

    /// Returns the pattern text as registered.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// Returns the compiled segments in order.
    #[must_use]
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Iterates over the placeholders in left-to-right order.
    pub fn placeholders(&self) -> impl Iterator<Item = &Placeholder> {
        self.segments.iter().filter_map(|segment| match segment {
            Segment::Placeholder(placeholder) => Some(placeholder),
            Segment::Literal(_) => None,
        })
    }

    /// Matches the whole of `sentence` against the pattern.
    ///
    /// Returns the converted placeholder values in pattern order, or `None`
    /// when the sentence does not conform to the pattern.
    #[must_use]
    pub fn captures(&self, sentence: &str) -> Option<StepArgs> {
        matcher::match_sentence(&self.segments, sentence).map(StepArgs::new)
    }

    /// Returns whether `sentence` conforms to the pattern.
    #[must_use]
    pub fn is_match(&self, sentence: &str) -> bool {
        self.captures(sentence).is_some()
    }
}

impl FromStr for Pattern {
    type Err = PatternError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::compile(s)
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

/// Single-pass scanner turning pattern text into segments.
struct Compiler<'a> {
    source: &'a str,
    segments: Vec<Segment>,
    literal: String,
    names: BTreeSet<String>,
}

impl<'a> Compiler<'a> {
    fn new(source: &'a str) -> Self {
        Self {
            source,
            segments: Vec::new(),
            literal: String::new(),
            names: BTreeSet::new(),
        }
    }

    fn run(mut self) -> Result<Vec<Segment>, PatternError> {
        let mut chars = self.source.char_indices().peekable();
        while let Some((position, ch)) = chars.next() {
            match ch {
                '{' if chars.peek().is_some_and(|&(_, next)| next == '{') => {
                    chars.next();
                    self.literal.push('{');
                }
                '}' if chars.peek().is_some_and(|&(_, next)| next == '}') => {
                    chars.next();
                    self.literal.push('}');
                }
                '{' => {
                    let mut body = String::new();
                    let mut closed = false;
                    for (_, inner) in chars.by_ref() {
                        match inner {
                            '}' => {
                                closed = true;
                                break;
                            }
                            '{' => break,
                            other => body.push(other),
                        }
                    }
                    if !closed {
                        return Err(PatternError::UnclosedPlaceholder {
                            pattern: self.source.to_owned(),
                            position,
                        });
                    }
                    let placeholder = self.placeholder(&body)?;
                    self.flush_literal();
                    self.segments.push(Segment::Placeholder(placeholder));
                }
                other => self.literal.push(other),
            }
        }
        self.flush_literal();
        Ok(self.segments)
    }

    fn placeholder(&mut self, body: &str) -> Result<Placeholder, PatternError> {
        let (name, tag) = match body.split_once(':') {
            Some((name, tag)) => (name, Some(tag)),
            None => (body, None),
        };
        if !is_identifier(name) {
            return Err(PatternError::InvalidName {
                pattern: self.source.to_owned(),
                name: name.to_owned(),
            });
        }
        let kind = match tag {
            None => PlaceholderKind::Any,
            Some(type_tag) => {
                PlaceholderKind::from_tag(type_tag).ok_or_else(|| PatternError::UnknownType {
                    pattern: self.source.to_owned(),
                    name: name.to_owned(),
                    tag: type_tag.to_owned(),
                })?
            }
        };
        if !self.names.insert(name.to_owned()) {
            return Err(PatternError::DuplicateName {
                pattern: self.source.to_owned(),
                name: name.to_owned(),
            });
        }
        Ok(Placeholder {
            name: name.to_owned(),
            kind,
        })
    }

    fn flush_literal(&mut self) {
        if !self.literal.is_empty() {
            self.segments
                .push(Segment::Literal(std::mem::take(&mut self.literal)));
        }
    }
}

fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    chars
        .next()
        .is_some_and(|first| first.is_alphabetic() || first == '_')
        && chars.all(|ch| ch.is_alphanumeric() || ch == '_')
}
