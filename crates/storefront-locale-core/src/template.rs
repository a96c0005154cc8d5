// crates/storefront-locale-core/src/template.rs
// ============================================================================
// Module: Message Templates
// Description: Parsed message templates with named `{placeholder}` slots.
// Purpose: Validate template syntax once and interpolate in a single pass.
// Dependencies: thiserror
// ============================================================================

//! ## Overview
//! Templates are parsed when a catalog is built, so malformed syntax is a
//! build-time defect rather than a request-time surprise.
//!
//! ## Invariants
//! - Placeholder names match `[a-z][a-z0-9_]*`.
//! - `{{` and `}}` render as literal braces.
//! - Substituted values are never re-scanned for placeholders.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeSet;

use thiserror::Error;

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Template syntax errors, each carrying the byte offset of the problem.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TemplateError {
    /// `{` with no matching `}`.
    #[error("unclosed '{{' at byte {0}")]
    Unclosed(usize),
    /// `}` with no opening `{`.
    #[error("unmatched '}}' at byte {0}")]
    UnmatchedClose(usize),
    /// `{}` with no name.
    #[error("empty placeholder at byte {0}")]
    EmptyPlaceholder(usize),
    /// A name outside `[a-z][a-z0-9_]*`.
    #[error("placeholder '{name}' at byte {offset} must match [a-z][a-z0-9_]*")]
    InvalidPlaceholder {
        /// Offending name.
        name: String,
        /// Byte offset of the opening brace.
        offset: usize,
    },
}

// ============================================================================
// SECTION: Types
// ============================================================================

/// A piece of a parsed template.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    /// Text emitted as-is.
    Literal(String),
    /// Named slot.
    Placeholder(String),
}

/// A validated message template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    /// Original template text.
    source: String,
    /// Parsed literal and placeholder segments.
    segments: Vec<Segment>,
}

impl Template {
    /// Parses `source` into a template.
    ///
    /// # Errors
    ///
    /// Returns [`TemplateError`] when braces are unbalanced or a placeholder
    /// name is invalid.
    pub fn parse(source: impl Into<String>) -> Result<Self, TemplateError> {
        let source = source.into();
        let segments = parse_segments(&source)?;
        Ok(Self {
            source,
            segments,
        })
    }

    /// Returns the original template text.
    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Returns the set of declared placeholder names.
    #[must_use]
    pub fn placeholders(&self) -> BTreeSet<&str> {
        self.segments
            .iter()
            .filter_map(|segment| match segment {
                Segment::Placeholder(name) => Some(name.as_str()),
                Segment::Literal(_) => None,
            })
            .collect()
    }

    /// Renders the template, asking `lookup` for each placeholder value.
    ///
    /// Placeholders `lookup` cannot fill stay in the output as `{name}`.
    pub fn render<'v, F>(&self, lookup: F) -> String
    where
        F: Fn(&str) -> Option<&'v str>,
    {
        let mut output = String::with_capacity(self.source.len());
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => output.push_str(text),
                Segment::Placeholder(name) => match lookup(name.as_str()) {
                    Some(value) => output.push_str(value),
                    None => {
                        output.push('{');
                        output.push_str(name);
                        output.push('}');
                    }
                },
            }
        }
        output
    }
}

// ============================================================================
// SECTION: Parsing
// ============================================================================

/// Splits template text into segments.
fn parse_segments(source: &str) -> Result<Vec<Segment>, TemplateError> {
    let bytes = source.as_bytes();
    let mut segments = Vec::new();
    let mut literal = String::new();
    let mut literal_start = 0usize;
    let mut index = 0usize;
    while index < bytes.len() {
        match bytes[index] {
            b'{' if bytes.get(index + 1) == Some(&b'{') => {
                literal.push_str(&source[literal_start .. index]);
                literal.push('{');
                index += 2;
                literal_start = index;
            }
            b'}' if bytes.get(index + 1) == Some(&b'}') => {
                literal.push_str(&source[literal_start .. index]);
                literal.push('}');
                index += 2;
                literal_start = index;
            }
            b'{' => {
                literal.push_str(&source[literal_start .. index]);
                let close = source[index + 1 ..]
                    .find(['{', '}'])
                    .map(|offset| index + 1 + offset)
                    .filter(|&end| bytes[end] == b'}')
                    .ok_or(TemplateError::Unclosed(index))?;
                let name = &source[index + 1 .. close];
                validate_name(name, index)?;
                if !literal.is_empty() {
                    segments.push(Segment::Literal(std::mem::take(&mut literal)));
                }
                segments.push(Segment::Placeholder(name.to_string()));
                index = close + 1;
                literal_start = index;
            }
            b'}' => return Err(TemplateError::UnmatchedClose(index)),
            _ => index += 1,
        }
    }
    literal.push_str(&source[literal_start ..]);
    if !literal.is_empty() {
        segments.push(Segment::Literal(literal));
    }
    Ok(segments)
}

/// Checks a placeholder name against `[a-z][a-z0-9_]*`.
fn validate_name(name: &str, offset: usize) -> Result<(), TemplateError> {
    let mut chars = name.chars();
    let Some(first) = chars.next() else {
        return Err(TemplateError::EmptyPlaceholder(offset));
    };
    let valid = first.is_ascii_lowercase()
        && chars.all(|ch| ch.is_ascii_lowercase() || ch.is_ascii_digit() || ch == '_');
    if valid {
        Ok(())
    } else {
        Err(TemplateError::InvalidPlaceholder {
            name: name.to_string(),
            offset,
        })
    }
}
