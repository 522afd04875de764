//! Structured display values.

use std::fmt;

use cssparser::{ParseError as CssParseError, Parser, ParserInput, Token};

use super::colors::{is_color_function, is_hex_color, is_named_color};

/// Turns a raw declaration value into its display form.
///
/// The cascade treats the result as opaque; it is only carried along for the
/// presentation layer.
pub trait ValueFormatter {
    /// Format `value` as written for `property`.
    fn format(&self, property: &str, value: &str) -> ParsedValue;
}

impl<F> ValueFormatter for F
where
    F: Fn(&str, &str) -> ParsedValue,
{
    fn format(&self, property: &str, value: &str) -> ParsedValue {
        self(property, value)
    }
}

/// A run of value text with display meaning.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(
    feature = "serde",
    serde(tag = "kind", content = "value", rename_all = "kebab-case")
)]
pub enum ValueSegment {
    /// Plain text.
    Text(String),
    /// A color keyword, hex color or color function (gets a swatch).
    Color(String),
    /// A `url(...)` with its target.
    Url {
        /// The full `url(...)` text.
        text: String,
        /// The URL inside it.
        href: String,
    },
    /// One family name of a `font-family` list.
    FontFamily(String),
}

impl ValueSegment {
    /// The source text covered by this segment.
    pub fn text(&self) -> &str {
        match self {
            Self::Text(text) | Self::Color(text) | Self::FontFamily(text) => text,
            Self::Url { text, .. } => text,
        }
    }
}

/// A declaration value split into display segments.
///
/// Segment texts concatenate back to the raw value.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ParsedValue {
    segments: Vec<ValueSegment>,
}

impl ParsedValue {
    /// A value shown as plain text.
    pub fn plain(value: &str) -> Self {
        let mut parsed = Self::default();
        parsed.push_text(value);
        parsed
    }

    /// The display segments.
    pub fn segments(&self) -> &[ValueSegment] {
        &self.segments
    }

    /// Check if the value has no text.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Iterate over the color segments.
    pub fn colors(&self) -> impl Iterator<Item = &str> {
        self.segments.iter().filter_map(|segment| match segment {
            ValueSegment::Color(color) => Some(color.as_str()),
            _ => None,
        })
    }

    /// Append a segment, merging adjacent text.
    pub fn push(&mut self, segment: ValueSegment) {
        match segment {
            ValueSegment::Text(text) => self.push_text(&text),
            segment if segment.text().is_empty() => {}
            segment => self.segments.push(segment),
        }
    }

    fn push_text(&mut self, text: &str) {
        if text.is_empty() {
            return;
        }
        if let Some(ValueSegment::Text(last)) = self.segments.last_mut() {
            last.push_str(text);
        } else {
            self.segments.push(ValueSegment::Text(text.to_owned()));
        }
    }
}

impl fmt::Display for ParsedValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for segment in &self.segments {
            f.write_str(segment.text())?;
        }
        Ok(())
    }
}

/// Default formatter: picks out colors, URLs and font families.
#[derive(Debug, Clone, Copy, Default)]
pub struct CssValueFormatter;

impl CssValueFormatter {
    /// Create a formatter.
    pub fn new() -> Self {
        Self
    }
}

impl ValueFormatter for CssValueFormatter {
    fn format(&self, property: &str, value: &str) -> ParsedValue {
        let mut parsed = ParsedValue::default();

        if property.eq_ignore_ascii_case("font-family") {
            push_font_families(value, &mut parsed);
            return parsed;
        }

        let mut input = ParserInput::new(value);
        let mut parser = Parser::new(&mut input);
        push_tokens(&mut parser, &mut parsed);
        parsed
    }
}

/// Segment every token up to the end of the current block.
fn push_tokens<'i>(parser: &mut Parser<'i, '_>, parsed: &mut ParsedValue) {
    loop {
        let start = parser.position();
        let token = match parser.next_including_whitespace_and_comments() {
            Ok(t) => t.clone(),
            Err(_) => break,
        };

        match token {
            Token::Hash(ref hash) | Token::IDHash(ref hash) if is_hex_color(hash) => {
                parsed.push(ValueSegment::Color(parser.slice_from(start).to_owned()));
            }
            Token::Ident(ref name) if is_named_color(name) => {
                parsed.push(ValueSegment::Color(parser.slice_from(start).to_owned()));
            }
            Token::UnquotedUrl(ref href) => {
                parsed.push(ValueSegment::Url {
                    text: parser.slice_from(start).to_owned(),
                    href: href.to_string(),
                });
            }
            Token::Function(ref name) if name.eq_ignore_ascii_case("url") => {
                let href = parser
                    .parse_nested_block(|p| {
                        let href = p.expect_string()?.to_string();
                        Ok::<_, CssParseError<'_, ()>>(href)
                    })
                    .unwrap_or_default();
                parsed.push(ValueSegment::Url {
                    text: parser.slice_from(start).to_owned(),
                    href,
                });
            }
            Token::Function(ref name) if is_color_function(name) => {
                skip_block(parser);
                parsed.push(ValueSegment::Color(parser.slice_from(start).to_owned()));
            }
            Token::Function(_)
            | Token::ParenthesisBlock
            | Token::SquareBracketBlock
            | Token::CurlyBracketBlock => {
                // Opening text, then the contents, then the closing bracket.
                parsed.push_text(parser.slice_from(start));
                let mut contents_end = None;
                let _ = parser.parse_nested_block(|p| {
                    push_tokens(p, parsed);
                    contents_end = Some(p.position());
                    Ok::<_, CssParseError<'_, ()>>(())
                });
                if let Some(end) = contents_end {
                    parsed.push_text(parser.slice_from(end));
                }
            }
            _ => parsed.push_text(parser.slice_from(start)),
        }
    }
}

fn skip_block(parser: &mut Parser<'_, '_>) {
    let _ = parser.parse_nested_block(|p| {
        while p.next_including_whitespace_and_comments().is_ok() {}
        Ok::<_, CssParseError<'_, ()>>(())
    });
}

/// Split a `font-family` list on commas, keeping separators as text.
///
/// Commas inside quoted family names do not separate families.
fn push_font_families(value: &str, parsed: &mut ParsedValue) {
    let mut start = 0;
    for (i, end) in family_separators(value)
        .into_iter()
        .chain(std::iter::once(value.len()))
        .enumerate()
    {
        if i > 0 {
            parsed.push_text(",");
        }
        let family = &value[start..end];
        let without_leading = family.trim_start();
        let name = without_leading.trim_end();
        parsed.push_text(&family[..family.len() - without_leading.len()]);
        parsed.push(ValueSegment::FontFamily(name.to_owned()));
        parsed.push_text(&without_leading[name.len()..]);
        start = end + 1;
    }
}

/// Byte offsets of the top-level commas in `value`.
fn family_separators(value: &str) -> Vec<usize> {
    let mut input = ParserInput::new(value);
    let mut parser = Parser::new(&mut input);
    let mut commas = vec![];

    loop {
        let start = parser.position();
        match parser.next_including_whitespace_and_comments() {
            Ok(Token::Comma) => commas.push(start.byte_index()),
            Ok(_) => {}
            Err(_) => break,
        }
    }
    commas
}
