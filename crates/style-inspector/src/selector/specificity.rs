//! CSS specificity calculation.

use cssparser::{ParseError, Parser, ParserInput, Token};

/// CSS specificity as (a, b, c) tuple.
///
/// - a: ID selectors
/// - b: Class selectors, attributes, pseudo-classes
/// - c: Type selectors, pseudo-elements
///
/// Compared lexicographically: (1,0,0) > (0,99,99)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Specificity(pub u32, pub u32, pub u32);

/// What the previous token opened, if it needs a name to complete.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Pending {
    Nothing,
    Dot,
    Colon,
    DoubleColon,
}

impl Specificity {
    /// Zero specificity (universal selector, inline styles).
    pub const ZERO: Self = Self(0, 0, 0);

    /// Calculate the specificity of a single selector from its source text.
    ///
    /// The selector is tokenized rather than parsed into a full selector
    /// tree. Quoted strings and attribute selector contents never count as
    /// ids or classes, and `::name` counts as a type. `:not(...)` adds
    /// nothing itself, but its argument is counted like the rest of the
    /// selector.
    pub fn of_selector_text(selector: &str) -> Self {
        let mut input = ParserInput::new(selector);
        let mut parser = Parser::new(&mut input);
        let mut specificity = Self::ZERO;
        specificity.add_tokens(&mut parser);
        specificity
    }

    /// Count every token up to the end of the current block.
    fn add_tokens(&mut self, parser: &mut Parser<'_, '_>) {
        let mut pending = Pending::Nothing;

        loop {
            let token = match parser.next_including_whitespace() {
                Ok(t) => t.clone(),
                Err(_) => break,
            };

            pending = match (pending, &token) {
                (Pending::Dot, Token::Ident(_)) => {
                    self.1 += 1;
                    Pending::Nothing
                }
                (Pending::Colon, Token::Colon) => Pending::DoubleColon,
                (Pending::Colon, Token::Ident(_)) => {
                    self.1 += 1;
                    Pending::Nothing
                }
                (Pending::Colon, Token::Function(name)) => {
                    if name.eq_ignore_ascii_case("not") {
                        let _ = parser.parse_nested_block(|p| {
                            self.add_tokens(p);
                            Ok::<_, ParseError<'_, ()>>(())
                        });
                    } else {
                        self.1 += 1;
                    }
                    Pending::Nothing
                }
                (Pending::DoubleColon, Token::Ident(_) | Token::Function(_)) => {
                    self.2 += 1;
                    Pending::Nothing
                }
                (_, token) => self.add_token(token),
            };
        }
    }

    /// Count a token that starts a new simple selector.
    fn add_token(&mut self, token: &Token<'_>) -> Pending {
        match token {
            Token::IDHash(_) | Token::Hash(_) => self.0 += 1,
            // Attribute contents, quoted values included, are one block.
            Token::SquareBracketBlock => self.1 += 1,
            Token::Ident(_) => self.2 += 1,
            Token::Delim('.') => return Pending::Dot,
            Token::Colon => return Pending::Colon,
            _ => {}
        }
        Pending::Nothing
    }

    /// Get the ID selector count.
    pub fn ids(&self) -> u32 {
        self.0
    }

    /// Get the class/attribute/pseudo-class count.
    pub fn classes(&self) -> u32 {
        self.1
    }

    /// Get the type/pseudo-element count.
    pub fn types(&self) -> u32 {
        self.2
    }

    /// Single number shown on specificity badges: `a*100 + b*10 + c`.
    pub fn score(&self) -> u32 {
        self.0
            .saturating_mul(100)
            .saturating_add(self.1.saturating_mul(10))
            .saturating_add(self.2)
    }

    /// Tooltip text for specificity badges.
    pub fn title(&self) -> String {
        format!("Specificity: {},{},{}", self.0, self.1, self.2)
    }
}

impl std::fmt::Display for Specificity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({},{},{})", self.0, self.1, self.2)
    }
}
