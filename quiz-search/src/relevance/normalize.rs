//! Free-text normalisation into lowercase word tokens.
//!
//! Every character of the lowercased input falls into exactly one
//! [`CharClass`]:
//!
//! | Class       | Members                                   | Effect         |
//! |-------------|-------------------------------------------|----------------|
//! | `Word`      | ASCII letters and digits                  | kept           |
//! | `Separator` | Unicode whitespace                        | splits tokens  |
//! | `Stripped`  | everything else, including `_`            | removed        |
//!
//! Stripped characters are deleted in place, so `"don't"` becomes the single
//! token `"dont"` and `"snake_case"` becomes `"snakecase"`. Letters outside
//! ASCII are stripped too: `"café"` becomes `"caf"`.
//!
//! Empty tokens are never produced: empty or all-punctuation input yields an
//! empty [`TokenSequence`].

use std::fmt;

/// Classification of a single character during normalisation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharClass {
    /// Part of a token.
    Word,
    /// Token boundary.
    Separator,
    /// Dropped without splitting.
    Stripped,
}

/// Classify one (already lowercased) character.
pub fn classify(c: char) -> CharClass {
    if c.is_ascii_alphanumeric() {
        CharClass::Word
    } else if c.is_whitespace() {
        CharClass::Separator
    } else {
        CharClass::Stripped
    }
}

/// Ordered sequence of normalised word tokens.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct TokenSequence(Vec<String>);

impl TokenSequence {
    /// The tokens, in input order.
    pub fn tokens(&self) -> &[String] {
        &self.0
    }

    /// Number of tokens.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if normalisation produced no tokens.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Tokens joined by single spaces.
    pub fn joined(&self) -> String {
        self.0.join(" ")
    }

    /// Consume the sequence, returning the owned tokens.
    pub fn into_inner(self) -> Vec<String> {
        self.0
    }
}

impl fmt::Display for TokenSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.joined())
    }
}

/// Normalise `text` into a [`TokenSequence`].
///
/// Lowercases the input, removes [`CharClass::Stripped`] characters, and
/// splits on runs of whitespace. Pure and total.
///
/// # Examples
///
/// ```
/// use quiz_search::relevance::normalize;
///
/// let tokens = normalize("  Cell-Division: MITOSIS_phase  ");
/// assert_eq!(tokens.tokens(), ["celldivision", "mitosisphase"]);
/// assert!(normalize("?!").is_empty());
/// ```
pub fn normalize(text: &str) -> TokenSequence {
    let mut tokens = Vec::new();
    let mut current = String::new();

    for c in text.to_lowercase().chars() {
        match classify(c) {
            CharClass::Word => current.push(c),
            CharClass::Separator => {
                if !current.is_empty() {
                    tokens.push(std::mem::take(&mut current));
                }
            }
            CharClass::Stripped => {}
        }
    }
    if !current.is_empty() {
        tokens.push(current);
    }

    TokenSequence(tokens)
}
