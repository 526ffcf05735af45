//! The Luthor lexer is very simple-minded. It reads the bracketed form of a
//! derivation, e.g. `(S (NP (N dog)) (VP (V barks)))`, and there are three
//! categories of "tokens":
//!
//! 1. bracket: a single bracket character. Every bracket is its own token; we
//! don't merge sequences of brackets into one token.
//!
//! 2. word: a string made up solely of characters that are neither whitespace
//! nor brackets. Labels and input tokens are both words; which one a word is
//! depends on where it sits, and that is the parser's business, not ours.
//!
//! 3. whitespace: a string made up solely of whitespace characters
//!
//! Any Unicode bracket is lexed as a bracket, not as part of a word, so that a
//! stray `[` or `⟨` is reported instead of silently becoming part of a label.
//! Only `(` and `)` are accepted.

use std::iter::Peekable;
use std::str::CharIndices;

use derive_more::AsRef;
use thiserror::Error;
use unicode_brackets::UnicodeBrackets;

use crate::node::NONTERM_BRACKETS;
use crate::Spanned;

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum TokKind {
    Open,
    Close,
    Word,
    Space,
}

#[derive(PartialEq, Eq, Debug, AsRef)]
pub struct Tok<S> {
    kind: TokKind,
    #[as_ref]
    data: S,
}

impl<S> Tok<S> {
    pub fn kind(&self) -> TokKind { self.kind }
    pub fn data(&self) -> &S { &self.data }
}

impl Tok<(usize, usize)> {
    fn repackage<'a>(self, input: &'a str) -> (usize, Tok<&'a str>, usize) {
        let (i, j) = self.data;
        (i, Tok { kind: self.kind, data: &input[i..j] }, j)
    }
}

impl<IS> From<Tok<IS>> for String where IS: Into<String> {
    fn from(tok: Tok<IS>) -> String { tok.data.into() }
}

#[derive(PartialEq, Eq, Clone, Debug, Error)]
pub enum LexicalError {
    #[error("unsupported bracket `{bracket}`")]
    UnsupportedBracket { at: usize, bracket: char },
}

impl LexicalError {
    pub fn at(&self) -> usize {
        match *self {
            LexicalError::UnsupportedBracket { at, .. } => at,
        }
    }
}

trait IsWordChar { fn is_word_char(self) -> bool; }
impl IsWordChar for char {
    fn is_word_char(self) -> bool {
        !self.is_whitespace() && !self.is_open_bracket() && !self.is_close_bracket()
    }
}

pub struct Lexer<'input> {
    input: &'input str,
    chars: Peekable<CharIndices<'input>>,
}

impl<'input> Lexer<'input> {
    pub fn new(input: &'input str) -> Self {
        Lexer { input, chars: input.char_indices().peekable() }
    }
}

/// Very regular token matching (no extra context needed)
enum R {
    Bracket,
    Word,
    Space,
}

enum RegAction { Complete, Continue, }

impl R {
    fn from_start_char(c: char) -> Self {
        if c.is_whitespace() { R::Space }
        else if c.is_open_bracket() || c.is_close_bracket() { R::Bracket }
        else { R::Word }
    }

    fn action(&self, p: char) -> RegAction {
        match self {
            R::Bracket => RegAction::Complete,
            R::Word => if p.is_word_char() { RegAction::Continue } else { RegAction::Complete },
            R::Space => if p.is_whitespace() { RegAction::Continue } else { RegAction::Complete },
        }
    }

    /// `first` is the character the token started with; it decides which
    /// way a bracket faces.
    fn finalize(&self, first: char, span: (usize, usize)) -> Result<Tok<(usize, usize)>, LexicalError> {
        let (open, close) = NONTERM_BRACKETS;
        let kind = match self {
            R::Bracket if first == open => TokKind::Open,
            R::Bracket if first == close => TokKind::Close,
            R::Bracket => return Err(LexicalError::UnsupportedBracket { at: span.0, bracket: first }),
            R::Word => TokKind::Word,
            R::Space => TokKind::Space,
        };
        Ok(Tok { kind, data: span })
    }
}

impl<'input> Lexer<'input> {
    fn read_regular(&mut self, (start, c): (usize, char)) -> <Self as Iterator>::Item {
        let r = R::from_start_char(c);
        let mut end = start + c.len_utf8();
        while let Some(&(i, p)) = self.chars.peek() {
            match r.action(p) {
                RegAction::Continue => {
                    self.chars.next();
                    end = i + p.len_utf8();
                }
                RegAction::Complete => break,
            }
        }
        r.finalize(c, (start, end)).map(|t| t.repackage(self.input))
    }
}

impl<'input> Iterator for Lexer<'input> {
    type Item = Spanned<Tok<&'input str>, usize, LexicalError>;
    fn next(&mut self) -> Option<Self::Item> {
        let ic = self.chars.next()?;
        Some(self.read_regular(ic))
    }
}

#[cfg(test)]
#[path = "tests/luthor.rs"]
mod tests_for_luthor;
