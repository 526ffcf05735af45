//! Line-oriented rule text:
//!
//!   # comment
//!   S -> NP VP
//!   NP -> N | Det N
//!   N -> dog | cat
//!
//! Two symbols on a side make a binary rule, one symbol starting with an
//! uppercase letter makes a unit rule, and anything else is a terminal.

use std::path::Path;
use std::str::FromStr;

use log::debug;
use regex::Regex;

use crate::error::{Error, GrammarFormatError};
use crate::grammar::{Grammar, NonTerm, START};

pub(crate) struct Loader {
    rule: Regex,
    nonterm: Regex,
}

impl Loader {
    pub(crate) fn new() -> Self {
        Loader {
            rule: Regex::new(r"^(?P<lhs>.*?)\s*->\s*(?P<rhs>.*)$").expect("rule pattern is valid"),
            nonterm: Regex::new(r"^\p{Lu}\S*$").expect("nonterminal pattern is valid"),
        }
    }

    fn is_nonterm(&self, s: &str) -> bool { self.nonterm.is_match(s) }

    pub(crate) fn load(&self, text: &str) -> Result<Grammar, Error> {
        let mut grammar = Grammar::empty();
        for (i, line) in text.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            self.load_line(&mut grammar, line)
                .map_err(|source| Error::GrammarFormat { line: i + 1, source })?;
        }
        debug!("loaded {} rules over {} nonterminals",
               grammar.rule_count(), grammar.nonterms().len());
        Ok(grammar)
    }

    fn load_line(&self, grammar: &mut Grammar, line: &str) -> Result<(), GrammarFormatError> {
        use GrammarFormatError::*;

        let caps = self.rule.captures(line).ok_or(MissingArrow)?;
        let lhs = caps.name("lhs").map_or("", |m| m.as_str());
        let rhs = caps.name("rhs").map_or("", |m| m.as_str());

        if lhs.is_empty() {
            return Err(EmptyLhs);
        }
        if lhs == START {
            return Err(ReservedSymbol { symbol: lhs.to_string() });
        }
        if !self.is_nonterm(lhs) {
            return Err(BadLhs { symbol: lhs.to_string() });
        }
        let a = NonTerm::from(lhs);

        for alt in rhs.split('|') {
            let symbols: Vec<&str> = alt.split_whitespace().collect();
            match symbols[..] {
                [] => return Err(EmptyRhs),
                [b, c] => {
                    for s in [b, c] {
                        if !self.is_nonterm(s) {
                            return Err(TerminalInBinary { symbol: s.to_string() });
                        }
                    }
                    grammar.add_binary(a.clone(), b.into(), c.into());
                }
                [b] if self.is_nonterm(b) => grammar.add_unit(a.clone(), b.into()),
                [w] => grammar.add_terminal(a.clone(), w.into()),
                _ => return Err(NotCnf { len: symbols.len() }),
            }
        }
        Ok(())
    }
}

impl FromStr for Grammar {
    type Err = Error;
    fn from_str(text: &str) -> Result<Grammar, Error> {
        Loader::new().load(text)
    }
}

impl Grammar {
    pub fn from_path(path: impl AsRef<Path>) -> Result<Grammar, Error> {
        let text = fs_err::read_to_string(path.as_ref())?;
        text.parse()
    }
}
