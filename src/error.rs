use std::time::Duration;

use thiserror::Error;

use crate::luthor::LexicalError;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("grammar line {line}: {source}")]
    GrammarFormat { line: usize, source: GrammarFormatError },
    #[error("could not read grammar: {0}")]
    Io(#[from] std::io::Error),
    #[error("chart grew past {limit} items")]
    ItemBudgetExhausted { limit: usize },
    #[error("parse ran longer than {limit:?}")]
    TimeBudgetExhausted { limit: Duration },
    #[error("malformed fragment at byte {at}: {source}")]
    Fragment { at: usize, source: FragmentError },
}

/// A rule line the loader refuses. Every variant is fatal to the run: we
/// never start a chart over a grammar we could only partially read.
#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum GrammarFormatError {
    #[error("missing `->`")]
    MissingArrow,
    #[error("empty left-hand side")]
    EmptyLhs,
    #[error("left-hand side `{symbol}` is not a single nonterminal")]
    BadLhs { symbol: String },
    #[error("empty right-hand side")]
    EmptyRhs,
    #[error("right-hand side has {len} symbols; only one or two are allowed")]
    NotCnf { len: usize },
    #[error("`{symbol}` appears in a binary rule but is not a nonterminal")]
    TerminalInBinary { symbol: String },
    #[error("`{symbol}` is reserved for the start item")]
    ReservedSymbol { symbol: String },
}

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum FragmentError {
    #[error(transparent)]
    Lex(LexicalError),
    #[error("no tree")]
    Empty,
    #[error("`)` without a matching `(`")]
    UnexpectedClose,
    #[error("token outside of a leaf")]
    UnexpectedWord,
    #[error("`(` is never closed")]
    Unclosed,
    #[error("`(` must be followed by a label")]
    MissingLabel,
    #[error("node has no children")]
    EmptyNode,
    #[error("input continues after the tree")]
    TrailingInput,
}
