//! Earley parsing for grammars in Chomsky Normal Form, enumerating every
//! derivation of an ambiguous sentence rather than stopping at the first.
//!
//! ```text
//! let grammar: Grammar = "S -> NP VP\nNP -> N\nVP -> V N\nN -> dog | cat\nV -> chased".parse()?;
//! let parse = Session::new(&grammar, Config::default()).parse_str("dog chased cat")?;
//! for tree in parse.trees() {
//!     println!("{}", tree.rendered());
//! }
//! ```

pub type Spanned<Tok, Loc, Error> = std::result::Result<(Loc, Tok, Loc), Error>;

mod display;
mod luthor;

pub mod config;
pub mod earley;
pub mod error;
pub mod grammar;
pub mod node;
pub mod rendering;
pub mod session;

pub use config::{Config, Limits};
pub use error::{Error, FragmentError, GrammarFormatError, Result};
pub use grammar::{Grammar, GrammarBuilder, NonTerm, Rhs, Term};
pub use luthor::LexicalError;
pub use node::Tree;
pub use rendering::{render_bracketed, Rendered};
pub use session::{Outcome, Parse, Session};

pub trait ParseMatches {
    fn has_parse(&self) -> bool;
    fn no_parse(&self) -> bool { ! self.has_parse() }
}

#[cfg(test)]
mod tests;
