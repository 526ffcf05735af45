use std::fmt::{self, Display, Formatter};

use crate::earley::{Bin, Chart, Item};
use crate::grammar::{Grammar, NonTerm, Rhs, Term};

const DOT: &str = "•";

impl Rhs {
    fn symbols(&self) -> Vec<&str> {
        match self {
            Rhs::Pair(NonTerm(b), NonTerm(c)) => vec![&**b, &**c],
            Rhs::Unit(NonTerm(b)) => vec![&**b],
            Rhs::Word(Term(w)) => vec![&**w],
        }
    }
}

impl Display for Rhs {
    fn fmt(&self, w: &mut Formatter) -> fmt::Result {
        write!(w, "{}", self.symbols().join(" "))
    }
}

/// `[NP -> Det • N, 0, 1] (NP (Det the))`
impl Display for Item {
    fn fmt(&self, w: &mut Formatter) -> fmt::Result {
        let mut symbols = self.rhs().symbols();
        symbols.insert(self.dot(), DOT);
        write!(w, "[{} -> {}, {}, {}]", self.lhs(), symbols.join(" "), self.origin(), self.current())?;
        match self.derivation() {
            Some(tree) => write!(w, " {}", tree),
            None => Ok(()),
        }
    }
}

impl Display for Bin {
    fn fmt(&self, w: &mut Formatter) -> fmt::Result {
        for item in self.items() {
            writeln!(w, "{}", item)?;
        }
        Ok(())
    }
}

impl Display for Chart {
    fn fmt(&self, w: &mut Formatter) -> fmt::Result {
        for (k, bin) in self.bins().iter().enumerate() {
            writeln!(w, "== bin {} ==", k)?;
            write!(w, "{}", bin)?;
        }
        Ok(())
    }
}

/// Rule text the loader reads back into an equal grammar: binary rules
/// first, then unit rules, then the lexicon.
impl Display for Grammar {
    fn fmt(&self, w: &mut Formatter) -> fmt::Result {
        for (a, pairs) in self.binary.iter() {
            for (b, c) in pairs.iter() {
                writeln!(w, "{} -> {} {}", a, b, c)?;
            }
        }
        for (a, units) in self.unit.iter() {
            for b in units.iter() {
                writeln!(w, "{} -> {}", a, b)?;
            }
        }
        for (a, words) in self.terminal.iter() {
            let words: Vec<&str> = words.iter().map(|t| t.as_ref()).collect();
            writeln!(w, "{} -> {}", a, words.join(" | "))?;
        }
        Ok(())
    }
}
