//! The compiled rule tables a chart is parsed against.
//!
//! A grammar here is in Chomsky Normal Form, extended with a tier of unit
//! productions:
//!
//!   A -> B C      <binary>
//!   A -> B       <unit>
//!   A -> w        <terminal>
//!
//! where `A`, `B`, `C` are nonterminals and `w` is an input token. There are
//! no empty productions. The shape of `Rhs` makes anything else
//! unrepresentable, so the chart engine never has to ask.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use derive_more::{Display, From};
use linear_map::LinearMap;
use linear_map::set::LinearSet;

pub(crate) mod loader;

/// Left-hand side of the synthetic item every chart is seeded with. The
/// loader refuses grammars that try to define it.
pub const START: &str = "γ";

/// Symbols are cloned into every chart item, so they share one buffer.
#[derive(PartialEq, Eq, PartialOrd, Ord, Clone, Hash, Debug, Display, From)]
pub struct NonTerm(pub(crate) Arc<str>);

#[derive(PartialEq, Eq, PartialOrd, Ord, Clone, Hash, Debug, Display, From)]
pub struct Term(pub(crate) Arc<str>);

impl NonTerm {
    pub fn start() -> Self { NonTerm(START.into()) }
    pub fn is_start(&self) -> bool { &*self.0 == START }
}

impl AsRef<str> for NonTerm { fn as_ref(&self) -> &str { &self.0 } }
impl AsRef<str> for Term { fn as_ref(&self) -> &str { &self.0 } }

impl From<&str> for NonTerm { fn from(a: &str) -> Self { Self(a.into()) } }
impl From<&str> for Term { fn from(a: &str) -> Self { Self(a.into()) } }
impl From<String> for NonTerm { fn from(a: String) -> Self { Self(a.into()) } }
impl From<String> for Term { fn from(a: String) -> Self { Self(a.into()) } }

/// Right-hand side of a production.
///
/// `Word` never appears in a `Grammar`'s binary or unit tables; it is the
/// right side of the lexical items the scanner puts into the chart, where
/// the dot is already past the matched token.
#[derive(PartialEq, Eq, Clone, Hash, Debug)]
pub enum Rhs {
    Pair(NonTerm, NonTerm),
    Unit(NonTerm),
    Word(Term),
}

impl Rhs {
    pub fn len(&self) -> usize {
        match self {
            Rhs::Pair(..) => 2,
            Rhs::Unit(_) | Rhs::Word(_) => 1,
        }
    }

    /// The nonterminal at position `dot`, if there is one.
    pub fn symbol_at(&self, dot: usize) -> Option<&NonTerm> {
        match (self, dot) {
            (Rhs::Pair(b, _), 0) => Some(b),
            (Rhs::Pair(_, c), 1) => Some(c),
            (Rhs::Unit(b), 0) => Some(b),
            _ => None,
        }
    }
}

#[derive(PartialEq, Debug, Clone)]
pub struct Grammar {
    pub(crate) binary: LinearMap<NonTerm, LinearSet<(NonTerm, NonTerm)>>,
    pub(crate) unit: LinearMap<NonTerm, LinearSet<NonTerm>>,
    pub(crate) terminal: LinearMap<NonTerm, LinearSet<Term>>,
    /// Reverse of `terminal`, so the scanner can ask about one token without
    /// walking a whole lexicon.
    lexicon: HashMap<Term, LinearSet<NonTerm>>,
}

impl Grammar {
    pub fn empty() -> Self {
        Grammar {
            binary: LinearMap::new(),
            unit: LinearMap::new(),
            terminal: LinearMap::new(),
            lexicon: HashMap::new(),
        }
    }

    pub fn binary_rules(&self, a: &NonTerm) -> impl Iterator<Item=&(NonTerm, NonTerm)> {
        self.binary.get(a).into_iter().flat_map(|s| s.iter())
    }

    pub fn unit_rules(&self, a: &NonTerm) -> impl Iterator<Item=&NonTerm> {
        self.unit.get(a).into_iter().flat_map(|s| s.iter())
    }

    pub fn terminal_rules(&self, a: &NonTerm) -> impl Iterator<Item=&Term> {
        self.terminal.get(a).into_iter().flat_map(|s| s.iter())
    }

    /// Every right-hand side `a` can be expanded into by the predictor.
    pub fn expansions<'g>(&'g self, a: &NonTerm) -> impl Iterator<Item=Rhs> + 'g {
        let pairs = self.binary.get(a).into_iter().flat_map(|s| s.iter())
            .map(|(b, c)| Rhs::Pair(b.clone(), c.clone()));
        let units = self.unit.get(a).into_iter().flat_map(|s| s.iter())
            .map(|b| Rhs::Unit(b.clone()));
        pairs.chain(units)
    }

    pub fn has_terminals(&self, a: &NonTerm) -> bool {
        self.terminal.contains_key(a)
    }

    /// Whether `a -> word` is a rule.
    pub fn generates(&self, a: &NonTerm, word: &Term) -> bool {
        self.lexicon.get(word).map_or(false, |tags| tags.contains(a))
    }

    pub fn nonterms(&self) -> HashSet<NonTerm> {
        self.binary.keys()
            .chain(self.unit.keys())
            .chain(self.terminal.keys())
            .cloned()
            .collect()
    }

    pub fn terms(&self) -> HashSet<Term> {
        self.lexicon.keys().cloned().collect()
    }

    pub fn rule_count(&self) -> usize {
        self.binary.values().map(|s| s.len()).sum::<usize>()
            + self.unit.values().map(|s| s.len()).sum::<usize>()
            + self.terminal.values().map(|s| s.len()).sum::<usize>()
    }

    /// Nonterminals that occur on some right-hand side but have no rules of
    /// their own. Items predicted for them can never complete.
    pub fn validate(&self) -> Vec<NonTerm> {
        let defined = self.nonterms();
        let mut undefined = Vec::new();
        let used = self.binary.values()
            .flat_map(|s| s.iter().flat_map(|(b, c)| [b, c]))
            .chain(self.unit.values().flat_map(|s| s.iter()));
        for nt in used {
            if !defined.contains(nt) && !undefined.contains(nt) {
                undefined.push(nt.clone());
            }
        }
        undefined
    }
}

impl Grammar {
    pub(crate) fn add_binary(&mut self, a: NonTerm, b: NonTerm, c: NonTerm) {
        self.binary.entry(a).or_insert(LinearSet::new()).insert((b, c));
    }

    pub(crate) fn add_unit(&mut self, a: NonTerm, b: NonTerm) {
        self.unit.entry(a).or_insert(LinearSet::new()).insert(b);
    }

    pub(crate) fn add_terminal(&mut self, a: NonTerm, w: Term) {
        self.lexicon.entry(w.clone()).or_insert(LinearSet::new()).insert(a.clone());
        self.terminal.entry(a).or_insert(LinearSet::new()).insert(w);
    }
}

/// Assembles a grammar rule by rule, for callers that do not start from
/// rule text.
pub struct GrammarBuilder(Grammar);

impl GrammarBuilder {
    pub fn new() -> Self { GrammarBuilder(Grammar::empty()) }

    pub fn binary(mut self, a: &str, b: &str, c: &str) -> Self {
        self.0.add_binary(a.into(), b.into(), c.into());
        self
    }

    pub fn unit(mut self, a: &str, b: &str) -> Self {
        self.0.add_unit(a.into(), b.into());
        self
    }

    pub fn terminal(mut self, a: &str, w: &str) -> Self {
        self.0.add_terminal(a.into(), w.into());
        self
    }

    pub fn build(self) -> Grammar { self.0 }
}

#[cfg(test)]
#[path = "tests/grammar.rs"]
mod tests_for_grammar;
