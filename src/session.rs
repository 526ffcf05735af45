use std::rc::Rc;

use log::{info, warn};

use crate::config::Config;
use crate::earley::{Chart, Earley, Item};
use crate::error::Error;
use crate::grammar::{Grammar, Term};
use crate::node::Tree;
use crate::ParseMatches;

/// Parses sentences against one grammar. The grammar is only ever read, so
/// any number of sessions (on any number of threads) can share it.
pub struct Session<'g> {
    grammar: &'g Grammar,
    config: Config,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Every derivation of the sentence from the top symbol, in the order the
    /// chart found them.
    Parsed(Vec<Rc<Tree>>),
    /// The chart closed normally, but nothing spans the whole sentence.
    NoParse,
}

impl Outcome {
    pub fn trees(&self) -> &[Rc<Tree>] {
        match self {
            Outcome::Parsed(trees) => trees,
            Outcome::NoParse => &[],
        }
    }
}

impl ParseMatches for Outcome {
    fn has_parse(&self) -> bool { matches!(self, Outcome::Parsed(_)) }
}

/// A finished run: the chart it built and what was found in it.
#[derive(Debug)]
pub struct Parse {
    chart: Chart,
    outcome: Outcome,
}

impl Parse {
    pub fn chart(&self) -> &Chart { &self.chart }
    pub fn outcome(&self) -> &Outcome { &self.outcome }
    pub fn trees(&self) -> &[Rc<Tree>] { self.outcome.trees() }
    pub fn into_outcome(self) -> Outcome { self.outcome }
}

impl<'g> Session<'g> {
    pub fn new(grammar: &'g Grammar, config: Config) -> Self {
        for nt in grammar.validate() {
            warn!("nonterminal `{}` is used but has no rules", nt);
        }
        if !grammar.nonterms().contains(&config.top) {
            warn!("top symbol `{}` has no rules; nothing will parse", config.top);
        }
        Session { grammar, config }
    }

    pub fn config(&self) -> &Config { &self.config }

    pub fn parse_str(&self, sentence: &str) -> Result<Parse, Error> {
        let tokens: Vec<Term> = sentence.split_whitespace().map(Term::from).collect();
        self.parse(&tokens)
    }

    pub fn parse(&self, tokens: &[Term]) -> Result<Parse, Error> {
        let earley = Earley::new(self.grammar, self.config.limits.clone());
        let chart = earley.run(tokens, self.config.top.clone())?;

        let trees: Vec<Rc<Tree>> = accepting(&chart).filter_map(extract).collect();
        info!("{} token(s), {} item(s), {} parse(s)", tokens.len(), chart.item_count(), trees.len());

        let outcome = if trees.is_empty() { Outcome::NoParse } else { Outcome::Parsed(trees) };
        Ok(Parse { chart, outcome })
    }
}

/// Complete start items spanning the whole input.
pub fn accepting(chart: &Chart) -> impl Iterator<Item=&Item> {
    let n = chart.bins().len() - 1;
    chart.last()
        .complete()
        .filter(move |item| item.lhs().is_start() && item.origin() == 0 && item.current() == n)
}

/// The start item's derivation is `(γ T)`; the parse is `T`.
fn extract(item: &Item) -> Option<Rc<Tree>> {
    item.derivation()?.children().first().cloned()
}

#[cfg(test)]
#[path = "tests/session.rs"]
mod tests_for_session;
