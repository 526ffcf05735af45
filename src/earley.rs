//! Earley chart parsing over a CNF grammar, keeping every derivation.
//!
//! Traditional Earley: gradually build, from left-to-right, a bin of "Earley
//! items" for each position in the input. An item `(A -> α•β, i, j)` records
//! that `α` derives the input from position `i` to position `j`, and that the
//! parse of `A` will be complete once `β` is matched too.
//!
//! Each item also carries the tree by which `α` derived its span. Because the
//! tree takes part in item identity, a bin holds one item per distinct
//! derivation, not one per core; the complete start items in the last bin
//! are then exactly the parses of the sentence.
//!
//! Bins are closed one at a time, each by running its worklist to a
//! fixpoint. Bin `j` only ever receives items ending at `j`: the predictor and
//! completer add to the bin being closed, the scanner to the next one.

use std::collections::VecDeque;
use std::time::Instant;

use log::{debug, trace};

use crate::config::Limits;
use crate::error::Error;
use crate::grammar::{Grammar, NonTerm, Term};

pub mod chart;
pub mod item;

pub use chart::{Bin, Chart};
pub use item::{Item, ItemCore};

#[cfg(test)]
#[path = "tests/earley.rs"]
mod tests_for_earley;

pub struct Earley<'g> {
    grammar: &'g Grammar,
    limits: Limits,
}

impl<'g> Earley<'g> {
    pub fn new(grammar: &'g Grammar, limits: Limits) -> Self {
        Earley { grammar, limits }
    }

    pub fn grammar(&self) -> &'g Grammar { self.grammar }

    /// Builds the complete chart for `tokens`, seeded with `(γ -> •top, 0, 0)`.
    pub fn run(self, tokens: &[Term], top: NonTerm) -> Result<Chart, Error> {
        EarleyConfig::new(self, tokens, top).run()
    }
}

pub struct EarleyConfig<'g, 't> {
    earley: Earley<'g>,
    tokens: &'t [Term],
    chart: Chart,
    /// The number of bins closed so far; also the index of the next one.
    len: usize,
    item_count: usize,
    started: Instant,
}

impl<'g, 't> EarleyConfig<'g, 't> {
    pub fn new(earley: Earley<'g>, tokens: &'t [Term], top: NonTerm) -> Self {
        let mut chart = Chart::new(tokens.len());
        chart.bin_mut(0).insert(Item::start(top));
        EarleyConfig { earley, tokens, chart, len: 0, item_count: 1, started: Instant::now() }
    }

    pub fn is_done(&self) -> bool { self.len > self.tokens.len() }

    pub fn chart(&self) -> &Chart { &self.chart }

    pub fn run(mut self) -> Result<Chart, Error> {
        while !self.is_done() {
            self.step()?;
        }
        debug!("chart complete: {} bins, {} items", self.chart.bins().len(), self.item_count);
        Ok(self.chart)
    }

    /// Closes the next bin: every item in it, including the ones added while
    /// closing it, goes through the predictor, scanner and completer once.
    /// Does nothing once every bin is closed.
    pub fn step(&mut self) -> Result<(), Error> {
        if self.is_done() {
            return Ok(());
        }
        let j = self.len;

        let mut queue: VecDeque<usize> = (0..self.chart.bin(j).len()).collect();
        debug!("closing bin {} ({} items seeded, next token {:?})",
               j, queue.len(), self.tokens.get(j).map(|t| t.as_ref()));

        while let Some(idx) = queue.pop_front() {
            self.check_time()?;
            let item = self.chart.bin(j).items()[idx].clone();
            trace!("processing {}", item);
            self.apply_predictor(j, &item, &mut queue)?;
            self.apply_scanner(j, &item)?;
            self.apply_completer(j, &item, &mut queue)?;
        }

        debug!("closed bin {} with {} items", j, self.chart.bin(j).len());
        self.len += 1;
        Ok(())
    }

    //  (A -> α•B β, i, j)
    //  B -> C D
    // ------------------------------- Predict
    //  (B -> •C D, j, j) ∈ bin j
    //
    // and likewise for each unit rule B -> C.
    fn apply_predictor(&mut self, j: usize, item: &Item, queue: &mut VecDeque<usize>) -> Result<(), Error> {
        let b = match item.next_symbol() {
            Some(b) => b,
            None => return Ok(()),
        };
        let grammar = self.earley.grammar;
        for rhs in grammar.expansions(b) {
            if let Some(idx) = self.insert(j, Item::predicted(b.clone(), rhs, j))? {
                queue.push_back(idx);
            }
        }
        Ok(())
    }

    //  (A -> α•B β, i, j)
    //  B -> c_j
    // ------------------------------- Scan
    //  (B -> c_j•, j, j+1) ∈ bin j+1
    //
    // where c_j is the token at (zero-indexed) position j. The scanned item
    // derives `(B c_j)`; the completer moves `A`'s dot once bin j+1 is closed.
    fn apply_scanner(&mut self, j: usize, item: &Item) -> Result<(), Error> {
        let b = match item.next_symbol() {
            Some(b) => b,
            None => return Ok(()),
        };
        let grammar = self.earley.grammar;
        let token = match self.tokens.get(j) {
            Some(token) => token,
            // no token left to scan in the final bin
            None => return Ok(()),
        };
        if !grammar.has_terminals(b) || !grammar.generates(b, token) {
            return Ok(());
        }
        // bin j+1 is closed later, so nothing is queued here
        self.insert(j + 1, Item::scanned(b.clone(), token.clone(), j))?;
        Ok(())
    }

    //  (X -> γ•, k, j)        with derivation T
    //  (A -> α•X β, i, k)     with derivation (A T_α)
    // ------------------------------------------------ Complete
    //  (A -> α X•β, i, j) ∈ bin j, with derivation (A T_α T)
    fn apply_completer(&mut self, j: usize, item: &Item, queue: &mut VecDeque<usize>) -> Result<(), Error> {
        if !item.is_complete() {
            return Ok(());
        }
        let k = item.origin();
        // no empty rules, so every complete item covers at least one token
        // and bin k is already closed.
        debug_assert!(k < j, "complete item {} does not span any input", item);

        let done = match item.derivation() {
            Some(t) => t.clone(),
            None => unreachable!("complete item without a derivation: {}", item),
        };
        let to_add: Vec<Item> = self.chart.bin(k)
            .waiting_on(item.lhs())
            .map(|w| w.advance(j, done.clone()))
            .collect();

        for advanced in to_add {
            if let Some(idx) = self.insert(j, advanced)? {
                queue.push_back(idx);
            }
        }
        Ok(())
    }

    fn insert(&mut self, k: usize, item: Item) -> Result<Option<usize>, Error> {
        debug_assert!(item.origin() <= item.current() && item.current() == k);
        let idx = match self.chart.bin_mut(k).insert(item) {
            Some(idx) => idx,
            None => return Ok(None),
        };
        trace!("  adding {} to bin {}", self.chart.bin(k).items()[idx], k);
        self.item_count += 1;
        match self.earley.limits.max_items {
            Some(limit) if self.item_count > limit => Err(Error::ItemBudgetExhausted { limit }),
            _ => Ok(Some(idx)),
        }
    }

    fn check_time(&self) -> Result<(), Error> {
        match self.earley.limits.time_limit {
            Some(limit) if self.started.elapsed() >= limit => Err(Error::TimeBudgetExhausted { limit }),
            _ => Ok(()),
        }
    }
}
