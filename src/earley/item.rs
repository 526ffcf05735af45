use std::rc::Rc;

use crate::grammar::{NonTerm, Rhs, Term};
use crate::node::Tree;

/// ItemCore(A -> α•β, i, j) identifies an Earley item up to its derivation:
/// an attempt to derive `A` that began at input position `i` and has matched
/// `α` up to position `j`.
///
/// Bins deduplicate on the core *and* the derivation together, never on the
/// core alone. Two items that reach the same core through different
/// derivations are both kept; that is what lets every parse of an ambiguous
/// sentence survive to the final bin.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct ItemCore {
    pub(crate) lhs: NonTerm,
    pub(crate) rhs: Rhs,
    pub(crate) dot: usize,
    pub(crate) origin: usize,
    pub(crate) current: usize,
}

#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Item {
    core: ItemCore,
    /// `None` until the first right-hand-side symbol has been matched.
    derivation: Option<Rc<Tree>>,
}

impl Item {
    /// `(γ -> •top, 0, 0)`, the item every chart is seeded with.
    pub(crate) fn start(top: NonTerm) -> Item {
        Item::predicted(NonTerm::start(), Rhs::Unit(top), 0)
    }

    /// `(a -> •rhs, j, j)`
    pub(crate) fn predicted(a: NonTerm, rhs: Rhs, j: usize) -> Item {
        Item {
            core: ItemCore { lhs: a, rhs, dot: 0, origin: j, current: j },
            derivation: None,
        }
    }

    /// `(a -> w•, j, j+1)` with derivation `(a w)`.
    pub(crate) fn scanned(a: NonTerm, w: Term, j: usize) -> Item {
        let leaf = Tree::leaf(a.clone(), w.clone());
        Item {
            core: ItemCore { lhs: a, rhs: Rhs::Word(w), dot: 1, origin: j, current: j + 1 },
            derivation: Some(Rc::new(leaf)),
        }
    }

    /// This item with the dot moved over its next symbol, which `child`
    /// derived ending at `current`.
    pub(crate) fn advance(&self, current: usize, child: Rc<Tree>) -> Item {
        let tree = Tree::extend_parsed(self.derivation.as_deref(), &self.core.lhs, child);
        Item {
            core: ItemCore { dot: self.core.dot + 1, current, ..self.core.clone() },
            derivation: Some(Rc::new(tree)),
        }
    }

    pub fn core(&self) -> &ItemCore { &self.core }
    pub fn lhs(&self) -> &NonTerm { &self.core.lhs }
    pub fn rhs(&self) -> &Rhs { &self.core.rhs }
    pub fn dot(&self) -> usize { self.core.dot }
    pub fn origin(&self) -> usize { self.core.origin }
    pub fn current(&self) -> usize { self.core.current }
    pub fn derivation(&self) -> Option<&Rc<Tree>> { self.derivation.as_ref() }

    pub fn is_complete(&self) -> bool { self.core.dot == self.core.rhs.len() }

    /// The symbol right after the dot, if any.
    pub fn next_symbol(&self) -> Option<&NonTerm> {
        self.core.rhs.symbol_at(self.core.dot)
    }
}
