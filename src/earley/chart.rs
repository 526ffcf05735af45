use std::collections::{HashMap, HashSet};
use std::ptr;
use std::rc::Rc;

use crate::earley::item::{Item, ItemCore};
use crate::grammar::NonTerm;
use crate::node::Tree;

/// A derivation, up to the identity of its children.
///
/// Within one core the root label is the core's `lhs`, and a leaf is fixed by
/// the core's word. Every child is the derivation of a complete item that
/// was itself deduplicated in its own bin before anything could build on it,
/// so two equal derivations of one core point at the same children. The
/// chart owns those children for as long as the bin exists.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
struct Shape([*const Tree; 2]);

impl Shape {
    fn of(derivation: Option<&Rc<Tree>>) -> Shape {
        let mut children = [ptr::null(); 2];
        if let Some(tree) = derivation {
            debug_assert!(tree.children().len() <= 2, "not a CNF derivation: {}", tree);
            for (slot, child) in children.iter_mut().zip(tree.children()) {
                *slot = Rc::as_ptr(child);
            }
        }
        Shape(children)
    }
}

/// The items ending at one input position, in the order they were added.
#[derive(Debug, Default)]
pub struct Bin {
    items: Vec<Item>,
    /// For each core, the derivations already present.
    cells: HashMap<ItemCore, HashSet<Shape>>,
    /// Indices of incomplete items, keyed by the symbol after their dot.
    waiting: HashMap<NonTerm, Vec<usize>>,
}

impl Bin {
    pub fn items(&self) -> &[Item] { &self.items }
    pub fn len(&self) -> usize { self.items.len() }
    pub fn is_empty(&self) -> bool { self.items.is_empty() }
    pub fn get(&self, idx: usize) -> Option<&Item> { self.items.get(idx) }

    /// Adds `item` unless an item with the same core and derivation is
    /// already here. Returns the new item's index.
    ///
    /// Derivations are told apart by which subtrees they are built from, not
    /// by walking them, so an insert costs the same at any tree depth.
    pub(crate) fn insert(&mut self, item: Item) -> Option<usize> {
        let shape = Shape::of(item.derivation());
        let fresh = match self.cells.get_mut(item.core()) {
            Some(cell) => cell.insert(shape),
            None => {
                self.cells.insert(item.core().clone(), HashSet::from([shape]));
                true
            }
        };
        if !fresh {
            return None;
        }
        let idx = self.items.len();
        if let Some(b) = item.next_symbol() {
            self.waiting.entry(b.clone()).or_insert(vec![]).push(idx);
        }
        self.items.push(item);
        Some(idx)
    }

    /// Incomplete items whose next symbol is `b`.
    pub fn waiting_on<'b>(&'b self, b: &NonTerm) -> impl Iterator<Item=&'b Item> + 'b {
        self.waiting.get(b).into_iter().flat_map(|v| v.iter()).map(move |&idx| &self.items[idx])
    }

    pub fn complete(&self) -> impl Iterator<Item=&Item> {
        self.items.iter().filter(|item| item.is_complete())
    }
}

/// One bin per input position, `0..=n`.
#[derive(Debug)]
pub struct Chart {
    bins: Vec<Bin>,
}

impl Chart {
    pub(crate) fn new(token_count: usize) -> Self {
        Chart { bins: (0..=token_count).map(|_| Bin::default()).collect() }
    }

    pub fn bins(&self) -> &[Bin] { &self.bins }
    pub fn bin(&self, k: usize) -> &Bin { &self.bins[k] }
    pub(crate) fn bin_mut(&mut self, k: usize) -> &mut Bin { &mut self.bins[k] }

    pub fn last(&self) -> &Bin {
        self.bins.last().expect("a chart always has bin 0")
    }

    pub fn item_count(&self) -> usize {
        self.bins.iter().map(|b| b.len()).sum()
    }
}
