use std::rc::Rc;

use crate::grammar::{NonTerm, Term};

/// A derivation, or the part of one matched so far.
///
/// Subtrees are shared: when the completer advances an item, the new item's
/// tree is a fresh node whose children point at the same subtrees as the
/// waiting item's tree. Nothing is ever mutated after construction.
#[derive(Clone, PartialEq, Eq)]
pub enum Tree {
    Leaf { label: NonTerm, token: Term },
    Node { label: NonTerm, children: Vec<Rc<Tree>> },
}

impl Tree {
    pub fn leaf(label: impl Into<NonTerm>, token: impl Into<Term>) -> Tree {
        Tree::Leaf { label: label.into(), token: token.into() }
    }

    pub fn node(label: impl Into<NonTerm>, children: Vec<Rc<Tree>>) -> Tree {
        Tree::Node { label: label.into(), children }
    }

    pub fn label(&self) -> &NonTerm {
        match self {
            Tree::Leaf { label, .. } | Tree::Node { label, .. } => label,
        }
    }

    pub fn token(&self) -> Option<&Term> {
        match self {
            Tree::Leaf { token, .. } => Some(token),
            Tree::Node { .. } => None,
        }
    }

    pub fn children(&self) -> &[Rc<Tree>] {
        match self {
            Tree::Leaf { .. } => &[],
            Tree::Node { children, .. } => children,
        }
    }

    /// The tree `label` heads once `child` is appended to what `partial`
    /// already matched. With no partial tree, `child` is the first child.
    pub fn extend_parsed(partial: Option<&Tree>, label: &NonTerm, child: Rc<Tree>) -> Tree {
        let mut children = partial.map_or_else(Vec::new, |t| t.children().to_vec());
        children.push(child);
        Tree::Node { label: label.clone(), children }
    }

    /// The tokens the tree covers, left to right.
    pub fn leaves(&self) -> Vec<&Term> {
        let mut accum = Vec::new();
        self.collect_leaves(&mut accum);
        accum
    }

    fn collect_leaves<'a>(&'a self, accum: &mut Vec<&'a Term>) {
        match self {
            Tree::Leaf { token, .. } => accum.push(token),
            Tree::Node { children, .. } => {
                for child in children {
                    child.collect_leaves(accum);
                }
            }
        }
    }

    pub fn depth(&self) -> usize {
        1 + self.children().iter().map(|c| c.depth()).max().unwrap_or(0)
    }
}

/// Unit cycles can build chains hundreds of thousands of nodes deep before
/// the item budget stops a run, so subtrees this node owns outright are
/// released from a worklist instead of by recursion.
impl Drop for Tree {
    fn drop(&mut self) {
        let mut stack = match self {
            Tree::Node { children, .. } => std::mem::take(children),
            Tree::Leaf { .. } => return,
        };
        while let Some(child) = stack.pop() {
            if let Ok(mut tree) = Rc::try_unwrap(child) {
                if let Tree::Node { children, .. } = &mut tree {
                    stack.append(children);
                }
            }
        }
    }
}
