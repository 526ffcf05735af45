use crate::grammar::{NonTerm, Term};

mod parse;
mod tree;

pub use tree::Tree;

pub(crate) const NONTERM_BRACKETS: (char, char) = ('(', ')');

impl Tree {
    fn fmt_map(
        &self,
        w: &mut std::fmt::Formatter,
        f: impl Fn(&Tree, &mut std::fmt::Formatter) -> std::fmt::Result) -> std::fmt::Result
    {
        let bd = NONTERM_BRACKETS;
        match self {
            Tree::Leaf { label: NonTerm(label), token: Term(token) } => {
                write!(w, "{b}{NT} {T}{d}", b=bd.0, NT=label, T=token, d=bd.1)
            }
            Tree::Node { label: NonTerm(label), children } => {
                write!(w, "{b}{NT}", b=bd.0, NT=label)?;
                for child in children {
                    write!(w, " ")?;
                    f(child.as_ref(), w)?;
                }
                write!(w, "{d}", d=bd.1)
            }
        }
    }
}

/// The bracketed form, `(S (NP (N dog)) (VP (V barks)))`.
impl std::fmt::Display for Tree {
    fn fmt(&self, w: &mut std::fmt::Formatter) -> std::fmt::Result {
        self.fmt_map(w, |child, w| write!(w, "{}", child))
    }
}

impl std::fmt::Debug for Tree {
    fn fmt(&self, w: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(w, "Tree")?;
        self.fmt_map(w, |child, w| write!(w, "{}", child))
    }
}
