use crate::error::Error;
use crate::node::{Tree, NONTERM_BRACKETS};

pub const DEFAULT_INDENT: usize = 2;

/// Indented, one-node-per-line text for a derivation:
///
/// ```text
/// (S
///   (NP
///     (N dog))
///   (VP
///     (V chased)
///     (N cat)))
/// ```
///
/// Every opening bracket starts a new line, indented by its depth; closing
/// brackets trail the line where the node ends. Siblings always share an
/// indentation.
pub trait Rendered {
    fn rendered_with(&self, indent: usize) -> String;

    fn rendered(&self) -> String { self.rendered_with(DEFAULT_INDENT) }
}

impl Rendered for Tree {
    fn rendered_with(&self, indent: usize) -> String {
        let mut out = String::new();
        render_into(self, 0, indent, &mut out);
        out
    }
}

fn render_into(tree: &Tree, depth: usize, indent: usize, out: &mut String) {
    let (open, close) = NONTERM_BRACKETS;
    if depth > 0 {
        out.push('\n');
        out.extend(std::iter::repeat(' ').take(depth * indent));
    }
    out.push(open);
    out.push_str(tree.label().as_ref());
    match tree {
        Tree::Leaf { token, .. } => {
            out.push(' ');
            out.push_str(token.as_ref());
        }
        Tree::Node { children, .. } => {
            for child in children {
                render_into(child, depth + 1, indent, out);
            }
        }
    }
    out.push(close);
}

/// Renders a derivation given in bracketed form, e.g. as printed by
/// `Display for Tree`.
pub fn render_bracketed(s: &str, indent: usize) -> Result<String, Error> {
    let tree: Tree = s.parse()?;
    Ok(tree.rendered_with(indent))
}

#[cfg(test)]
#[path = "tests/rendering.rs"]
mod tests_for_rendering;
