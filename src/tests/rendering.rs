use std::rc::Rc;

use expect_test::expect;

use super::*;
use crate::error::FragmentError;
use crate::luthor::LexicalError;
use crate::tests::*;
use crate::{Config, Session};

const DOG_TREE: &str = "(S (NP (N dog)) (VP (V chased) (N cat)))";

fn fragment_error(s: &str) -> (usize, FragmentError) {
    match s.parse::<Tree>() {
        Err(Error::Fragment { at, source }) => (at, source),
        other => panic!("expected a fragment error, got {:?}", other),
    }
}

#[test]
fn rendered_dog_tree() {
    let tree: Tree = DOG_TREE.parse().unwrap();
    let expected = "\
(S
  (NP
    (N dog))
  (VP
    (V chased)
    (N cat)))";
    assert_eq!(tree.rendered(), expected);
    assert_eq!(render_bracketed(DOG_TREE, DEFAULT_INDENT).unwrap(), expected);
}

#[test]
fn rendering_parsed_trees() {
    let g = grammar(TELESCOPE);
    let parses = parses(&g, "she saw the man with a telescope");
    let rendered: Vec<String> = parses.iter()
        .map(|s| render_bracketed(s, 2).unwrap())
        .collect();
    expect![[r#"
        (S
          (NP she)
          (VP
            (V saw)
            (NP
              (NP
                (Det the)
                (N man))
              (PP
                (P with)
                (NP
                  (Det a)
                  (N telescope))))))
        ---
        (S
          (NP she)
          (VP
            (VP
              (V saw)
              (NP
                (Det the)
                (N man)))
            (PP
              (P with)
              (NP
                (Det a)
                (N telescope)))))
    "#]].assert_eq(&(sorted(rendered).join("\n---\n") + "\n"));
}

fn sorted(mut v: Vec<String>) -> Vec<String> {
    v.sort();
    v
}

#[test]
fn indent_width() {
    let tree = Tree::node("NP", vec![Rc::new(Tree::leaf("Det", "the")), Rc::new(Tree::leaf("N", "dog"))]);
    assert_eq!(tree.rendered_with(4), "(NP\n    (Det the)\n    (N dog))");
    assert_eq!(tree.rendered_with(0), "(NP\n(Det the)\n(N dog))");
    assert_eq!(Tree::leaf("N", "dog").rendered(), "(N dog)");
}

#[test]
fn both_entry_points_agree() {
    let g = grammar(TELESCOPE);
    let parse = Session::new(&g, Config::default()).parse_str("she saw the man with a telescope").unwrap();
    for tree in parse.trees() {
        assert_eq!(render_bracketed(&tree.to_string(), 3).unwrap(), tree.rendered_with(3));
    }
}

#[test]
fn bracketed_form_round_trips() {
    let tree: Tree = DOG_TREE.parse().unwrap();
    assert_eq!(tree.to_string(), DOG_TREE);
    assert_eq!(tree.depth(), 3);
    let leaves: Vec<&str> = tree.leaves().into_iter().map(|t| t.as_ref()).collect();
    assert_eq!(leaves, vec!["dog", "chased", "cat"]);

    let spaced: Tree = "  ( S\n\t(N dog) )  ".parse().unwrap();
    assert_eq!(spaced.to_string(), "(S (N dog))");
}

#[test]
fn malformed_fragments() {
    use FragmentError::*;
    assert_eq!(fragment_error(""), (0, Empty));
    assert_eq!(fragment_error("   "), (0, Empty));
    assert_eq!(fragment_error(")"), (0, UnexpectedClose));
    assert_eq!(fragment_error("dog"), (0, UnexpectedWord));
    assert_eq!(fragment_error("(S (N dog)"), (0, Unclosed));
    assert_eq!(fragment_error("(S (N dog)))"), (11, TrailingInput));
    assert_eq!(fragment_error("(S)"), (2, EmptyNode));
    assert_eq!(fragment_error("((N dog))"), (1, MissingLabel));
    assert_eq!(fragment_error("(N dog cat)"), (7, UnexpectedWord));
    assert_eq!(fragment_error("(S (N dog) cat)"), (11, UnexpectedWord));
    assert_eq!(fragment_error("(S [N dog])"),
               (3, Lex(LexicalError::UnsupportedBracket { at: 3, bracket: '[' })));
}
