use crate::*;

pub(crate) const DOG: &str = "\
S -> NP VP
NP -> N
VP -> V N
N -> dog | cat
V -> chased
";

/// Prepositional attachment: `she saw the man with a telescope` has two
/// readings.
pub(crate) const TELESCOPE: &str = "\
S -> NP VP
VP -> V NP | VP PP
NP -> NP PP | Det N
PP -> P NP
NP -> she
Det -> the | a
N -> man | telescope
V -> saw
P -> with
";

pub(crate) fn grammar(text: &str) -> Grammar {
    text.parse().unwrap()
}

pub(crate) fn input(s: &str) -> Vec<Term> {
    s.split_whitespace().map(Term::from).collect()
}

/// Every parse of `sentence` from `S`, in bracketed form.
pub(crate) fn parses(g: &Grammar, sentence: &str) -> Vec<String> {
    let parse = Session::new(g, Config::default()).parse(&input(sentence)).unwrap();
    parse.trees().iter().map(|t| t.to_string()).collect()
}

#[test]
fn dog_chased_cat() {
    let g = grammar(DOG);
    assert_eq!(parses(&g, "dog chased cat"),
               vec!["(S (NP (N dog)) (VP (V chased) (N cat)))"]);
}

#[test]
fn sentences_outside_the_language() {
    let g = grammar(DOG);
    assert!(parses(&g, "dog dog").is_empty());
    assert!(parses(&g, "dog chased").is_empty());
    assert!(parses(&g, "dog chased cat cat").is_empty());
    assert!(parses(&g, "dog chased bird").is_empty());
    assert!(parses(&g, "").is_empty());
}

#[test]
fn every_attachment_is_kept() {
    let g = grammar(TELESCOPE);
    let mut found = parses(&g, "she saw the man with a telescope");
    found.sort();
    assert_eq!(found, vec![
        "(S (NP she) (VP (V saw) (NP (NP (Det the) (N man)) (PP (P with) (NP (Det a) (N telescope))))))",
        "(S (NP she) (VP (VP (V saw) (NP (Det the) (N man))) (PP (P with) (NP (Det a) (N telescope)))))",
    ]);
}

#[test]
fn every_parse_covers_the_sentence() {
    let g = grammar(TELESCOPE);
    let sentence = "she saw the man with a telescope";
    let parse = Session::new(&g, Config::default()).parse_str(sentence).unwrap();
    assert!(parse.outcome().has_parse());
    for tree in parse.trees() {
        assert_eq!(tree.label(), &NonTerm::from("S"));
        let leaves: Vec<&str> = tree.leaves().into_iter().map(|t| t.as_ref()).collect();
        assert_eq!(leaves.join(" "), sentence);
    }
}
