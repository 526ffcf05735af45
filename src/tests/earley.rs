// This is actually defined at `crate::earley::tests_for_earley`

use std::rc::Rc;
use std::time::Duration;

use expect_test::expect;

use crate::config::Limits;
use crate::earley::*;
use crate::tests::*;
use crate::{Error, Grammar, NonTerm, Tree};

fn chart(g: &Grammar, sentence: &str) -> Chart {
    Earley::new(g, Limits::default()).run(&input(sentence), "S".into()).unwrap()
}

#[test]
fn dog_chased_cat_chart() {
    let g = grammar(DOG);
    let chart = chart(&g, "dog chased cat");
    expect![[r#"
        == bin 0 ==
        [γ -> • S, 0, 0]
        [S -> • NP VP, 0, 0]
        [NP -> • N, 0, 0]
        == bin 1 ==
        [N -> dog •, 0, 1] (N dog)
        [NP -> N •, 0, 1] (NP (N dog))
        [S -> NP • VP, 0, 1] (S (NP (N dog)))
        [VP -> • V N, 1, 1]
        == bin 2 ==
        [V -> chased •, 1, 2] (V chased)
        [VP -> V • N, 1, 2] (VP (V chased))
        == bin 3 ==
        [N -> cat •, 2, 3] (N cat)
        [VP -> V N •, 1, 3] (VP (V chased) (N cat))
        [S -> NP VP •, 0, 3] (S (NP (N dog)) (VP (V chased) (N cat)))
        [γ -> S •, 0, 3] (γ (S (NP (N dog)) (VP (V chased) (N cat))))
    "#]].assert_eq(&chart.to_string());
    assert_eq!(chart.item_count(), 13);
}

#[test]
fn items_end_in_their_own_bin() {
    let g = grammar(TELESCOPE);
    let chart = chart(&g, "she saw the man with a telescope");
    assert_eq!(chart.bins().len(), 8);
    for (k, bin) in chart.bins().iter().enumerate() {
        for item in bin.items() {
            assert!(item.origin() <= item.current(), "{}", item);
            assert_eq!(item.current(), k, "{}", item);
            assert!(item.dot() <= item.rhs().len(), "{}", item);
            assert_eq!(item.derivation().is_some(), item.dot() > 0, "{}", item);
        }
    }
}

fn assert_no_duplicates(chart: &Chart) {
    for bin in chart.bins() {
        for (i, a) in bin.items().iter().enumerate() {
            for b in &bin.items()[i + 1..] {
                assert!(a != b, "{} is in the bin twice", a);
            }
        }
    }
}

#[test]
fn bins_hold_one_item_per_derivation() {
    let g = grammar(TELESCOPE);
    let chart = chart(&g, "she saw the man with a telescope");
    assert_no_duplicates(&chart);
    // both readings end in `[S -> NP VP •, 0, 7]`
    let s: Vec<&Item> = chart.last().complete()
        .filter(|item| item.lhs() == &NonTerm::from("S"))
        .collect();
    assert_eq!(s.len(), 2);
    assert_eq!(s[0].core(), s[1].core());
    assert!(s[0].derivation() != s[1].derivation());
}

#[test]
fn ambiguous_bins_hold_one_item_per_derivation() {
    let g = grammar("S -> S S | a");
    let chart = chart(&g, "a a a a a a");
    assert_no_duplicates(&chart);
    // C(5) binary bracketings of six leaves
    assert_eq!(crate::session::accepting(&chart).count(), 42);
}

#[test]
fn insertion_is_idempotent() {
    let mut bin = Bin::default();
    assert_eq!(bin.insert(Item::start("S".into())), Some(0));
    assert_eq!(bin.insert(Item::start("S".into())), None);
    assert_eq!(bin.insert(Item::start("T".into())), Some(1));
    assert_eq!(bin.len(), 2);

    let leaf = Rc::new(Tree::leaf("N", "dog"));
    let waiting = Item::predicted("NP".into(), crate::Rhs::Unit("N".into()), 0);
    assert_eq!(bin.insert(waiting.clone()), Some(2));
    assert_eq!(bin.waiting_on(&"N".into()).count(), 1);

    let mut next = Bin::default();
    assert_eq!(next.insert(waiting.advance(1, leaf.clone())), Some(0));
    assert_eq!(next.insert(waiting.advance(1, leaf)), None);
    let other = Rc::new(Tree::leaf("N", "cat"));
    assert_eq!(next.insert(waiting.advance(1, other)), Some(1));
}

#[test]
fn scanned_items_are_complete() {
    let item = Item::scanned("N".into(), "dog".into(), 4);
    assert!(item.is_complete());
    assert_eq!((item.origin(), item.current()), (4, 5));
    assert_eq!(item.next_symbol(), None);
    assert_eq!(item.to_string(), "[N -> dog •, 4, 5] (N dog)");
}

#[test]
fn left_recursion_terminates() {
    let g = grammar("S -> S A | A\nA -> a");
    let chart = chart(&g, "a a a a");
    let accepted: Vec<String> = crate::session::accepting(&chart)
        .map(|item| item.to_string())
        .collect();
    assert_eq!(accepted, vec![
        "[γ -> S •, 0, 4] (γ (S (S (S (S (A a)) (A a)) (A a)) (A a)))",
    ]);
}

#[test]
fn empty_input_closes_only_bin_zero() {
    let g = grammar(DOG);
    let chart = chart(&g, "");
    assert_eq!(chart.bins().len(), 1);
    assert_eq!(chart.item_count(), 3);
    assert_eq!(chart.last().complete().count(), 0);
}

#[test]
fn item_budget() {
    let g = grammar(DOG);
    let limits = Limits { max_items: Some(5), time_limit: None };
    match Earley::new(&g, limits).run(&input("dog chased cat"), "S".into()) {
        Err(Error::ItemBudgetExhausted { limit: 5 }) => {}
        other => panic!("expected the item budget to run out, got {:?}", other),
    }
    // exactly enough
    let limits = Limits { max_items: Some(13), time_limit: None };
    assert!(Earley::new(&g, limits).run(&input("dog chased cat"), "S".into()).is_ok());
}

#[test]
fn time_budget() {
    let g = grammar(DOG);
    let limits = Limits { max_items: None, time_limit: Some(Duration::ZERO) };
    match Earley::new(&g, limits).run(&input("dog chased cat"), "S".into()) {
        Err(Error::TimeBudgetExhausted { .. }) => {}
        other => panic!("expected the time budget to run out, got {:?}", other),
    }
}

#[test]
fn stepping_one_bin_at_a_time() {
    let g = grammar(DOG);
    let tokens = input("dog chased cat");
    let mut config = EarleyConfig::new(Earley::new(&g, Limits::default()), &tokens, "S".into());
    let mut sizes = vec![];
    while !config.is_done() {
        config.step().unwrap();
        sizes.push(config.chart().bins().iter().map(|b| b.len()).collect::<Vec<_>>());
    }
    assert_eq!(sizes, vec![
        vec![3, 1, 0, 0],
        vec![3, 4, 1, 0],
        vec![3, 4, 2, 1],
        vec![3, 4, 2, 4],
    ]);

    config.step().unwrap();
    assert!(config.is_done());
    assert_eq!(config.chart().item_count(), 13);
}
