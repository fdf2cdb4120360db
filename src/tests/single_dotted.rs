// This is actually defined at `crate::single_dotted::tests_for_single_dotted`

use super::*;
use crate::rendering::Rendered;
use crate::tests::{grammar, rule, words};

use expect_test::expect;

fn sd(g: &Grammar, text: &str, dot: usize, from: usize, to: usize) -> SingleDottedItem {
    ItemFactory.single_dotted(rule(g, text), dot, Span::new(from, to), vec![]).unwrap()
}

#[test]
fn predictor_adds_rules_for_next_nonterminal() {
    let g = grammar("S -> NP VP*; NP -> n | Det N*; VP -> v; Det -> the; N -> dog");
    let mut chart = Chart::new(2);
    let seed = sd(&g, "S -> NP VP*", 0, 0, 0);
    chart.add_item(seed.clone().into());

    assert_eq!(seed.predictor(&mut chart, &g).unwrap(), 2);
    expect![[r#"
        S -> . NP VP [0,0)
        NP -> . n [0,0)
        NP -> . Det N [0,0)"#]].assert_eq(&chart.rendered());

    // Nothing new the second time round.
    assert_eq!(seed.predictor(&mut chart, &g).unwrap(), 0);
}

#[test]
fn predictor_ignores_terminals_and_complete_items() {
    let g = grammar("S -> NP VP*; NP -> n; VP -> v");
    let mut chart = Chart::new(2);
    assert_eq!(sd(&g, "NP -> n", 0, 0, 0).predictor(&mut chart, &g).unwrap(), 0);
    assert_eq!(sd(&g, "S -> NP VP*", 2, 0, 2).predictor(&mut chart, &g).unwrap(), 0);
    assert!(chart.is_empty());
}

#[test]
fn scanner_advances_over_matching_word() {
    let g = grammar("S -> NP VP*; NP -> n; VP -> v");
    let mut chart = Chart::new(2);
    let item = sd(&g, "NP -> n", 0, 0, 0);
    assert_eq!(item.scanner(&mut chart, &g, &words("v n")).unwrap(), 0);
    assert_eq!(item.scanner(&mut chart, &g, &words("n v")).unwrap(), 1);

    let scanned = chart.items()[0].as_single_dotted().unwrap().clone();
    assert_eq!(scanned.dot(), 1);
    assert_eq!(scanned.span(), Span::new(0, 1));
    assert!(scanned.is_complete());
    assert!(scanned.children().is_empty());
    assert_eq!(scanned.create_parse_tree(), "NP(n)");
}

#[test]
fn scanner_stops_at_end_of_input() {
    let g = grammar("S -> a a");
    let mut chart = Chart::new(1);
    let item = sd(&g, "S -> a* a", 1, 0, 1);
    assert_eq!(item.scanner(&mut chart, &g, &words("a")).unwrap(), 0);
}

#[test]
fn completer_advances_waiting_items() {
    let g = grammar("S -> NP VP*; NP -> n; VP -> v");
    let mut chart = Chart::new(2);
    chart.add_item(sd(&g, "S -> NP VP*", 0, 0, 0).into());
    let np = sd(&g, "NP -> n", 1, 0, 1);

    assert_eq!(np.completer(&mut chart, &g).unwrap(), 1);
    assert_eq!(np.completer(&mut chart, &g).unwrap(), 0);

    let advanced = chart.items()[1].as_single_dotted().unwrap().clone();
    assert_eq!(advanced.to_string(), "S -> NP . VP [0,1)");
    assert_eq!(advanced.children().len(), advanced.dot());
    assert_eq!(advanced.children()[0].create_parse_tree(), "NP(n)");
    assert_eq!(advanced.next_symbol(), Some(&Symbol::from("VP")));
}

#[test]
fn completer_needs_complete_item() {
    let g = grammar("S -> NP VP*; NP -> n; VP -> v");
    let mut chart = Chart::new(2);
    chart.add_item(sd(&g, "S -> NP VP*", 0, 0, 0).into());
    assert_eq!(sd(&g, "NP -> n", 0, 0, 0).completer(&mut chart, &g).unwrap(), 0);
    assert_eq!(chart.len(), 1);
}

#[test]
fn completer_chains_to_full_tree() {
    let g = grammar("S -> NP VP*; NP -> n; VP -> v");
    let mut chart = Chart::new(2);
    chart.add_item(sd(&g, "S -> NP VP*", 0, 0, 0).into());
    sd(&g, "NP -> n", 1, 0, 1).completer(&mut chart, &g).unwrap();
    sd(&g, "VP -> v", 1, 1, 2).completer(&mut chart, &g).unwrap();

    let done = chart.get_items_from_to(0, 2);
    assert_eq!(done.len(), 1);
    assert_eq!(done[0].to_string(), "S -> NP VP . [0,2)");
    assert_eq!(done[0].create_parse_tree(), "S(NP(n),VP(v))");
}

const LC: &str = "S -> NP VP*; NP -> Det N*; NP -> n; Det -> the; N -> dog; VP -> v";

#[test]
fn lc_predictor_only_fires_on_complete_items() {
    let g = grammar(LC);
    let mut chart = Chart::new(3);
    chart.add_item(sd(&g, "S -> NP VP*", 0, 0, 0).into());
    assert_eq!(sd(&g, "Det -> the", 0, 0, 0).lc_predictor(&mut chart, &g).unwrap(), 0);
    assert_eq!(chart.len(), 1);
}

#[test]
fn lc_predictor_projects_left_corner() {
    let g = grammar(LC);
    let mut chart = Chart::new(3);
    chart.add_item(sd(&g, "S -> NP VP*", 0, 0, 0).into());
    let det = sd(&g, "Det -> the", 1, 0, 1);

    assert_eq!(det.lc_predictor(&mut chart, &g).unwrap(), 1);
    assert_eq!(det.lc_predictor(&mut chart, &g).unwrap(), 0);

    let projected = chart.items()[1].as_single_dotted().unwrap().clone();
    assert_eq!(projected.to_string(), "NP -> Det . N [0,1)");
    assert_eq!(projected.children().len(), 1);
    assert_eq!(projected.children()[0].create_parse_tree(), "Det(the)");
}

#[test]
fn lc_predictor_needs_a_waiting_item() {
    let g = grammar(LC);
    let mut chart = Chart::new(3);
    // Nothing ends at 1, so nothing wants what `VP -> v` could start.
    chart.add_item(sd(&g, "S -> NP VP*", 0, 0, 0).into());
    assert_eq!(sd(&g, "VP -> v", 1, 1, 2).lc_predictor(&mut chart, &g).unwrap(), 0);
}

#[test]
fn lc_predictor_respects_left_corner_relation() {
    let g = grammar(LC);
    let mut chart = Chart::new(3);
    // Waiting for VP; `NP -> Det N` has lhs NP, not a left corner of VP.
    chart.add_item(sd(&g, "S -> NP VP*", 1, 0, 1).into());
    assert_eq!(sd(&g, "Det -> the", 1, 1, 2).lc_predictor(&mut chart, &g).unwrap(), 0);
}

#[test]
fn lc_scanner_introduces_lexical_rules() {
    let g = grammar(LC);
    let mut chart = Chart::new(3);
    let seed = sd(&g, "S -> NP VP*", 0, 0, 0);
    assert_eq!(seed.lc_scanner(&mut chart, &g, &words("the dog v")).unwrap(), 1);
    assert_eq!(chart.items()[0].to_string(), "Det -> the . [0,1)");

    // `v` starts no left corner of NP.
    let mut chart = Chart::new(3);
    assert_eq!(seed.lc_scanner(&mut chart, &g, &words("v")).unwrap(), 0);
}

#[test]
fn lc_scanner_introduces_empty_rules() {
    let g = grammar("S -> A b; A ->");
    let mut chart = Chart::new(1);
    let seed = sd(&g, "S -> A* b", 0, 0, 0);
    chart.add_item(seed.clone().into());

    assert_eq!(seed.lc_scanner(&mut chart, &g, &words("b")).unwrap(), 1);
    let empty = chart.items()[1].as_single_dotted().unwrap().clone();
    assert_eq!(empty.to_string(), "A -> . [0,0)");
    assert!(empty.is_complete());

    assert_eq!(empty.completer(&mut chart, &g).unwrap(), 1);
    let after_a = chart.items()[2].as_single_dotted().unwrap().clone();
    assert_eq!(after_a.scanner(&mut chart, &g, &words("b")).unwrap(), 1);
    assert_eq!(chart.items()[3].create_parse_tree(), "S(A())");
}
