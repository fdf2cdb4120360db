// This is actually defined at `crate::goal::tests_for_goal`

use super::*;
use crate::item::{Item, ItemRef};
use crate::tests::{grammar, rule, words};

use std::rc::Rc;

fn goal(nt: &str, from: usize, to: usize) -> GoalItem {
    ItemFactory.goal(nt.into(), Span::new(from, to)).unwrap()
}

fn queued(agenda: &mut Agenda) -> Vec<String> {
    std::iter::from_fn(|| agenda.pop()).map(|i| i.to_string()).collect()
}

const SVO: &str = "S -> NP VP*; NP -> n; VP -> v";

#[test]
fn scan_starts_at_lexical_heads() {
    let g = grammar(SVO);
    let chart = Chart::new(2);
    let mut agenda = Agenda::new();

    // `n` heads NP, which is not a head corner of S.
    assert_eq!(goal("S", 0, 2).scan(&chart, &mut agenda, &g, &words("n v")).unwrap(), 1);
    assert_eq!(queued(&mut agenda), vec!["VP -> . v . [1,2)"]);

    assert_eq!(goal("NP", 0, 1).scan(&chart, &mut agenda, &g, &words("n v")).unwrap(), 1);
    assert_eq!(queued(&mut agenda), vec!["NP -> . n . [0,1)"]);
}

#[test]
fn scan_stays_inside_span() {
    let g = grammar(SVO);
    let chart = Chart::new(2);
    let mut agenda = Agenda::new();
    assert_eq!(goal("S", 0, 1).scan(&chart, &mut agenda, &g, &words("n v")).unwrap(), 0);
    assert_eq!(goal("S", 1, 1).scan(&chart, &mut agenda, &g, &words("n v")).unwrap(), 0);
    // past the end of the input
    assert_eq!(goal("VP", 2, 3).scan(&chart, &mut agenda, &g, &words("n v")).unwrap(), 0);
}

#[test]
fn scan_empty_offers_every_position() {
    let g = grammar("S -> A b*; A ->");
    let chart = Chart::new(1);
    let mut agenda = Agenda::new();
    assert_eq!(goal("S", 0, 1).scan_empty(&chart, &mut agenda, &g).unwrap(), 0);
    assert_eq!(goal("A", 0, 1).scan_empty(&chart, &mut agenda, &g).unwrap(), 2);
    assert_eq!(queued(&mut agenda), vec!["A -> . . [0,0)", "A -> . . [1,1)"]);
}

#[test]
fn project_completed_items_in_span() {
    let g = grammar(SVO);
    let mut chart = Chart::new(2);
    let mut agenda = Agenda::new();
    let vp: ItemRef = Rc::new(Item::from(
        ItemFactory.completed(rule(&g, "VP -> v"), Span::new(1, 2), vec![]).unwrap(),
    ));
    chart.insert(vp);

    assert_eq!(goal("S", 0, 1).project(&chart, &mut agenda, &g).unwrap(), 0);
    assert_eq!(goal("NP", 0, 2).project(&chart, &mut agenda, &g).unwrap(), 0);
    assert_eq!(goal("S", 0, 2).project(&chart, &mut agenda, &g).unwrap(), 1);

    let projected = agenda.pop().unwrap();
    assert_eq!(projected.to_string(), "S -> NP . VP . [1,2)");
    assert_eq!(projected.create_parse_tree(), "S(VP(v))");
}

#[test]
fn narrow_offers_edge_anchored_goals() {
    let chart = Chart::new(2);
    let mut agenda = Agenda::new();
    assert_eq!(goal("S", 0, 2).narrow(&chart, &mut agenda).unwrap(), 5);
    assert_eq!(queued(&mut agenda), vec!["?S [0,0)", "?S [0,2)", "?S [0,1)", "?S [1,2)", "?S [2,2)"]);

    let mut chart = Chart::new(2);
    chart.add_item(goal("S", 0, 2).into());
    chart.add_item(goal("S", 1, 2).into());
    assert_eq!(goal("S", 0, 2).narrow(&chart, &mut agenda).unwrap(), 3);
    assert_eq!(queued(&mut agenda), vec!["?S [0,0)", "?S [0,1)", "?S [2,2)"]);
}

#[test]
fn narrow_of_an_empty_span_is_itself() {
    let mut chart = Chart::new(1);
    let mut agenda = Agenda::new();
    chart.add_item(goal("S", 1, 1).into());
    assert_eq!(goal("S", 1, 1).narrow(&chart, &mut agenda).unwrap(), 0);
    assert!(agenda.is_empty());
}
