// This is actually defined at `crate::item::tests_for_item`

use super::*;
use crate::tests::{grammar, rule};

#[test]
fn span_containment() {
    let outer = Span::new(1, 4);
    assert!(outer.contains(Span::new(1, 4)));
    assert!(outer.contains(Span::point(4)));
    assert!(outer.contains(Span::new(2, 3)));
    assert!(!outer.contains(Span::new(0, 2)));
    assert!(!outer.contains(Span::new(3, 5)));
    assert!(Span::point(2).is_empty());
    assert_eq!(Span::new(0, 2).to_string(), "[0,2)");
}

#[test]
fn factory_checks_dots() {
    let g = grammar("A -> B C* D; B -> b; C -> c; D -> d");
    let r = rule(&g, "A -> B C* D");

    let err = ItemFactory.single_dotted(r.clone(), 4, Span::point(0), vec![]).unwrap_err();
    assert_eq!(err, ItemError::DotOutOfRange { lhs: Symbol::from("A"), dot: 4, len: 3 });

    let err = ItemFactory.double_dotted(r.clone(), 2, 1, Span::point(0), vec![]).unwrap_err();
    assert_eq!(err, ItemError::CrossedDots { lhs: Symbol::from("A"), left: 2, right: 1 });

    let err = ItemFactory.double_dotted(r.clone(), 0, 4, Span::point(0), vec![]).unwrap_err();
    assert!(matches!(err, ItemError::DotOutOfRange { dot: 4, .. }));

    assert!(ItemFactory.single_dotted(r.clone(), 3, Span::point(0), vec![]).is_ok());
    assert!(ItemFactory.double_dotted(r, 1, 1, Span::point(0), vec![]).is_ok());
}

#[test]
fn factory_checks_spans() {
    let g = grammar("S -> a");
    let reversed = Span { from: 2, to: 1 };
    let err = ItemFactory.create(ItemSpec::Goal { nonterminal: Symbol::from("S"), span: reversed }).unwrap_err();
    assert_eq!(err, ItemError::ReversedSpan(reversed));
    let err = ItemFactory.completed(g.rules()[0].clone(), reversed, vec![]).unwrap_err();
    assert_eq!(err.to_string(), "span [2,1) ends before it starts");
}

#[test]
fn create_dispatches_on_kind() {
    let g = grammar("S -> NP VP*; NP -> n; VP -> v");
    let r = rule(&g, "S -> NP VP*");
    let sd = ItemFactory.create(ItemSpec::SingleDotted { rule: r.clone(), dot: 1, span: Span::new(0, 1), children: vec![] }).unwrap();
    let dd = ItemFactory.create(ItemSpec::DoubleDotted { rule: r.clone(), left_dot: 1, right_dot: 2, span: Span::new(1, 2), children: vec![] }).unwrap();
    let goal = ItemFactory.create(ItemSpec::Goal { nonterminal: Symbol::from("NP"), span: Span::new(0, 1) }).unwrap();
    let done = ItemFactory.create(ItemSpec::Completed { rule: r, span: Span::new(0, 2), children: vec![] }).unwrap();

    assert!(sd.as_single_dotted().is_some());
    assert!(dd.as_double_dotted().is_some());
    assert!(goal.as_goal().is_some());
    assert!(done.as_completed().is_some());
    assert!(goal.as_completed().is_none());

    assert_eq!(sd.to_string(), "S -> NP . VP [0,1)");
    assert_eq!(dd.to_string(), "S -> NP . VP . [1,2)");
    assert_eq!(goal.to_string(), "?NP [0,1)");
    assert_eq!(done.to_string(), "<S -> NP VP*> [0,2)");
    assert_eq!(goal.category(), &Symbol::from("NP"));
    assert_eq!(done.category(), &Symbol::from("S"));
}

#[test]
fn identity_ignores_children() {
    let g = grammar("S -> NP VP*; NP -> n; VP -> v");
    let s = rule(&g, "S -> NP VP*");
    let np: ItemRef = Rc::new(ItemFactory.create(ItemSpec::Completed {
        rule: rule(&g, "NP -> n"),
        span: Span::new(0, 1),
        children: vec![],
    }).unwrap());
    let bare = ItemFactory.single_dotted(s.clone(), 1, Span::new(0, 1), vec![]).unwrap();
    let with_child = ItemFactory.single_dotted(s.clone(), 1, Span::new(0, 1), vec![np]).unwrap();
    assert_eq!(bare.key(), with_child.key());

    let other_span = ItemFactory.single_dotted(s.clone(), 1, Span::new(1, 2), vec![]).unwrap();
    assert_ne!(bare.key(), other_span.key());

    // Same rule, dots and span, but a different kind of item.
    let completed = ItemFactory.completed(s, Span::new(0, 1), vec![]).unwrap();
    assert_ne!(Item::from(bare).key(), Item::from(completed).key());
}

#[test]
fn parse_tree_rendering() {
    let g = grammar("S -> NP VP*; NP -> n; VP -> v");
    let leaf = |text: &str, from: usize| -> ItemRef {
        Rc::new(ItemFactory.create(ItemSpec::Completed {
            rule: rule(&g, text),
            span: Span::new(from, from + 1),
            children: vec![],
        }).unwrap())
    };
    let np = leaf("NP -> n", 0);
    let vp = leaf("VP -> v", 1);
    assert_eq!(np.create_parse_tree(), "NP(n)");

    let s = ItemFactory.completed(rule(&g, "S -> NP VP*"), Span::new(0, 2), vec![np, vp]).unwrap();
    assert_eq!(s.create_parse_tree(), "S(NP(n),VP(v))");

    let goal = ItemFactory.goal(Symbol::from("VP"), Span::new(1, 2)).unwrap();
    assert_eq!(Item::from(goal).create_parse_tree(), "VP");
}
