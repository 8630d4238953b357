use directory_core::{CardList, ListOp, Placement};
use pretty_assertions::assert_eq;

fn names(range: std::ops::Range<u32>) -> Vec<String> {
    range.map(|i| format!("Company {i}")).collect()
}

#[test]
fn grow_from_empty_creates_nodes_in_order() {
    let mut list = CardList::new();
    let stats = list.reconcile(&names(0..3));

    assert_eq!(stats.created, 3);
    assert_eq!(list.len(), 3);
    let items: Vec<_> = list.slots().iter().map(|slot| slot.item.clone()).collect();
    assert_eq!(items, names(0..3));
    assert_eq!(list.get(0).unwrap().placement, Placement { first: true, last: false });
    assert_eq!(list.get(2).unwrap().placement, Placement { first: false, last: true });
}

#[test]
fn same_data_twice_is_stable() {
    let mut list = CardList::new();
    list.reconcile(&names(0..4));
    let ids = list.ids();
    let before = list.clone();

    let stats = list.reconcile(&names(0..4));

    assert!(stats.is_noop());
    assert_eq!(list.ids(), ids);
    assert_eq!(list, before);
}

#[test]
fn shrink_reuses_leading_nodes_and_reassigns_roles() {
    let mut list = CardList::new();
    list.reconcile(&names(0..5));
    let ids = list.ids();

    let stats = list.reconcile(&names(10..12));

    assert_eq!(stats.removed, 3);
    assert_eq!(stats.created, 0);
    assert_eq!(list.ids(), ids[..2].to_vec());
    assert_eq!(list.get(1).unwrap().placement, Placement { first: false, last: true });

    list.reconcile(&names(20..21));
    assert_eq!(list.ids(), ids[..1].to_vec());
    assert_eq!(list.get(0).unwrap().placement, Placement::SOLE);
}

#[test]
fn growth_keeps_existing_nodes_and_appends() {
    let mut list = CardList::new();
    list.reconcile(&names(0..2));
    let ids = list.ids();

    let stats = list.reconcile(&names(5..9));

    assert_eq!(stats.created, 2);
    assert_eq!(stats.updated, 2);
    assert_eq!(&list.ids()[..2], &ids[..]);
    assert_eq!(list.get(3).unwrap().item, "Company 8");
}

#[test]
fn empty_target_removes_everything() {
    let mut list = CardList::new();
    list.reconcile(&names(0..3));

    let stats = list.reconcile(&[]);

    assert_eq!(stats.removed, 3);
    assert!(list.is_empty());
}

#[test]
fn collapse_keeps_first_node_only() {
    let mut list = CardList::new();
    list.reconcile(&names(0..4));
    let first = list.ids()[0];

    list.collapse_to("placeholder".to_string());

    assert_eq!(list.ids(), vec![first]);
    assert_eq!(list.get(0).unwrap().item, "placeholder");
    assert_eq!(list.get(0).unwrap().placement, Placement::SOLE);
}

#[test]
fn removed_node_ids_are_not_reused() {
    let mut list = CardList::new();
    list.reconcile(&names(0..2));
    let retired = list.ids()[1];
    list.reconcile(&names(0..1));

    list.reconcile(&names(0..2));

    assert_ne!(list.ids()[1], retired);
}

#[test]
fn explicit_ops_apply_in_sequence() {
    let mut list: CardList<&str> = CardList::new();
    let stats = list.apply(vec![
        ListOp::Create { index: 0, item: "a", placement: Placement::SOLE },
        ListOp::Update { index: 0, item: "b", placement: Placement::SOLE },
        ListOp::Truncate { len: 0 },
    ]);

    assert_eq!((stats.created, stats.updated, stats.removed), (1, 1, 1));
    assert!(list.is_empty());
}
