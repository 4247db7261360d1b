//! Integration tests for SinglyLinkedList.
//!
//! These tests drive the list only through its public API and check that
//! `first`, `last` and `len` stay consistent with the chain after every
//! operation.

use rstest::{fixture, rstest};
use sllist::{ListError, ListNode, SinglyLinkedList};
use std::collections::VecDeque;

// =============================================================================
// Helpers
// =============================================================================

#[fixture]
fn abc() -> SinglyLinkedList<&'static str> {
    SinglyLinkedList::from_sequence(&["a", "b", "c"]).unwrap()
}

fn values<T: Clone>(list: &SinglyLinkedList<T>) -> Vec<T> {
    list.iter().collect()
}

fn assert_chain_matches<T>(list: &SinglyLinkedList<T>) {
    let nodes: Vec<ListNode<T>> = list.nodes().collect();
    assert_eq!(nodes.len(), list.len());
    if let Some(last) = nodes.last() {
        assert!(ListNode::ptr_eq(list.first().unwrap(), &nodes[0]));
        assert!(ListNode::ptr_eq(list.last().unwrap(), last));
        assert!(last.next().is_none());
    } else {
        assert!(list.first().is_none());
        assert!(list.last().is_none());
    }
}

// =============================================================================
// Construction
// =============================================================================

#[rstest]
fn test_default_is_empty() {
    let list: SinglyLinkedList<i32> = SinglyLinkedList::default();
    assert!(list.is_empty());
    assert_chain_matches(&list);
}

#[rstest]
fn test_from_sequence_accepts_slices_vecs_and_deques() {
    let slice: &[i32] = &[1, 2];
    let deque: VecDeque<i32> = [5, 6].into_iter().collect();

    assert_eq!(values(&SinglyLinkedList::from_sequence(slice).unwrap()), vec![1, 2]);
    assert_eq!(values(&SinglyLinkedList::from_sequence(&vec![3, 4]).unwrap()), vec![3, 4]);
    assert_eq!(values(&SinglyLinkedList::from_sequence(&deque).unwrap()), vec![5, 6]);
}

#[rstest]
fn test_from_empty_sequence() {
    let empty: Vec<i32> = Vec::new();
    let list = SinglyLinkedList::from_sequence(&empty).unwrap();
    assert!(list.is_empty());
    assert_chain_matches(&list);
}

#[rstest]
fn test_extend_from_sequence_appends(mut abc: SinglyLinkedList<&'static str>) {
    abc.extend_from_sequence(&["d", "e"]).unwrap();
    assert_eq!(values(&abc), vec!["a", "b", "c", "d", "e"]);
    assert_chain_matches(&abc);
}

#[rstest]
fn test_collect_and_extend() {
    let mut list: SinglyLinkedList<i32> = (1..=3).collect();
    list.extend(4..=5);
    assert_eq!(values(&list), vec![1, 2, 3, 4, 5]);
    assert_chain_matches(&list);
}

// =============================================================================
// Appends and insertion
// =============================================================================

#[rstest]
fn test_appends_return_linked_handles() {
    let mut list = SinglyLinkedList::new();
    let middle = list.append_right(2);
    let front = list.append_left(1);
    let back = list.append_right(3);

    assert!(ListNode::ptr_eq(&front.next().unwrap(), &middle));
    assert!(ListNode::ptr_eq(&middle.next().unwrap(), &back));
    assert!([&front, &middle, &back].iter().all(|node| list.contains_node(node)));
    assert_chain_matches(&list);
}

#[rstest]
fn test_insert_after_at_every_position(abc: SinglyLinkedList<&'static str>) {
    let mut list = abc;
    let a = list.get(0).unwrap();
    let c = list.get(2).unwrap();

    list.insert_after("head", None).unwrap();
    list.insert_after("after-a", Some(&a)).unwrap();
    list.insert_after("after-c", Some(&c)).unwrap();

    assert_eq!(
        values(&list),
        vec!["head", "a", "after-a", "b", "c", "after-c"]
    );
    assert_eq!(list.len(), 6);
    assert_chain_matches(&list);
}

#[rstest]
fn test_insert_after_node_of_dropped_list_is_rejected(mut abc: SinglyLinkedList<&'static str>) {
    let stale = {
        let other = SinglyLinkedList::from_sequence(&["x"]).unwrap();
        other.get(0).unwrap()
    };
    assert_eq!(
        abc.insert_after("y", Some(&stale)).unwrap_err(),
        ListError::ForeignNode
    );
    assert_eq!(abc.len(), 3);
}

// =============================================================================
// Removal
// =============================================================================

#[rstest]
fn test_remove_every_node_in_turn(mut abc: SinglyLinkedList<&'static str>) {
    let nodes: Vec<ListNode<&str>> = abc.nodes().collect();
    for (removed, node) in nodes.iter().enumerate() {
        abc.remove(node).unwrap();
        assert_eq!(abc.len(), nodes.len() - removed - 1);
        assert_chain_matches(&abc);
    }
    assert!(abc.is_empty());
}

#[rstest]
fn test_remove_last_then_append(mut abc: SinglyLinkedList<&'static str>) {
    let c = abc.last().cloned().unwrap();
    abc.remove(&c).unwrap();
    abc.append_right("d");
    assert_eq!(values(&abc), vec!["a", "b", "d"]);
    assert_chain_matches(&abc);
}

#[rstest]
fn test_pop_right_until_empty(mut abc: SinglyLinkedList<&'static str>) {
    let mut popped = Vec::new();
    while let Ok(node) = abc.pop_right() {
        popped.push(node.get());
        assert_chain_matches(&abc);
    }
    assert_eq!(popped, vec!["c", "b", "a"]);
    assert_eq!(abc.pop_right().unwrap_err(), ListError::EmptyList);
}

#[rstest]
fn test_popped_node_is_rejected_by_remove(mut abc: SinglyLinkedList<&'static str>) {
    let a = abc.pop_left().unwrap();
    assert_eq!(abc.remove(&a), Err(ListError::ForeignNode));
    assert_eq!(a.get(), "a");
    assert_eq!(values(&abc), vec!["b", "c"]);
}

#[rstest]
fn test_remove_node_from_other_list_keeps_both_intact() {
    let mut left = SinglyLinkedList::from_sequence(&[1, 2]).unwrap();
    let right = SinglyLinkedList::from_sequence(&[1, 2]).unwrap();
    let node = right.get(1).unwrap();

    assert_eq!(left.remove(&node), Err(ListError::ForeignNode));

    assert_eq!(values(&left), vec![1, 2]);
    assert_eq!(values(&right), vec![1, 2]);
    assert!(right.contains_node(&node));
}

// =============================================================================
// Positional access
// =============================================================================

#[rstest]
fn test_get_returns_live_handles(abc: SinglyLinkedList<&'static str>) {
    let b = abc.get(1).unwrap();
    b.set_value("B");
    assert_eq!(values(&abc), vec!["a", "B", "c"]);
}

#[rstest]
#[case(3)]
#[case(usize::MAX)]
fn test_get_out_of_range(abc: SinglyLinkedList<&'static str>, #[case] index: usize) {
    assert_eq!(
        abc.get(index).unwrap_err(),
        ListError::IndexOutOfRange { index, size: 3 }
    );
}

#[rstest]
fn test_set_from_standalone_node(mut abc: SinglyLinkedList<&'static str>) {
    abc.set(2, &ListNode::new("z")).unwrap();
    assert_eq!(values(&abc), vec!["a", "b", "z"]);
    assert_eq!(abc.len(), 3);
}

#[rstest]
fn test_set_out_of_range_leaves_list_unchanged(mut abc: SinglyLinkedList<&'static str>) {
    assert!(abc.set(7, &ListNode::new("z")).is_err());
    assert_eq!(values(&abc), vec!["a", "b", "c"]);
}

// =============================================================================
// Lifecycle
// =============================================================================

#[rstest]
fn test_handles_outlive_list() {
    let handles: Vec<ListNode<String>> = {
        let list: SinglyLinkedList<String> = ["x", "y"].iter().map(ToString::to_string).collect();
        list.nodes().collect()
    };
    assert!(handles.iter().all(|node| !node.is_attached()));
    assert_eq!(handles[0].get(), "x");
    assert_eq!(handles[1].get(), "y");
}

#[rstest]
fn test_clear_then_reuse(mut abc: SinglyLinkedList<&'static str>) {
    let old = abc.first().cloned().unwrap();
    abc.clear();
    abc.append_right("new");
    assert_eq!(values(&abc), vec!["new"]);
    assert!(!abc.contains_node(&old));
    assert_chain_matches(&abc);
}

// =============================================================================
// Value Borrows
// =============================================================================

#[rstest]
fn test_appends_while_values_are_borrowed(mut abc: SinglyLinkedList<&'static str>) {
    let first = abc.first().cloned().unwrap();
    let last = abc.last().cloned().unwrap();
    let first_guard = first.value();
    let last_guard = last.value_mut();

    abc.append_left("z");
    abc.append_right("d");

    drop(last_guard);
    assert_eq!(*first_guard, "a");
    drop(first_guard);
    assert_eq!(values(&abc), vec!["z", "a", "b", "c", "d"]);
    assert_chain_matches(&abc);
}

#[rstest]
fn test_insert_after_while_anchor_is_borrowed(mut abc: SinglyLinkedList<&'static str>) {
    let b = abc.get(1).unwrap();
    let c = abc.get(2).unwrap();
    let guard = b.value_mut();

    abc.insert_after("x", Some(&b)).unwrap();
    abc.insert_after("y", Some(&c)).unwrap();

    drop(guard);
    assert_eq!(values(&abc), vec!["a", "b", "x", "c", "y"]);
    assert_chain_matches(&abc);
}

#[rstest]
fn test_iteration_while_value_is_borrowed(abc: SinglyLinkedList<&'static str>) {
    let b = abc.get(1).unwrap();
    let shared = b.value();
    assert_eq!(values(&abc), vec!["a", "b", "c"]);
    drop(shared);

    let exclusive = b.value_mut();
    assert_eq!(abc.nodes().count(), 3);
    assert!(ListNode::ptr_eq(&b.next().unwrap(), abc.last().unwrap()));
    drop(exclusive);
}

#[rstest]
fn test_pop_right_while_tail_is_borrowed(mut abc: SinglyLinkedList<&'static str>) {
    let c = abc.last().cloned().unwrap();
    let guard = c.value_mut();

    let popped = abc.pop_right().unwrap();

    drop(guard);
    assert!(ListNode::ptr_eq(&popped, &c));
    assert!(!c.is_attached());
    assert_eq!(abc.len(), abc.nodes().count());
    assert_eq!(values(&abc), vec!["a", "b"]);
    assert_chain_matches(&abc);
}

#[rstest]
#[case(0)]
#[case(1)]
#[case(2)]
fn test_remove_while_node_is_borrowed(mut abc: SinglyLinkedList<&'static str>, #[case] index: usize) {
    let node = abc.get(index).unwrap();
    let guard = node.value_mut();

    abc.remove(&node).unwrap();

    drop(guard);
    assert!(!node.is_attached());
    assert!(node.next().is_none());
    assert_eq!(abc.len(), 2);
    assert_eq!(abc.len(), abc.nodes().count());
    assert_chain_matches(&abc);
}

#[rstest]
fn test_display_while_element_is_mutably_borrowed(abc: SinglyLinkedList<&'static str>) {
    let b = abc.get(1).unwrap();
    let guard = b.value_mut();

    assert_eq!(abc.to_string(), "SinglyLinkedList([a, <borrowed>, c])");
    assert_eq!(format!("{abc:?}"), "SinglyLinkedList([\"a\", <borrowed>, \"c\"])");

    drop(guard);
    assert_eq!(abc.to_string(), "SinglyLinkedList([a, b, c])");
}
