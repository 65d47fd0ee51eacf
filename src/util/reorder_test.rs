use super::*;

fn letters(n: usize) -> Vec<char> {
    ('a'..='z').take(n).collect()
}

// =============================================================
// move_item_in_array
// =============================================================

#[test]
fn move_forward_shifts_following_items_left() {
    let mut items = vec!['a', 'b', 'c', 'd'];
    assert_eq!(move_item_in_array(&mut items, 0, 2), Some((0, 2)));
    assert_eq!(items, vec!['b', 'c', 'a', 'd']);
}

#[test]
fn move_backward_shifts_items_right() {
    let mut items = vec!['a', 'b', 'c', 'd'];
    assert_eq!(move_item_in_array(&mut items, 3, 1), Some((3, 1)));
    assert_eq!(items, vec!['a', 'd', 'b', 'c']);
}

#[test]
fn move_to_same_index_is_noop() {
    let mut items = vec!['a', 'b', 'c'];
    assert_eq!(move_item_in_array(&mut items, 1, 1), None);
    assert_eq!(items, vec!['a', 'b', 'c']);
}

#[test]
fn move_clamps_out_of_range_indices() {
    let mut items = vec!['a', 'b', 'c'];
    assert_eq!(move_item_in_array(&mut items, 0, 99), Some((0, 2)));
    assert_eq!(items, vec!['b', 'c', 'a']);

    let mut items = vec!['a', 'b', 'c'];
    assert_eq!(move_item_in_array(&mut items, 99, 0), Some((2, 0)));
    assert_eq!(items, vec!['c', 'a', 'b']);
}

#[test]
fn move_on_empty_list_does_nothing() {
    let mut items: Vec<char> = Vec::new();
    assert_eq!(move_item_in_array(&mut items, 0, 0), None);
    assert!(items.is_empty());
}

#[test]
fn move_then_inverse_move_restores_order_for_all_index_pairs() {
    for len in 1..=6 {
        let original = letters(len);
        for i in 0..len {
            for j in 0..len {
                let mut items = original.clone();
                move_item_in_array(&mut items, i, j);
                move_item_in_array(&mut items, j, i);
                assert_eq!(items, original, "len={len} i={i} j={j}");
            }
        }
    }
}

#[test]
fn move_preserves_length_and_members() {
    let original = letters(5);
    for i in 0..5 {
        for j in 0..5 {
            let mut items = original.clone();
            move_item_in_array(&mut items, i, j);
            let mut sorted = items.clone();
            sorted.sort_unstable();
            assert_eq!(sorted, original);
            assert_eq!(items[j], original[i]);
        }
    }
}

// =============================================================
// transfer_array_item
// =============================================================

#[test]
fn transfer_into_empty_target() {
    let mut source = vec!["t1", "t2"];
    let mut target: Vec<&str> = Vec::new();
    assert_eq!(transfer_array_item(&mut source, &mut target, 0, 0), Some((0, 0)));
    assert_eq!(source, vec!["t2"]);
    assert_eq!(target, vec!["t1"]);
}

#[test]
fn transfer_inserts_at_index_and_shifts_right() {
    let mut source = vec!["t1", "t2", "t3"];
    let mut target = vec!["u1", "u2"];
    assert_eq!(transfer_array_item(&mut source, &mut target, 1, 1), Some((1, 1)));
    assert_eq!(source, vec!["t1", "t3"]);
    assert_eq!(target, vec!["u1", "t2", "u2"]);
}

#[test]
fn transfer_allows_append_at_target_len() {
    let mut source = vec!["t1"];
    let mut target = vec!["u1", "u2"];
    assert_eq!(transfer_array_item(&mut source, &mut target, 0, 2), Some((0, 2)));
    assert_eq!(target, vec!["u1", "u2", "t1"]);
}

#[test]
fn transfer_clamps_indices() {
    let mut source = vec!["t1", "t2"];
    let mut target = vec!["u1"];
    assert_eq!(transfer_array_item(&mut source, &mut target, 10, 10), Some((1, 1)));
    assert_eq!(source, vec!["t1"]);
    assert_eq!(target, vec!["u1", "t2"]);
}

#[test]
fn transfer_from_empty_source_does_nothing() {
    let mut source: Vec<&str> = Vec::new();
    let mut target = vec!["u1"];
    assert_eq!(transfer_array_item(&mut source, &mut target, 0, 0), None);
    assert_eq!(target, vec!["u1"]);
}

#[test]
fn transfer_back_restores_both_lists() {
    let source_before = vec!["t1", "t2", "t3"];
    let target_before = vec!["u1", "u2"];
    for from in 0..source_before.len() {
        for to in 0..=target_before.len() {
            let mut source = source_before.clone();
            let mut target = target_before.clone();
            let (from, to) = transfer_array_item(&mut source, &mut target, from, to).unwrap();
            transfer_array_item(&mut target, &mut source, to, from);
            assert_eq!(source, source_before);
            assert_eq!(target, target_before);
        }
    }
}
