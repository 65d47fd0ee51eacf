//! Splice-and-reinsert list moves used by drag-and-drop.
//!
//! Both helpers clamp indices to the valid range instead of panicking, since
//! drop indices come straight from DOM events.

#[cfg(test)]
#[path = "reorder_test.rs"]
mod reorder_test;

/// Move the item at `from` to `to` within one list.
///
/// Removing at `from` shifts later items left; inserting at `to` shifts items
/// at and after `to` right. Both indices are clamped to `0..len`. Returns the
/// resolved `(from, to)` pair, or `None` when the list is empty or the move is
/// a no-op.
pub fn move_item_in_array<T>(items: &mut Vec<T>, from: usize, to: usize) -> Option<(usize, usize)> {
    let last = items.len().checked_sub(1)?;
    let from = from.min(last);
    let to = to.min(last);
    if from == to {
        return None;
    }
    let item = items.remove(from);
    items.insert(to, item);
    Some((from, to))
}

/// Move the item at `from` in `source` into `target` at `to`.
///
/// `from` is clamped to `0..source.len()` and `to` to `0..=target.len()`.
/// Returns the resolved `(from, to)` pair, or `None` when `source` is empty.
pub fn transfer_array_item<T>(
    source: &mut Vec<T>,
    target: &mut Vec<T>,
    from: usize,
    to: usize,
) -> Option<(usize, usize)> {
    let last = source.len().checked_sub(1)?;
    let from = from.min(last);
    let to = to.min(target.len());
    let item = source.remove(from);
    target.insert(to, item);
    Some((from, to))
}
