//! Board-session state for the open board.
//!
//! SYSTEM CONTEXT
//! ==============
//! This model stores the local projection of one board (columns with nested
//! tasks) plus the drag gesture in progress. `BoardPage` mutates it from UI
//! events and from network completions; both run on the browser event loop,
//! so every mutation here is a plain synchronous method.
//!
//! ARCHITECTURE
//! ============
//! A drag runs `Idle -> Dragging -> (drop) -> Idle`. The drop is resolved into
//! a `TaskDrop` and applied:
//! - same column: local reorder only, never sent to the server;
//! - cross column: optimistic transfer that yields a `PendingMove`. The
//!   pending move is the pre-image of the transfer; `rollback_move` uses it to
//!   put the task back if the server rejects the move.
//!
//! Deletes are not optimistic: callers remove entries only after the server
//! confirmed. Positions are assigned on creation and never renumbered here.

#[cfg(test)]
#[path = "board_test.rs"]
mod board_test;

use crate::net::types::{Board, Column, MoveTaskRequest, Task, position_from_index};
use crate::util::reorder::{move_item_in_array, transfer_array_item};

/// Open-board state: the loaded board, load status, and drag gesture.
#[derive(Clone, Debug, Default)]
pub struct BoardState {
    /// Board with columns and tasks in render order.
    pub board: Option<Board>,
    /// True while `GET /boards/:id` is in flight.
    pub loading: bool,
    /// Last load failure, shown in place of the board.
    pub error: Option<String>,
    /// Drag gesture in progress, if any.
    pub drag: DragState,
}

/// Drag gesture lifecycle.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum DragState {
    /// No task is being dragged.
    #[default]
    Idle,
    /// A task card is held.
    Dragging(DragSource),
}

/// Where the held task came from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DragSource {
    pub column_id: String,
    pub index: usize,
    pub task_id: String,
}

/// A resolved drop: source and target of one drag gesture.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TaskDrop {
    pub task_id: String,
    pub source_column_id: String,
    pub source_index: usize,
    pub target_column_id: String,
    pub target_index: usize,
}

/// Pre-image of an optimistic cross-column move, awaiting server confirmation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PendingMove {
    pub board_id: String,
    pub task_id: String,
    pub source_column_id: String,
    pub source_index: usize,
    pub target_column_id: String,
    pub target_index: usize,
}

impl PendingMove {
    /// Body of the `.../move` request for this move.
    #[must_use]
    pub fn request(&self) -> MoveTaskRequest {
        MoveTaskRequest {
            new_column_id: self.target_column_id.clone(),
            new_position: position_from_index(self.target_index),
        }
    }
}

/// Outcome of applying a drop.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DropEffect {
    /// Nothing changed (same slot, stale drag, unknown column).
    Ignored,
    /// Local same-column reorder. Not persisted.
    Reordered { column_id: String, from: usize, to: usize },
    /// Optimistic cross-column move; confirm with the server.
    Moved(PendingMove),
}

impl BoardState {
    /// ID of the loaded board.
    #[must_use]
    pub fn board_id(&self) -> Option<&str> {
        self.board.as_ref().map(|b| b.id.as_str())
    }

    /// Column by id.
    #[must_use]
    pub fn column(&self, column_id: &str) -> Option<&Column> {
        self.board.as_ref()?.columns.iter().find(|c| c.id == column_id)
    }

    // -----------------------------------------------------------------
    // Load lifecycle
    // -----------------------------------------------------------------

    /// Start loading `board_id`. A different board is dropped right away so
    /// stale columns never render under the new route.
    pub fn begin_load(&mut self, board_id: &str) {
        if self.board_id() != Some(board_id) {
            self.board = None;
        }
        self.loading = true;
        self.error = None;
        self.drag = DragState::Idle;
    }

    /// Install a fetched board, ordering columns and tasks by position.
    pub fn finish_load(&mut self, mut board: Board) {
        board.columns.sort_by_key(|c| c.position);
        for column in &mut board.columns {
            column.tasks.sort_by_key(|t| t.position);
        }
        self.board = Some(board);
        self.loading = false;
        self.error = None;
    }

    pub fn fail_load(&mut self, message: String) {
        self.loading = false;
        self.error = Some(message);
    }

    /// Discard everything when the view goes away.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    // -----------------------------------------------------------------
    // Creation and deletion
    // -----------------------------------------------------------------

    /// Position for a new column: appended after the existing ones.
    #[must_use]
    pub fn next_column_position(&self) -> Option<i32> {
        self.board.as_ref().map(|b| position_from_index(b.columns.len()))
    }

    /// Position for a new task in `column_id`: appended at the bottom.
    #[must_use]
    pub fn next_task_position(&self, column_id: &str) -> Option<i32> {
        self.column(column_id).map(|c| position_from_index(c.tasks.len()))
    }

    /// Append a column returned by the server. Its task list starts empty.
    pub fn append_column(&mut self, board_id: &str, mut column: Column) -> bool {
        let Some(board) = self.board_for(board_id) else {
            return false;
        };
        column.tasks.clear();
        board.columns.push(column);
        true
    }

    /// Append a task returned by the server to the bottom of `column_id`.
    pub fn append_task(&mut self, board_id: &str, column_id: &str, task: Task) -> bool {
        let Some(column) = self.column_for(board_id, column_id) else {
            return false;
        };
        column.tasks.push(task);
        true
    }

    /// Remove exactly one task, matched by id. Call after the server delete
    /// succeeded.
    pub fn remove_task(&mut self, board_id: &str, column_id: &str, task_id: &str) -> Option<Task> {
        let column = self.column_for(board_id, column_id)?;
        let index = column.tasks.iter().position(|t| t.id == task_id)?;
        Some(column.tasks.remove(index))
    }

    /// Remove a column after the server delete succeeded.
    pub fn remove_column(&mut self, board_id: &str, column_id: &str) -> Option<Column> {
        let board = self.board_for(board_id)?;
        let index = board.columns.iter().position(|c| c.id == column_id)?;
        Some(board.columns.remove(index))
    }

    /// Apply the scalar fields of a `PATCH /boards/:id` response. Columns are
    /// kept since the response may omit them.
    pub fn apply_board_update(&mut self, updated: &Board) -> bool {
        let Some(board) = self.board_for(&updated.id) else {
            return false;
        };
        board.name.clone_from(&updated.name);
        board.description.clone_from(&updated.description);
        if !updated.updated_at.is_empty() {
            board.updated_at.clone_from(&updated.updated_at);
        }
        true
    }

    // -----------------------------------------------------------------
    // Drag and drop
    // -----------------------------------------------------------------

    /// Pick up the task at `index` in `column_id`.
    pub fn begin_drag(&mut self, column_id: &str, index: usize) -> bool {
        let Some(task) = self.column(column_id).and_then(|c| c.tasks.get(index)) else {
            return false;
        };
        self.drag = DragState::Dragging(DragSource {
            column_id: column_id.to_owned(),
            index,
            task_id: task.id.clone(),
        });
        true
    }

    /// Abandon the gesture without a drop.
    pub fn cancel_drag(&mut self) {
        self.drag = DragState::Idle;
    }

    #[must_use]
    pub fn is_dragging(&self, task_id: &str) -> bool {
        matches!(&self.drag, DragState::Dragging(source) if source.task_id == task_id)
    }

    /// End the gesture over `target_column_id` at `target_index`.
    pub fn resolve_drop(&mut self, target_column_id: &str, target_index: usize) -> Option<TaskDrop> {
        let DragState::Dragging(source) = std::mem::take(&mut self.drag) else {
            return None;
        };
        Some(TaskDrop {
            task_id: source.task_id,
            source_column_id: source.column_id,
            source_index: source.index,
            target_column_id: target_column_id.to_owned(),
            target_index,
        })
    }

    /// Resolve and apply a drop in one step.
    pub fn drop_task(&mut self, target_column_id: &str, target_index: usize) -> DropEffect {
        match self.resolve_drop(target_column_id, target_index) {
            Some(drop) => self.apply_drop(&drop),
            None => DropEffect::Ignored,
        }
    }

    /// Apply a drop to the in-memory lists.
    ///
    /// The dragged task must still sit at `source_index`; otherwise the list
    /// changed mid-gesture and the drop is ignored.
    pub fn apply_drop(&mut self, drop: &TaskDrop) -> DropEffect {
        let Some(board) = self.board.as_mut() else {
            return DropEffect::Ignored;
        };
        let (Some(src), Some(dst)) = (
            column_index(board, &drop.source_column_id),
            column_index(board, &drop.target_column_id),
        ) else {
            return DropEffect::Ignored;
        };
        let still_in_place = board.columns[src]
            .tasks
            .get(drop.source_index)
            .is_some_and(|t| t.id == drop.task_id);
        if !still_in_place {
            return DropEffect::Ignored;
        }

        if src == dst {
            let column = &mut board.columns[src];
            let Some((from, to)) = move_item_in_array(&mut column.tasks, drop.source_index, drop.target_index)
            else {
                return DropEffect::Ignored;
            };
            log::debug!("reordered task {} in column {} ({from} -> {to}); not persisted", drop.task_id, column.id);
            return DropEffect::Reordered { column_id: column.id.clone(), from, to };
        }

        let (source, target) = pair_mut(&mut board.columns, src, dst);
        let Some((from, to)) = transfer_array_item(&mut source.tasks, &mut target.tasks, drop.source_index, drop.target_index)
        else {
            return DropEffect::Ignored;
        };
        target.tasks[to].column_id.clone_from(&target.id);
        DropEffect::Moved(PendingMove {
            board_id: board.id.clone(),
            task_id: drop.task_id.clone(),
            source_column_id: source.id.clone(),
            source_index: from,
            target_column_id: target.id.clone(),
            target_index: to,
        })
    }

    /// Undo an optimistic move the server rejected.
    ///
    /// The task is located by id in the target column and reinserted into the
    /// source column at its original place. Does nothing if a different board
    /// is loaded or the task is no longer in the target column.
    pub fn rollback_move(&mut self, pending: &PendingMove) -> bool {
        let Some(board) = self.board_for(&pending.board_id) else {
            return false;
        };
        let (Some(src), Some(dst)) = (
            column_index(board, &pending.source_column_id),
            column_index(board, &pending.target_column_id),
        ) else {
            return false;
        };
        if src == dst {
            return false;
        }
        let (source, target) = pair_mut(&mut board.columns, src, dst);
        let Some(index) = target.tasks.iter().position(|t| t.id == pending.task_id) else {
            return false;
        };
        let mut task = target.tasks.remove(index);
        task.column_id.clone_from(&source.id);
        let at = restore_index(&source.tasks, &task, pending.source_index);
        source.tasks.insert(at, task);
        true
    }

    fn board_for(&mut self, board_id: &str) -> Option<&mut Board> {
        self.board.as_mut().filter(|b| b.id == board_id)
    }

    fn column_for(&mut self, board_id: &str, column_id: &str) -> Option<&mut Column> {
        self.board_for(board_id)?.columns.iter_mut().find(|c| c.id == column_id)
    }
}

/// Where a rolled-back task goes in its source column.
///
/// While the column is still in server order, the task's unchanged
/// `position` places it; this stays correct when several moves out of the
/// same column are rejected in any order. After a local reorder the
/// positions no longer describe the list, so the captured index is used.
fn restore_index(tasks: &[Task], task: &Task, source_index: usize) -> usize {
    if tasks.windows(2).all(|w| w[0].position <= w[1].position) {
        tasks.partition_point(|t| t.position < task.position)
    } else {
        source_index.min(tasks.len())
    }
}

fn column_index(board: &Board, column_id: &str) -> Option<usize> {
    board.columns.iter().position(|c| c.id == column_id)
}

/// Two distinct mutable elements of one slice.
fn pair_mut<T>(items: &mut [T], a: usize, b: usize) -> (&mut T, &mut T) {
    debug_assert_ne!(a, b);
    if a < b {
        let (left, right) = items.split_at_mut(b);
        (&mut left[a], &mut right[0])
    } else {
        let (left, right) = items.split_at_mut(a);
        (&mut right[0], &mut left[b])
    }
}
