//! Board-list state for the boards overview.
//!
//! DESIGN
//! ======
//! Separating list state from the open board avoids coupling navigation
//! inventory with in-board editing data. The server stays the source of truth
//! for ids and timestamps; the list only mirrors confirmed responses.

#[cfg(test)]
#[path = "boards_test.rs"]
mod boards_test;

use crate::net::types::Board;

/// Board list plus request bookkeeping.
#[derive(Clone, Debug, Default)]
pub struct BoardsState {
    pub items: Vec<Board>,
    pub loading: bool,
    pub error: Option<String>,
}

impl BoardsState {
    pub fn begin_load(&mut self) {
        self.loading = true;
        self.error = None;
    }

    pub fn finish_load(&mut self, boards: Vec<Board>) {
        self.items = boards;
        self.loading = false;
    }

    pub fn fail_load(&mut self, message: String) {
        self.loading = false;
        self.error = Some(message);
    }

    /// True once loaded with nothing to show.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        !self.loading && self.error.is_none() && self.items.is_empty()
    }

    /// Insert a newly created board at the top of the list.
    pub fn prepend(&mut self, board: Board) {
        self.items.insert(0, board);
    }

    /// Drop a board after the server confirmed its deletion.
    pub fn remove(&mut self, board_id: &str) -> Option<Board> {
        let index = self.items.iter().position(|b| b.id == board_id)?;
        Some(self.items.remove(index))
    }
}
