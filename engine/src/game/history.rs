use std::collections::VecDeque;

use super::board::Board;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Snapshot {
    pub board: Board,
    pub score: u32,
}

impl Snapshot {
    pub fn new(board: Board, score: u32) -> Self {
        Self { board, score }
    }
}

#[derive(Clone, Debug)]
pub enum HistoryAction {
    Commit(Snapshot),
    Undo,
    Redo,
}

/// Linear undo/redo log. A commit after an undo discards the redo stack.
#[derive(Clone, Debug)]
pub struct History {
    present: Snapshot,
    past: Vec<Snapshot>,
    future: VecDeque<Snapshot>,
}

impl History {
    pub fn new(present: Snapshot) -> Self {
        Self {
            present,
            past: Vec::new(),
            future: VecDeque::new(),
        }
    }

    pub fn present(&self) -> &Snapshot {
        &self.present
    }

    pub fn past_len(&self) -> usize {
        self.past.len()
    }

    pub fn future_len(&self) -> usize {
        self.future.len()
    }

    pub fn can_undo(&self) -> bool {
        !self.past.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.future.is_empty()
    }

    /// Reducer form of `commit`/`undo`/`redo`.
    pub fn apply(mut self, action: HistoryAction) -> Self {
        match action {
            HistoryAction::Commit(snapshot) => self.commit(snapshot),
            HistoryAction::Undo => {
                self.undo();
            }
            HistoryAction::Redo => {
                self.redo();
            }
        }
        self
    }

    pub fn commit(&mut self, snapshot: Snapshot) {
        let previous = std::mem::replace(&mut self.present, snapshot);
        self.past.push(previous);
        self.future.clear();
    }

    /// Returns `false` (and changes nothing) when there is nothing to undo.
    pub fn undo(&mut self) -> bool {
        let Some(restored) = self.past.pop() else {
            return false;
        };
        let previous = std::mem::replace(&mut self.present, restored);
        self.future.push_front(previous);
        true
    }

    /// Returns `false` (and changes nothing) when there is nothing to redo.
    pub fn redo(&mut self) -> bool {
        let Some(restored) = self.future.pop_front() else {
            return false;
        };
        let previous = std::mem::replace(&mut self.present, restored);
        self.past.push(previous);
        true
    }

    /// Drops both stacks and starts over from `present`.
    pub fn reset(&mut self, present: Snapshot) {
        self.present = present;
        self.past.clear();
        self.future.clear();
    }
}
