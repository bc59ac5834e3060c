use serde::{Deserialize, Serialize};

use crate::types::Mark;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    pub turn: u32,
    pub mark: Mark,
    pub cell: usize,
}

/// Linear log of the moves of one game, in the order they were played.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveHistory {
    moves: Vec<MoveRecord>,
}

impl MoveHistory {
    pub fn new() -> Self {
        Self { moves: Vec::new() }
    }

    pub fn record(&mut self, mark: Mark, cell: usize) {
        let turn = self.moves.len() as u32 + 1;
        self.moves.push(MoveRecord { turn, mark, cell });
    }

    pub fn moves(&self) -> &[MoveRecord] {
        &self.moves
    }

    pub fn len(&self) -> usize {
        self.moves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    pub fn clear(&mut self) {
        self.moves.clear();
    }
}
