use crate::buffer::AnswerBuffer;
use crate::geometry::{resolve_path, GeometryError};
use crate::grid::{GridError, PuzzleGridState};
use crate::puzzle::{ClueSelector, Coord, PuzzleDefinition};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionPhase {
    Idle,
    ClueSelected,
    AnswerEditing,
}

#[derive(Clone, Debug)]
pub struct Selection {
    pub selector: ClueSelector,
    pub path: Vec<Coord>,
}

/// Orchestrates one puzzle-solving session: clue selection, the single open
/// answer buffer, and commits into the shared grid state.
pub struct PuzzleSession {
    puzzle: PuzzleDefinition,
    grid: PuzzleGridState,
    selection: Option<Selection>,
    buffer: Option<AnswerBuffer>,
}

impl PuzzleSession {
    pub fn new(puzzle: PuzzleDefinition) -> Self {
        let grid = PuzzleGridState::new(puzzle.size);
        Self {
            puzzle,
            grid,
            selection: None,
            buffer: None,
        }
    }

    pub fn puzzle(&self) -> &PuzzleDefinition {
        &self.puzzle
    }

    pub fn grid(&self) -> &PuzzleGridState {
        &self.grid
    }

    pub fn phase(&self) -> SessionPhase {
        if self.buffer.is_some() {
            SessionPhase::AnswerEditing
        } else if self.selection.is_some() {
            SessionPhase::ClueSelected
        } else {
            SessionPhase::Idle
        }
    }

    pub fn selection(&self) -> Option<&Selection> {
        self.selection.as_ref()
    }

    pub fn buffer(&self) -> Option<&AnswerBuffer> {
        self.buffer.as_ref()
    }

    pub fn buffer_mut(&mut self) -> Option<&mut AnswerBuffer> {
        self.buffer.as_mut()
    }

    /// Resolves the clue's cell path and makes it the current selection.
    /// Selecting while an editor is open implicitly cancels it; a failed
    /// resolution rejects the selection and leaves the previous state
    /// untouched.
    pub fn select_clue(&mut self, selector: ClueSelector) -> Result<(), GeometryError> {
        let path = resolve_path(&self.puzzle, &selector)?;
        self.buffer = None;
        self.selection = Some(Selection { selector, path });
        Ok(())
    }

    /// Opens the answer buffer for the selected clue, seeded from the grid
    /// content along its path. No-op without a selection.
    pub fn open_editor(&mut self) {
        let Some(selection) = self.selection.as_ref() else {
            return;
        };
        let initial: Vec<Option<char>> = selection
            .path
            .iter()
            .map(|coord| self.grid.cell_at(*coord))
            .collect();
        self.buffer = Some(AnswerBuffer::open(selection.path.len(), &initial));
    }

    /// Discards the open buffer and clears the selection.
    pub fn cancel(&mut self) {
        self.buffer = None;
        self.selection = None;
    }

    /// Commits a complete buffer into the grid and returns to idle. Reports
    /// `Ok(false)` when there is nothing to commit or the buffer is still
    /// incomplete (the confirm affordance is disabled in that state anyway).
    pub fn confirm(&mut self) -> Result<bool, GridError> {
        let (Some(selection), Some(buffer)) = (self.selection.as_ref(), self.buffer.as_ref())
        else {
            return Ok(false);
        };
        if !buffer.is_complete() {
            return Ok(false);
        }
        self.grid.commit_buffer(&selection.path, buffer.slots())?;
        self.buffer = None;
        self.selection = None;
        Ok(true)
    }

    /// Out-of-modal single-cell edit from the grid view.
    pub fn set_cell(&mut self, row: usize, col: usize, value: Option<char>) {
        self.grid.set_cell(row, col, value);
    }

    /// Wholesale grid replacement when loading persisted progress.
    pub fn restore_grid(&mut self, cells: Vec<Option<char>>) -> bool {
        self.grid.restore(cells)
    }
}
