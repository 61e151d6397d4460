use serde::{Deserialize, Serialize};

use crate::grid::PuzzleGridState;
use crate::hangul;

pub const PROGRESS_SNAPSHOT_VERSION: u32 = 1;

/// Persisted per-topic progress: the flattened user-input grid as Unicode
/// code points, `0` marking an empty cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressSnapshot {
    pub version: u32,
    pub topic: String,
    pub size: u32,
    pub cells: Vec<u32>,
}

pub fn snapshot_from_grid(topic: &str, grid: &PuzzleGridState) -> ProgressSnapshot {
    let cells = grid
        .snapshot()
        .into_iter()
        .map(|cell| cell.map(|ch| ch as u32).unwrap_or(0))
        .collect();
    ProgressSnapshot {
        version: PROGRESS_SNAPSHOT_VERSION,
        topic: topic.to_string(),
        size: grid.size() as u32,
        cells,
    }
}

/// Decodes a snapshot into grid cells for a puzzle of `size`. Version or
/// shape mismatches yield `None`; cell values that are not complete
/// syllables decode as empty, so corrupt data degrades instead of failing.
pub fn cells_from_snapshot(snapshot: &ProgressSnapshot, size: usize) -> Option<Vec<Option<char>>> {
    if snapshot.version != PROGRESS_SNAPSHOT_VERSION {
        return None;
    }
    if snapshot.size as usize != size || snapshot.cells.len() != size * size {
        return None;
    }
    let cells = snapshot
        .cells
        .iter()
        .map(|code| char::from_u32(*code).filter(|ch| hangul::is_syllable(*ch)))
        .collect();
    Some(cells)
}

/// Applies a persisted snapshot onto the active grid; mismatches leave the
/// grid untouched and report `false`.
pub fn apply_snapshot_to_grid(snapshot: &ProgressSnapshot, grid: &mut PuzzleGridState) -> bool {
    match cells_from_snapshot(snapshot, grid.size()) {
        Some(cells) => grid.restore(cells),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grid_round_trip() {
        let mut grid = PuzzleGridState::new(3);
        grid.set_cell(0, 1, Some('가'));
        grid.set_cell(2, 2, Some('나'));
        let snapshot = snapshot_from_grid("1-1", &grid);
        assert_eq!(snapshot.version, PROGRESS_SNAPSHOT_VERSION);
        assert_eq!(snapshot.size, 3);

        let mut restored = PuzzleGridState::new(3);
        assert!(apply_snapshot_to_grid(&snapshot, &mut restored));
        assert_eq!(restored, grid);
    }

    #[test]
    fn size_mismatch_is_rejected() {
        let grid = PuzzleGridState::new(3);
        let snapshot = snapshot_from_grid("1-1", &grid);
        let mut other = PuzzleGridState::new(4);
        assert!(!apply_snapshot_to_grid(&snapshot, &mut other));
    }

    #[test]
    fn invalid_code_points_restore_as_empty() {
        let snapshot = ProgressSnapshot {
            version: PROGRESS_SNAPSHOT_VERSION,
            topic: "1-1".to_string(),
            size: 2,
            cells: vec!['가' as u32, 'x' as u32, 0xD800, 0],
        };
        let mut grid = PuzzleGridState::new(2);
        assert!(apply_snapshot_to_grid(&snapshot, &mut grid));
        assert_eq!(grid.cell(0, 0), Some('가'));
        assert_eq!(grid.cell(0, 1), None);
        assert_eq!(grid.cell(1, 0), None);
        assert_eq!(grid.cell(1, 1), None);
    }

    #[test]
    fn future_version_is_rejected() {
        let grid = PuzzleGridState::new(2);
        let mut snapshot = snapshot_from_grid("1-1", &grid);
        snapshot.version = PROGRESS_SNAPSHOT_VERSION + 1;
        let mut restored = PuzzleGridState::new(2);
        assert!(!apply_snapshot_to_grid(&snapshot, &mut restored));
    }
}
