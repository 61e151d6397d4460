use std::fmt;

use crate::puzzle::{ClueSelector, Coord, Direction, PuzzleDefinition};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GeometryError {
    /// The selector references a number absent from the puzzle's map.
    UnknownClue { number: String },
    /// The scanned path disagrees with the declared answer length; the puzzle
    /// data itself is inconsistent.
    LengthMismatch {
        key: String,
        expected: usize,
        found: usize,
    },
}

impl fmt::Display for GeometryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GeometryError::UnknownClue { number } => {
                write!(f, "unknown clue number {number}")
            }
            GeometryError::LengthMismatch {
                key,
                expected,
                found,
            } => {
                write!(
                    f,
                    "clue {key} declares {expected} cells but the grid yields {found}"
                )
            }
        }
    }
}

impl std::error::Error for GeometryError {}

/// Walks the clue's axis from its start cell, collecting coordinates while
/// the next cell is inside the grid and not blocked. Deterministic, no
/// backtracking; the result always contains at least the start cell.
pub fn resolve_path(
    puzzle: &PuzzleDefinition,
    selector: &ClueSelector,
) -> Result<Vec<Coord>, GeometryError> {
    let start = puzzle
        .start_of(&selector.number)
        .ok_or_else(|| GeometryError::UnknownClue {
            number: selector.number.clone(),
        })?;

    let mut cells = vec![start];
    let mut current = start;
    loop {
        let next = match selector.direction {
            Direction::Across => Coord {
                x: current.x + 1,
                y: current.y,
            },
            Direction::Down => Coord {
                x: current.x,
                y: current.y + 1,
            },
        };
        if puzzle.is_blocked(next) {
            break;
        }
        cells.push(next);
        current = next;
    }

    if let Some(meta) = puzzle.answer_meta(selector) {
        if meta.length != cells.len() {
            return Err(GeometryError::LengthMismatch {
                key: selector.key(),
                expected: meta.length,
                found: cells.len(),
            });
        }
    }
    Ok(cells)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn open_field(size: usize) -> PuzzleDefinition {
        let mut numbers = HashMap::new();
        numbers.insert("1".to_string(), Coord { x: 2, y: 3 });
        let mut grid = vec![vec!['.'; size]; size];
        grid[3][6] = crate::puzzle::BLOCKED;
        PuzzleDefinition {
            size,
            grid,
            numbers,
            clues: HashMap::new(),
            answers: HashMap::new(),
        }
    }

    #[test]
    fn across_scan_stops_at_blocked_cell() {
        let puzzle = open_field(10);
        let path = resolve_path(&puzzle, &ClueSelector::new("1", Direction::Across)).unwrap();
        assert_eq!(
            path,
            vec![
                Coord { x: 2, y: 3 },
                Coord { x: 3, y: 3 },
                Coord { x: 4, y: 3 },
                Coord { x: 5, y: 3 },
            ]
        );
    }

    #[test]
    fn down_scan_stops_at_grid_edge() {
        let puzzle = open_field(10);
        let path = resolve_path(&puzzle, &ClueSelector::new("1", Direction::Down)).unwrap();
        assert_eq!(path.len(), 7);
        assert_eq!(path[0], Coord { x: 2, y: 3 });
        assert_eq!(path[6], Coord { x: 2, y: 9 });
    }

    #[test]
    fn unknown_clue_is_rejected() {
        let puzzle = open_field(10);
        let err = resolve_path(&puzzle, &ClueSelector::new("9", Direction::Across)).unwrap_err();
        assert_eq!(
            err,
            GeometryError::UnknownClue {
                number: "9".to_string()
            }
        );
    }

    #[test]
    fn declared_length_must_match_scan() {
        let mut puzzle = open_field(10);
        puzzle.answers.insert(
            "1".to_string(),
            crate::puzzle::AnswerMeta {
                answer: "대한민국만세".to_string(),
                direction: Direction::Across,
                length: 6,
            },
        );
        let err = resolve_path(&puzzle, &ClueSelector::new("1", Direction::Across)).unwrap_err();
        assert_eq!(
            err,
            GeometryError::LengthMismatch {
                key: "1".to_string(),
                expected: 6,
                found: 4,
            }
        );
    }
}
