pub(crate) use sipjamalpuri_core::{
    puzzle_for_topic, topic_by_id, ClueSelector, Coord, Direction, PuzzleSession, MENU_SECTIONS,
};

pub(crate) const MIN_CELL_SIZE: f64 = 28.0;
pub(crate) const MAX_CELL_SIZE: f64 = 36.0;
pub(crate) const GRID_PADDING: f64 = 40.0;

pub(crate) const MIN_SCALE: f64 = 1.0;
pub(crate) const MAX_SCALE: f64 = 2.5;
pub(crate) const PINCH_SCALE_STEP: f64 = 0.01;
pub(crate) const PAN_LIMIT_PER_SCALE: f64 = 150.0;

/// Largest cell size that keeps the whole grid inside the available area,
/// clamped to the fixed bounds.
pub(crate) fn calculate_cell_size(size: usize, avail_width: f64, avail_height: f64) -> f64 {
    if size == 0 {
        return MIN_CELL_SIZE;
    }
    let max_grid = (avail_width - GRID_PADDING).min(avail_height - GRID_PADDING);
    let fitted = (max_grid / size as f64).floor().min(MAX_CELL_SIZE);
    fitted.max(MIN_CELL_SIZE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cell_size_clamps_to_bounds() {
        assert_eq!(calculate_cell_size(10, 1000.0, 1000.0), MAX_CELL_SIZE);
        assert_eq!(calculate_cell_size(10, 100.0, 100.0), MIN_CELL_SIZE);
        let mid = calculate_cell_size(10, 360.0, 500.0);
        assert_eq!(mid, 32.0);
    }
}
