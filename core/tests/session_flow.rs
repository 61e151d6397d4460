use sipjamalpuri_core::{
    apply_snapshot_to_grid, puzzle_for_topic, resolve_path, snapshot_from_grid, ClueSelector,
    Coord, Direction, GeometryError, ProgressSnapshot, PuzzleGridState, PuzzleSession,
    SessionPhase,
};

fn session_for(topic: &str) -> PuzzleSession {
    PuzzleSession::new(puzzle_for_topic(topic).expect("catalog topic"))
}

#[test]
fn select_resolves_the_documented_path() {
    let mut session = session_for("1-1");
    session
        .select_clue(ClueSelector::new("1", Direction::Across))
        .unwrap();
    assert_eq!(session.phase(), SessionPhase::ClueSelected);
    let path = session.selection().unwrap().path.clone();
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
fn fill_confirm_writes_row_major_cells() {
    let mut session = session_for("1-1");
    session
        .select_clue(ClueSelector::new("1", Direction::Across))
        .unwrap();
    session.open_editor();
    assert_eq!(session.phase(), SessionPhase::AnswerEditing);

    for ch in ['대', '한', '민', '국'] {
        assert!(!session.buffer().unwrap().is_complete());
        session.buffer_mut().unwrap().type_char(ch);
    }
    assert!(session.buffer().unwrap().is_complete());
    assert!(session.confirm().unwrap());
    assert_eq!(session.phase(), SessionPhase::Idle);

    // (row = y, col = x) indexing into the shared grid.
    assert_eq!(session.grid().cell(3, 2), Some('대'));
    assert_eq!(session.grid().cell(3, 3), Some('한'));
    assert_eq!(session.grid().cell(3, 4), Some('민'));
    assert_eq!(session.grid().cell(3, 5), Some('국'));
}

#[test]
fn committed_content_reads_back_along_the_path() {
    let mut session = session_for("1-2");
    let selector = ClueSelector::new("1", Direction::Down);
    session.select_clue(selector.clone()).unwrap();
    session.open_editor();
    for ch in ['고', '래'] {
        session.buffer_mut().unwrap().type_char(ch);
    }
    assert!(session.confirm().unwrap());

    let path = resolve_path(session.puzzle(), &selector).unwrap();
    let read: Vec<Option<char>> = path
        .iter()
        .map(|coord| session.grid().cell(coord.y, coord.x))
        .collect();
    assert_eq!(read, vec![Some('고'), Some('래')]);
}

#[test]
fn unknown_clue_leaves_the_session_idle() {
    let mut session = session_for("1-1");
    let err = session
        .select_clue(ClueSelector::new("9", Direction::Across))
        .unwrap_err();
    assert_eq!(
        err,
        GeometryError::UnknownClue {
            number: "9".to_string()
        }
    );
    assert_eq!(session.phase(), SessionPhase::Idle);
    assert!(session.selection().is_none());
}

#[test]
fn selecting_another_clue_cancels_the_open_editor() {
    let mut session = session_for("1-1");
    session
        .select_clue(ClueSelector::new("2", Direction::Across))
        .unwrap();
    session.open_editor();
    session.buffer_mut().unwrap().type_char('무');

    session
        .select_clue(ClueSelector::new("4", Direction::Down))
        .unwrap();
    assert_eq!(session.phase(), SessionPhase::ClueSelected);
    assert!(session.buffer().is_none());
    // The abandoned buffer never reached the grid.
    assert_eq!(session.grid().cell(0, 0), None);
}

#[test]
fn confirm_is_gated_on_a_complete_buffer() {
    let mut session = session_for("1-1");
    session
        .select_clue(ClueSelector::new("2", Direction::Down))
        .unwrap();
    session.open_editor();
    session.buffer_mut().unwrap().type_char('무');
    assert!(!session.confirm().unwrap());
    assert_eq!(session.phase(), SessionPhase::AnswerEditing);
    session.buffer_mut().unwrap().type_char('게');
    assert!(session.confirm().unwrap());
}

#[test]
fn editor_seeds_from_existing_grid_and_cancel_discards() {
    let mut session = session_for("1-1");
    session.set_cell(3, 2, Some('대'));
    session
        .select_clue(ClueSelector::new("1", Direction::Across))
        .unwrap();
    session.open_editor();
    {
        let buffer = session.buffer().unwrap();
        assert_eq!(buffer.slot(0), Some('대'));
        assert_eq!(buffer.cursor(), 1);
    }
    session.buffer_mut().unwrap().type_char('한');
    session.cancel();
    assert_eq!(session.phase(), SessionPhase::Idle);
    assert_eq!(session.grid().cell(3, 3), None);
    assert_eq!(session.grid().cell(3, 2), Some('대'));
}

#[test]
fn progress_survives_a_snapshot_round_trip() {
    let mut session = session_for("1-1");
    session
        .select_clue(ClueSelector::new("5", Direction::Across))
        .unwrap();
    session.open_editor();
    for ch in ['호', '랑', '이'] {
        session.buffer_mut().unwrap().type_char(ch);
    }
    assert!(session.confirm().unwrap());

    let snapshot = snapshot_from_grid("1-1", session.grid());
    let raw = serde_json::to_string(&snapshot).unwrap();

    let mut restored = PuzzleGridState::new(10);
    let parsed: ProgressSnapshot = serde_json::from_str(&raw).unwrap();
    assert!(apply_snapshot_to_grid(&parsed, &mut restored));
    assert_eq!(restored.cell(1, 7), Some('호'));
    assert_eq!(restored.cell(1, 8), Some('랑'));
    assert_eq!(restored.cell(1, 9), Some('이'));
}

#[test]
fn corrupt_persisted_value_falls_back_to_empty() {
    // The store treats an unparsable value as absent progress.
    let parsed = serde_json::from_str::<ProgressSnapshot>("{\"version\":1,\"cells\":42}");
    assert!(parsed.is_err());
    let parsed = serde_json::from_str::<ProgressSnapshot>("not json");
    assert!(parsed.is_err());

    let mut grid = PuzzleGridState::new(10);
    // Shape-mismatched data is rejected as well; the grid stays empty.
    let short = ProgressSnapshot {
        version: 1,
        topic: "1-1".to_string(),
        size: 10,
        cells: vec![0; 3],
    };
    assert!(!apply_snapshot_to_grid(&short, &mut grid));
    for row in 0..10 {
        for col in 0..10 {
            assert_eq!(grid.cell(row, col), None);
        }
    }
}
