pub mod buffer;
pub mod catalog;
pub mod codec;
pub mod geometry;
pub mod grid;
pub mod hangul;
pub mod puzzle;
pub mod session;
pub mod snapshot;

pub use buffer::AnswerBuffer;
pub use catalog::{puzzle_for_topic, topic_by_id, MenuSection, TopicEntry, MENU_SECTIONS, TOPIC_CATALOG};
pub use codec::{decode, decode_record, encode, encode_record};
pub use geometry::{resolve_path, GeometryError};
pub use grid::{GridError, PuzzleGridState};
pub use puzzle::{AnswerMeta, ClueSelector, Coord, Direction, PuzzleDefinition, BLOCKED};
pub use session::{PuzzleSession, Selection, SessionPhase};
pub use snapshot::{
    apply_snapshot_to_grid, cells_from_snapshot, snapshot_from_grid, ProgressSnapshot,
    PROGRESS_SNAPSHOT_VERSION,
};
