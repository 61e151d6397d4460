use std::collections::HashMap;

use crate::puzzle::{AnswerMeta, ClueSelector, Coord, PuzzleDefinition};

/// One playable topic in the static data feed.
#[derive(Clone, Copy, Debug)]
pub struct TopicEntry {
    pub id: &'static str,
    pub title: &'static str,
    pub difficulty: &'static str,
}

/// A menu section; topic ids derive as `"<section>-<index + 1>"`. Sections
/// past the first are placeholders without puzzle data, so their topics
/// resolve to a not-found outcome.
#[derive(Clone, Copy, Debug)]
pub struct MenuSection {
    pub number: usize,
    pub numeral: &'static str,
    pub title: &'static str,
    pub topics: &'static [&'static str],
}

pub const TOPIC_CATALOG: &[TopicEntry] = &[
    TopicEntry {
        id: "1-1",
        title: "일반 상식",
        difficulty: "쉬움",
    },
    TopicEntry {
        id: "1-2",
        title: "동물",
        difficulty: "쉬움",
    },
];

pub const MENU_SECTIONS: &[MenuSection] = &[
    MenuSection {
        number: 1,
        numeral: "Ⅰ",
        title: "기본 상식",
        topics: &["일반 상식", "동물"],
    },
    MenuSection {
        number: 2,
        numeral: "Ⅱ",
        title: "자연과 과학",
        topics: &["날씨와 계절", "우주"],
    },
    MenuSection {
        number: 3,
        numeral: "Ⅲ",
        title: "생활과 문화",
        topics: &["음식", "명절"],
    },
];

pub fn topic_by_id(id: &str) -> Option<&'static TopicEntry> {
    let trimmed = id.trim();
    TOPIC_CATALOG.iter().find(|entry| entry.id == trimmed)
}

pub fn topic_id(section: usize, index: usize) -> String {
    format!("{}-{}", section, index + 1)
}

/// Builds the immutable puzzle definition for a topic id. Unknown ids yield
/// `None` rather than failing.
pub fn puzzle_for_topic(id: &str) -> Option<PuzzleDefinition> {
    match id.trim() {
        "1-1" => Some(general_knowledge_puzzle()),
        "1-2" => Some(animal_puzzle()),
        _ => None,
    }
}

fn build_puzzle(
    rows: &[&str],
    numbers: &[(&str, usize, usize)],
    entries: &[(&str, &str, &str)],
) -> PuzzleDefinition {
    let size = rows.len();
    let grid: Vec<Vec<char>> = rows.iter().map(|row| row.chars().collect()).collect();
    debug_assert!(grid.iter().all(|row| row.len() == size));

    let numbers: HashMap<String, Coord> = numbers
        .iter()
        .map(|(number, x, y)| (number.to_string(), Coord { x: *x, y: *y }))
        .collect();

    let mut clues = HashMap::new();
    let mut answers = HashMap::new();
    for (key, answer, clue) in entries {
        let selector = ClueSelector::from_key(key);
        clues.insert(key.to_string(), clue.to_string());
        answers.insert(
            key.to_string(),
            AnswerMeta {
                answer: answer.to_string(),
                direction: selector.direction,
                length: answer.chars().count(),
            },
        );
    }

    PuzzleDefinition {
        size,
        grid,
        numbers,
        clues,
        answers,
    }
}

fn general_knowledge_puzzle() -> PuzzleDefinition {
    build_puzzle(
        &[
            "무지개#######",
            "게####미#호랑이",
            "#####역####",
            "##대한민국####",
            "##나#######",
            "##무#######",
            "####바나나###",
            "####다#####",
            "텔레비전######",
            "##########",
        ],
        &[
            ("1", 2, 3),
            ("2", 0, 0),
            ("3", 5, 1),
            ("4", 4, 6),
            ("5", 7, 1),
            ("6", 0, 8),
        ],
        &[
            ("1", "대한민국", "아시아 동쪽의 한반도에 위치한 나라"),
            ("1-down", "대나무", "곧게 자라며 속이 빈 마디 식물"),
            ("2", "무지개", "비 온 뒤 하늘에 뜨는 일곱 빛깔"),
            ("2-down", "무게", "저울로 재는 무거운 정도"),
            ("3-down", "미역국", "생일 아침에 끓여 먹는 국"),
            ("4", "바나나", "노란 껍질의 열대 과일"),
            ("4-down", "바다", "지구 표면을 덮은 넓고 짠 물"),
            ("5", "호랑이", "줄무늬가 있는 용맹한 맹수"),
            ("6", "텔레비전", "영상을 보여 주는 가전 제품"),
        ],
    )
}

fn animal_puzzle() -> PuzzleDefinition {
    build_puzzle(
        &[
            "########",
            "#고양이####",
            "#래#야####",
            "###기#다람쥐",
            "########",
            "########",
            "##강아지###",
            "########",
        ],
        &[("1", 1, 1), ("2", 3, 1), ("3", 2, 6), ("4", 5, 3)],
        &[
            ("1", "고양이", "쥐를 잘 잡는 반려동물"),
            ("1-down", "고래", "바다에 사는 가장 큰 포유류"),
            ("2-down", "이야기", "서로 주고받는 말, 또는 전해 오는 글"),
            ("3", "강아지", "어린 개"),
            ("4", "다람쥐", "도토리를 볼에 모으는 작은 동물"),
        ],
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::resolve_path;
    use crate::puzzle::BLOCKED;

    #[test]
    fn unknown_topic_is_not_found() {
        assert!(puzzle_for_topic("9-9").is_none());
        assert!(topic_by_id("9-9").is_none());
    }

    #[test]
    fn catalog_topics_all_have_puzzles() {
        for entry in TOPIC_CATALOG {
            assert!(puzzle_for_topic(entry.id).is_some(), "topic {}", entry.id);
        }
    }

    #[test]
    fn every_declared_answer_resolves_on_unblocked_cells() {
        for entry in TOPIC_CATALOG {
            let puzzle = puzzle_for_topic(entry.id).unwrap();
            for key in puzzle.answers.keys() {
                let selector = ClueSelector::from_key(key);
                let path = resolve_path(&puzzle, &selector)
                    .unwrap_or_else(|err| panic!("topic {} clue {key}: {err}", entry.id));
                assert!(!path.is_empty());
                for coord in &path {
                    assert_ne!(puzzle.grid[coord.y][coord.x], BLOCKED);
                }
            }
        }
    }

    #[test]
    fn crossing_cells_agree_between_answers() {
        for entry in TOPIC_CATALOG {
            let puzzle = puzzle_for_topic(entry.id).unwrap();
            for (key, meta) in &puzzle.answers {
                let selector = ClueSelector::from_key(key);
                let path = resolve_path(&puzzle, &selector).unwrap();
                for (coord, ch) in path.iter().zip(meta.answer.chars()) {
                    assert_eq!(
                        puzzle.grid[coord.y][coord.x], ch,
                        "topic {} clue {key} at ({}, {})",
                        entry.id, coord.x, coord.y
                    );
                }
            }
        }
    }
}
