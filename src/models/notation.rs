// src/models/notation.rs
//
// Move notation decoding.
//
// Placements:  [F|S|C]<col><row>          e.g. "a1", "Sc3"
// Spreads:     [count]<col><row><dir>[drops]  e.g. "3b2>12", "c1+"
// where dir is one of + (up), - (down), < (left), > (right).

use regex::Regex;
use std::error::Error;
use std::fmt;
use std::sync::OnceLock;

use crate::models::{Direction, Square, Stone, COLS};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NotationError {
    Malformed(String),
    CountMismatch { total: usize, dropped: usize },
    NotEnoughTiles { square: Square, have: usize, need: usize },
    OffBoard { square: Square, size: usize },
}

impl fmt::Display for NotationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NotationError::Malformed(notation) => write!(f, "malformed move notation '{}'", notation),
            NotationError::CountMismatch { total, dropped } => write!(
                f,
                "spread carries {} tiles but drops {}",
                total, dropped
            ),
            NotationError::NotEnoughTiles { square, have, need } => write!(
                f,
                "{} holds {} tiles, {} requested",
                square, have, need
            ),
            NotationError::OffBoard { square, size } => {
                write!(f, "{} is outside the {}x{} board", square, size, size)
            }
        }
    }
}

impl Error for NotationError {}

/// A decoded move. `direction` is `None` for placements.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Move {
    pub col: char,
    pub row: usize,
    pub direction: Option<Direction>,
    pub moves: Option<Vec<usize>>,
    pub total: usize,
    pub stone: Stone,
}

fn notation_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(
            r"^(?P<count>[1-8])?(?P<stone>[FSC])?(?P<col>[a-h])(?P<row>[1-8])(?P<dir>[+\-<>])?(?P<drops>[1-8]+)?$",
        )
        .unwrap()
    })
}

impl Move {
    pub fn decode(notation: &str) -> Result<Self, NotationError> {
        let malformed = || NotationError::Malformed(notation.to_string());
        let caps = notation_regex()
            .captures(notation.trim())
            .ok_or_else(malformed)?;

        let col = caps["col"].chars().next().ok_or_else(malformed)?;
        let row: usize = caps["row"].parse().map_err(|_| malformed())?;
        let direction = caps
            .name("dir")
            .and_then(|m| m.as_str().chars().next())
            .and_then(Direction::from_symbol);
        let stone = caps
            .name("stone")
            .and_then(|m| m.as_str().chars().next())
            .and_then(Stone::from_symbol);
        let count = caps.name("count").map(|m| m.as_str().parse::<usize>());
        let drops: Option<Vec<usize>> = caps.name("drops").map(|m| {
            m.as_str()
                .chars()
                .filter_map(|c| c.to_digit(10))
                .map(|d| d as usize)
                .collect()
        });

        match direction {
            None => {
                // a placement carries no count or drops
                if count.is_some() || drops.is_some() {
                    return Err(malformed());
                }
                Ok(Move {
                    col,
                    row,
                    direction: None,
                    moves: None,
                    total: 1,
                    stone: stone.unwrap_or_default(),
                })
            }
            Some(direction) => {
                if stone.is_some() {
                    return Err(malformed());
                }
                let total = match count {
                    Some(parsed) => parsed.map_err(|_| malformed())?,
                    None => 1,
                };
                if let Some(drops) = &drops {
                    let dropped: usize = drops.iter().sum();
                    if dropped != total {
                        return Err(NotationError::CountMismatch { total, dropped });
                    }
                }
                Ok(Move {
                    col,
                    row,
                    direction: Some(direction),
                    moves: drops,
                    total,
                    stone: Stone::Flat,
                })
            }
        }
    }

    pub fn square(&self) -> Square {
        let i = COLS.find(self.col).unwrap_or(COLS.len());
        Square::new(i, self.row - 1)
    }

    pub fn is_spread(&self) -> bool {
        self.direction.is_some()
    }

    /// Drop count per leg. A spread without explicit drops is one leg
    /// carrying everything one cell over.
    pub fn legs(&self) -> Vec<usize> {
        match &self.moves {
            Some(moves) if !moves.is_empty() => moves.clone(),
            _ => vec![self.total],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod placement_tests {
        use super::*;

        #[test]
        fn test_plain_placement() {
            let m = Move::decode("a1").unwrap();
            assert_eq!(m.col, 'a');
            assert_eq!(m.row, 1);
            assert_eq!(m.direction, None);
            assert_eq!(m.stone, Stone::Flat);
            assert_eq!(m.square(), Square::new(0, 0));
            assert!(!m.is_spread());
        }

        #[test]
        fn test_stone_prefixes() {
            assert_eq!(Move::decode("Sc3").unwrap().stone, Stone::Standing);
            assert_eq!(Move::decode("Cd2").unwrap().stone, Stone::Cap);
            assert_eq!(Move::decode("Fe5").unwrap().stone, Stone::Flat);
            assert_eq!(Move::decode("Sc3").unwrap().square(), Square::new(2, 2));
        }
    }

    mod spread_tests {
        use super::*;

        #[test]
        fn test_single_tile_spread() {
            let m = Move::decode("c1+").unwrap();
            assert_eq!(m.direction, Some(Direction::Up));
            assert_eq!(m.total, 1);
            assert_eq!(m.moves, None);
            assert_eq!(m.legs(), vec![1]);
        }

        #[test]
        fn test_counted_spread_with_drops() {
            let m = Move::decode("3b2>12").unwrap();
            assert_eq!(m.direction, Some(Direction::Right));
            assert_eq!(m.total, 3);
            assert_eq!(m.moves, Some(vec![1, 2]));
            assert_eq!(m.legs(), vec![1, 2]);
            assert_eq!(m.square(), Square::new(1, 1));
        }

        #[test]
        fn test_counted_spread_without_drops() {
            let m = Move::decode("2a1<").unwrap();
            assert_eq!(m.direction, Some(Direction::Left));
            assert_eq!(m.total, 2);
            assert_eq!(m.legs(), vec![2]);
        }

        #[test]
        fn test_drop_sum_must_match_count() {
            assert_eq!(
                Move::decode("3a1>11"),
                Err(NotationError::CountMismatch {
                    total: 3,
                    dropped: 2
                })
            );
        }
    }

    #[test]
    fn test_malformed_notation() {
        for bad in ["", "z1", "a9", "a0", "Sa1>", "2a1", "a1 b2", "a1x"] {
            assert!(
                matches!(Move::decode(bad), Err(NotationError::Malformed(_))),
                "expected '{}' to be rejected",
                bad
            );
        }
    }
}
