// src/models/board.rs
//
// The logical game board the view reads from.
//
// The renderer only depends on `BoardModel`; `TakBoard` is the reference
// implementation. It applies moves without judging whether they are legal.

use std::fmt;

use crate::models::{Direction, Move, NotationError, Player, Square, Stone, Tile};

pub trait BoardModel: Clone {
    fn size(&self) -> usize;

    /// Stack at `square`, bottom to top.
    fn tiles(&self, square: Square) -> &[Tile];

    /// Applies a move in notation form for `player`, mutating in place.
    fn force_apply(&mut self, notation: &str, player: Player) -> Result<(), NotationError>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TakBoard {
    size: usize,
    cells: Vec<Vec<Tile>>, // indexed by Square::index
}

impl TakBoard {
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![Vec::new(); size * size],
        }
    }

    /// Builds a board from explicit stacks, mostly for setting up scenes.
    pub fn with_stacks<I>(size: usize, stacks: I) -> Self
    where
        I: IntoIterator<Item = (Square, Vec<Tile>)>,
    {
        let mut board = Self::new(size);
        for (square, tiles) in stacks {
            board.cells[square.index(size)] = tiles;
        }
        board
    }

    pub fn squares(&self) -> impl Iterator<Item = Square> + '_ {
        (0..self.size).flat_map(move |i| (0..self.size).map(move |j| Square::new(i, j)))
    }

    fn check_on_board(&self, square: Square) -> Result<(), NotationError> {
        if square.i < self.size && square.j < self.size {
            Ok(())
        } else {
            Err(NotationError::OffBoard {
                square,
                size: self.size,
            })
        }
    }

    fn place(&mut self, square: Square, stone: Stone, player: Player) {
        let idx = square.index(self.size);
        self.cells[idx].push(Tile::new(stone, player));
    }

    fn spread(&mut self, m: &Move, direction: Direction) -> Result<(), NotationError> {
        let source = m.square();
        let idx = source.index(self.size);
        let have = self.cells[idx].len();
        if have < m.total {
            return Err(NotationError::NotEnoughTiles {
                square: source,
                have,
                need: m.total,
            });
        }

        let legs = m.legs();
        // resolve every destination before touching the stacks
        let destinations: Vec<Square> = (0..legs.len())
            .map(|leg| source.walk(direction, leg + 1, self.size))
            .collect();

        let mut carried = self.cells[idx].split_off(have - m.total);
        for (drop, dest) in legs.into_iter().zip(destinations) {
            let rest = carried.split_off(drop);
            let dest_stack = &mut self.cells[dest.index(self.size)];
            if let ([arriving], Some(top)) = (carried.as_slice(), dest_stack.last_mut()) {
                if arriving.stone == Stone::Cap && top.stone == Stone::Standing {
                    top.stone = Stone::Flat;
                }
            }
            dest_stack.append(&mut carried);
            carried = rest;
        }
        Ok(())
    }
}

impl BoardModel for TakBoard {
    fn size(&self) -> usize {
        self.size
    }

    fn tiles(&self, square: Square) -> &[Tile] {
        &self.cells[square.index(self.size)]
    }

    fn force_apply(&mut self, notation: &str, player: Player) -> Result<(), NotationError> {
        let m = Move::decode(notation)?;
        self.check_on_board(m.square())?;
        match m.direction {
            None => {
                self.place(m.square(), m.stone, player);
                Ok(())
            }
            Some(direction) => self.spread(&m, direction),
        }
    }
}

impl fmt::Display for TakBoard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for square in self.squares() {
            let tiles = self.tiles(square);
            if !tiles.is_empty() {
                let stack: Vec<String> = tiles.iter().map(|t| t.to_string()).collect();
                writeln!(f, "{}: {}", square, stack.join(" "))?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn w() -> Tile {
        Tile::flat(Player::White)
    }

    fn b() -> Tile {
        Tile::flat(Player::Black)
    }

    mod placement_tests {
        use super::*;

        #[test]
        fn test_place_pushes_players_tile() {
            let mut board = TakBoard::new(5);
            board.force_apply("Sc3", Player::Black).unwrap();
            assert_eq!(
                board.tiles(Square::new(2, 2)),
                &[Tile::new(Stone::Standing, Player::Black)]
            );
        }

        #[test]
        fn test_place_off_board_is_rejected() {
            let mut board = TakBoard::new(5);
            assert!(matches!(
                board.force_apply("f1", Player::White),
                Err(NotationError::OffBoard { .. })
            ));
        }
    }

    mod spread_tests {
        use super::*;

        #[test]
        fn test_single_leg_spread_carries_top_tiles() {
            let mut board = TakBoard::with_stacks(5, [(Square::new(0, 0), vec![w(), b(), w()])]);
            board.force_apply("2a1>", Player::White).unwrap();
            assert_eq!(board.tiles(Square::new(0, 0)), &[w()]);
            assert_eq!(board.tiles(Square::new(1, 0)), &[b(), w()]);
        }

        #[test]
        fn test_multi_leg_spread_drops_bottom_first() {
            let mut board = TakBoard::with_stacks(5, [(Square::new(2, 2), vec![w(), b()])]);
            board.force_apply("2c3-11", Player::White).unwrap();
            assert!(board.tiles(Square::new(2, 2)).is_empty());
            assert_eq!(board.tiles(Square::new(2, 1)), &[w()]);
            assert_eq!(board.tiles(Square::new(2, 0)), &[b()]);
        }

        #[test]
        fn test_lone_cap_flattens_standing_stone() {
            let cap = Tile::new(Stone::Cap, Player::White);
            let wall = Tile::new(Stone::Standing, Player::Black);
            let mut board = TakBoard::with_stacks(
                5,
                [(Square::new(0, 0), vec![cap]), (Square::new(0, 1), vec![wall])],
            );
            board.force_apply("a1+", Player::White).unwrap();
            assert_eq!(
                board.tiles(Square::new(0, 1)),
                &[Tile::new(Stone::Flat, Player::Black), cap]
            );
        }

        #[test]
        fn test_spread_needs_enough_tiles() {
            let mut board = TakBoard::with_stacks(5, [(Square::new(0, 0), vec![w()])]);
            assert_eq!(
                board.force_apply("2a1>", Player::White),
                Err(NotationError::NotEnoughTiles {
                    square: Square::new(0, 0),
                    have: 1,
                    need: 2
                })
            );
        }

        #[test]
        #[should_panic(expected = "leaves the 5x5 board")]
        fn test_spread_off_grid_panics() {
            let mut board = TakBoard::with_stacks(5, [(Square::new(4, 0), vec![w()])]);
            let _ = board.force_apply("e1>", Player::White);
        }
    }

    #[test]
    fn test_copy_is_independent() {
        let board = TakBoard::with_stacks(5, [(Square::new(0, 0), vec![w()])]);
        let mut copy = board.clone();
        copy.force_apply("a1>", Player::White).unwrap();
        assert_eq!(board.tiles(Square::new(0, 0)), &[w()]);
        assert!(copy.tiles(Square::new(0, 0)).is_empty());
    }
}
