// src/models/tile.rs
// The pieces that make up a stack

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Stone {
    #[default]
    Flat,
    Standing,
    Cap,
}

impl Stone {
    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            'F' => Some(Stone::Flat),
            'S' => Some(Stone::Standing),
            'C' => Some(Stone::Cap),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    White,
    Black,
}

impl Player {
    pub fn other(self) -> Self {
        match self {
            Player::White => Player::Black,
            Player::Black => Player::White,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Tile {
    pub stone: Stone,
    pub color: Player,
}

impl Tile {
    pub fn new(stone: Stone, color: Player) -> Self {
        Self { stone, color }
    }

    pub fn flat(color: Player) -> Self {
        Self::new(Stone::Flat, color)
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let stone = match self.stone {
            Stone::Flat => 'F',
            Stone::Standing => 'S',
            Stone::Cap => 'C',
        };
        let color = match self.color {
            Player::White => 'w',
            Player::Black => 'b',
        };
        write!(f, "{}{}", color, stone)
    }
}
