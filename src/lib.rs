// src/lib.rs
//
// takvis: draws a stacking-tile board game and animates spread moves.

pub mod animation;
pub mod config;
pub mod draw;
pub mod logging;
pub mod models;
pub mod views;
