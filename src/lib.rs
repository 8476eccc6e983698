pub mod board;
pub mod coordinate;
pub mod engine;
pub mod pattern;
pub mod piece;
