//! Alphabet arithmetic and conversion helpers shared by every component.

pub mod alphabet;
pub mod converter;
