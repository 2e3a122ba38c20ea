//! Random wiring subsystem.
//!
//! Generates rotors, reflectors, plugboards and keys for ad-hoc machines.
//! The cipher core never draws randomness itself: builders ask a
//! [`WiringSource`] for whatever the caller did not configure.

pub mod generator;
pub mod source;

pub use generator::WiringGenerator;
pub use source::WiringSource;
