//! WiringSource trait for component generation.
//!
//! Defines the interface used by [`MachineBuilder`](crate::MachineBuilder)
//! to fill in components that were not explicitly configured.

use crate::error::RotorCipherError;
use crate::key::Key;
use crate::plugboard::Plugboard;
use crate::reflector::Reflector;
use crate::rotor::Rotor;

/// Source of machine components for parts left unconfigured.
///
/// Implementations must only return components that satisfy the same
/// invariants as explicitly configured ones: bijective rotor and
/// plugboard maps, and an involutive, fixed-point-free reflector.
pub trait WiringSource {
    /// Returns the next rotor.
    fn rotor(&mut self) -> Result<Rotor, RotorCipherError>;

    /// Returns the next reflector.
    fn reflector(&mut self) -> Result<Reflector, RotorCipherError>;

    /// Returns the next plugboard.
    fn plugboard(&mut self) -> Result<Plugboard, RotorCipherError>;

    /// Returns the next starting key.
    fn key(&mut self) -> Key;
}
