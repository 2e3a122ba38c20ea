//! Rotor cipher machine simulator.
//!
//! Encodes text by passing each letter through a plugboard, three
//! rotating substitution rotors and a reflector, then back out through
//! the rotors and plugboard. The rotors advance odometer-style after every
//! letter, with notch-triggered carries, so the substitution changes from
//! one letter to the next.
//!
//! The machine is reciprocal: the same wiring and starting key that
//! produced a ciphertext decode it again.
//!
//! # Architecture
//!
//! ```text
//! SubstitutionMap  (atomic unit: bijective table with rotational offset)
//!     ↕ wrapped by
//! Rotor / Reflector / Plugboard  (construction + validation policies)
//!     ↕ owned by
//! Machine  (signal path + Key stepping state machine)
//!     ↕ fed by
//! Message pipeline  (normalize → translate per letter → block display)
//! ```
//!
//! Random wiring lives behind the [`random::WiringSource`] trait; the core
//! never draws randomness on its own.
//!
//! # Examples
//!
//! Encode and decode with the preset wiring:
//!
//! ```
//! use rotor_cipher::{Key, Machine};
//!
//! let mut machine = Machine::with_default_wiring().unwrap();
//!
//! let encoded = machine.encode("Hello World", Some(Key::ZERO));
//! assert_eq!(encoded.to_string(), "CVPKW KKUZN");
//!
//! let decoded = machine.decode(encoded.as_str(), Some(Key::ZERO));
//! assert_eq!(decoded.as_str(), "HELLOWORLD");
//! ```
//!
//! Build a machine from a reproducible random wiring:
//!
//! ```
//! use rotor_cipher::random::WiringGenerator;
//! use rotor_cipher::MachineBuilder;
//!
//! let mut source = WiringGenerator::from_seed(2024);
//! let mut machine = MachineBuilder::new()
//!     .random_key()
//!     .build_with(&mut source)
//!     .unwrap();
//!
//! let key = machine.key();
//! let encoded = machine.encode("rotor", Some(key));
//! assert_eq!(machine.decode(encoded.as_str(), Some(key)).as_str(), "ROTOR");
//! ```

#![deny(clippy::all)]

pub mod error;
pub mod message;
pub mod presets;
pub mod random;
pub mod utils;

mod key;
mod machine;
mod plugboard;
mod reflector;
mod rotor;
mod substitution;

pub use error::RotorCipherError;
pub use key::{Carry, Key, NUM_ROTORS};
pub use machine::{Machine, MachineBuilder, RotorSlot};
pub use message::Message;
pub use plugboard::Plugboard;
pub use reflector::Reflector;
pub use rotor::Rotor;
pub use substitution::SubstitutionMap;
