//! Machine: the rotor cipher engine.
//!
//! Owns a plugboard, three rotors, a reflector and the current [`Key`].
//! Every letter travels plugboard → rotors → reflector → rotors (mirrored)
//! → plugboard, after which the key steps. Because the return path is the
//! exact inverse of the forward path around a symmetric reflector, the
//! same starting key both encodes and decodes.

use std::fmt::Write as _;

use tracing::{debug, trace};

use crate::error::RotorCipherError;
use crate::key::{Key, NUM_ROTORS};
use crate::message::{normalize, Message};
use crate::plugboard::Plugboard;
use crate::presets;
use crate::random::{WiringGenerator, WiringSource};
use crate::reflector::Reflector;
use crate::rotor::Rotor;
use crate::utils::alphabet::{index_to_letter, letter_to_index};

/// Position of a rotor in the stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RotorSlot {
    /// Rightmost rotor, advances on every letter.
    Fast = 0,
    /// Advanced by the fast rotor's carry.
    Middle = 1,
    /// Advanced by the middle rotor's carry.
    Slow = 2,
}

/// Three-rotor reciprocal cipher machine.
///
/// A machine is a single unit of mutable state. Interleaving `translate`
/// calls from two sessions corrupts the stepping sequence, so share one
/// across threads only behind external locking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Machine {
    plugboard: Plugboard,
    rotors: [Rotor; NUM_ROTORS],
    reflector: Reflector,
    key: Key,
}

impl Machine {
    /// Creates a machine from fully built components.
    ///
    /// This constructor is deterministic and never draws randomness.
    ///
    /// # Parameters
    /// - `plugboard`: Entry/exit substitution.
    /// - `rotors`: Rotors in slot order `[fast, middle, slow]`.
    /// - `reflector`: Turnaround substitution.
    /// - `key`: Starting rotor offsets.
    pub fn new(
        plugboard: Plugboard,
        rotors: [Rotor; NUM_ROTORS],
        reflector: Reflector,
        key: Key,
    ) -> Self {
        let machine = Machine {
            plugboard,
            rotors,
            reflector,
            key,
        };
        debug!(key = %machine.key, "machine created\n{}", machine.wiring_summary());
        machine
    }

    /// Returns a builder for configuring a machine part by part.
    pub fn builder() -> MachineBuilder {
        MachineBuilder::new()
    }

    /// Creates a machine with the default preset wiring and key `[0, 0, 0]`.
    ///
    /// # Examples
    ///
    /// ```
    /// use rotor_cipher::Machine;
    ///
    /// let mut machine = Machine::with_default_wiring().unwrap();
    /// assert_eq!(machine.encode("Hello World", None).as_str(), "CVPKWKKUZN");
    /// ```
    pub fn with_default_wiring() -> Result<Self, RotorCipherError> {
        MachineBuilder::with_default_wiring().build()
    }

    /// Translates one letter and steps the key.
    ///
    /// Lowercase input is accepted; output is always uppercase.
    ///
    /// # Errors
    /// Returns [`RotorCipherError::InvalidLetter`] if `letter` is not in the
    /// alphabet. The key does not step in that case.
    pub fn translate(&mut self, letter: char) -> Result<char, RotorCipherError> {
        let index = letter_to_index(letter).ok_or(RotorCipherError::InvalidLetter { letter })?;
        Ok(index_to_letter(self.translate_index(index)))
    }

    /// Runs one alphabet index through the signal path, then steps the key.
    fn translate_index(&mut self, index: usize) -> usize {
        let output = self.signal_path(index);
        self.step();
        output
    }

    /// Pure signal path at the current key.
    fn signal_path(&self, index: usize) -> usize {
        let [k0, k1, k2] = self.key.positions();
        let [fast, middle, slow] = &self.rotors;

        let mut value = self.plugboard.forward(index);
        value = fast.forward(value, k0);
        value = middle.forward(value, k1);
        value = slow.forward(value, k2);
        value = self.reflector.reflect(value);
        value = slow.backward(value, k2);
        value = middle.backward(value, k1);
        value = fast.backward(value, k0);
        self.plugboard.backward(value)
    }

    /// Advances the key using the middle and slow rotor notches.
    fn step(&mut self) {
        let middle_notch = self.rotors[RotorSlot::Middle as usize].notch();
        let slow_notch = self.rotors[RotorSlot::Slow as usize].notch();
        let carry = self.key.step(middle_notch, slow_notch);
        trace!(
            key = %self.key,
            middle = carry.middle,
            slow = carry.slow,
            "stepped"
        );
    }

    /// Overwrites the key.
    pub fn set_key(&mut self, key: Key) {
        debug!(%key, "key set");
        self.key = key;
    }

    /// Returns the current key.
    pub fn key(&self) -> Key {
        self.key
    }

    /// Encodes raw text.
    ///
    /// If `starting_key` is given it replaces the current key first;
    /// otherwise encoding continues from the current key. The input is
    /// normalized (see [`normalize`]) and each letter is translated in order.
    ///
    /// # Examples
    ///
    /// ```
    /// use rotor_cipher::{Key, Machine};
    ///
    /// let mut machine = Machine::with_default_wiring().unwrap();
    /// let key = Key::new(1, 2, 3).unwrap();
    /// let encoded = machine.encode("attack at dawn", Some(key));
    /// let decoded = machine.decode(encoded.as_str(), Some(key));
    /// assert_eq!(decoded.as_str(), "ATTACKATDAWNXXX");
    /// ```
    pub fn encode(&mut self, raw: &str, starting_key: Option<Key>) -> Message {
        if let Some(key) = starting_key {
            self.set_key(key);
        }
        let normalized = normalize(raw);
        debug!(letters = normalized.len(), key = %self.key, "translating message");
        let mut output = String::with_capacity(normalized.len());
        for index in normalized.chars().filter_map(letter_to_index) {
            output.push(index_to_letter(self.translate_index(index)));
        }
        debug!(letters = output.len(), key = %self.key, "message translated");
        Message::new(output)
    }

    /// Decodes text produced by [`encode`](Self::encode).
    ///
    /// Identical to `encode`: the machine is reciprocal for a given starting key.
    pub fn decode(&mut self, ciphertext: &str, starting_key: Option<Key>) -> Message {
        self.encode(ciphertext, starting_key)
    }

    /// Encodes raw text and checks that decoding reproduces it.
    ///
    /// The key is left where the check decode finished.
    ///
    /// # Errors
    /// Returns [`RotorCipherError::ReciprocityMismatch`] if the decoded text
    /// differs from the normalized input. Only a non-symmetric reflector can
    /// cause this.
    pub fn encode_verified(
        &mut self,
        raw: &str,
        starting_key: Key,
    ) -> Result<Message, RotorCipherError> {
        let expected = normalize(raw);
        let encoded = self.encode(raw, Some(starting_key));
        let decoded = self.decode(encoded.as_str(), Some(starting_key));
        if decoded.as_str() != expected {
            return Err(RotorCipherError::ReciprocityMismatch {
                expected,
                actual: decoded.into_string(),
            });
        }
        Ok(encoded)
    }

    /// Returns the rotors in slot order.
    pub fn rotors(&self) -> &[Rotor; NUM_ROTORS] {
        &self.rotors
    }

    /// Returns the rotor in `slot`.
    pub fn rotor(&self, slot: RotorSlot) -> &Rotor {
        &self.rotors[slot as usize]
    }

    /// Returns the reflector.
    pub fn reflector(&self) -> &Reflector {
        &self.reflector
    }

    /// Returns the plugboard.
    pub fn plugboard(&self) -> &Plugboard {
        &self.plugboard
    }

    /// Renders every component's wiring, one per line.
    pub fn wiring_summary(&self) -> String {
        let mut summary = String::new();
        for (i, rotor) in self.rotors.iter().enumerate() {
            let _ = writeln!(summary, "Rotor {}: {}", i + 1, rotor);
        }
        let _ = writeln!(summary, "Reflector: {}", self.reflector);
        let _ = write!(summary, "Plugboard: {}", self.plugboard);
        summary
    }
}

/// Plugboard configuration as supplied by the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
enum PlugboardSetting {
    Wiring(String),
    Pairs(String),
}

/// Collects optional machine configuration.
///
/// Parts left unset are drawn from a [`WiringSource`] at build time.
/// The key defaults to `[0, 0, 0]` unless set explicitly or
/// [`random_key`](Self::random_key) is requested.
///
/// # Examples
///
/// ```
/// use rotor_cipher::random::WiringGenerator;
/// use rotor_cipher::{Key, MachineBuilder, RotorSlot};
///
/// let mut source = WiringGenerator::from_seed(42);
/// let mut machine = MachineBuilder::new()
///     .rotor(RotorSlot::Fast, "JGDQOXUSCAMIFRVTPNEWKBLZYH", "Q")
///     .plugboard_pairs("AB CD")
///     .key(Key::new(3, 2, 1).unwrap())
///     .build_with(&mut source)
///     .unwrap();
/// let encoded = machine.encode("hello", None);
/// assert_eq!(encoded.len(), 5);
/// ```
#[derive(Debug, Clone, Default)]
pub struct MachineBuilder {
    rotors: [Option<(String, String)>; NUM_ROTORS],
    reflector: Option<String>,
    plugboard: Option<PlugboardSetting>,
    key: Option<Key>,
    random_key: bool,
}

impl MachineBuilder {
    /// Creates a builder with nothing configured.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a builder preloaded with the preset wiring.
    pub fn with_default_wiring() -> Self {
        let [fast, middle, slow] = presets::ROTORS;
        Self::new()
            .rotor(RotorSlot::Fast, fast.0, fast.1)
            .rotor(RotorSlot::Middle, middle.0, middle.1)
            .rotor(RotorSlot::Slow, slow.0, slow.1)
            .reflector(presets::REFLECTOR)
            .plugboard(presets::PLUGBOARD)
    }

    /// Sets the wiring and notch for a rotor slot.
    pub fn rotor(mut self, slot: RotorSlot, wiring: &str, notch: &str) -> Self {
        self.rotors[slot as usize] = Some((wiring.to_string(), notch.to_string()));
        self
    }

    /// Sets the reflector wiring.
    pub fn reflector(mut self, wiring: &str) -> Self {
        self.reflector = Some(wiring.to_string());
        self
    }

    /// Sets the plugboard from a full 26-letter wiring.
    pub fn plugboard(mut self, wiring: &str) -> Self {
        self.plugboard = Some(PlugboardSetting::Wiring(wiring.to_string()));
        self
    }

    /// Sets the plugboard from swap pairs such as `"AB CD EF"`.
    pub fn plugboard_pairs(mut self, pairs: &str) -> Self {
        self.plugboard = Some(PlugboardSetting::Pairs(pairs.to_string()));
        self
    }

    /// Sets the starting key.
    pub fn key(mut self, key: Key) -> Self {
        self.key = Some(key);
        self.random_key = false;
        self
    }

    /// Draws the starting key from the wiring source.
    pub fn random_key(mut self) -> Self {
        self.key = None;
        self.random_key = true;
        self
    }

    /// Builds the machine, generating missing parts from OS entropy.
    ///
    /// # Errors
    /// Any configuration error from the supplied wiring.
    pub fn build(self) -> Result<Machine, RotorCipherError> {
        self.build_with(&mut WiringGenerator::from_entropy())
    }

    /// Builds the machine, generating missing parts from `source`.
    ///
    /// Missing parts are drawn in slot order, then reflector, plugboard
    /// and key, so a seeded source reproduces the same machine.
    ///
    /// # Errors
    /// Any configuration error from the supplied wiring.
    pub fn build_with(self, source: &mut dyn WiringSource) -> Result<Machine, RotorCipherError> {
        let [fast, middle, slow] = &self.rotors;
        let rotors = [
            resolve_rotor(fast, source)?,
            resolve_rotor(middle, source)?,
            resolve_rotor(slow, source)?,
        ];

        let reflector = match &self.reflector {
            Some(wiring) => Reflector::new(wiring)?,
            None => source.reflector()?,
        };

        let plugboard = match &self.plugboard {
            Some(PlugboardSetting::Wiring(wiring)) => Plugboard::new(wiring)?,
            Some(PlugboardSetting::Pairs(pairs)) => Plugboard::from_pairs(pairs)?,
            None => source.plugboard()?,
        };

        let key = match self.key {
            Some(key) => key,
            None if self.random_key => source.key(),
            None => Key::ZERO,
        };

        Ok(Machine::new(plugboard, rotors, reflector, key))
    }
}

/// Builds a configured rotor or draws one from `source`.
fn resolve_rotor(
    setting: &Option<(String, String)>,
    source: &mut dyn WiringSource,
) -> Result<Rotor, RotorCipherError> {
    match setting {
        Some((wiring, notch)) => Rotor::new(wiring, notch),
        None => source.rotor(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::substitution::SubstitutionMap;

    fn preset_machine() -> Machine {
        Machine::with_default_wiring().unwrap()
    }

    #[test]
    fn test_translate_sequence() {
        let mut machine = preset_machine();
        machine.set_key(Key::ZERO);
        let expected = [
            ('H', 'C'),
            ('E', 'V'),
            ('L', 'P'),
            ('L', 'K'),
            ('O', 'W'),
            ('W', 'K'),
            ('O', 'K'),
            ('R', 'U'),
            ('L', 'Z'),
            ('D', 'N'),
        ];
        for (input, output) in expected {
            assert_eq!(machine.translate(input).unwrap(), output);
        }
    }

    #[test]
    fn test_translate_lowercase() {
        let mut machine = preset_machine();
        assert_eq!(machine.translate('h').unwrap(), 'C');
    }

    #[test]
    fn test_translate_rejects_non_letter_without_stepping() {
        let mut machine = preset_machine();
        assert_eq!(
            machine.translate('!'),
            Err(RotorCipherError::InvalidLetter { letter: '!' })
        );
        assert_eq!(machine.key(), Key::ZERO);
    }

    #[test]
    fn test_set_key() {
        let mut machine = preset_machine();
        assert_eq!(machine.key(), Key::ZERO);
        let key = Key::new(1, 2, 3).unwrap();
        machine.set_key(key);
        assert_eq!(machine.key(), key);
    }

    #[test]
    fn test_encode_hello_world() {
        let mut machine = preset_machine();
        let encoded = machine.encode("Hello World", Some(Key::ZERO));
        assert_eq!(encoded.as_str(), "CVPKWKKUZN");
        assert_eq!(encoded.to_string(), "CVPKW KKUZN");
        assert_eq!(machine.key().positions(), [10, 1, 0]);
    }

    #[test]
    fn test_decode_hello_world() {
        let mut machine = preset_machine();
        let decoded = machine.decode("CVPKWKKUZN", Some(Key::ZERO));
        assert_eq!(decoded.as_str(), "HELLOWORLD");
    }

    #[test]
    fn test_encode_without_key_continues() {
        let mut machine = preset_machine();
        let first = machine.encode("HELLO", None);
        let second = machine.encode("WORLD", None);
        assert_eq!(format!("{}{}", first.as_str(), second.as_str()), "CVPKWKKUZN");
    }

    #[test]
    fn test_encode_empty() {
        let mut machine = preset_machine();
        assert!(machine.encode("  42 ", Some(Key::ZERO)).is_empty());
        assert_eq!(machine.key(), Key::ZERO);
    }

    #[test]
    fn test_encode_verified_ok() {
        let mut machine = preset_machine();
        let encoded = machine
            .encode_verified("Hello World", Key::ZERO)
            .unwrap();
        assert_eq!(encoded.as_str(), "CVPKWKKUZN");
    }

    #[test]
    fn test_encode_verified_detects_asymmetric_reflector() {
        let mut machine = preset_machine();
        let cycle = SubstitutionMap::from_permutation("BCAEDGFIHKJMLONQPSRUTWVYXZ").unwrap();
        machine.reflector = Reflector::from_map_unchecked(cycle);
        let result = machine.encode_verified("The quick brown fox", Key::ZERO);
        assert!(matches!(
            result,
            Err(RotorCipherError::ReciprocityMismatch { .. })
        ));
    }

    #[test]
    fn test_rotor_slots() {
        let machine = preset_machine();
        assert_eq!(machine.rotor(RotorSlot::Fast).notch_letter(), 'Q');
        assert_eq!(machine.rotor(RotorSlot::Middle).notch_letter(), 'E');
        assert_eq!(machine.rotor(RotorSlot::Slow).notch_letter(), 'V');
        assert_eq!(machine.rotors().len(), 3);
    }

    #[test]
    fn test_wiring_summary() {
        let summary = preset_machine().wiring_summary();
        assert_eq!(
            summary,
            "Rotor 1: JGDQOXUSCAMIFRVTPNEWKBLZYH (notch Q)\n\
             Rotor 2: NTZPSFBOKMWRCJDIVLAEYUXHGQ (notch E)\n\
             Rotor 3: JVIUBHTCDYAKEQZPOSGXNRMWFL (notch V)\n\
             Reflector: QYHOGNECVPUZTFDJAXWMKISRBL\n\
             Plugboard: AMCDSFGHIJTQBNRYLOEKUVZXPW"
        );
    }

    #[test]
    fn test_builder_rejects_bad_reflector() {
        let result = MachineBuilder::with_default_wiring()
            .reflector("ABCDEFGHIJKLMNOPQRSTUVWXYZ")
            .build();
        assert_eq!(
            result,
            Err(RotorCipherError::ReflectorFixedPoint { letter: 'A' })
        );
    }

    #[test]
    fn test_builder_rejects_bad_rotor() {
        let result = MachineBuilder::with_default_wiring()
            .rotor(RotorSlot::Slow, "JVIUBHTCDYAKEQZPOSGXNRMWFL", "VV")
            .build();
        assert!(matches!(result, Err(RotorCipherError::InvalidNotch { .. })));
    }

    #[test]
    fn test_builder_seeded_is_deterministic() {
        let a = MachineBuilder::new()
            .random_key()
            .build_with(&mut WiringGenerator::from_seed(5))
            .unwrap();
        let b = MachineBuilder::new()
            .random_key()
            .build_with(&mut WiringGenerator::from_seed(5))
            .unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_builder_keeps_explicit_parts() {
        let machine = MachineBuilder::new()
            .rotor(RotorSlot::Middle, presets::ROTOR_II, presets::ROTOR_II_NOTCH)
            .reflector(presets::REFLECTOR)
            .build_with(&mut WiringGenerator::from_seed(8))
            .unwrap();
        assert_eq!(
            machine.rotor(RotorSlot::Middle).map().to_string(),
            presets::ROTOR_II
        );
        assert_eq!(machine.reflector().to_string(), presets::REFLECTOR);
        assert_eq!(machine.key(), Key::ZERO);
    }

    #[test]
    fn test_builder_plugboard_pairs() {
        let machine = MachineBuilder::with_default_wiring()
            .plugboard_pairs("BM ES KT LQ OR PY WZ")
            .build()
            .unwrap();
        assert_eq!(machine.plugboard().to_string(), presets::PLUGBOARD);
        assert_eq!(machine, preset_machine());
    }
}
