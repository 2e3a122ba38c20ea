//! Default machine wiring.
//!
//! Rotor and reflector tables follow the railway-variant wiring; the notch
//! letters and the plugboard are arbitrary fixed choices.

/// Fast rotor wiring.
pub const ROTOR_I: &str = "JGDQOXUSCAMIFRVTPNEWKBLZYH";
/// Fast rotor notch.
pub const ROTOR_I_NOTCH: &str = "Q";

/// Middle rotor wiring.
pub const ROTOR_II: &str = "NTZPSFBOKMWRCJDIVLAEYUXHGQ";
/// Middle rotor notch.
pub const ROTOR_II_NOTCH: &str = "E";

/// Slow rotor wiring.
pub const ROTOR_III: &str = "JVIUBHTCDYAKEQZPOSGXNRMWFL";
/// Slow rotor notch.
pub const ROTOR_III_NOTCH: &str = "V";

/// Reflector wiring.
pub const REFLECTOR: &str = "QYHOGNECVPUZTFDJAXWMKISRBL";

/// Plugboard wiring (pairs BM ES KT LQ OR PY WZ).
pub const PLUGBOARD: &str = "AMCDSFGHIJTQBNRYLOEKUVZXPW";

/// Rotor wirings and notches in slot order `[fast, middle, slow]`.
pub const ROTORS: [(&str, &str); 3] = [
    (ROTOR_I, ROTOR_I_NOTCH),
    (ROTOR_II, ROTOR_II_NOTCH),
    (ROTOR_III, ROTOR_III_NOTCH),
];
