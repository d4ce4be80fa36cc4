//! Note frequencies and the phase cue table
//!
//! Frequencies are rounded to whole Hz, which is all a PWM-driven piezo
//! can reproduce anyway. Sharps are spelled with an `S` (`CS4` = C#4).

use super::phase::{Phase, PHASE_COUNT};

/// Named note frequencies in Hz, ascending from B0 to D#8
pub const NOTES: [(&str, u16); 89] = [
    ("B0", 31), ("C1", 33), ("CS1", 35), ("D1", 37), ("DS1", 39), ("E1", 41),
    ("F1", 44), ("FS1", 46), ("G1", 49), ("GS1", 52), ("A1", 55), ("AS1", 58),
    ("B1", 62), ("C2", 65), ("CS2", 69), ("D2", 73), ("DS2", 78), ("E2", 82),
    ("F2", 87), ("FS2", 93), ("G2", 98), ("GS2", 104), ("A2", 110), ("AS2", 117),
    ("B2", 123), ("C3", 131), ("CS3", 139), ("D3", 147), ("DS3", 156), ("E3", 165),
    ("F3", 175), ("FS3", 185), ("G3", 196), ("GS3", 208), ("A3", 220), ("AS3", 233),
    ("B3", 247), ("C4", 262), ("CS4", 277), ("D4", 294), ("DS4", 311), ("E4", 330),
    ("F4", 349), ("FS4", 370), ("G4", 392), ("GS4", 415), ("A4", 440), ("AS4", 466),
    ("B4", 494), ("C5", 523), ("CS5", 554), ("D5", 587), ("DS5", 622), ("E5", 659),
    ("F5", 698), ("FS5", 740), ("G5", 784), ("GS5", 831), ("A5", 880), ("AS5", 932),
    ("B5", 988), ("C6", 1047), ("CS6", 1109), ("D6", 1175), ("DS6", 1245), ("E6", 1319),
    ("F6", 1397), ("FS6", 1480), ("G6", 1568), ("GS6", 1661), ("A6", 1760), ("AS6", 1865),
    ("B6", 1976), ("C7", 2093), ("CS7", 2217), ("D7", 2349), ("DS7", 2489), ("E7", 2637),
    ("F7", 2794), ("FS7", 2960), ("G7", 3136), ("GS7", 3322), ("A7", 3520), ("AS7", 3729),
    ("B7", 3951), ("C8", 4186), ("CS8", 4435), ("D8", 4699), ("DS8", 4978),
];

/// Look up a note frequency by name (e.g. `"A4"` -> 440)
pub fn note_frequency(name: &str) -> Option<u16> {
    NOTES
        .iter()
        .find(|(note, _)| *note == name)
        .map(|(_, hz)| *hz)
}

/// D8
pub const TONE_D8: u16 = 4699;
/// B7
pub const TONE_B7: u16 = 3951;
/// A7
pub const TONE_A7: u16 = 3520;
/// G6
pub const TONE_G6: u16 = 1568;

/// Cue pitch per phase, indexed by [`Phase::index`]
///
/// Descending D major pentatonic: in -> hold -> out -> keep.
pub const PHASE_TONES: [u16; PHASE_COUNT] = [TONE_D8, TONE_B7, TONE_A7, TONE_G6];

/// Cue pitch for a phase
pub const fn phase_tone(phase: Phase) -> u16 {
    PHASE_TONES[phase.index()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_note_lookup() {
        assert_eq!(note_frequency("A4"), Some(440));
        assert_eq!(note_frequency("B0"), Some(31));
        assert_eq!(note_frequency("DS8"), Some(4978));
        assert_eq!(note_frequency("H4"), None);
    }

    #[test]
    fn test_phase_table_matches_notes() {
        assert_eq!(note_frequency("D8"), Some(phase_tone(Phase::In)));
        assert_eq!(note_frequency("B7"), Some(phase_tone(Phase::Hold)));
        assert_eq!(note_frequency("A7"), Some(phase_tone(Phase::Out)));
        assert_eq!(note_frequency("G6"), Some(phase_tone(Phase::Stay)));
    }

    #[test]
    fn test_phase_tones_descend() {
        for pair in PHASE_TONES.windows(2) {
            assert!(pair[0] > pair[1]);
        }
    }

    #[test]
    fn test_notes_ascending() {
        for pair in NOTES.windows(2) {
            assert!(pair[0].1 < pair[1].1, "{} >= {}", pair[0].0, pair[1].0);
        }
    }
}
