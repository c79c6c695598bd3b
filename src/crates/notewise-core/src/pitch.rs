//! Pitch classes and the two fixed spelling tables
//!
//! Every note the engine emits is drawn from one of these tables, so a
//! generated scale or chord never mixes sharps with flats.

use serde::Serialize;
use std::fmt;

/// Chromatic note names using sharps
pub const SHARP_NAMES: [&str; 12] = [
    "C", "C#", "D", "D#", "E", "F", "F#", "G", "G#", "A", "A#", "B",
];

/// Chromatic note names using flats
pub const FLAT_NAMES: [&str; 12] = [
    "C", "Db", "D", "Eb", "E", "F", "Gb", "G", "Ab", "A", "Bb", "B",
];

/// A position in the 12-tone chromatic cycle, with 0 fixed to C
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct PitchClass(u8);

impl PitchClass {
    /// Wrap any semitone count into the cycle
    pub fn new(semitones: i32) -> Self {
        PitchClass(semitones.rem_euclid(12) as u8)
    }

    pub fn value(self) -> u8 {
        self.0
    }

    /// Move up (or down, for negative counts) by `semitones`
    pub fn transpose(self, semitones: i32) -> Self {
        Self::new(self.0 as i32 + semitones)
    }

    fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for PitchClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Which chromatic spelling table a result is drawn from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Spelling {
    Sharps,
    Flats,
}

impl Spelling {
    pub fn names(self) -> &'static [&'static str; 12] {
        match self {
            Spelling::Sharps => &SHARP_NAMES,
            Spelling::Flats => &FLAT_NAMES,
        }
    }

    /// The opposite table
    pub fn other(self) -> Self {
        match self {
            Spelling::Sharps => Spelling::Flats,
            Spelling::Flats => Spelling::Sharps,
        }
    }

    pub fn name_of(self, pitch: PitchClass) -> &'static str {
        self.names()[pitch.index()]
    }

    /// Find `note` in this table (exact, case-sensitive match)
    pub fn position(self, note: &str) -> Option<PitchClass> {
        self.names()
            .iter()
            .position(|&name| name == note)
            .map(|index| PitchClass(index as u8))
    }
}
