// Fixed pattern registries for scales and chords.
//
// Scale patterns are step sequences between consecutive degrees (each sums
// to one octave). Chord patterns are absolute semitone offsets from the root.

use crate::error::TheoryError;
use crate::spelling::{scale_rule, SpellingRule, CHORD_RULE};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ScaleType {
    Major,
    Minor,
    Dorian,
    Phrygian,
    Lydian,
    Mixolydian,
    Locrian,
}

impl ScaleType {
    /// Every registered scale type, in listing order
    pub const ALL: [ScaleType; 7] = [
        ScaleType::Major,
        ScaleType::Minor,
        ScaleType::Dorian,
        ScaleType::Phrygian,
        ScaleType::Lydian,
        ScaleType::Mixolydian,
        ScaleType::Locrian,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ScaleType::Major => "major",
            ScaleType::Minor => "minor",
            ScaleType::Dorian => "dorian",
            ScaleType::Phrygian => "phrygian",
            ScaleType::Lydian => "lydian",
            ScaleType::Mixolydian => "mixolydian",
            ScaleType::Locrian => "locrian",
        }
    }

    /// Semitone steps between consecutive degrees
    pub fn steps(self) -> &'static [u8] {
        match self {
            ScaleType::Major => &[2, 2, 1, 2, 2, 2, 1],
            ScaleType::Minor => &[2, 1, 2, 2, 1, 2, 2],
            ScaleType::Dorian => &[2, 1, 2, 2, 2, 1, 2],
            ScaleType::Phrygian => &[1, 2, 2, 2, 1, 2, 2],
            ScaleType::Lydian => &[2, 2, 2, 1, 2, 2, 1],
            ScaleType::Mixolydian => &[2, 2, 1, 2, 2, 1, 2],
            ScaleType::Locrian => &[1, 2, 2, 1, 2, 2, 2],
        }
    }

    /// Offsets of each degree from the root (major: 0, 2, 4, 5, 7, 9, 11)
    pub fn intervals(self) -> Vec<u8> {
        self.steps()
            .iter()
            .scan(0u8, |offset, &step| {
                let degree = *offset;
                *offset += step;
                Some(degree)
            })
            .collect()
    }

    pub fn spelling_rule(self) -> &'static SpellingRule {
        scale_rule(self.name())
    }
}

impl FromStr for ScaleType {
    type Err = TheoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.to_lowercase();
        ScaleType::ALL
            .into_iter()
            .find(|scale| scale.name() == lower)
            .ok_or_else(|| TheoryError::InvalidScaleType {
                given: s.to_string(),
                available: available_scales(),
            })
    }
}

impl fmt::Display for ScaleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChordType {
    Major,
    Minor,
    Major7,
    Minor7,
    Major9,
    Minor9,
    Add9,
    Major11,
    Minor11,
    Sus4,
    Sus2,
    Dim,
    Aug,
}

impl ChordType {
    /// Every registered chord type, in listing order
    pub const ALL: [ChordType; 13] = [
        ChordType::Major,
        ChordType::Minor,
        ChordType::Major7,
        ChordType::Minor7,
        ChordType::Major9,
        ChordType::Minor9,
        ChordType::Add9,
        ChordType::Major11,
        ChordType::Minor11,
        ChordType::Sus4,
        ChordType::Sus2,
        ChordType::Dim,
        ChordType::Aug,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ChordType::Major => "major",
            ChordType::Minor => "minor",
            ChordType::Major7 => "major7",
            ChordType::Minor7 => "minor7",
            ChordType::Major9 => "major9",
            ChordType::Minor9 => "minor9",
            ChordType::Add9 => "add9",
            ChordType::Major11 => "major11",
            ChordType::Minor11 => "minor11",
            ChordType::Sus4 => "sus4",
            ChordType::Sus2 => "sus2",
            ChordType::Dim => "dim",
            ChordType::Aug => "aug",
        }
    }

    /// Semitone offsets from the root; extensions past the octave wrap
    pub fn offsets(self) -> &'static [u8] {
        match self {
            ChordType::Major => &[0, 4, 7],
            ChordType::Minor => &[0, 3, 7],
            ChordType::Major7 => &[0, 4, 7, 11],
            ChordType::Minor7 => &[0, 3, 7, 10],
            ChordType::Major9 => &[0, 4, 7, 11, 14],
            ChordType::Minor9 => &[0, 3, 7, 10, 14],
            ChordType::Add9 => &[0, 4, 7, 14],
            ChordType::Major11 => &[0, 4, 7, 11, 14, 17],
            ChordType::Minor11 => &[0, 3, 7, 10, 14, 17],
            ChordType::Sus4 => &[0, 5, 7],
            ChordType::Sus2 => &[0, 2, 7],
            ChordType::Dim => &[0, 3, 6],
            ChordType::Aug => &[0, 4, 8],
        }
    }

    pub fn spelling_rule(self) -> &'static SpellingRule {
        &CHORD_RULE
    }
}

impl FromStr for ChordType {
    type Err = TheoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.to_lowercase();
        ChordType::ALL
            .into_iter()
            .find(|chord| chord.name() == lower)
            .ok_or_else(|| TheoryError::InvalidChordType {
                given: s.to_string(),
                available: available_chords(),
            })
    }
}

impl fmt::Display for ChordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// List available scale types
pub fn available_scales() -> Vec<&'static str> {
    ScaleType::ALL.iter().map(|scale| scale.name()).collect()
}

/// List available chord types
pub fn available_chords() -> Vec<&'static str> {
    ChordType::ALL.iter().map(|chord| chord.name()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scale_steps_span_an_octave() {
        for scale in ScaleType::ALL {
            let total: u32 = scale.steps().iter().map(|&s| s as u32).sum();
            assert_eq!(total, 12, "{} does not span an octave", scale);
            assert_eq!(scale.steps().len(), 7);
        }
    }

    #[test]
    fn test_chords_start_on_root() {
        for chord in ChordType::ALL {
            assert_eq!(chord.offsets()[0], 0, "{} is missing its root", chord);
        }
    }

    #[test]
    fn test_intervals() {
        assert_eq!(ScaleType::Major.intervals(), vec![0, 2, 4, 5, 7, 9, 11]);
        assert_eq!(ScaleType::Locrian.intervals(), vec![0, 1, 3, 5, 6, 8, 10]);
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("Mixolydian".parse::<ScaleType>(), Ok(ScaleType::Mixolydian));
        assert_eq!("MAJOR7".parse::<ChordType>(), Ok(ChordType::Major7));
        assert_eq!("sus2".parse::<ChordType>(), Ok(ChordType::Sus2));
    }

    #[test]
    fn test_parse_unknown_lists_registry() {
        let err = "blues".parse::<ScaleType>().unwrap_err();
        assert_eq!(
            err,
            TheoryError::InvalidScaleType {
                given: "blues".to_string(),
                available: available_scales(),
            }
        );

        let err = "Power".parse::<ChordType>().unwrap_err();
        assert!(err.to_string().starts_with("Invalid chord type: 'Power'."));
        assert!(err.to_string().contains("major11"));
    }

    #[test]
    fn test_names_round_trip_through_parse() {
        for scale in ScaleType::ALL {
            assert_eq!(scale.name().parse::<ScaleType>(), Ok(scale));
        }
        for chord in ChordType::ALL {
            assert_eq!(chord.name().parse::<ChordType>(), Ok(chord));
        }
    }

    #[test]
    fn test_available_lists_keep_registry_order() {
        assert_eq!(
            available_scales(),
            vec!["major", "minor", "dorian", "phrygian", "lydian", "mixolydian", "locrian"]
        );
        assert_eq!(available_chords().len(), 13);
        assert_eq!(available_chords()[12], "aug");
    }
}
