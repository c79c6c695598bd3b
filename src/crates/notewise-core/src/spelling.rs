// Choosing between the sharp and flat spelling tables.
//
// Conventional notation spells a key's notes with either sharps or flats
// depending on the key and the mode, so scales carry one rule per mode.
// Chords have no key context and share a single rule that looks only at
// the root.

use crate::error::{Result, TheoryError};
use crate::pitch::{PitchClass, Spelling};

/// A table-selection rule: trigger notes plus an optional trailing-"b" trigger
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpellingRule {
    triggers: &'static [&'static str],
    flat_suffix_triggers: bool,
    when_triggered: Spelling,
    otherwise: Spelling,
}

impl SpellingRule {
    /// Flats when `note` is listed (or, if `flat_suffix_triggers`, ends in "b")
    pub const fn flats_for(triggers: &'static [&'static str], flat_suffix_triggers: bool) -> Self {
        SpellingRule {
            triggers,
            flat_suffix_triggers,
            when_triggered: Spelling::Flats,
            otherwise: Spelling::Sharps,
        }
    }

    /// Sharps only when `note` is listed, flats everywhere else
    pub const fn sharps_for(triggers: &'static [&'static str]) -> Self {
        SpellingRule {
            triggers,
            flat_suffix_triggers: false,
            when_triggered: Spelling::Sharps,
            otherwise: Spelling::Flats,
        }
    }

    pub fn choose(&self, note: &str) -> Spelling {
        let triggered = self.triggers.contains(&note)
            || (self.flat_suffix_triggers && note.ends_with('b'));

        if triggered {
            self.when_triggered
        } else {
            self.otherwise
        }
    }
}

/// Shared by every chord type
pub const CHORD_RULE: SpellingRule =
    SpellingRule::flats_for(&["F", "Bb", "Eb", "Ab", "Db", "Gb"], true);

/// Used for any mode without an entry in the table
pub const DEFAULT_RULE: SpellingRule = SpellingRule::flats_for(&[], false);

const SCALE_RULES: &[(&str, SpellingRule)] = &[
    ("major", SpellingRule::flats_for(&["F"], true)),
    ("minor", SpellingRule::flats_for(&["D", "G", "C", "F", "Bb", "Eb", "Ab"], true)),
    ("dorian", SpellingRule::flats_for(&["D", "G", "C", "F", "Bb", "Eb"], true)),
    ("phrygian", SpellingRule::flats_for(&["A", "D", "G", "C", "F", "Bb", "Eb"], true)),
    ("lydian", SpellingRule::flats_for(&["F"], false)),
    ("mixolydian", SpellingRule::flats_for(&["C", "F", "Bb", "Eb", "Ab", "Db", "Gb"], true)),
    ("locrian", SpellingRule::sharps_for(&["B"])),
];

/// Look up the spelling rule for a scale mode (case-insensitive)
pub fn scale_rule(mode: &str) -> &'static SpellingRule {
    let mode = mode.to_lowercase();
    SCALE_RULES
        .iter()
        .find(|(name, _)| *name == mode)
        .map(|(_, rule)| rule)
        .unwrap_or(&DEFAULT_RULE)
}

/// A validated root note and the table its scale or chord is spelled from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Root {
    pub pitch: PitchClass,
    pub spelling: Spelling,
}

impl Root {
    /// The root as spelled in the chosen table
    pub fn name(&self) -> &'static str {
        self.spelling.name_of(self.pitch)
    }

    pub fn note_at(&self, semitones: i32) -> &'static str {
        self.spelling.name_of(self.pitch.transpose(semitones))
    }
}

/// Resolve `note` to a pitch class, spelled with the table `rule` picks.
///
/// A note missing from the chosen table (e.g. "C#" when flats were picked)
/// is located in the other table and re-spelled enharmonically.
pub fn resolve(note: &str, rule: &SpellingRule) -> Result<Root> {
    let spelling = rule.choose(note);
    let pitch = spelling
        .position(note)
        .or_else(|| spelling.other().position(note))
        .ok_or_else(|| TheoryError::InvalidNote(note.to_string()))?;

    Ok(Root { pitch, spelling })
}
