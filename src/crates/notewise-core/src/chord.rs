use crate::error::Result;
use crate::registry::ChordType;
use crate::spelling::resolve;

/// Generate chord notes from a root note and chord type.
///
/// Offsets are measured from the root, so the root is always the first note
/// and there is no closing octave. Spelling depends only on the root: flat
/// roots (and F) use flats, everything else uses sharps.
///
/// # Examples
/// ```
/// use notewise_core::generate_chord;
///
/// assert_eq!(generate_chord("A", "minor7").unwrap(), vec!["A", "C", "E", "G"]);
/// ```
pub fn generate_chord(note: &str, chord_type: &str) -> Result<Vec<String>> {
    let chord_type: ChordType = chord_type.parse()?;
    let root = resolve(note, chord_type.spelling_rule())?;

    let chord = chord_type
        .offsets()
        .iter()
        .map(|&offset| root.note_at(offset as i32).to_string())
        .collect();

    Ok(chord)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TheoryError;

    #[test]
    fn test_triads() {
        assert_eq!(generate_chord("C", "major").unwrap(), vec!["C", "E", "G"]);
        assert_eq!(generate_chord("A", "minor").unwrap(), vec!["A", "C", "E"]);
        assert_eq!(generate_chord("B", "dim").unwrap(), vec!["B", "D", "F"]);
        assert_eq!(generate_chord("C", "aug").unwrap(), vec!["C", "E", "G#"]);
        assert_eq!(generate_chord("D", "sus4").unwrap(), vec!["D", "G", "A"]);
        assert_eq!(generate_chord("D", "sus2").unwrap(), vec!["D", "E", "A"]);
    }

    #[test]
    fn test_sevenths() {
        assert_eq!(generate_chord("A", "minor7").unwrap(), vec!["A", "C", "E", "G"]);
        assert_eq!(generate_chord("C", "major7").unwrap(), vec!["C", "E", "G", "B"]);
    }

    #[test]
    fn test_extensions_wrap_past_octave() {
        assert_eq!(generate_chord("C", "major9").unwrap(), vec!["C", "E", "G", "B", "D"]);
        assert_eq!(generate_chord("C", "add9").unwrap(), vec!["C", "E", "G", "D"]);
        assert_eq!(generate_chord("C", "major11").unwrap(), vec!["C", "E", "G", "B", "D", "F"]);
        assert_eq!(generate_chord("A", "minor11").unwrap(), vec!["A", "C", "E", "G", "B", "D"]);
    }

    #[test]
    fn test_flat_roots_spell_with_flats() {
        assert_eq!(generate_chord("F", "major").unwrap(), vec!["F", "A", "C"]);
        assert_eq!(generate_chord("Bb", "major").unwrap(), vec!["Bb", "D", "F"]);
        assert_eq!(generate_chord("Db", "minor").unwrap(), vec!["Db", "E", "Ab"]);
        assert_eq!(generate_chord("Eb", "minor9").unwrap(), vec!["Eb", "Gb", "Bb", "Db", "F"]);
    }

    #[test]
    fn test_sharp_roots_spell_with_sharps() {
        assert_eq!(generate_chord("C#", "major").unwrap(), vec!["C#", "F", "G#"]);
        assert_eq!(generate_chord("F#", "minor7").unwrap(), vec!["F#", "A", "C#", "E"]);
    }

    #[test]
    fn test_chord_type_is_case_insensitive() {
        assert_eq!(generate_chord("G", "Major7"), generate_chord("G", "major7"));
    }

    #[test]
    fn test_invalid_chord() {
        assert_eq!(generate_chord("Q", "major"), Err(TheoryError::InvalidNote("Q".to_string())));
        assert!(matches!(generate_chord("C", "power"), Err(TheoryError::InvalidChordType { .. })));
        assert!(matches!(generate_chord("Q", "power"), Err(TheoryError::InvalidChordType { .. })));
    }
}
