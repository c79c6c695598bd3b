use crate::error::Result;
use crate::pitch::PitchClass;
use crate::registry::ScaleType;
use crate::spelling::resolve;

/// Generate scale notes from a root note and scale type.
///
/// The scale starts on the root and closes on its octave, so a seven-step
/// mode yields eight notes (e.g. `["C", "D", "E", "F", "G", "A", "B", "C"]`).
/// The scale type is validated before the note.
///
/// # Examples
/// ```
/// use notewise_core::generate_scale;
///
/// let scale = generate_scale("F", "major").unwrap();
/// assert_eq!(scale, vec!["F", "G", "A", "Bb", "C", "D", "E", "F"]);
/// ```
pub fn generate_scale(note: &str, scale_type: &str) -> Result<Vec<String>> {
    let scale_type: ScaleType = scale_type.parse()?;
    let root = resolve(note, scale_type.spelling_rule())?;

    let mut pitch: PitchClass = root.pitch;
    let mut scale = Vec::with_capacity(scale_type.steps().len() + 1);
    scale.push(root.name().to_string());

    for &step in scale_type.steps() {
        pitch = pitch.transpose(step as i32);
        scale.push(root.spelling.name_of(pitch).to_string());
    }

    Ok(scale)
}
