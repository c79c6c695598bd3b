//! Note spelling engine for scales and chords
//!
//! This crate turns a root note and a pattern name into a correctly spelled
//! list of notes. A root may be written with a sharp, a flat or as a natural;
//! the engine picks the sharp or flat spelling table from the root and the
//! requested mode, then walks the pattern around the 12-tone cycle.
//!
//! # Examples
//!
//! ```
//! use notewise_core::{generate_chord, generate_scale};
//!
//! let scale = generate_scale("C", "minor").unwrap();
//! assert_eq!(scale, vec!["C", "D", "Eb", "F", "G", "Ab", "Bb", "C"]);
//!
//! let chord = generate_chord("C", "major").unwrap();
//! assert_eq!(chord, vec!["C", "E", "G"]);
//! ```
//!
//! # Main Functions
//!
//! - [`generate_scale`]: root plus mode, closing on the octave
//! - [`generate_chord`]: root plus chord quality
//! - [`resolve`]: validate a root and choose its spelling table
//! - [`scale_response`] / [`chord_response`]: JSON-ready payloads

pub mod chord;
pub mod error;
pub mod pitch;
pub mod registry;
pub mod response;
pub mod scale;
pub mod spelling;


pub use chord::generate_chord;
pub use error::{Result, TheoryError};
pub use pitch::{PitchClass, Spelling, FLAT_NAMES, SHARP_NAMES};
pub use registry::{available_chords, available_scales, ChordType, ScaleType};
pub use response::{chord_response, scale_response, Response};
pub use scale::generate_scale;
pub use spelling::{resolve, scale_rule, Root, SpellingRule, CHORD_RULE};
