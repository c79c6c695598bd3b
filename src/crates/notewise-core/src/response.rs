//! Response payloads for adapters that report results over JSON.
//!
//! The shapes match what clients of the scale and chord endpoints expect:
//! a successful lookup echoes the request next to its notes, and a failure
//! carries only a human-readable `error` message.

use serde::Serialize;

use crate::chord::generate_chord;
use crate::scale::generate_scale;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Response {
    #[serde(rename_all = "camelCase")]
    Scale {
        note: String,
        scale_type: String,
        scale: Vec<String>,
    },
    #[serde(rename_all = "camelCase")]
    Chord {
        note: String,
        chord_type: String,
        chord: Vec<String>,
    },
    Error {
        error: String,
    },
}

impl Response {
    pub fn is_error(&self) -> bool {
        matches!(self, Response::Error { .. })
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// Build the payload for a scale request; errors become `Response::Error`
pub fn scale_response(note: &str, scale_type: &str) -> Response {
    match generate_scale(note, scale_type) {
        Ok(scale) => Response::Scale {
            note: note.to_string(),
            scale_type: scale_type.to_string(),
            scale,
        },
        Err(e) => Response::Error { error: e.to_string() },
    }
}

/// Build the payload for a chord request; errors become `Response::Error`
pub fn chord_response(note: &str, chord_type: &str) -> Response {
    match generate_chord(note, chord_type) {
        Ok(chord) => Response::Chord {
            note: note.to_string(),
            chord_type: chord_type.to_string(),
            chord,
        },
        Err(e) => Response::Error { error: e.to_string() },
    }
}
