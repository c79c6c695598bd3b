// Interactive prompt loop: ask for a note and a type, print the result,
// repeat until "exit" or end of input.

use anyhow::Result;
use notewise_core::{available_chords, available_scales, generate_chord, generate_scale};
use std::io::{BufRead, Write};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lookup {
    Scale,
    Chord,
}

impl Lookup {
    fn label(self) -> &'static str {
        match self {
            Lookup::Scale => "Scale",
            Lookup::Chord => "Chord",
        }
    }

    fn type_prompt(self) -> String {
        let names = match self {
            Lookup::Scale => available_scales(),
            Lookup::Chord => available_chords(),
        };
        format!("Enter {} type [{}]: ", self.label().to_lowercase(), names.join(", "))
    }
}

pub struct Console<R, W> {
    input: R,
    output: W,
    lookup: Lookup,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W, lookup: Lookup) -> Self {
        Self { input, output, lookup }
    }

    /// Run until the user types "exit" or input runs out
    pub fn run(&mut self) -> Result<()> {
        loop {
            let Some(note) = self.prompt("Enter a note (or 'exit' to quit): ")? else {
                break;
            };
            if note.eq_ignore_ascii_case("exit") {
                break;
            }

            let prompt = self.lookup.type_prompt();
            let Some(kind) = self.prompt(&prompt)? else {
                break;
            };

            let result = match self.lookup {
                Lookup::Scale => generate_scale(&note, &kind),
                Lookup::Chord => generate_chord(&note, &kind),
            };

            match result {
                Ok(notes) => writeln!(
                    self.output,
                    "{} {} {}: [{}]",
                    note,
                    capitalize(&kind),
                    self.lookup.label(),
                    notes.join(", ")
                )?,
                Err(e) => writeln!(self.output, "{}", e)?,
            }
        }

        Ok(())
    }

    /// Print `text` and read one trimmed line; `None` at end of input
    fn prompt(&mut self, text: &str) -> Result<Option<String>> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            writeln!(self.output)?;
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    #[cfg(test)]
    fn into_output(self) -> W {
        self.output
    }
}

/// Upper-case the first letter, lower-case the rest ("mIXOLYDIAN" -> "Mixolydian")
fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}
