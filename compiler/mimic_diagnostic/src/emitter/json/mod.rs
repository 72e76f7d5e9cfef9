//! JSON Lines output.
//!
//! Each diagnostic is one object on its own line:
//!
//! ```text
//! {"code":"M0001","severity":"error","message":"...","subject":"Acme.Gone","member":null,"notes":[],"suggestions":[]}
//! ```
//!
//! [`DiagnosticEmitter::finish`] appends `{"tally":{"succeeded":3,"failed":1}}`.

use std::io::Write;

use serde::Serialize;

use crate::Diagnostic;

use super::{DiagnosticEmitter, Tally};

pub struct JsonEmitter<W: Write> {
    writer: W,
}

#[derive(Serialize)]
struct Record<'a> {
    code: &'static str,
    severity: String,
    message: &'a str,
    subject: Option<&'a str>,
    member: Option<&'a str>,
    notes: &'a [String],
    suggestions: &'a [String],
}

#[derive(Serialize)]
struct Closing {
    tally: Tally,
}

impl<W: Write> JsonEmitter<W> {
    pub fn new(writer: W) -> Self {
        JsonEmitter { writer }
    }

    fn write_line(&mut self, value: &impl Serialize) {
        if serde_json::to_writer(&mut self.writer, value).is_ok() {
            let _ = writeln!(self.writer);
        }
    }
}

impl<W: Write> DiagnosticEmitter for JsonEmitter<W> {
    fn emit(&mut self, diagnostic: &Diagnostic) {
        self.write_line(&Record {
            code: diagnostic.code.as_str(),
            severity: diagnostic.severity.to_string(),
            message: &diagnostic.message,
            subject: diagnostic.subject.as_deref(),
            member: diagnostic.member.as_deref(),
            notes: &diagnostic.notes,
            suggestions: &diagnostic.suggestions,
        });
    }

    fn finish(&mut self, tally: Tally) {
        self.write_line(&Closing { tally });
        self.flush();
    }

    fn flush(&mut self) {
        let _ = self.writer.flush();
    }
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
