//! Batch issue of technical notes from a CSV roster of former interns.
//!
//! Expected headers: `nome,ocupacao,matricula,processo_pae,inicio,fim,
//! ciclo1_gozados,ciclo2_gozados`. Dates may be `dd/mm/yyyy` or `yyyy-mm-dd`.

mod parser;

use crate::entitlement::{EntitlementRule, RecessError, SummaryTemplate};
use crate::note::{NoteNumber, TechnicalNote};
use std::io::Read;
use std::path::Path;
use tracing::info;

use parser::ParsedRow;

#[derive(Debug)]
pub enum RosterImportError {
    Io(std::io::Error),
    Csv(csv::Error),
    Row { line: u64, source: RecessError },
    SequenceExhausted { line: u64, last: NoteNumber },
}

impl std::fmt::Display for RosterImportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RosterImportError::Io(err) => write!(f, "failed to read roster: {}", err),
            RosterImportError::Csv(err) => write!(f, "invalid roster CSV data: {}", err),
            RosterImportError::Row { line, source } => {
                write!(f, "roster line {}: {}", line, source)
            }
            RosterImportError::SequenceExhausted { line, last } => write!(
                f,
                "roster line {}: no note number left after {}",
                line, last
            ),
        }
    }
}

impl std::error::Error for RosterImportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RosterImportError::Io(err) => Some(err),
            RosterImportError::Csv(err) => Some(err),
            RosterImportError::Row { source, .. } => Some(source),
            RosterImportError::SequenceExhausted { .. } => None,
        }
    }
}

impl From<std::io::Error> for RosterImportError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<csv::Error> for RosterImportError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err)
    }
}

/// How the notes of a roster are numbered and assessed.
#[derive(Debug, Clone)]
pub struct RosterOptions {
    pub first_number: NoteNumber,
    pub rule: EntitlementRule,
    pub template: SummaryTemplate,
}

pub struct RosterImporter;

impl RosterImporter {
    pub fn from_path<P: AsRef<Path>>(
        path: P,
        options: &RosterOptions,
    ) -> Result<Vec<TechnicalNote>, RosterImportError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file, options)
    }

    /// Issue one note per roster line with consecutive numbers. The first
    /// invalid line, or a line left without a note number, aborts the import;
    /// no partial batch is returned.
    pub fn from_reader<R: Read>(
        reader: R,
        options: &RosterOptions,
    ) -> Result<Vec<TechnicalNote>, RosterImportError> {
        let mut notes = Vec::new();
        let mut number = Some(options.first_number.clone());

        for row in parser::parse_rows(reader)? {
            let entry = match row {
                ParsedRow::Entry(entry) => entry,
                ParsedRow::Rejected(rejected) => {
                    return Err(RosterImportError::Row {
                        line: rejected.line,
                        source: rejected.error,
                    })
                }
            };

            let line = entry.line;
            let Some(current) = number.take() else {
                return Err(RosterImportError::SequenceExhausted {
                    line,
                    last: notes
                        .last()
                        .map(|note: &TechnicalNote| note.number.clone())
                        .unwrap_or_else(|| options.first_number.clone()),
                });
            };
            number = current.next();

            let note = TechnicalNote::issue(
                current,
                entry.intern,
                &entry.taken,
                options.rule,
                options.template,
            )
            .map_err(|source| RosterImportError::Row { line, source })?;

            notes.push(note);
        }

        info!(notes = notes.len(), rule = options.rule.label(), "roster imported");
        Ok(notes)
    }
}
