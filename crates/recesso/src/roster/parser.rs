use crate::entitlement::{parse_date, ContractSpan, RecessError};
use crate::note::InternProfile;
use serde::Deserialize;
use std::io::Read;

/// One parsed roster line, ready to be issued as a note.
#[derive(Debug)]
pub(crate) struct RosterEntry {
    pub(crate) line: u64,
    pub(crate) intern: InternProfile,
    pub(crate) taken: [Option<i64>; 2],
}

/// A roster line that failed validation.
#[derive(Debug)]
pub(crate) struct RejectedRow {
    pub(crate) line: u64,
    pub(crate) error: RecessError,
}

pub(crate) enum ParsedRow {
    Entry(RosterEntry),
    Rejected(RejectedRow),
}

pub(crate) fn parse_rows<R: Read>(reader: R) -> Result<Vec<ParsedRow>, csv::Error> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let headers = csv_reader.headers()?.clone();
    let mut rows = Vec::new();

    for (index, record) in csv_reader.records().enumerate() {
        let record = record?;
        let line = record
            .position()
            .map_or(index as u64 + 2, |position| position.line());
        let row: RosterRow = record.deserialize(Some(&headers))?;

        rows.push(match row.into_entry(line) {
            Ok(entry) => ParsedRow::Entry(entry),
            Err(error) => ParsedRow::Rejected(RejectedRow { line, error }),
        });
    }

    Ok(rows)
}

#[derive(Debug, Deserialize)]
struct RosterRow {
    #[serde(rename = "nome")]
    name: String,
    #[serde(rename = "ocupacao", default)]
    occupation: String,
    #[serde(rename = "matricula", default)]
    registration: String,
    #[serde(rename = "processo_pae", default)]
    process_number: String,
    #[serde(rename = "inicio")]
    start: String,
    #[serde(rename = "fim")]
    end: String,
    #[serde(rename = "ciclo1_gozados", default)]
    first_cycle_taken: Option<i64>,
    #[serde(rename = "ciclo2_gozados", default)]
    second_cycle_taken: Option<i64>,
}

impl RosterRow {
    fn into_entry(self, line: u64) -> Result<RosterEntry, RecessError> {
        let contract = ContractSpan::new(parse_date(&self.start)?, parse_date(&self.end)?)?;

        Ok(RosterEntry {
            line,
            intern: InternProfile {
                name: self.name,
                occupation: self.occupation,
                registration: self.registration,
                process_number: self.process_number,
                contract,
            },
            taken: [self.first_cycle_taken, self.second_cycle_taken],
        })
    }
}
