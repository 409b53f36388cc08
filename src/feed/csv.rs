use anyhow::Result;
use csv::ReaderBuilder;
use serde::Deserialize;

use crate::domain::MatchRecord;

/// Row shape of the football-data.co.uk results CSV. The files carry many
/// more columns (referee, shots, bookmaker odds); serde ignores what we do
/// not name.
#[derive(Debug, Deserialize)]
struct ResultRow {
    #[serde(rename = "HomeTeam")]
    home_team: Option<String>,
    #[serde(rename = "AwayTeam")]
    away_team: Option<String>,
    #[serde(rename = "FTHG")]
    home_goals: Option<u32>,
    #[serde(rename = "FTAG")]
    away_goals: Option<u32>,
}

/// Decode a results CSV body into match records.
///
/// Row order in the file is chronological and becomes `sequence_index`.
/// Rows without both team names and both full-time goal figures (unplayed
/// fixtures, trailing blank lines) are skipped rather than failing the
/// whole feed.
pub fn parse_matches(body: &str) -> Result<Vec<MatchRecord>> {
    let mut reader = ReaderBuilder::new()
        .flexible(true)
        .from_reader(body.as_bytes());

    let mut matches = Vec::new();
    for row in reader.deserialize::<ResultRow>() {
        // Truncated separator rows in these files are noise, not data.
        let Ok(row) = row else { continue };
        if let Some(record) = to_record(row, matches.len()) {
            matches.push(record);
        }
    }
    Ok(matches)
}

fn to_record(row: ResultRow, sequence_index: usize) -> Option<MatchRecord> {
    let home_team = row.home_team?.trim().to_string();
    let away_team = row.away_team?.trim().to_string();
    if home_team.is_empty() || away_team.is_empty() {
        return None;
    }

    Some(MatchRecord {
        home_team,
        away_team,
        home_goals: row.home_goals?,
        away_goals: row.away_goals?,
        sequence_index,
    })
}
