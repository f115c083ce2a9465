use crate::app::{QualifyingResult, QualifyingSession};
use color_eyre::eyre::{eyre, Result, WrapErr};

#[derive(serde::Deserialize)]
struct Response {
    #[serde(rename = "MRData")]
    mr_data: MrData,
}

#[derive(serde::Deserialize)]
struct MrData {
    #[serde(rename = "RaceTable")]
    race_table: RaceTable,
}

#[derive(serde::Deserialize)]
struct RaceTable {
    #[serde(rename = "Races", default)]
    races: Vec<Race>,
}

#[derive(serde::Deserialize)]
struct Race {
    #[serde(rename = "raceName", default)]
    race_name: Option<String>,
    #[serde(rename = "QualifyingResults")]
    qualifying_results: Vec<QualifyingResult>,
}

/// Reads `MRData.RaceTable.Races[0]` out of a qualifying response.
/// An empty `Races` list is an error.
pub fn parse_session(json: &str) -> Result<QualifyingSession> {
    let resp: Response =
        serde_json::from_str(json).wrap_err("Unexpected qualifying response shape")?;
    let race = resp
        .mr_data
        .race_table
        .races
        .into_iter()
        .next()
        .ok_or_else(|| eyre!("No race found for this season and round"))?;
    Ok(QualifyingSession {
        race_name: race.race_name,
        results: race.qualifying_results,
    })
}
