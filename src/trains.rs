use chrono::NaiveTime;
use log::debug;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::date;
use crate::query::QueryError;

/// A train from the dataset. Fields missing from a record keep their zero
/// value, a missing time is `None`.
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct Train {
    pub train_id: i64,
    pub departure_station_id: i64,
    pub arrival_station_id: i64,
    pub price: f32,
    #[serde(with = "date::naive_time")]
    pub arrival_time: Option<NaiveTime>,
    #[serde(with = "date::naive_time")]
    pub departure_time: Option<NaiveTime>,
}

/// Reads the whole dataset from `path`. Called once per query, nothing is
/// cached between calls.
pub fn load_trains<P: AsRef<Path>>(path: P) -> Result<Vec<Train>, QueryError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(QueryError::ReadError)?;
    let trains = parse_trains(&text)?;
    debug!("Loaded {} trains from {}", trains.len(), path.display());
    Ok(trains)
}

pub fn parse_trains(text: &str) -> Result<Vec<Train>, QueryError> {
    serde_json::from_str(text).map_err(QueryError::JsonParseError)
}
