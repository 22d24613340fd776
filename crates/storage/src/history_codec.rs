//! JSON encoding of the match history, stored whole under [`HISTORY_KEY`].
//!
//! The document is an array of flat record objects. Only its shape is
//! checked strictly: a document that is not an array of objects fails as a
//! whole. Individual fields are read leniently. Numbers may arrive as
//! doubles or numeric strings, and a field that is missing, null or of a
//! type that cannot be coerced takes its default.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use scorekeeper_core::{MatchRecord, Sport};

use crate::error::StorageError;
use crate::traits::BlobStore;

/// Key the history document lives under.
pub const HISTORY_KEY: &str = "history_json";

const DEFAULT_LEFT_NAME: &str = "Left";
const DEFAULT_RIGHT_NAME: &str = "Right";

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct RecordOut<'a> {
    id: i64,
    timestamp: i64,
    sport: Sport,
    left_name: &'a str,
    right_name: &'a str,
    set_summary: &'a str,
    left_sets: u32,
    right_sets: u32,
    left_games: u32,
    right_games: u32,
}

impl<'a> From<&'a MatchRecord> for RecordOut<'a> {
    fn from(rec: &'a MatchRecord) -> Self {
        Self {
            id: rec.id,
            timestamp: rec.timestamp,
            sport: rec.sport,
            left_name: &rec.left_name,
            right_name: &rec.right_name,
            set_summary: &rec.set_summary,
            left_sets: rec.left_sets,
            right_sets: rec.right_sets,
            left_games: rec.left_games,
            right_games: rec.right_games,
        }
    }
}

fn default_left_name() -> String {
    DEFAULT_LEFT_NAME.to_string()
}

fn default_right_name() -> String {
    DEFAULT_RIGHT_NAME.to_string()
}

/// Integer value of a number or numeric string. Fractions are truncated.
fn coerce_i64(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64().or_else(|| n.as_f64().map(|f| f as i64)),
        Value::String(s) => {
            let s = s.trim();
            s.parse::<i64>().ok().or_else(|| {
                s.parse::<f64>()
                    .ok()
                    .filter(|f| f.is_finite())
                    .map(|f| f as i64)
            })
        }
        _ => None,
    }
}

/// Text of any non-null scalar or structure; strings are taken verbatim.
fn coerce_string(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

fn lenient_i64<'de, D: Deserializer<'de>>(de: D) -> Result<i64, D::Error> {
    let value = Value::deserialize(de)?;
    Ok(coerce_i64(&value).unwrap_or_default())
}

/// Counts that are negative or too large fall back to zero.
fn lenient_count<'de, D: Deserializer<'de>>(de: D) -> Result<u32, D::Error> {
    let value = Value::deserialize(de)?;
    Ok(coerce_i64(&value)
        .and_then(|n| u32::try_from(n).ok())
        .unwrap_or_default())
}

fn lenient_sport<'de, D: Deserializer<'de>>(de: D) -> Result<Sport, D::Error> {
    let value = Value::deserialize(de)?;
    Ok(Sport::deserialize(value).unwrap_or_default())
}

fn lenient_text<'de, D: Deserializer<'de>>(de: D) -> Result<String, D::Error> {
    let value = Value::deserialize(de)?;
    Ok(coerce_string(&value).unwrap_or_default())
}

fn lenient_left_name<'de, D: Deserializer<'de>>(de: D) -> Result<String, D::Error> {
    let value = Value::deserialize(de)?;
    Ok(coerce_string(&value).unwrap_or_else(default_left_name))
}

fn lenient_right_name<'de, D: Deserializer<'de>>(de: D) -> Result<String, D::Error> {
    let value = Value::deserialize(de)?;
    Ok(coerce_string(&value).unwrap_or_else(default_right_name))
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RecordDoc {
    #[serde(default, deserialize_with = "lenient_i64")]
    id: i64,
    #[serde(default, deserialize_with = "lenient_i64")]
    timestamp: i64,
    #[serde(default, deserialize_with = "lenient_sport")]
    sport: Sport,
    #[serde(default = "default_left_name", deserialize_with = "lenient_left_name")]
    left_name: String,
    #[serde(default = "default_right_name", deserialize_with = "lenient_right_name")]
    right_name: String,
    #[serde(default, deserialize_with = "lenient_text")]
    set_summary: String,
    #[serde(default, deserialize_with = "lenient_count")]
    left_sets: u32,
    #[serde(default, deserialize_with = "lenient_count")]
    right_sets: u32,
    #[serde(default, deserialize_with = "lenient_count")]
    left_games: u32,
    #[serde(default, deserialize_with = "lenient_count")]
    right_games: u32,
}

impl From<RecordDoc> for MatchRecord {
    fn from(doc: RecordDoc) -> Self {
        Self {
            id: doc.id,
            timestamp: doc.timestamp,
            sport: doc.sport,
            left_name: doc.left_name,
            right_name: doc.right_name,
            set_summary: doc.set_summary,
            left_sets: doc.left_sets,
            right_sets: doc.right_sets,
            left_games: doc.left_games,
            right_games: doc.right_games,
        }
    }
}

pub fn encode_history(records: &[MatchRecord]) -> Result<String, StorageError> {
    let docs: Vec<RecordOut<'_>> = records.iter().map(RecordOut::from).collect();
    Ok(serde_json::to_string(&docs)?)
}

pub fn decode_history(raw: &str) -> Result<Vec<MatchRecord>, StorageError> {
    // Going through `Map` first rejects records that are arrays, which serde
    // would otherwise accept as a positional struct.
    let objects: Vec<Map<String, Value>> = serde_json::from_str(raw)?;
    objects
        .into_iter()
        .map(|obj| -> Result<MatchRecord, StorageError> {
            let doc: RecordDoc = serde_json::from_value(Value::Object(obj))?;
            Ok(MatchRecord::from(doc))
        })
        .collect()
}

/// Overwrite the stored history with `records`.
pub fn save_history<S: BlobStore + ?Sized>(
    store: &mut S,
    records: &[MatchRecord],
) -> Result<(), StorageError> {
    let raw = encode_history(records)?;
    store.set(HISTORY_KEY, &raw)
}

pub fn try_load_history<S: BlobStore + ?Sized>(
    store: &S,
) -> Result<Vec<MatchRecord>, StorageError> {
    match store.get(HISTORY_KEY)? {
        Some(raw) => decode_history(&raw),
        None => Ok(Vec::new()),
    }
}

/// Stored history, or an empty list when nothing usable is stored.
pub fn load_history<S: BlobStore + ?Sized>(store: &S) -> Vec<MatchRecord> {
    match try_load_history(store) {
        Ok(records) => {
            log::info!("loaded {} history records", records.len());
            records
        }
        Err(e) => {
            log::warn!("discarding stored history: {e}");
            Vec::new()
        }
    }
}
