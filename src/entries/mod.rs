//! Exported-image entries parsed from filenames and manifest records.
//!
//! Two kinds of entries exist:
//!
//! - [`FrameEntry`]: a matching-result frame named `frame_<N>_t<timecode>...`.
//!   Filenames that do not follow this pattern are dropped.
//! - [`SearchEntry`]: a training/crop image. Time information is optional, so
//!   these never fail to parse.
//!
//! Manifest records arrive either as a bare filename or as a structured
//! object; both are captured by [`RawEntry`] and normalised here. The list
//! builders return entries sorted for the selector.

mod frame;
mod search;

use std::cmp::Ordering;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

pub use frame::FrameEntry;
pub use search::SearchEntry;

/// An entry with an optional position on the playback timeline.
pub trait TimedEntry {
    /// Position in seconds, if known.
    fn seconds(&self) -> Option<f64>;
}

/// A manifest record before normalisation.
///
/// Deserialisation never fails for a single record: anything that fits
/// neither a filename nor a structured record (`null`, numbers) lands in
/// [`RawEntry::Other`] and is dropped during normalisation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawEntry {
    Filename(String),
    Structured(RawFields),
    Other(Value),
}

/// Precomputed fields of a structured manifest record.
///
/// Every field is optional; values present here take precedence over the
/// ones parsed from the filename. A field with the wrong type reads as
/// absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawFields {
    #[serde(
        default,
        deserialize_with = "lenient_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub filename: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient_count",
        skip_serializing_if = "Option::is_none"
    )]
    pub frame_number: Option<u64>,
    #[serde(
        default,
        deserialize_with = "lenient_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub timecode: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient_seconds",
        skip_serializing_if = "Option::is_none"
    )]
    pub seconds: Option<f64>,
}

fn lenient_string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => Some(s),
        _ => None,
    })
}

/// Non-negative whole number, also when written as `12.0`.
fn lenient_count<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<u64>, D::Error> {
    let value = Value::deserialize(deserializer)?;
    if let Some(n) = value.as_u64() {
        return Ok(Some(n));
    }
    Ok(value
        .as_f64()
        .filter(|f| f.is_finite() && *f >= 0.0 && f.fract() == 0.0 && *f <= u64::MAX as f64)
        .map(|f| f as u64))
}

fn lenient_seconds<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<f64>, D::Error> {
    Ok(Value::deserialize(deserializer)?
        .as_f64()
        .filter(|f| f.is_finite()))
}

impl RawEntry {
    /// Filename of the record, if it has a non-empty one.
    pub fn filename(&self) -> Option<&str> {
        let name = match self {
            RawEntry::Filename(name) => name.as_str(),
            RawEntry::Structured(fields) => fields.filename.as_deref()?,
            RawEntry::Other(_) => return None,
        };
        if name.is_empty() {
            None
        } else {
            Some(name)
        }
    }

    /// Structured overrides, if any.
    pub fn fields(&self) -> Option<&RawFields> {
        match self {
            RawEntry::Structured(fields) => Some(fields),
            RawEntry::Filename(_) | RawEntry::Other(_) => None,
        }
    }
}

impl From<&str> for RawEntry {
    fn from(name: &str) -> Self {
        RawEntry::Filename(name.to_string())
    }
}

impl From<FrameEntry> for RawEntry {
    fn from(entry: FrameEntry) -> Self {
        RawEntry::Structured(RawFields {
            filename: Some(entry.filename),
            frame_number: Some(entry.frame_number),
            timecode: Some(entry.timecode),
            seconds: Some(entry.seconds),
        })
    }
}

/// Normalise manifest records into result frames sorted by time.
///
/// Records that do not describe a frame are dropped. Equal times keep their
/// manifest order.
pub fn frame_entries<'a, I>(raws: I) -> Vec<FrameEntry>
where
    I: IntoIterator<Item = &'a RawEntry>,
{
    let mut entries: Vec<FrameEntry> = raws.into_iter().filter_map(FrameEntry::from_raw).collect();
    entries.sort_by(|a, b| a.seconds.total_cmp(&b.seconds));
    entries
}

/// Normalise manifest records into search entries.
///
/// Timed entries come first in ascending time order, followed by untimed
/// entries ordered by filename. Records without a filename are dropped.
pub fn search_entries<'a, I>(raws: I) -> Vec<SearchEntry>
where
    I: IntoIterator<Item = &'a RawEntry>,
{
    let mut entries: Vec<SearchEntry> = raws.into_iter().filter_map(SearchEntry::from_raw).collect();
    entries.sort_by(compare_search);
    entries
}

fn compare_search(a: &SearchEntry, b: &SearchEntry) -> Ordering {
    match (a.seconds, b.seconds) {
        (Some(x), Some(y)) => x.total_cmp(&y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => a.filename.cmp(&b.filename),
    }
}
