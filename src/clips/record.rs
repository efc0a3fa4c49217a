use crate::clips::error::ClipError;
use csv::{ByteRecord, StringRecord};
use serde::{
    de::{Error, Visitor},
    Deserialize, Deserializer,
};
use std::fmt;

/// Number of positional columns a clip row must carry.
pub const CLIP_FIELDS: usize = 6;

/// One clip, built from one CSV row.
/// Columns are positional: id, title, privacy, total_plays, total_comments, total_likes.
/// Anything past the sixth column is ignored.
#[derive(Deserialize, Debug, Clone, Eq, PartialEq)]
pub struct ClipRecord {
    pub id: String,
    pub title: String,
    pub privacy: String,
    #[serde(deserialize_with = "deserialize_loose_count")]
    pub total_plays: u64,
    // not checked by any rule
    #[serde(deserialize_with = "deserialize_loose_count")]
    pub total_comments: u64,
    #[serde(deserialize_with = "deserialize_loose_count")]
    pub total_likes: u64,
}

impl ClipRecord {
    /// Builds a record from a raw row.
    /// Fails with `MissingFields` if the row is shorter than six columns.
    pub fn from_row(row: &StringRecord) -> Result<Self, ClipError> {
        let line = row.position().map_or(0, |pos| pos.line());
        if row.len() < CLIP_FIELDS {
            return Err(ClipError::MissingFields {
                line,
                found: row.len(),
                expected: CLIP_FIELDS,
            });
        }
        // no headers: the struct is filled positionally
        row.deserialize(None)
            .map_err(|source| ClipError::Malformed { line, source })
    }

    /// Builds a record from undecoded bytes.
    /// Invalid UTF-8 is replaced with U+FFFD rather than failing the row.
    pub fn from_bytes(row: ByteRecord) -> Result<Self, ClipError> {
        let position = row.position().cloned();
        let mut row = StringRecord::from_byte_record_lossy(row);
        // the lossy path does not carry the position over
        row.set_position(position);
        Self::from_row(&row)
    }
}

/// Loose integer coercion for count columns.
/// Leading whitespace is skipped and the longest run of leading digits is taken;
/// text with no leading digits reads as 0, as do negative values.
/// Values too large for a u64 saturate.
pub fn loose_count(value: &str) -> u64 {
    let value = value.trim_start();
    let digits = match value.as_bytes().first() {
        Some(b'-') => return 0,
        Some(b'+') => &value[1..],
        _ => value,
    };
    digits
        .bytes()
        .take_while(u8::is_ascii_digit)
        .fold(0u64, |acc, d| {
            acc.saturating_mul(10).saturating_add(u64::from(d - b'0'))
        })
}

pub fn deserialize_loose_count<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    deserializer.deserialize_str(LooseCountVisitor)
}

struct LooseCountVisitor;
impl<'de> Visitor<'de> for LooseCountVisitor {
    type Value = u64;
    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a count, given as text")
    }
    fn visit_str<E>(self, value: &str) -> Result<u64, E>
    where
        E: Error,
    {
        Ok(loose_count(value))
    }
}
