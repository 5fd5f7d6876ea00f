//! Flattening user records into CSV cells.

use std::collections::BTreeMap;
use std::io;

use serde::Serialize;
use serde_json::ser::{Formatter, Serializer};
use serde_json::Value;

use crate::fetch::UserRecord;

/// A user ready for tabular storage: field name to cell text.
pub type FlatRecord = BTreeMap<String, String>;

/// Converts one JSON value into cell text.
///
/// Objects and arrays become their JSON encoding: keys in the order the API
/// sent them, `", "` and `": "` separators, non-ASCII kept as-is. Strings are
/// copied verbatim, numbers and booleans use their JSON text and `null` is an
/// empty cell.
pub fn flatten_value(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::Array(_) | Value::Object(_) => encode_nested(value),
    }
}

/// Writes a space after each `,` and `:` between elements.
struct SpacedFormatter;

impl Formatter for SpacedFormatter {
    fn begin_array_value<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_key<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        writer.write_all(b": ")
    }
}

fn encode_nested(value: &Value) -> String {
    let mut buf = Vec::new();
    let mut serializer = Serializer::with_formatter(&mut buf, SpacedFormatter);
    if value.serialize(&mut serializer).is_err() {
        return value.to_string();
    }
    String::from_utf8(buf).unwrap_or_else(|_| value.to_string())
}

/// Flattens every field of a user record.
pub fn flatten_record(record: &UserRecord) -> FlatRecord {
    record
        .iter()
        .map(|(key, value)| (key.clone(), flatten_value(value)))
        .collect()
}
