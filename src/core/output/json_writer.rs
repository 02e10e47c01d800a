//! JSON output writer.

use std::fs::File;
use std::io::Write;

use crate::error::Result;
use crate::record::MessageRecord;

/// Writes records to a JSON file as a pretty-printed array.
///
/// # Format
/// ```json
/// [
///   {
///     "timestamp": "2023-02-01T09:15:30",
///     "sender": "Alice",
///     "body": "Good morning!",
///     "only_date": "2023-02-01",
///     ...
///     "period": "9-10"
///   }
/// ]
/// ```
pub fn write_json(records: &[MessageRecord], output_path: &str) -> Result<()> {
    let json = to_json(records)?;
    let mut file = File::create(output_path)?;
    file.write_all(json.as_bytes())?;
    Ok(())
}

/// Converts records to a JSON array string.
pub fn to_json(records: &[MessageRecord]) -> Result<String> {
    Ok(serde_json::to_string_pretty(records)?)
}
