//! JSON Lines (JSONL) output writer.

use std::fs::File;
use std::io::{BufWriter, Write};

use crate::error::Result;
use crate::record::MessageRecord;

/// Writes records to JSONL, one compact JSON object per line.
///
/// ```jsonl
/// {"timestamp":"2023-02-01T09:15:30","sender":"Alice","body":"Hi",...}
/// {"timestamp":null,"sender":"Bob","body":"Hey"}
/// ```
pub fn write_jsonl(records: &[MessageRecord], output_path: &str) -> Result<()> {
    let file = File::create(output_path)?;
    let mut writer = BufWriter::new(file);
    write_lines(records, &mut writer)?;
    writer.flush()?;
    Ok(())
}

/// Converts records to a JSONL string.
pub fn to_jsonl(records: &[MessageRecord]) -> Result<String> {
    let mut buffer = Vec::new();
    write_lines(records, &mut buffer)?;
    Ok(String::from_utf8(buffer)?)
}

fn write_lines<W: Write>(records: &[MessageRecord], writer: &mut W) -> Result<()> {
    for record in records {
        let line = serde_json::to_string(record)?;
        writeln!(writer, "{line}")?;
    }
    Ok(())
}
