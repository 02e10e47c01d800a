//! CSV output writer.

use std::fs::File;
use std::io::Write;

use crate::error::Result;
use crate::record::MessageRecord;

const HEADER: [&str; 12] = [
    "Date",
    "Sender",
    "Message",
    "only_date",
    "year",
    "month_num",
    "month",
    "day",
    "day_name",
    "hour",
    "minute",
    "period",
];

/// Writes records to CSV with semicolon delimiter.
///
/// # Format
/// - Delimiter: `;`
/// - Columns: `Date`, `Sender`, `Message`, then the calendar fields
///   `only_date` .. `period`
/// - Missing values are written as empty fields
/// - Encoding: UTF-8
pub fn write_csv(records: &[MessageRecord], output_path: &str) -> Result<()> {
    let file = File::create(output_path)?;
    write_records(records, file)
}

/// Converts records to a CSV string.
///
/// Same format as [`write_csv`].
pub fn to_csv(records: &[MessageRecord]) -> Result<String> {
    let mut buffer = Vec::new();
    write_records(records, &mut buffer)?;
    Ok(String::from_utf8(buffer)?)
}

fn write_records<W: Write>(records: &[MessageRecord], sink: W) -> Result<()> {
    let mut writer = csv::WriterBuilder::new().delimiter(b';').from_writer(sink);

    writer.write_record(HEADER)?;
    for record in records {
        writer.write_record(build_row(record))?;
    }

    writer.flush()?;
    Ok(())
}

fn build_row(record: &MessageRecord) -> Vec<String> {
    let mut row = vec![
        record
            .timestamp()
            .map(|ts| ts.format("%Y-%m-%d %H:%M:%S").to_string())
            .unwrap_or_default(),
        record.sender().unwrap_or_default().to_string(),
        record.body().unwrap_or_default().to_string(),
    ];

    match record.time() {
        Some(t) => row.extend([
            t.date.to_string(),
            t.year.to_string(),
            t.month_num.to_string(),
            t.month.clone(),
            t.day.to_string(),
            t.day_name.clone(),
            t.hour.to_string(),
            t.minute.to_string(),
            t.period.to_string(),
        ]),
        None => row.resize(HEADER.len(), String::new()),
    }

    row
}
