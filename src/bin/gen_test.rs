//! Noisy WhatsApp export generator for benchmarks and manual testing.
//!
//! Usage: cargo run --features gen-test --bin gen_test -- [messages] [output] [group]
//! Example: cargo run --features gen-test --bin gen_test -- 100000 heavy_chat.txt "Team Alfaaz"
//!
//! Besides ordinary messages the output contains continuation lines,
//! impossible dates, media and sticker placeholders, separator-less system
//! lines and group notifications sent under the group name.

use std::env;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::time::Instant;

use chrono::{Duration, NaiveDate, NaiveDateTime};
use rand::Rng;
use rand::seq::SliceRandom;

const SENDERS: &[&str] = &[
    "Alice",
    "Bob",
    "Carol",
    "Иван",
    "村上",
    "محمد",
    "🔥FireUser🔥",
    "+91 98765 43210",
];

const WORDS: &[&str] = &[
    "hello", "kal", "milte", "hai", "party", "tonight", "haha", "ok", "bhai", "the", "meeting",
    "link", "sent", "where", "are", "you", "yes", "no", "chai", "done",
];

const EMOJIS: &[&str] = &["😂", "🔥", "👍", "❤️", "🎉", "🙏", "😭", "🤣", "👨‍👩‍👧‍👦", "🇮🇳"];

const PLACEHOLDERS: &[&str] = &[
    "\u{200E}image omitted",
    "\u{200E}video omitted",
    "\u{200E}sticker omitted",
    "\u{200E}audio omitted",
];

fn main() -> io::Result<()> {
    let args: Vec<String> = env::args().collect();

    let count: usize = args.get(1).and_then(|s| s.parse().ok()).unwrap_or(100_000);
    let output = args.get(2).map(String::as_str).unwrap_or("heavy_chat.txt");
    let group = args.get(3).map(String::as_str).unwrap_or("Team Alfaaz");

    println!("🧪 WhatsApp Export Generator");
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("   Messages: {}", count);
    println!("   Output:   {}", output);
    println!("   Group:    {}", group);
    println!();

    let file = File::create(output)?;
    let mut writer = BufWriter::with_capacity(1024 * 1024, file);
    let mut rng = rand::thread_rng();

    let mut ts = NaiveDate::from_ymd_opt(2022, 1, 1)
        .and_then(|d| d.and_hms_opt(8, 0, 0))
        .unwrap_or_default();
    let start = Instant::now();
    let mut bytes_written = 0usize;

    for i in 0..count {
        ts += Duration::seconds(rng.gen_range(5..5_400));
        let line = generate_line(&mut rng, ts, group);
        bytes_written += line.len() + 1;
        writeln!(writer, "{}", line)?;

        if rng.gen_bool(0.05) {
            let continuation = random_text(&mut rng);
            bytes_written += continuation.len() + 1;
            writeln!(writer, "{}", continuation)?;
        }

        if (i + 1) % 10_000 == 0 {
            let elapsed = start.elapsed().as_secs_f64();
            eprint!(
                "\r   Generated {}/{} ({:.1} MB, {:.0} msg/s)",
                i + 1,
                count,
                bytes_written as f64 / 1_000_000.0,
                (i + 1) as f64 / elapsed
            );
        }
    }

    writer.flush()?;
    eprintln!();
    println!();
    println!(
        "✅ Done! {:.1} MB in {:.2}s",
        bytes_written as f64 / 1_000_000.0,
        start.elapsed().as_secs_f64()
    );

    Ok(())
}

fn generate_line(rng: &mut impl Rng, ts: NaiveDateTime, group: &str) -> String {
    let header = if rng.gen_bool(0.01) {
        // day 32 never parses
        format!("32/{}", ts.format("%m/%y, %-I:%M:%S\u{202F}%p"))
    } else {
        ts.format("%d/%m/%y, %-I:%M:%S\u{202F}%p").to_string()
    };

    let roll: f64 = rng.r#gen();
    let rest = if roll < 0.02 {
        format!("{} changed the group description", group)
    } else if roll < 0.04 {
        let who = SENDERS.choose(rng).copied().unwrap_or("Alice");
        format!("{}: {} added {}", group, who, random_name(rng))
    } else if roll < 0.12 {
        let placeholder = PLACEHOLDERS.choose(rng).copied().unwrap_or_default();
        format!("{}: {}", random_sender(rng), placeholder)
    } else {
        format!("{}: {}", random_sender(rng), random_text(rng))
    };

    format!("[{}] {}", header, rest)
}

fn random_sender(rng: &mut impl Rng) -> &'static str {
    SENDERS.choose(rng).copied().unwrap_or("Alice")
}

fn random_name(rng: &mut impl Rng) -> String {
    format!("Guest {}", rng.gen_range(1..500))
}

fn random_text(rng: &mut impl Rng) -> String {
    let len = rng.gen_range(1..15);
    let mut parts: Vec<&str> = Vec::with_capacity(len);
    for _ in 0..len {
        let pick = if rng.gen_bool(0.1) { EMOJIS } else { WORDS };
        parts.push(pick.choose(rng).copied().unwrap_or("ok"));
    }
    if rng.gen_bool(0.05) {
        parts.push("note: colons inside");
    }
    parts.join(" ")
}
