//! # chatlens CLI
//!
//! Terminal dashboard for the chatlens library.

use std::path::Path;
use std::process;
use std::time::Instant;

use clap::Parser as ClapParser;

use chatlens::ChatlensError;
use chatlens::cli::Args;
use chatlens::core::apply_filters;
use chatlens::format::write_to_format;
use chatlens::logging;
use chatlens::parser::ChatParser;
use chatlens::report::AnalysisReport;
use chatlens::stats::{ActivityCount, Heatmap, resolve_scope, user_options};

const RULE: &str = "━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━";
const BAR_WIDTH: usize = 30;

fn main() {
    let args = <Args as ClapParser>::parse();
    logging::init(args.debug);

    if let Err(e) = run(&args) {
        eprintln!("❌ Error: {}", e);
        process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), ChatlensError> {
    let start = Instant::now();

    let parser = ChatParser::with_config(args.parser_config())?;
    let filter = args.filter_config()?;
    let config = args.stats_config()?;
    let export = args.export_target()?;

    let parsed = parser.parse_file(Path::new(&args.input))?;
    let parsed_count = parsed.len();
    let records = apply_filters(parsed, &filter);

    if args.list_users {
        for option in user_options(&records) {
            println!("{}", option);
        }
        return Ok(());
    }

    let scope = resolve_scope(&records, args.scope_name())?;
    let report = AnalysisReport::build(&records, &scope, &config);

    if let Some((path, format)) = &export {
        write_to_format(&records, path, *format)?;
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("🔍 chatlens v{}", env!("CARGO_PKG_VERSION"));
    println!("{}", RULE);
    println!("📂 Input:   {}", args.input);
    println!("👤 Scope:   {}", scope);
    if let Some(after) = &args.after {
        println!("📅 After:   {}", after);
    }
    if let Some(before) = &args.before {
        println!("📅 Before:  {}", before);
    }
    println!(
        "   Parsed {} records, {} in range ({:.2}s)",
        parsed_count,
        records.len(),
        start.elapsed().as_secs_f64()
    );

    print_dashboard(&report);

    if let Some((path, format)) = &export {
        println!();
        println!("💾 Exported {} records as {} to {}", records.len(), format, path);
    }

    Ok(())
}

fn print_dashboard(report: &AnalysisReport) {
    if report.is_empty() {
        println!();
        println!("⚠️  No messages for {}", report.scope);
        return;
    }

    let summary = &report.summary;
    println!();
    println!("📊 Top Statistics");
    println!("   Messages:  {}", summary.messages);
    println!("   Words:     {}", summary.words);
    println!("   Media:     {}", summary.media);
    println!("   Stickers:  {}", summary.stickers);

    println!();
    println!("🗓️  Monthly Timeline");
    let max = report.monthly_timeline.iter().map(|p| p.messages).max().unwrap_or(0);
    for point in &report.monthly_timeline {
        print_bar(&point.label, point.messages, max);
    }

    println!();
    println!("📆 Daily Timeline");
    let max = report.daily_timeline.iter().map(|p| p.messages).max().unwrap_or(0);
    for point in &report.daily_timeline {
        print_bar(&point.date.to_string(), point.messages, max);
    }

    println!();
    println!("📅 Most Busy Day");
    print_activity(&report.week_activity);

    println!();
    println!("🌙 Most Busy Month");
    print_activity(&report.month_activity);

    println!();
    println!("🔥 Weekly Activity Map");
    print_heatmap(&report.heatmap);

    if let Some(busy) = &report.busy_users {
        println!();
        println!("🏆 Most Busy Users");
        for user in &busy.top {
            println!("   {:<20} {}", user.name, user.messages);
        }
        println!("   ---");
        for share in &busy.shares {
            println!("   {:<20} {:.2}%", share.name, share.percent);
        }
    }

    println!();
    println!("💬 Most Common Words");
    for word in &report.most_common_words {
        println!("   {:<20} {}", word.word, word.count);
    }

    println!();
    println!("😀 Emoji Analysis");
    if report.common_emojis.is_empty() {
        println!("   (none)");
    }
    for emoji in &report.common_emojis {
        println!("   {}  {}", emoji.emoji, emoji.count);
    }
}

fn print_activity(counts: &[ActivityCount]) {
    let max = counts.first().map(|c| c.messages).unwrap_or(0);
    for count in counts {
        print_bar(&count.label, count.messages, max);
    }
}

fn print_bar(label: &str, value: usize, max: usize) {
    let width = if max == 0 { 0 } else { value * BAR_WIDTH / max };
    println!("   {:<16} {:>6} {}", label, value, "█".repeat(width));
}

fn print_heatmap(heatmap: &Heatmap) {
    if heatmap.is_empty() {
        println!("   (no dated messages)");
        return;
    }

    let header: Vec<String> = heatmap
        .periods
        .iter()
        .map(|p| format!("{:>6}", p.to_string()))
        .collect();
    println!("   {:<10}{}", "", header.join(""));

    for (day, row) in heatmap.days.iter().zip(&heatmap.counts) {
        let cells: String = row.iter().map(|c| format!("{:>6}", c)).collect();
        println!("   {:<10}{}", day, cells);
    }
}
