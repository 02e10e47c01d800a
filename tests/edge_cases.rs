//! Edge case tests for chatlens
//!
//! Boundary conditions of the line format and of the statistics that regular
//! unit and integration tests do not reach.

use chatlens::config::{ParserConfig, StatsConfig};
use chatlens::parse;
use chatlens::parser::{ChatParser, decode_lossy};
use chatlens::record::GROUP_NOTIFICATION;
use chatlens::stats::{Scope, common_emojis, most_common_words, summary, user_options};

// =========================================================================
// Line format
// =========================================================================

#[test]
fn test_meridiem_variants() {
    let text = "\
[01/02/23, 9:15:30AM] A: compact
[01/02/23, 9:15:30\u{202F}AM] A: narrow no-break space
[01/02/23, 9:15:30am] A: lowercase
[01/02/23, 9:15:30pM] A: mixed case";
    let records = parse(text);
    assert_eq!(records.len(), 4);
    assert!(records.iter().all(|r| r.timestamp().is_some()));
    assert_eq!(records[3].time().unwrap().hour, 21);
}

#[test]
fn test_plain_space_before_meridiem_keeps_undated_record() {
    let records = parse(
        "[01/02/23, 9:15:30 AM] Alice: hi\n\
         [01/02/23, 9:15:30 pm] Bob: hey",
    );
    assert_eq!(records.len(), 2);
    assert!(records.iter().all(|r| r.timestamp().is_none() && r.time().is_none()));
    assert_eq!(records[0].sender(), Some("Alice"));
    assert_eq!(records[1].body(), Some("hey"));
}

#[test]
fn test_two_digit_year_pivot() {
    let records = parse(
        "[01/02/69, 9:15:30AM] A: sixty-nine\n\
         [01/02/68, 9:15:30AM] A: sixty-eight",
    );
    let first = records[0].time().unwrap();
    assert_eq!(first.year, 1969);
    assert_eq!(first.day_name, "Saturday");
    assert_eq!(records[1].time().unwrap().year, 2068);
}

#[test]
fn test_two_digit_hours() {
    let records = parse(
        "[01/02/23, 10:00:00AM] A: ten\n\
         [01/02/23, 12:00:00PM] A: noon\n\
         [01/02/23, 12:00:00AM] A: midnight",
    );
    let hours: Vec<u32> = records.iter().map(|r| r.time().unwrap().hour).collect();
    assert_eq!(hours, [10, 12, 0]);
}

#[test]
fn test_structurally_invalid_headers_dropped() {
    let text = "\
[1/02/23, 9:15:30AM] A: one digit day
[01/2/23, 9:15:30AM] A: one digit month
[01/02/2023, 9:15:30AM] A: four digit year
[01/02/23 9:15:30AM] A: missing comma
[01/02/23, 9:15AM] A: missing seconds
[01/02/23, 9:15:30] A: missing meridiem
[01/02/23, 9:15:30AM]A: missing space
 01/02/23, 9:15:30AM] A: missing bracket";
    assert!(parse(text).is_empty());
}

#[test]
fn test_out_of_range_values_keep_record() {
    let text = "\
[00/02/23, 9:15:30AM] A: day zero
[29/02/23, 9:15:30AM] A: not a leap year
[01/02/23, 13:15:30PM] A: hour thirteen
[01/02/23, 9:61:30AM] A: minute sixty-one";
    let records = parse(text);
    assert_eq!(records.len(), 4);
    assert!(records.iter().all(|r| r.timestamp().is_none() && r.time().is_none()));
    assert!(records.iter().all(|r| r.sender() == Some("A")));
}

#[test]
fn test_leap_day() {
    let records = parse("[29/02/24, 9:15:30AM] A: leap");
    assert_eq!(records[0].time().unwrap().day_name, "Thursday");
}

#[test]
fn test_leading_whitespace_is_trimmed() {
    let records = parse("   [01/02/23, 9:15:30AM] A: indented   ");
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].body(), Some("indented"));
}

#[test]
fn test_sender_split_at_first_separator() {
    let records = parse("[01/02/23, 9:15:30AM] Dr: Who: said: this");
    assert_eq!(records[0].sender(), Some("Dr"));
    assert_eq!(records[0].body(), Some("Who: said: this"));
}

#[test]
fn test_url_colon_is_not_a_separator() {
    let records = parse("[01/02/23, 9:15:30AM] https://example.com");
    assert_eq!(records.len(), 1);
    assert!(records[0].sender().is_none());
}

#[test]
fn test_empty_body_after_trim() {
    let records = parse("[01/02/23, 9:15:30AM] Alice: ");
    assert_eq!(records.len(), 1);
    assert!(records[0].sender().is_none());
}

#[test]
fn test_unicode_senders() {
    let records = parse(
        "[01/02/23, 9:15:30AM] Иван: Привет\n\
         [01/02/23, 9:15:31AM] 村上: こんにちは\n\
         [01/02/23, 9:15:32AM] +91 98765 43210: hi",
    );
    assert_eq!(user_options(&records), ["Group", "+91 98765 43210", "Иван", "村上"]);
}

#[test]
fn test_decode_lossy_keeps_valid_text() {
    let mut bytes = b"[01/02/23, 9:15:30AM] A: ".to_vec();
    bytes.extend_from_slice(&[0xC3, 0x28]);
    bytes.extend_from_slice("ok 🎉".as_bytes());

    let text = decode_lossy(&bytes);
    let records = parse(&text);
    assert_eq!(records[0].body(), Some("(ok 🎉"));
}

// =========================================================================
// Group pattern
// =========================================================================

#[test]
fn test_group_pattern_regex() {
    let config = ParserConfig::new().with_group_pattern(r"^(Team|Crew) \d+$");
    let parser = ChatParser::with_config(config).unwrap();
    let records = parser.parse_str(
        "[01/02/23, 9:15:30AM] Team 1: joined\n\
         [01/02/23, 9:15:31AM] Crew 22: left\n\
         [01/02/23, 9:15:32AM] Team Alpha: hi",
    );

    assert_eq!(records[0].sender(), Some(GROUP_NOTIFICATION));
    assert_eq!(records[1].sender(), Some(GROUP_NOTIFICATION));
    assert_eq!(records[2].sender(), Some("Team Alpha"));
}

#[test]
fn test_group_name_with_regex_metacharacters() {
    let parser =
        ChatParser::with_config(ParserConfig::new().with_group_name("C++ (devs)")).unwrap();
    let records = parser.parse_str(
        "[01/02/23, 9:15:30AM] C++ (devs): Bob joined\n\
         [01/02/23, 9:15:31AM] C (devs): not the group",
    );

    assert!(records[0].is_group_notification());
    assert!(!records[1].is_group_notification());
}

#[test]
fn test_parser_reuse_is_stateless() {
    let parser = ChatParser::new();
    let text = "[01/02/23, 9:15:30AM] A: x";
    assert_eq!(parser.parse_str(text), parser.parse_str(text));
    assert_eq!(parser.parse_str(text).len(), 1);
}

// =========================================================================
// Statistics
// =========================================================================

#[test]
fn test_scope_is_case_sensitive() {
    let records = parse("[01/02/23, 9:15:30AM] Alice: hi");
    let config = StatsConfig::default();
    assert_eq!(summary(&records, &Scope::user("alice"), &config).messages, 0);
    assert_eq!(summary(&records, &Scope::user("Alice"), &config).messages, 1);
}

#[test]
fn test_zero_top_words() {
    let records = parse("[01/02/23, 9:15:30AM] Alice: plenty of words here");
    let config = StatsConfig::new().with_top_words(0);
    assert!(most_common_words(&records, &Scope::Group, &config).is_empty());
}

#[test]
fn test_custom_placeholders() {
    let records = parse(
        "[01/02/23, 9:15:30AM] A: <Media omitted>\n\
         [01/02/23, 9:15:31AM] A: Sticker weggelassen",
    );
    let config = StatsConfig::new()
        .with_media_placeholders(["<Media omitted>"])
        .with_sticker_placeholder("Sticker weggelassen");

    let totals = summary(&records, &Scope::Group, &config);
    assert_eq!(totals.media, 1);
    assert_eq!(totals.stickers, 1);
    assert!(most_common_words(&records, &Scope::Group, &config).is_empty());
}

#[test]
fn test_emoji_sequences_count_components() {
    let records = parse("[01/02/23, 9:15:30AM] A: 👍🏽 👨‍👩‍👧");
    let emojis = common_emojis(&records, &Scope::Group);
    let total: usize = emojis.iter().map(|e| e.count).sum();

    assert!(emojis.iter().any(|e| e.emoji == "👍"));
    assert!(emojis.iter().all(|e| e.emoji.chars().count() == 1));
    assert!(total >= 4);
}
