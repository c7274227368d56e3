use scope::models::JournalEntry;
use scope::text::normalize;

#[test]
fn test_normalize_strips_url_and_punctuation() {
    assert_eq!(normalize("Visit http://x.co NOW!!"), "visit now");
}

#[test]
fn test_normalize_https_and_other_schemes() {
    assert_eq!(
        normalize("see https://example.com/a?b=1 and ftp://files.net/x ok"),
        "see and ok"
    );
}

#[test]
fn test_normalize_keeps_word_glued_to_scheme() {
    assert_eq!(normalize("visithttp://x.co today"), "visit today");
    assert_eq!(normalize("seeHTTPS://x.co/a now"), "see now");
    // unknown schemes go away whole
    assert_eq!(normalize("open myapp://settings please"), "open please");
}

#[test]
fn test_normalize_collapses_whitespace_and_digits() {
    assert_eq!(normalize("  I  slept 8 hours\n\tlast   night.  "), "i slept hours last night");
}

#[test]
fn test_normalize_drops_non_ascii_letters() {
    assert_eq!(normalize("Café déjà vu 🙂"), "caf dj vu");
}

#[test]
fn test_normalize_empty_input() {
    assert_eq!(normalize(""), "");
    assert_eq!(normalize("   "), "");
    assert_eq!(normalize("1234 !!! ..."), "");
}

#[test]
fn test_normalize_is_idempotent() {
    let samples = [
        "Visit http://x.co NOW!!",
        "They are WATCHING me... through the TV",
        "  mixed\tCASE  and   https://a.b/c  urls ",
        "http//not-a-url and x://y",
        "visithttp://x.co and readftp://f.net",
        "",
    ];

    for s in samples {
        let once = normalize(s);
        assert_eq!(normalize(&once), once, "not idempotent for {s:?}");
    }
}

#[test]
fn test_journal_entry_keeps_trimmed_raw_text() {
    let e = JournalEntry::new("  Today was FINE!  ");
    assert_eq!(e.raw_text(), "Today was FINE!");
    assert_eq!(e.normalized_text(), "today was fine");
}
