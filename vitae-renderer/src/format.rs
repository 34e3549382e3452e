//! Pure string-construction helpers shared by the section renderers.
//!
//! Two families live here: sentence assembly (periods, joining, year
//! ranges, amounts) and Typst markup construction (escaping, emphasis,
//! links). Entries are Typst markup, so any data-derived text must pass
//! through [`escape`] before it is concatenated into an entry.

use vitae_core::types::YearSpan;

// ---------------------------------------------------------------------------
// Sentence assembly
// ---------------------------------------------------------------------------

/// True if `s` ends with terminal punctuation. En-dash and hyphen count,
/// so open ranges like `2015–` and dangling title fragments stay untouched.
pub fn ends_terminal(s: &str) -> bool {
    matches!(s.chars().last(), Some('.' | '?' | '!' | '–' | '-'))
}

/// Append `.` unless `s` already ends in terminal punctuation. Idempotent.
pub fn with_period(s: &str) -> String {
    if s.is_empty() || ends_terminal(s) {
        s.to_owned()
    } else {
        format!("{s}.")
    }
}

/// `"."` or `""` — for punctuation placed *after* inline markup (a
/// hyperlink) rather than concatenated into the linked text itself.
pub fn period_if_needed(s: &str) -> &'static str {
    if s.is_empty() || ends_terminal(s) {
        ""
    } else {
        "."
    }
}

/// Drop empty parts, terminate each surviving part, join with spaces.
pub fn join_sentences<S: AsRef<str>>(parts: &[S]) -> String {
    parts
        .iter()
        .map(|p| p.as_ref().trim())
        .filter(|p| !p.is_empty())
        .map(with_period)
        .collect::<Vec<_>>()
        .join(" ")
}

/// `"2015–2020"`, or `"2015–"` for an ongoing span.
pub fn year_range(span: &YearSpan) -> String {
    match span.end {
        Some(end) => format!("{}–{}", span.start, end),
        None => format!("{}–", span.start),
    }
}

/// Thousands grouping with a single comma level; the remainder is
/// zero-padded to three digits. Values are assumed below one million.
pub fn amount(value: u64) -> String {
    if value < 1_000 {
        value.to_string()
    } else {
        format!("{},{:03}", value / 1_000, value % 1_000)
    }
}

// ---------------------------------------------------------------------------
// Typst markup
// ---------------------------------------------------------------------------

/// Escape characters Typst would otherwise read as markup or math.
pub fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '\\' | '#' | '$' | '*' | '_' | '@' | '<' | '>' | '[' | ']' => {
                out.push('\\');
                out.push(c);
            }
            _ => out.push(c),
        }
    }
    out
}

/// Emphasized (italic) text.
pub fn emph(s: &str) -> String {
    format!("_{}_", escape(s))
}

/// A hyperlink with escaped display text.
pub fn link(url: &str, text: &str) -> String {
    format!("#link(\"{}\")[{}]", url.replace('"', "\\\""), escape(text))
}

/// `"a"`, `"a and b"`, `"a, b, and c"`.
pub fn oxford_join(items: &[String], conjunction: &str) -> String {
    match items.len() {
        0 => String::new(),
        1 => items[0].clone(),
        2 => format!("{} {conjunction} {}", items[0], items[1]),
        n => format!(
            "{}, {conjunction} {}",
            items[..n - 1].join(", "),
            items[n - 1]
        ),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("Title", "Title.")]
    #[case("Title.", "Title.")]
    #[case("Forthcoming?", "Forthcoming?")]
    #[case("Really!", "Really!")]
    #[case("2015–", "2015–")]
    #[case("self-", "self-")]
    #[case("", "")]
    fn with_period_cases(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(with_period(input), expected);
    }

    #[test]
    fn with_period_is_idempotent() {
        for s in ["", "x", "x.", "x?", "2015–", "a b c"] {
            assert_eq!(with_period(&with_period(s)), with_period(s));
        }
    }

    #[test]
    fn period_if_needed_matches_with_period() {
        assert_eq!(period_if_needed("Title"), ".");
        assert_eq!(period_if_needed("Title."), "");
        assert_eq!(period_if_needed(""), "");
    }

    #[test]
    fn join_sentences_drops_empties() {
        assert_eq!(join_sentences::<&str>(&[]), "");
        assert_eq!(join_sentences(&["", "  ", ""]), "");
        assert_eq!(
            join_sentences(&["Professor", "X University", "2015–"]),
            "Professor. X University. 2015–."
        );
    }

    #[test]
    fn join_sentences_never_doubles_periods() {
        let joined = join_sentences(&["One.", "Two", "Three."]);
        assert!(!joined.contains(".."), "doubled period in: {joined}");
    }

    #[test]
    fn year_range_renders_en_dash() {
        assert_eq!(year_range(&YearSpan::new(2015, Some(2020))), "2015–2020");
        assert_eq!(year_range(&YearSpan::new(2015, None)), "2015–");
    }

    #[rstest]
    #[case(50_000, "50,000")]
    #[case(250_000, "250,000")]
    #[case(2_050, "2,050")]
    #[case(1_000, "1,000")]
    #[case(999, "999")]
    #[case(0, "0")]
    fn amount_cases(#[case] value: u64, #[case] expected: &str) {
        assert_eq!(amount(value), expected);
    }

    #[test]
    fn escape_neutralizes_typst_markup() {
        assert_eq!(escape("a $5 fee"), "a \\$5 fee");
        assert_eq!(escape("under_score #tag"), "under\\_score \\#tag");
        assert_eq!(escape("plain text"), "plain text");
    }

    #[test]
    fn emph_wraps_escaped_text() {
        assert_eq!(emph("Journal of X"), "_Journal of X_");
        assert_eq!(emph("A_B"), "_A\\_B_");
    }

    #[test]
    fn link_quotes_url_and_escapes_text() {
        assert_eq!(
            link("https://doi.org/10.1/x", "A Title"),
            "#link(\"https://doi.org/10.1/x\")[A Title]"
        );
    }

    #[rstest]
    #[case(&[], "")]
    #[case(&["a"], "a")]
    #[case(&["a", "b"], "a and b")]
    #[case(&["a", "b", "c"], "a, b, and c")]
    fn oxford_join_cases(#[case] items: &[&str], #[case] expected: &str) {
        let owned: Vec<String> = items.iter().map(|s| s.to_string()).collect();
        assert_eq!(oxford_join(&owned, "and"), expected);
    }
}
