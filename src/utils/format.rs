//! Presentational formatting helpers

const KIB: u64 = 1024;
const MIB: u64 = KIB * 1024;
const GIB: u64 = MIB * 1024;

/// Renders a byte count the way the format table shows it. A missing or
/// zero size is shown as "Unknown" rather than "0 B".
pub fn format_file_size(bytes: Option<u64>) -> String {
    match bytes {
        None | Some(0) => "Unknown".to_string(),
        Some(b) if b < KIB => format!("{b} B"),
        Some(b) if b < MIB => format!("{:.1} KB", b as f64 / KIB as f64),
        Some(b) if b < GIB => format!("{:.1} MB", b as f64 / MIB as f64),
        Some(b) => format!("{:.1} GB", b as f64 / GIB as f64),
    }
}

/// Reformats an 8-digit `YYYYMMDD` upload date as `YYYY-MM-DD`. Anything
/// else (absent, empty, wrong length) renders as "Unknown".
pub fn format_date(date: Option<&str>) -> String {
    match date {
        Some(d) if d.len() == 8 && d.bytes().all(|b| b.is_ascii_digit()) => {
            format!("{}-{}-{}", &d[0..4], &d[4..6], &d[6..8])
        }
        _ => "Unknown".to_string(),
    }
}

/// Groups an unsigned integer with a thousands separator.
pub fn format_number(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Strips a video title down to characters safe for a suggested save name:
/// letters, digits, underscore, whitespace, `.` and `-`.
pub fn sanitize_title(title: &str) -> String {
    title
        .chars()
        .filter(|c| c.is_alphanumeric() || *c == '_' || c.is_whitespace() || *c == '.' || *c == '-')
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn file_size_buckets() {
        assert_eq!(format_file_size(None), "Unknown");
        assert_eq!(format_file_size(Some(0)), "Unknown");
        assert_eq!(format_file_size(Some(500)), "500 B");
        assert_eq!(format_file_size(Some(2048)), "2.0 KB");
        assert_eq!(format_file_size(Some(5_242_880)), "5.0 MB");
        assert_eq!(format_file_size(Some(3_221_225_472)), "3.0 GB");
    }

    #[test]
    fn file_size_edges() {
        assert_eq!(format_file_size(Some(1023)), "1023 B");
        assert_eq!(format_file_size(Some(1024)), "1.0 KB");
        assert_eq!(format_file_size(Some(1_572_864)), "1.5 MB");
    }

    #[test]
    fn date_reformatting() {
        assert_eq!(format_date(Some("20230115")), "2023-01-15");
        assert_eq!(format_date(Some("2023")), "Unknown");
        assert_eq!(format_date(Some("")), "Unknown");
        assert_eq!(format_date(None), "Unknown");
        // eight bytes but not digits
        assert_eq!(format_date(Some("20ab0115")), "Unknown");
    }

    #[test]
    fn number_grouping() {
        assert_eq!(format_number(0), "0");
        assert_eq!(format_number(42), "42");
        assert_eq!(format_number(1_234), "1,234");
        assert_eq!(format_number(1_234_567), "1,234,567");
    }

    #[test]
    fn title_sanitizing() {
        assert_eq!(sanitize_title("My Video!"), "My Video");
        assert_eq!(sanitize_title("a/b\\c:d"), "abcd");
        assert_eq!(sanitize_title("clip_01.final - v2"), "clip_01.final - v2");
    }

    proptest! {
        #[test]
        fn grouping_preserves_digits(n in any::<u64>()) {
            let grouped = format_number(n);
            let stripped: String = grouped.chars().filter(|c| *c != ',').collect();
            prop_assert_eq!(stripped, n.to_string());
        }

        #[test]
        fn groups_are_at_most_three_digits(n in any::<u64>()) {
            let grouped = format_number(n);
            for (i, chunk) in grouped.split(',').enumerate() {
                prop_assert!(!chunk.is_empty() && chunk.len() <= 3);
                if i > 0 {
                    prop_assert_eq!(chunk.len(), 3);
                }
            }
        }
    }
}
