use regex::Regex;
use std::sync::OnceLock;

pub mod events;
pub mod resources;
pub mod systems;
pub mod ui;

/// Three-letter department code, optionally slash-delimited. The empty branch
/// is deliberate: an empty input is still routed to the backend unmodified.
const ACTION_QUERY_PATTERN: &str = r"^(/?[A-Za-z]{3}/?|)$";

pub const CLEAR_SUCCESS_TEXT: &str = "Done";
pub const CLEAR_FAILURE_TEXT: &str = "Failed to clear query counts";

fn action_query_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(ACTION_QUERY_PATTERN).expect("action query pattern is valid"))
}

/// Which backend path a submitted input goes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryKind {
    Search,
    Count,
    Clear,
}

/// One search result line: course identifier plus free-text title.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CourseRow {
    pub id: String,
    pub title: String,
}

/// One count line: label plus value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountRow {
    pub label: String,
    pub value: String,
}

/// Trims whitespace and strips at most one leading slash.
pub fn clean_query_text(query_text: &str) -> String {
    let cleaned = query_text.trim();
    cleaned.strip_prefix('/').unwrap_or(cleaned).to_string()
}

pub fn is_valid_search_query(query_text: &str) -> bool {
    query_text != "/" && !query_text.is_empty() && !query_text.contains('.')
}

pub fn is_valid_action_query(query_text: &str) -> bool {
    action_query_regex().is_match(query_text)
}

/// The backend answers a search or count with nothing to show.
pub fn is_empty_response(body: &str) -> bool {
    body.is_empty() || body == "\n"
}

/// A clear succeeded only when the body is exactly one newline.
pub fn is_clear_success(body: &str) -> bool {
    body == "\n"
}

// The backend newline-terminates its output, so the fragment after the last
// newline is discarded rather than treated as a row.
fn terminated_lines(body: &str) -> Vec<&str> {
    let mut lines: Vec<&str> = body.split('\n').collect();
    lines.pop();
    lines.into_iter().filter(|line| !line.is_empty()).collect()
}

/// First two whitespace tokens form the course id, the rest is the title.
pub fn parse_course_rows(body: &str) -> Vec<CourseRow> {
    terminated_lines(body)
        .into_iter()
        .map(|line| {
            let tokens: Vec<&str> = line.split_whitespace().collect();
            CourseRow {
                id: tokens.iter().take(2).copied().collect::<Vec<_>>().join(" "),
                title: tokens.iter().skip(2).copied().collect::<Vec<_>>().join(" "),
            }
        })
        .collect()
}

pub fn parse_count_rows(body: &str) -> Vec<CountRow> {
    terminated_lines(body)
        .into_iter()
        .map(|line| {
            let mut tokens = line.split_whitespace();
            CountRow {
                label: tokens.next().unwrap_or("").to_string(),
                value: tokens.next().unwrap_or("").to_string(),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clean_query_text_trims_and_strips_one_slash() {
        assert_eq!(clean_query_text(" /abc "), "abc");
        assert_eq!(clean_query_text("xyz"), "xyz");
        assert_eq!(clean_query_text("//abc"), "/abc");
        assert_eq!(clean_query_text("  "), "");
    }

    #[test]
    fn search_query_rejects_empty_slash_and_dotted() {
        assert!(is_valid_search_query("intro to proofs"));
        assert!(is_valid_search_query("cs"));
        assert!(!is_valid_search_query(""));
        assert!(!is_valid_search_query("/"));
        assert!(!is_valid_search_query("../etc"));
        assert!(!is_valid_search_query("a.b"));
    }

    #[test]
    fn action_query_matches_three_letter_codes() {
        assert!(is_valid_action_query("abc"));
        assert!(is_valid_action_query("ABC"));
        assert!(is_valid_action_query("/abc"));
        assert!(is_valid_action_query("abc/"));
        assert!(is_valid_action_query("/abc/"));
        assert!(is_valid_action_query(""));
        assert!(!is_valid_action_query("ab"));
        assert!(!is_valid_action_query("abcd"));
        assert!(!is_valid_action_query("ab1"));
        assert!(!is_valid_action_query("abc def"));
    }

    #[test]
    fn course_rows_split_id_from_title() {
        let rows = parse_course_rows("CS 101 Intro\nCS 102 Data\n");
        assert_eq!(
            rows,
            vec![
                CourseRow { id: "CS 101".to_string(), title: "Intro".to_string() },
                CourseRow { id: "CS 102".to_string(), title: "Data".to_string() },
            ]
        );
    }

    #[test]
    fn course_row_title_keeps_all_trailing_tokens() {
        let rows = parse_course_rows("MATH 215 Intro to Proofs\n");
        assert_eq!(rows[0].id, "MATH 215");
        assert_eq!(rows[0].title, "Intro to Proofs");
    }

    #[test]
    fn unterminated_final_fragment_is_dropped() {
        let rows = parse_course_rows("CS 101 Intro\nCS 102 Data");
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].id, "CS 101");
    }

    #[test]
    fn count_rows_split_label_and_value() {
        let rows = parse_count_rows("abc 12\nxyz 3\n");
        assert_eq!(
            rows,
            vec![
                CountRow { label: "abc".to_string(), value: "12".to_string() },
                CountRow { label: "xyz".to_string(), value: "3".to_string() },
            ]
        );
    }

    #[test]
    fn empty_and_bare_newline_bodies_count_as_empty() {
        assert!(is_empty_response(""));
        assert!(is_empty_response("\n"));
        assert!(!is_empty_response("CS 101 Intro\n"));
    }

    #[test]
    fn clear_succeeds_only_on_exact_newline() {
        assert!(is_clear_success("\n"));
        assert!(!is_clear_success(""));
        assert!(!is_clear_success("\n\n"));
        assert!(!is_clear_success("ok\n"));
    }
}
