use halbot_core::error::Result;
use halbot_core::types::SearchResult;

use crate::command::RequestedCount;

const LIST_SEPARATOR: &str = " -- ";
const ITEM_SEPARATOR: &str = ", ";

/// One-line digest: `"<total> in <label> for <query>"`, followed by
/// `" -- (1) title [source_id], ..."` when a non-zero count resolves.
pub fn render_summary(label: &str, query: &str, result: &SearchResult, count: Option<RequestedCount>) -> String {
    let mut out = format!("{} in {} for {}", result.total_found, label, query);
    let n = count.map_or(0, |c| c.resolve(result.documents.len()));
    if n > 0 {
        let items: Vec<String> = result
            .documents
            .iter()
            .take(n)
            .enumerate()
            .map(|(i, doc)| format!("({}) {} [{}]", i + 1, doc.title, doc.source_id))
            .collect();
        out.push_str(LIST_SEPARATOR);
        out.push_str(&items.join(ITEM_SEPARATOR));
    }
    out
}

/// Same as [`render_summary`] for a raw count token (`""` when absent).
pub fn format_summary(label: &str, query: &str, result: &SearchResult, count_token: &str) -> Result<String> {
    let count = RequestedCount::parse(count_token)?;
    Ok(render_summary(label, query, result, count))
}

#[cfg(test)]
mod tests {
    use super::*;
    use halbot_core::error::Error;
    use halbot_core::types::Document;

    fn page(total: u64, n: usize) -> SearchResult {
        SearchResult {
            total_found: total,
            documents: (1..=n).map(|i| Document::new(format!("T{i}"), i.to_string())).collect(),
        }
    }

    #[test]
    fn count_line_only_without_token() {
        assert_eq!(format_summary("ai", "source:48", &page(3, 0), "").expect("fmt"), "3 in ai for source:48");
        assert_eq!(format_summary("ai", "x", &page(9, 5), "").expect("fmt"), "9 in ai for x");
    }

    #[test]
    fn renders_requested_prefix() {
        assert_eq!(
            format_summary("ai", "x", &page(9, 5), "2").expect("fmt"),
            "9 in ai for x -- (1) T1 [1], (2) T2 [2]"
        );
    }

    #[test]
    fn clamps_to_available_documents() {
        let out = format_summary("ai", "x", &page(100, 3), "9").expect("fmt");
        assert_eq!(out, "100 in ai for x -- (1) T1 [1], (2) T2 [2], (3) T3 [3]");
    }

    #[test]
    fn zero_resolved_count_has_no_separator() {
        assert_eq!(format_summary("ai", "x", &page(4, 4), "0").expect("fmt"), "4 in ai for x");
        assert_eq!(format_summary("ai", "x", &page(4, 0), "all").expect("fmt"), "4 in ai for x");
    }

    #[test]
    fn garbage_token_fails() {
        assert!(matches!(format_summary("ai", "x", &page(4, 4), "lots"), Err(Error::InvalidCount(_))));
    }

    #[test]
    fn same_inputs_same_output() {
        let result = page(7, 3);
        let a = render_summary("ai", "x", &result, Some(RequestedCount::All));
        let b = render_summary("ai", "x", &result, Some(RequestedCount::All));
        assert_eq!(a, b);
    }
}
