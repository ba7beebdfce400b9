use glosa_types::{HighlightedText, Span};

/// Marks every case-insensitive occurrence of `keyword` in `text`.
///
/// The keyword is matched literally. Marked spans keep the casing of `text`.
/// An empty keyword leaves the text untouched.
pub fn highlight(text: &str, keyword: &str) -> HighlightedText {
    if keyword.is_empty() || text.is_empty() {
        return HighlightedText::plain(text);
    }

    let needle = keyword.to_lowercase();
    let (folded, origin) = fold_case(text);

    let mut spans = Vec::new();
    let mut cursor = 0;
    let mut from = 0;

    while let Some(found) = folded[from..].find(&needle) {
        let folded_start = from + found;
        let folded_end = folded_start + needle.len();
        from = folded_end;

        // Widen to whole characters of the original text
        let start = origin[folded_start];
        let last = origin[folded_end - 1];
        let end = last + text[last..].chars().next().map_or(0, char::len_utf8);

        if start < cursor {
            continue;
        }
        if start > cursor {
            spans.push(Span::Plain(text[cursor..start].to_string()));
        }
        spans.push(Span::Mark(text[start..end].to_string()));
        cursor = end;
    }

    if cursor < text.len() {
        spans.push(Span::Plain(text[cursor..].to_string()));
    }

    HighlightedText::new(spans)
}

/// Lowercases `text`, recording for each byte of the result the byte offset
/// of the original character it came from.
fn fold_case(text: &str) -> (String, Vec<usize>) {
    let mut folded = String::with_capacity(text.len());
    let mut origin = Vec::with_capacity(text.len());

    for (offset, c) in text.char_indices() {
        for lower in c.to_lowercase() {
            folded.push(lower);
            origin.resize(folded.len(), offset);
        }
    }

    (folded, origin)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn html(text: &str, keyword: &str) -> String {
        highlight(text, keyword).render_with("<mark>", "</mark>")
    }

    #[test]
    fn marks_match_preserving_original_case() {
        assert_eq!(html("The API is fast", "api"), "The <mark>API</mark> is fast");
    }

    #[test]
    fn marks_every_occurrence() {
        let text = highlight("api, Api and APIs", "API");
        assert_eq!(text.mark_count(), 3);
        assert_eq!(
            text.render_with("[", "]"),
            "[api], [Api] and [API]s"
        );
    }

    #[test]
    fn empty_keyword_passes_through() {
        let text = highlight("Domain Name System", "");
        assert_eq!(text.mark_count(), 0);
        assert_eq!(text.plain_text(), "Domain Name System");
    }

    #[test]
    fn no_match_is_one_plain_span() {
        let text = highlight("Firewall", "cache");
        assert_eq!(text.spans(), &[Span::Plain("Firewall".to_string())]);
    }

    #[test]
    fn keyword_is_literal_not_a_pattern() {
        assert_eq!(html("C++ and C", "c++"), "<mark>C++</mark> and C");
        assert_eq!(html("a.b axb", "a.b"), "<mark>a.b</mark> axb");
    }

    #[test]
    fn occurrences_do_not_overlap() {
        assert_eq!(html("aaaa", "aa"), "<mark>aa</mark><mark>aa</mark>");
    }

    #[test]
    fn whole_text_match() {
        let text = highlight("Cache", "cache");
        assert_eq!(text.spans(), &[Span::Mark("Cache".to_string())]);
    }

    #[test]
    fn multibyte_text_keeps_boundaries() {
        assert_eq!(html("Über ÜBER", "über"), "<mark>Über</mark> <mark>ÜBER</mark>");
    }

    #[test]
    fn plain_text_round_trips() {
        let source = "Kontrak antar program API";
        assert_eq!(highlight(source, "ap").plain_text(), source);
    }

    #[test]
    fn empty_text_has_no_spans() {
        assert!(highlight("", "api").is_empty());
    }
}
