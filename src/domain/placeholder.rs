// src/domain/placeholder.rs
//
// Inline images live in a note body as the literal token `[[IMG:<path>]]`,
// where `<path>` is any string not containing `]]`. The core treats the
// token as opaque text everywhere except the reconciliation scan and the
// terminal presenter.
use regex::Regex;
use std::sync::OnceLock;

fn token_regex() -> &'static Regex {
    static TOKEN: OnceLock<Regex> = OnceLock::new();
    TOKEN.get_or_init(|| {
        Regex::new(r"\[\[IMG:(.*?)\]\]").expect("Failed to compile image token regex")
    })
}

/// Every image path referenced by `text`, verbatim and in document order.
///
/// Resolving the paths against the filesystem is the reconciler's job.
pub fn image_refs(text: &str) -> Vec<String> {
    token_regex()
        .captures_iter(text)
        .filter_map(|cap| cap.get(1))
        .map(|m| m.as_str().to_string())
        .collect()
}

/// `text` with every image token removed.
pub fn strip_tokens(text: &str) -> String {
    token_regex().replace_all(text, "").into_owned()
}

/// `text` with every image token rewritten through `f`, which receives the
/// captured path.
pub fn map_tokens(text: &str, mut f: impl FnMut(&str) -> String) -> String {
    token_regex()
        .replace_all(text, |caps: &regex::Captures| f(&caps[1]))
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_text_with_token_when_scanning_then_returns_path() {
        let text = "before [[IMG:shots/cat.png]] after";

        assert_eq!(image_refs(text), vec!["shots/cat.png"]);
    }

    #[test]
    fn given_multiple_tokens_when_scanning_then_returns_all_in_order() {
        let text = "[[IMG:a.png]] middle [[IMG:b/c.jpg]] end [[IMG:../up.gif]]";

        let refs = image_refs(text);

        assert_eq!(refs, vec!["a.png", "b/c.jpg", "../up.gif"]);
    }

    #[test]
    fn given_token_followed_by_brackets_when_scanning_then_stops_at_first_close() {
        let text = "[[IMG:a.png]] stray ]] brackets";

        assert_eq!(image_refs(text), vec!["a.png"]);
    }

    #[test]
    fn given_no_tokens_when_scanning_then_returns_empty() {
        assert!(image_refs("plain text, [not a token]").is_empty());
    }

    #[test]
    fn given_unclosed_token_when_scanning_then_ignores_it() {
        assert!(image_refs("broken [[IMG:half.png").is_empty());
    }

    #[test]
    fn given_text_when_stripping_then_removes_tokens_only() {
        let text = "keep [[IMG:x.png]]this";

        assert_eq!(strip_tokens(text), "keep this");
    }

    #[test]
    fn given_text_when_mapping_then_rewrites_each_token() {
        let text = "a [[IMG:one.png]] b [[IMG:two.png]]";

        let mapped = map_tokens(text, |path| format!("<{path}>"));

        assert_eq!(mapped, "a <one.png> b <two.png>");
    }
}
