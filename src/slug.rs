//! Brand name to bundle identifier conversion.

/// Convert a display name into a filesystem-safe identifier.
///
/// Lowercases the input, turns runs of whitespace and underscores into a
/// single hyphen, drops everything outside `[a-z0-9-]`, collapses repeated
/// hyphens and trims hyphens from both ends. The result may be empty.
///
/// # Examples
/// ```
/// use brandkit::slug::slugify;
/// assert_eq!(slugify("Acme Corp!"), "acme-corp");
/// assert_eq!(slugify("  My__Brand  "), "my-brand");
/// ```
pub fn slugify(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    let mut pending_separator = false;

    for c in text.to_lowercase().chars() {
        if c.is_whitespace() || c == '_' || c == '-' {
            pending_separator = true;
        } else if c.is_ascii_lowercase() || c.is_ascii_digit() {
            if pending_separator && !slug.is_empty() {
                slug.push('-');
            }
            pending_separator = false;
            slug.push(c);
        }
        // anything else is dropped without breaking the current run
    }

    slug
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slugify_examples() {
        assert_eq!(slugify("Acme Corp!"), "acme-corp");
        assert_eq!(slugify("  My__Brand  "), "my-brand");
        assert_eq!(slugify("TechStart"), "techstart");
        assert_eq!(slugify("Pro Sites"), "pro-sites");
    }

    #[test]
    fn test_slugify_collapses_hyphens() {
        assert_eq!(slugify("a - b"), "a-b");
        assert_eq!(slugify("--a--b--"), "a-b");
        assert_eq!(slugify("a _ - _ b"), "a-b");
    }

    #[test]
    fn test_slugify_strips_punctuation_inside_words() {
        assert_eq!(slugify("O'Reilly & Sons"), "oreilly-sons");
        assert_eq!(slugify("Café Noir"), "caf-noir");
        assert_eq!(slugify("A.B.C"), "abc");
    }

    #[test]
    fn test_slugify_empty_results() {
        assert_eq!(slugify(""), "");
        assert_eq!(slugify("!!!"), "");
        assert_eq!(slugify(" _ - "), "");
    }

    #[test]
    fn test_slugify_idempotent() {
        let inputs = [
            "Acme Corp!",
            "  My__Brand  ",
            "--x--",
            "Ünïcode Brand 2024",
            "tabs\tand\nnewlines",
            "a-b_c d",
            "",
            "---",
        ];
        for input in inputs {
            let once = slugify(input);
            assert_eq!(slugify(&once), once, "not idempotent for {input:?}");
        }
    }
}
