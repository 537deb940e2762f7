//! ASCII slugification of display names.

/// Lowercases and reduces a display name to the slug alphabet.
///
/// Whitespace, hyphens, and underscores become single hyphens; other
/// non-alphanumeric characters (including non-ASCII) are dropped; leading
/// and trailing hyphens are trimmed. Underscores are folded into hyphens
/// rather than kept because `_` cannot survive the legacy token form.
/// A name with no usable characters produces an empty string — the
/// generator substitutes a random base in that case.
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut pending_hyphen = false;
    for c in name.chars() {
        let c = c.to_ascii_lowercase();
        if c.is_ascii_lowercase() || c.is_ascii_digit() {
            if pending_hyphen && !slug.is_empty() {
                slug.push('-');
            }
            pending_hyphen = false;
            slug.push(c);
        } else if c.is_whitespace() || c == '-' || c == '_' {
            pending_hyphen = true;
        }
    }
    slug
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lowercases_and_hyphenates() {
        assert_eq!(slugify("Acme Motors"), "acme-motors");
    }

    #[test]
    fn test_drops_punctuation() {
        assert_eq!(slugify("Acme & Motors, Inc."), "acme-motors-inc");
        assert_eq!(slugify("rock'n'roll"), "rocknroll");
    }

    #[test]
    fn test_collapses_separator_runs() {
        assert_eq!(slugify("wheel   --  deal"), "wheel-deal");
        assert_eq!(slugify("wheel_deal"), "wheel-deal");
    }

    #[test]
    fn test_trims_edges() {
        assert_eq!(slugify("  -Acme-  "), "acme");
    }

    #[test]
    fn test_unusable_names_are_empty() {
        assert_eq!(slugify(""), "");
        assert_eq!(slugify("???"), "");
        assert_eq!(slugify("  --  "), "");
    }

    #[test]
    fn test_non_ascii_is_dropped() {
        assert_eq!(slugify("Café 24"), "caf-24");
    }
}
