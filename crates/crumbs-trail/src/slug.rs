//! Slug to display label conversion.

use percent_encoding::percent_decode_str;

/// Turn a URL slug into a human-readable label.
///
/// Percent escapes are decoded, hyphens and underscores become spaces and
/// every word starts with an uppercase letter. The rest of each word is left
/// alone, so acronyms survive (`api-FAQ` becomes `Api FAQ`).
///
/// ```
/// use crumbs_trail::slug_to_label;
///
/// assert_eq!(slug_to_label("cosmic-colored"), "Cosmic Colored");
/// assert_eq!(slug_to_label("voltfoot"), "Voltfoot");
/// assert_eq!(slug_to_label("a_b_c"), "A B C");
/// ```
#[must_use]
pub fn slug_to_label(slug: &str) -> String {
    let decoded = percent_decode_str(slug).decode_utf8_lossy();
    let spaced = decoded.replace(['-', '_'], " ");

    let label = spaced
        .split_whitespace()
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ");

    if label.is_empty() {
        slug.to_owned()
    } else {
        label
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hyphens_and_underscores() {
        assert_eq!(slug_to_label("cosmic-colored"), "Cosmic Colored");
        assert_eq!(slug_to_label("a_b_c"), "A B C");
        assert_eq!(slug_to_label("mixed-up_words"), "Mixed Up Words");
    }

    #[test]
    fn test_single_word() {
        assert_eq!(slug_to_label("voltfoot"), "Voltfoot");
    }

    #[test]
    fn test_keeps_inner_case() {
        assert_eq!(slug_to_label("api-FAQ"), "Api FAQ");
    }

    #[test]
    fn test_repeated_separators_collapse() {
        assert_eq!(slug_to_label("--release--notes__"), "Release Notes");
    }

    #[test]
    fn test_percent_decoding() {
        assert_eq!(slug_to_label("caf%C3%A9-menu"), "Café Menu");
        assert_eq!(slug_to_label("hello%20world"), "Hello World");
    }

    #[test]
    fn test_unicode_first_letter() {
        assert_eq!(slug_to_label("über-uns"), "Über Uns");
    }

    #[test]
    fn test_separator_only_slug_kept() {
        assert_eq!(slug_to_label("-"), "-");
    }
}
