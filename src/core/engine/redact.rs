use regex::RegexBuilder;

/// Placeholder substituted for the title inside its own plot summary.
pub const PLACEHOLDER: &str = "_______";

/// Replace every case-insensitive occurrence of `title` in `plot` with the
/// placeholder. The title is matched literally (regex metacharacters
/// escaped), so titles like "M*A*S*H" or "(500) Days of Summer" are safe.
pub fn redact_title(plot: &str, title: &str) -> String {
    if title.is_empty() {
        return plot.to_string();
    }

    let Ok(pattern) = RegexBuilder::new(&regex::escape(title))
        .case_insensitive(true)
        .build()
    else {
        return plot.to_string();
    };

    pattern.replace_all(plot, PLACEHOLDER).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replaces_title_occurrence() {
        assert_eq!(
            redact_title("Inception is a movie about dreams", "Inception"),
            "_______ is a movie about dreams"
        );
    }

    #[test]
    fn matching_is_case_insensitive() {
        assert_eq!(
            redact_title("INCEPTION is a movie about dreams", "Inception"),
            "_______ is a movie about dreams"
        );
        assert_eq!(
            redact_title("Dreams within inception within dreams", "Inception"),
            "Dreams within _______ within dreams"
        );
    }

    #[test]
    fn replaces_every_occurrence() {
        let out = redact_title("Alien. In space, the Alien hunts.", "Alien");
        assert!(!out.to_lowercase().contains("alien"));
        assert_eq!(out.matches(PLACEHOLDER).count(), 2);
    }

    #[test]
    fn metacharacters_are_literal() {
        assert_eq!(
            redact_title("(500) Days of Summer is a breakup movie", "(500) Days of Summer"),
            "_______ is a breakup movie"
        );
    }

    #[test]
    fn empty_title_redacts_nothing() {
        assert_eq!(redact_title("Some plot", ""), "Some plot");
    }
}
