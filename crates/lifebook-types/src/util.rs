use chrono::Utc;

/// Current wall-clock time in unix milliseconds.
pub fn now_millis() -> i64 {
    Utc::now().timestamp_millis()
}

/// Turn a page name into an id-safe slug: lowercase, runs of whitespace
/// collapsed to single hyphens.
pub fn slugify(name: &str) -> String {
    name.trim()
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slugify_lowercases_and_collapses_whitespace() {
        assert_eq!(slugify("My Biggest   Dream"), "my-biggest-dream");
        assert_eq!(slugify("  Trip "), "trip");
    }

    #[test]
    fn slugify_keeps_single_word_intact() {
        assert_eq!(slugify("Work"), "work");
    }
}
