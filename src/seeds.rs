use crate::error::{FacegenError, FacegenResult};

/// Token used when the request carries no usable `seeds` parameter.
pub const DEFAULT_SEEDS: &str = "default";

pub const SEEDS_REQUIRED_MSG: &str = "Error: 'seeds' parameter required (comma-separated list)";

/// Split a raw comma-separated seed parameter into ordered, trimmed tokens.
///
/// An absent or empty parameter falls back to the literal `"default"`. Only
/// the first token is validated: `seeds=,` is rejected, while empty tokens
/// after the first are kept and rendered like any other seed.
pub fn normalize_seeds(raw: Option<&str>) -> FacegenResult<Vec<String>> {
    let raw = match raw {
        Some(s) if !s.is_empty() => s,
        _ => DEFAULT_SEEDS,
    };

    let seeds: Vec<String> = raw.split(',').map(|s| s.trim().to_string()).collect();
    match seeds.first() {
        Some(first) if !first.is_empty() => Ok(seeds),
        _ => Err(FacegenError::invalid_input(SEEDS_REQUIRED_MSG)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_whitespace_and_preserves_order() {
        let seeds = normalize_seeds(Some(" a , b ")).unwrap();
        assert_eq!(seeds, vec!["a".to_string(), "b".to_string()]);

        let seeds = normalize_seeds(Some("rocket,sunset,ocean")).unwrap();
        assert_eq!(seeds, vec!["rocket", "sunset", "ocean"]);
    }

    #[test]
    fn absent_and_empty_fall_back_to_default() {
        assert_eq!(normalize_seeds(None).unwrap(), vec![DEFAULT_SEEDS]);
        assert_eq!(normalize_seeds(Some("")).unwrap(), vec![DEFAULT_SEEDS]);
    }

    #[test]
    fn comma_only_fails_with_exact_message() {
        let err = normalize_seeds(Some(",")).unwrap_err();
        assert_eq!(err.to_string(), SEEDS_REQUIRED_MSG);

        let err = normalize_seeds(Some("  ,a")).unwrap_err();
        assert_eq!(err.to_string(), SEEDS_REQUIRED_MSG);
    }

    #[test]
    fn inner_empty_tokens_are_kept() {
        let seeds = normalize_seeds(Some("a,,b")).unwrap();
        assert_eq!(seeds, vec!["a", "", "b"]);
    }
}
