//! Property-test case counts read from the environment.
//!
//! Suites call [`property_cases`] with their local default so CI can raise or
//! lower the case budget through one variable.

use std::env;

/// Environment variable overriding the number of cases per property.
pub const PBT_CASES_ENV_KEY: &str = "GRAPHGEN_PBT_CASES";

/// Returns the configured case count, or `default_cases` when the variable
/// is unset or invalid.
///
/// # Examples
/// ```
/// use graphgen_test_support::profile::property_cases;
///
/// assert!(property_cases(32) > 0);
/// ```
#[must_use]
pub fn property_cases(default_cases: u32) -> u32 {
    let Ok(raw) = env::var(PBT_CASES_ENV_KEY) else {
        return default_cases;
    };
    match parse_cases(&raw) {
        Ok(cases) => cases,
        Err(reason) => {
            tracing::warn!(
                env = PBT_CASES_ENV_KEY,
                raw = %raw,
                reason = %reason,
                "invalid property-test case override; using default",
            );
            default_cases
        }
    }
}

fn parse_cases(raw: &str) -> Result<u32, String> {
    let parsed = raw
        .trim()
        .parse::<u32>()
        .map_err(|error| format!("parse error: {error}"))?;
    if parsed == 0 {
        return Err("cases must be > 0".to_owned());
    }
    Ok(parsed)
}

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::rstest;

    #[rstest]
    #[case("64", 64)]
    #[case(" 8 ", 8)]
    fn parse_cases_accepts_positive_integers(#[case] raw: &str, #[case] expected: u32) {
        assert_eq!(parse_cases(raw), Ok(expected));
    }

    #[rstest]
    #[case("0")]
    #[case("-3")]
    #[case("many")]
    fn parse_cases_rejects_invalid_values(#[case] raw: &str) {
        assert!(parse_cases(raw).is_err());
    }
}
