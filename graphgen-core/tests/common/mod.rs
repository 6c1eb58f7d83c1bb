use graphgen_test_support::profile::property_cases;
use proptest::test_runner::Config as ProptestConfig;

/// Builds a proptest configuration honouring the shared case override.
#[must_use]
pub fn suite_proptest_config(default_cases: u32) -> ProptestConfig {
    ProptestConfig {
        cases: property_cases(default_cases),
        ..ProptestConfig::default()
    }
}
