// builders + presets over retrain-core
pub mod builders;
pub mod presets;

#[cfg(feature = "test-utils")]
pub mod test_utils;
