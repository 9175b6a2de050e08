//! Statistical constant-time testing

pub mod tester;

pub use config::TestConfig;
pub use tester::{generate_test_insights, TimingAnalysis, TimingTester};
