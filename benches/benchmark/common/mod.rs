use criterion::Criterion;
use defer_chain::{chain_value, ChainValue, ChainValueExt};
use std::time::Duration;

// ============================================================================
// Test Data & Domain Types
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
#[allow(dead_code)]
pub enum StepError {
    Parse(String),
    Lookup(String),
    Io(String),
}

impl std::fmt::Display for StepError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StepError::Parse(msg) => write!(f, "Parse error: {msg}"),
            StepError::Lookup(msg) => write!(f, "Lookup error: {msg}"),
            StepError::Io(msg) => write!(f, "I/O error: {msg}"),
        }
    }
}

pub fn add_one(v: Option<ChainValue>) -> Result<Option<ChainValue>, StepError> {
    Ok(chain_value(v.downcast_value::<i64>().unwrap_or(0) + 1))
}

pub fn times_six(v: Option<ChainValue>) -> Result<Option<ChainValue>, StepError> {
    Ok(chain_value(v.downcast_value::<i64>().unwrap_or(0) * 6))
}

pub fn render(v: Option<ChainValue>) -> Result<Option<ChainValue>, StepError> {
    Ok(chain_value(v.downcast_value::<i64>().unwrap_or(0).to_string()))
}

// ============================================================================
// Criterion Configuration
// ============================================================================

pub fn configure_criterion() -> Criterion {
    Criterion::default()
        .sample_size(100)
        .warm_up_time(Duration::from_secs(3))
        .measurement_time(Duration::from_secs(5))
        .noise_threshold(0.05)
}
