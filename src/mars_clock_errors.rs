use thiserror::Error;

#[derive(Error, Debug)]
pub enum MarsClockError {
    #[error("Earth instant must be finite, got: {0}")]
    NonFiniteInstant(f64),

    #[error("Longitude must be finite, got: {0}")]
    NonFiniteLongitude(f64),

    #[error("Clock hours must be finite, got: {0}")]
    NonFiniteHours(f64),

    #[error("Mars Sol Date must be finite, got: {0}")]
    NonFiniteSolDate(f64),

    #[error("Invalid Mars clock parameters: {0}")]
    InvalidParams(String),

    #[error("Unable to parse timestamp: {0}")]
    TimestampParse(String),

    #[error("hifitime error: {0}")]
    Hifitime(#[from] hifitime::HifitimeError),
}

impl PartialEq for MarsClockError {
    fn eq(&self, other: &Self) -> bool {
        use MarsClockError::*;
        match (self, other) {
            // NaN payloads still compare equal when the variant matches
            (NonFiniteInstant(a), NonFiniteInstant(b)) => a.to_bits() == b.to_bits() || a == b,
            (NonFiniteLongitude(a), NonFiniteLongitude(b)) => a.to_bits() == b.to_bits() || a == b,
            (NonFiniteHours(a), NonFiniteHours(b)) => a.to_bits() == b.to_bits() || a == b,
            (NonFiniteSolDate(a), NonFiniteSolDate(b)) => a.to_bits() == b.to_bits() || a == b,
            (InvalidParams(a), InvalidParams(b)) => a == b,
            (TimestampParse(a), TimestampParse(b)) => a == b,

            // hifitime errors are not comparable: equal if same variant
            (Hifitime(_), Hifitime(_)) => true,

            _ => false,
        }
    }
}
