use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("system clock before epoch")]
    ClockBeforeEpoch,
}
