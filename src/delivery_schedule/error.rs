use thiserror::Error;

/// Structural problems that reject a whole booking request batch.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScheduleError {
    #[error("Booking request is empty")]
    EmptyInput,
    #[error("{0}")]
    MalformedInput(MalformedReason),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MalformedReason {
    #[error("No individual booking request. Need 3 lines input minimum.")]
    TooFewLines,
    #[error("Booking request must have \"2x+1\" number of lines, eg odd numbers of lines only.")]
    EvenLineCount,
}
