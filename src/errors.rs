use std::fmt;

/// Failure anywhere in one poll's fetch/decode chain, tagged with the
/// endpoint it came from. The poll loop logs these and drops them; nothing is
/// surfaced to the viewer and the prior render state stays put.
#[derive(Debug)]
pub struct PollError {
    pub endpoint: &'static str,
    pub message: String,
}

impl PollError {
    pub fn new(endpoint: &'static str, err: impl std::error::Error) -> Self {
        Self {
            endpoint,
            message: err.to_string(),
        }
    }
}

impl fmt::Display for PollError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.endpoint, self.message)
    }
}

impl std::error::Error for PollError {}
