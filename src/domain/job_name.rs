use std::fmt;

use uuid::Uuid;

/// Unique name of a transcription job on the external service.
///
/// A fresh name is generated per invocation, so no two invocations contend
/// over the same job resource.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct JobName(String);

impl JobName {
    pub fn generate() -> Self {
        Self(format!("transcribe-{}", Uuid::new_v4()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for JobName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
