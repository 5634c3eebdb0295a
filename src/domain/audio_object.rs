use std::fmt;

/// Reference to the source audio object in the bucket store.
///
/// The object is never read by this service; the transcription service
/// dereferences it on its own side.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AudioObject {
    pub bucket: String,
    pub key: String,
}

impl AudioObject {
    pub fn new(bucket: String, key: String) -> Self {
        Self { bucket, key }
    }
}

impl fmt::Display for AudioObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.bucket, self.key)
    }
}
