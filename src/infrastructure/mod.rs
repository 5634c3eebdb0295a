pub mod fetch;
pub mod observability;
pub mod persistence;
pub mod transcribe;
