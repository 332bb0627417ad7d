//! ID generator port for producing request identifiers.

/// Generates request identifiers.
///
/// Abstracting ID generation allows deterministic replay by substituting
/// a predictable sequence during tests and cassette playback.
pub trait IdGenerator: Send + Sync {
    /// Generates a new request identifier string.
    fn generate_id(&self) -> String;
}
