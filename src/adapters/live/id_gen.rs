//! Live adapter for the `IdGenerator` port.

use uuid::Uuid;

use crate::payload::REQUEST_ID_LEN;
use crate::ports::IdGenerator;

/// Live ID generator producing short hex identifiers from random UUIDs.
pub struct LiveIdGenerator;

impl LiveIdGenerator {
    /// Creates a new live ID generator.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Default for LiveIdGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl IdGenerator for LiveIdGenerator {
    fn generate_id(&self) -> String {
        // First 16 hex digits of a v4 UUID; simple() drops the dashes.
        let mut hex = Uuid::new_v4().simple().to_string();
        hex.truncate(REQUEST_ID_LEN);
        hex
    }
}
