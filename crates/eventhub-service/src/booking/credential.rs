//! Ticket credential generation.

use rand::RngCore;
use rand::rngs::OsRng;
use uuid::Uuid;

/// Number of random bytes appended to each credential (128 bits).
const TOKEN_BYTES: usize = 16;

/// Generates the opaque scannable credential stored as a ticket's
/// `qr_code`.
///
/// The credential embeds the event and user ids for human traceability and
/// appends 128 bits from the OS CSPRNG, so it cannot be forged by
/// enumerating event/user id pairs.
#[derive(Debug, Clone)]
pub struct CredentialGenerator;

impl CredentialGenerator {
    /// Creates a new credential generator.
    pub fn new() -> Self {
        Self
    }

    /// Generate a credential for one (event, user) pair.
    pub fn generate(&self, event_id: Uuid, user_id: Uuid) -> String {
        let mut bytes = [0u8; TOKEN_BYTES];
        OsRng.fill_bytes(&mut bytes);
        format!("{event_id}-{user_id}-{}", hex::encode(&bytes))
    }
}

impl Default for CredentialGenerator {
    fn default() -> Self {
        Self::new()
    }
}

/// Simple hex encoding without external dependency.
mod hex {
    /// Encode bytes to hex string.
    pub fn encode(bytes: &[u8]) -> String {
        bytes.iter().map(|b| format!("{b:02x}")).collect()
    }
}
