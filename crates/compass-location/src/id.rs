//! manager identifiers

use serde::{Deserialize, Serialize};

/// identifies one logical location manager (random 16 bytes)
///
/// every consumer owns its own id so its delegate subscription can be
/// started and cancelled independently of other consumers sharing the
/// platform manager.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ManagerId([u8; 16]);

impl ManagerId {
    pub fn random() -> Self {
        let mut bytes = [0u8; 16];
        rand::RngCore::fill_bytes(&mut rand::thread_rng(), &mut bytes);
        Self(bytes)
    }

    pub const fn from_bytes(bytes: [u8; 16]) -> Self {
        Self(bytes)
    }

    pub fn to_bytes(&self) -> &[u8; 16] {
        &self.0
    }
}

impl Default for ManagerId {
    fn default() -> Self {
        Self::random()
    }
}

impl std::fmt::Display for ManagerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", hex::encode(&self.0[..8])) // short form
    }
}
