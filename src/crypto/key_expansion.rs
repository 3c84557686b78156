use crate::crypto::error::CryptoError;

/// Derives the ordered round-key sequence from a raw key. Pure function of
/// the key: calling it twice with the same bytes yields the same schedule.
pub trait KeyExpansion {
    fn generate_round_keys(&self, key: &[u8]) -> Result<Vec<Vec<u8>>, CryptoError>;
}
