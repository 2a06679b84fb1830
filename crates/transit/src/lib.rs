pub mod fare;
pub mod lines;
pub mod network;
pub mod routing;


// ---------------------------------------------------------------------------
// Snapshot helpers
// ---------------------------------------------------------------------------

/// Decode bytes via `bitcode::decode`, logging a warning and returning `Default` on failure.
/// Use this when restoring a byte snapshot so decode errors surface instead of panicking.
pub fn decode_or_warn<T: bitcode::DecodeOwned + Default>(key: &str, bytes: &[u8]) -> T {
    match bitcode::decode(bytes) {
        Ok(v) => v,
        Err(e) => {
            log::warn!(
                "snapshot {}: failed to decode {} bytes, falling back to default: {}",
                key,
                bytes.len(),
                e
            );
            T::default()
        }
    }
}
