use blake3::Hasher;

/// Computes the 32-byte BLAKE3 key for a `(name, category)` product lookup.
///
/// Fields are length-prefixed so that `("ab", "c")` and `("a", "bc")` never
/// share a key. Inputs are hashed as given: no trimming or case folding, since
/// the query builder is case sensitive for category names.
#[inline]
pub fn hash_product(name: &str, category: &str) -> [u8; 32] {
    let mut hasher = Hasher::new();
    hasher.update(&(name.len() as u64).to_le_bytes());
    hasher.update(name.as_bytes());
    hasher.update(&(category.len() as u64).to_le_bytes());
    hasher.update(category.as_bytes());
    *hasher.finalize().as_bytes()
}

/// Short hex form of a key, for log fields.
#[inline]
pub fn short_hex(hash: &[u8; 32]) -> String {
    hash[..6].iter().map(|b| format!("{b:02x}")).collect()
}
