//! Deterministic variant assignment for A/B experiments
//!
//! Maps an arbitrary identifier (user id, request key) to one of two
//! variants with a stable FNV-1a hash, so the same identifier lands in the
//! same bucket across threads, processes, and runs. No assignment table,
//! no shared state: the mapping is a pure function of the identifier.

use std::hash::Hasher;

/// Assign an identifier to one of two variants
///
/// # Arguments
/// * `identifier` - Any identifier string (user id, session key, ...)
/// * `variants` - The two variant names to choose between
///
/// # Returns
/// One of the two supplied variant names, chosen by a stable 64-bit
/// FNV-1a hash of the identifier's UTF-8 bytes. Approximately 50/50 over
/// large identifier populations.
///
/// # Example
/// ```
/// use cotejo::assignment::assign_variant;
///
/// let v = assign_variant("user_42", ("control", "treatment"));
///
/// // Deterministic - same identifier always gets the same variant
/// assert_eq!(v, assign_variant("user_42", ("control", "treatment")));
/// ```
///
/// # Determinism
/// FNV-1a is a fixed algorithm, unlike `std`'s `DefaultHasher` whose keys
/// are randomized per process. The exact hash is an implementation choice,
/// not a compatibility contract.
///
/// Reference: http://www.isthe.com/chongo/tech/comp/fnv/
pub fn assign_variant<'a>(identifier: &str, variants: (&'a str, &'a str)) -> &'a str {
    let mut hasher = fnv::FnvHasher::default();
    hasher.write(identifier.as_bytes());
    let hash = hasher.finish();

    // The low bit of FNV-1a is only the parity of the input bytes (the
    // prime is odd), so fold the upper half in before selecting.
    if (hash ^ (hash >> 32)) & 1 == 0 {
        variants.0
    } else {
        variants.1
    }
}
