//! Const evaluation utilities

/// FNV-1a 64-bit Hash for strings (const fn)
pub const fn fnv1a_64_str(s: &str) -> u64 {
    let bytes = s.as_bytes();
    let mut hash: u64 = 0xcbf29ce484222325;
    let mut i = 0;
    while i < bytes.len() {
        hash ^= bytes[i] as u64;
        hash = hash.wrapping_mul(0x100000001b3);
        i += 1;
    }
    hash
}

/// Extract nibble N (0-15) from the 64-bit FNV-1a hash of `s`.
///
/// Used for `HashStream16` generation from module paths.
pub const fn hash_nibble(s: &str, n: u8) -> u8 {
    let hash = fnv1a_64_str(s);
    ((hash >> (n * 4)) & 0xF) as u8
}

const _: () = {
    assert!(fnv1a_64_str("") == 0xcbf29ce484222325);
    assert!(hash_nibble("", 0) == 0x5);
};
