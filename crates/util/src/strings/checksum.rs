/// 53-bit string checksum, rendered as 14 uppercase hex digits.
///
/// The hash runs over UTF-16 code units with two interleaved 32-bit
/// accumulators, mixed into a single 53-bit result. Not cryptographic;
/// meant for change detection and cache keys.
///
/// # Examples
///
/// ```
/// use kitbag_util::strings::checksum53;
///
/// assert_eq!(checksum53("Away we go!"), "19757548BB35B8");
/// assert_eq!(checksum53("Spiny Norman"), "062A4A04389CDA");
/// ```
pub fn checksum53(s: &str) -> String {
    checksum53_seeded(s, 0)
}

/// [`checksum53`] with an explicit seed.
pub fn checksum53_seeded(s: &str, seed: u32) -> String {
    let mut h1: u32 = 0xDEAD_BEEF ^ seed;
    let mut h2: u32 = 0x41C6_CE57 ^ seed;

    for unit in s.encode_utf16() {
        let ch = unit as u32;
        h1 = (h1 ^ ch).wrapping_mul(2_654_435_761);
        h2 = (h2 ^ ch).wrapping_mul(1_597_334_677);
    }

    h1 = (h1 ^ (h1 >> 16)).wrapping_mul(2_246_822_507)
        ^ (h2 ^ (h2 >> 13)).wrapping_mul(3_266_489_909);
    h2 = (h2 ^ (h2 >> 16)).wrapping_mul(2_246_822_507)
        ^ (h1 ^ (h1 >> 13)).wrapping_mul(3_266_489_909);

    let value = ((h2 & 0x1F_FFFF) as u64) << 32 | h1 as u64;
    format!("{value:014X}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_checksums() {
        assert_eq!(checksum53("Away we go!"), "19757548BB35B8");
        assert_eq!(checksum53("Spiny Norman"), "062A4A04389CDA");
    }

    #[test]
    fn test_seed_changes_result() {
        assert_ne!(checksum53_seeded("same text", 0), checksum53_seeded("same text", 1));
    }

    #[test]
    fn test_stable_width() {
        assert_eq!(checksum53("").len(), 14);
        assert_eq!(checksum53("x").len(), 14);
    }

    #[test]
    fn test_non_ascii_uses_utf16_units() {
        // a surrogate pair contributes two units, not one scalar
        assert_ne!(checksum53("\u{10400}"), checksum53("\u{0400}"));
    }
}
