//! Six-quintet checksum over the human-readable prefix and data.
//!
//! Polymod reduction against a fixed five-entry generator table with a
//! 30-bit accumulator. The final accumulator is XORed with [`CHECKSUM_CONST`].

/// Number of checksum quintets appended to the data.
pub const CHECKSUM_LEN: usize = 6;

/// Constant XORed into the final polymod value.
pub const CHECKSUM_CONST: u32 = 1;

const GENERATORS: [u32; 5] = [0x3b6a_57b2, 0x2650_8e6d, 0x1ea1_19fa, 0x3d42_33dd, 0x2a14_62b3];

/// Run the polymod reduction over a sequence of quintets.
pub fn polymod(values: &[u8]) -> u32 {
    let mut chk: u32 = 1;
    for &v in values {
        let top = chk >> 25;
        chk = ((chk & 0x01ff_ffff) << 5) ^ u32::from(v);
        for (i, g) in GENERATORS.iter().enumerate() {
            if (top >> i) & 1 == 1 {
                chk ^= g;
            }
        }
    }
    chk
}

/// Expand a prefix into quintets: high 3 bits of every char, a zero, then
/// the low 5 bits of every char.
pub fn expand_prefix(prefix: &str) -> Vec<u8> {
    let bytes = prefix.as_bytes();
    let mut out = Vec::with_capacity(bytes.len() * 2 + 1);
    out.extend(bytes.iter().map(|b| b >> 5));
    out.push(0);
    out.extend(bytes.iter().map(|b| b & 0x1f));
    out
}

/// Compute the checksum quintets for `data` under `prefix`.
pub fn compute_checksum(prefix: &str, data: &[u8]) -> [u8; CHECKSUM_LEN] {
    let mut values = expand_prefix(prefix);
    values.extend_from_slice(data);
    values.extend_from_slice(&[0u8; CHECKSUM_LEN]);

    let pm = polymod(&values) ^ CHECKSUM_CONST;

    let mut checksum = [0u8; CHECKSUM_LEN];
    for (i, q) in checksum.iter_mut().enumerate() {
        *q = ((pm >> (5 * (CHECKSUM_LEN - 1 - i))) & 0x1f) as u8;
    }
    checksum
}

/// Check that `data_with_checksum` ends in the checksum of its data part.
pub fn verify_checksum(prefix: &str, data_with_checksum: &[u8]) -> bool {
    if data_with_checksum.len() < CHECKSUM_LEN {
        return false;
    }
    let mut values = expand_prefix(prefix);
    values.extend_from_slice(data_with_checksum);
    polymod(&values) == CHECKSUM_CONST
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::address::bits::{decode_chars, encode_chars};

    #[test]
    fn test_expand_prefix() {
        // 'i' = 0x69, 'o' = 0x6f
        assert_eq!(expand_prefix("io"), vec![3, 3, 0, 9, 15]);
        assert_eq!(expand_prefix(""), vec![0]);
    }

    #[test]
    fn test_all_zero_payload_checksum() {
        let data = vec![0u8; 32];
        let checksum = compute_checksum("io", &data);
        assert_eq!(encode_chars(&checksum), "d39ym7");
    }

    #[test]
    fn test_compute_then_verify() {
        let data = decode_chars("mflp9m6hcgm2qcghchsdqj3z3eccrnek").unwrap();
        let checksum = compute_checksum("io", &data);
        assert_eq!(encode_chars(&checksum), "x9p0ms");

        let mut full = data.clone();
        full.extend_from_slice(&checksum);
        assert!(verify_checksum("io", &full));
    }

    #[test]
    fn test_verify_detects_single_substitution() {
        let mut full = decode_chars("mflp9m6hcgm2qcghchsdqj3z3eccrnekx9p0ms").unwrap();
        assert!(verify_checksum("io", &full));
        full[7] ^= 1;
        assert!(!verify_checksum("io", &full));
    }

    #[test]
    fn test_verify_depends_on_prefix() {
        let full = decode_chars("mflp9m6hcgm2qcghchsdqj3z3eccrnekx9p0ms").unwrap();
        assert!(!verify_checksum("it", &full));
    }

    #[test]
    fn test_verify_too_short() {
        assert!(!verify_checksum("io", &[0, 0, 0]));
    }
}
