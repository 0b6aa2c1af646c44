//! UBX frame checksum
//!
//! Two-accumulator running sum (8-bit Fletcher variant) computed over
//! class, id, length bytes and payload. Both accumulators wrap at 256.

/// Compute the UBX checksum pair over `data`
pub fn checksum(data: &[u8]) -> (u8, u8) {
    let mut ck_a: u8 = 0;
    let mut ck_b: u8 = 0;

    for &byte in data {
        ck_a = ck_a.wrapping_add(byte);
        ck_b = ck_b.wrapping_add(ck_a);
    }

    (ck_a, ck_b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty() {
        assert_eq!(checksum(&[]), (0, 0));
    }

    #[test]
    fn test_single_byte() {
        assert_eq!(checksum(&[0x01]), (0x01, 0x01));
    }

    #[test]
    fn test_cfg_rate_body() {
        // class, id, length and payload of a CFG-RATE set request
        let body = [0x06, 0x08, 0x06, 0x00, 0xE8, 0x03, 0x01, 0x00, 0x00, 0x00];
        assert_eq!(checksum(&body), (0x00, 0x37));
    }

    #[test]
    fn test_wrapping() {
        // Accumulators must wrap, not saturate
        let data = [0xFF; 300];
        let (ck_a, ck_b) = checksum(&data);
        // 300 * 255 mod 256
        assert_eq!(ck_a, 212);
        // sum of partial sums: 255 * 300 * 301 / 2 mod 256
        let expected_b = (255u64 * 300 * 301 / 2 % 256) as u8;
        assert_eq!(ck_b, expected_b);
    }
}
