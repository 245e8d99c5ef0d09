/**
    Strip leading and trailing ASCII whitespace in a `const` context.
*/
pub const fn trim_ascii(mut bytes: &[u8]) -> &[u8] {
    while let [first, rest @ ..] = bytes {
        if first.is_ascii_whitespace() {
            bytes = rest;
        } else {
            break;
        }
    }
    while let [rest @ .., last] = bytes {
        if last.is_ascii_whitespace() {
            bytes = rest;
        } else {
            break;
        }
    }
    bytes
}

/**
    ASCII case-insensitive comparison usable in `const fn` matchers.
*/
pub const fn eq_ignore_ascii_case(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    let mut i = 0;
    while i < a.len() {
        if a[i].to_ascii_lowercase() != b[i].to_ascii_lowercase() {
            return false;
        }
        i += 1;
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trim_both_ends() {
        assert_eq!(trim_ascii(b"  secp256r1\t\n"), b"secp256r1");
        assert_eq!(trim_ascii(b"p256"), b"p256");
        assert_eq!(trim_ascii(b"   "), b"");
        assert_eq!(trim_ascii(b""), b"");
    }

    #[test]
    fn case_insensitive_eq() {
        assert!(eq_ignore_ascii_case(b"SECP384R1", b"secp384r1"));
        assert!(eq_ignore_ascii_case(b"P-521", b"p-521"));
        assert!(!eq_ignore_ascii_case(b"p-521", b"p-52"));
        assert!(!eq_ignore_ascii_case(b"p256", b"p384"));
    }
}
