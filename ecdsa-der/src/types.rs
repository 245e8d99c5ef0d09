use core::fmt;
use core::str::FromStr;

use crate::error::ParseError;
use crate::utils::{eq_ignore_ascii_case, trim_ascii};

/**
    Elliptic curve that produced a raw `R||S` signature.

    The curve fixes the width of each half: R and S are each
    [`KeyType::field_size`] bytes, big-endian, zero-padded.
*/
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum KeyType {
    Secp256r1,
    Secp384r1,
    Secp521r1,
}

impl KeyType {
    /**
        Every supported curve, smallest first.
    */
    pub const ALL: [Self; 3] = [Self::Secp256r1, Self::Secp384r1, Self::Secp521r1];

    /**
        Look up a curve by name.

        Accepts the SEC 2 name (`secp256r1`), the ANSI X9.62 alias
        (`prime256v1`) and the NIST names with or without the hyphen
        (`P-256`, `p256`). Matching ignores ASCII case and surrounding
        whitespace.
    */
    pub const fn from_name(name: &[u8]) -> Option<Self> {
        let name = trim_ascii(name);
        match name.len() {
            4 if eq_ignore_ascii_case(name, b"p256") => Some(Self::Secp256r1),
            4 if eq_ignore_ascii_case(name, b"p384") => Some(Self::Secp384r1),
            4 if eq_ignore_ascii_case(name, b"p521") => Some(Self::Secp521r1),
            5 if eq_ignore_ascii_case(name, b"p-256") => Some(Self::Secp256r1),
            5 if eq_ignore_ascii_case(name, b"p-384") => Some(Self::Secp384r1),
            5 if eq_ignore_ascii_case(name, b"p-521") => Some(Self::Secp521r1),
            9 if eq_ignore_ascii_case(name, b"secp256r1") => Some(Self::Secp256r1),
            9 if eq_ignore_ascii_case(name, b"secp384r1") => Some(Self::Secp384r1),
            9 if eq_ignore_ascii_case(name, b"secp521r1") => Some(Self::Secp521r1),
            10 if eq_ignore_ascii_case(name, b"prime256v1") => Some(Self::Secp256r1),
            _ => None,
        }
    }

    /**
        Canonical SEC 2 curve name.
    */
    pub const fn to_name(self) -> &'static str {
        match self {
            Self::Secp256r1 => "secp256r1",
            Self::Secp384r1 => "secp384r1",
            Self::Secp521r1 => "secp521r1",
        }
    }

    /**
        Width in bytes of one scalar (R or S) in the raw encoding.
    */
    pub const fn field_size(self) -> usize {
        match self {
            Self::Secp256r1 => 32,
            Self::Secp384r1 => 48,
            Self::Secp521r1 => 66,
        }
    }

    /**
        Width in bytes of a complete raw `R||S` signature.
    */
    pub const fn signature_len(self) -> usize {
        self.field_size() * 2
    }
}

impl fmt::Display for KeyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.to_name())
    }
}

impl FromStr for KeyType {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s.as_bytes()).ok_or_else(|| ParseError {
            kind: "key type",
            value: s.to_owned(),
        })
    }
}

/**
    When leading `0x00` octets are removed from R and S.
*/
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ZeroStripping {
    /**
        Always strip to the minimal encoding. This is what DER requires.
    */
    #[default]
    Always,
    /**
        Only strip when the raw signature length is not a multiple of 8.
        Keeps 64- and 96-byte signatures unstripped, matching output from
        older converters that some consumers still compare against.
    */
    Legacy,
}

impl ZeroStripping {
    pub(crate) const fn applies_to(self, raw_len: usize) -> bool {
        match self {
            Self::Always => true,
            Self::Legacy => raw_len % 8 != 0,
        }
    }
}

/**
    How the outer `SEQUENCE` length is written.
*/
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LengthForm {
    /**
        Short form below 128 bytes, minimal long form otherwise.
    */
    #[default]
    Minimal,
    /**
        Always `0x81 <len>` for secp521r1, minimal for every other curve.
    */
    Legacy,
}

impl LengthForm {
    pub(crate) const fn forces_long_form(self, key_type: KeyType) -> bool {
        matches!(
            (self, key_type),
            (Self::Legacy, KeyType::Secp521r1)
        )
    }
}

/**
    Knobs for [`encode_with`](crate::encode_with).

    The default produces strict DER and checks the input length against
    the curve. [`EncodeOptions::legacy`] reproduces the byte layout of the
    older converter for every input it accepted.
*/
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EncodeOptions {
    pub zero_stripping: ZeroStripping,
    pub length_form: LengthForm,
    /**
        Reject raw signatures whose length differs from
        [`KeyType::signature_len`].
    */
    pub check_key_size: bool,
}

impl EncodeOptions {
    pub const fn new() -> Self {
        Self {
            zero_stripping: ZeroStripping::Always,
            length_form: LengthForm::Minimal,
            check_key_size: true,
        }
    }

    /**
        Byte-compatible with the older converter: conditional zero stripping,
        forced long-form length for secp521r1, no curve size check.
    */
    pub const fn legacy() -> Self {
        Self {
            zero_stripping: ZeroStripping::Legacy,
            length_form: LengthForm::Legacy,
            check_key_size: false,
        }
    }

    pub const fn with_zero_stripping(mut self, zero_stripping: ZeroStripping) -> Self {
        self.zero_stripping = zero_stripping;
        self
    }

    pub const fn with_length_form(mut self, length_form: LengthForm) -> Self {
        self.length_form = length_form;
        self
    }

    pub const fn with_key_size_check(mut self, check_key_size: bool) -> Self {
        self.check_key_size = check_key_size;
        self
    }
}

impl Default for EncodeOptions {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_type_display() {
        assert_eq!(format!("{}", KeyType::Secp256r1), "secp256r1");
        assert_eq!(format!("{}", KeyType::Secp384r1), "secp384r1");
        assert_eq!(format!("{}", KeyType::Secp521r1), "secp521r1");
    }

    #[test]
    fn key_type_name_round_trip() {
        for kt in KeyType::ALL {
            let parsed = KeyType::from_name(kt.to_name().as_bytes()).unwrap();
            assert_eq!(parsed, kt);
        }
    }

    #[test]
    fn key_type_aliases() {
        assert_eq!(KeyType::from_name(b"prime256v1"), Some(KeyType::Secp256r1));
        assert_eq!(KeyType::from_name(b"P-256"), Some(KeyType::Secp256r1));
        assert_eq!(KeyType::from_name(b"p256"), Some(KeyType::Secp256r1));
        assert_eq!(KeyType::from_name(b"P-384"), Some(KeyType::Secp384r1));
        assert_eq!(KeyType::from_name(b"p384"), Some(KeyType::Secp384r1));
        assert_eq!(KeyType::from_name(b"P-521"), Some(KeyType::Secp521r1));
        assert_eq!(KeyType::from_name(b"p521"), Some(KeyType::Secp521r1));
    }

    #[test]
    fn key_type_from_name_case_and_whitespace() {
        assert_eq!(KeyType::from_name(b"SECP384R1"), Some(KeyType::Secp384r1));
        assert_eq!(
            KeyType::from_name(b"  Secp521r1\n"),
            Some(KeyType::Secp521r1)
        );
        assert_eq!(KeyType::from_name(b"secp256k1"), None);
        assert_eq!(KeyType::from_name(b"ed25519"), None);
        assert_eq!(KeyType::from_name(b""), None);
    }

    #[test]
    fn key_type_from_str_error() {
        let err = "brainpoolP256r1".parse::<KeyType>().unwrap_err();
        assert_eq!(err.kind, "key type");
        assert_eq!(err.value, "brainpoolP256r1");
        assert_eq!(err.to_string(), "unknown key type 'brainpoolP256r1'");
    }

    #[test]
    fn key_type_sizes() {
        assert_eq!(KeyType::Secp256r1.signature_len(), 64);
        assert_eq!(KeyType::Secp384r1.signature_len(), 96);
        assert_eq!(KeyType::Secp521r1.signature_len(), 132);
    }

    #[test]
    fn legacy_stripping_follows_length() {
        assert!(!ZeroStripping::Legacy.applies_to(64));
        assert!(!ZeroStripping::Legacy.applies_to(96));
        assert!(ZeroStripping::Legacy.applies_to(132));
        assert!(ZeroStripping::Always.applies_to(64));
    }

    #[test]
    fn legacy_long_form_only_for_p521() {
        assert!(LengthForm::Legacy.forces_long_form(KeyType::Secp521r1));
        assert!(!LengthForm::Legacy.forces_long_form(KeyType::Secp384r1));
        assert!(!LengthForm::Minimal.forces_long_form(KeyType::Secp521r1));
    }

    #[test]
    fn options_builders() {
        let opts = EncodeOptions::new()
            .with_zero_stripping(ZeroStripping::Legacy)
            .with_key_size_check(false);
        assert_eq!(opts.zero_stripping, ZeroStripping::Legacy);
        assert_eq!(opts.length_form, LengthForm::Minimal);
        assert!(!opts.check_key_size);
        assert_eq!(EncodeOptions::default(), EncodeOptions::new());
        assert_eq!(
            EncodeOptions::new()
                .with_zero_stripping(ZeroStripping::Legacy)
                .with_length_form(LengthForm::Legacy)
                .with_key_size_check(false),
            EncodeOptions::legacy()
        );
    }
}
