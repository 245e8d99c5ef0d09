/*!
    Raw `R||S` to DER conversion.

    ECDSA signature in DER:

      SEQUENCE {
          r INTEGER,
          s INTEGER
      }

    Both INTEGERs are unsigned magnitudes written in the fewest octets that
    keep the sign bit clear. Lengths use the short form below 128 and the
    long form (`0x80 | n` followed by `n` octets) otherwise, so secp521r1
    signatures usually need a `0x81` length prefix on the SEQUENCE.
*/

use core::fmt;

use crate::constants::{LONG_FORM_BIT, MAX_SHORT_FORM_LEN, SIGN_BIT, TAG_INTEGER, TAG_SEQUENCE};
use crate::error::{EncodeError, EncodeResult};
use crate::types::{EncodeOptions, KeyType};

/**
    DER-encoded ECDSA signature, ready to embed in an X.509 certificate
    or any other structure expecting `ECDSA-Sig-Value`.

    `Display` prints lowercase hex. `Debug` prints `DerSignature(<hex>)`.
*/
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct DerSignature(Vec<u8>);

impl DerSignature {
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn into_vec(self) -> Vec<u8> {
        self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /**
        Always `false`: a DER signature has at least a tag and a length.
    */
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /**
        Lowercase hex encoding of the DER bytes.
    */
    pub fn to_hex(&self) -> String {
        hex::encode(&self.0)
    }

    /**
        Standard base64 (with padding) encoding of the DER bytes.
    */
    pub fn to_base64(&self) -> String {
        data_encoding::BASE64.encode(&self.0)
    }
}

impl AsRef<[u8]> for DerSignature {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<DerSignature> for Vec<u8> {
    fn from(sig: DerSignature) -> Self {
        sig.0
    }
}

impl fmt::Display for DerSignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl fmt::Debug for DerSignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DerSignature({})", self.to_hex())
    }
}

/**
    Convert a raw `R||S` signature to DER with the default options:
    minimal zero stripping, threshold-based long-form lengths, and a check
    that the input is exactly [`KeyType::signature_len`] bytes.
*/
pub fn encode(signature: &[u8], key_type: KeyType) -> EncodeResult<DerSignature> {
    encode_with(signature, key_type, &EncodeOptions::default())
}

/**
    Like [`encode`], but takes the curve by name (`"secp256r1"`, `"P-384"`, ...).

    Returns [`EncodeError::UnsupportedKeyType`] for names that do not map
    to a [`KeyType`].
*/
pub fn encode_named(signature: &[u8], key_type: &str) -> EncodeResult<DerSignature> {
    let key_type = key_type.parse::<KeyType>().inspect_err(|e| {
        tracing::debug!(error = %e, "rejected signature key type");
    })?;
    encode(signature, key_type)
}

/**
    Convert a raw `R||S` signature to DER.

    The input is split into two equal halves. Each half is encoded as a
    non-negative INTEGER and both are wrapped in a SEQUENCE. An all-zero
    half encodes as `02 01 00`.

    Fails with [`EncodeError::InvalidInputLength`] for empty or odd-length
    input, and with [`EncodeError::SignatureLengthMismatch`] when
    `options.check_key_size` is set and the length does not match the curve.
*/
pub fn encode_with(
    signature: &[u8],
    key_type: KeyType,
    options: &EncodeOptions,
) -> EncodeResult<DerSignature> {
    validate(signature, key_type, options)?;

    let raw_len = signature.len();
    let strip = options.zero_stripping.applies_to(raw_len);
    if !strip {
        tracing::debug!(%key_type, raw_len, "legacy mode: keeping leading zero octets");
    }

    let (r, s) = signature.split_at(raw_len / 2);
    let r = DerInteger::new(r, strip);
    let s = DerInteger::new(s, strip);

    let content_len = r.tlv_len() + s.tlv_len();
    let force_long = options.length_form.forces_long_form(key_type);
    if force_long && content_len <= MAX_SHORT_FORM_LEN {
        tracing::debug!(%key_type, content_len, "legacy mode: forcing long-form length");
    }

    let mut buf = Vec::with_capacity(1 + length_octets(content_len, force_long) + content_len);
    buf.push(TAG_SEQUENCE);
    push_length(&mut buf, content_len, force_long);
    r.write_tlv(&mut buf);
    s.write_tlv(&mut buf);

    tracing::trace!(%key_type, raw_len, der_len = buf.len(), "encoded ECDSA signature");

    Ok(DerSignature(buf))
}

fn validate(signature: &[u8], key_type: KeyType, options: &EncodeOptions) -> EncodeResult<()> {
    let actual = signature.len();
    if actual == 0 || actual % 2 != 0 {
        tracing::debug!(%key_type, len = actual, "rejected raw signature with odd or zero length");
        return Err(EncodeError::InvalidInputLength(actual));
    }

    let expected = key_type.signature_len();
    if options.check_key_size && actual != expected {
        tracing::debug!(%key_type, expected, actual, "rejected raw signature with wrong size");
        return Err(EncodeError::SignatureLengthMismatch {
            key_type,
            expected,
            actual,
        });
    }

    Ok(())
}

/**
    One half of the signature as a DER INTEGER body: an optional `0x00`
    sign pad followed by the (possibly stripped) magnitude.
*/
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct DerInteger<'a> {
    pad: bool,
    magnitude: &'a [u8],
}

impl<'a> DerInteger<'a> {
    /**
        `half` must be non-empty. With `strip` set, leading zero octets are
        removed but the last octet is always kept.
    */
    fn new(half: &'a [u8], strip: bool) -> Self {
        let mut magnitude = half;
        if strip {
            while magnitude.len() > 1 && magnitude[0] == 0 {
                magnitude = &magnitude[1..];
            }
        }
        let pad = magnitude.first().is_some_and(|b| b & SIGN_BIT != 0);
        Self { pad, magnitude }
    }

    fn value_len(&self) -> usize {
        usize::from(self.pad) + self.magnitude.len()
    }

    fn tlv_len(&self) -> usize {
        let len = self.value_len();
        1 + length_octets(len, false) + len
    }

    fn write_tlv(&self, buf: &mut Vec<u8>) {
        buf.push(TAG_INTEGER);
        push_length(buf, self.value_len(), false);
        if self.pad {
            buf.push(0x00);
        }
        buf.extend_from_slice(self.magnitude);
    }
}

/**
    Big-endian length octets for the long form, without leading zeros.
    Always at least one octet.
*/
fn long_form_octets(len: usize) -> ([u8; size_of::<usize>()], usize) {
    let bytes = len.to_be_bytes();
    let leading = bytes.iter().take_while(|&&b| b == 0).count();
    let skip = leading.min(bytes.len() - 1);
    (bytes, skip)
}

fn length_octets(len: usize, force_long: bool) -> usize {
    if len <= MAX_SHORT_FORM_LEN && !force_long {
        1
    } else {
        let (bytes, skip) = long_form_octets(len);
        1 + bytes.len() - skip
    }
}

fn push_length(buf: &mut Vec<u8>, len: usize, force_long: bool) {
    if len <= MAX_SHORT_FORM_LEN && !force_long {
        buf.push(len as u8);
        return;
    }
    let (bytes, skip) = long_form_octets(len);
    let octets = &bytes[skip..];
    buf.push(LONG_FORM_BIT | octets.len() as u8);
    buf.extend_from_slice(octets);
}
