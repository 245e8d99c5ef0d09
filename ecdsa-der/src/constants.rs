/**
    ASN.1 universal tag for `INTEGER`.
*/
pub const TAG_INTEGER: u8 = 0x02;

/**
    ASN.1 universal tag for a constructed `SEQUENCE`.
*/
pub const TAG_SEQUENCE: u8 = 0x30;

/**
    Set on the first length octet when the long form follows.
    The low seven bits carry the number of subsequent length octets.
*/
pub const LONG_FORM_BIT: u8 = 0x80;

/**
    Largest length that still fits the single-octet short form.
*/
pub const MAX_SHORT_FORM_LEN: usize = 0x7f;

/**
    Highest bit of an INTEGER's first content octet. When set, DER reads
    the value as negative, so unsigned values get a `0x00` prefix.
*/
pub const SIGN_BIT: u8 = 0x80;
