#![allow(clippy::doc_overindented_list_items)]

mod constants;
mod encoder;
mod error;
mod types;

pub mod utils;

pub use self::constants::{LONG_FORM_BIT, SIGN_BIT, TAG_INTEGER, TAG_SEQUENCE};
pub use self::encoder::{DerSignature, encode, encode_named, encode_with};
pub use self::error::{EncodeError, EncodeResult, ParseError};
pub use self::types::{EncodeOptions, KeyType, LengthForm, ZeroStripping};
pub use self::utils::{eq_ignore_ascii_case, trim_ascii};
