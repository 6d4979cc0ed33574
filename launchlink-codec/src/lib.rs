//! # Launch Parameter Codec
//!
//! On-chain launch events carry their command as a fixed 32-byte value,
//! rendered off-chain as a `0x`-prefixed hex string. This crate provides the
//! lossless round-trip between short human-readable command text and that
//! representation: [`encode`] pads UTF-8 text with trailing zero bytes up to
//! exactly [`PARAM_BYTES`] bytes, and [`decode`] strips the padding back off.
//!
//! The codec is strict on the decode side: the prefix and the exact byte
//! length are validated before any content is interpreted, so a payload that
//! was not produced by [`encode`] (or by an equivalent writer) is rejected
//! rather than guessed at.

use thiserror::Error;

/// Size of the raw launch parameter, in bytes.
pub const PARAM_BYTES: usize = 32;

/// Marker every encoded payload starts with.
const HEX_PREFIX: &str = "0x";

/// Failures of the launch parameter codec.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CodecError {
    #[error("command text is {len} bytes, a launch parameter holds at most {PARAM_BYTES}")]
    OversizeInput { len: usize },

    #[error("payload does not start with the \"0x\" marker")]
    MalformedPrefix,

    #[error("payload must encode exactly {PARAM_BYTES} bytes, got {digits} hex digits")]
    WrongLength { digits: usize },

    #[error("payload contains a non-hex digit: {0}")]
    InvalidHex(#[from] hex::FromHexError),

    #[error("decoded bytes are not valid UTF-8: {0}")]
    Encoding(#[from] std::str::Utf8Error),
}

/// Encodes command text into a `0x`-prefixed, 64-digit lowercase hex payload.
///
/// The UTF-8 form of `text` must fit in [`PARAM_BYTES`] bytes; longer input
/// is rejected with [`CodecError::OversizeInput`] instead of being truncated.
/// The result is always exactly 66 characters.
pub fn encode(text: &str) -> Result<String, CodecError> {
    let bytes = text.as_bytes();
    if bytes.len() > PARAM_BYTES {
        return Err(CodecError::OversizeInput { len: bytes.len() });
    }

    let mut raw = [0u8; PARAM_BYTES];
    raw[..bytes.len()].copy_from_slice(bytes);
    Ok(format!("{HEX_PREFIX}{}", hex::encode(raw)))
}

/// Decodes a payload produced by [`encode`] back into command text.
///
/// Validation order: the `0x` marker, then the exact digit count (strict
/// equality, so both short and long payloads fail the same way), then hex
/// content, then UTF-8 after the trailing zero run is stripped.
///
/// Stripping is greedy from the end: every trailing zero byte is treated as
/// padding. Text whose UTF-8 form itself ends in a zero byte is therefore
/// indistinguishable from padding and will come back shortened; interior
/// zero bytes ahead of the last non-zero byte are preserved as-is.
pub fn decode(payload: &str) -> Result<String, CodecError> {
    let digits = payload
        .strip_prefix(HEX_PREFIX)
        .ok_or(CodecError::MalformedPrefix)?;
    if digits.len() != PARAM_BYTES * 2 {
        return Err(CodecError::WrongLength {
            digits: digits.len(),
        });
    }

    let raw = hex::decode(digits)?;
    let content = match raw.iter().rposition(|&b| b != 0) {
        Some(last) => &raw[..=last],
        None => &[],
    };

    Ok(std::str::from_utf8(content)?.to_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encodes_single_digit_command() {
        assert_eq!(
            encode("0").unwrap(),
            "0x3000000000000000000000000000000000000000000000000000000000000000"
        );
    }

    #[test]
    fn round_trips_short_text() {
        for text in ["0", "1", "2", "wave", "hello robot", "приве́т", ""] {
            let payload = encode(text).unwrap();
            assert_eq!(payload.len(), 2 + PARAM_BYTES * 2);
            assert_eq!(decode(&payload).unwrap(), text);
        }
    }

    #[test]
    fn round_trips_exactly_32_bytes() {
        let text = "a".repeat(PARAM_BYTES);
        assert_eq!(decode(&encode(&text).unwrap()).unwrap(), text);
    }

    #[test]
    fn rejects_oversize_input() {
        let text = "a".repeat(PARAM_BYTES + 1);
        assert_eq!(
            encode(&text),
            Err(CodecError::OversizeInput {
                len: PARAM_BYTES + 1
            })
        );
    }

    #[test]
    fn rejects_oversize_multibyte_input() {
        // 17 two-byte characters: 17 chars but 34 bytes of UTF-8.
        let text = "é".repeat(17);
        assert!(matches!(
            encode(&text),
            Err(CodecError::OversizeInput { len: 34 })
        ));
    }

    #[test]
    fn rejects_missing_prefix() {
        let payload = "30".to_owned() + &"00".repeat(31);
        assert_eq!(decode(&payload), Err(CodecError::MalformedPrefix));
    }

    #[test]
    fn rejects_short_payload() {
        let payload = format!("0x{}", "00".repeat(31));
        assert_eq!(decode(&payload), Err(CodecError::WrongLength { digits: 62 }));
    }

    #[test]
    fn rejects_long_payload() {
        let payload = format!("0x{}", "00".repeat(33));
        assert_eq!(decode(&payload), Err(CodecError::WrongLength { digits: 66 }));
    }

    #[test]
    fn rejects_non_hex_digits() {
        let payload = format!("0xzz{}", "00".repeat(31));
        assert!(matches!(decode(&payload), Err(CodecError::InvalidHex(_))));
    }

    #[test]
    fn rejects_invalid_utf8_content() {
        // 0xff is never valid UTF-8.
        let payload = format!("0xff{}", "00".repeat(31));
        assert!(matches!(decode(&payload), Err(CodecError::Encoding(_))));
    }

    #[test]
    fn all_zero_payload_decodes_to_empty_text() {
        let payload = format!("0x{}", "00".repeat(32));
        assert_eq!(decode(&payload).unwrap(), "");
    }

    #[test]
    fn decode_keeps_interior_nul() {
        // "0\01" followed by padding: the interior NUL sits ahead of the last
        // non-zero byte, so only the trailing run is treated as padding.
        let payload = format!("0x300031{}", "00".repeat(29));
        assert_eq!(decode(&payload).unwrap(), "0\u{0}1");
    }

    #[test]
    fn trailing_nul_in_text_does_not_round_trip() {
        // Known limitation: a zero byte at the end of the text is swallowed
        // together with the padding.
        let payload = encode("0\u{0}").unwrap();
        assert_eq!(decode(&payload).unwrap(), "0");
    }
}
