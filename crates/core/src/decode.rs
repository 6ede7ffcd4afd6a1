//! Percent-decoding of arguments and input lines.
//!
//! This module implements the decoding half of percent-run: a total,
//! byte-level percent decoder. Decoding never fails. Malformed escapes are
//! passed through literally instead of being rejected, so callers can hand
//! any byte sequence to [`decode`] without a fallback path.

use std::ffi::OsString;

/// Decodes percent-escapes in `input`, returning the raw decoded bytes.
///
/// The scan is a single left-to-right pass. A `%` followed by two hex digits
/// (case-insensitive) is replaced by the byte those digits name; any other
/// `%` is emitted literally and the bytes after it are re-examined as
/// ordinary input on the next iteration, not consumed. Exactly one decoding
/// pass is applied: `%2520` comes out as `%20`, never as a space.
///
/// Plus signs are ordinary bytes. Callers that want a space must send `%20`;
/// `+` is never translated, unlike form-urlencoded decoding.
///
/// Decoding works on bytes, not characters. A multi-byte UTF-8 sequence
/// escaped byte-by-byte (`%C3%A9`) is reconstructed correctly because each
/// hex pair becomes one byte and the bytes are simply concatenated.
pub fn decode(input: &[u8]) -> Vec<u8> {
    let mut decoded = Vec::with_capacity(input.len());
    let mut cursor = 0;

    while cursor < input.len() {
        let byte = input[cursor];

        if byte == b'%' {
            let high = input.get(cursor + 1).copied().and_then(hex_value);
            let low = input.get(cursor + 2).copied().and_then(hex_value);

            if let (Some(high), Some(low)) = (high, low) {
                decoded.push(high << 4 | low);
                cursor += 3;
                continue;
            }
        }

        decoded.push(byte);
        cursor += 1;
    }

    decoded
}

/// Decodes one whole command-line argument into an OS-native string, ready
/// to be passed to `Command::arg`.
///
/// On Unix the decoded bytes are carried over losslessly, so an argument can
/// decode to bytes that are not valid UTF-8. Elsewhere the decoded bytes are
/// converted lossily; arguments are expected to be UTF-8-safe.
pub fn decode_os(argument: &str) -> OsString {
    #[cfg(unix)]
    {
        use std::os::unix::ffi::OsStringExt;

        OsString::from_vec(decode(argument.as_bytes()))
    }

    #[cfg(not(unix))]
    {
        OsString::from(String::from_utf8_lossy(&decode(argument.as_bytes())).into_owned())
    }
}

fn hex_value(byte: u8) -> Option<u8> {
    match byte {
        b'0'..=b'9' => Some(byte - b'0'),
        b'a'..=b'f' => Some(byte - b'a' + 10),
        b'A'..=b'F' => Some(byte - b'A' + 10),
        _ => None,
    }
}
