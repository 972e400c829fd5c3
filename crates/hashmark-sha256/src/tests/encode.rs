// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

// Tests for encode_utf8
//
// References:
// [1] RFC 3629: UTF-8, a transformation format of ISO 10646, Section 3
//     https://www.rfc-editor.org/rfc/rfc3629#section-3
// [2] RFC 2781: UTF-16, an encoding of ISO 10646, Section 2.2

use crate::encode::{CodeUnits, encode_utf8};
use crate::error::DigestError;

fn encode_units(units: &[u16]) -> Vec<u8> {
    encode_utf8(units).expect("Failed to encode_utf8(..)").to_vec()
}

#[test]
fn test_empty_input() {
    assert!(encode_units(&[]).is_empty());
    assert!(encode_utf8("").expect("Failed to encode_utf8(..)").is_empty());
}

#[test]
fn test_one_byte_range() {
    assert_eq!(encode_units(&[0x0000]), [0x00]);
    assert_eq!(encode_units(&[0x0041]), [0x41]);
    assert_eq!(encode_units(&[0x007F]), [0x7F]);
}

#[test]
fn test_two_byte_range() {
    // Lead 0xC0 | cp >> 6, continuation 0x80 | cp & 0x3F
    assert_eq!(encode_units(&[0x0080]), [0xC2, 0x80]);
    assert_eq!(encode_units(&[0x00E9]), [0xC3, 0xA9]);
    assert_eq!(encode_units(&[0x07FF]), [0xDF, 0xBF]);
}

#[test]
fn test_three_byte_range() {
    assert_eq!(encode_units(&[0x0800]), [0xE0, 0xA0, 0x80]);
    assert_eq!(encode_units(&[0x20AC]), [0xE2, 0x82, 0xAC]);
    assert_eq!(encode_units(&[0xD7FF]), [0xED, 0x9F, 0xBF]);
    // First code point above the surrogate block
    assert_eq!(encode_units(&[0xE000]), [0xEE, 0x80, 0x80]);
    assert_eq!(encode_units(&[0xFFFF]), [0xEF, 0xBF, 0xBF]);
}

#[test]
fn test_surrogate_pair_emits_four_bytes() {
    // U+1F600 GRINNING FACE = D83D DE00
    let bytes = encode_units(&[0xD83D, 0xDE00]);

    assert_eq!(bytes.len(), 4, "Non-BMP code point should be 4 bytes");
    assert_eq!(bytes, [0xF0, 0x9F, 0x98, 0x80]);

    // Lead byte 11110xxx, continuation bytes 10xxxxxx
    assert_eq!(bytes[0] & 0xF8, 0xF0);
    for byte in &bytes[1..] {
        assert_eq!(byte & 0xC0, 0x80);
    }
}

#[test]
fn test_surrogate_pair_bounds() {
    // U+10000 and U+10FFFF
    assert_eq!(encode_units(&[0xD800, 0xDC00]), [0xF0, 0x90, 0x80, 0x80]);
    assert_eq!(encode_units(&[0xDBFF, 0xDFFF]), [0xF4, 0x8F, 0xBF, 0xBF]);
}

#[test]
fn test_mixed_widths_match_std() {
    let text = "a\u{e9}\u{20ac}\u{1f600}z";
    let units: Vec<u16> = text.encode_utf16().collect();

    assert_eq!(encode_units(&units), text.as_bytes());
    assert_eq!(
        encode_utf8(text).expect("Failed to encode_utf8(..)").as_slice(),
        text.as_bytes()
    );
}

#[test]
fn test_trailing_high_surrogate_rejected() {
    let result = encode_utf8(&[0x0041u16, 0xD83D]);
    assert_eq!(
        result.map(|bytes| bytes.to_vec()),
        Err(DigestError::UnpairedSurrogate {
            index: 1,
            unit: 0xD83D
        })
    );
}

#[test]
fn test_high_surrogate_followed_by_non_surrogate_rejected() {
    let result = encode_utf8(&[0xD83Du16, 0x0042]);
    assert_eq!(
        result.map(|bytes| bytes.to_vec()),
        Err(DigestError::UnpairedSurrogate {
            index: 0,
            unit: 0xD83D
        })
    );
}

#[test]
fn test_high_surrogate_followed_by_high_surrogate_rejected() {
    // The first high surrogate is the unpaired one, even though the second
    // would pair with the trailing low surrogate.
    let result = encode_utf8(&[0xD83Du16, 0xD83D, 0xDE00]);
    assert_eq!(
        result.map(|bytes| bytes.to_vec()),
        Err(DigestError::UnpairedSurrogate {
            index: 0,
            unit: 0xD83D
        })
    );
}

#[test]
fn test_lone_low_surrogate_rejected() {
    let result = encode_utf8(&[0x0061u16, 0x0062, 0xDE00]);
    assert_eq!(
        result.map(|bytes| bytes.to_vec()),
        Err(DigestError::UnpairedSurrogate {
            index: 2,
            unit: 0xDE00
        })
    );
}

#[test]
fn test_reversed_pair_rejected() {
    let result = encode_utf8(&[0xDE00u16, 0xD83D]);
    assert_eq!(
        result.map(|bytes| bytes.to_vec()),
        Err(DigestError::UnpairedSurrogate {
            index: 0,
            unit: 0xDE00
        })
    );
}

#[test]
fn test_capacity_bound_holds() {
    let text = "\u{7ff}\u{800}\u{ffff}\u{10000}";
    let units: Vec<u16> = text.encode_utf16().collect();

    let encoded = encode_utf8(&units).expect("Failed to encode_utf8(..)");
    assert!(encoded.len() <= units.max_utf8_len());

    let encoded = encode_utf8(text).expect("Failed to encode_utf8(..)");
    assert!(encoded.len() <= text.max_utf8_len());
}

#[test]
fn test_all_input_impls_agree() {
    let text = String::from("caf\u{e9} \u{1f600}");
    let units: Vec<u16> = text.encode_utf16().collect();
    let array: [u16; 7] = [0x63, 0x61, 0x66, 0xE9, 0x20, 0xD83D, 0xDE00];

    let expected = text.as_bytes();
    assert_eq!(encode_utf8(&text).expect("String").as_slice(), expected);
    assert_eq!(encode_utf8(text.as_str()).expect("str").as_slice(), expected);
    assert_eq!(encode_utf8(&units).expect("Vec<u16>").as_slice(), expected);
    assert_eq!(encode_utf8(units.as_slice()).expect("[u16]").as_slice(), expected);
    assert_eq!(encode_utf8(&array).expect("[u16; N]").as_slice(), expected);
}
