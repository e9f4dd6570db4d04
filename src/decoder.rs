// SPDX-License-Identifier: GPL-3.0-or-later

/*
 *  src/decoder.rs - Payload decoders for Chameleon event logs.
 *  Copyright (C) 2026  Forest Crossman <cyrozap@gmail.com>
 *
 *  This program is free software: you can redistribute it and/or modify
 *  it under the terms of the GNU General Public License as published by
 *  the Free Software Foundation, either version 3 of the License, or
 *  (at your option) any later version.
 *
 *  This program is distributed in the hope that it will be useful,
 *  but WITHOUT ANY WARRANTY; without even the implied warranty of
 *  MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
 *  GNU General Public License for more details.
 *
 *  You should have received a copy of the GNU General Public License
 *  along with this program.  If not, see <https://www.gnu.org/licenses/>.
 */

use log::warn;

use crate::parity::check_parity;

/// Marker appended to parity-decoded data when a parity check fails.
pub const PARITY_VIOLATION_MARKER: char = '!';

/// The ways an event's payload can be turned into a string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decoder {
    /// Discards the payload.
    Empty,
    /// ASCII text. Bytes outside the ASCII range become U+FFFD.
    Text,
    /// Lowercase hex, two digits per byte.
    RawHex,
    /// Parity-framed bytes, unpacked and rendered as hex. A trailing
    /// [PARITY_VIOLATION_MARKER] flags a failed parity check.
    ParityHex,
}

impl Decoder {
    /// Decodes a payload into its string representation.
    pub fn decode(&self, payload: &[u8]) -> String {
        match self {
            Decoder::Empty => String::new(),
            Decoder::Text => decode_text(payload),
            Decoder::RawHex => hex::encode(payload),
            Decoder::ParityHex => decode_parity_hex(payload),
        }
    }
}

fn decode_text(payload: &[u8]) -> String {
    let text: String = payload
        .iter()
        .map(|&b| if b.is_ascii() { b as char } else { '\u{FFFD}' })
        .collect();

    if !payload.is_ascii() {
        warn!(
            "Replaced non-ASCII bytes in text payload: {}",
            hex::encode(payload)
        );
    }

    text
}

fn decode_parity_hex(payload: &[u8]) -> String {
    let checked = check_parity(payload);
    let mut data = hex::encode(&checked.data);
    if !checked.valid {
        warn!("Parity violation in payload: {}", hex::encode(payload));
        data.push(PARITY_VIOLATION_MARKER);
    }
    data
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::parity::pack_parity;

    #[test]
    fn test_empty() {
        assert_eq!(Decoder::Empty.decode(b"ignored"), "");
    }

    #[test]
    fn test_text() {
        assert_eq!(Decoder::Text.decode(b"OK"), "OK");
        assert_eq!(Decoder::Text.decode(b""), "");
    }

    #[test]
    fn test_text_replaces_non_ascii() {
        assert_eq!(Decoder::Text.decode(&[b'A', 0xC3, b'B']), "A\u{FFFD}B");
    }

    #[test]
    fn test_raw_hex() {
        assert_eq!(Decoder::RawHex.decode(&[0xDE, 0xAD]), "dead");
        assert_eq!(Decoder::RawHex.decode(&[0x00, 0x0F, 0xF0]), "000ff0");
    }

    #[test]
    fn test_parity_hex() {
        let packed = pack_parity(&[0x93, 0x20]);
        assert_eq!(Decoder::ParityHex.decode(&packed), "9320");
    }

    #[test]
    fn test_parity_hex_short_frame() {
        assert_eq!(Decoder::ParityHex.decode(&[0x26]), "26");
    }

    #[test]
    fn test_parity_hex_violation() {
        let mut packed = pack_parity(&[0x93, 0x20]);
        packed[1] ^= 0x01;
        let decoded = Decoder::ParityHex.decode(&packed);
        assert!(decoded.ends_with(PARITY_VIOLATION_MARKER));
        assert_eq!(decoded, "9300!");
    }
}
