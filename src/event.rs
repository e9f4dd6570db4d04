// SPDX-License-Identifier: GPL-3.0-or-later

/*
 *  src/event.rs - Event type table for Chameleon event logs.
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

/*!
 * # `event` Module
 *
 * Maps the one-byte event code of each log record to a display name and the
 * [Decoder] used for its payload. Every code has an entry; codes the firmware
 * doesn't define resolve to `UNKNOWN` with a raw hex decoder.
 *
 * ## Usage Example
 *
 * ```
 * use chameleon_log::decoder::Decoder;
 * use chameleon_log::event::lookup;
 *
 * let event = lookup(0x45);
 * assert_eq!(event.name, "CODEC RX SNI READER W/PARITY");
 * assert_eq!(event.decoder, Decoder::ParityHex);
 * ```
 */

use crate::decoder::Decoder;

/// Event code of the `EMPTY` event, which also marks the end of the log.
pub const EMPTY_EVENT_CODE: u8 = 0x00;

const EMPTY_NAME: &str = "EMPTY";
const UNKNOWN_NAME: &str = "UNKNOWN";

/// An entry in the event type table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EventType {
    /// The event code this entry is stored under.
    pub code: u8,
    /// The display name of the event.
    pub name: &'static str,
    /// The decoder for the event's payload.
    pub decoder: Decoder,
}

impl EventType {
    /// Whether this event marks the end of the log.
    pub fn is_sentinel(&self) -> bool {
        self.name == EMPTY_NAME
    }
}

const KNOWN_EVENT_TYPES: [(u8, &str, Decoder); 29] = [
    (EMPTY_EVENT_CODE, EMPTY_NAME, Decoder::Empty),
    (0x10, "GENERIC", Decoder::Text),
    (0x11, "CONFIG SET", Decoder::Text),
    (0x12, "SETTING SET", Decoder::Text),
    (0x13, "UID SET", Decoder::RawHex),
    (0x20, "RESET APP", Decoder::Empty),
    (0x40, "CODEC RX", Decoder::RawHex),
    (0x41, "CODEC TX", Decoder::RawHex),
    (0x42, "CODEC RX W/PARITY", Decoder::RawHex),
    (0x43, "CODEC TX W/PARITY", Decoder::RawHex),
    (0x44, "CODEC RX SNI READER", Decoder::RawHex),
    (0x45, "CODEC RX SNI READER W/PARITY", Decoder::ParityHex),
    (0x46, "CODEC RX SNI CARD", Decoder::RawHex),
    (0x47, "CODEC RX SNI CARD W/PARITY", Decoder::ParityHex),
    (0x80, "APP READ", Decoder::RawHex),
    (0x81, "APP WRITE", Decoder::RawHex),
    (0x84, "APP INC", Decoder::RawHex),
    (0x85, "APP DEC", Decoder::RawHex),
    (0x86, "APP TRANSFER", Decoder::RawHex),
    (0x87, "APP RESTORE", Decoder::RawHex),
    (0x90, "APP AUTH", Decoder::RawHex),
    (0x91, "APP HALT", Decoder::RawHex),
    (0x92, "APP UNKNOWN", Decoder::RawHex),
    (0xA0, "APP AUTHING", Decoder::RawHex),
    (0xA1, "APP AUTHED", Decoder::RawHex),
    (0xC0, "APP AUTH FAILED", Decoder::RawHex),
    (0xC1, "APP CSUM FAILED", Decoder::RawHex),
    (0xC2, "APP NOT AUTHED", Decoder::RawHex),
    (0xFF, "BOOT", Decoder::RawHex),
];

const fn build_event_types() -> [EventType; 256] {
    let mut table = [EventType {
        code: 0,
        name: UNKNOWN_NAME,
        decoder: Decoder::RawHex,
    }; 256];

    let mut code = 0;
    while code < table.len() {
        table[code].code = code as u8;
        code += 1;
    }

    let mut i = 0;
    while i < KNOWN_EVENT_TYPES.len() {
        let (code, name, decoder) = KNOWN_EVENT_TYPES[i];
        table[code as usize] = EventType {
            code,
            name,
            decoder,
        };
        i += 1;
    }

    table
}

/// The complete event type table, indexed by event code.
pub static EVENT_TYPES: [EventType; 256] = build_event_types();

/// Looks up the event type for an event code.
pub fn lookup(code: u8) -> &'static EventType {
    &EVENT_TYPES[usize::from(code)]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_code_is_indexed_by_itself() {
        for (index, event) in EVENT_TYPES.iter().enumerate() {
            assert_eq!(usize::from(event.code), index);
        }
    }

    #[test]
    fn test_empty_is_sentinel() {
        let event = lookup(EMPTY_EVENT_CODE);
        assert_eq!(event.name, "EMPTY");
        assert_eq!(event.decoder, Decoder::Empty);
        assert!(event.is_sentinel());
    }

    #[test]
    fn test_known_codes() {
        assert_eq!(lookup(0x10).name, "GENERIC");
        assert_eq!(lookup(0x10).decoder, Decoder::Text);
        assert_eq!(lookup(0x20).decoder, Decoder::Empty);
        assert_eq!(lookup(0x42).name, "CODEC RX W/PARITY");
        assert_eq!(lookup(0x42).decoder, Decoder::RawHex);
        assert_eq!(lookup(0x47).decoder, Decoder::ParityHex);
        assert_eq!(lookup(0xFF).name, "BOOT");
    }

    #[test]
    fn test_unknown_code() {
        let event = lookup(0x99);
        assert_eq!(event.code, 0x99);
        assert_eq!(event.name, "UNKNOWN");
        assert_eq!(event.decoder, Decoder::RawHex);
        assert!(!event.is_sentinel());
    }

    #[test]
    fn test_only_empty_is_sentinel() {
        let sentinels: Vec<u8> = EVENT_TYPES
            .iter()
            .filter(|e| e.is_sentinel())
            .map(|e| e.code)
            .collect();
        assert_eq!(sentinels, vec![EMPTY_EVENT_CODE]);
    }
}
