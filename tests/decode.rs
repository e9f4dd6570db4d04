// SPDX-License-Identifier: GPL-3.0-or-later

/*
 *  tests/decode.rs - End-to-end tests for Chameleon event log decoding.
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

use std::io::Cursor;

use chameleon_log::LogError;
use chameleon_log::parser::{LogEntries, LogEntry, ParsedLog};

// A session as the device records it: boot, a config change, a REQA/ATQA
// exchange, a sniffed frame with a broken parity bit, then erased flash.
const SESSION: &[u8] = &[
    0xFF, 0x00, 0x00, 0x00, // BOOT
    0x11, 0x0A, 0x00, 0x20, // CONFIG SET "MF_CLASSIC"
    b'M', b'F', b'_', b'C', b'L', b'A', b'S', b'S', b'I', b'C',
    0x40, 0x01, 0x01, 0x00, // CODEC RX
    0x26,
    0x41, 0x02, 0x01, 0x05, // CODEC TX
    0x04, 0x00,
    0x45, 0x03, 0xFF, 0xF0, // CODEC RX SNI READER W/PARITY
    0x93, 0x40, 0x00, // 0x93 with its parity bit clear
    0x20, 0x00, 0x00, 0x10, // RESET APP
    0x00, 0x00, 0x00, 0x00, // EMPTY
    0xFF, 0xFF, 0xFF, 0xFF,
];

fn entry(code: u8, name: &'static str, len: u8, ts: u16, delta: u16, data: &str) -> LogEntry {
    LogEntry {
        event_code: code,
        event_name: name,
        data_length: len,
        timestamp: ts,
        delta_timestamp: delta,
        data: data.to_string(),
    }
}

#[test]
fn test_decode_session() {
    let parsed = ParsedLog::from_bytes(SESSION).unwrap();

    assert_eq!(
        parsed.entries,
        vec![
            entry(0xFF, "BOOT", 0, 0, 0, ""),
            entry(0x11, "CONFIG SET", 10, 0x20, 0x20, "MF_CLASSIC"),
            entry(0x40, "CODEC RX", 1, 0x100, 0xE0, "26"),
            entry(0x41, "CODEC TX", 2, 0x105, 5, "0400"),
            entry(0x45, "CODEC RX SNI READER W/PARITY", 3, 0xFFF0, 0xFEEB, "9300!"),
            entry(0x20, "RESET APP", 0, 0x10, 0x20, ""),
        ]
    );
    assert!(!parsed.entries[4].parity_ok());
}

#[test]
fn test_streaming_matches_collected() {
    let streamed: Vec<LogEntry> = LogEntries::new(Cursor::new(SESSION))
        .collect::<Result<_, LogError>>()
        .unwrap();
    let collected = ParsedLog::from_bytes(SESSION).unwrap().entries;
    assert_eq!(streamed, collected);
}

#[test]
fn test_log_without_sentinel() {
    // Drop everything from the EMPTY record onward.
    let parsed = ParsedLog::from_bytes(&SESSION[..SESSION.len() - 8]).unwrap();
    assert_eq!(parsed.entries.len(), 6);
}

#[test]
fn test_missing_file() {
    let result = ParsedLog::from_filename("/nonexistent/chameleon.bin");
    assert!(matches!(result, Err(LogError::Io(_))));
}
