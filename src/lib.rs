// SPDX-License-Identifier: GPL-3.0-or-later

/*
 *  src/lib.rs - Decoder library for Chameleon binary event logs.
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
 * # `chameleon_log` Crate
 *
 * A library for decoding the binary event log recorded by Chameleon RFID
 * emulators.
 *
 * A log is a flat sequence of records, each with a 4-byte header followed by
 * a payload:
 *
 * | Offset | Size | Field                      |
 * |--------|------|----------------------------|
 * | 0      | 1    | Event code                 |
 * | 1      | 1    | Data length                |
 * | 2      | 2    | Timestamp (big-endian)     |
 * | 4      | N    | Payload                    |
 *
 * The crate is split into stages:
 *
 * 1. [reader]: Splits the byte stream into raw records.
 * 2. [event]: Maps each event code to a name and payload [decoder].
 * 3. [parity]: Unpacks parity-framed codec payloads.
 * 4. [parser]: Decodes records into [parser::LogEntry] values.
 *
 * ## Usage Example
 *
 * ```no_run
 * use chameleon_log::parser::ParsedLog;
 *
 * fn main() -> Result<(), Box<dyn std::error::Error>> {
 *     // Decode the whole log
 *     let parsed = ParsedLog::from_filename("log.bin")?;
 *
 *     // Access decoded entries
 *     for entry in &parsed.entries {
 *         println!("{} +{}: {}", entry.event_name, entry.delta_timestamp, entry.data);
 *     }
 *
 *     Ok(())
 * }
 * ```
 */

pub mod decoder;
pub mod error;
pub mod event;
pub mod parity;
pub mod parser;
pub mod reader;

pub use error::LogError;
