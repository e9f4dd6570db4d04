// SPDX-License-Identifier: GPL-3.0-or-later

/*
 *  src/parser.rs - Parser library for Chameleon event logs.
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
 * # `parser` Module
 *
 * This module turns a raw Chameleon event log into a sequence of decoded
 * [LogEntry] values.
 *
 * ## Usage Example
 *
 * ```no_run
 * use std::fs::File;
 * use std::io::BufReader;
 *
 * use chameleon_log::parser::LogEntries;
 *
 * fn main() -> Result<(), Box<dyn std::error::Error>> {
 *     // Open the log
 *     let file = File::open("log.bin")?;
 *     let reader = BufReader::new(file);
 *
 *     // Decode entries as they are read
 *     for entry in LogEntries::new(reader) {
 *         let entry = entry?;
 *         println!("{:>5} {} {}", entry.delta_timestamp, entry.event_name, entry.data);
 *     }
 *
 *     Ok(())
 * }
 * ```
 */

use std::fs::File;
use std::io::BufReader;
use std::io::prelude::*;
use std::iter::FusedIterator;

use log::debug;

use crate::decoder::{Decoder, PARITY_VIOLATION_MARKER};
use crate::error::LogError;
use crate::event::lookup;
use crate::reader::read_record;

/// Returns the time elapsed between two device timestamps.
///
/// The device clock is 16 bits wide, so a `current` value below `last` means
/// the clock wrapped around in between.
pub fn delta_timestamp(last: u16, current: u16) -> u16 {
    current.wrapping_sub(last)
}

/// A decoded log entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    /// The raw event code.
    pub event_code: u8,
    /// The display name of the event.
    pub event_name: &'static str,
    /// The payload length declared in the record header.
    pub data_length: u8,
    /// The device timestamp.
    pub timestamp: u16,
    /// Time elapsed since the previous entry, or since zero for the first.
    pub delta_timestamp: u16,
    /// The decoded payload.
    pub data: String,
}

impl LogEntry {
    /// Whether the payload passed its parity check.
    ///
    /// Always `true` for events that aren't parity-framed.
    pub fn parity_ok(&self) -> bool {
        lookup(self.event_code).decoder != Decoder::ParityHex
            || !self.data.ends_with(PARITY_VIOLATION_MARKER)
    }
}

/// An iterator that decodes log entries from a byte stream.
///
/// Iteration ends at the end of the stream, at a truncated header, or at the
/// `EMPTY` event. An I/O error is yielded once and also ends iteration.
pub struct LogEntries<R> {
    reader: R,
    last_timestamp: u16,
    done: bool,
}

impl<R: Read> LogEntries<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            last_timestamp: 0,
            done: false,
        }
    }
}

impl<R: Read> Iterator for LogEntries<R> {
    type Item = Result<LogEntry, LogError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let record = match read_record(&mut self.reader) {
            Ok(Some(record)) => record,
            Ok(None) => {
                self.done = true;
                return None;
            }
            Err(e) => {
                self.done = true;
                return Some(Err(e));
            }
        };

        let event = lookup(record.event_code);
        let data = event.decoder.decode(&record.payload);

        let delta = delta_timestamp(self.last_timestamp, record.timestamp);
        self.last_timestamp = record.timestamp;

        debug!(
            "{} at {} (+{}): {}",
            event.name, record.timestamp, delta, data
        );

        Some(Ok(LogEntry {
            event_code: record.event_code,
            event_name: event.name,
            data_length: record.data_length,
            timestamp: record.timestamp,
            delta_timestamp: delta,
            data,
        }))
    }
}

impl<R: Read> FusedIterator for LogEntries<R> {}

/// A fully decoded event log.
#[derive(Debug)]
pub struct ParsedLog {
    /// The log entries, in the order they were recorded.
    pub entries: Vec<LogEntry>,
}

impl ParsedLog {
    /// Decodes every entry from a byte stream.
    ///
    /// # Arguments
    ///
    /// * `reader` - The raw log data.
    ///
    /// # Returns
    ///
    /// A `Result` containing the parsed `ParsedLog` or an I/O error.
    pub fn from_reader(reader: impl Read) -> Result<Self, LogError> {
        let entries = LogEntries::new(reader).collect::<Result<Vec<_>, _>>()?;
        Ok(Self { entries })
    }

    pub fn from_bytes(data: &[u8]) -> Result<Self, LogError> {
        Self::from_reader(data)
    }

    pub fn from_filename(filename: &str) -> Result<Self, LogError> {
        let file = File::open(filename)?;
        Self::from_reader(BufReader::new(file))
    }
}
