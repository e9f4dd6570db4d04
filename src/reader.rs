// SPDX-License-Identifier: GPL-3.0-or-later

/*
 *  src/reader.rs - Record framing for Chameleon event logs.
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

use std::io::ErrorKind;
use std::io::prelude::*;

use log::{debug, trace, warn};

use crate::error::LogError;
use crate::event::lookup;

/// Size of a record header: event code, data length, and timestamp.
pub const HEADER_LEN: usize = 4;

/// A single undecoded record from the log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawRecord {
    /// The event code.
    pub event_code: u8,
    /// The payload length declared in the header.
    pub data_length: u8,
    /// The device timestamp, which wraps at 65536.
    pub timestamp: u16,
    /// The payload. Shorter than `data_length` if the log was cut off.
    pub payload: Vec<u8>,
}

/// Reads the next record from a log stream.
///
/// Returns `Ok(None)` when there are no more records: the stream ended, the
/// remaining bytes can't hold a header, or the record is the `EMPTY` event.
pub fn read_record(reader: &mut impl Read) -> Result<Option<RawRecord>, LogError> {
    let mut header = [0u8; HEADER_LEN];
    let n = read_up_to(reader, &mut header)?;
    if n == 0 {
        debug!("End of log data");
        return Ok(None);
    }
    if n < HEADER_LEN {
        debug!("Truncated header ({} of {} bytes), end of log", n, HEADER_LEN);
        return Ok(None);
    }

    let event_code = header[0];
    let data_length = header[1];
    let timestamp = u16::from_be_bytes([header[2], header[3]]);
    trace!(
        "Header: event 0x{:02x}, length {}, timestamp {}",
        event_code, data_length, timestamp
    );

    if lookup(event_code).is_sentinel() {
        debug!("EMPTY event, end of log");
        return Ok(None);
    }

    let mut payload = vec![0u8; usize::from(data_length)];
    let n = read_up_to(reader, &mut payload)?;
    if n < payload.len() {
        warn!(
            "Truncated payload for event 0x{:02x}: {} of {} bytes",
            event_code, n, data_length
        );
        payload.truncate(n);
    }

    Ok(Some(RawRecord {
        event_code,
        data_length,
        timestamp,
        payload,
    }))
}

/// Fills `buf` from the reader, stopping early only at end of stream.
fn read_up_to(reader: &mut impl Read, buf: &mut [u8]) -> Result<usize, LogError> {
    let mut filled = 0;
    while filled < buf.len() {
        match reader.read(&mut buf[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(LogError::Io(e)),
        }
    }
    Ok(filled)
}
