// SPDX-License-Identifier: GPL-3.0-or-later

/*
 *  dump.rs - CSV export demo for Chameleon event logs.
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

use std::fs::File;
use std::io;
use std::io::BufReader;

use clap::Parser;

use chameleon_log::parser::*;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// The log file to read.
    file: String,

    /// Don't write a header row.
    #[arg(long)]
    no_header: bool,
}

fn main() {
    env_logger::init();

    let args = Args::parse();

    let file = match File::open(&args.file) {
        Ok(f) => f,
        Err(error) => {
            eprintln!("Error opening file {:?}: {:?}", &args.file, error);
            return;
        }
    };

    let mut writer = csv::Writer::from_writer(io::stdout());

    if !args.no_header {
        if let Err(e) = writer.write_record([
            "eventName",
            "dataLength",
            "timestamp",
            "deltaTimestamp",
            "data",
        ]) {
            eprintln!("Failed to write header: {}", e);
            return;
        }
    }

    // Stream entries so partial output survives a read error
    for entry in LogEntries::new(BufReader::new(file)) {
        let entry = match entry {
            Ok(e) => e,
            Err(error) => {
                eprintln!("Error reading file {:?}: {:?}", &args.file, error);
                break;
            }
        };

        if let Err(e) = writer.write_record([
            entry.event_name.to_string(),
            entry.data_length.to_string(),
            entry.timestamp.to_string(),
            entry.delta_timestamp.to_string(),
            entry.data,
        ]) {
            eprintln!("Failed to write entry: {}", e);
            return;
        }
    }

    if let Err(e) = writer.flush() {
        eprintln!("Failed to flush output: {}", e);
    }
}
