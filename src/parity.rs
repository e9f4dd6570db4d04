// SPDX-License-Identifier: GPL-3.0-or-later

/*
 *  src/parity.rs - Parity bit validation for Chameleon codec frames.
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
 * # `parity` Module
 *
 * Frames captured with parity are stored as a packed bit stream of 9-bit
 * groups, LSB first: eight data bits followed by one parity bit. A group is
 * valid when its parity bit is the complement of the parity of its data bits,
 * i.e. when the whole group holds an odd number of set bits.
 *
 * ## Usage Example
 *
 * ```
 * use chameleon_log::parity::check_parity;
 *
 * // 0x93 has four set bits, so its parity bit is 1.
 * let checked = check_parity(&[0x93, 0x01]);
 * assert!(checked.valid);
 * assert_eq!(checked.data, vec![0x93]);
 * ```
 */

const GROUP_BITS: usize = 9;
const PARITY_BIT_INDEX: usize = 8;

/// The result of unpacking a parity-framed payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParityCheck {
    /// Whether every group passed its parity check.
    pub valid: bool,
    /// The unpacked data bytes.
    ///
    /// On a violation, groups after the failing one are left zeroed.
    pub data: Vec<u8>,
}

/// Unpacks a parity-framed payload and validates each group's parity bit.
///
/// Single-byte frames carry no parity and are passed through unchanged.
/// Trailing bits that do not fill a whole group are discarded.
pub fn check_parity(data: &[u8]) -> ParityCheck {
    // Short frame, no parity bit
    if data.len() == 1 {
        return ParityCheck {
            valid: true,
            data: data.to_vec(),
        };
    }

    let bit_count = (data.len() * 8 / GROUP_BITS) * GROUP_BITS;
    let mut unpacked = vec![0u8; bit_count / GROUP_BITS];

    let mut ones = 0u32;
    for i in 0..bit_count {
        let bit = (data[i / 8] >> (i % 8)) & 0x01;

        if i % GROUP_BITS == PARITY_BIT_INDEX {
            if (ones % 2 == 1) == (bit == 1) {
                return ParityCheck {
                    valid: false,
                    data: unpacked,
                };
            }
            ones = 0;
        } else {
            ones += u32::from(bit);
            unpacked[i / GROUP_BITS] |= bit << (i % GROUP_BITS);
        }
    }

    ParityCheck {
        valid: true,
        data: unpacked,
    }
}

/// Packs bytes into parity-framed groups, the inverse of [check_parity].
#[cfg(test)]
pub(crate) fn pack_parity(data: &[u8]) -> Vec<u8> {
    let bit_count = data.len() * GROUP_BITS;
    let mut packed = vec![0u8; bit_count.div_ceil(8)];

    for (n, byte) in data.iter().enumerate() {
        let parity = u8::from(byte.count_ones() % 2 == 0);
        for b in 0..GROUP_BITS {
            let bit = if b == PARITY_BIT_INDEX {
                parity
            } else {
                (byte >> b) & 0x01
            };
            let i = n * GROUP_BITS + b;
            packed[i / 8] |= bit << (i % 8);
        }
    }

    packed
}
