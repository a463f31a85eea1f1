/*
 * Copyright (c) 2024.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use alloc::vec::Vec;

use log::trace;

use crate::bitplane::BitPlane;
use crate::constants::{RLE_LITERAL_BITS, RLE_MAX_RUN, RLE_RUN_FLAG};

/// Encode one row of bit values into `sink`, returning the number of
/// bytes written
///
/// `row` must contain only `0` and `1` cells, which [`BitPlane`] rows
/// guarantee. An empty row writes nothing.
///
/// [`BitPlane`]: crate::BitPlane
pub fn encode_row(row: &[u8], sink: &mut Vec<u8>) -> usize {
    let start = sink.len();
    let mut x = 0;

    while x < row.len() {
        let window = &row[x..row.len().min(x + RLE_LITERAL_BITS)];

        // decide whether a run or a literal block shall be used
        let run_value = if window.iter().all(|cell| *cell == 0) {
            Some(0_u8)
        } else if window.iter().all(|cell| *cell == 1) {
            Some(1_u8)
        } else {
            None
        };

        match run_value {
            Some(value) => {
                // the peek window only proved 7 pixels, the run itself may
                // continue up to the end of the row
                let run = row[x..]
                    .iter()
                    .take(RLE_MAX_RUN)
                    .take_while(|cell| **cell == value)
                    .count();

                sink.push(RLE_RUN_FLAG | (value << 6) | (run - 1) as u8);
                x += run;
            }
            None => {
                let mut literal = 0;

                for (pos, cell) in window.iter().enumerate() {
                    literal |= *cell << (6 - pos);
                }
                sink.push(literal);
                // a literal always stands for 7 pixels, bits past the row
                // end are padding the decoder drops
                x += RLE_LITERAL_BITS;
            }
        }
    }

    sink.len() - start
}

/// Run length encoder for a bit-plane
///
/// Every row is encoded independently and the per row encodings are
/// concatenated in row order with no delimiter, so the matching
/// [`BwrRleDecoder`] must be given the same width and height back.
///
/// [`BwrRleDecoder`]: crate::BwrRleDecoder
///
/// # Example
/// ```
/// use bwr_rle::{BitPlane, BwrRleEncoder};
///
/// let plane = BitPlane::from_bits(vec![1; 128 * 64], 128, 64).unwrap();
/// let encoded = BwrRleEncoder::new(&plane).encode();
/// // each row is two maximum length runs
/// assert_eq!(encoded.len(), 2 * 64);
/// ```
pub struct BwrRleEncoder<'a> {
    plane: &'a BitPlane
}

impl<'a> BwrRleEncoder<'a> {
    /// Create a new encoder which will encode the given plane
    pub const fn new(plane: &'a BitPlane) -> BwrRleEncoder<'a> {
        BwrRleEncoder { plane }
    }

    /// Encode the plane, returning the concatenated row encodings
    ///
    /// Encoding cannot fail: the plane's shape and cell values were
    /// already validated when it was built.
    pub fn encode(&self) -> Vec<u8> {
        // a row never takes more blocks than ceil(width / 7) plus one
        // short run at its end
        let estimate = (self.plane.width() / RLE_LITERAL_BITS + 2) * self.plane.height();
        let mut sink = Vec::with_capacity(estimate);

        self.encode_into(&mut sink);

        sink
    }

    /// Encode the plane into an existing sink, returning the number of
    /// bytes written
    pub fn encode_into(&self, sink: &mut Vec<u8>) -> usize {
        let start = sink.len();

        for row in self.plane.rows() {
            encode_row(row, sink);
        }
        trace!(
            "Encoded {} rows into {} bytes",
            self.plane.height(),
            sink.len() - start
        );

        sink.len() - start
    }
}

#[cfg(test)]
mod tests {
    use crate::bitplane::BitPlane;
    use crate::encoder::{encode_row, BwrRleEncoder};

    fn encode_one(row: &[u8]) -> Vec<u8> {
        let mut sink = vec![];
        encode_row(row, &mut sink);
        sink
    }

    #[test]
    fn empty_row_encodes_to_nothing() {
        assert!(encode_one(&[]).is_empty());
    }

    #[test]
    fn short_uniform_row_is_one_run() {
        // 0x80 | (1 << 6) | (5 - 1)
        assert_eq!(encode_one(&[1, 1, 1, 1, 1]), [0xc4]);
    }

    #[test]
    fn mixed_window_is_one_literal() {
        // 0b0_0100000, the four trailing zeros are padding
        assert_eq!(encode_one(&[0, 1, 0]), [0x20]);
    }

    #[test]
    fn long_run_spans_several_blocks() {
        // 130 set pixels split 64 + 64 + 2
        assert_eq!(encode_one(&[1; 130]), [0xff, 0xff, 0xc1]);
    }

    #[test]
    fn run_stops_at_the_first_differing_pixel() {
        let mut row = vec![0; 9];
        row.extend_from_slice(&[1, 0, 1, 0, 1, 0, 1]);
        // a run of nine zeros, then one literal
        assert_eq!(encode_one(&row), [0x88, 0x55]);
    }

    #[test]
    fn runs_are_maximal() {
        use nanorand::{Rng, WyRand};

        let mut rng = WyRand::new_seed(0x42);
        for _ in 0..50 {
            // rows made purely of runs with random lengths
            let mut row = vec![];
            let mut value = 0_u8;

            while row.len() < 400 {
                let len = rng.generate_range(1..=100_usize);
                row.resize(row.len() + len, value);
                value ^= 1;
            }
            let encoded = encode_one(&row);

            for pair in encoded.windows(2) {
                let both_runs = pair[0] & 0x80 != 0 && pair[1] & 0x80 != 0;

                if both_runs && (pair[0] ^ pair[1]) & 0x40 == 0 {
                    // two same-value runs in a row are only legal when the
                    // first one hit the 64 pixel cap
                    assert_eq!(pair[0] & 0x3f, 63);
                }
            }
        }
    }

    #[test]
    fn plane_encoding_concatenates_row_encodings() {
        let plane = BitPlane::from_bits(vec![1, 1, 1, 0, 1, 0], 3, 2).unwrap();
        let encoded = BwrRleEncoder::new(&plane).encode();

        let mut expected = vec![];
        encode_row(plane.row(0), &mut expected);
        encode_row(plane.row(1), &mut expected);

        assert_eq!(encoded, expected);
    }
}
