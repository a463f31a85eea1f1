/*
 * Copyright (c) 2024.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use alloc::vec::Vec;

use log::{trace, warn};

use crate::bitplane::BitPlane;
use crate::constants::{RLE_LITERAL_BITS, RLE_RUN_FLAG, RLE_RUN_LENGTH_MASK, RLE_RUN_VALUE};
use crate::errors::BwrErrors;
use crate::options::DecoderOptions;

/// Decode one row of `width` bit values from the start of `data`
///
/// Returns the decoded row and the number of bytes consumed, which is how
/// a caller walking a concatenated plane finds where the next row starts.
///
/// A trailing literal block may carry more bits than the row has left;
/// those are encoder padding and are dropped, the returned row is always
/// exactly `width` cells.
///
/// # Errors
/// [`BwrErrors::TruncatedStream`] when `data` runs out before the row is
/// complete.
pub fn decode_row(data: &[u8], width: usize) -> Result<(Vec<u8>, usize), BwrErrors> {
    let mut row = Vec::with_capacity(width + RLE_LITERAL_BITS);
    let consumed = decode_row_into(data, width, &mut row)?;

    Ok((row, consumed))
}

/// Decode one row onto the end of `row`, returning bytes consumed.
fn decode_row_into(data: &[u8], width: usize, row: &mut Vec<u8>) -> Result<usize, BwrErrors> {
    let start = row.len();
    let mut consumed = 0;

    while row.len() - start < width {
        let block = match data.get(consumed) {
            Some(block) => *block,
            None => return Err(BwrErrors::TruncatedStream(width, row.len() - start))
        };
        consumed += 1;

        if block & RLE_RUN_FLAG != 0 {
            let value = u8::from(block & RLE_RUN_VALUE != 0);
            let length = usize::from(block & RLE_RUN_LENGTH_MASK) + 1;

            row.resize(row.len() + length, value);
        } else {
            for shift in (0..RLE_LITERAL_BITS).rev() {
                row.push((block >> shift) & 1);
            }
        }
    }
    // the last block may overshoot the row width, the extra bits are
    // padding and not part of the image
    row.truncate(start + width);

    Ok(consumed)
}

/// Run length decoder for a bit-plane
///
/// The stream has no header, so the width and height the plane was
/// encoded with must be supplied by the caller.
///
/// # Example
/// ```
/// use bwr_rle::{BitPlane, BwrRleDecoder, BwrRleEncoder};
///
/// let plane = BitPlane::from_bits(vec![0, 1, 0, 0, 1, 0], 3, 2).unwrap();
/// let encoded = BwrRleEncoder::new(&plane).encode();
///
/// let decoded = BwrRleDecoder::new(&encoded, 3, 2).decode().unwrap();
/// assert_eq!(decoded, plane);
/// ```
pub struct BwrRleDecoder<'a> {
    data:    &'a [u8],
    width:   usize,
    height:  usize,
    options: DecoderOptions
}

impl<'a> BwrRleDecoder<'a> {
    /// Create a new decoder with the default options
    ///
    /// # Arguments
    /// - `data`: The concatenated row encodings
    /// - `width`: Width the plane was encoded with
    /// - `height`: Height the plane was encoded with
    pub fn new(data: &'a [u8], width: usize, height: usize) -> BwrRleDecoder<'a> {
        BwrRleDecoder::new_with_options(data, width, height, DecoderOptions::default())
    }

    /// Create a new decoder that obeys the specified restrictions
    ///
    /// E.g can be used to set width and height limits to prevent OOM
    /// attacks, or to accept streams with trailing garbage
    ///
    /// # Example
    /// ```
    /// use bwr_rle::{BwrRleDecoder, DecoderOptions};
    ///
    /// let options = DecoderOptions::default().set_strict_mode(false);
    /// let decoder = BwrRleDecoder::new_with_options(&[0xc4, 0xff], 5, 1, options);
    /// // the second byte is ignored instead of rejected
    /// assert!(decoder.decode().is_ok());
    /// ```
    pub fn new_with_options(
        data: &'a [u8], width: usize, height: usize, options: DecoderOptions
    ) -> BwrRleDecoder<'a> {
        BwrRleDecoder {
            data,
            width,
            height,
            options
        }
    }

    /// Return the width and height the decoder was created with
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// Return the number of cells the decoded plane will hold, or `None`
    /// if `width * height` overflows a usize
    pub const fn output_buffer_size(&self) -> Option<usize> {
        self.width.checked_mul(self.height)
    }

    /// Decode the plane
    ///
    /// Row boundaries are re-derived while decoding: each row consumes
    /// exactly as many bytes as its blocks span, and the next row starts
    /// on the following byte.
    ///
    /// # Errors
    /// - [`BwrErrors::TooLargeDimensions`] when a dimension exceeds the
    ///   configured limit
    /// - [`BwrErrors::TruncatedStream`] when the stream ends mid-row
    /// - [`BwrErrors::TrailingBytes`] when bytes are left over after the
    ///   last row and the decoder is in strict mode
    pub fn decode(&self) -> Result<BitPlane, BwrErrors> {
        if self.width > self.options.max_width() {
            return Err(BwrErrors::TooLargeDimensions(
                self.options.max_width(),
                self.width
            ));
        }
        if self.height > self.options.max_height() {
            return Err(BwrErrors::TooLargeDimensions(
                self.options.max_height(),
                self.height
            ));
        }
        let size = self
            .output_buffer_size()
            .ok_or(BwrErrors::Generic("plane dimensions overflow usize"))?;

        let mut bits = Vec::with_capacity(size);
        let mut position = 0;

        for _ in 0..self.height {
            position += decode_row_into(&self.data[position..], self.width, &mut bits)?;
        }
        trace!("Decoded {} rows from {} bytes", self.height, position);

        if position != self.data.len() {
            let left = self.data.len() - position;

            if self.options.strict_mode() {
                return Err(BwrErrors::TrailingBytes(left));
            }
            warn!("{left} trailing bytes left after the last row, ignoring them");
        }

        Ok(BitPlane::from_parts(bits, self.width, self.height))
    }
}

#[cfg(test)]
mod tests {
    use nanorand::{Rng, WyRand};

    use crate::bitplane::BitPlane;
    use crate::decoder::{decode_row, BwrRleDecoder};
    use crate::encoder::{encode_row, BwrRleEncoder};
    use crate::errors::BwrErrors;
    use crate::options::DecoderOptions;

    fn random_plane(rng: &mut WyRand, width: usize, height: usize) -> BitPlane {
        // random run lengths rather than uniform noise, so both block
        // kinds show up
        let mut bits = vec![];
        let mut value = 0_u8;

        while bits.len() < width * height {
            let len = rng.generate_range(1..=90_usize).min(width * height - bits.len());
            bits.resize(bits.len() + len, value);
            value ^= 1;
        }

        BitPlane::from_bits(bits, width, height).unwrap()
    }

    #[test]
    fn decodes_a_single_run_block() {
        let (row, consumed) = decode_row(&[0xc4], 5).unwrap();
        assert_eq!(row, [1, 1, 1, 1, 1]);
        assert_eq!(consumed, 1);
    }

    #[test]
    fn drops_literal_padding() {
        let (row, consumed) = decode_row(&[0x20], 3).unwrap();
        assert_eq!(row, [0, 1, 0]);
        assert_eq!(consumed, 1);
    }

    #[test]
    fn empty_row_needs_no_bytes() {
        let (row, consumed) = decode_row(&[], 0).unwrap();
        assert!(row.is_empty());
        assert_eq!(consumed, 0);
    }

    #[test]
    fn truncated_stream_is_an_error() {
        // one run block carrying 5 of the 6 requested bits
        let err = decode_row(&[0xc4], 6).unwrap_err();
        assert!(matches!(err, BwrErrors::TruncatedStream(6, 5)));
    }

    #[test]
    fn foreign_run_overshoot_is_truncated() {
        // a 64 pixel run against width 10, our encoder would not emit
        // this but the contract is exactly `width` cells either way
        let (row, consumed) = decode_row(&[0xff], 10).unwrap();
        assert_eq!(row, [1; 10]);
        assert_eq!(consumed, 1);
    }

    #[test]
    fn strict_mode_rejects_trailing_bytes() {
        let err = BwrRleDecoder::new(&[0xc4, 0x00], 5, 1).decode().unwrap_err();
        assert!(matches!(err, BwrErrors::TrailingBytes(1)));
    }

    #[test]
    fn lenient_mode_ignores_trailing_bytes() {
        let options = DecoderOptions::default().set_strict_mode(false);
        let plane = BwrRleDecoder::new_with_options(&[0xc4, 0x00], 5, 1, options)
            .decode()
            .unwrap();

        assert_eq!(plane.bits(), &[1, 1, 1, 1, 1]);
    }

    #[test]
    fn oversize_dimensions_are_rejected() {
        let options = DecoderOptions::default().set_max_width(16);
        let err = BwrRleDecoder::new_with_options(&[], 17, 1, options)
            .decode()
            .unwrap_err();

        assert!(matches!(err, BwrErrors::TooLargeDimensions(16, 17)));
    }

    #[test]
    fn row_roundtrip_over_short_widths() {
        let mut rng = WyRand::new_seed(0x7e57);

        for width in 0..=32 {
            let row: Vec<u8> = (0..width).map(|_| rng.generate_range(0..=1_u8)).collect();

            let mut encoded = vec![];
            encode_row(&row, &mut encoded);

            let (decoded, consumed) = decode_row(&encoded, width).unwrap();
            assert_eq!(decoded, row, "width {width}");
            assert_eq!(consumed, encoded.len(), "width {width}");
        }
    }

    #[test]
    fn plane_roundtrip() {
        let mut rng = WyRand::new_seed(0xdab);

        for (width, height) in [(1, 1), (5, 3), (7, 7), (64, 2), (250, 4), (13, 9), (200, 1)] {
            let plane = random_plane(&mut rng, width, height);
            let encoded = BwrRleEncoder::new(&plane).encode();
            let decoded = BwrRleDecoder::new(&encoded, width, height).decode().unwrap();

            assert_eq!(decoded, plane, "{width}x{height}");
        }
    }

    #[test]
    fn empty_plane_roundtrip() {
        let plane = BitPlane::from_bits(vec![], 0, 0).unwrap();
        let encoded = BwrRleEncoder::new(&plane).encode();
        assert!(encoded.is_empty());

        let decoded = BwrRleDecoder::new(&encoded, 0, 0).decode().unwrap();
        assert_eq!(decoded, plane);
    }
}
