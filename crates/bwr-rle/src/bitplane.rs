/*
 * Copyright (c) 2024.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use alloc::vec::Vec;
use core::slice::ChunksExact;

use crate::errors::BwrErrors;

/// Pixel value a cell must match to be set in the black plane.
pub const BWR_BLACK: [u8; 3] = [0x00, 0x00, 0x00];
/// Pixel value a cell must match to be set in the red plane.
pub const BWR_RED: [u8; 3] = [0xff, 0x00, 0x00];

/// A single monochrome plane of an image
///
/// Cells are stored row major, one byte per cell, and every cell is
/// either `0` or `1`. The constructors validate shape and cell values,
/// so a `BitPlane` that exists is always well formed and the encoders
/// taking one cannot fail.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BitPlane {
    width:  usize,
    height: usize,
    bits:   Vec<u8>
}

impl BitPlane {
    /// Extract the plane of one target color from an RGB raster
    ///
    /// A cell is set iff the corresponding pixel equals `target` exactly,
    /// per channel, no tolerance. The raster is expected row major with
    /// three bytes per pixel.
    ///
    /// # Arguments
    /// - `pixels`: The RGB pixels, length must be `width * height * 3`
    /// - `width`: Raster width in pixels
    /// - `height`: Raster height in pixels
    /// - `target`: The color whose pixels make up this plane, callers
    ///   producing e-paper frames use [`BWR_BLACK`] and [`BWR_RED`]
    ///
    /// # Example
    /// ```
    /// use bwr_rle::{BitPlane, BWR_RED};
    /// // one black pixel, one red pixel
    /// let raster = [0x00, 0x00, 0x00, 0xff, 0x00, 0x00];
    /// let red = BitPlane::from_raster(&raster, 2, 1, BWR_RED).unwrap();
    /// assert_eq!(red.bits(), &[0, 1]);
    /// ```
    pub fn from_raster(
        pixels: &[u8], width: usize, height: usize, target: [u8; 3]
    ) -> Result<BitPlane, BwrErrors> {
        let cells = checked_area(width, height)?;
        let expected = cells
            .checked_mul(3)
            .ok_or(BwrErrors::Generic("raster byte length overflows usize"))?;

        if pixels.len() != expected {
            return Err(BwrErrors::DimensionMismatch(expected, pixels.len()));
        }

        let mut bits = Vec::with_capacity(cells);

        for chunk in pixels.chunks_exact(3) {
            bits.push(u8::from(chunk == target));
        }

        Ok(BitPlane {
            width,
            height,
            bits
        })
    }

    /// Build a plane from raw cell values
    ///
    /// # Arguments
    /// - `bits`: Cell values, row major, length must be `width * height`
    ///   and every value `0` or `1`
    /// - `width`: Plane width in cells
    /// - `height`: Plane height in cells
    pub fn from_bits(bits: Vec<u8>, width: usize, height: usize) -> Result<BitPlane, BwrErrors> {
        let cells = checked_area(width, height)?;

        if bits.len() != cells {
            return Err(BwrErrors::DimensionMismatch(cells, bits.len()));
        }
        if bits.iter().any(|cell| *cell > 1) {
            return Err(BwrErrors::Generic("bit-plane cells must be 0 or 1"));
        }

        Ok(BitPlane {
            width,
            height,
            bits
        })
    }

    /// Build a plane from cells already known to be 0/1 and of the right
    /// length, used by the decoder which produces only such cells.
    pub(crate) fn from_parts(bits: Vec<u8>, width: usize, height: usize) -> BitPlane {
        debug_assert_eq!(bits.len(), width * height);

        BitPlane {
            width,
            height,
            bits
        }
    }

    /// Plane width in cells
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Plane height in cells
    pub const fn height(&self) -> usize {
        self.height
    }

    /// Return the width and height of the plane
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// All cells, row major
    pub fn bits(&self) -> &[u8] {
        &self.bits
    }

    /// Consume the plane and return its cells, row major
    pub fn into_bits(self) -> Vec<u8> {
        self.bits
    }

    /// One row of cells
    ///
    /// # Panics
    /// If `y` is not less than the plane height
    pub fn row(&self, y: usize) -> &[u8] {
        &self.bits[y * self.width..(y + 1) * self.width]
    }

    /// Iterate over the rows of the plane, top to bottom
    ///
    /// Yields nothing for a zero width plane, matching the encoders
    /// which emit nothing for empty rows.
    pub fn rows(&self) -> ChunksExact<'_, u8> {
        // chunks_exact panics on 0, and a zero width plane has no
        // encodable cells anyway
        self.bits.chunks_exact(self.width.max(1))
    }
}

fn checked_area(width: usize, height: usize) -> Result<usize, BwrErrors> {
    width
        .checked_mul(height)
        .ok_or(BwrErrors::Generic("plane dimensions overflow usize"))
}
