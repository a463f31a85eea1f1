/*
 * Copyright (c) 2024.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use alloc::vec::Vec;

use crate::bitplane::BitPlane;

/// Plain bit packer, the uncompressed alternative to [`BwrRleEncoder`]
///
/// Cells are packed MSB first, eight per byte, and every row starts on a
/// fresh byte with the trailing bits of its last byte zero padded. This
/// is the layout monochrome drawing libraries on e-paper firmware expect
/// for raw bitmaps.
///
/// [`BwrRleEncoder`]: crate::BwrRleEncoder
pub struct BwrPackedEncoder<'a> {
    plane: &'a BitPlane
}

impl<'a> BwrPackedEncoder<'a> {
    /// Create a new packer which will pack the given plane
    pub const fn new(plane: &'a BitPlane) -> BwrPackedEncoder<'a> {
        BwrPackedEncoder { plane }
    }

    /// Exact number of bytes [`encode`] will produce
    ///
    /// [`encode`]: Self::encode
    pub const fn output_size(&self) -> usize {
        self.plane.height() * self.plane.width().div_ceil(8)
    }

    /// Pack the plane into bytes
    pub fn encode(&self) -> Vec<u8> {
        let mut sink = Vec::with_capacity(self.output_size());

        for row in self.plane.rows() {
            for chunk in row.chunks(8) {
                let mut byte = 0;

                for (pos, cell) in chunk.iter().enumerate() {
                    byte |= *cell << (7 - pos);
                }
                sink.push(byte);
            }
        }

        sink
    }
}
