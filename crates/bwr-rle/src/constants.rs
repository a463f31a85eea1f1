/*
 * Copyright (c) 2024.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

pub const RLE_RUN_FLAG: u8 = 0x80;
// 1Y care only about the top bit
pub const RLE_RUN_VALUE: u8 = 0x40;
// x(Y)000000, repeated bit value of a run block
pub const RLE_RUN_LENGTH_MASK: u8 = 0x3f; // 00(111111), run length minus one

/// Longest run a single block can carry, `RLE_RUN_LENGTH_MASK + 1`.
pub const RLE_MAX_RUN: usize = 64;
/// Pixels carried by one literal block.
pub const RLE_LITERAL_BITS: usize = 7;
