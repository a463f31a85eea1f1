/*
 * Copyright (c) 2024.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
//! Bit-plane extraction and run length coding for black/white/red e-paper bitmaps
//!
//! Tri-color e-paper panels take two monochrome bitmaps per frame, one for
//! the black pixels and one for the red pixels. This crate turns an RGB
//! raster into those bitmaps ([`BitPlane::from_raster`]) and serializes each
//! plane either as plain MSB-first packed bytes ([`BwrPackedEncoder`]) or
//! with a bytewise run length scheme ([`BwrRleEncoder`] / [`BwrRleDecoder`]).
//!
//! Every encoded block is a single byte `XYVVVVVV`:
//! ```text
//! ╔═══════╤═══════════════════════════════════════════════════════════╗
//! ║ X = 0 │ YVVVVVV are the bit values of the next 7 pixels,          ║
//! ║       │ zero padded past the end of the row                       ║
//! ╟───────┼───────────────────────────────────────────────────────────╢
//! ║ X = 1 │ the next (VVVVVV + 1) pixels all have bit value Y         ║
//! ╚═══════╧═══════════════════════════════════════════════════════════╝
//! ```
//! Rows are encoded independently and concatenated with no delimiter, so a
//! decoder needs the image width to locate row boundaries.
//!
//! # Features
//! - `std`: on by default. Disable it to compile for `no_std` + `alloc`
//!   targets, which only loses the `std::error::Error` impl.
#![cfg_attr(not(feature = "std"), no_std)]
extern crate alloc;

pub use bitplane::*;
pub use decoder::*;
pub use encoder::*;
pub use errors::*;
pub use options::*;
pub use packed::*;

mod bitplane;
mod constants;
mod decoder;
mod encoder;
mod errors;
mod options;
mod packed;
