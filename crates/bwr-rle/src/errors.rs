/*
 * Copyright (c) 2024.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use core::fmt::{Debug, Display, Formatter};

/// Possible errors when building or decoding a bit-plane
pub enum BwrErrors {
    /// The byte stream ended before a row reached its declared width
    ///
    /// # Arguments
    /// - 1st argument is the number of bits the row needed
    /// - 2nd argument is the number of bits reconstructed before the
    ///   stream ran out
    TruncatedStream(usize, usize),
    /// Bytes were left over after decoding the declared number of rows
    ///
    /// Only raised when the decoder runs in strict mode, otherwise the
    /// trailing bytes are logged and ignored
    TrailingBytes(usize),
    /// A buffer length does not match the declared plane dimensions
    ///
    /// # Arguments
    /// - 1st argument is the length the dimensions call for
    /// - 2nd argument is the length actually found
    DimensionMismatch(usize, usize),
    /// A declared dimension is larger than the configured limit
    ///
    /// E.g can be used to set width and height limits to prevent OOM attacks
    ///
    /// # Arguments
    /// - 1st argument is the configured limit
    /// - 2nd argument is the dimension found
    TooLargeDimensions(usize, usize),
    /// Generic message that does not need heap allocation
    Generic(&'static str)
}

impl Debug for BwrErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            BwrErrors::TruncatedStream(expected, found) => {
                writeln!(
                    f,
                    "Byte stream ended after {found} of {expected} bits in a row"
                )
            }
            BwrErrors::TrailingBytes(count) => {
                writeln!(f, "{count} trailing bytes left after the last row")
            }
            BwrErrors::DimensionMismatch(expected, found) => {
                writeln!(
                    f,
                    "Buffer length {found} does not match the declared dimensions, expected {expected}"
                )
            }
            BwrErrors::TooLargeDimensions(limit, found) => {
                writeln!(
                    f,
                    "Too large dimensions, expected a value less than {limit} but found {found}"
                )
            }
            BwrErrors::Generic(val) => {
                writeln!(f, "{val}")
            }
        }
    }
}

impl Display for BwrErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        writeln!(f, "{:?}", self)
    }
}

impl From<&'static str> for BwrErrors {
    fn from(r: &'static str) -> Self {
        Self::Generic(r)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for BwrErrors {}
