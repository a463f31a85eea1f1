/*
 * Copyright (c) 2024.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Plane decoder options

/// Decoder options
///
/// Built with consuming setters
/// ```
/// use bwr_rle::DecoderOptions;
/// let options = DecoderOptions::default().set_strict_mode(false);
/// assert!(!options.strict_mode());
/// ```
#[derive(Debug, Copy, Clone)]
pub struct DecoderOptions {
    /// Maximum width for which the decoder will
    /// not try to decode planes wider than
    /// the specified width.
    ///
    /// - Default value: 16384
    max_width:   usize,
    /// Maximum height for which the decoder will
    /// not try to decode planes taller than
    /// the specified height.
    ///
    /// - Default value: 16384
    max_height:  usize,
    /// Whether bytes left over after the declared number of rows are
    /// an error or only a warning.
    ///
    /// - Default value: true
    strict_mode: bool
}

impl Default for DecoderOptions {
    fn default() -> DecoderOptions {
        DecoderOptions {
            max_width:   1 << 14,
            max_height:  1 << 14,
            strict_mode: true
        }
    }
}

impl DecoderOptions {
    /// Get the maximum width configured for which the decoder
    /// should not try to decode planes wider than it
    pub const fn max_width(&self) -> usize {
        self.max_width
    }

    /// Get the maximum height configured for which the decoder
    /// should not try to decode planes taller than it
    pub const fn max_height(&self) -> usize {
        self.max_height
    }

    /// Return true whether the decoder should be in strict mode
    /// and reject streams with trailing bytes
    pub const fn strict_mode(&self) -> bool {
        self.strict_mode
    }

    /// Set the maximum width for which the decoder should not try
    /// decoding planes wider than that width
    ///
    /// # Arguments
    ///
    /// * `width`: The maximum width allowed
    ///
    /// returns: DecoderOptions
    pub fn set_max_width(mut self, width: usize) -> Self {
        self.max_width = width;
        self
    }

    /// Set the maximum height for which the decoder should not try
    /// decoding planes taller than that height
    ///
    /// # Arguments
    ///
    /// * `height`: The maximum height allowed
    ///
    /// returns: DecoderOptions
    pub fn set_max_height(mut self, height: usize) -> Self {
        self.max_height = height;
        self
    }

    /// Set whether the decoder should error out on streams that carry
    /// bytes beyond the declared number of rows
    ///
    /// # Arguments
    ///
    /// * `strict`: When false, trailing bytes only log a warning
    ///
    /// returns: DecoderOptions
    pub fn set_strict_mode(mut self, strict: bool) -> Self {
        self.strict_mode = strict;
        self
    }
}
