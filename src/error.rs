// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Au-Zone Technologies. All Rights Reserved.

use std::io;

/// Errors raised while loading, converting or emitting an image.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Decode(#[from] image::ImageError),

    #[error(transparent)]
    Io(#[from] io::Error),

    #[error("width or height must not be zero, got {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    #[error("expected {expected} bytes of RGBA samples, but got {got}")]
    BufferSize { expected: usize, got: usize },

    #[error("image width {width} is odd, YUYV packs pixels in pairs")]
    OddWidth { width: u32 },

    #[error("{0:?} is not a valid C identifier")]
    InvalidName(String),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
