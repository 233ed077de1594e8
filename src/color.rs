// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Au-Zone Technologies. All Rights Reserved.

//! BT.601 studio-swing RGB to YCbCr mapping using 8-bit fixed point
//! coefficients.
//!
//! Every function takes full-range 8-bit RGB and returns a value saturated
//! to `0..=255`. The `>> 8` is an arithmetic shift on `i32`, so negative
//! intermediates floor toward negative infinity instead of rounding.

/// Saturates `x` to the `u8` range.
#[inline(always)]
pub const fn clip(x: i32) -> u8 {
    if x > 255 {
        255
    } else if x < 0 {
        0
    } else {
        x as u8
    }
}

/// Luma (Y) of an RGB triple, in `16..=235` for 8-bit input.
#[inline(always)]
pub const fn rgb_to_y(r: u8, g: u8, b: u8) -> u8 {
    let (r, g, b) = (r as i32, g as i32, b as i32);
    clip(((66 * r + 129 * g + 25 * b + 128) >> 8) + 16)
}

/// Blue-difference chroma (U / Cb) of an RGB triple.
#[inline(always)]
pub const fn rgb_to_u(r: u8, g: u8, b: u8) -> u8 {
    let (r, g, b) = (r as i32, g as i32, b as i32);
    clip(((-38 * r - 74 * g + 112 * b + 128) >> 8) + 128)
}

/// Red-difference chroma (V / Cr) of an RGB triple.
#[inline(always)]
pub const fn rgb_to_v(r: u8, g: u8, b: u8) -> u8 {
    let (r, g, b) = (r as i32, g as i32, b as i32);
    clip(((112 * r - 94 * g - 18 * b + 128) >> 8) + 128)
}
