// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Au-Zone Technologies. All Rights Reserved.

use crate::{
    color::{rgb_to_u, rgb_to_v, rgb_to_y},
    Error, Result,
};
use core::fmt;
use image::RgbaImage;
use std::path::Path;
use tracing::{debug, warn};

/// Bytes per source pixel (RGBA, 8 bits per channel).
const RGBA_BPP: usize = 4;

/// Bytes per YUYV macropixel (two pixels sharing one U and one V sample).
const YUYV_GROUP: usize = 4;

/// How to handle images whose width is not a multiple of two.
///
/// YUYV stores one chroma pair per two horizontal pixels, so the last
/// column of an odd-width row has no natural partner.
#[derive(clap::ValueEnum, Clone, Debug, PartialEq, Eq, Copy, Default)]
pub enum OddWidth {
    /// Refuse to convert the image
    #[default]
    Reject,
    /// Pair the final pixel of each row with itself, widening the output by
    /// one column
    Duplicate,
}

/// A packed YUYV 4:2:2 buffer.
///
/// Each group of four bytes holds `Y0 U Y1 V` for a horizontal pixel pair.
/// Groups are stored in raster order with no row padding, so the buffer is
/// always exactly `2 * width * height` bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Yuyv {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

const fn row_stride(width: u32) -> usize {
    2 * width as usize
}

impl Yuyv {
    /// Encoded width in pixels, always even.
    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Length in bytes, which is also the length of the emitted C array.
    pub fn size(&self) -> usize {
        self.data.len()
    }

    pub fn row_stride(&self) -> usize {
        row_stride(self.width)
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.data
    }
}

impl fmt::Display for Yuyv {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{}x{} YUYV {} bytes",
            self.width,
            self.height,
            self.data.len()
        )
    }
}

/// Decodes the image at `path` into 8-bit RGBA.
///
/// Any format enabled on the `image` crate is accepted. Decoder failures are
/// returned untouched as [`Error::Decode`].
pub fn load(path: impl AsRef<Path>) -> Result<RgbaImage> {
    let path = path.as_ref();
    let img = image::open(path)?;
    debug!(
        "decoded {} {}x{} {:?}",
        path.display(),
        img.width(),
        img.height(),
        img.color()
    );
    Ok(img.to_rgba8())
}

/// Converts a decoded RGBA image into YUYV.
pub fn image_to_yuyv(img: &RgbaImage, odd_width: OddWidth) -> Result<Yuyv> {
    rgba_to_yuyv(img.width(), img.height(), img.as_raw(), odd_width)
}

/// Converts row-major RGBA samples into a packed YUYV buffer.
///
/// Pixels are consumed in horizontal pairs, left to right and top to bottom.
/// For every pair the luma of both pixels is kept while U and V are the
/// truncated mean of the two pixels' chroma. Alpha is ignored.
///
/// # Errors
///
/// Returns an error if:
/// - `width` or `height` is zero
/// - `rgba` does not hold exactly `width * height` RGBA pixels
/// - `width` is odd and `odd_width` is [`OddWidth::Reject`]
pub fn rgba_to_yuyv(width: u32, height: u32, rgba: &[u8], odd_width: OddWidth) -> Result<Yuyv> {
    if width == 0 || height == 0 {
        return Err(Error::InvalidDimensions { width, height });
    }

    let row_bytes = width as usize * RGBA_BPP;
    let expected = row_bytes * height as usize;
    if rgba.len() != expected {
        return Err(Error::BufferSize {
            expected,
            got: rgba.len(),
        });
    }

    let out_width = if width % 2 == 0 {
        width
    } else {
        match odd_width {
            OddWidth::Reject => return Err(Error::OddWidth { width }),
            OddWidth::Duplicate => {
                warn!("odd width {}, duplicating the last column", width);
                width + 1
            }
        }
    };

    let mut data = Vec::with_capacity(row_stride(out_width) * height as usize);
    for row in rgba.chunks_exact(row_bytes) {
        let mut pairs = row.chunks_exact(2 * RGBA_BPP);
        for pair in &mut pairs {
            let (left, right) = pair.split_at(RGBA_BPP);
            data.extend_from_slice(&pack_pair(left, right));
        }
        let last = pairs.remainder();
        if !last.is_empty() {
            data.extend_from_slice(&pack_pair(last, last));
        }
    }

    debug_assert_eq!(data.len(), row_stride(out_width) * height as usize);
    debug_assert_eq!(data.len() % YUYV_GROUP, 0);

    let yuyv = Yuyv {
        width: out_width,
        height,
        data,
    };
    debug!("converted {}x{} RGBA to {}", width, height, yuyv);
    Ok(yuyv)
}

#[inline(always)]
fn pack_pair(left: &[u8], right: &[u8]) -> [u8; YUYV_GROUP] {
    let (r0, g0, b0) = (left[0], left[1], left[2]);
    let (r1, g1, b1) = (right[0], right[1], right[2]);

    let y0 = rgb_to_y(r0, g0, b0);
    let y1 = rgb_to_y(r1, g1, b1);
    let u = (rgb_to_u(r0, g0, b0) as u16 + rgb_to_u(r1, g1, b1) as u16) / 2;
    let v = (rgb_to_v(r0, g0, b0) as u16 + rgb_to_v(r1, g1, b1) as u16) / 2;

    [y0, u as u8, y1, v as u8]
}
