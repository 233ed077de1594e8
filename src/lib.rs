// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Au-Zone Technologies. All Rights Reserved.

//! # YUV Embed Library
//!
//! This library converts raster images into packed YUYV 4:2:2 byte arrays
//! and renders them as a C header/source pair, ready to be compiled into
//! firmware or native applications that feed displays or encoders expecting
//! YUYV frames.
//!
//! ## Features
//!
//! - **Decoding**: PNG, JPEG, BMP and GIF input through the `image` crate.
//! - **Color Conversion**: BT.601 fixed-point RGB to YCbCr with 2:1
//!   horizontal chroma subsampling.
//! - **Code Generation**: include-guarded headers and `uint8_t` array
//!   definitions with identifiers validated as C symbols.
//!
//! ## Example
//!
//! ```no_run
//! use yuv_embed::{
//!     convert::{image_to_yuyv, load, OddWidth},
//!     name::OutputName,
//!     render::Artifacts,
//! };
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let img = load("splash.png")?;
//! let yuyv = image_to_yuyv(&img, OddWidth::Reject)?;
//! let artifacts = Artifacts::new(OutputName::from_path("splash.png")?, &yuyv);
//!
//! // Writes splash_yuv.h and splash_yuv.c
//! artifacts.write(".")?;
//! # Ok(())
//! # }
//! ```

pub mod color;
pub mod convert;
pub mod name;
pub mod render;

mod error;

pub use error::{Error, Result};
