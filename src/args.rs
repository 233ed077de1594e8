// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Au-Zone Technologies. All Rights Reserved.

use clap::Parser;
use std::path::PathBuf;
use yuv_embed::{convert::OddWidth, name::OutputName};

/// Command-line arguments for the YUYV embedder.
///
/// Converts one image into `<name>_yuv.h` and `<name>_yuv.c`. Options can be
/// given on the command line or through environment variables.
///
/// # Example
///
/// ```bash
/// # Via command line
/// yuv-embed splash.png --output-dir firmware/assets
///
/// # Via environment variables
/// export YUV_OUTPUT_DIR=firmware/assets
/// export YUV_ODD_WIDTH=duplicate
/// yuv-embed splash.png
/// ```
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Input image (PNG, JPEG, BMP or GIF)
    pub input: PathBuf,

    /// Directory the header and source files are written to
    #[arg(short, long, env = "YUV_OUTPUT_DIR", default_value = ".")]
    pub output_dir: PathBuf,

    /// Identifier stem for generated symbols and files, defaults to the
    /// input file name without its extension
    #[arg(short, long, env = "YUV_NAME")]
    pub name: Option<OutputName>,

    /// Handling of images with an odd width
    #[arg(long, env = "YUV_ODD_WIDTH", default_value = "reject", value_enum)]
    pub odd_width: OddWidth,

    /// Enable verbose debug logging
    #[arg(short, long)]
    pub verbose: bool,
}
