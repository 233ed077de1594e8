// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Au-Zone Technologies. All Rights Reserved.

use crate::{convert::Yuyv, name::OutputName, Result};
use std::{
    fs,
    path::{Path, PathBuf},
};
use tracing::{debug, info};

/// Column limit for the wrapped byte list, not counting the indent.
pub const WRAP_WIDTH: usize = 76;

/// Indent applied to every line of the byte list.
pub const INDENT: &str = "    ";

/// Renders `bytes` as `0x..` literals separated by `, ` and wrapped to
/// [`WRAP_WIDTH`] columns, each line prefixed by [`INDENT`].
///
/// Items are packed greedily and never split across lines. Lines carry no
/// trailing whitespace.
pub fn hex_list(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len() * 6 + bytes.len() / 12 * INDENT.len());
    let mut line_len = 0;

    for (i, b) in bytes.iter().enumerate() {
        let last = i + 1 == bytes.len();
        // "0xNN," or "0xNN" for the final item
        let item_len = if last { 4 } else { 5 };

        if line_len == 0 {
            out.push_str(INDENT);
        } else if line_len + 1 + item_len <= WRAP_WIDTH {
            out.push(' ');
            line_len += 1;
        } else {
            out.push('\n');
            out.push_str(INDENT);
            line_len = 0;
        }

        out.push_str(&format!("{b:#04x}"));
        if !last {
            out.push(',');
        }
        line_len += item_len;
    }

    out
}

/// The generated header and source text for one image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifacts {
    name: OutputName,
    header: String,
    source: String,
}

impl Artifacts {
    pub fn new(name: OutputName, yuyv: &Yuyv) -> Self {
        let header = header(&name, yuyv);
        let source = source(&name, yuyv);
        Self {
            name,
            header,
            source,
        }
    }

    pub fn name(&self) -> &OutputName {
        &self.name
    }

    pub fn header(&self) -> &str {
        &self.header
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    /// Writes `<name>_yuv.h` then `<name>_yuv.c` into `dir`.
    ///
    /// Existing files are overwritten. If the second write fails the header
    /// is left in place.
    pub fn write(&self, dir: impl AsRef<Path>) -> Result<(PathBuf, PathBuf)> {
        let dir = dir.as_ref();
        let header_path = dir.join(self.name.header_file());
        let source_path = dir.join(self.name.source_file());

        fs::write(&header_path, &self.header)?;
        debug!("wrote {} ({} bytes)", header_path.display(), self.header.len());
        fs::write(&source_path, &self.source)?;
        debug!("wrote {} ({} bytes)", source_path.display(), self.source.len());

        info!(
            "generated {} and {}",
            header_path.display(),
            source_path.display()
        );
        Ok((header_path, source_path))
    }
}

/// Header declaring the dimensions and the extern byte array.
pub fn header(name: &OutputName, yuyv: &Yuyv) -> String {
    let symbol = name.symbol();
    format!(
        "#ifndef _{symbol}\n\
         #define _{symbol}\n\
         \n\
         #include <stdint.h>\n\
         \n\
         int {symbol}_width = {width};\n\
         int {symbol}_height = {height};\n\
         extern uint8_t {symbol}[{area}];\n\
         \n\
         #endif\n",
        width = yuyv.width(),
        height = yuyv.height(),
        area = yuyv.size(),
    )
}

/// Source defining the byte array, including the matching header.
pub fn source(name: &OutputName, yuyv: &Yuyv) -> String {
    format!(
        "#include \"{header}\"\n\
         \n\
         uint8_t {symbol}[] = {{\n\
         {bytes}\n\
         }};\n",
        header = name.header_file(),
        symbol = name.symbol(),
        bytes = hex_list(yuyv.as_slice()),
    )
}
