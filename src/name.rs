// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Au-Zone Technologies. All Rights Reserved.

use crate::{Error, Result};
use core::fmt;
use std::{path::Path, str::FromStr};
use tracing::warn;

/// Suffix shared by the array symbol and both generated file names.
const SUFFIX: &str = "_yuv";

/// Identifier stem used for the generated symbols and files.
///
/// Always a valid C identifier (`[A-Za-z_][A-Za-z0-9_]*`), so the include
/// guard, array and dimension variables built from it compile as-is.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct OutputName(String);

fn is_ident_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

impl OutputName {
    /// Derives the name from the input file name with its extension removed.
    ///
    /// Characters that cannot appear in a C identifier are replaced with `_`
    /// and a leading digit gets a `_` prefix.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let stem = path
            .file_stem()
            .map(|s| s.to_string_lossy())
            .unwrap_or_default();
        if stem.is_empty() {
            return Err(Error::InvalidName(path.display().to_string()));
        }

        let mut name: String = stem
            .chars()
            .map(|c| if is_ident_char(c) { c } else { '_' })
            .collect();
        if name.starts_with(|c: char| c.is_ascii_digit()) {
            name.insert(0, '_');
        }

        if name != stem {
            warn!("{:?} is not a valid C identifier, using {:?}", stem, name);
        }
        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Array symbol, e.g. `photo_yuv`.
    pub fn symbol(&self) -> String {
        format!("{}{}", self.0, SUFFIX)
    }

    pub fn header_file(&self) -> String {
        format!("{}.h", self.symbol())
    }

    pub fn source_file(&self) -> String {
        format!("{}.c", self.symbol())
    }
}

impl FromStr for OutputName {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let valid = s.starts_with(|c: char| c.is_ascii_alphabetic() || c == '_')
            && s.chars().all(is_ident_char);
        if valid {
            Ok(Self(s.to_owned()))
        } else {
            Err(Error::InvalidName(s.to_owned()))
        }
    }
}

impl fmt::Display for OutputName {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_extension_and_directories() {
        let name = OutputName::from_path("assets/img/photo.png").unwrap();
        assert_eq!(name.as_str(), "photo");
        assert_eq!(name.symbol(), "photo_yuv");
        assert_eq!(name.header_file(), "photo_yuv.h");
        assert_eq!(name.source_file(), "photo_yuv.c");
    }

    #[test]
    fn only_last_extension_removed() {
        let name = OutputName::from_path("splash.v2.png").unwrap();
        assert_eq!(name.as_str(), "splash_v2");
    }

    #[test]
    fn sanitizes_derived_names() {
        assert_eq!(OutputName::from_path("my-photo.png").unwrap().as_str(), "my_photo");
        assert_eq!(OutputName::from_path("1logo.jpg").unwrap().as_str(), "_1logo");
        assert_eq!(OutputName::from_path("boot screen.bmp").unwrap().as_str(), "boot_screen");
        assert_eq!(OutputName::from_path("café.png").unwrap().as_str(), "caf_");
    }

    #[test]
    fn empty_stem_is_an_error() {
        assert!(matches!(OutputName::from_path(""), Err(Error::InvalidName(_))));
        assert!(matches!(OutputName::from_path("/"), Err(Error::InvalidName(_))));
    }

    #[test]
    fn explicit_names_are_strict() {
        assert_eq!("logo".parse::<OutputName>().unwrap().as_str(), "logo");
        assert_eq!("_boot2".parse::<OutputName>().unwrap().as_str(), "_boot2");
        assert!("bad-name".parse::<OutputName>().is_err());
        assert!("2fast".parse::<OutputName>().is_err());
        assert!("".parse::<OutputName>().is_err());
    }
}
