// Glot - Language Identification Benchmarks
//
// Copyright (c) 2025 The Glot contributors.
//
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository or at: http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! The file view strategies operate on.
//!
//! A [`Blob`] exposes a file's path and raw bytes plus three derived views
//! (encoding, decoded lines, mime type). Derived views are expensive enough
//! that implementors are expected to cache them; the free functions in this
//! module compute them from scratch.

use crate::error::{DetectError, Result};
use crate::language::extensions_of;
use std::path::Path;

/// Only this many leading bytes are inspected for NUL when sniffing binaries.
pub const BINARY_SNIFF_LEN: usize = 8000;

const UTF8_BOM: &[u8] = &[0xEF, 0xBB, 0xBF];
const UTF16LE_BOM: &[u8] = &[0xFF, 0xFE];
const UTF16BE_BOM: &[u8] = &[0xFE, 0xFF];

/// Character encoding detected for a blob.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Encoding {
    /// UTF-8, with or without BOM.
    Utf8,
    /// UTF-16 little endian (BOM required).
    Utf16Le,
    /// UTF-16 big endian (BOM required).
    Utf16Be,
    /// Bytes that are neither UTF-8 nor binary; decoded one byte per char.
    Latin1,
    /// Contains NUL bytes; not decoded.
    Binary,
}

impl Encoding {
    /// Returns the encoding name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Encoding::Utf8 => "utf-8",
            Encoding::Utf16Le => "utf-16le",
            Encoding::Utf16Be => "utf-16be",
            Encoding::Latin1 => "iso-8859-1",
            Encoding::Binary => "binary",
        }
    }

    /// Returns whether content in this encoding is treated as binary.
    pub fn is_binary(&self) -> bool {
        matches!(self, Encoding::Binary)
    }
}

/// A file as seen by the detection strategies.
pub trait Blob {
    /// Path of the file.
    fn path(&self) -> &Path;

    /// Raw content.
    fn data(&self) -> &[u8];

    /// Detected encoding.
    fn encoding(&self) -> Encoding;

    /// Content decoded and split into lines. Empty for binary blobs.
    fn lines(&self) -> Result<&[String]>;

    /// Mime type guessed from the name and encoding.
    fn mime_type(&self) -> &str;

    /// Final path component, or `""` when the path has none.
    fn name(&self) -> &str {
        self.path()
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or("")
    }
}

/// Sniffs the encoding of raw content.
pub fn detect_encoding(data: &[u8]) -> Encoding {
    if data.starts_with(UTF8_BOM) {
        return Encoding::Utf8;
    }
    if data.starts_with(UTF16LE_BOM) {
        return Encoding::Utf16Le;
    }
    if data.starts_with(UTF16BE_BOM) {
        return Encoding::Utf16Be;
    }

    let head = &data[..data.len().min(BINARY_SNIFF_LEN)];
    if head.contains(&0) {
        Encoding::Binary
    } else if std::str::from_utf8(data).is_ok() {
        Encoding::Utf8
    } else {
        Encoding::Latin1
    }
}

/// Decodes content in the given encoding and splits it into lines.
///
/// Fails with [`DetectError::Malformed`] when the bytes are not valid in
/// that encoding.
pub fn decode_lines(data: &[u8], encoding: Encoding) -> Result<Vec<String>> {
    let text = match encoding {
        Encoding::Binary => return Ok(Vec::new()),
        Encoding::Utf8 => {
            let body = data.strip_prefix(UTF8_BOM).unwrap_or(data);
            std::str::from_utf8(body)
                .map_err(|e| DetectError::malformed(format!("invalid UTF-8: {}", e)))?
                .to_string()
        }
        Encoding::Latin1 => data.iter().map(|&b| b as char).collect(),
        Encoding::Utf16Le => decode_utf16(
            data.strip_prefix(UTF16LE_BOM).unwrap_or(data),
            u16::from_le_bytes,
        )?,
        Encoding::Utf16Be => decode_utf16(
            data.strip_prefix(UTF16BE_BOM).unwrap_or(data),
            u16::from_be_bytes,
        )?,
    };

    Ok(text.lines().map(str::to_owned).collect())
}

fn decode_utf16(body: &[u8], unit: fn([u8; 2]) -> u16) -> Result<String> {
    if body.len() % 2 != 0 {
        return Err(DetectError::malformed(format!(
            "UTF-16 payload has odd length {}",
            body.len()
        )));
    }
    let units: Vec<u16> = body
        .chunks_exact(2)
        .map(|pair| unit([pair[0], pair[1]]))
        .collect();
    String::from_utf16(&units).map_err(|_| DetectError::malformed("unpaired UTF-16 surrogate"))
}

/// Guesses a mime type from a file name, falling back on the encoding.
pub fn mime_type_for(name: &str, encoding: Encoding) -> &'static str {
    for ext in extensions_of(name) {
        let mime = match ext.as_str() {
            ".json" => "application/json",
            ".js" | ".mjs" | ".cjs" => "application/javascript",
            ".xml" | ".xsd" | ".xsl" => "text/xml",
            ".html" | ".htm" | ".xhtml" => "text/html",
            ".css" => "text/css",
            ".svg" => "image/svg+xml",
            ".png" => "image/png",
            ".jpg" | ".jpeg" => "image/jpeg",
            ".gif" => "image/gif",
            ".pdf" => "application/pdf",
            ".zip" => "application/zip",
            ".gz" => "application/gzip",
            _ => continue,
        };
        return mime;
    }

    if encoding.is_binary() {
        "application/octet-stream"
    } else {
        "text/plain"
    }
}
