//! C byte-array rendering.
//!
//! Turns a byte buffer into a source fragment of the form:
//!
//! ```text
//! // File: logo.png.gz, Size: 18
//! #define logo_png_gz_len 18
//! const uint8_t logo_png_gz[] = {
//!   0x1f, 0x8b, 0x08, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x03, 0x03, 0x00, 0x00, 0x00, 0x00, 0x00,
//!   0x00, 0x00,
//! };
//! ```
//!
//! followed by one blank line.

use std::fmt::Write;

/// Number of byte literals per row.
pub const ROW_WIDTH: usize = 16;

/// A named byte slice ready to be rendered as a C array.
///
/// The bytes are borrowed, so a memory-mapped file is rendered in place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ByteArray<'a> {
    /// Name shown in the header comment.
    pub display_name: String,
    /// Identifier used for the array and the `_len` constant.
    pub identifier: String,
    /// The raw bytes.
    pub bytes: &'a [u8],
}

impl<'a> ByteArray<'a> {
    /// Creates a new byte array.
    #[must_use]
    pub fn new(
        display_name: impl Into<String>,
        identifier: impl Into<String>,
        bytes: &'a [u8],
    ) -> Self {
        Self {
            display_name: display_name.into(),
            identifier: identifier.into(),
            bytes,
        }
    }

    /// Number of bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Returns true if there are no bytes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Number of data rows the rendered array will have.
    #[must_use]
    pub fn row_count(&self) -> usize {
        self.bytes.len().div_ceil(ROW_WIDTH)
    }

    /// Name of the length constant.
    #[must_use]
    pub fn len_constant(&self) -> String {
        format!("{}_len", self.identifier)
    }

    /// Renders the full source fragment.
    ///
    /// # Examples
    ///
    /// ```
    /// use gzarray::core::ByteArray;
    ///
    /// let array = ByteArray::new("x.gz", "x_gz", &[0xab, 0x01]);
    /// assert_eq!(
    ///     array.render(),
    ///     "// File: x.gz, Size: 2\n\
    ///      #define x_gz_len 2\n\
    ///      const uint8_t x_gz[] = {\n  0xab, 0x01, \n};\n\n"
    /// );
    /// ```
    #[must_use]
    pub fn render(&self) -> String {
        // header ~80 bytes, each literal 6 bytes, each row 3 extra
        let mut out = String::with_capacity(80 + self.bytes.len() * 6 + self.row_count() * 3);

        let _ = writeln!(
            out,
            "// File: {}, Size: {}",
            self.display_name,
            self.bytes.len()
        );
        let _ = writeln!(out, "#define {} {}", self.len_constant(), self.bytes.len());
        let _ = writeln!(out, "const uint8_t {}[] = {{", self.identifier);

        for row in self.bytes.chunks(ROW_WIDTH) {
            out.push_str("  ");
            for byte in row {
                let _ = write!(out, "0x{byte:02x}, ");
            }
            out.push('\n');
        }

        out.push_str("};\n\n");
        out
    }
}
