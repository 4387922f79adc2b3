use std::fmt;

/// Compression codec used for the payload behind the size header.
///
/// The size header is the same for every codec; only the bytes after it
/// differ. `Zlib` is the layout Qt's `qCompress` produces and is what
/// dictionary files ship with. `Zstd` uses the same framing with a zstd
/// frame in place of the zlib stream.
///
/// ```text
/// ┌───────┬──────────────────────────────────────────────┐
/// │ Codec │ Payload after the 4-byte header              │
/// ├───────┼──────────────────────────────────────────────┤
/// │ Zlib  │ RFC 1950 zlib stream                         │
/// │ Zstd  │ single zstd frame                            │
/// └───────┴──────────────────────────────────────────────┘
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Codec {
    #[default]
    Zlib,
    Zstd,
}

impl Codec {
    /// Lowercase name, as accepted on the command line.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Zlib => "zlib",
            Self::Zstd => "zstd",
        }
    }

    /// Parse a codec name, case-insensitive.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "zlib" | "qt" => Some(Self::Zlib),
            "zstd" => Some(Self::Zstd),
            _ => None,
        }
    }
}

impl fmt::Display for Codec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
