use emdict_wire::Codec;

/// Default ceiling on the declared uncompressed size (256 MiB).
pub const DEFAULT_MAX_DECOMPRESSED_SIZE: usize = 256 * 1024 * 1024;

/// What to do with bytes left over after the declared records.
///
/// Dictionary files in the wild are accepted with trailing bytes, so
/// `Ignore` is the default. `Reject` turns them into
/// [`DecodeError::TrailingData`](crate::DecodeError::TrailingData).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TrailingBytes {
    #[default]
    Ignore,
    Reject,
}

/// Decoder configuration.
///
/// ```text
/// ┌───────────────────────┬───────────────┬─────────────────────────────────┐
/// │ Field                 │ Default       │ Purpose                         │
/// ├───────────────────────┼───────────────┼─────────────────────────────────┤
/// │ codec                 │ Zlib          │ payload codec after size header │
/// │ trailing_bytes        │ Ignore        │ strictness after last record    │
/// │ max_decompressed_size │ 256 MiB       │ ceiling on the declared size    │
/// └───────────────────────┴───────────────┴─────────────────────────────────┘
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DecodeOptions {
    pub codec: Codec,
    pub trailing_bytes: TrailingBytes,
    pub max_decompressed_size: usize,
}

impl Default for DecodeOptions {
    fn default() -> Self {
        Self {
            codec: Codec::default(),
            trailing_bytes: TrailingBytes::default(),
            max_decompressed_size: DEFAULT_MAX_DECOMPRESSED_SIZE,
        }
    }
}

impl DecodeOptions {
    /// Default options with trailing bytes rejected.
    #[must_use]
    pub fn strict() -> Self {
        Self {
            trailing_bytes: TrailingBytes::Reject,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_codec(mut self, codec: Codec) -> Self {
        self.codec = codec;
        self
    }

    #[must_use]
    pub fn with_max_decompressed_size(mut self, limit: usize) -> Self {
        self.max_decompressed_size = limit;
        self
    }
}
