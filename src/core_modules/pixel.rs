// THEORY:
// The `Pixel` module is the most fundamental unit of the detection engine. It is
// a "dumb" data container for a single RGB color sample plus the few helpers that
// can be computed from one sample alone, with no knowledge of a second color or
// of neighbors. Anything that compares two colors (tolerance matching) belongs to
// the `ColorMatcher`, and anything that needs spatial context belongs to the
// `RegionScanner`.
//
// Key architectural principles:
// 1.  **Single-sample scope**: Nothing in this module reads another pixel. A
//     reference color and a sampled color are the same type; "reference-ness"
//     is a property of where the value is used, not of the value itself.
// 2.  **No alpha**: Hotspot markers are flat opaque paint in the artwork, and
//     matching never consults transparency. The alpha byte is skipped at the
//     sampling site (`PixelBuffer::rgb_at`) rather than carried around and
//     ignored everywhere else.
// 3.  **Designer-facing notation**: Marker colors are communicated as `#RRGGBB`
//     strings in design handoffs, so the container knows how to parse exactly
//     that notation and nothing more exotic.

pub mod pixel {
    use serde::{Deserialize, Serialize};

    pub type Byte = u8;
    pub type Channel = Byte;
    /// Per-channel matching slack, in absolute channel units.
    pub type Tolerance = u8;

    /// A "dumb" data container representing a single RGB color sample.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct Rgb {
        /// The red channel value (0-255).
        pub red: Channel,
        /// The green channel value (0-255).
        pub green: Channel,
        /// The blue channel value (0-255).
        pub blue: Channel,
    }

    /// Error raised when a designer-supplied hex color cannot be parsed.
    #[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
    pub enum HexColorError {
        #[error("expected a 6-digit hex color like #00FFF0, got {0:?}")]
        Length(String),
        #[error("invalid hex digit in {0:?}")]
        Digit(String),
    }

    impl Rgb {
        pub const fn new(red: Channel, green: Channel, blue: Channel) -> Self {
            Self { red, green, blue }
        }

        /// Parses `#RRGGBB` (or bare `RRGGBB`) notation.
        pub fn from_hex(hex: &str) -> Result<Self, HexColorError> {
            let digits = hex.strip_prefix('#').unwrap_or(hex);
            if digits.len() != 6 || !digits.is_ascii() {
                return Err(HexColorError::Length(hex.to_string()));
            }
            let channel = |range: std::ops::Range<usize>| {
                Channel::from_str_radix(&digits[range], 16)
                    .map_err(|_| HexColorError::Digit(hex.to_string()))
            };
            Ok(Self {
                red: channel(0..2)?,
                green: channel(2..4)?,
                blue: channel(4..6)?,
            })
        }
    }

}
