use crate::{PrngError, PrngResult};

/// Number of table entries the step function can address.
pub const TABLE_LEN: usize = 256;

/// Bytes needed to read every entry: each one is a 4-byte window at its own offset.
pub const TABLE_SPAN: usize = TABLE_LEN + 3;

/// Extracted from game.dll v1.26.0.6401.
const GAME_DLL_1_26_BYTES: [u8; 269] = [
    0x8e, 0x14, 0x27, 0x99, 0xfd, 0xaa, 0xc7, 0x08, 0xd5, 0xe6, 0x3e, 0x1f,
    0xf6, 0xbb, 0x55, 0xda, 0x75, 0xa0, 0x4a, 0x6a, 0xe8, 0xbd, 0x97, 0xff,
    0xde, 0x9b, 0xbc, 0x9f, 0x81, 0x8a, 0xa1, 0x46, 0x6e, 0x0b, 0xe3, 0x63,
    0x76, 0x7a, 0x6c, 0x5d, 0x88, 0xd3, 0x69, 0xca, 0xc3, 0x47, 0xb9, 0x25,
    0x83, 0xab, 0xa2, 0x3f, 0xa6, 0x41, 0x7c, 0xba, 0xe5, 0xac, 0x95, 0x01,
    0x7e, 0xcf, 0x09, 0xc1, 0xd9, 0x62, 0x70, 0x71, 0x8d, 0xdb, 0x05, 0x02,
    0x24, 0x87, 0xef, 0x54, 0xc6, 0xd4, 0x37, 0x30, 0xd0, 0x1b, 0xcb, 0x7b,
    0xb8, 0xe4, 0xd8, 0xec, 0x49, 0xce, 0xad, 0xdc, 0x13, 0xa9, 0x94, 0xc4,
    0x8f, 0x39, 0xae, 0x0d, 0x18, 0x52, 0xdd, 0x0e, 0x78, 0xfa, 0xf5, 0x85,
    0x58, 0xd2, 0xaf, 0x6d, 0xa4, 0xb2, 0x53, 0x3b, 0x51, 0xa5, 0x50, 0xbe,
    0xfc, 0x2d, 0xf4, 0x11, 0x48, 0x98, 0x16, 0xf1, 0x86, 0xdf, 0x3d, 0x66,
    0x5e, 0x44, 0x2e, 0x2f, 0x36, 0x07, 0x6b, 0x17, 0x8b, 0x29, 0x4c, 0xb6,
    0xe2, 0x89, 0x5f, 0xe7, 0xcd, 0xa7, 0x21, 0xe1, 0x4d, 0xc9, 0x65, 0xed,
    0xfe, 0xee, 0x9c, 0x23, 0x33, 0x7d, 0xb7, 0x04, 0x9e, 0x9a, 0x2a, 0x40,
    0xb3, 0x10, 0x5b, 0xf3, 0x82, 0x77, 0x1c, 0x92, 0x20, 0x4e, 0x1e, 0x57,
    0x22, 0x72, 0x06, 0x8c, 0x67, 0x2c, 0x73, 0xfb, 0x59, 0xc2, 0x0a, 0xbf,
    0x79, 0x5c, 0xf9, 0x0c, 0x28, 0x1a, 0x12, 0x68, 0x74, 0x34, 0x19, 0x42,
    0xb1, 0xc0, 0x84, 0xf8, 0x38, 0xf0, 0x15, 0x9d, 0x60, 0xf2, 0x3a, 0x6f,
    0xb4, 0x90, 0xeb, 0x91, 0x1d, 0x7f, 0x35, 0x61, 0x5a, 0x32, 0x03, 0x56,
    0xa3, 0xc5, 0x2b, 0x93, 0x80, 0x0f, 0x4b, 0x43, 0xf7, 0xa8, 0xe0, 0x3c,
    0x96, 0xd1, 0x64, 0x26, 0xd7, 0x45, 0xcc, 0x4f, 0xc8, 0xb0, 0xe9, 0xb5,
    0x00, 0xd6, 0x31, 0xea, 0x68, 0x75, 0x6e, 0x74, 0x65, 0x72, 0x20, 0x67,
    0x72, 0x65, 0x67, 0x61, 0x6c,
];

static GAME_DLL_1_26: ConstantTable = ConstantTable::expand(&GAME_DLL_1_26_BYTES);

/// Lookup table mixed into the generator state on every step.
///
/// Entry `i` is the little-endian word starting at byte `i` of the extracted
/// asset, so neighbouring entries share three bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConstantTable {
    entries: [u32; TABLE_LEN],
}

impl ConstantTable {
    /// The table shipped with the 1.26 engine.
    pub fn game_dll() -> &'static ConstantTable {
        &GAME_DLL_1_26
    }

    /// Builds a table from an asset extracted from another engine build.
    pub fn from_bytes(bytes: &[u8]) -> PrngResult<Self> {
        if bytes.len() < TABLE_SPAN {
            return Err(PrngError::InvalidTableLength {
                expected: TABLE_SPAN,
                got: bytes.len(),
            });
        }
        Ok(Self::expand(bytes))
    }

    // Callers guarantee at least TABLE_SPAN bytes.
    const fn expand(bytes: &[u8]) -> Self {
        let mut entries = [0u32; TABLE_LEN];
        let mut i = 0;
        while i < TABLE_LEN {
            entries[i] = u32::from_le_bytes([bytes[i], bytes[i + 1], bytes[i + 2], bytes[i + 3]]);
            i += 1;
        }
        Self { entries }
    }

    #[inline]
    pub fn get(&self, index: u8) -> u32 {
        self.entries[index as usize]
    }

    pub fn entries(&self) -> &[u32; TABLE_LEN] {
        &self.entries
    }
}
