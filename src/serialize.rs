use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

use crate::rng::JassPrng;
use crate::{PrngError, PrngResult};

// Magic bytes to identify a generator snapshot
const MAGIC_BYTES: [u8; 4] = *b"JRN1";

/// Magic + seed bits + current value
pub const SNAPSHOT_LEN: usize = 12;

pub trait Serialize {
    fn serialize(&self) -> Vec<u8>;
}

pub trait Deserialize: Sized {
    fn deserialize(bytes: &[u8]) -> PrngResult<Self>;
}

impl Serialize for JassPrng<'_> {
    fn serialize(&self) -> Vec<u8> {
        let (seed_bits, current) = self.state();
        let mut data = Vec::with_capacity(SNAPSHOT_LEN);
        data.extend_from_slice(&MAGIC_BYTES);
        data.extend_from_slice(&seed_bits.to_le_bytes());
        data.extend_from_slice(&current.to_le_bytes());
        data
    }
}

/// Snapshots carry no table; they restore onto the engine's own.
impl Deserialize for JassPrng<'static> {
    fn deserialize(bytes: &[u8]) -> PrngResult<Self> {
        let mut rng = JassPrng::unseeded();
        rng.restore(bytes)?;
        Ok(rng)
    }
}

fn read_word(bytes: &[u8], at: usize) -> u32 {
    u32::from_le_bytes([bytes[at], bytes[at + 1], bytes[at + 2], bytes[at + 3]])
}

impl JassPrng<'_> {
    /// Loads a snapshot into this generator, keeping its table.
    pub fn restore(&mut self, bytes: &[u8]) -> PrngResult<()> {
        if bytes.len() != SNAPSHOT_LEN {
            return Err(PrngError::InvalidDataLength {
                expected: SNAPSHOT_LEN,
                got: bytes.len(),
            });
        }

        let magic = [bytes[0], bytes[1], bytes[2], bytes[3]];
        if magic != MAGIC_BYTES {
            return Err(PrngError::InvalidMagic { got: magic });
        }

        self.set_state(read_word(bytes, 4), read_word(bytes, 8));
        Ok(())
    }
}

pub trait Snapshot: Serialize + Deserialize {
    fn save<P: AsRef<Path>>(&self, path: P) -> PrngResult<()> {
        let mut file = File::create(path).map_err(|e| format!("Failed to create file: {}", e))?;

        file.write_all(&self.serialize())
            .map_err(|e| format!("Failed to write snapshot: {}", e))?;

        Ok(())
    }

    fn load<P: AsRef<Path>>(path: P) -> PrngResult<Self> {
        let mut file = File::open(path).map_err(|e| format!("Failed to open file: {}", e))?;

        let mut data = Vec::with_capacity(SNAPSHOT_LEN);
        file.read_to_end(&mut data)
            .map_err(|e| format!("Failed to read snapshot: {}", e))?;

        Self::deserialize(&data)
    }
}

impl Snapshot for JassPrng<'static> {}
