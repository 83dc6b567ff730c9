use bit_vec::BitVec;

/// Codes packed most significant bit first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PackedPayload {
    bytes: Vec<u8>,
    bit_len: u64,
}

impl PackedPayload {
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    /// Number of meaningful bits, padding excluded.
    pub fn bit_len(&self) -> u64 {
        self.bit_len
    }

    /// Zero bits appended to fill the final byte, 0 to 7.
    pub fn padding_bits(&self) -> u8 {
        ((8 - self.bit_len % 8) % 8) as u8
    }
}

#[derive(Debug, Default)]
pub struct BitWriter {
    bits: BitVec,
}

impl BitWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn write_code(&mut self, code: &BitVec) {
        self.bits.extend(code.iter());
    }

    /// Left-aligns a trailing partial byte and zero-fills its low bits.
    pub fn finish(self) -> PackedPayload {
        PackedPayload {
            bit_len: self.bits.len() as u64,
            bytes: self.bits.to_bytes(),
        }
    }
}

/// Yields every bit of `bytes`, most significant bit of each byte first,
/// padding included.
pub fn unpack(bytes: &[u8]) -> impl Iterator<Item = bool> {
    BitVec::from_bytes(bytes).into_iter()
}
