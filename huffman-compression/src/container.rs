//! On-disk layout of a compressed file.
//!
//! ```text
//! [u32 symbol_count][symbol_count x (u8 symbol, u32 frequency)][packed payload]
//! ```
//!
//! Integers are little-endian. Entries are written in ascending symbol order.
//! The payload has no length prefix; it runs to the end of the container.

use bytes::{Buf, BufMut, BytesMut};

use crate::{bits::PackedPayload, error::HuffmanError, frequency::FrequencyTable};

const SYMBOL_COUNT_LEN: usize = 4;
const ENTRY_LEN: usize = 1 + 4;
const MAX_SYMBOLS: u32 = 256;

pub fn write_container(
    frequencies: &FrequencyTable,
    payload: &PackedPayload,
) -> Result<Vec<u8>, HuffmanError> {
    let header_len = SYMBOL_COUNT_LEN + frequencies.len() * ENTRY_LEN;
    let mut out = BytesMut::with_capacity(header_len + payload.as_bytes().len());

    out.put_u32_le(frequencies.len() as u32);
    for (symbol, count) in frequencies.iter() {
        let frequency =
            u32::try_from(count).map_err(|_| HuffmanError::FrequencyOverflow { symbol, count })?;
        out.put_u8(symbol);
        out.put_u32_le(frequency);
    }
    out.put_slice(payload.as_bytes());

    Ok(out.to_vec())
}

/// Splits a container into its frequency table and the payload bytes.
pub fn read_container(content: &[u8]) -> Result<(FrequencyTable, &[u8]), HuffmanError> {
    let mut buf = content;

    if buf.remaining() < SYMBOL_COUNT_LEN {
        return Err(HuffmanError::corrupt(format!(
            "expected a {SYMBOL_COUNT_LEN} byte header but found {} bytes",
            buf.remaining()
        )));
    }
    let symbol_count = buf.get_u32_le();
    if symbol_count > MAX_SYMBOLS {
        return Err(HuffmanError::corrupt(format!(
            "declared {symbol_count} symbols but a byte has only {MAX_SYMBOLS} values"
        )));
    }

    let entries_len = symbol_count as usize * ENTRY_LEN;
    if buf.remaining() < entries_len {
        return Err(HuffmanError::corrupt(format!(
            "declared {symbol_count} symbols needing {entries_len} bytes but only {} remain",
            buf.remaining()
        )));
    }

    let mut frequencies = FrequencyTable::default();
    for _ in 0..symbol_count {
        let symbol = buf.get_u8();
        let frequency = buf.get_u32_le();
        if frequency == 0 {
            return Err(HuffmanError::corrupt(format!(
                "symbol {symbol:#04x} has a frequency of zero"
            )));
        }
        if !frequencies.insert(symbol, frequency as u64) {
            return Err(HuffmanError::corrupt(format!(
                "symbol {symbol:#04x} appears more than once"
            )));
        }
    }

    Ok((frequencies, buf))
}
