use std::{fs, path::Path};

use anyhow::Context;
use log::{debug, info};

use crate::{
    bits::{BitWriter, PackedPayload},
    container::{read_container, write_container},
    decoder::decode_payload,
    error::HuffmanError,
    frequency::FrequencyTable,
    prefix_code_table::CodeTable,
    printable::printable_symbol,
    stats::CompressionStats,
    tree::HuffmanTree,
};

/// Output of encoding a non-empty input, ready to be written as a container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Encoded {
    pub frequencies: FrequencyTable,
    pub payload: PackedPayload,
}

impl Encoded {
    pub fn to_container(&self) -> Result<Vec<u8>, HuffmanError> {
        write_container(&self.frequencies, &self.payload)
    }
}

/// Returns `None` for empty input, which has nothing to encode.
pub fn encode(content: &[u8]) -> Result<Option<Encoded>, HuffmanError> {
    let frequencies = FrequencyTable::new(content);
    let tree = match HuffmanTree::new(&frequencies) {
        Some(tree) => tree,
        None => return Ok(None),
    };
    let huffman_codes = CodeTable::new(&tree);
    huffman_codes.log();

    let mut writer = BitWriter::new();
    for &symbol in content {
        let code = huffman_codes.get(symbol).ok_or_else(|| {
            HuffmanError::corrupt(format!("no code generated for symbol {symbol:#04x}"))
        })?;
        writer.write_code(code);
    }
    let payload = writer.finish();
    debug!(
        "packed {} bits with {} padding bits",
        payload.bit_len(),
        payload.padding_bits()
    );

    Ok(Some(Encoded {
        frequencies,
        payload,
    }))
}

/// Encodes straight to container bytes; `None` for empty input.
pub fn compress(content: &[u8]) -> Result<Option<Vec<u8>>, HuffmanError> {
    encode(content)?
        .map(|encoded| encoded.to_container())
        .transpose()
}

/// Rebuilds the original bytes from a container.
pub fn decode(container: &[u8]) -> Result<Vec<u8>, HuffmanError> {
    let (frequencies, payload) = read_container(container)?;
    debug!("rebuilt frequency table with {} symbols", frequencies.len());
    for (symbol, count) in frequencies.iter() {
        debug!("'{}' : {}", printable_symbol(symbol), count);
    }

    let tree = match HuffmanTree::new(&frequencies) {
        Some(tree) => tree,
        None if payload.is_empty() => return Ok(Vec::new()),
        None => {
            return Err(HuffmanError::corrupt(format!(
                "{} payload bytes but no symbols",
                payload.len()
            )))
        }
    };

    decode_payload(&tree, payload)
}

/// Compresses `input_file` into `output_file`.
///
/// Empty input writes nothing and returns `None`.
pub fn compress_file(
    input_file: impl AsRef<Path>,
    output_file: impl AsRef<Path>,
) -> anyhow::Result<Option<CompressionStats>> {
    let input_file = input_file.as_ref();
    let output_file = output_file.as_ref();

    let content = fs::read(input_file)
        .with_context(|| format!("failed to read {}", input_file.display()))?;
    let container = match compress(&content)? {
        Some(container) => container,
        None => {
            info!("{} is empty, nothing to compress", input_file.display());
            return Ok(None);
        }
    };

    fs::write(output_file, &container)
        .with_context(|| format!("failed to write {}", output_file.display()))?;
    info!(
        "compressed {} into {}",
        input_file.display(),
        output_file.display()
    );

    Ok(Some(CompressionStats {
        original_size: content.len() as u64,
        compressed_size: container.len() as u64,
    }))
}

/// Decompresses `input_file` into `output_file`, returning the decoded size.
pub fn decompress_file(
    input_file: impl AsRef<Path>,
    output_file: impl AsRef<Path>,
) -> anyhow::Result<usize> {
    let input_file = input_file.as_ref();
    let output_file = output_file.as_ref();

    let container = fs::read(input_file)
        .with_context(|| format!("failed to read {}", input_file.display()))?;
    let content =
        decode(&container).with_context(|| format!("failed to decode {}", input_file.display()))?;

    fs::write(output_file, &content)
        .with_context(|| format!("failed to write {}", output_file.display()))?;
    info!(
        "decompressed {} into {}",
        input_file.display(),
        output_file.display()
    );

    Ok(content.len())
}

/// Compresses `input_file` to `encoded_file`, then decompresses that into `output_file`.
pub fn encode_and_decode(
    input_file: impl AsRef<Path>,
    encoded_file: impl AsRef<Path>,
    output_file: impl AsRef<Path>,
) -> anyhow::Result<Option<CompressionStats>> {
    let stats = compress_file(input_file, encoded_file.as_ref())?;
    if stats.is_some() {
        decompress_file(encoded_file, output_file)?;
    }
    Ok(stats)
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use rstest::rstest;

    use super::{compress, decode, encode};

    #[test]
    fn test_scenario() {
        let encoded = encode(b"aaabbc").unwrap().unwrap();
        assert_eq!(encoded.frequencies.total(), 6);
        assert_eq!(encoded.payload.as_bytes(), &[0b0001_1111, 0b0000_0000]);
        assert_eq!(encoded.payload.bit_len(), 9);

        let container = encoded.to_container().unwrap();
        assert_eq!(decode(&container).unwrap(), b"aaabbc");
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(encode(b"").unwrap(), None);
        assert_eq!(compress(b"").unwrap(), None);
        assert_eq!(decode(&[0, 0, 0, 0]).unwrap(), Vec::<u8>::new());
        assert!(decode(&[0, 0, 0, 0, 1]).is_err());
    }

    // each case lands on a different padding length
    #[rstest]
    #[case::abcd(b"abcd", 0)]
    #[case::ab(b"ab", 6)]
    #[case::aab(b"aab", 5)]
    #[case::abcde(b"abcde", 4)]
    #[case::aaaaaab(b"aaaaaab", 1)]
    #[case::abc(b"abc", 3)]
    #[case::aaabbc(b"aaabbc", 7)]
    #[case::eight_bits(b"aaaaaaab", 0)]
    #[case::fourteen_bits(b"ababababababab", 2)]
    #[case::eleven_bits(b"abababababa", 5)]
    fn test_padding_lengths(#[case] input: &[u8], #[case] padding: u8) {
        let encoded = encode(input).unwrap().unwrap();
        assert_eq!(encoded.payload.padding_bits(), padding);

        let container = encoded.to_container().unwrap();
        assert_eq!(decode(&container).unwrap(), input);
    }

    #[rstest]
    #[case(b"a")]
    #[case(b"aaaaaaaa")]
    #[case(b"\x00\x00\x00")]
    #[case(&[0xFF; 1000])]
    fn test_single_symbol_round_trip(#[case] input: &[u8]) {
        let encoded = encode(input).unwrap().unwrap();
        assert_eq!(encoded.payload.bit_len(), input.len() as u64);

        let container = encoded.to_container().unwrap();
        assert_eq!(decode(&container).unwrap(), input);
    }

    #[test]
    fn test_all_byte_values() {
        let input: Vec<u8> = (0..=255u8).cycle().take(4096).collect();
        let container = compress(&input).unwrap().unwrap();
        assert_eq!(decode(&container).unwrap(), input);
    }

    proptest! {
        #[test]
        fn prop_round_trip(input in prop::collection::vec(any::<u8>(), 1..2048)) {
            let container = compress(&input).unwrap().unwrap();
            prop_assert_eq!(decode(&container).unwrap(), input);
        }

        #[test]
        fn prop_frequencies_sum_to_length(input in prop::collection::vec(any::<u8>(), 1..2048)) {
            let encoded = encode(&input).unwrap().unwrap();
            prop_assert_eq!(encoded.frequencies.total(), input.len() as u64);
        }

        #[test]
        fn prop_every_padding_length(len in 1usize..64, alphabet in 2u8..6) {
            let input: Vec<u8> = (0..len).map(|i| b'a' + (i * 7 % alphabet as usize) as u8).collect();
            let container = compress(&input).unwrap().unwrap();
            prop_assert_eq!(decode(&container).unwrap(), input);
        }
    }
}
