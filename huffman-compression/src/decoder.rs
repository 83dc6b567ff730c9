use crate::{
    bits::unpack,
    error::HuffmanError,
    tree::{HuffmanTree, Node},
};

/// Walks a tree one bit at a time, emitting a symbol on every leaf reached.
pub struct Decoder<'a> {
    root: &'a Node,
    current: &'a Node,
}

impl<'a> Decoder<'a> {
    pub fn new(tree: &'a HuffmanTree) -> Self {
        Decoder {
            root: tree.root(),
            current: tree.root(),
        }
    }

    /// Feeds one bit; `false` descends left and `true` descends right.
    pub fn step(&mut self, bit: bool) -> Result<Option<u8>, HuffmanError> {
        let current: &'a Node = self.current;
        let next: &'a Node = match current {
            Node::Internal { left, right, .. } => {
                if bit {
                    right
                } else {
                    left
                }
            }
            // a lone leaf owns the code `0`
            Node::Leaf { symbol, .. } if !bit => return Ok(Some(*symbol)),
            Node::Leaf { .. } => {
                return Err(HuffmanError::corrupt(
                    "found a 1 bit in a payload whose only code is 0",
                ))
            }
        };

        match next {
            Node::Leaf { symbol, .. } => {
                self.current = self.root;
                Ok(Some(*symbol))
            }
            Node::Internal { .. } => {
                self.current = next;
                Ok(None)
            }
        }
    }

    /// True when no code is partially consumed.
    pub fn at_root(&self) -> bool {
        std::ptr::eq(self.current, self.root)
    }
}

/// Decodes exactly `tree.weight()` symbols from `payload`.
///
/// Whatever follows the last symbol must be zero padding inside the final
/// byte, so padding never turns into extra symbols.
pub fn decode_payload(tree: &HuffmanTree, payload: &[u8]) -> Result<Vec<u8>, HuffmanError> {
    let expected = tree.weight();
    // every symbol takes at least one bit
    let capacity = expected.min(payload.len() as u64 * 8);
    let mut output = Vec::with_capacity(capacity as usize);
    let mut decoder = Decoder::new(tree);
    let mut bits = unpack(payload);
    let mut consumed: u64 = 0;

    while (output.len() as u64) < expected {
        let bit = bits.next().ok_or_else(|| {
            HuffmanError::corrupt(format!(
                "payload ended after {} of {expected} symbols",
                output.len()
            ))
        })?;
        consumed += 1;
        if let Some(symbol) = decoder.step(bit)? {
            output.push(symbol);
        }
    }

    let used_bytes = consumed.div_ceil(8);
    if payload.len() as u64 > used_bytes {
        return Err(HuffmanError::corrupt(format!(
            "{} unexpected bytes after the last symbol",
            payload.len() as u64 - used_bytes
        )));
    }
    if bits.any(|bit| bit) {
        return Err(HuffmanError::corrupt("padding bits are not zero"));
    }

    Ok(output)
}
