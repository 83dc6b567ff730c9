use std::collections::HashMap;

use bit_vec::BitVec;
use itertools::Itertools;

use crate::{
    printable::printable_symbol,
    tree::{HuffmanTree, Node},
};

/// Bit sequence assigned to every symbol of a tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeTable(HashMap<u8, BitVec>);

impl CodeTable {
    /// A tree made of a single leaf has no edges to walk, so its symbol gets
    /// the one-bit code `0` rather than an empty code.
    pub fn new(tree: &HuffmanTree) -> Self {
        let mut result = HashMap::new();
        match tree.root() {
            Node::Leaf { symbol, .. } => {
                result.insert(*symbol, BitVec::from_elem(1, false));
            }
            root => {
                let mut code = BitVec::new();
                generate_codes_inner(root, &mut code, &mut result);
            }
        }
        Self(result)
    }

    pub fn get(&self, symbol: u8) -> Option<&BitVec> {
        self.0.get(&symbol)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Codes in ascending symbol order.
    pub fn iter(&self) -> impl Iterator<Item = (u8, &BitVec)> + '_ {
        self.0
            .iter()
            .map(|(&symbol, code)| (symbol, code))
            .sorted_by_key(|&(symbol, _)| symbol)
    }

    pub(crate) fn log(&self) {
        for (symbol, code) in self.iter() {
            let code = code.iter().map(|bit| if bit { '1' } else { '0' }).join("");
            log::debug!("'{}' {}", printable_symbol(symbol), code);
        }
    }
}

fn generate_codes_inner(
    node: &Node,
    current_code: &mut BitVec,
    result: &mut HashMap<u8, BitVec>,
) {
    match node {
        Node::Leaf { symbol, .. } => {
            result.insert(*symbol, current_code.clone());
        }
        Node::Internal { left, right, .. } => {
            current_code.push(false);
            generate_codes_inner(left, current_code, result);
            current_code.pop();

            current_code.push(true);
            generate_codes_inner(right, current_code, result);
            current_code.pop();
        }
    }
}
