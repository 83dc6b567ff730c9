use std::cmp::Ordering;

use itertools::Itertools;

use crate::{frequency::FrequencyTable, min_heap::MinHeap};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Leaf {
        symbol: u8,
        weight: u64,
    },
    Internal {
        left: Box<Node>,
        right: Box<Node>,
        weight: u64,
        /// Smallest symbol anywhere below this node.
        tie_break: u8,
    },
}

impl Node {
    fn merge(left: Node, right: Node) -> Self {
        Node::Internal {
            weight: left.weight() + right.weight(),
            tie_break: left.tie_break().min(right.tie_break()),
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    pub fn weight(&self) -> u64 {
        match self {
            Node::Leaf { weight, .. } | Node::Internal { weight, .. } => *weight,
        }
    }

    pub fn tie_break(&self) -> u8 {
        match self {
            Node::Leaf { symbol, .. } => *symbol,
            Node::Internal { tie_break, .. } => *tie_break,
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, Node::Leaf { .. })
    }
}

/// Orders nodes by weight, then by the smallest symbol they contain.
///
/// Encoding and decoding both build their tree through this function; the
/// container only stores frequencies, so any difference in ordering would
/// give the decoder a different tree.
pub fn cmp_by_weight_then_symbol(a: &Node, b: &Node) -> Ordering {
    (a.weight(), a.tie_break()).cmp(&(b.weight(), b.tie_break()))
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HuffmanTree {
    root: Node,
}

impl HuffmanTree {
    /// Returns `None` for an empty table.
    pub fn new(frequencies: &FrequencyTable) -> Option<Self> {
        let leaves = frequencies
            .iter()
            .map(|(symbol, weight)| Node::Leaf { symbol, weight })
            .collect_vec();
        let heap = MinHeap::new(leaves, cmp_by_weight_then_symbol);
        merge(heap).map(|root| HuffmanTree { root })
    }

    pub fn root(&self) -> &Node {
        &self.root
    }

    pub fn weight(&self) -> u64 {
        self.root.weight()
    }

    pub fn leaf_count(&self) -> usize {
        count_nodes(&self.root).0
    }

    pub fn internal_count(&self) -> usize {
        count_nodes(&self.root).1
    }
}

fn merge(mut heap: MinHeap<Node>) -> Option<Node> {
    loop {
        let left = heap.pop()?;
        let right = match heap.pop() {
            Some(right) => right,
            None => return Some(left),
        };
        heap.push(Node::merge(left, right));
    }
}

fn count_nodes(node: &Node) -> (usize, usize) {
    match node {
        Node::Leaf { .. } => (1, 0),
        Node::Internal { left, right, .. } => {
            let (left_leaves, left_internal) = count_nodes(left);
            let (right_leaves, right_internal) = count_nodes(right);
            (
                left_leaves + right_leaves,
                left_internal + right_internal + 1,
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::{HuffmanTree, Node};
    use crate::frequency::FrequencyTable;

    #[test]
    fn test_merging() {
        // char_mapping test data comes from
        // https://opendsa-server.cs.vt.edu/ODSA/Books/CS3/html/Huffman.html
        let char_mapping = [
            (b'Z', 2),
            (b'K', 7),
            (b'M', 24),
            (b'C', 32),
            (b'U', 37),
            (b'D', 42),
            (b'L', 42),
            (b'E', 120),
        ];

        let tree = HuffmanTree::new(&FrequencyTable::from_iter(char_mapping)).unwrap();
        assert_eq!(tree.weight(), 306);
        assert_eq!(tree.leaf_count(), 8);
        assert_eq!(tree.internal_count(), 7);
    }

    #[test]
    fn test_first_extracted_goes_left() {
        let tree = HuffmanTree::new(&FrequencyTable::new(b"aaabbc")).unwrap();

        let expected = Node::Internal {
            left: Box::new(Node::Leaf {
                symbol: b'a',
                weight: 3,
            }),
            right: Box::new(Node::Internal {
                left: Box::new(Node::Leaf {
                    symbol: b'c',
                    weight: 1,
                }),
                right: Box::new(Node::Leaf {
                    symbol: b'b',
                    weight: 2,
                }),
                weight: 3,
                tie_break: b'b',
            }),
            weight: 6,
            tie_break: b'a',
        };
        assert_eq!(tree.root(), &expected);
    }

    #[test]
    fn test_empty_table_has_no_tree() {
        assert!(HuffmanTree::new(&FrequencyTable::new(b"")).is_none());
    }

    #[rstest]
    #[case(b"x", b'x', 1)]
    #[case(b"zzzz", b'z', 4)]
    fn test_single_symbol_is_a_lone_leaf(
        #[case] input: &[u8],
        #[case] symbol: u8,
        #[case] weight: u64,
    ) {
        let tree = HuffmanTree::new(&FrequencyTable::new(input)).unwrap();
        assert_eq!(tree.root(), &Node::Leaf { symbol, weight });
        assert_eq!(tree.internal_count(), 0);
    }

    #[test]
    fn test_insertion_order_does_not_matter() {
        let forward = FrequencyTable::from_iter((0..=255u8).map(|s| (s, 1 + (s % 5) as u64)));
        let backward =
            FrequencyTable::from_iter((0..=255u8).rev().map(|s| (s, 1 + (s % 5) as u64)));

        assert_eq!(HuffmanTree::new(&forward), HuffmanTree::new(&backward));
    }
}
