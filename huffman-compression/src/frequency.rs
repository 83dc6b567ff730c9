use std::{collections::HashMap, io::Write};

use itertools::Itertools;

use crate::printable::printable_symbol;

/// Number of occurrences of every byte value present in an input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyTable(HashMap<u8, u64>);

impl FrequencyTable {
    pub fn new(content: &[u8]) -> Self {
        let counts = content
            .iter()
            .copied()
            .counts()
            .into_iter()
            .map(|(symbol, count)| (symbol, count as u64))
            .collect();
        Self(counts)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of distinct symbols.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, symbol: u8) -> Option<u64> {
        self.0.get(&symbol).copied()
    }

    /// Sum of all counts, which is the length of the input the table was built from.
    pub fn total(&self) -> u64 {
        self.0.values().sum()
    }

    /// Entries in ascending symbol order.
    pub fn iter(&self) -> impl Iterator<Item = (u8, u64)> + '_ {
        self.0
            .iter()
            .map(|(&symbol, &count)| (symbol, count))
            .sorted_by_key(|&(symbol, _)| symbol)
    }

    /// Returns `false` when the symbol was already present.
    pub(crate) fn insert(&mut self, symbol: u8, count: u64) -> bool {
        self.0.insert(symbol, count).is_none()
    }

    /// Writes one `'symbol' : count` line per entry.
    pub fn dump<W: Write>(&self, writer: &mut W) -> std::io::Result<()> {
        for (symbol, count) in self.iter() {
            writeln!(writer, "'{}' : {}", printable_symbol(symbol), count)?;
        }
        Ok(())
    }
}

impl FromIterator<(u8, u64)> for FrequencyTable {
    fn from_iter<T: IntoIterator<Item = (u8, u64)>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::FrequencyTable;

    #[rstest]
    #[case(b"", 0)]
    #[case(b"a", 1)]
    #[case(b"aaabbc", 3)]
    #[case(b"hello world", 8)]
    fn test_distinct_symbols(#[case] input: &[u8], #[case] expected: usize) {
        let table = FrequencyTable::new(input);
        assert_eq!(table.len(), expected);
        assert_eq!(table.total(), input.len() as u64);
    }

    #[test]
    fn test_counts() {
        let table = FrequencyTable::new(b"aaabbc");
        assert_eq!(table.get(b'a'), Some(3));
        assert_eq!(table.get(b'b'), Some(2));
        assert_eq!(table.get(b'c'), Some(1));
        assert_eq!(table.get(b'd'), None);
    }

    #[test]
    fn test_iteration_is_sorted_by_symbol() {
        let table = FrequencyTable::new(b"zyxzyz\x00");
        let symbols: Vec<u8> = table.iter().map(|(symbol, _)| symbol).collect();
        assert_eq!(symbols, vec![0, b'x', b'y', b'z']);
    }

    #[test]
    fn test_dump() {
        let table = FrequencyTable::new(b"a a\n");
        let mut out = Vec::new();
        table.dump(&mut out).unwrap();
        let dump = String::from_utf8(out).unwrap();
        assert_eq!(dump, "'\\u{000A}' : 1\n'\\u{0020}' : 1\n'a' : 2\n");
    }
}
