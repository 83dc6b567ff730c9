use derive_more::Display;

#[derive(Debug, Display, PartialEq, Eq)]
pub enum HuffmanError {
    #[display(fmt = "corrupt container: {}", _0)]
    CorruptContainer(String),

    #[display(
        fmt = "symbol {:#04x} occurs {} times which does not fit in a container frequency",
        symbol,
        count
    )]
    FrequencyOverflow { symbol: u8, count: u64 },
}

impl HuffmanError {
    pub(crate) fn corrupt(reason: impl Into<String>) -> Self {
        HuffmanError::CorruptContainer(reason.into())
    }
}

impl std::error::Error for HuffmanError {}
