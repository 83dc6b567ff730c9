pub mod bits;
pub mod container;
pub mod decoder;
pub mod encode_decode;
pub mod error;
pub mod frequency;
pub mod min_heap;
pub mod prefix_code_table;
mod printable;
pub mod stats;
pub mod tree;

pub use encode_decode::{
    compress, compress_file, decode, decompress_file, encode, encode_and_decode, Encoded,
};
pub use error::HuffmanError;
pub use frequency::FrequencyTable;
