use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompressionStats {
    pub original_size: u64,
    pub compressed_size: u64,
}

impl CompressionStats {
    /// Percentage of the original size saved; negative when the container is larger.
    pub fn space_saved_percent(&self) -> f64 {
        if self.original_size == 0 {
            return 0.0;
        }
        (1.0 - self.compressed_size as f64 / self.original_size as f64) * 100.0
    }
}

impl fmt::Display for CompressionStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Original Size:   {} bytes", self.original_size)?;
        writeln!(f, "Compressed Size: {} bytes", self.compressed_size)?;
        write!(f, "Space Saved:     {:.2}%", self.space_saved_percent())
    }
}
