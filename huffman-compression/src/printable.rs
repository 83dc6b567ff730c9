// we don't want to print the actual white space or control bytes
// but their unicode encoding
pub fn printable_symbol(symbol: u8) -> String {
    match symbol {
        b'\t' => "\\u{0009}".to_owned(),
        b'\n' => "\\u{000A}".to_owned(),
        b'\r' => "\\u{000D}".to_owned(),
        b' ' => "\\u{0020}".to_owned(),
        s if s.is_ascii_graphic() => char::from(s).to_string(),
        s => format!("\\x{s:02X}"),
    }
}
