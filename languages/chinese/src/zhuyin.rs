/// Render a reading as Zhuyin (Bopomofo).
///
/// Readings are currently passed through unchanged.
pub fn to_zhuyin(pinyin: &str) -> String {
    pinyin.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_passthrough() {
        assert_eq!(to_zhuyin("nǐ hǎo"), "nǐ hǎo");
    }
}
