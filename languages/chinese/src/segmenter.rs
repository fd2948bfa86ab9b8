use zhuyi_core::Token;

use crate::dictionary::DictTable;

/// Longest dictionary window tried at each position, in characters
pub const MAX_WORD_CHARS: usize = 8;

/// CJK Unified Ideographs, basic block as used by the dictionaries
pub fn is_cjk(c: char) -> bool {
    ('\u{4e00}'..='\u{9fa5}').contains(&c)
}

/// Greedy longest-match segmentation.
///
/// At each position the longest window (8 down to 2 characters) found in
/// `dictionary` becomes a word. Otherwise one character is consumed: an
/// ideograph becomes a single-character word, `\n` a newline token, other
/// non-whitespace a symbol, and remaining whitespace is dropped.
pub fn segment(text: &str, dictionary: &DictTable) -> Vec<Token> {
    let chars: Vec<(usize, char)> = text.char_indices().collect();
    let byte_at = |idx: usize| chars.get(idx).map(|(b, _)| *b).unwrap_or(text.len());

    let mut tokens = Vec::new();
    let mut i = 0;

    while i < chars.len() {
        let start = chars[i].0;
        let longest = MAX_WORD_CHARS.min(chars.len() - i);

        let matched = (2..=longest).rev().find_map(|len| {
            let candidate = &text[start..byte_at(i + len)];
            dictionary.contains(candidate).then_some((len, candidate))
        });

        if let Some((len, word)) = matched {
            tokens.push(Token::Chinese(word.to_string()));
            i += len;
            continue;
        }

        let c = chars[i].1;
        if is_cjk(c) {
            tokens.push(Token::Chinese(c.to_string()));
        } else if c == '\n' {
            tokens.push(Token::Newline);
        } else if !c.is_whitespace() {
            tokens.push(Token::Symbol(c.to_string()));
        }
        i += 1;
    }

    tokens
}

#[cfg(test)]
mod tests {
    use zhuyi_core::DictEntry;

    use super::*;

    fn dict(words: &[&str]) -> DictTable {
        words
            .iter()
            .map(|w| (*w, DictEntry::new("x1", "test")))
            .collect()
    }

    fn texts(tokens: &[Token]) -> Vec<&str> {
        tokens.iter().map(|t| t.text()).collect()
    }

    #[test]
    fn test_greedy_prefers_longest() {
        let dictionary = dict(&["学习", "习"]);
        let tokens = segment("学习", &dictionary);

        assert_eq!(tokens, vec![Token::Chinese("学习".to_string())]);
    }

    #[test]
    fn test_longest_of_nested_words() {
        let dictionary = dict(&["中华", "人民", "共和国", "中华人民共和国"]);
        let tokens = segment("中华人民共和国万岁", &dictionary);

        assert_eq!(texts(&tokens), vec!["中华人民共和国", "万", "岁"]);
    }

    #[test]
    fn test_no_backtracking() {
        // 研究生 wins at position 0 even though 研究 + 生命 would cover more
        let dictionary = dict(&["研究", "研究生", "生命"]);
        let tokens = segment("研究生命", &dictionary);

        assert_eq!(texts(&tokens), vec!["研究生", "命"]);
    }

    #[test]
    fn test_window_capped_at_eight() {
        let nine = "一二三四五六七八九";
        let dictionary = dict(&[nine, "一二三四五六七八"]);
        let tokens = segment(nine, &dictionary);

        assert_eq!(texts(&tokens), vec!["一二三四五六七八", "九"]);
    }

    #[test]
    fn test_single_chars_are_not_dictionary_matched() {
        // single ideographs come out whether or not they are in the table
        let dictionary = dict(&[]);
        let tokens = segment("好", &dictionary);

        assert_eq!(tokens, vec![Token::Chinese("好".to_string())]);
    }

    #[test]
    fn test_symbols_whitespace_and_newlines() {
        let dictionary = dict(&["你好"]);
        let tokens = segment("你好, A1 \t世界！\n再见", &dictionary);

        assert_eq!(
            tokens,
            vec![
                Token::Chinese("你好".to_string()),
                Token::Symbol(",".to_string()),
                Token::Symbol("A".to_string()),
                Token::Symbol("1".to_string()),
                Token::Chinese("世".to_string()),
                Token::Chinese("界".to_string()),
                Token::Symbol("！".to_string()),
                Token::Newline,
                Token::Chinese("再".to_string()),
                Token::Chinese("见".to_string()),
            ]
        );
    }

    #[test]
    fn test_multi_char_match_may_hold_non_cjk() {
        let dictionary = dict(&["卡拉OK"]);
        let tokens = segment("唱卡拉OK", &dictionary);

        assert_eq!(texts(&tokens), vec!["唱", "卡拉OK"]);
    }

    #[test]
    fn test_ideographs_outside_basic_block_are_symbols() {
        let tokens = segment("〇㐀", &dict(&[]));
        assert_eq!(
            tokens,
            vec![Token::Symbol("〇".to_string()), Token::Symbol("㐀".to_string())]
        );
    }

    #[test]
    fn test_non_cjk_input_has_no_chinese_tokens() {
        let tokens = segment("Hello, world!\n42", &dict(&["你好"]));

        assert!(tokens.iter().all(|t| !t.is_chinese()));
        assert_eq!(texts(&tokens).concat(), "Hello,world!\n42");
    }

    #[test]
    fn test_round_trip_without_plain_whitespace() {
        let dictionary = dict(&["学习", "中文", "今天", "天气"]);
        let input = "学习 中文，很有趣。\n今天  天气很好！ ok";
        let tokens = segment(input, &dictionary);

        let rebuilt: String = texts(&tokens).concat();
        let expected: String = input
            .chars()
            .filter(|c| *c == '\n' || !c.is_whitespace())
            .collect();
        assert_eq!(rebuilt, expected);
    }

    #[test]
    fn test_deterministic() {
        let dictionary = dict(&["学习", "学生", "生活"]);
        let input = "学生学习生活";

        assert_eq!(segment(input, &dictionary), segment(input, &dictionary));
    }

    #[test]
    fn test_empty() {
        assert!(segment("", &dict(&["你好"])).is_empty());
    }
}
