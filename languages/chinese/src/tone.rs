/// Diacritic forms per vowel, indexed by tone 1-5 (5 = neutral, unmarked)
const TONE_TABLE: [(char, [char; 5]); 7] = [
    ('a', ['ā', 'á', 'ǎ', 'à', 'a']),
    ('e', ['ē', 'é', 'ě', 'è', 'e']),
    ('i', ['ī', 'í', 'ǐ', 'ì', 'i']),
    ('o', ['ō', 'ó', 'ǒ', 'ò', 'o']),
    ('u', ['ū', 'ú', 'ǔ', 'ù', 'u']),
    ('ü', ['ǖ', 'ǘ', 'ǚ', 'ǜ', 'ü']),
    // keyboard spelling of ü
    ('v', ['ǖ', 'ǘ', 'ǚ', 'ǜ', 'v']),
];

/// Convert numbered pinyin ("ni3 hao3") to tone marks ("nǐ hǎo").
///
/// Syllables are separated by single spaces. Anything that is not
/// `letters + digit 1-5` passes through untouched, so already marked
/// text is left as is.
pub fn tone_marks(pinyin: &str) -> String {
    pinyin
        .split(' ')
        .map(mark_syllable)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Mark a single syllable. Returns the input unchanged when it has no
/// tone digit or no vowel to carry the mark.
pub fn mark_syllable(syllable: &str) -> String {
    let Some((letters, tone)) = split_tone(syllable) else {
        return syllable.to_string();
    };

    let letters = letters.replace("u:", "ü");

    match tone_position(&letters) {
        Some(idx) => {
            let vowel = letters[idx..].chars().next().unwrap_or_default();
            match marked(vowel, tone) {
                Some(mark) => {
                    let mut out = String::with_capacity(letters.len() + 1);
                    out.push_str(&letters[..idx]);
                    out.push(mark);
                    out.push_str(&letters[idx + vowel.len_utf8()..]);
                    out
                }
                None => syllable.to_string(),
            }
        }
        None => syllable.to_string(),
    }
}

/// Split `letters` and trailing tone digit, letters may be ASCII, ü or ':'
fn split_tone(syllable: &str) -> Option<(&str, u8)> {
    let last = syllable.chars().last()?;
    let tone = last.to_digit(10).filter(|d| (1..=5).contains(d))? as u8;
    // the digit is ASCII, one byte
    let letters = &syllable[..syllable.len() - 1];

    let valid = !letters.is_empty()
        && letters
            .chars()
            .all(|c| c.is_ascii_alphabetic() || c == 'ü' || c == 'Ü' || c == ':');

    valid.then_some((letters, tone))
}

/// Byte index of the vowel that carries the tone mark.
///
/// `a` first, then `e`, then the `o` of `ou`, otherwise the last vowel.
fn tone_position(letters: &str) -> Option<usize> {
    if let Some(idx) = letters.find('a') {
        return Some(idx);
    }
    if let Some(idx) = letters.find('e') {
        return Some(idx);
    }
    if letters.contains("ou") {
        return letters.find('o');
    }

    letters
        .char_indices()
        .rev()
        .find(|(_, c)| is_vowel(*c))
        .map(|(idx, _)| idx)
}

fn is_vowel(c: char) -> bool {
    TONE_TABLE.iter().any(|(vowel, _)| *vowel == c)
}

fn marked(vowel: char, tone: u8) -> Option<char> {
    TONE_TABLE
        .iter()
        .find(|(v, _)| *v == vowel)
        .map(|(_, marks)| marks[(tone - 1) as usize])
}
