//! Sentence and word tokenization
//!
//! A small rule-based tokenizer: sentences end at `.`, `!`, `?` or `…`
//! followed by whitespace and the start of a new sentence, with per-language
//! abbreviation handling so "Mr. Smith" or "т. д." do not split. Words are
//! maximal alphanumeric runs; only fully alphabetic tokens count toward a
//! sentence's word length.

use std::str::FromStr;
use thiserror::Error;

/// Hard cap on a single sentence fed to the word tokenizer.
///
/// A sentence this large almost certainly means boundary detection found no
/// terminators in machine-generated input; the caller records it as length 0
/// instead of churning through it.
pub const MAX_SENTENCE_BYTES: usize = 512 * 1024;

/// Tokenization failures surfaced to callers
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TokenizeError {
    #[error("unsupported language tag '{0}' (supported: english, russian)")]
    UnsupportedLanguage(String),

    #[error("sentence of {len} bytes exceeds the tokenizer limit of {max} bytes")]
    SentenceTooLong { len: usize, max: usize },
}

/// Tokenization locale
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    English,
    Russian,
}

impl Language {
    /// Short language code
    pub fn code(&self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Russian => "ru",
        }
    }

    /// Lowercased abbreviations that end with a period without ending a
    /// sentence. Single-letter initials are handled separately.
    fn abbreviations(&self) -> &'static [&'static str] {
        match self {
            Language::English => &[
                "mr", "mrs", "ms", "dr", "prof", "st", "vs", "etc", "e.g", "i.e", "cf", "fig",
                "vol", "no", "approx",
            ],
            Language::Russian => &[
                "т.д", "т.п", "т.е", "гг", "им", "см", "напр", "руб", "тыс", "млн", "млрд",
            ],
        }
    }
}

impl FromStr for Language {
    type Err = TokenizeError;

    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        match tag.trim().to_lowercase().as_str() {
            "english" | "eng" | "en" => Ok(Language::English),
            "russian" | "rus" | "ru" => Ok(Language::Russian),
            _ => Err(TokenizeError::UnsupportedLanguage(tag.to_string())),
        }
    }
}

fn is_terminator(c: char) -> bool {
    matches!(c, '.' | '!' | '?' | '…')
}

/// Closing punctuation that may trail a terminator and still belong to the
/// finished sentence, e.g. `He said "stop."` or `(Да!)`.
fn is_closer(c: char) -> bool {
    matches!(c, '"' | '\'' | '»' | ')' | ']')
}

fn opens_sentence(c: char) -> bool {
    c.is_uppercase() || c.is_numeric() || matches!(c, '«' | '"' | '\'' | '(')
}

/// Split `text` into sentences.
///
/// Blank input yields an empty vec. The segmenter is deliberately
/// conservative: a terminator only closes a sentence when it is followed by
/// whitespace and something that can open a new one, or by the end of the
/// text, and a lone period after a known abbreviation or a single-letter
/// initial never closes one.
pub fn segment(text: &str, lang: Language) -> Vec<String> {
    if text.trim().is_empty() {
        return Vec::new();
    }

    let chars: Vec<char> = text.chars().collect();
    let mut sentences = Vec::new();
    let mut start = 0;
    let mut i = 0;

    while i < chars.len() {
        if !is_terminator(chars[i]) {
            i += 1;
            continue;
        }

        // Swallow the full terminator run ("..", "?!", "...") and any
        // closing quotes/brackets that belong to the sentence.
        let mut end = i + 1;
        while end < chars.len() && is_terminator(chars[end]) {
            end += 1;
        }
        while end < chars.len() && is_closer(chars[end]) {
            end += 1;
        }

        let lone_period = chars[i] == '.' && end == i + 1;
        if lone_period && is_abbreviation(&chars[start..i], lang) {
            i = end;
            continue;
        }

        if is_boundary(&chars, end) {
            push_trimmed(&mut sentences, &chars[start..end]);
            start = end;
        }
        i = end;
    }

    if start < chars.len() {
        push_trimmed(&mut sentences, &chars[start..]);
    }

    sentences
}

fn push_trimmed(sentences: &mut Vec<String>, chars: &[char]) {
    let sentence: String = chars.iter().collect();
    let sentence = sentence.trim();
    if !sentence.is_empty() {
        sentences.push(sentence.to_string());
    }
}

/// A terminator run ending at `end` closes a sentence when the text ends
/// there, or when whitespace separates it from a plausible sentence opener.
fn is_boundary(chars: &[char], end: usize) -> bool {
    let mut j = end;
    while j < chars.len() && chars[j].is_whitespace() {
        j += 1;
    }
    if j >= chars.len() {
        return true;
    }
    j > end && opens_sentence(chars[j])
}

/// Does the text before a lone period end in an abbreviation?
fn is_abbreviation(prefix: &[char], lang: Language) -> bool {
    let mut j = prefix.len();
    while j > 0 && (prefix[j - 1].is_alphanumeric() || prefix[j - 1] == '.') {
        j -= 1;
    }
    let word: String = prefix[j..].iter().collect::<String>().to_lowercase();
    let word = word.trim_matches('.');
    if word.is_empty() {
        return false;
    }
    if word.chars().count() == 1 && word.chars().all(char::is_alphabetic) {
        return true;
    }
    lang.abbreviations().contains(&word)
}

/// Split a sentence into word tokens (maximal alphanumeric runs).
///
/// Punctuation and symbols separate tokens, so `"don't"` yields
/// `["don", "t"]` and `"3.14"` yields `["3", "14"]`.
pub fn word_tokens(sentence: &str) -> Result<Vec<String>, TokenizeError> {
    if sentence.len() > MAX_SENTENCE_BYTES {
        return Err(TokenizeError::SentenceTooLong {
            len: sentence.len(),
            max: MAX_SENTENCE_BYTES,
        });
    }

    let mut tokens = Vec::new();
    let mut current = String::new();
    for ch in sentence.chars() {
        if ch.is_alphanumeric() {
            current.push(ch);
        } else if !current.is_empty() {
            tokens.push(std::mem::take(&mut current));
        }
    }
    if !current.is_empty() {
        tokens.push(current);
    }
    Ok(tokens)
}

/// Count the word tokens that consist solely of alphabetic characters.
///
/// Digits and mixed tokens ("5", "x86") are excluded, so a sentence's word
/// length is a pure prose measure.
pub fn count_words(sentence: &str) -> Result<u32, TokenizeError> {
    let tokens = word_tokens(sentence)?;
    Ok(tokens
        .iter()
        .filter(|t| t.chars().all(char::is_alphabetic))
        .count() as u32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_from_tag() {
        assert_eq!("english".parse::<Language>().unwrap(), Language::English);
        assert_eq!("EN".parse::<Language>().unwrap(), Language::English);
        assert_eq!("russian".parse::<Language>().unwrap(), Language::Russian);
        assert!(matches!(
            "klingon".parse::<Language>(),
            Err(TokenizeError::UnsupportedLanguage(_))
        ));
    }

    #[test]
    fn test_segment_empty_input() {
        assert!(segment("", Language::English).is_empty());
        assert!(segment("  \n\t ", Language::English).is_empty());
    }

    #[test]
    fn test_segment_basic() {
        let sentences = segment("One sentence. Another one! A third?", Language::English);
        assert_eq!(
            sentences,
            vec!["One sentence.", "Another one!", "A third?"]
        );
    }

    #[test]
    fn test_segment_keeps_tail_without_terminator() {
        let sentences = segment("Finished sentence. A trailing fragment", Language::English);
        assert_eq!(sentences, vec!["Finished sentence.", "A trailing fragment"]);
    }

    #[test]
    fn test_segment_lowercase_continuation_does_not_split() {
        // A terminator followed by a lowercase word reads as a continuation
        let sentences = segment("Finished sentence. trailing fragment", Language::English);
        assert_eq!(sentences, vec!["Finished sentence. trailing fragment"]);
    }

    #[test]
    fn test_segment_abbreviations_do_not_split() {
        let sentences = segment("Mr. Smith met Dr. Jones. They talked.", Language::English);
        assert_eq!(
            sentences,
            vec!["Mr. Smith met Dr. Jones.", "They talked."]
        );
    }

    #[test]
    fn test_segment_initials_do_not_split() {
        let sentences = segment("J. R. Tolkien wrote it. Everyone read it.", Language::English);
        assert_eq!(sentences.len(), 2);
    }

    #[test]
    fn test_segment_terminator_runs() {
        let sentences = segment("What?! Really... Yes.", Language::English);
        assert_eq!(sentences, vec!["What?!", "Really...", "Yes."]);
    }

    #[test]
    fn test_segment_closing_quote_stays_attached() {
        let sentences = segment("He said \"stop.\" Nobody stopped.", Language::English);
        assert_eq!(sentences, vec!["He said \"stop.\"", "Nobody stopped."]);
    }

    #[test]
    fn test_segment_russian_abbreviations() {
        let sentences = segment("Подробности см. ниже в тексте. Дальше идёт раздел.", Language::Russian);
        assert_eq!(sentences.len(), 2);
        assert!(sentences[0].contains("см. ниже"));
    }

    #[test]
    fn test_segment_abbreviation_before_capital_does_not_split() {
        // Conservative by construction: a known abbreviation never closes a
        // sentence, even when a capitalized word follows.
        let sentences = segment("Call Mr. Smith today.", Language::English);
        assert_eq!(sentences, vec!["Call Mr. Smith today."]);
    }

    #[test]
    fn test_word_tokens_split_on_punctuation() {
        let tokens = word_tokens("Hello, world (again)!").unwrap();
        assert_eq!(tokens, vec!["Hello", "world", "again"]);
    }

    #[test]
    fn test_count_words_filters_non_alphabetic() {
        // "5" is numeric, "x86" is mixed: neither counts
        assert_eq!(count_words("We shipped 5 units of x86 hardware.").unwrap(), 5);
        assert_eq!(count_words("...").unwrap(), 0);
    }

    #[test]
    fn test_count_words_splits_contractions() {
        assert_eq!(count_words("don't stop").unwrap(), 3);
    }

    #[test]
    fn test_oversized_sentence_is_rejected() {
        let big = "a".repeat(MAX_SENTENCE_BYTES + 1);
        assert!(matches!(
            word_tokens(&big),
            Err(TokenizeError::SentenceTooLong { .. })
        ));
    }
}
