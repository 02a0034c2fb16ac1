//! Tokenizer for memorization passages.
//!
//! Text is split into lines, and each line is scanned character by character:
//! CJK ideographs and punctuation become single-character tokens, spaces become
//! space tokens, and everything else accumulates into word tokens.
//!
//! ```text
//! "慈母手中線，遊子身上衣。"  ->  慈 母 手 中 線 ， 遊 子 身 上 衣 。
//! "I have a dream."           ->  I ␠ have ␠ a ␠ dream .
//! ```
//!
//! Concatenating the token contents always reproduces the input.

use crate::types::{Token, TokenKind};

/// Punctuation emitted as standalone tokens (full-width CJK and Latin).
pub const PUNCTUATION: &[char] = &[
    '，', '。', '！', '？', '：', '；', '、', '「', '」', '『', '』', ',', '.', '!', '?', ';',
    ':', '"', '\'', '(', ')', '-',
];

/// Check whether a character is a CJK unified ideograph.
pub fn is_cjk(c: char) -> bool {
    ('\u{4E00}'..='\u{9FA5}').contains(&c)
}

/// Check whether a character is tokenized as punctuation.
pub fn is_punctuation(c: char) -> bool {
    PUNCTUATION.contains(&c)
}

/// Check whether the text contains any CJK ideograph.
pub fn contains_cjk(text: &str) -> bool {
    text.chars().any(is_cjk)
}

/// Split text into a token sequence.
pub fn tokenize(text: &str) -> Vec<Token> {
    let mut tokenizer = Tokenizer::new();

    for line in text.split('\n') {
        tokenizer.process_line(line);
    }

    tokenizer.finalize()
}

struct Tokenizer {
    tokens: Vec<Token>,
    buffer: String,
}

impl Tokenizer {
    fn new() -> Self {
        Self {
            tokens: Vec::new(),
            buffer: String::new(),
        }
    }

    fn process_line(&mut self, line: &str) {
        for c in line.chars() {
            if is_cjk(c) {
                self.flush_buffer();
                self.push_char(TokenKind::CjkChar, c);
            } else if is_punctuation(c) {
                self.flush_buffer();
                self.push_char(TokenKind::Punctuation, c);
            } else if c == ' ' {
                self.flush_buffer();
                self.push_char(TokenKind::Space, c);
            } else {
                self.buffer.push(c);
            }
        }

        self.flush_buffer();
        self.push_char(TokenKind::Newline, '\n');
    }

    fn push_char(&mut self, kind: TokenKind, c: char) {
        let index = self.tokens.len();
        self.tokens.push(Token::new(kind, c, index));
    }

    fn flush_buffer(&mut self) {
        if self.buffer.is_empty() {
            return;
        }

        let index = self.tokens.len();
        let content = std::mem::take(&mut self.buffer);
        self.tokens.push(Token::new(TokenKind::Word, content, index));
    }

    fn finalize(mut self) -> Vec<Token> {
        // The last line always ends with a synthetic newline.
        if matches!(self.tokens.last(), Some(t) if t.kind == TokenKind::Newline) {
            self.tokens.pop();
        }
        self.tokens
    }
}

/// Reassemble the source text from a token sequence.
pub fn detokenize(tokens: &[Token]) -> String {
    tokens.iter().map(|t| t.content.as_str()).collect()
}
