//! # Lexer for FizzBuzzLang

use fbl_spec::Keyword;
use logos::Logos;
use std::ops::Range;

/// Tokens of a single source line
#[derive(Logos, Debug, Clone, Copy, PartialEq)]
#[logos(skip r"[ \t\r\n\f\v]+")]
pub enum Token<'a> {
    #[token("FIZZ")]
    Fizz,

    #[token("BUZZ")]
    Buzz,

    #[token("FIZZBUZZ")]
    FizzBuzz,

    /// Anything else (label names, typos)
    #[regex(r"[^ \t\r\n\f\v]+", |lex| lex.slice())]
    Word(&'a str),
}

impl<'a> Token<'a> {
    #[inline]
    pub fn keyword(&self) -> Option<Keyword> {
        match self {
            Token::Fizz => Some(Keyword::Fizz),
            Token::Buzz => Some(Keyword::Buzz),
            Token::FizzBuzz => Some(Keyword::FizzBuzz),
            Token::Word(_) => None,
        }
    }

    pub fn text(&self) -> &'a str {
        match self {
            Token::Fizz => "FIZZ",
            Token::Buzz => "BUZZ",
            Token::FizzBuzz => "FIZZBUZZ",
            Token::Word(word) => word,
        }
    }
}

/// Token with its byte span in the source line
#[derive(Debug, Clone, PartialEq)]
pub struct Lexeme<'a> {
    pub token: Token<'a>,
    pub span: Range<usize>,
}

impl<'a> Lexeme<'a> {
    /// 1-based character column of the token within `line`
    pub fn column(&self, line: &str) -> usize {
        line[..self.span.start].chars().count() + 1
    }
}

/// Split a line into whitespace-separated lexemes
pub fn tokenize(line: &str) -> Vec<Lexeme<'_>> {
    Token::lexer(line)
        .spanned()
        .map(|(token, span)| Lexeme {
            token: token.unwrap_or_else(|_| Token::Word(&line[span.clone()])),
            span,
        })
        .collect()
}
