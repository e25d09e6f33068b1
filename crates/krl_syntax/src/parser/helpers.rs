//! Parser Helper Functions
//!
//! 辅助解析函数：标识符、类型、换行、文件属性

use super::error::SyntaxError;
use crate::ast::{FileAttribute, Type};
use crate::lexer::Token;
use chumsky::prelude::*;

pub type ParserError = SyntaxError;

/// 解析标识符
pub fn ident_parser() -> impl Parser<Token, String, Error = ParserError> + Clone {
    select! { Token::Ident(ident) => ident }
}

/// 解析类型名: INT, REAL, E6POS ...
pub fn type_parser() -> impl Parser<Token, Type, Error = ParserError> + Clone {
    ident_parser().map(|name| Type { name }).labelled("type")
}

/// 零个或多个换行（空行只是分隔符）
pub fn line_breaks() -> impl Parser<Token, (), Error = ParserError> + Clone {
    just(Token::Newline).repeated().ignored()
}

/// 语句结束：换行或块关键字，只向前看不消耗
pub fn statement_end() -> impl Parser<Token, (), Error = ParserError> + Clone {
    filter(|tok: &Token| *tok == Token::Newline || tok.is_block_keyword())
        .ignored()
        .rewind()
}

/// 文件开头的 `&` 属性行
pub fn attributes_parser() -> impl Parser<Token, Vec<FileAttribute>, Error = ParserError> + Clone
{
    select! { Token::Attribute(value) => FileAttribute { value } }
        .then_ignore(line_breaks())
        .repeated()
}
