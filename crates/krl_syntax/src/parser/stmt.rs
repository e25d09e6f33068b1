//! Statement Parser
//!
//! 函数体语句：变量声明、函数调用，其余整行作为 Unsupported 保留

use super::error::SyntaxError;
use super::helpers::{ident_parser, line_breaks, statement_end, type_parser, ParserError};
use crate::ast::*;
use crate::lexer::Token;
use chumsky::prelude::*;
use krl_diagnostics::Span;

/// 解析函数体（到 END/ENDFCT 之前为止）
///
/// `source` 是整个文件的原文，Unsupported 语句从中截取
pub fn body_parser<'a>(
    source: &'a str,
) -> impl Parser<Token, Vec<Statement>, Error = ParserError> + Clone + 'a {
    line_breaks().ignore_then(
        stmt_parser(source)
            .then_ignore(line_breaks())
            .repeated()
            .flatten(),
    )
}

/// 解析一行语句
///
/// 一条 DECL 可以声明多个变量，所以返回 Vec
pub fn stmt_parser<'a>(
    source: &'a str,
) -> impl Parser<Token, Vec<Statement>, Error = ParserError> + Clone + 'a {
    choice((
        decl_parser(),
        call_parser().map(|call| vec![call]),
        unsupported_parser(source),
    ))
}

/// 变量声明: DECL INT bar1[1, 1], bar2[10]
fn decl_parser() -> impl Parser<Token, Vec<Statement>, Error = ParserError> + Clone {
    just(Token::Decl)
        .ignore_then(type_parser())
        .then(
            declarator_parser()
                .separated_by(just(Token::Comma))
                .at_least(1),
        )
        .then_ignore(statement_end())
        .map(|(symbol_type, declarators)| {
            declarators
                .into_iter()
                .map(|(name, dimensions)| {
                    Statement::VariableDeclaration(VariableSymbol {
                        name,
                        symbol_type: symbol_type.clone(),
                        dimensions,
                    })
                })
                .collect()
        })
}

/// 单个声明项: bar 或 bar[d1, d2, d3]
fn declarator_parser() -> impl Parser<Token, (String, Vec<u32>), Error = ParserError> + Clone {
    let dimension = select! { Token::Int(n) => n }
        .labelled("array dimension")
        .map_with_span(|n, span: Span| (n, span));

    let dimensions = dimension
        .separated_by(just(Token::Comma))
        .at_least(1)
        .delimited_by(just(Token::LBracket), just(Token::RBracket));

    ident_parser()
        .labelled("variable name")
        .then(dimensions.or_not())
        .try_map(|(name, dimensions), _span| {
            let dimensions = dimensions.unwrap_or_default();
            // 报告在第四个维度上
            if let Some((_, span)) = dimensions.get(VariableSymbol::MAX_DIMENSIONS) {
                return Err(SyntaxError::excess_array_dimensions(span.clone(), name));
            }
            Ok((
                name,
                dimensions.into_iter().map(|(n, _)| n).collect::<Vec<u32>>(),
            ))
        })
}

/// 函数调用: Bar(foo, 1)
fn call_parser() -> impl Parser<Token, Statement, Error = ParserError> + Clone {
    let argument = select! {
        Token::Ident(name) => name,
        Token::Int(n) => n.to_string(),
        Token::Real(text) => text,
        Token::Str(text) => format!("\"{}\"", text),
        Token::EnumLiteral(name) => format!("#{}", name),
    };

    ident_parser()
        .then(
            argument
                .separated_by(just(Token::Comma))
                .delimited_by(just(Token::LParen), just(Token::RParen)),
        )
        .then_ignore(statement_end())
        .map(|(name, parameters)| Statement::FunctionCall(FunctionCall { name, parameters }))
}

/// 这一层不解析的语句，吃掉整行并保存原文
///
/// DECL 开头的行必须按声明解析，否则维度超限之类的错误会被吞掉。
/// 行尾的 `;` 注释和其他语句一样不保留。
fn unsupported_parser<'a>(
    source: &'a str,
) -> impl Parser<Token, Vec<Statement>, Error = ParserError> + Clone + 'a {
    let first = filter(|tok: &Token| {
        !matches!(tok, Token::Newline | Token::Decl | Token::Attribute(_)) && !tok.is_block_keyword()
    });
    let rest = filter(|tok: &Token| *tok != Token::Newline && !tok.is_block_keyword());

    first
        .chain(rest.repeated())
        .map_with_span(move |_: Vec<Token>, span: Span| {
            let text = source.get(span).unwrap_or_default().trim();
            vec![Statement::Unsupported(text.to_string())]
        })
}
