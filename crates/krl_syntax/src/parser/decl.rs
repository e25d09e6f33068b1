//! Declaration Parser
//!
//! 顶层定义：DEF/DEFFCT 函数、DEFDAT 数据块，以及两种文件的整体结构

use super::error::SyntaxError;
use super::helpers::{attributes_parser, ident_parser, line_breaks, type_parser, ParserError};
use super::stmt::body_parser;
use crate::ast::*;
use crate::lexer::Token;
use chumsky::prelude::*;
use krl_diagnostics::Span;

/// 程序文件: 属性行 + 函数定义
pub fn source_file_parser<'a>(
    source: &'a str,
) -> impl Parser<Token, (Vec<FileAttribute>, Vec<FunctionDefinition>), Error = ParserError> + 'a {
    line_breaks()
        .ignore_then(attributes_parser())
        .then(function_parser(source).then_ignore(line_breaks()).repeated())
        .then_ignore(end())
}

/// 数据文件: 属性行 + DEFDAT 块（数量由调用方检查）
pub fn data_file_parser(
) -> impl Parser<Token, (Vec<FileAttribute>, Vec<(DataDefinition, Span)>), Error = ParserError> {
    line_breaks()
        .ignore_then(attributes_parser())
        .then(data_definition_parser().then_ignore(line_breaks()).repeated())
        .then_ignore(end())
}

/// 函数定义
///
/// ```text
/// [GLOBAL] DEF name(params) ... END
/// [GLOBAL] DEFFCT Type name(params) ... ENDFCT
/// ```
pub fn function_parser<'a>(
    source: &'a str,
) -> impl Parser<Token, FunctionDefinition, Error = ParserError> + Clone + 'a {
    // 过程: DEF Foo(a:IN) ... END
    let procedure = just(Token::Def)
        .ignore_then(ident_parser())
        .then(parameters_parser())
        .then(body_parser(source))
        .then_ignore(just(Token::End))
        .map(|((name, parameters), body)| (name, parameters, None::<Type>, body));

    // 函数: DEFFCT INT Foo() ... ENDFCT
    let function = just(Token::DefFct)
        .ignore_then(type_parser())
        .then(ident_parser())
        .then(parameters_parser())
        .then(body_parser(source))
        .then_ignore(just(Token::EndFct))
        .map(|(((returns, name), parameters), body)| (name, parameters, Some(returns), body));

    just(Token::Global)
        .or_not()
        .then(procedure.or(function))
        .map(
            |(global, (name, parameters, returns, body))| FunctionDefinition {
                name,
                parameters,
                is_global: global.is_some(),
                returns,
                body,
                symbol_table: ScopeSlot::new(),
            },
        )
}

/// 参数列表: (bar:IN, foobar:OUT)
fn parameters_parser() -> impl Parser<Token, Vec<Parameter>, Error = ParserError> + Clone {
    ident_parser()
        .then_ignore(just(Token::Colon))
        .then(direction_parser())
        .map(|(name, parameter_type)| Parameter {
            name,
            parameter_type,
        })
        .separated_by(just(Token::Comma))
        .delimited_by(just(Token::LParen), just(Token::RParen))
}

/// 参数方向，':' 后面除了 IN/OUT/INOUT 都是错误
fn direction_parser() -> impl Parser<Token, ParameterType, Error = ParserError> + Clone {
    any::<Token, ParserError>().try_map(|tok, span| match tok {
        Token::In => Ok(ParameterType::In),
        Token::Out => Ok(ParameterType::Out),
        Token::InOut => Ok(ParameterType::InOut),
        other => Err(SyntaxError::invalid_parameter_type(span, other)),
    })
}

/// DEFDAT 块: DEFDAT Foo [PUBLIC] ... ENDDAT
///
/// 块内的声明在这一层不解析，返回块的范围用于报告重复定义。
pub fn data_definition_parser(
) -> impl Parser<Token, (DataDefinition, Span), Error = ParserError> + Clone {
    just(Token::DefDat)
        .ignore_then(ident_parser())
        .then(just(Token::Public).or_not())
        .then_ignore(filter(|tok: &Token| !matches!(tok, Token::EndDat | Token::DefDat)).repeated())
        .then_ignore(just(Token::EndDat))
        .map_with_span(|(name, public), span| {
            let definition = DataDefinition {
                name,
                is_public: public.is_some(),
                symbol_table: ScopeSlot::new(),
            };
            (definition, span)
        })
}
