//! KRL Syntax
//!
//! KRL 前端的语法层：词法分析 ([`lexer`])、语法分析 ([`parser`]) 和两者共享的
//! AST ([`ast`])。
//!
//! 一个 KRL 模块由程序文件 (`.src`) 和数据文件 (`.dat`) 组成，
//! [`Parser`] 分别解析它们，或者用 [`Parser::add_module`] 成对解析后组合成 [`ast::Module`]。
//!
//! ```rust
//! use krl_syntax::Parser;
//!
//! let mut parser = Parser::new();
//! parser
//!     .add_module("Foo", "GLOBAL DEF Foo(bar:IN)\nEND", "DEFDAT Foo\nENDDAT")
//!     .unwrap();
//! assert_eq!(parser.ast().len(), 1);
//! ```

pub mod ast;
pub mod error;
pub mod lexer;
pub mod parser;

pub use error::ParsingError;
pub use parser::{parse_data_file, parse_module, parse_source_file, Parser};
