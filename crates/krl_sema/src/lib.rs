//! KRL Semantic Analysis
//!
//! 作用域解析：为解析得到的 AST 森林建立符号表，
//! 并把每个节点所属的作用域写回节点的 `symbol_table`。
//!
//! ```
//! use krl_syntax::Parser;
//!
//! let mut parser = Parser::new();
//! parser
//!     .add_module("Foo", "GLOBAL DEF Foo(bar:IN)\nEND", "DEFDAT Foo\nENDDAT")
//!     .unwrap();
//!
//! let tables = krl_sema::analyze(parser.ast()).unwrap();
//! assert!(tables.find("Foo.Foo").is_some());
//! ```

pub mod analyzer;
pub mod error;
pub mod scope;
pub mod symbol;

// 重新导出核心类型
pub use analyzer::SemanticAnalyzer;
pub use error::SemanticError;
pub use scope::{ScopeId, SymbolTable, SymbolTables, GLOBAL_SCOPE};
pub use symbol::{FunctionSymbol, Symbol};

use krl_syntax::ast::Node;

/// 用新的 `GLOBAL` 作用域分析整个森林
///
/// # Errors
///
/// 返回所有收集到的语义错误
pub fn analyze(forest: &[Node]) -> Result<SymbolTables, Vec<SemanticError>> {
    let mut analyzer = SemanticAnalyzer::new();
    analyzer.visit(forest)?;
    Ok(analyzer.into_tables())
}
