use krl_diagnostics::Span;
use logos::Logos;
use std::fmt;

#[derive(Logos, Debug, PartialEq, Eq, Hash, Clone)]
#[logos(skip r"[ \t\f\r]+")]
pub enum Token {
    // --- 关键字 (Keywords)，KRL 不区分大小写 ---
    #[token("GLOBAL", ignore(ascii_case))]
    Global,
    #[token("DEF", ignore(ascii_case))]
    Def,
    #[token("DEFFCT", ignore(ascii_case))]
    DefFct,
    #[token("END", ignore(ascii_case))]
    End,
    #[token("ENDFCT", ignore(ascii_case))]
    EndFct,
    #[token("DEFDAT", ignore(ascii_case))]
    DefDat,
    #[token("ENDDAT", ignore(ascii_case))]
    EndDat,
    #[token("PUBLIC", ignore(ascii_case))]
    Public,
    #[token("DECL", ignore(ascii_case))]
    Decl,

    // 参数方向
    #[token("IN", ignore(ascii_case))]
    In,
    #[token("OUT", ignore(ascii_case))]
    Out,
    #[token("INOUT", ignore(ascii_case))]
    InOut,

    // --- 符号 (Symbols) ---
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token("[")]
    LBracket,
    #[token("]")]
    RBracket,
    #[token("{")]
    LBrace,
    #[token("}")]
    RBrace,
    #[token(",")]
    Comma,
    #[token(":")]
    Colon,
    #[token(".")]
    Dot,
    #[token("=")]
    Eq,
    #[regex(r"[+\-*/<>]=?|<>|==", |lex| lex.slice().to_string())]
    Operator(String),

    // 换行是语句分隔符
    #[token("\n")]
    Newline,

    // 文件属性行: &ACCESS RVP，保存 '&' 之后的原文
    #[regex(r"&[^\r\n]*", |lex| lex.slice()[1..].to_string())]
    Attribute(String),

    // --- 复杂数据 (Data) ---
    // '$' 开头的是系统变量，例如 $OV_PRO
    #[regex(r"[A-Za-z_$][A-Za-z0-9_$]*", |lex| lex.slice().to_string())]
    Ident(String),

    // 超出 u32 的整数当作无法识别的字符处理
    #[regex(r"[0-9]+", |lex| lex.slice().parse().ok())]
    Int(u32),

    // 为了 Hash 实现，Real 存原文
    #[regex(r"[0-9]+\.[0-9]+([eE][+-]?[0-9]+)?", |lex| lex.slice().to_string())]
    Real(String),

    #[regex(r#""[^"\r\n]*""#, |lex| {
        let s = lex.slice();
        s[1..s.len() - 1].to_string()
    })]
    Str(String),

    // 枚举值: #BASE
    #[regex(r"#[A-Za-z_][A-Za-z0-9_]*", |lex| lex.slice()[1..].to_string())]
    EnumLiteral(String),

    #[regex(r";[^\n]*", logos::skip)]
    Comment,

    /// 无法识别的字符，留给 parser 报告
    Unknown(String),
}

impl Token {
    /// 结束或开始一个顶层块的关键字，函数体里的任意语句都不能越过它们
    pub fn is_block_keyword(&self) -> bool {
        matches!(
            self,
            Token::Global
                | Token::Def
                | Token::DefFct
                | Token::End
                | Token::EndFct
                | Token::DefDat
                | Token::EndDat
        )
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Global => write!(f, "GLOBAL"),
            Token::Def => write!(f, "DEF"),
            Token::DefFct => write!(f, "DEFFCT"),
            Token::End => write!(f, "END"),
            Token::EndFct => write!(f, "ENDFCT"),
            Token::DefDat => write!(f, "DEFDAT"),
            Token::EndDat => write!(f, "ENDDAT"),
            Token::Public => write!(f, "PUBLIC"),
            Token::Decl => write!(f, "DECL"),
            Token::In => write!(f, "IN"),
            Token::Out => write!(f, "OUT"),
            Token::InOut => write!(f, "INOUT"),
            Token::LParen => write!(f, "("),
            Token::RParen => write!(f, ")"),
            Token::LBracket => write!(f, "["),
            Token::RBracket => write!(f, "]"),
            Token::LBrace => write!(f, "{{"),
            Token::RBrace => write!(f, "}}"),
            Token::Comma => write!(f, ","),
            Token::Colon => write!(f, ":"),
            Token::Dot => write!(f, "."),
            Token::Eq => write!(f, "="),
            Token::Newline => write!(f, "line break"),
            Token::Attribute(text) => write!(f, "&{}", text),
            Token::Int(n) => write!(f, "{}", n),
            Token::Str(s) => write!(f, "\"{}\"", s),
            Token::EnumLiteral(name) => write!(f, "#{}", name),
            Token::Operator(text)
            | Token::Ident(text)
            | Token::Real(text)
            | Token::Unknown(text) => write!(f, "{}", text),
            Token::Comment => write!(f, "comment"),
        }
    }
}

/// 把一个文件的原文切成 token 序列
///
/// 词法分析本身不会失败：无法识别的字符变成 [`Token::Unknown`]，
/// 由 parser 结合上下文报错。空白行只产生 [`Token::Newline`]。
pub fn lex(source: &str) -> Vec<(Token, Span)> {
    Token::lexer(source)
        .spanned()
        .map(|(tok, span)| match tok {
            Ok(tok) => (tok, span),
            Err(()) => (Token::Unknown(source[span.clone()].to_string()), span),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(source: &str) -> Vec<Token> {
        lex(source).into_iter().map(|(tok, _)| tok).collect()
    }

    #[test]
    fn test_lexer_header() {
        assert_eq!(
            tokens("GLOBAL DEF Foo(bar:IN, foobar:OUT)"),
            vec![
                Token::Global,
                Token::Def,
                Token::Ident("Foo".to_string()),
                Token::LParen,
                Token::Ident("bar".to_string()),
                Token::Colon,
                Token::In,
                Token::Comma,
                Token::Ident("foobar".to_string()),
                Token::Colon,
                Token::Out,
                Token::RParen,
            ]
        );
    }

    #[test]
    fn test_keywords_ignore_case() {
        assert_eq!(
            tokens("deffct int Foo() endfct"),
            vec![
                Token::DefFct,
                Token::Ident("int".to_string()),
                Token::Ident("Foo".to_string()),
                Token::LParen,
                Token::RParen,
                Token::EndFct,
            ]
        );
    }

    #[test]
    fn test_keyword_prefix_is_identifier() {
        assert_eq!(
            tokens("INT INDEX DEFAULT"),
            vec![
                Token::Ident("INT".to_string()),
                Token::Ident("INDEX".to_string()),
                Token::Ident("DEFAULT".to_string()),
            ]
        );
    }

    #[test]
    fn test_attribute_line() {
        assert_eq!(
            tokens("&COMMENT Hello\r\nDEF"),
            vec![
                Token::Attribute("COMMENT Hello".to_string()),
                Token::Newline,
                Token::Def,
            ]
        );
    }

    #[test]
    fn test_blank_lines_and_comments() {
        assert_eq!(
            tokens("END ; done\n\n   \n"),
            vec![Token::End, Token::Newline, Token::Newline, Token::Newline]
        );
    }

    #[test]
    fn test_literals() {
        assert_eq!(
            tokens("Foo(1, 2.5, \"txt\", #BASE, $OV_PRO)"),
            vec![
                Token::Ident("Foo".to_string()),
                Token::LParen,
                Token::Int(1),
                Token::Comma,
                Token::Real("2.5".to_string()),
                Token::Comma,
                Token::Str("txt".to_string()),
                Token::Comma,
                Token::EnumLiteral("BASE".to_string()),
                Token::Comma,
                Token::Ident("$OV_PRO".to_string()),
                Token::RParen,
            ]
        );
    }

    #[test]
    fn test_unknown_character_is_kept() {
        let lexed = lex("DEF Foo() ?");
        let (last, span) = lexed.last().unwrap();
        assert_eq!(last, &Token::Unknown("?".to_string()));
        assert_eq!(span, &(10..11));
    }

    #[test]
    fn test_spans() {
        let lexed = lex("DECL INT bar[10]");
        let spans: Vec<_> = lexed.iter().map(|(_, span)| span.clone()).collect();
        assert_eq!(spans, vec![0..4, 5..8, 9..12, 12..13, 13..15, 15..16]);
    }

    #[test]
    fn test_display_round_trips_source_text() {
        assert_eq!(Token::Str("a".to_string()).to_string(), "\"a\"");
        assert_eq!(Token::EnumLiteral("BASE".to_string()).to_string(), "#BASE");
        assert_eq!(Token::InOut.to_string(), "INOUT");
    }
}
