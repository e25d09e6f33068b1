//! chumsky 使用的内部错误类型
//!
//! `Simple<Token>` 只能携带字符串形式的自定义错误，而调用方需要区分
//! 参数方向错误、维度超限等具体原因，所以这里自己实现 [`chumsky::Error`]，
//! 在 crate 边界再转换成 [`ParsingError`]。

use crate::error::ParsingError;
use crate::lexer::Token;
use krl_diagnostics::Span;

#[derive(Debug, Clone, PartialEq)]
pub enum SyntaxErrorKind {
    /// chumsky 产生的“期望 X，得到 Y”；None 表示输入结束
    Unexpected {
        expected: Vec<Option<Token>>,
        found: Option<Token>,
    },
    InvalidParameterType {
        found: Token,
    },
    ExcessArrayDimensions {
        name: String,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct SyntaxError {
    pub span: Span,
    pub kind: SyntaxErrorKind,
    pub label: Option<&'static str>,
}

impl SyntaxError {
    pub fn invalid_parameter_type(span: Span, found: Token) -> Self {
        Self {
            span,
            kind: SyntaxErrorKind::InvalidParameterType { found },
            label: None,
        }
    }

    pub fn excess_array_dimensions(span: Span, name: String) -> Self {
        Self {
            span,
            kind: SyntaxErrorKind::ExcessArrayDimensions { name },
            label: None,
        }
    }
}

impl chumsky::Error<Token> for SyntaxError {
    type Span = Span;
    type Label = &'static str;

    fn expected_input_found<Iter: IntoIterator<Item = Option<Token>>>(
        span: Self::Span,
        expected: Iter,
        found: Option<Token>,
    ) -> Self {
        let mut unique = Vec::new();
        for token in expected {
            if !unique.contains(&token) {
                unique.push(token);
            }
        }
        Self {
            span,
            kind: SyntaxErrorKind::Unexpected {
                expected: unique,
                found,
            },
            label: None,
        }
    }

    fn with_label(mut self, label: Self::Label) -> Self {
        // 只保留最内层的标签
        self.label.get_or_insert(label);
        self
    }

    /// 同一位置的两个错误：具体原因优先于笼统的“意外 token”
    fn merge(self, other: Self) -> Self {
        match (self.kind, other.kind) {
            (
                SyntaxErrorKind::Unexpected {
                    mut expected,
                    found,
                },
                SyntaxErrorKind::Unexpected {
                    expected: other_expected,
                    ..
                },
            ) => {
                for token in other_expected {
                    if !expected.contains(&token) {
                        expected.push(token);
                    }
                }
                Self {
                    span: self.span,
                    kind: SyntaxErrorKind::Unexpected { expected, found },
                    label: self.label.or(other.label),
                }
            }
            (SyntaxErrorKind::Unexpected { .. }, kind) => Self {
                span: other.span,
                kind,
                label: other.label.or(self.label),
            },
            (kind, _) => Self {
                span: self.span,
                kind,
                label: self.label.or(other.label),
            },
        }
    }
}

fn describe(token: &Option<Token>) -> String {
    match token {
        Some(Token::Newline) => "line break".to_string(),
        Some(token) => format!("'{}'", token),
        None => "end of input".to_string(),
    }
}

impl From<SyntaxError> for ParsingError {
    fn from(err: SyntaxError) -> Self {
        match err.kind {
            SyntaxErrorKind::Unexpected { expected, found } => {
                // 带标签的语法位置用标签代替具体的 token 列表
                let expected = match err.label {
                    Some(label) => vec![label.to_string()],
                    None => {
                        let mut expected: Vec<String> = expected.iter().map(describe).collect();
                        expected.sort();
                        expected
                    }
                };
                ParsingError::UnexpectedToken {
                    expected,
                    found: describe(&found),
                    span: err.span,
                }
            }
            SyntaxErrorKind::InvalidParameterType { found } => {
                ParsingError::InvalidParameterType {
                    found: found.to_string(),
                    span: err.span,
                }
            }
            SyntaxErrorKind::ExcessArrayDimensions { name } => {
                ParsingError::ExcessArrayDimensions {
                    name,
                    span: err.span,
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chumsky::Error;

    fn unexpected(span: Span, expected: Vec<Token>, found: Token) -> SyntaxError {
        SyntaxError::expected_input_found(span, expected.into_iter().map(Some), Some(found))
    }

    #[test]
    fn test_merge_unexpected_joins_expected() {
        let a = unexpected(5..6, vec![Token::RParen], Token::End);
        let b = unexpected(5..6, vec![Token::Comma, Token::RParen], Token::End);

        let merged = a.merge(b);
        assert_eq!(
            merged.kind,
            SyntaxErrorKind::Unexpected {
                expected: vec![Some(Token::RParen), Some(Token::Comma)],
                found: Some(Token::End),
            }
        );
    }

    #[test]
    fn test_merge_prefers_specific_error() {
        let generic = unexpected(5..6, vec![Token::RParen], Token::End);
        let specific = SyntaxError::invalid_parameter_type(4..5, Token::Ident("x".to_string()));

        let merged = generic.clone().merge(specific.clone());
        assert_eq!(merged, specific);

        let merged = specific.clone().merge(generic);
        assert_eq!(merged.kind, specific.kind);
    }

    #[test]
    fn test_convert_to_parsing_error() {
        let err: ParsingError = unexpected(3..4, vec![Token::Colon], Token::RParen).into();
        assert_eq!(
            err,
            ParsingError::UnexpectedToken {
                expected: vec!["':'".to_string()],
                found: "')'".to_string(),
                span: 3..4,
            }
        );

        let err: ParsingError =
            SyntaxError::invalid_parameter_type(10..17, Token::Ident("invalid".to_string()))
                .into();
        assert_eq!(
            err,
            ParsingError::InvalidParameterType {
                found: "invalid".to_string(),
                span: 10..17,
            }
        );
    }

    #[test]
    fn test_label_replaces_expected_tokens() {
        let found = Token::Unknown("99999999999".to_string());
        let err = SyntaxError::expected_input_found(12..23, Vec::new(), Some(found))
            .with_label("array dimension")
            .with_label("declaration");
        assert_eq!(
            ParsingError::from(err).to_string(),
            "unexpected '99999999999', expected array dimension"
        );
    }

    #[test]
    fn test_end_of_input() {
        let err: ParsingError =
            SyntaxError::expected_input_found(9..10, vec![Some(Token::End)], None).into();
        assert_eq!(err.to_string(), "unexpected end of input, expected 'END'");
    }
}
