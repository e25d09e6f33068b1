//! 解析器的属性测试

use super::*;
use crate::ast::{Statement, VariableSymbol};
use proptest::prelude::*;

fn declaration_source(dimensions: &[u32]) -> String {
    let dims: Vec<String> = dimensions.iter().map(ToString::to_string).collect();
    format!("DEF Foo()\nDECL INT bar[{}]\nEND", dims.join(", "))
}

/// 把关键字随机改成大小写混合
fn mixed_case(word: &'static str) -> impl Strategy<Value = String> {
    prop::collection::vec(any::<bool>(), word.len()).prop_map(move |upper| {
        word.chars()
            .zip(upper)
            .map(|(c, up)| {
                if up {
                    c.to_ascii_uppercase()
                } else {
                    c.to_ascii_lowercase()
                }
            })
            .collect()
    })
}

proptest! {
    #[test]
    fn parser_never_panics(text in "[ -~\n\t]{0,200}") {
        let _ = parse_source_file("Fuzz", &text);
        let _ = parse_data_file("Fuzz", &text);
    }

    #[test]
    fn attributes_alone_are_not_a_definition(
        lines in prop::collection::vec("[A-Z]{1,8}( [A-Za-z0-9]{1,8})?", 0..6)
    ) {
        let text: String = lines.iter().map(|line| format!("&{}\n", line)).collect();

        let err = parse_source_file("Foo", &text).unwrap_err();
        prop_assert_eq!(err, ParsingError::MissingDefinition { file: "Foo".to_string() });
        let err = parse_data_file("Foo", &text).unwrap_err();
        prop_assert_eq!(err, ParsingError::MissingDefinition { file: "Foo".to_string() });
    }

    #[test]
    fn up_to_three_dimensions_are_kept(dimensions in prop::collection::vec(1u32..10_000, 1..=3)) {
        let file = parse_source_file("Foo", &declaration_source(&dimensions)).unwrap();
        let body = &file.statements[0].body;

        prop_assert_eq!(body.len(), 1);
        match &body[0] {
            Statement::VariableDeclaration(symbol) => {
                prop_assert_eq!(&symbol.dimensions, &dimensions);
                prop_assert!(symbol.rank() <= VariableSymbol::MAX_DIMENSIONS);
            }
            other => prop_assert!(false, "expected a declaration, got {:?}", other),
        }
    }

    #[test]
    fn more_than_three_dimensions_fail(dimensions in prop::collection::vec(1u32..10_000, 4..8)) {
        let err = parse_source_file("Foo", &declaration_source(&dimensions)).unwrap_err();
        let is_excess = matches!(err, ParsingError::ExcessArrayDimensions { ref name, .. } if name == "bar");
        prop_assert!(is_excess, "unexpected error: {:?}", err);
    }

    #[test]
    fn keywords_ignore_case(
        global in mixed_case("global"),
        def in mixed_case("def"),
        end in mixed_case("end"),
        direction in mixed_case("inout"),
    ) {
        let text = format!("{} {} Foo(a:{})\n{}", global, def, direction, end);
        let file = parse_source_file("Foo", &text).unwrap();
        let function = &file.statements[0];

        prop_assert!(function.is_global);
        prop_assert_eq!(function.parameters.len(), 1);
        prop_assert_eq!(function.parameters[0].parameter_type, crate::ast::ParameterType::InOut);
    }
}
