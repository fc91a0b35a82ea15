//! Escaping of raw script text into Java string-literal expressions

/// Escape script text into a single Java string-literal expression.
///
/// The expression is a `+`-concatenation of one quoted literal per input
/// line, each line terminated by an embedded `\n` escape, so the compiled
/// constant reproduces the input byte-for-byte:
///
/// ```text
/// "local t = {}\n" +
/// "return t"
/// ```
///
/// Backslashes are escaped before quotes; reversing the passes would
/// re-escape the backslashes introduced by the quote pass. Carriage returns
/// become `\r` escapes (a raw CR is a line terminator in Java source), which
/// keeps CRLF and lone-CR input intact rather than normalizing it.
///
/// Empty input yields `""`, a single empty literal.
pub fn java_string_expression(text: &str) -> String {
    let escaped = text
        .replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\r', "\\r");

    let lines: Vec<&str> = escaped.split('\n').collect();
    format!("\"{}\"", lines.join("\\n\" +\n\""))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    /// Evaluate a generated expression the way javac would: concatenate the
    /// quoted literals and decode their escapes.
    fn evaluate(expr: &str) -> String {
        let mut out = String::new();
        let mut chars = expr.chars();
        let mut in_literal = false;
        while let Some(c) = chars.next() {
            if !in_literal {
                if c == '"' {
                    in_literal = true;
                }
                // '+' and whitespace between literals
                continue;
            }
            match c {
                '"' => in_literal = false,
                '\\' => match chars.next() {
                    Some('n') => out.push('\n'),
                    Some('r') => out.push('\r'),
                    Some('\\') => out.push('\\'),
                    Some('"') => out.push('"'),
                    Some(other) => panic!("unexpected escape \\{}", other),
                    None => panic!("dangling backslash"),
                },
                other => out.push(other),
            }
        }
        out
    }

    #[test]
    fn test_empty_input_is_single_empty_literal() {
        assert_eq!(java_string_expression(""), "\"\"");
    }

    #[test]
    fn test_single_line() {
        assert_eq!(java_string_expression("return 1"), "\"return 1\"");
    }

    #[test]
    fn test_quotes_and_backslashes() {
        // print("hi\n"), where \n is two source characters
        assert_eq!(
            java_string_expression(r#"print("hi\n")"#),
            r#""print(\"hi\\n\")""#
        );
    }

    #[test]
    fn test_backslash_pass_runs_first() {
        // A lone \" in the input must become \\\" and not \\\\"
        assert_eq!(java_string_expression(r#"\""#), r#""\\\"""#);
    }

    #[test]
    fn test_multi_line_shape() {
        assert_eq!(
            java_string_expression("local t = {}\nreturn t"),
            "\"local t = {}\\n\" +\n\"return t\""
        );
    }

    #[test]
    fn test_trailing_newline_preserved() {
        let expr = java_string_expression("return t\n");
        assert_eq!(expr, "\"return t\\n\" +\n\"\"");
        assert_eq!(evaluate(&expr), "return t\n");
    }

    #[test]
    fn test_carriage_returns_preserved() {
        let input = "a\r\nb\rc";
        let expr = java_string_expression(input);
        assert!(!expr.contains('\r'));
        assert_eq!(evaluate(&expr), input);
    }

    #[test]
    fn test_expression_lines_are_legal_java_literals() {
        // No raw quote may survive unescaped inside a literal, and no raw
        // CR may appear anywhere in the expression.
        let expr = java_string_expression("x = \"\\r\"\r\ny = 2");
        for line in expr.lines() {
            assert!(line.starts_with('"'));
            assert!(line.trim_end_matches(" +").ends_with('"'));
        }
        assert_eq!(evaluate(&expr), "x = \"\\r\"\r\ny = 2");
    }

    proptest! {
        #[test]
        fn prop_round_trip(text in ".*") {
            prop_assert_eq!(evaluate(&java_string_expression(&text)), text);
        }

        #[test]
        fn prop_round_trip_lua_like(text in "[ -~\n\r\t]*") {
            prop_assert_eq!(evaluate(&java_string_expression(&text)), text);
        }
    }
}
