//! Edge case tests for uncomment-lex

#[cfg(test)]
mod tests {
    use crate::{uncomment, uncomment_with_report, Construct, SourceLines};
    use proptest::prelude::*;

    fn normalized(source: &str) -> String {
        SourceLines::new(source)
            .map(|line| format!("{}\r\n", line))
            .collect()
    }

    // ==================== EDGE CASES ====================

    #[test]
    fn test_edge_only_comment() {
        assert_eq!(uncomment("// nothing else"), "");
        assert_eq!(uncomment("/* nothing else */"), "");
    }

    #[test]
    fn test_edge_only_terminators() {
        assert_eq!(uncomment("\n\n"), "\r\n\r\n");
    }

    #[test]
    fn test_edge_unterminated_block_comment_eats_rest() {
        let result = uncomment_with_report("keep\n/* open\nline\n\nmore");
        assert_eq!(result.text, "keep\r\n\r\n");
        assert_eq!(result.unterminated.map(|u| u.construct), Some(Construct::BlockComment));
    }

    #[test]
    fn test_edge_blank_line_inside_block_comment() {
        // The blank line is an empty input line, so it survives.
        assert_eq!(uncomment("a/*\n\n*/b"), "a\r\n\r\nb\r\n");
    }

    #[test]
    fn test_edge_star_slash_outside_comment() {
        assert_eq!(uncomment("a */ b"), "a */ b\r\n");
    }

    #[test]
    fn test_edge_slash_star_split_by_line() {
        assert_eq!(uncomment("a /\n* b"), "a /\r\n* b\r\n");
    }

    #[test]
    fn test_edge_star_at_line_end_does_not_pair_with_next_line() {
        assert_eq!(uncomment("/* a *\n/ still comment */x"), "x\r\n");
    }

    #[test]
    fn test_edge_escape_at_line_end() {
        assert_eq!(uncomment("\"abc\\\n// gone"), "\"abc\\\r\n");
    }

    #[test]
    fn test_edge_verbatim_quote_at_line_end_carries_over() {
        // The leading quote pairs with the one that ended the previous line,
        // so the backslash is literal and the comment is real.
        assert_eq!(uncomment("@\"a\"\n\"\\\" // c"), "@\"a\"\r\n\"\\\" \r\n");
    }

    #[test]
    fn test_edge_verbatim_backslash_is_literal() {
        assert_eq!(uncomment("@\"c:\\\" // x"), "@\"c:\\\" \r\n");
    }

    #[test]
    fn test_edge_double_at() {
        assert_eq!(uncomment("@@\"// kept\""), "@@\"// kept\"\r\n");
    }

    #[test]
    fn test_edge_comment_between_at_and_string_is_stable() {
        for source in [
            "@/**/\"\\\" //c\"",
            "@\"a\"/**/\"\\\" //c\"",
            "@/**/'/'",
            "@\"\"/*x*/\"//y\"",
        ] {
            let once = uncomment(source);
            assert_eq!(uncomment(&once), once, "{:?}", source);
        }
    }

    #[test]
    fn test_edge_unicode_content() {
        assert_eq!(uncomment("naïve /* ünïcödé */ ✓ // ✗"), "naïve  ✓ \r\n");
    }

    #[test]
    fn test_edge_long_line() {
        let code = "x".repeat(10000);
        assert_eq!(uncomment(&format!("{}//{}", code, code)), format!("{}\r\n", code));
    }

    #[test]
    fn test_edge_many_lines() {
        let source = "a // b\n".repeat(1000);
        assert_eq!(uncomment(&source), "a \r\n".repeat(1000));
    }

    // ==================== PROPERTIES ====================

    proptest! {
        #[test]
        fn prop_idempotent(input in "[a-c @/*'\"\\\\\n\r]{0,120}") {
            let once = uncomment(&input);
            let twice = uncomment(&once);
            prop_assert_eq!(once, twice);
        }

        #[test]
        fn prop_comment_free_text_is_unchanged(input in "[a-z *\\\\\t\n\r]{0,120}") {
            prop_assert_eq!(uncomment(&input), normalized(&input));
        }

        #[test]
        fn prop_line_comment_removes_rest_of_line(
            code in "[a-z ;=]{0,20}",
            comment in "[a-z /*'\"@\\\\]{0,20}",
        ) {
            let expected = if code.is_empty() {
                String::new()
            } else {
                format!("{}\r\n", code)
            };
            prop_assert_eq!(uncomment(&format!("{}//{}", code, comment)), expected);
        }

        #[test]
        fn prop_block_comment_removed(
            before in "[a-z ;]{0,10}",
            body in "[a-z /'\"@\n]{0,40}",
            after in "[a-z;]{1,10}",
        ) {
            let source = format!("{}/*{}*/{}", before, body, after);
            let segments: Vec<&str> = body.split('\n').collect();
            let expected = if segments.len() == 1 {
                format!("{}{}\r\n", before, after)
            } else {
                let head = if before.is_empty() {
                    String::new()
                } else {
                    format!("{}\r\n", before)
                };
                // Empty lines inside the comment are kept as blank lines.
                let blanks = segments[1..segments.len() - 1]
                    .iter()
                    .filter(|segment| segment.is_empty())
                    .count();
                format!("{}{}{}\r\n", head, "\r\n".repeat(blanks), after)
            };
            prop_assert_eq!(uncomment(&source), expected);
        }

        #[test]
        fn prop_string_contents_preserved(body in "[a-z /*@']{0,30}") {
            let source = format!("s = \"{}\";", body);
            prop_assert_eq!(uncomment(&source), format!("{}\r\n", source));
        }

        #[test]
        fn prop_verbatim_contents_preserved(body in "[a-z /*'\\\\\n]{0,40}") {
            let source = format!("s = @\"{}\";", body);
            prop_assert_eq!(uncomment(&source), normalized(&source));
        }
    }
}
