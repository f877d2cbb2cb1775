//! JSONC comment stripping
//!
//! The jurisdiction table ships as annotated JSON so wind speeds and
//! HVHZ designations can carry their code citations next to the data.
//! This strips `//` line comments and `/* */` block comments while
//! leaving string contents untouched, then hands the result to
//! `serde_json`.

/// Strip comments from a JSONC document
pub fn strip_comments(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut chars = input.chars().peekable();
    let mut in_string = false;
    let mut escaped = false;

    while let Some(c) = chars.next() {
        if in_string {
            out.push(c);
            if escaped {
                escaped = false;
            } else if c == '\\' {
                escaped = true;
            } else if c == '"' {
                in_string = false;
            }
            continue;
        }

        match c {
            '"' => {
                in_string = true;
                out.push(c);
            }
            '/' => match chars.peek() {
                Some('/') => {
                    while let Some(&next) = chars.peek() {
                        if next == '\n' {
                            break;
                        }
                        chars.next();
                    }
                }
                Some('*') => {
                    chars.next();
                    let mut prev = '\0';
                    for next in chars.by_ref() {
                        if prev == '*' && next == '/' {
                            break;
                        }
                        prev = next;
                    }
                }
                _ => out.push(c),
            },
            _ => out.push(c),
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_line_comments() {
        let input = "{\n  // per FBC 2023\n  \"speed\": 185\n}";
        let stripped = strip_comments(input);
        let value: serde_json::Value = serde_json::from_str(&stripped).unwrap();
        assert_eq!(value["speed"], 185);
    }

    #[test]
    fn strips_block_comments() {
        let input = "{ /* adopted 2023 */ \"cycle\": \"2023 FBC\" }";
        let value: serde_json::Value =
            serde_json::from_str(&strip_comments(input)).unwrap();
        assert_eq!(value["cycle"], "2023 FBC");
    }

    #[test]
    fn leaves_slashes_inside_strings() {
        let input = r#"{ "url": "https://example.com/a", "note": "a /* b */ c" }"#;
        let value: serde_json::Value =
            serde_json::from_str(&strip_comments(input)).unwrap();
        assert_eq!(value["url"], "https://example.com/a");
        assert_eq!(value["note"], "a /* b */ c");
    }

    #[test]
    fn handles_escaped_quotes_in_strings() {
        let input = r#"{ "note": "say \"hi\" // not a comment" }"#;
        let value: serde_json::Value =
            serde_json::from_str(&strip_comments(input)).unwrap();
        assert_eq!(value["note"], "say \"hi\" // not a comment");
    }
}
