pub struct GraphiteUtil;

impl GraphiteUtil {
    /// Escape a monitored object identity for use inside a Graphite path pattern.
    ///
    /// Path separators and whitespace are flattened to `_` the same way metric
    /// writers store them, and glob characters are wrapped in a single-char
    /// class so `*` matches a literal asterisk instead of every node.
    pub fn escape(value: &str) -> String {
        let mut out = String::with_capacity(value.len());
        for c in value.chars() {
            match c {
                '.' | '/' | '\\' => out.push('_'),
                c if c.is_whitespace() => out.push('_'),
                '*' | '?' | '[' | ']' | '{' | '}' => {
                    out.push('[');
                    out.push(c);
                    out.push(']');
                }
                _ => out.push(c),
            }
        }
        out
    }

    /// Loose boolean parsing for query-string flags such as `legend=1`.
    pub fn is_truthy(value: &str) -> bool {
        !matches!(
            value.trim().to_ascii_lowercase().as_str(),
            "" | "0" | "false" | "no" | "off"
        )
    }
}
