//! Positional `{}` template substitution.
//!
//! Templates reach the [`Logger`](crate::log::Logger) unrendered so that
//! capturing backends can assert on the raw shape. Backends that need the
//! final string (such as [`TracingLogger`](crate::log::TracingLogger)) render
//! it here.
//!
//! Rules:
//! - each `{}` takes the next argument, in order
//! - `\{}` produces a literal `{}` and takes nothing
//! - `\\{}` produces a single `\` followed by the next argument
//! - placeholders without a matching argument stay as `{}`
//! - arguments without a matching placeholder are dropped

use std::fmt::{Display, Write};

const PLACEHOLDER: &str = "{}";

/// Substitute `args` into the placeholders of `template`.
///
/// # Example
///
/// ```
/// use siglog::template::render;
/// use siglog::log_args;
///
/// assert_eq!(render("::{}: done in {}ms", log_args!["sync()", 12]), "::sync(): done in 12ms");
/// assert_eq!(render("literal \\{} and {}", log_args![1]), "literal {} and 1");
/// assert_eq!(render("{} and {}", log_args!["a"]), "a and {}");
/// assert_eq!(render("C:\\\\{}", log_args!["tmp"]), "C:\\tmp");
/// ```
pub fn render(template: &str, args: &[&dyn Display]) -> String {
    let mut out = String::with_capacity(template.len() + args.len() * 8);
    let mut args = args.iter();
    let mut rest = template;

    while let Some(pos) = rest.find(PLACEHOLDER) {
        let (head, tail) = rest.split_at(pos);
        if head.ends_with("\\\\") {
            out.push_str(&head[..head.len() - 1]);
            push_next(&mut out, args.next());
        } else if head.ends_with('\\') {
            out.push_str(&head[..head.len() - 1]);
            out.push_str(PLACEHOLDER);
        } else {
            out.push_str(head);
            push_next(&mut out, args.next());
        }
        rest = &tail[PLACEHOLDER.len()..];
    }

    out.push_str(rest);
    out
}

/// Write the argument, or keep the placeholder when none is left.
fn push_next(out: &mut String, arg: Option<&&dyn Display>) {
    match arg {
        // Writing into a String cannot fail.
        Some(arg) => {
            let _ = write!(out, "{arg}");
        }
        None => out.push_str(PLACEHOLDER),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::log_args;

    #[test]
    fn test_substitutes_in_order() {
        assert_eq!(render("{} then {}", log_args!["first", "second"]), "first then second");
    }

    #[test]
    fn test_no_placeholders() {
        assert_eq!(render("plain message", log_args![1, 2]), "plain message");
    }

    #[test]
    fn test_surplus_placeholders_stay_literal() {
        assert_eq!(render("{}:{}:{}", log_args!["x"]), "x:{}:{}");
    }

    #[test]
    fn test_surplus_arguments_are_dropped() {
        assert_eq!(render("only {}", log_args![1, 2, 3]), "only 1");
    }

    #[test]
    fn test_escaped_placeholder_does_not_consume() {
        assert_eq!(render("\\{} = {}", log_args!["v"]), "{} = v");
    }

    #[test]
    fn test_double_backslash_keeps_one_and_substitutes() {
        assert_eq!(render("C:\\\\{}", log_args!["x"]), "C:\\x");
        assert_eq!(render("\\\\{} then {}", log_args![1, 2]), "\\1 then 2");
    }

    #[test]
    fn test_adjacent_placeholders() {
        assert_eq!(render("{}{}", log_args!["a", "b"]), "ab");
    }

    #[test]
    fn test_lone_braces_untouched() {
        assert_eq!(render("{ not a slot } {}", log_args![7]), "{ not a slot } 7");
    }

    #[test]
    fn test_multibyte_text_around_placeholders() {
        assert_eq!(render("→ {} ←", log_args!["ü"]), "→ ü ←");
    }

    #[test]
    fn test_empty_template() {
        assert_eq!(render("", log_args![1]), "");
    }
}
