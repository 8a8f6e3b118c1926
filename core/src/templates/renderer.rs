//! Placeholder substitution over the template table
//!
//! Substitution is a single left-to-right pass over the template text.
//! Substituted values are emitted verbatim and never re-scanned, so a
//! variable value containing `{{...}}` cannot inject further substitution.

use std::collections::HashMap;

use super::table::TemplateTable;

/// Marker wrapped around every substituted value in the output text
const EMPHASIS: char = '*';

/// Renders outbound message text from a template key and a variable set
#[derive(Debug, Clone)]
pub struct TemplateRenderer {
    table: TemplateTable,
}

impl TemplateRenderer {
    pub fn new(table: TemplateTable) -> Self {
        Self { table }
    }

    /// Render the template under `key` with the given variables
    ///
    /// Unknown keys fall back to the default template. Each `{{name}}` token
    /// is replaced by the emphasised variable value when `name` is present in
    /// `vars`; a present-but-empty value renders as an empty string, and a
    /// token with no matching variable at all is left verbatim in the output.
    pub fn render(&self, key: &str, vars: &HashMap<String, String>) -> String {
        substitute(self.table.get(key), vars)
    }
}

/// Single-pass, non-recursive placeholder substitution
fn substitute(template: &str, vars: &HashMap<String, String>) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find("{{") {
        out.push_str(&rest[..start]);
        let after = &rest[start + 2..];

        match after.find("}}") {
            Some(end) => {
                let name = after[..end].trim();
                match vars.get(name) {
                    Some(value) if !value.is_empty() => {
                        out.push(EMPHASIS);
                        out.push_str(value);
                        out.push(EMPHASIS);
                    }
                    // Present but empty: the token disappears entirely
                    Some(_) => {}
                    // No matching variable: the token survives verbatim
                    None => out.push_str(&rest[start..start + 2 + end + 2]),
                }
                rest = &after[end + 2..];
            }
            // Unterminated opener; emit the rest as-is
            None => {
                out.push_str(&rest[start..]);
                rest = "";
            }
        }
    }

    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::templates::table::DEFAULT_TEMPLATE_KEY;

    fn vars(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    fn renderer() -> TemplateRenderer {
        TemplateRenderer::new(TemplateTable::builtin())
    }

    #[test]
    fn test_default_template_emphasises_standard_vars() {
        let message = renderer().render(
            DEFAULT_TEMPLATE_KEY,
            &vars(&[("otp", "1234"), ("expiry", "5"), ("company", "Acme")]),
        );

        assert!(message.contains("*1234*"));
        assert!(message.contains("*5*"));
        assert!(message.contains("*Acme*"));
    }

    #[test]
    fn test_unknown_key_falls_back_to_default() {
        let r = renderer();
        let v = vars(&[("otp", "1234"), ("expiry", "5"), ("company", "Acme")]);
        assert_eq!(r.render("unknownKey", &v), r.render(DEFAULT_TEMPLATE_KEY, &v));
    }

    #[test]
    fn test_extra_vars_are_emphasised() {
        let message = renderer().render(
            "login",
            &vars(&[
                ("otp", "987654"),
                ("expiry", "5"),
                ("company", "Acme"),
                ("name", "Alex"),
            ]),
        );

        assert!(message.contains("*Alex*"));
        assert!(message.contains("*987654*"));
    }

    #[test]
    fn test_unsupplied_placeholder_survives_verbatim() {
        // The login template references {{name}}; with no name variable the
        // token is left in the output untouched.
        let message = renderer().render(
            "login",
            &vars(&[("otp", "987654"), ("expiry", "5"), ("company", "Acme")]),
        );

        assert!(message.contains("{{name}}"));
    }

    #[test]
    fn test_empty_value_renders_as_empty_string() {
        let message = substitute("Hello {{name}}!", &vars(&[("name", "")]));
        assert_eq!(message, "Hello !");
    }

    #[test]
    fn test_substitution_is_not_recursive() {
        // A value that itself looks like a placeholder must come through
        // inert, not trigger a second expansion.
        let v = vars(&[("name", "{{otp}}"), ("otp", "123456")]);
        let message = substitute("Hi {{name}}, code {{otp}}", &v);

        assert_eq!(message, "Hi *{{otp}}*, code *123456*");
    }

    #[test]
    fn test_repeated_placeholder_substitutes_each_occurrence() {
        let message = substitute("{{otp}} and again {{otp}}", &vars(&[("otp", "42")]));
        assert_eq!(message, "*42* and again *42*");
    }

    #[test]
    fn test_unterminated_token_is_preserved() {
        let message = substitute("broken {{otp", &vars(&[("otp", "42")]));
        assert_eq!(message, "broken {{otp");
    }

    #[test]
    fn test_whitespace_inside_token_is_tolerated() {
        let message = substitute("code {{ otp }}", &vars(&[("otp", "42")]));
        assert_eq!(message, "code *42*");
    }
}
