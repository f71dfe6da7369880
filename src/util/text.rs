use rand::Rng;
use rand::distributions::Alphanumeric;
use std::fmt::Display;

const PLACEHOLDER: &str = "{}";

/// Replace successive `{}` placeholders with successive arguments.
///
/// Stops at whichever runs out first; the remainder of the template is kept
/// as-is, so surplus placeholders stay literal and surplus args are ignored.
pub fn format_placeholders(template: &str, args: &[&dyn Display]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    for arg in args {
        let Some(at) = rest.find(PLACEHOLDER) else {
            break;
        };
        out.push_str(&rest[..at]);
        out.push_str(&arg.to_string());
        rest = &rest[at + PLACEHOLDER.len()..];
    }

    out.push_str(rest);
    out
}

/// Wrap a string in double quotes for diagnostics
pub fn quote_str(value: &str) -> String {
    format!("\"{}\"", value)
}

/// `Display` of the value, or `null` when absent
pub fn display_or_null<T: Display>(value: Option<T>) -> String {
    value.map_or_else(|| "null".to_string(), |v| v.to_string())
}

/// Random `[A-Za-z0-9]` string of exactly `length` characters
pub fn generate_string(length: usize) -> String {
    generate_string_with(&mut rand::thread_rng(), length)
}

/// Same as [`generate_string`] with a caller-supplied generator
pub fn generate_string_with<R: Rng>(rng: &mut R, length: usize) -> String {
    rng.sample_iter(&Alphanumeric)
        .take(length)
        .map(char::from)
        .collect()
}
