/// Canonicalises a column name so differently-spelled headers can be matched.
///
/// Implementations must be deterministic and total.
pub trait Sanitizer {
    fn sanitize(&self, name: &str) -> String;
}

impl<F> Sanitizer for F
where
    F: Fn(&str) -> String,
{
    fn sanitize(&self, name: &str) -> String {
        self(name)
    }
}

/// Default sanitizer: lower-case identifier form with `_` separators.
///
/// `"Foo Bar"` becomes `"foo_bar"`, `" Is-Insurable? "` becomes `"is_insurable"`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SafeColumn;

impl Sanitizer for SafeColumn {
    fn sanitize(&self, name: &str) -> String {
        let mut out = String::with_capacity(name.len());
        let mut pending_sep = false;
        for ch in name.trim().chars() {
            if ch.is_alphanumeric() {
                if pending_sep && !out.is_empty() {
                    out.push('_');
                }
                pending_sep = false;
                out.extend(ch.to_lowercase());
            } else {
                pending_sep = true;
            }
        }
        out
    }
}
