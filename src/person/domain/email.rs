//! Lightweight email shape check.

/// Returns `true` when `value` looks like `local@domain.tld`.
///
/// This is a shape check, not RFC 5322 parsing: exactly one `@`, a non-empty
/// local part, no whitespace, and a domain made of at least two non-empty
/// dot-separated labels.
#[must_use]
pub fn is_email_shaped(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }

    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };

    if local.is_empty() || domain.contains('@') {
        return false;
    }

    let mut labels = domain.split('.');
    let label_count = labels.clone().count();
    label_count >= 2 && labels.all(|label| !label.is_empty())
}
