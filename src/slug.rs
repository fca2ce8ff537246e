/// Derive a model key from a human-readable field label.
///
/// Lowercases the label, keeps alphanumerics, and collapses every run of
/// other characters into a single underscore. Leading and trailing
/// separators are trimmed, so the result is safe as a JSON object key.
///
/// ```
/// assert_eq!(formgen::slug::slugify("Full Name"), "full_name");
/// assert_eq!(formgen::slug::slugify("  E-Mail (work)  "), "e_mail_work");
/// ```
#[must_use]
pub fn slugify(label: &str) -> String {
    join_words(label, '_')
}

/// Derive a DOM-id flavored identifier for a field, with an optional
/// host-supplied prefix. Same word splitting as [`slugify`] but joined
/// with hyphens, matching common element-id conventions.
#[must_use]
pub fn form_id(prefix: &str, label: &str) -> String {
    let slug = join_words(label, '-');
    if prefix.is_empty() {
        slug
    } else {
        format!("{prefix}{slug}")
    }
}

fn join_words(label: &str, sep: char) -> String {
    let mut out = String::with_capacity(label.len());
    let mut pending_sep = false;

    for c in label.trim().chars() {
        if c.is_alphanumeric() {
            if pending_sep && !out.is_empty() {
                out.push(sep);
            }
            pending_sep = false;
            out.extend(c.to_lowercase());
        } else {
            pending_sep = true;
        }
    }

    out
}
