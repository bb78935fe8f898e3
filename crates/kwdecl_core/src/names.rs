//! Keyword naming helpers.
//!
//! A keyword without a declared name is known by its *natural* name, derived from the Rust identifier of the
//! function or method: `login_as_user` becomes `Login As User`, `openHTTPSession` becomes `Open HTTP Session`.
//!
//! ## Notes
//! - Embedded-argument syntax (`${name}`) is only *detected* here. Parsing placeholders is the consuming engine's job.

/// Derive the human-readable keyword name for an identifier.
///
/// Underscores separate words, as do lower-to-upper case transitions and the end of an upper-case run followed by a
/// lower-case letter. Every word gets an upper-case first letter; the rest of the word is kept as written.
///
/// ## Examples
/// ```rust
/// use kwdecl_core::natural_keyword_name;
///
/// assert_eq!(natural_keyword_name("do_something"), "Do Something");
/// assert_eq!(natural_keyword_name("r#type"), "Type");
/// ```
pub fn natural_keyword_name(ident: &str) -> String {
    let ident = ident.strip_prefix("r#").unwrap_or(ident);
    let mut words: Vec<String> = Vec::new();
    for part in ident.split('_').filter(|p| !p.is_empty()) {
        split_camel_case(part, &mut words);
    }
    words
        .iter()
        .map(|w| capitalize_first(w))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Return `true` if a keyword name contains at least one `${...}` embedded-argument placeholder.
///
/// Keywords whose name carries placeholders must declare that name explicitly; the natural name of an identifier
/// can never contain one.
pub fn has_embedded_arguments(name: &str) -> bool {
    let mut rest = name;
    while let Some(start) = rest.find("${") {
        let after = &rest[start + 2..];
        match after.find('}') {
            Some(end) if end > 0 => return true,
            Some(end) => rest = &after[end + 1..],
            None => return false,
        }
    }
    false
}

fn split_camel_case(part: &str, words: &mut Vec<String>) {
    let chars: Vec<char> = part.chars().collect();
    let mut current = String::new();
    for (i, &ch) in chars.iter().enumerate() {
        if !current.is_empty() && ch.is_uppercase() {
            let prev = chars[i - 1];
            let next_is_lower = chars.get(i + 1).is_some_and(|c| c.is_lowercase());
            if !prev.is_uppercase() || next_is_lower {
                words.push(std::mem::take(&mut current));
            }
        }
        current.push(ch);
    }
    if !current.is_empty() {
        words.push(current);
    }
}

fn capitalize_first(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
