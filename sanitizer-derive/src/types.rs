//! Type utilities for the derive macro.

use quote::ToTokens;

/// Renders a field type as it would be written in source.
///
/// `TokenStream`'s `Display` separates every token with a space
/// (`Option < String >`). This keeps only the spaces that separate two words,
/// follow a `,` or `;`, or surround `->`.
pub(crate) fn type_name(ty: &syn::Type) -> String {
    let raw = ty.to_token_stream().to_string();
    let chars: Vec<char> = raw.chars().collect();
    let mut out = String::with_capacity(raw.len());

    for (index, &c) in chars.iter().enumerate() {
        if c != ' ' {
            out.push(c);
            continue;
        }
        let prev = out.chars().last();
        let next = chars.get(index + 1).copied();
        let keep = match (prev, next) {
            (Some(p), Some(n)) if is_word(p) && is_word(n) => true,
            (Some(',' | ';'), Some(_)) => true,
            (Some('>'), Some(_)) => out.ends_with("->"),
            (Some(_), Some('-')) => chars.get(index + 2) == Some(&'>'),
            _ => false,
        };
        if keep {
            out.push(' ');
        }
    }

    out
}

fn is_word(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}
