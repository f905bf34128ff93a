//! Display names built from filename tokens.

use crate::catalog::asset::AssetName;
use crate::catalog::dictionary::phrase;
use crate::locale::Locale;

/// Uppercase the first character, keep the rest.
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Turn `bua-cao_su` into `Bua Cao Su`.
pub fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut prev_is_word = false;
    for c in text.chars() {
        let c = if c == '-' || c == '_' { ' ' } else { c };
        let is_word = c.is_alphanumeric();
        if is_word && !prev_is_word {
            out.extend(c.to_uppercase());
        } else {
            out.push(c);
        }
        prev_is_word = is_word;
    }
    out
}

/// Display name of an asset in the given locale.
///
/// Falls back to the title-cased filename stem when the name has no suffix.
pub fn display_name(name: &AssetName, locale: Locale) -> String {
    let phrased = name_from_tokens(&name.tokens(), locale);
    if phrased.is_empty() {
        title_case(&name.stem)
    } else {
        phrased
    }
}

/// Join the phrase of every token. Order of attempts per token:
/// exact dictionary hit, `<letters><digits>` with a known base,
/// then the locale's fallback casing.
pub fn name_from_tokens(tokens: &[&str], locale: Locale) -> String {
    tokens
        .iter()
        .map(|token| token_phrase(token, locale))
        .collect::<Vec<_>>()
        .join(" ")
}

fn token_phrase(token: &str, locale: Locale) -> String {
    if let Some(known) = phrase(token, locale) {
        return known.to_string();
    }

    if let Some((base, number)) = split_numbered(token) {
        let base = phrase(base, locale).map_or_else(|| fallback(base, locale), str::to_string);
        return format!("{base} {number}");
    }

    match locale {
        Locale::Vi if token.contains('-') => token.to_uppercase(),
        _ => fallback(token, locale),
    }
}

fn fallback(token: &str, locale: Locale) -> String {
    match locale {
        Locale::Vi => capitalize(token),
        Locale::En => token.to_uppercase(),
    }
}

/// Split `chot12` into (`chot`, `12`). Both parts must be non-empty ASCII.
fn split_numbered(token: &str) -> Option<(&str, &str)> {
    let idx = token.find(|c: char| c.is_ascii_digit())?;
    let (base, number) = token.split_at(idx);
    let valid = !base.is_empty()
        && base.chars().all(|c| c.is_ascii_lowercase())
        && number.chars().all(|c| c.is_ascii_digit());
    valid.then_some((base, number))
}
