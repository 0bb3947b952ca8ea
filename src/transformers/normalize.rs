//! Unicode normalization and character reference decoding.
use std::borrow::Cow;

use lazy_static::lazy_static;
use regex::{Captures, Regex};
use unicode_normalization::UnicodeNormalization;

lazy_static! {
    /// `&quot;` and its malformed/cased variants that survive a standard decode.
    static ref QUOT: Regex = Regex::new(r"(?i)&quot;?|quot;").unwrap();
    /// Named references in any case, with or without the trailing `;`.
    static ref NAMED: Regex =
        Regex::new(r"(?i)&(amp|lt|gt|apos|nbsp|hellip|mdash|ndash|ldquo|rdquo|lsquo|rsquo);?")
            .unwrap();
    /// Anything left that still looks like a reference.
    static ref LEFTOVER: Regex = Regex::new(r"&[a-zA-Z]+;?").unwrap();
}

/// Canonical composition (NFC) followed by trimming.
///
/// `normalize(normalize(x)) == normalize(x)` for every `x`.
pub fn normalize(text: &str) -> String {
    let composed: String = text.nfc().collect();
    composed.trim().to_string()
}

/// Best-effort decoding of HTML/XML character references.
///
/// Standard references are decoded first, repeatedly so that multiply escaped ones
/// (`&amp;amp;lt;`) come out decoded. Then come the malformed variants OCR/HTML exports
/// leave behind (missing `&` or `;`, uppercase names), and finally anything still shaped
/// like a reference is dropped. Never fails.
pub fn decode_entities(text: &str) -> String {
    let mut decoded = html_escape::decode_html_entities(text).into_owned();
    loop {
        let next = html_escape::decode_html_entities(&decoded);
        if next == decoded {
            break;
        }
        decoded = next.into_owned();
    }

    let decoded = QUOT.replace_all(&decoded, "\"");
    let decoded = NAMED.replace_all(&decoded, |caps: &Captures| {
        let name = caps[1].to_ascii_lowercase();
        let replacement = match name.as_str() {
            "amp" => "&",
            "lt" => "<",
            "gt" => ">",
            "apos" => "'",
            "nbsp" => " ",
            "hellip" => "...",
            "mdash" => "—",
            "ndash" => "–",
            // typographic quotes carry no meaning in the scans
            _ => "",
        };
        Cow::Borrowed(replacement)
    });
    LEFTOVER.replace_all(&decoded, "").into_owned()
}
