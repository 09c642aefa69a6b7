//! Image URL sanitizer.
//!
//! Upstream image fields are dirty in recurring ways: a misspelled image
//! host (`i.ibb.co.com`), protocol-relative URLs, bare host paths with no
//! scheme, and occasional garbage that parses as nothing at all. Every
//! failure mode lands on a known-good placeholder so a card never renders
//! with a broken image.

use url::Url;

/// Neutral image shown whenever a usable URL cannot be recovered.
pub const PLACEHOLDER_IMAGE: &str = "https://picsum.photos/seed/green-earth/600/400";

/// Repair and absolutize a raw image URL.
///
/// Rules are applied in order:
/// 1. trim; empty input -> placeholder
/// 2. rewrite the `i.ibb.co.com` host typo to `i.ibb.co` (whole-host
///    occurrences only)
/// 3. protocol-relative `//host/...` -> `https://host/...`
/// 4. bare `i.ibb.co/...` (case-insensitive) -> prefix `https://`
/// 5. local `assets/...` or `/assets/...` paths pass through untouched
/// 6. everything else resolves against the page origin; parse failure
///    -> placeholder
pub fn safe_image_url(raw: &str, page_origin: &Url) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return PLACEHOLDER_IMAGE.to_string();
    }

    let mut candidate = rewrite_host_typo(trimmed);

    if candidate.starts_with("//") {
        candidate = format!("https:{}", candidate);
    }

    if candidate.to_ascii_lowercase().starts_with("i.ibb.co/") {
        candidate = format!("https://{}", candidate);
    }

    if candidate.starts_with("assets/") || candidate.starts_with("/assets/") {
        return candidate;
    }

    match page_origin.join(&candidate) {
        Ok(resolved) => resolved.to_string(),
        Err(_) => PLACEHOLDER_IMAGE.to_string(),
    }
}

/// Rewrite whole-host occurrences of the `i.ibb.co.com` typo to
/// `i.ibb.co`. A hit only counts when both neighbors are non-word
/// characters, so hosts that merely contain the typo as a prefix or
/// tail (`xi.ibb.co.com`, `i.ibb.co.comx`) pass through untouched.
fn rewrite_host_typo(input: &str) -> String {
    const TYPO: &str = "i.ibb.co.com";
    const FIXED: &str = "i.ibb.co";

    let bytes = input.as_bytes();
    let mut out = String::with_capacity(input.len());
    let mut pos = 0;

    while let Some(found) = input[pos..].find(TYPO) {
        let start = pos + found;
        let end = start + TYPO.len();
        out.push_str(&input[pos..start]);

        let open = start == 0 || !is_word_byte(bytes[start - 1]);
        let close = end == bytes.len() || !is_word_byte(bytes[end]);
        out.push_str(if open && close { FIXED } else { TYPO });

        pos = end;
    }

    out.push_str(&input[pos..]);
    out
}

fn is_word_byte(byte: u8) -> bool {
    byte.is_ascii_alphanumeric() || byte == b'_'
}
