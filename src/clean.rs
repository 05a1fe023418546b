//! URL and filename cleaning.
//!
//! Both flows share one normalization pipeline: strip accents, turn
//! whitespace runs into hyphens, drop anything outside the allowed set,
//! collapse and trim hyphens, lowercase. Filename mode works on the stem
//! only and re-appends the extension verbatim; URL mode percent-decodes
//! first and additionally allows `.` and `/` so paths survive.

use lazy_static::lazy_static;
use percent_encoding::percent_decode_str;
use regex::Regex;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

lazy_static! {
    static ref WHITESPACE_RUN: Regex = Regex::new(r"\s+").unwrap();
    static ref FILENAME_DISALLOWED: Regex = Regex::new(r"[^a-zA-Z0-9\-_]").unwrap();
    static ref URL_DISALLOWED: Regex = Regex::new(r"[^a-zA-Z0-9\-\._/]").unwrap();
    static ref HYPHEN_RUN: Regex = Regex::new(r"-+").unwrap();
}

/// NFD-decompose and drop combining marks, so "ação" becomes "acao" while
/// the base letters survive.
pub fn strip_accents(text: &str) -> String {
    text.nfd().filter(|c| !is_combining_mark(*c)).collect()
}

/// Clean a bare filename: the stem is normalized, the extension (if any)
/// is preserved byte-for-byte.
pub fn clean_filename(filename: &str) -> String {
    let (stem, ext) = split_extension(filename);
    let mut cleaned = scrub(stem, &FILENAME_DISALLOWED);
    cleaned.push_str(ext);
    cleaned
}

/// Clean a full URL string. Percent-escapes are decoded before the normal
/// pipeline runs over the whole string with `.` and `/` allowed.
///
/// Note the allowed set has no `:`, so an absolute `https://…` degrades to
/// `https//…`; that matches the folders this tool is pointed at, where
/// hrefs are relative and sitemap entries are rewritten wholesale.
pub fn clean_url(url: &str) -> String {
    let decoded = percent_decode_str(url).decode_utf8_lossy();
    scrub(&decoded, &URL_DISALLOWED)
}

fn scrub(text: &str, disallowed: &Regex) -> String {
    let text = strip_accents(text);
    let text = WHITESPACE_RUN.replace_all(&text, "-");
    let text = disallowed.replace_all(&text, "");
    let text = HYPHEN_RUN.replace_all(&text, "-");
    text.trim_matches('-').to_lowercase()
}

/// Split a name at the last `.`, with the same semantics as Python's
/// `os.path.splitext`: a basename consisting only of leading dots has no
/// extension (".html" is a stem, not an extension).
pub fn split_extension(name: &str) -> (&str, &str) {
    match name.rfind('.') {
        Some(pos) if name[..pos].chars().any(|c| c != '.') => name.split_at(pos),
        _ => (name, ""),
    }
}
