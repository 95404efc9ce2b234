//! Markup repair for generative output.
//!
//! Generative models frequently place double quotes inside bracketed node labels
//! (`A[Say "hi"]`), which the diagram grammar rejects. The repair rewrites those
//! quotes to single quotes while preserving an intentional outer quote wrapper
//! (`A["label"]` stays quoted).

use regex::{Captures, Regex};
use std::sync::OnceLock;

fn square_label_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\[([^\]\r\n]*)\]").expect("valid regex"))
}

fn round_label_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\(([^)\r\n]*)\)").expect("valid regex"))
}

fn curly_label_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\{([^}\r\n]*)\}").expect("valid regex"))
}

/// Rewrites double quotes inside one bracket interior.
///
/// An interior that is itself wrapped in a double-quote pair keeps the wrapper;
/// only the quotes inside it are demoted to single quotes.
fn repair_interior(interior: &str) -> String {
    if interior.len() > 1 && interior.starts_with('"') && interior.ends_with('"') {
        let inner = &interior[1..interior.len() - 1];
        format!("\"{}\"", inner.replace('"', "'"))
    } else {
        interior.replace('"', "'")
    }
}

fn repair_pass(re: &Regex, text: &str, open: char, close: char) -> String {
    re.replace_all(text, |caps: &Captures<'_>| {
        format!("{open}{}{close}", repair_interior(&caps[1]))
    })
    .into_owned()
}

/// Repairs double-quoting inside bracketed labels. Total and idempotent.
///
/// Three independent passes (square, round, curly). Each pass matches the
/// shortest interior up to the next closing delimiter of the same kind, never
/// crossing a line break; nested same-kind pairs get no special handling (the
/// inner closing delimiter ends the match). Later passes scan the output of
/// earlier ones.
pub fn sanitize(text: &str) -> String {
    let clean = repair_pass(square_label_regex(), text, '[', ']');
    let clean = repair_pass(round_label_regex(), &clean, '(', ')');
    repair_pass(curly_label_regex(), &clean, '{', '}')
}

/// Strips markdown code fences a generative model may wrap its markup in,
/// then trims surrounding whitespace.
pub fn strip_code_fences(text: &str) -> String {
    text.replace("```mermaid", "")
        .replace("```", "")
        .trim()
        .to_string()
}
