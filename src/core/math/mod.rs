//! LaTeX macro translation for model output
//!
//! Turns the math fragments a vision model emits (`\frac{1}{2}`, `\pi r^2`,
//! `\sqrt[3]{x}`) into readable Unicode text. Translation runs a fixed series
//! of rewrites, each over the output of the previous one:
//!
//! 1. symbol table substitution (`\alpha` → `α`)
//! 2. fractions, `\frac{A}{B}` → `(A/B)`
//! 3. exponents, `x^{n}` → `x⁽n⁾`
//! 4. subscripts, `x_{i}` → `x₍i₎`
//! 5. square roots, `\sqrt{X}` → `√(X)`
//! 6. n-th roots, `\sqrt[N]{X}` → `√[N](X)`
//!
//! Structured rewrites recurse into their captured groups. A macro whose
//! arguments do not match (missing group, unbalanced braces) is left verbatim.

pub mod groups;
pub mod symbols;

use std::ops::Range;

use groups::{brace_group, bracket_group, is_escaped, letters_end};

const SUPERSCRIPT_OPEN: char = '⁽';
const SUPERSCRIPT_CLOSE: char = '⁾';
const SUBSCRIPT_OPEN: char = '₍';
const SUBSCRIPT_CLOSE: char = '₎';

/// Translate LaTeX-style macros in `text` to Unicode.
///
/// Never fails; anything that cannot be translated is passed through.
///
/// When a base carries both an exponent and a subscript (`x^2_3`), the
/// exponent is rewritten first.
pub fn translate(text: &str) -> String {
    let text = substitute_symbols(text);
    let text = rewrite_fractions(&text);
    let text = rewrite_scripts(&text, b'^', SUPERSCRIPT_OPEN, SUPERSCRIPT_CLOSE);
    let text = rewrite_scripts(&text, b'_', SUBSCRIPT_OPEN, SUBSCRIPT_CLOSE);
    let text = rewrite_square_roots(&text);
    rewrite_nth_roots(&text)
}

fn substitute_symbols(text: &str) -> String {
    let bytes = text.as_bytes();
    let mut out = String::with_capacity(text.len());
    let mut copied = 0;
    let mut i = 0;

    while i < bytes.len() {
        if bytes[i] != b'\\' {
            i += 1;
            continue;
        }
        let name_end = letters_end(text, i + 1);
        if name_end == i + 1 {
            // Control symbol (`\\`, `\{`, `\,`): its second byte never starts a macro
            i += if bytes.get(i + 1).is_some_and(u8::is_ascii) { 2 } else { 1 };
            continue;
        }
        if let Some(glyph) = symbols::lookup(&text[i + 1..name_end]) {
            out.push_str(&text[copied..i]);
            out.push_str(glyph);
            copied = name_end;
        }
        i = name_end;
    }

    out.push_str(&text[copied..]);
    out
}

fn rewrite_fractions(text: &str) -> String {
    rewrite_macro(text, "frac", |text, at| {
        let (numerator, after) = brace_group(text, at)?;
        let (denominator, end) = brace_group(text, after)?;
        let rendered = format!(
            "({}/{})",
            translate(&text[numerator]),
            translate(&text[denominator])
        );
        Some((rendered, end))
    })
}

fn rewrite_square_roots(text: &str) -> String {
    rewrite_macro(text, "sqrt", |text, at| {
        let (radicand, end) = brace_group(text, at)?;
        Some((format!("√({})", translate(&text[radicand])), end))
    })
}

fn rewrite_nth_roots(text: &str) -> String {
    rewrite_macro(text, "sqrt", |text, at| {
        let (index, after) = bracket_group(text, at)?;
        let (radicand, end) = brace_group(text, after)?;
        let rendered = format!(
            "√[{}]({})",
            translate(&text[index]),
            translate(&text[radicand])
        );
        Some((rendered, end))
    })
}

/// Rewrite every `\name` occurrence whose arguments `expand` accepts.
///
/// `expand` receives the full text and the offset just past the macro name and
/// returns the replacement plus the offset where the match ends.
fn rewrite_macro<F>(text: &str, name: &str, expand: F) -> String
where
    F: Fn(&str, usize) -> Option<(String, usize)>,
{
    let needle = format!("\\{}", name);
    let mut out = String::with_capacity(text.len());
    let mut copied = 0;
    let mut search = 0;

    while let Some(found) = text[search..].find(&needle) {
        let start = search + found;
        let after = start + needle.len();
        search = after;

        // `\fracx` is a different macro, `\\frac` is a line break then text
        if letters_end(text, after) != after || is_escaped(text, start) {
            continue;
        }
        if let Some((rendered, end)) = expand(text, after) {
            out.push_str(&text[copied..start]);
            out.push_str(&rendered);
            copied = end;
            search = end;
        }
    }

    out.push_str(&text[copied..]);
    out
}

fn rewrite_scripts(text: &str, marker: u8, open: char, close: char) -> String {
    let bytes = text.as_bytes();
    let mut out = String::with_capacity(text.len());
    let mut copied = 0;
    let mut i = 0;

    while i < bytes.len() {
        if bytes[i] != marker || !has_base(&text[..i]) {
            i += 1;
            continue;
        }
        match script_argument(text, i + 1) {
            Some((argument, end, grouped)) => {
                out.push_str(&text[copied..i]);
                out.push(open);
                if grouped {
                    out.push_str(&translate(&text[argument]));
                } else {
                    out.push_str(&text[argument]);
                }
                out.push(close);
                copied = end;
                i = end;
            }
            None => i += 1,
        }
    }

    out.push_str(&text[copied..]);
    out
}

/// A script marker needs a base: some non-blank character right before it.
/// `\^` and `\_` are escaped literals.
fn has_base(before: &str) -> bool {
    before
        .chars()
        .next_back()
        .is_some_and(|c| !c.is_whitespace() && c != '\\')
}

/// Parse the argument of `^`/`_` at `at`: a brace group, a digit run, or a
/// single token character. The flag tells whether it was a group.
fn script_argument(text: &str, at: usize) -> Option<(Range<usize>, usize, bool)> {
    if let Some((inner, end)) = brace_group(text, at) {
        return Some((inner, end, true));
    }

    let rest = text.get(at..)?;
    let first = rest.chars().next()?;
    if first.is_ascii_digit() {
        let len = rest.bytes().take_while(u8::is_ascii_digit).count();
        return Some((at..at + len, at + len, false));
    }
    if is_script_token(first) {
        let end = at + first.len_utf8();
        return Some((at..end, end, false));
    }
    None
}

/// Letters, digits, and symbol glyphs produced by the table (`∞`, `π`).
/// ASCII punctuation and the script brackets themselves never qualify.
fn is_script_token(c: char) -> bool {
    c.is_alphanumeric()
        || (!c.is_ascii()
            && !c.is_whitespace()
            && !matches!(
                c,
                SUPERSCRIPT_OPEN | SUPERSCRIPT_CLOSE | SUBSCRIPT_OPEN | SUBSCRIPT_CLOSE
            ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fraction() {
        assert_eq!(translate(r"\frac{1}{2}"), "(1/2)");
        assert_eq!(translate(r"\frac{a+b}{c}"), "(a+b/c)");
    }

    #[test]
    fn test_nested_fraction() {
        assert_eq!(translate(r"\frac{\frac{1}{2}}{3}"), "((1/2)/3)");
        assert_eq!(translate(r"\frac{a^2}{\pi}"), "(a⁽2⁾/π)");
    }

    #[test]
    fn test_greek_and_exponent() {
        assert_eq!(translate(r"\pi r^2"), "π r⁽2⁾");
        assert_eq!(translate(r"\alpha + \beta = \gamma"), "α + β = γ");
        assert_eq!(translate(r"\Omega"), "Ω");
    }

    #[test]
    fn test_symbol_names_are_maximal() {
        assert_eq!(translate(r"x \in A"), "x ∈ A");
        assert_eq!(translate(r"\int f"), "∫ f");
        assert_eq!(translate(r"\infty"), "∞");
        assert_eq!(translate(r"\inn"), r"\inn");
    }

    #[test]
    fn test_unknown_macros_pass_through() {
        assert_eq!(translate(r"\mathbb{R}"), r"\mathbb{R}");
        assert_eq!(translate(r"\left( x \right)"), r"\left( x \right)");
    }

    #[test]
    fn test_unbalanced_fraction_is_verbatim() {
        assert_eq!(translate(r"\frac{1}{2"), r"\frac{1}{2");
        assert_eq!(translate(r"\frac{1}"), r"\frac{1}");
        assert_eq!(translate(r"\frac12"), r"\frac12");
    }

    #[test]
    fn test_exponent_forms() {
        assert_eq!(translate("x^{n+1}"), "x⁽n+1⁾");
        assert_eq!(translate("10^23 atoms"), "10⁽23⁾ atoms");
        assert_eq!(translate("e^x"), "e⁽x⁾");
        assert_eq!(translate(r"e^{i\pi}"), "e⁽iπ⁾");
        assert_eq!(translate("a^{b^{c}}"), "a⁽b⁽c⁾⁾");
    }

    #[test]
    fn test_symbol_exponent() {
        assert_eq!(translate(r"x^\infty"), "x⁽∞⁾");
        assert_eq!(translate("x_^{2}"), "x_⁽2⁾");
    }

    #[test]
    fn test_exponent_without_base_or_argument() {
        assert_eq!(translate("^2"), "^2");
        assert_eq!(translate("x ^2"), "x ^2");
        assert_eq!(translate("x^-1"), "x^-1");
        assert_eq!(translate("x^{1"), "x^{1");
    }

    #[test]
    fn test_subscript_forms() {
        assert_eq!(translate("a_{i,j}"), "a₍i,j₎");
        assert_eq!(translate("x_1 + x_2"), "x₍1₎ + x₍2₎");
        assert_eq!(translate(r"\sum_{i=1}^{n} i"), "∑₍i=1₎⁽n⁾ i");
        assert_eq!(translate(r"a\_b"), r"a\_b");
    }

    #[test]
    fn test_exponent_before_subscript() {
        assert_eq!(translate("x^2_3"), "x⁽2⁾₍3₎");
        assert_eq!(translate("x_3^2"), "x₍3₎⁽2⁾");
    }

    #[test]
    fn test_roots() {
        assert_eq!(translate(r"\sqrt{2}"), "√(2)");
        assert_eq!(translate(r"\sqrt{x^2 + y^2}"), "√(x⁽2⁾ + y⁽2⁾)");
        assert_eq!(translate(r"\sqrt[3]{8}"), "√[3](8)");
        assert_eq!(translate(r"\sqrt[n]{\frac{a}{b}}"), "√[n]((a/b))");
        assert_eq!(translate(r"\sqrt{2"), r"\sqrt{2");
    }

    #[test]
    fn test_plain_text_is_untouched() {
        let plain = "The area is 12 square units (approx.)";
        assert_eq!(translate(plain), plain);
        assert_eq!(translate(""), "");
    }

    #[test]
    fn test_translation_is_idempotent_on_output() {
        for input in [r"\pi r^2", r"\frac{1}{2}", r"\sqrt[3]{x_1}", "plain"] {
            let once = translate(input);
            assert_eq!(translate(&once), once, "input: {}", input);
        }
    }

    #[test]
    fn test_escaped_backslash_before_structured_macro() {
        assert_eq!(translate(r"a \\frac{1}{2}"), r"a \\frac{1}{2}");
        assert_eq!(translate(r"a \\sqrt{2}"), r"a \\sqrt{2}");
        assert_eq!(translate(r"\\\frac{1}{2}"), r"\\(1/2)");
    }

    #[test]
    fn test_group_ending_in_escaped_backslash() {
        assert_eq!(translate(r"x^{a\\}"), r"x⁽a\\⁾");
    }

    #[test]
    fn test_control_symbols_do_not_start_macros() {
        assert_eq!(translate(r"a \\ \pi"), r"a \\ π");
        assert_eq!(translate(r"\{\alpha\}"), r"\{α\}");
    }
}
