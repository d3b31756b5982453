//! Integration tests for response formatting

use visionfmt::{
    classify, format_response, format_response_with_options, format_response_with_report,
    segment, tokenize, translate_math, Block, Document, FormatOptions, InlineSpan, LossKind,
};

fn para(spans: Vec<InlineSpan>) -> Block {
    Block::paragraph(spans)
}

fn text(s: &str) -> InlineSpan {
    InlineSpan::text(s)
}

// ============================================================================
// Macro translation
// ============================================================================

mod translation {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_fraction() {
        assert_eq!(translate_math(r"\frac{1}{2}"), "(1/2)");
    }

    #[test]
    fn test_greek_symbol() {
        assert_eq!(translate_math(r"\pi r^2"), "π r⁽2⁾");
    }

    #[test]
    fn test_graceful_degradation() {
        assert_eq!(translate_math(r"\frac{1}{2"), r"\frac{1}{2");
    }

    #[test]
    fn test_operators_and_sets() {
        assert_eq!(
            translate_math(r"\forall x \in S, x \geq 0 \Rightarrow \sqrt{x} \leq x"),
            "∀ x ∈ S, x ≥ 0 ⇒ √(x) ≤ x"
        );
        assert_eq!(translate_math(r"3 \times 4 \cdot 2 \pm 1"), "3 × 4 · 2 ± 1");
        assert_eq!(translate_math(r"\nabla f \approx \partial_x f"), "∇ f ≈ ∂₍x₎ f");
    }

    #[test]
    fn test_integral() {
        assert_eq!(
            translate_math(r"\int_0^\infty e^{-x} dx = 1"),
            "∫₍0₎⁽∞⁾ e⁽-x⁾ dx = 1"
        );
    }

    #[test]
    fn test_idempotent_on_macro_free_text() {
        for input in ["plain text", "a + b = c", "π ≈ 3.14", "(1/2)"] {
            let once = translate_math(input);
            assert_eq!(translate_math(&once), once);
        }
    }

    #[test]
    fn test_deterministic() {
        let input = r"\frac{\sqrt[3]{x^2_1}}{\sum_{k=0}^{n} k}";
        assert_eq!(translate_math(input), translate_math(input));
        assert_eq!(translate_math(input), "(√[3](x⁽2⁾₍1₎)/∑₍k=0₎⁽n⁾ k)");
    }
}

// ============================================================================
// Inline tokenization
// ============================================================================

mod inline {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_bold_italic() {
        assert_eq!(
            tokenize("**bold** and _ital_"),
            vec![
                InlineSpan::Bold("bold".into()),
                text(" and "),
                InlineSpan::Italic("ital".into()),
            ]
        );
    }

    #[test]
    fn test_text_is_preserved_around_spans() {
        let line = r"Use `area()` with \(r = 2\) for **radius** *_two_*.";
        let spans = tokenize(line);
        assert_eq!(
            spans,
            vec![
                text("Use "),
                InlineSpan::Code("area()".into()),
                text(" with "),
                InlineSpan::InlineMath("r = 2".into()),
                text(" for "),
                InlineSpan::Bold("radius".into()),
                text(" "),
                InlineSpan::Italic("two".into()),
                text("."),
            ]
        );
    }
}

// ============================================================================
// Line classification
// ============================================================================

mod lines {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_boxed_answer() {
        assert_eq!(classify(r"$\boxed{42}$"), vec![Block::boxed("42")]);
    }

    #[test]
    fn test_every_non_blank_line_is_a_block() {
        let body = "a\n\n\\[x\\]\n   \n$\\boxed{1}$\nb";
        assert_eq!(classify(body).len(), 4);
    }
}

// ============================================================================
// Full responses
// ============================================================================

mod documents {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_header_segmentation() {
        assert_eq!(
            segment("## Title\nBody line"),
            Document::new(vec![Block::Header {
                level: 2,
                title: "Title".into(),
                body: vec![para(vec![text("Body line")])],
            }])
        );
    }

    #[test]
    fn test_worked_solution() {
        let answer = "\
The image shows a circle with radius **5 cm**.

### Step 1: Formula
The area of a circle is \\(A = \\pi r^2\\).
\\[ A = \\pi \\times 5^2 \\]

### Step 2: Compute
\\[ A = 25\\pi \\approx 78.54 \\]

## Final Answer
$\\boxed{25\\pi \\text{ cm}^2}$
";
        let expected = Document::new(vec![
            para(vec![
                text("The image shows a circle with radius "),
                InlineSpan::Bold("5 cm".into()),
                text("."),
            ]),
            Block::Header {
                level: 3,
                title: "Step 1: Formula".into(),
                body: vec![
                    para(vec![
                        text("The area of a circle is "),
                        InlineSpan::InlineMath("A = π r⁽2⁾".into()),
                        text("."),
                    ]),
                    Block::math("A = π × 5⁽2⁾"),
                ],
            },
            Block::Header {
                level: 3,
                title: "Step 2: Compute".into(),
                body: vec![Block::math("A = 25π ≈ 78.54")],
            },
            Block::Header {
                level: 2,
                title: "Final Answer".into(),
                body: vec![Block::boxed(r"25π \text{ cm}⁽2⁾")],
            },
        ]);
        assert_eq!(format_response(answer), expected);
    }

    #[test]
    fn test_header_bodies_never_nest() {
        let doc = format_response("# A\n## B\n### C\ntext\n# D");
        assert_eq!(doc.len(), 4);
        for block in &doc {
            if let Block::Header { body, .. } = block {
                assert!(body.iter().all(|b| !b.is_header()));
            }
        }
    }

    #[test]
    fn test_raw_math_option() {
        let doc = format_response_with_options("\\[\\frac{a}{b}\\]", &FormatOptions::raw_math());
        assert_eq!(doc.blocks, vec![Block::math(r"\frac{a}{b}")]);
    }

    #[test]
    fn test_report_lists_untranslated_macros() {
        let formatted = format_response_with_report(
            "## Final Answer\n$\\boxed{25\\pi \\text{ cm}^2}$",
            &FormatOptions::default(),
        );
        assert_eq!(formatted.report.len(), 1);
        assert_eq!(formatted.report.losses[0].kind, LossKind::UntranslatedMacro);
        assert_eq!(formatted.report.losses[0].name.as_deref(), Some("text"));
    }

    #[test]
    fn test_document_json_shape() {
        let doc = format_response("# T\n**b**");
        let json = serde_json::to_value(&doc).unwrap();
        assert_eq!(json["blocks"][0]["type"], "header");
        assert_eq!(json["blocks"][0]["level"], 1);
        assert_eq!(json["blocks"][0]["body"][0]["type"], "paragraph");
        assert_eq!(json["blocks"][0]["body"][0]["spans"][0]["type"], "bold");
        assert_eq!(json["blocks"][0]["body"][0]["spans"][0]["value"], "b");

        let back: Document = serde_json::from_value(json).unwrap();
        assert_eq!(back, doc);
    }
}
