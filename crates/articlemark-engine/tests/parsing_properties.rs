//! Properties that hold for every input.

use articlemark_engine::{
    parse, render_text,
    parsing::{parse_lines, snapshot, source::LineSource},
};
use proptest::prelude::*;

/// Lines drawn from the dialect's building blocks, well-formed or not.
fn dialect_line() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(String::new()),
        Just("   ".to_string()),
        "[a-z *_`\\[\\]()]{0,20}",
        "#{1,4} [A-Za-z ]{0,10}",
        "(- |\\* |• )[a-z*_ ]{0,10}",
        "- \\[[ xX]\\] [a-z]{0,8}",
        "[0-9]{1,3}\\. [a-z]{0,8}",
        "```[a-z]{0,5}",
        "> [a-z*]{0,10}",
        Just("---".to_string()),
        Just("* * *".to_string()),
        Just("![dropcap]".to_string()),
        "!\\[(hero|banner|step|feature|quote|highlight|progress|video|video-thumbnail|expandable|bogus)\\]\\([a-z0-9, %.]{0,20}\\)?",
        "!\\[(hero|banner|expandable)\\]\\([a-z, ]{0,12}\\) [a-z*]{1,8}",
        "(💡|⚠️|ℹ️|✅) [a-z]{0,8}",
        "\\*\\*(Tip|Note|Hint)\\*\\*: [a-z]{0,8}",
    ]
}

fn document() -> impl Strategy<Value = String> {
    prop::collection::vec(dialect_line(), 0..40).prop_map(|lines| lines.join("\n"))
}

proptest! {
    #[test]
    fn every_non_blank_line_is_covered(text in document()) {
        let src = LineSource::new(&text);
        let doc = parse_lines(&src);
        snapshot::invariants(&src, &doc);
    }

    #[test]
    fn parsing_is_deterministic(text in document()) {
        prop_assert_eq!(parse(&text), parse(&text));
    }

    #[test]
    fn lone_opener_keeps_line_verbatim(line in "[a-z][a-z ]{0,15}[*_`\\[][a-z ]{0,15}") {
        // Starts with a letter, so always a paragraph; one opener never closes.
        let doc = parse(&line);
        prop_assert_eq!(render_text(&doc), line.trim().to_string());
    }
}
