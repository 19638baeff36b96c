// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
#[allow(dead_code)]
pub fn generate_article(sections: usize) -> String {
    let mut content = String::from("![hero](cover.jpg, Benchmark Guide, Many sections)\n\n");
    for section in 0..sections {
        content.push_str(&format!("## Section {section}\n\n"));
        content.push_str(&format!("![step]({}, {sections}, Stage {section})\n\n", section + 1));
        content.push_str(
            "Paragraph with **bold**, *italic*, `code` and a [link](https://example.com).\n\
             A second line of the same paragraph with _emphasis_.\n\n",
        );
        content.push_str("- Bullet point\n- Another item\n\n");
        content.push_str("1. First\n2. Second\n\n");
        content.push_str("- [ ] Open task\n- [x] Done task\n\n");
        content.push_str("💡 **Tip**: Keep sessions short.\n\n");
        content.push_str("![quote](Small steps, every day, Coach)\n\n");
        if section % 3 == 0 {
            content.push_str("```rust\nfn example() {\n    println!(\"Hello\");\n}\n```\n\n");
        }
        if section % 4 == 0 {
            content.push_str("![expandable](Details)\nHidden *details* here.\n- nested item\n\n");
        }
        content.push_str("---\n\n");
    }
    content
}

#[allow(dead_code)]
pub fn generate_unclosed_inline(len: usize) -> String {
    "*a **b `c [d ".repeat(len)
}
