// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
#[allow(dead_code)]
pub fn generate_translated_content(size: usize) -> String {
    let base = "# 标题\n\n## 小节\n\n这是一段翻译后的文字，\n它被拆成了多行\n以便于审阅。\n\n- 列表项\n  继续的内容\n- 另一项 with English\n  mixed text\n\n> 引用的段落\n> 第二行\n\n```kotlin\nfun main() {\n    println(\"你好\")\n}\n```\n\n参见[文档](docs.md)\n**重点**说明。\n\n";
    base.repeat(size)
}

#[allow(dead_code)]
pub fn generate_english_content(size: usize) -> String {
    let base = "# Title\n\n## Section\n\nParagraph with some content\nwrapped over lines.\n\n- Bullet point\n  - Nested item\n- Another item\n\n```rust\nfn example() {\n    println!(\"Hello\");\n}\n```\n\n";
    base.repeat(size)
}
