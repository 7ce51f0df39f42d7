// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
#[allow(dead_code)]
pub fn generate_buffer(blocks: usize) -> String {
    let languages = ["text", "markdown-a", "json", "rust", "python-a"];
    let mut content = String::new();

    for i in 0..blocks {
        content.push_str(&format!("\n∞∞∞{}\n", languages[i % languages.len()]));
        content.push_str(&format!("Note number {i}\n"));
        content.push_str("Some paragraph content with multiple sentences. This helps create realistic buffers for benchmarking.\n");
        content.push_str("- a list item\n- another item");
    }

    content
}
