// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
#[allow(dead_code)]
pub fn generate_document(sections: usize, marker: &str) -> Vec<String> {
    let mut lines = Vec::new();
    for section in 0..sections {
        lines.push(format!("# Section {section}"));
        lines.push(String::new());
        lines.push("Paragraph with some content.".to_string());
        lines.push(String::new());
        lines.push(marker.to_string());
        lines.push(String::new());
    }
    lines
}

#[allow(dead_code)]
pub fn generate_snippet(line_count: usize) -> String {
    (1..=line_count)
        .map(|n| format!("    let value_{n} = {n};\n"))
        .collect()
}
