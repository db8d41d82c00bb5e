//! Grading translation attempts against a reference translation

use bitext_core::{compute_diff, DiffStats, SpanKind, TokenMode};

const LINE: &str = "----------------------------------------";

fn main() {
    println!("=== Translation Feedback Examples ===\n");

    // Example 1: Word-level diff for a spaced script
    example_word_diff();

    // Example 2: Character-level diff for Chinese
    example_char_diff();

    // Example 3: Scoring a batch of attempts
    example_scoring();
}

fn example_word_diff() {
    println!("Example 1: Word-Level Diff");
    println!("{}", LINE);

    let reference = "the cat sat on the mat";
    let attempt = "the dog sat on a mat";

    let spans = compute_diff(reference, attempt, TokenMode::Word);

    println!("Reference: {}", reference);
    println!("Attempt:   {}", attempt);
    println!("\nSpans:");
    for (i, span) in spans.iter().enumerate() {
        println!("  {}. {}", i + 1, span.description());
    }
    println!("\n");
}

fn example_char_diff() {
    println!("Example 2: Character-Level Diff");
    println!("{}", LINE);

    let reference = "我喜欢猫";
    let attempt = "我爱猫";

    let spans = compute_diff(reference, attempt, TokenMode::Char);

    println!("Reference: {}", reference);
    println!("Attempt:   {}", attempt);

    let rendered: Vec<String> = spans.iter().map(|s| s.to_string()).collect();
    println!("Rendered:  {}", rendered.join(" "));
    println!("\n");
}

fn example_scoring() {
    println!("Example 3: Scoring Attempts");
    println!("{}", LINE);

    let reference = "she sells sea shells by the sea shore";
    let attempts = vec![
        "she sells sea shells by the sea shore",
        "she sells shells by the shore",
        "he buys mountain rocks",
        "",
    ];

    println!("Reference: {}\n", reference);

    for attempt in attempts {
        let spans = compute_diff(reference, attempt, TokenMode::Word);
        let stats = DiffStats::from_spans(&spans, TokenMode::Word);
        let missing = spans.iter().filter(|s| s.kind == SpanKind::Delete).count();

        println!("Attempt:  \"{}\"", attempt);
        println!("  Score:  {}", stats.summary());
        println!("  Missing runs: {}", missing);
    }
    println!();
}
