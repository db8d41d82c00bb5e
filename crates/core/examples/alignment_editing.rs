//! Correcting a machine-made sentence alignment by hand
//!
//! Walks the whole lifecycle of the alignment table: seed it from
//! segmented text, repair row drift with a gap, split and re-merge a row,
//! and check readiness before commit.

use bitext_core::{
    alignment_stats, clean_empty_pairs, from_segments, insert_gap, merge_up, split_at,
    split_sentences, update_text, AlignmentPair, Side,
};

const LINE: &str = "----------------------------------------";

fn main() {
    println!("=== Alignment Editing Examples ===\n");

    // Example 1: Seeding the table from raw text
    let pairs = example_seed_table();

    // Example 2: Fixing row drift with a gap
    let pairs = example_fix_drift(pairs);

    // Example 3: Splitting a row and merging it back
    let pairs = example_split_and_merge(pairs);

    // Example 4: Cleanup, readiness, and the JSON boundary
    example_commit(pairs);
}

fn print_table(pairs: &[AlignmentPair]) {
    for (i, pair) in pairs.iter().enumerate() {
        println!("  {}. {:<26} | {}", i, pair.source, pair.target);
    }
}

fn example_seed_table() -> Vec<AlignmentPair> {
    println!("Example 1: Seeding the Table");
    println!("{}", LINE);

    // The translator skipped the weather sentence, so from row 1 on the
    // machine pairing drifts: every translation sits one row too high.
    let article = "The cat sat on the mat. It was warm. The cat slept.";
    let translation = "猫坐在垫子上。猫睡着了。";

    let pairs = from_segments(split_sentences(article), split_sentences(translation));

    println!("Article:     {}", article);
    println!("Translation: {}\n", translation);
    print_table(&pairs);
    println!("\nStats: {}\n", alignment_stats(&pairs));

    pairs
}

fn example_fix_drift(pairs: Vec<AlignmentPair>) -> Vec<AlignmentPair> {
    println!("Example 2: Fixing Drift with a Gap");
    println!("{}", LINE);

    // Push the target column down one row from the drift point, then type
    // the missing translation into the gap.
    let pairs = insert_gap(&pairs, 1, Side::Target);
    println!("After inserting a target gap at row 1:");
    print_table(&pairs);

    let pairs = update_text(&pairs, 1, Side::Target, "天气很暖和。");
    println!("\nAfter typing the missing translation:");
    print_table(&pairs);
    println!();

    pairs
}

fn example_split_and_merge(pairs: Vec<AlignmentPair>) -> Vec<AlignmentPair> {
    println!("Example 3: Splitting a Row and Merging It Back");
    println!("{}", LINE);

    // A slip of the mouse splits row 0 after "The cat sat"; merging the
    // stray half upward restores the sentence and the rebuild drops the
    // leftover blank row.
    let split = split_at(&pairs, 0, Side::Source, 11);
    println!("After splitting row 0 at character 11:");
    print_table(&split);

    let merged = merge_up(&split, 1, Side::Source);
    println!("\nAfter merging row 1 back up:");
    print_table(&merged);
    println!();

    merged
}

fn example_commit(pairs: Vec<AlignmentPair>) {
    println!("Example 4: Cleanup and Commit");
    println!("{}", LINE);

    let cleaned = clean_empty_pairs(&pairs);
    let stats = alignment_stats(&cleaned);

    print_table(&cleaned);
    println!("\nStats: {}", stats);
    println!("Ready to commit: {}", stats.is_ready());

    let json = serde_json::to_string_pretty(&cleaned).expect("alignment rows always serialize");
    println!("\nWhat the UI receives:\n{}", json);
}
