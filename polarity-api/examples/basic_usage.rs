//! Basic usage example for polarity correction

use polarity_api::{correct_text, Config, LabelClassifier, PolarityCorrector};

fn keyword_label(sentence: &str) -> &'static str {
    let lower = sentence.to_lowercase();
    if ["great", "love", "excellent"].iter().any(|w| lower.contains(w)) {
        "positive"
    } else {
        "negative"
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let review = "The camera is great.\n\
                  I love the battery life.\n\
                  The strap is flimsy.\n\
                  Sound quality is excellent.\n";

    // Method 1: Convenience function
    println!("=== Method 1: Convenience Function ===");
    let corrected = correct_text(review, LabelClassifier::new(keyword_label))?;
    print!("{corrected}");

    // Method 2: Full report
    println!("\n=== Method 2: Per-Sentence Report ===");
    let corrector = PolarityCorrector::new(LabelClassifier::new(keyword_label));
    let output = corrector.process_text(review)?;
    for sentence in &output.sentences {
        println!(
            "  [{}] {:<8} {}",
            if sentence.kept { "kept" } else { "drop" },
            sentence.polarity,
            sentence.text
        );
    }
    println!(
        "Kept {} of {} sentences in {}ms",
        output.metadata.kept_sentences,
        output.metadata.total_sentences,
        output.metadata.processing_time_ms
    );

    // Method 3: Custom separator
    println!("\n=== Method 3: Custom Separator ===");
    let config = Config::builder().separator(" // ").build()?;
    let corrector = PolarityCorrector::with_config(LabelClassifier::new(keyword_label), config);
    println!("{}", corrector.correct_text("Great fit // Bad zipper // Love it // Excellent value")?);

    Ok(())
}
