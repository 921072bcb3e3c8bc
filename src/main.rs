use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use ragchunk::{
    chunk_text, clean_text, ChunkConfig, ChunkMode, ChunkingStrategy, KeywordClassifier,
    PatternDetector,
};

/// Split a document into retrieval chunks.
#[derive(Parser, Debug)]
#[command(name = "ragchunk", version, about)]
struct Args {
    /// Input text file
    input: PathBuf,

    /// Chunking strategy: fixed_length, semantic, session, hierarchical, adaptive
    #[arg(long, default_value = "adaptive")]
    strategy: String,

    /// Target maximum chunk size, in mode units
    #[arg(long, default_value_t = 200)]
    chunk_size: usize,

    /// Trailing units carried into the next chunk
    #[arg(long, default_value_t = 30)]
    overlap: usize,

    /// Unit granularity: chars, words, sentences, paragraphs
    #[arg(long, default_value = "chars")]
    mode: String,

    /// Minimum section size kept by hierarchical chunking
    #[arg(long, default_value_t = 50)]
    min_chunk_size: usize,

    /// Maximum session span size before sub-chunking
    #[arg(long, default_value_t = 1000)]
    max_chunk_size: usize,

    /// Extra classification keyword (repeatable)
    #[arg(long = "keyword")]
    keywords: Vec<String>,

    /// Emit the chunks as JSON instead of a summary
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let raw = fs::read_to_string(&args.input)
        .with_context(|| format!("Failed to read {}", args.input.display()))?;
    let text = clean_text(&raw);

    let strategy: ChunkingStrategy = args.strategy.parse()?;
    let mode: ChunkMode = args.mode.parse()?;
    let config = ChunkConfig {
        strategy,
        chunk_size: args.chunk_size,
        overlap: args.overlap,
        mode,
        min_chunk_size: args.min_chunk_size,
        max_chunk_size: args.max_chunk_size,
    };

    let chunks = chunk_text(&text, &config)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&chunks)?);
        return Ok(());
    }

    if chunks.is_empty() {
        println!("No content extracted from {}", args.input.display());
        return Ok(());
    }

    let features = PatternDetector::shared().analyze(&text);
    let classifier = KeywordClassifier::new().with_custom_keywords(args.keywords);
    let categories = classifier.classify(&text);

    let total_chars: usize = chunks.iter().map(|c| c.length).sum();
    let total_words: usize = chunks.iter().map(|c| c.word_count).sum();
    let mut type_counts: BTreeMap<&str, usize> = BTreeMap::new();
    for c in &chunks {
        *type_counts.entry(c.chunk_type.as_str()).or_default() += 1;
    }

    println!("=== Chunking Summary: {} ===", args.input.display());
    println!("Strategy:           {}", strategy);
    println!("Mode:               {}", mode);
    println!("Chunks:             {}", chunks.len());
    println!(
        "Avg length:         {:.1} chars",
        total_chars as f64 / chunks.len() as f64
    );
    println!(
        "Avg word count:     {:.1}",
        total_words as f64 / chunks.len() as f64
    );

    println!("\nChunk types:");
    for (chunk_type, count) in &type_counts {
        println!("  {chunk_type}: {count}");
    }

    println!("\nText features:");
    println!("  sessions detected:   {}", features.has_sessions);
    println!("  headings detected:   {}", features.has_hierarchy);
    println!("  paragraphs:          {}", features.paragraph_count);
    println!("  sentences:           {}", features.sentence_count);
    println!(
        "  avg paragraph chars: {:.1}",
        features.avg_paragraph_length
    );

    println!("\nCategories: {}", categories.join(", "));

    println!("\nFirst chunks:");
    for c in chunks.iter().take(3) {
        let preview: String = c.text.chars().take(60).collect();
        println!("  [{}] ({}, {} chars) {}", c.id, c.chunk_type, c.length, preview);
    }

    Ok(())
}
