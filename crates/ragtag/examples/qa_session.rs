//! Ask a question over text files passed on the command line.
//!
//! Usage:
//!   GOOGLE_API_KEY=... cargo run --example qa_session -- handbook.txt notes.txt "How many vacation days do we get?"
//!
//! Every argument except the last names a plain-text file to ingest; the
//! last argument is the question.

use std::path::Path;

use ragtag::{Assembler, ChunkStore, RagConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.len() < 2 {
        println!("Usage: qa_session <file.txt>... \"question\"");
        println!("\nExample:");
        println!("  cargo run --example qa_session -- handbook.txt \"What is the vacation policy?\"");
        return Ok(());
    }

    let (files, question) = args.split_at(args.len() - 1);
    let question = &question[0];

    let config = RagConfig::from_env();
    let assembler = Assembler::from_config(&config)?;

    let mut store = ChunkStore::with_config(&config.chunking);
    for path in files {
        let content = std::fs::read_to_string(path)?;
        let title = Path::new(path)
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or(path);
        let summary = store.add_document(content, title)?;
        println!(
            "📄 Ingested {} ({} chars, {} chunks)",
            summary.title, summary.content_chars, summary.chunk_count
        );
    }

    let reply = assembler.answer(&store, question).await;

    println!("\n📝 {}", reply.answer);
    if !reply.sources.is_empty() {
        println!("\nSources: {}", reply.sources.join(", "));
    }

    Ok(())
}
