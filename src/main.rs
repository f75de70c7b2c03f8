use rdf_solr::{
    DocumentBuilder, DefaultDocumentBuilder, IndexerConfig, JsonLinesSink, Literal, MemorySink,
    NamedNode, Quad, QuadIndexer, RDF_TYPE,
};
use std::io;

fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    println!("rdf-solr v{}", rdf_solr::version());
    println!("==========================================");
    println!();

    let config = match std::env::args().nth(1) {
        Some(path) => {
            println!("Loading config from {}", path);
            IndexerConfig::from_yaml_file(path)?
        }
        None => IndexerConfig::default(),
    };

    demo_single_document(&config)?;
    demo_indexer(config)?;
    Ok(())
}

fn sample_quads() -> anyhow::Result<Vec<Quad>> {
    let social = NamedNode::new("http://example.org/graph/social")?;
    let work = NamedNode::new("http://example.org/graph/work")?;
    let alice = NamedNode::new("http://example.org/people/alice")?;
    let bob = NamedNode::new("http://example.org/people/bob")?;
    let name = NamedNode::new("http://xmlns.com/foaf/0.1/name")?;
    let knows = NamedNode::new("http://xmlns.com/foaf/0.1/knows")?;
    let person = NamedNode::new("http://xmlns.com/foaf/0.1/Person")?;
    let rdf_type = NamedNode::new(RDF_TYPE)?;

    Ok(vec![
        Quad::new(social.clone(), alice.clone(), rdf_type.clone(), person.clone()),
        Quad::new(social.clone(), alice.clone(), name.clone(), Literal::new_simple_literal("Alice")),
        Quad::new(social.clone(), alice.clone(), knows, bob.clone()),
        Quad::new(social, bob.clone(), rdf_type, person),
        Quad::new(work, bob, name, Literal::new_simple_literal("Bob")),
    ])
}

fn demo_single_document(config: &IndexerConfig) -> anyhow::Result<()> {
    println!("=== Demo 1: Single document ===");
    let builder = DefaultDocumentBuilder::with_config(config.builder.clone());
    let alice: Vec<Quad> = sample_quads()?
        .into_iter()
        .filter(|q| q.subject.as_str().ends_with("alice"))
        .collect();

    let doc = builder.build_document(
        "http://example.org/graph/social http://example.org/people/alice",
        &alice,
    )?;
    println!("✓ Built document with {} fields from {} quads", doc.len(), alice.len());
    println!("{}", serde_json::to_string_pretty(&doc)?);
    println!();
    Ok(())
}

fn demo_indexer(config: IndexerConfig) -> anyhow::Result<()> {
    println!("=== Demo 2: Indexing a quad stream ===");
    let builder = DefaultDocumentBuilder::with_config(config.builder.clone());

    let mut indexer = QuadIndexer::new(builder.clone(), MemorySink::new(), config.clone());
    indexer.index_quads(sample_quads()?)?;
    let (sink, report) = indexer.finish()?;
    println!("✓ Indexed {} documents, skipped {}", report.indexed, report.skipped.len());
    for doc in sink.documents() {
        println!("  → {}", doc.key().unwrap_or("<no key>"));
    }

    println!("\nJSON lines:");
    let stdout = io::stdout();
    let mut indexer = QuadIndexer::new(builder, JsonLinesSink::new(stdout.lock()), config);
    indexer.index_quads(sample_quads()?)?;
    indexer.finish()?;
    Ok(())
}
