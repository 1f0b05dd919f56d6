use rs_quote_core::{lookup, LookupOutcome, QuoteCatalog, QUICK_TOPICS};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load the dataset compiled into rs-quote-core
    // 'QuoteCatalog::load' reads a JSON file or a directory of JSON files instead
    let catalog = QuoteCatalog::bundled()?;

    println!("{} topics, {} quotes", catalog.len(), catalog.quote_count());
    println!("Topics: {}", catalog.topics().join(", "));

    // Each lookup picks up to three quotes at random, so running this
    // twice prints different quotes
    for topic in QUICK_TOPICS {
        println!("\n== {topic}");
        for quote in lookup(topic, &catalog)?.quotes() {
            println!("  {quote}");
        }
    }

    // Case and surrounding whitespace are ignored
    println!("\n== '  WISDOM '");
    for quote in lookup("  WISDOM ", &catalog)?.quotes() {
        println!("  {quote}");
    }

    // An unknown topic is not an error, it gives a placeholder message
    match lookup("xyz", &catalog)? {
        LookupOutcome::Empty { message } => println!("\n== xyz\n  {message}"),
        LookupOutcome::Selected { .. } => println!("Should not happen"),
    }

    // A blank topic is rejected before the catalog is read
    match lookup("   ", &catalog) {
        Ok(_) => println!("Should not happen"),
        Err(e) => println!("\n== blank topic\n  {}", e.user_message()),
    }

    Ok(())
}
