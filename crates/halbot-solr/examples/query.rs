use std::env;
use std::time::Duration;

use halbot_core::SearchBackend;
use halbot_solr::SolrClient;

// Run one query against a base endpoint and print the decoded page.
// Usage:
//   cargo run -p halbot-solr --example query -- http://localhost:8983/solr/ai "source_id:48"

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = env::args().skip(1).collect();
    if args.len() < 2 {
        eprintln!("Usage: cargo run -p halbot-solr --example query -- <base-endpoint> <query>");
        std::process::exit(1);
    }
    let client = SolrClient::new(Duration::from_secs(30))?;
    let result = client.search(&args[0], &args[1])?;
    println!("{} found, {} returned", result.total_found, result.documents.len());
    for (i, doc) in result.documents.iter().enumerate() {
        println!("{:>3}. {} [{}]", i + 1, doc.title, doc.source_id);
    }
    Ok(())
}
