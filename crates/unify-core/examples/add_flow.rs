use unify_core::{AddShowAction, ApiConfig, SearchPage, UnifyTracker};

// Manual walk of the search -> add -> redirect flow against a running
// Unify API server. Pass the search query as the first argument:
//   cargo run --example add_flow -- "derry girls"

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let query = std::env::args().nth(1).unwrap_or_else(|| "girls".to_string());
    let base_url =
        std::env::var("UNIFY_API_URL").unwrap_or_else(|_| "http://localhost:8080".to_string());
    let tracker = UnifyTracker::with_config(ApiConfig::with_base_url(&base_url))?;

    println!("Searching for '{query}'...\n");

    let mut search = SearchPage::new();
    let ticket = search.begin();
    let outcome = tracker.search(&query).await;
    search.finish(ticket, outcome);

    if let Some(e) = search.error() {
        eprintln!("Search failed: {e}");
        return Ok(());
    }

    if search.results().is_empty() {
        println!("No results.");
        return Ok(());
    }

    for (i, result) in search.results().iter().enumerate() {
        println!("  {}. {} (provider id {})", i + 1, result.name, result.provider_id);
    }

    // Add the first result, the way the add link on a result row does
    let first = &search.results()[0];
    println!("\nAdding '{}'...", first.name);

    let mut action = AddShowAction::new();
    if action.begin() {
        let outcome = tracker.add_show(&first.provider_id).await;
        match action.finish(outcome) {
            Some(route) => println!("Added. Redirecting to {route}"),
            None => eprintln!("Add failed: {}", action.error().unwrap_or("unknown")),
        }
    }

    Ok(())
}
