/*
[INPUT]:  LISTMONK_URL / LISTMONK_USERNAME / LISTMONK_PASSWORD environment
[OUTPUT]: Server health, lists and a freshly created subscriber
[POS]:    Examples - end-to-end client usage
[UPDATE]: When the public client surface changes
*/

use listmonk_adapter::*;

/// Example: talk to a running Listmonk server
///
/// Reads connection settings from the environment, falling back to
/// `http://localhost:9000` with `admin:admin`.
#[tokio::main]
async fn main() {
    println!("=== Listmonk Client Example ===\n");

    let client = match ClientConfig::from_env().and_then(ListmonkClient::new) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to create client: {}", e);
            return;
        }
    };
    println!("✓ HTTP client created for {}\n", client.api_base_url());

    match client.health_check().await {
        Ok(true) => println!("✓ Server healthy"),
        Ok(false) => println!("✗ Server reported unhealthy"),
        Err(e) => {
            println!("✗ Error: {}", e);
            return;
        }
    }

    println!("\nFetching lists...");
    let lists = match client.get_lists(&ListQuery::default()).await {
        Ok(lists) => lists,
        Err(e) => {
            println!("✗ Error: {}", e);
            return;
        }
    };
    for list in &lists {
        println!(
            "  - {} ({}, {} subscribers)",
            list.name().unwrap_or("<unnamed>"),
            list.optin(),
            list.subscriber_count()
        );
    }

    let list_ids: Vec<i64> = lists.iter().filter_map(|list| list.id().ok()).take(1).collect();
    if list_ids.is_empty() {
        println!("\nNo lists found, skipping subscriber creation");
        return;
    }

    println!("\nCreating subscriber...");
    let request = SubscriberRequest::new("example@example.com")
        .name("Example Subscriber")
        .lists(list_ids)
        .preconfirm_subscriptions(true);
    match client.create_subscriber(&request).await {
        Ok(subscriber) => println!("✓ Created subscriber {:?}", subscriber.id()),
        Err(ListmonkError::Validation(errors)) => println!("✗ Invalid request: {}", errors),
        Err(e) => println!("✗ Error: {}", e),
    }

    println!("\n✓ Example complete");
}
