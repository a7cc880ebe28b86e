//! Scripted walk through the takeaway desk: two orders are taken, listed,
//! and the oldest one is delivered.

use takeaway_desk::clients::{ActorClient, OrderClient};
use takeaway_desk::lifecycle::{setup_tracing, DeskConfig, TakeawaySystem};
use takeaway_desk::model::{MenuItem, OrderCreate, OrderId, Pasta, PastaTopping, Pizza, PizzaTopping};
use tracing::{info, Instrument};

async fn take_order(
    client: &OrderClient,
    params: OrderCreate,
    items: Vec<MenuItem>,
) -> Result<OrderId, String> {
    let id = client.open_order(params).await.map_err(|e| e.to_string())?;
    for item in items {
        let added = client.add_item(id, item).await.map_err(|e| e.to_string())?;
        info!(%id, total = %added.total, classification = %added.classification, "Item added");
    }
    Ok(id)
}

#[tokio::main]
async fn main() -> Result<(), String> {
    setup_tracing();

    info!("Starting takeaway desk demo");
    let system = TakeawaySystem::new(DeskConfig::from_env());
    let client = &system.order_client;

    let span = tracing::info_span!("order_intake");
    async {
        take_order(
            client,
            OrderCreate {
                customer_name: "Alice Smith".to_string(),
                customer_contact: 87654321,
                customer_address: "12 Harbour Road".to_string(),
            },
            vec![
                Pizza::new(vec![PizzaTopping::Ham]).into(),
                Pizza::plain().into(),
            ],
        )
        .await?;

        take_order(
            client,
            OrderCreate {
                customer_name: "Bob Jones".to_string(),
                customer_contact: 12345678,
                customer_address: "3 Mill Lane".to_string(),
            },
            vec![
                Pasta::new(Some(PastaTopping::Primavera)).into(),
                Pasta::plain().into(),
            ],
        )
        .await
    }
    .instrument(span)
    .await?;

    println!("Orders:");
    for (id, order) in client.list_pending().await.map_err(|e| e.to_string())? {
        println!("[{id}]\n{order}\n----------");
    }

    match client.deliver_next().await.map_err(|e| e.to_string())? {
        Some((id, order)) => println!("Delivered {id}:\n{order}"),
        None => println!("No orders to deliver."),
    }

    system.shutdown().await?;

    info!("Demo completed successfully");
    Ok(())
}
