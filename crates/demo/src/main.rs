use anyhow::Context;

use stockroom_inventory::{InventoryConfig, ItemStore, ItemUpdate, ReportManager};

fn main() -> anyhow::Result<()> {
    stockroom_observability::init();

    let config = InventoryConfig::from_env();
    tracing::info!(sku_rule = ?config.sku_rule, "starting stockroom demo");

    let mut store = ItemStore::with_config(&config);
    for (name, category, quantity) in [
        ("basket ball", "sports", 3.0),
        ("soccer ball", "sports", 5.0),
        ("football", "sports", 3.0),
        ("kitchen pot", "cooking", 3.0),
        ("asd", "sports", 0.0),
        ("soccer", "sports", f64::NAN),
    ] {
        let created = store.create(name, category, quantity);
        tracing::info!(name, category, quantity, created, "create");
    }

    tracing::info!(in_stock = ?ReportManager::init(&store).report_in_stock(), "report");

    store.update("SOCSP", &ItemUpdate::quantity(0.0));
    tracing::info!(in_stock = ?ReportManager::init(&store).report_in_stock(), "after update");

    let sports: Vec<&str> = store
        .items_in_category("sports")
        .into_iter()
        .map(|item| item.name())
        .collect();
    tracing::info!(?sports, "category");

    let deleted = store.delete("SOCSP");
    tracing::info!(deleted, remaining = store.len(), "delete");

    let reporter = ReportManager::init(&store)
        .reporter("KITCO")
        .context("no record for KITCO")?;
    let info = reporter.item_info(&store).context("KITCO disappeared")?;
    println!("{}", serde_json::to_string_pretty(&info)?);

    store.update("KITCO", &ItemUpdate::quantity(10.0));
    let info = reporter.item_info(&store).context("KITCO disappeared")?;
    println!("{}", serde_json::to_string_pretty(&info)?);

    Ok(())
}
