use anyhow::{Context, Result};
use dotenv::dotenv;
use inventory::{state::AppState, views::LoadOutcome};
use shared::{config::Config, utils::init_logger};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();

    init_logger("inventory");

    let config = Config::init().context("Failed to load configuration")?;

    let state = AppState::new(&config).context("Failed to create AppState")?;

    let mut view = state.list_view();
    if let LoadOutcome::Degraded(err) = view.activate().await {
        info!("Showing an empty listing: {err}");
    }

    let pagination = view.page().pagination;
    println!(
        "Products: {} (page {}/{})",
        pagination.total_items,
        pagination.page,
        pagination.total_pages.max(1)
    );

    for row in view.rows() {
        println!(
            "{:<6} {:<32} {:<10} {:>6}{} {}",
            row.code,
            row.name,
            row.import_date,
            row.quantity,
            if row.low_stock { " (low)" } else { "" },
            row.type_name.unwrap_or_default()
        );
    }

    for notice in state.notices.drain() {
        println!("[{:?}] {}", notice.level, notice.message);
    }

    Ok(())
}
