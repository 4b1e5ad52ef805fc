use std::sync::Arc;
use anyhow::Context;
use chrono::{NaiveDate, Utc};
use dotenv::dotenv;
use serde_json::json;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod state;

use appointment_cell::services::{find_dangling_references, AppointmentStats};
use auth_cell::models::LoginRequest;
use shared_config::AppConfig;
use shared_database::open_store;
use shared_models::error::AppError;
use shared_models::notice::Notice;

use crate::state::AdminState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Loading Env Vars
    dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    info!("Starting barbershop admin");

    let config = Arc::new(AppConfig::from_env());
    let store = open_store(&config)?;
    let state = AdminState::build(config.clone(), store)?;

    // Optional first argument: the day to report on.
    let today = match std::env::args().nth(1) {
        Some(arg) => NaiveDate::parse_from_str(&arg, "%Y-%m-%d")
            .with_context(|| format!("Invalid date argument: {}", arg))?,
        None => Utc::now().date_naive(),
    };

    let user = match state.session.restore()? {
        Some(user) => user,
        None => {
            let request = LoginRequest::new(config.admin_email.clone(), config.admin_password.clone());
            let result = state.session.login(&request).map_err(AppError::from);
            let notice = Notice::from_result(&result, "Signed in");
            info!("{}", notice.message);
            result?
        }
    };

    let overview = state.dashboard.overview(today).await?;

    let appointments = state.booking.list_appointments().await?;
    let stats = AppointmentStats::new(&appointments);

    let dangling = find_dangling_references(
        &appointments,
        &state.clients.list_clients().await?,
        &state.staff.list_staff().await?,
        &state.catalog.list_services().await?,
    );
    if !dangling.is_empty() {
        warn!("{} appointments point at deleted records", dangling.len());
    }

    let settings = state.settings.load();

    let report = json!({
        "shop": settings.shop_name,
        "openingHours": settings.opening_hours.days(),
        "user": user,
        "overview": overview,
        "appointments": stats.summary(),
        "revenueByStaff": stats.revenue_by_staff(),
        "revenueByService": stats.revenue_by_service(),
        "clientActivity": stats.client_activity(),
        "danglingReferences": dangling,
        "theme": settings.appearance.theme_variables(false),
    });

    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
