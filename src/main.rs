use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use orderhub::config::load_config;
use orderhub::hub::{EventChannel, HubSession};
use orderhub::notify::OrderNotifier;
use orderhub::utils::error::Error;

fn main() -> Result<(), Error> {
    dotenvy::dotenv().ok();
    let settings = load_config()?;

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| settings.log.level.clone()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Two independent channels: the bare order-feed signal and the
    // structured order stream.
    let feed = EventChannel::new(&settings.hub);
    let orders = EventChannel::new(&settings.hub);
    let notifier = OrderNotifier::new(feed.dispatcher(), orders.dispatcher());

    // A shop dashboard session subscribed to its own shop's feed.
    let dashboard = HubSession::connect(&feed);
    dashboard.join_topic("shop1");
    let _feed_sub = dashboard.on_event(|event| {
        info!(event = %event.name, "dashboard received feed signal");
    });

    // A back-office session watching every structured order change.
    let back_office = HubSession::connect(&orders);
    let _orders_sub = back_office.on_event(|event| {
        info!(event = %event.name, args = ?event.args, "back office received order change");
    });

    notifier.notify_created("order-1", Some("shop1"));
    notifier.notify_changed(Some("shop1"));
    notifier.notify_status_changed("order-1", Some("shop1"), "Completed");
    notifier.notify_changed(None);

    info!(
        feed_connections = feed.registry().len(),
        orders_connections = orders.registry().len(),
        "demo complete"
    );
    Ok(())
}
