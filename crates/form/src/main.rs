//! `listing-add` -- submit one property listing from the command line.
//!
//! Each argument has the form `field=value`, where `field` is a JSON key
//! (`askingPrice`), a snake_case name (`asking_price`) or a label keyword
//! (`price`). Fields not given are sent as empty strings. Exits with `0`
//! once the listing is created and `1` on any error, including malformed
//! arguments.
//!
//! ```text
//! listing-add title="Example title" price='$100' image=http://example-image.jpg
//! ```
//!
//! # Environment variables
//!
//! | Variable               | Required | Default                 | Description                  |
//! |------------------------|----------|-------------------------|------------------------------|
//! | `API_BASE_URL`         | no       | `http://localhost:5001` | Listings service base URL    |
//! | `REQUEST_TIMEOUT_SECS` | no       | `30`                    | Per-request timeout          |

use std::sync::Arc;

use listing_client::api::PropertiesApi;
use listing_client::config::ClientConfig;
use listing_core::draft::SUBMIT_LABEL;
use listing_core::state::FormState;
use listing_form::args;
use listing_form::controller::FormController;
use listing_form::event_loop::{self, FormEvent};
use listing_form::navigation::MemoryHistory;

use tokio::sync::mpsc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Path the form is shown on before it redirects.
const FORM_PATH: &str = "/add-property";

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "listing_form=info,listing_client=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ClientConfig::from_env().unwrap_or_else(|e| {
        tracing::error!(error = %e, "Invalid configuration");
        std::process::exit(1);
    });

    let api = PropertiesApi::new(&config).unwrap_or_else(|e| {
        tracing::error!(error = %e, "Failed to build HTTP client");
        std::process::exit(1);
    });

    let history = Arc::new(MemoryHistory::with_initial(FORM_PATH));
    let mut form = FormController::new(Arc::new(api), Arc::clone(&history));

    if let Err(e) = args::apply_field_args(&mut form, std::env::args().skip(1)) {
        tracing::error!(error = %e, "Invalid arguments");
        std::process::exit(1);
    }
    args::log_draft(form.draft());

    tracing::info!(
        button = SUBMIT_LABEL,
        url = %config.properties_url(),
        "Submitting property",
    );

    let (tx, rx) = mpsc::channel(1);
    if tx.send(FormEvent::Submit).await.is_err() {
        tracing::error!("Form input closed before submit");
        std::process::exit(1);
    }
    drop(tx);

    match event_loop::run(&mut form, rx).await {
        FormState::Done => {
            tracing::info!(route = %history.current(), "Property listed");
        }
        FormState::Error(reason) => {
            tracing::error!(reason = %reason, route = %history.current(), "Property not listed");
            std::process::exit(1);
        }
        other => {
            tracing::error!(state = other.name(), "Form ended without a result");
            std::process::exit(1);
        }
    }
}
