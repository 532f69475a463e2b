use std::io;
use std::process::ExitCode;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use travel_booking::config::{AppConfig, DEFAULT_LOG_FILTER};
use travel_booking::console::session::Session;
use travel_booking::services::transport_service::TransportService;
use travel_booking::utils::error::{AppError, AppResult};

fn main() -> ExitCode {
    // Logs go to stderr, stdout belongs to the prompts
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| DEFAULT_LOG_FILTER.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    match run() {
        Ok(()) | Err(AppError::InputClosed) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "session aborted");
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn run() -> AppResult<()> {
    let config = AppConfig::from_env()?;
    let transport_service = TransportService::new(config.transports()?)?;

    let stdin = io::stdin();
    let mut session = Session::new(stdin.lock(), io::stdout(), transport_service, &config);
    let user = session.run()?;
    tracing::info!(bookings = user.bookings().len(), "session finished");
    Ok(())
}
