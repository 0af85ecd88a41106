use dashboard::{
    app, get_config_info, load_dataset, missing_dataset_guidance, setup_logger, AppState,
};
use slog::info;
use std::{net::SocketAddr, str::FromStr, sync::Arc};
use tokio::{net::TcpListener, signal};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = get_config_info();
    let logger = setup_logger(&cli);

    let data_file = cli
        .data_file
        .unwrap_or(String::from("./data/raw/temperatures_2023.csv"));
    if let Some(guidance) = missing_dataset_guidance(&data_file) {
        println!("{}", guidance);
        return Ok(());
    }

    let dataset = load_dataset(&data_file)?;
    info!(logger, "loaded {} rows from {}", dataset.len(), data_file);

    let socket_addr = SocketAddr::from_str(&format!(
        "{}:{}",
        cli.domain.unwrap_or(String::from("127.0.0.1")),
        cli.port.unwrap_or(String::from("9100"))
    ))?;

    let std_listener = std::net::TcpListener::bind(socket_addr)?;
    std_listener.set_nonblocking(true)?;
    let listener = TcpListener::from_std(std_listener)?;

    info!(logger, "listening on http://{}", socket_addr);

    let app = app(AppState {
        logger,
        remote_url: cli
            .remote_url
            .unwrap_or(String::from("http://127.0.0.1:9100")),
        ui_dir: cli.ui_dir.unwrap_or(String::from("./ui")),
        dataset: Arc::new(dataset),
    });
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
