mod config;
mod routes;


use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    if let Err(err) = dotenvy::dotenv() {
        if !err.not_found() {
            eprintln!("failed to load .env: {err}");
        }
    }
    tracing_subscriber::fmt::init();

    let server = match config::ServerConfig::from_env() {
        Ok(server) => server,
        Err(e) => {
            tracing::error!(error = %e, "invalid server configuration");
            return ExitCode::FAILURE;
        }
    };
    let leptos_options = match config::leptos_options() {
        Ok(options) => options,
        Err(e) => {
            tracing::error!(error = %e, "leptos configuration unavailable");
            return ExitCode::FAILURE;
        }
    };

    // The page links the résumé unconditionally; a missing file only breaks that link.
    let resume = server.resume_path();
    if resume.is_file() {
        tracing::info!(path = %resume.display(), "résumé found");
    } else {
        tracing::warn!(path = %resume.display(), "résumé missing; download link will 404");
    }

    let app = routes::app(leptos_options, &server.public_dir);
    let port = server.port;
    let listener = match tokio::net::TcpListener::bind(format!("0.0.0.0:{port}")).await {
        Ok(listener) => listener,
        Err(e) => {
            tracing::error!(error = %e, %port, "failed to bind");
            return ExitCode::FAILURE;
        }
    };

    tracing::info!(%port, public_dir = %server.public_dir.display(), "portfolio listening");
    if let Err(e) = axum::serve(listener, app).await {
        tracing::error!(error = %e, "server failed");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
