//! Entry point for the Salary Engine binary.
//!
//! Running this binary will start an HTTP server that exposes a
//! minimal API for calculating net salaries.  The bind address may be
//! specified via the `SALARY_BIND_ADDR` environment variable; if unset
//! the server listens on `127.0.0.1:3000`.

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt().init();

    let addr = std::env::var("SALARY_BIND_ADDR").unwrap_or_else(|_| "127.0.0.1:3000".to_string());
    if let Err(err) = salary_engine::api::serve(&addr).await {
        tracing::error!("error running server: {err}");
        std::process::exit(1);
    }
}
