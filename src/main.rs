//! Explorer Tokens: signed token issuance for the Explorer platform.
//! Used by: binary entrypoint.

pub mod config;
pub mod console;
pub mod error;
pub mod handlers;
pub mod server;
pub mod state;
pub mod telemetry;
pub mod token;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let signing = config::SigningConfig::from_env()?;
    let state = state::build_state(signing);
    let addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".into());

    console::print_banner();
    console::print_startup(&addr);
    let identity = state.issuer.config();
    tracing::info!(
        issuer = %identity.issuer,
        audience = %identity.audience,
        "starting explorer-tokens on {}",
        addr
    );

    server::run(state, &addr).await?;
    Ok(())
}
