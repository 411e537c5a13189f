use greeter_core::ListenerConfig;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(greeter_server::logging::env_filter()?)
        .init();

    greeter_server::listener::run(&ListenerConfig::default()).await?;
    Ok(())
}
