use tokio::task::LocalSet;

mod config;
mod handler;
mod http;
mod logger;
mod server;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cfg = config::Config::load()?;

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;

    runtime.block_on(async_main(cfg))
}

async fn async_main(cfg: config::Config) -> Result<(), Box<dyn std::error::Error>> {
    let addr = cfg.socket_addr();

    // A failed bind is the only fatal error; everything after this point is
    // handled per request.
    let listener = server::create_listener(addr)?;

    logger::log_server_start(&addr);

    // Connection tasks use spawn_local, so the accept loop runs on a LocalSet
    let local = LocalSet::new();
    local.run_until(server::run(listener)).await
}
