//! HTTP endpoint command

use std::path::Path;

use codesift::config::Config;

use crate::server;

/// Start the HTTP endpoint
pub fn serve(config_path: Option<&Path>, bind: Option<String>, port: Option<u16>) -> anyhow::Result<()> {
    let mut config = Config::load(config_path)?;
    if let Some(bind) = bind {
        config.server.bind = bind;
    }
    if let Some(port) = port {
        config.server.port = port;
    }

    println!("Starting codesift HTTP endpoint...");
    println!("Listening on http://{}", config.server.addr());
    println!();
    println!("Press Ctrl+C to stop");

    server::tiny_http::run(&config.server.addr())
}
