//! Local preview server.

mod lifecycle;
mod path;
mod response;

use crate::{
    config::{SiteConfig, cfg},
    core, log,
};
use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tiny_http::{Request, Server};

/// Bound server ready to accept requests
pub struct BoundServer {
    server: Arc<Server>,
    addr: SocketAddr,
}

/// Bind the HTTP server without starting the request loop
pub fn bind_server(config: &SiteConfig) -> Result<BoundServer> {
    let (server, addr) = lifecycle::bind_with_retry(config.serve.interface, config.serve.port)?;
    let server = Arc::new(server);

    // Registered so Ctrl+C can unblock the request loop
    core::register_server(Arc::clone(&server));

    log!("serve"; "http://{}", addr);

    Ok(BoundServer { server, addr })
}

impl BoundServer {
    /// Get the bound address.
    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    /// Start the request loop (blocking, returns after shutdown unblocks it).
    pub fn run(self) -> Result<()> {
        run_request_loop(&self.server);
        Ok(())
    }
}

fn run_request_loop(server: &Server) {
    let config = cfg();
    // Thread pool keeps a slow media transfer from blocking other requests
    let pool = match rayon::ThreadPoolBuilder::new().num_threads(4).build() {
        Ok(pool) => pool,
        Err(e) => {
            log!("serve"; "failed to create thread pool: {e}");
            return;
        }
    };

    for request in server.incoming_requests() {
        let config = Arc::clone(&config);
        pool.spawn(move || {
            if let Err(e) = handle_request(request, &config) {
                log!("serve"; "request error: {e}");
            }
        });
    }
}

/// Handle a single HTTP request
fn handle_request(request: Request, config: &SiteConfig) -> Result<()> {
    // Early exit if shutdown requested
    if core::is_shutdown() {
        return response::respond_unavailable(request);
    }

    crate::debug!("serve"; "{} {}", request.method(), request.url());

    // Serve from the built output
    if let Some(path) = path::resolve_path(request.url(), &config.build.output) {
        return response::respond_file(request, &path);
    }

    response::respond_not_found(request, config)
}
