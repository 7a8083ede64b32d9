use crate::listings::{MicroburbsClient, PropertySource};
use crate::router::handle;
use crate::state::AppState;
use astra::Server;
use std::net::SocketAddr;
use std::sync::Arc;

mod errors;
mod listings;
mod responses;
mod router;
mod search;
mod state;
mod templates;

#[cfg(test)]
mod tests;

fn main() {
    // 1️⃣ Build the upstream client (API key comes from MICROBURBS_API_KEY)
    let source: Arc<dyn PropertySource> = match MicroburbsClient::from_env() {
        Ok(client) => Arc::new(client),
        Err(e) => {
            eprintln!("❌ Upstream client initialization failed: {e}");
            std::process::exit(1);
        }
    };

    // 2️⃣ Shared state handed to every handler
    let app = Arc::new(AppState::new(source));

    // 3️⃣ Start the server
    let addr: SocketAddr = "127.0.0.1:3000".parse().unwrap();
    println!("Starting server at http://{addr}");

    let server = Server::bind(&addr).max_workers(8);

    let result = server.serve(move |req, _info| match handle(req, &app) {
        Ok(resp) => resp,
        Err(err) => responses::html_error_response(err),
    });

    if let Err(e) = result {
        eprintln!("Server ended with error: {e}");
    }

    println!("Server shut down cleanly.");
}
