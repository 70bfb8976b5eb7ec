//! Middle tier. Forwards query, roundtrip and sleep calls to the data tier
//! and owns the induced-failure endpoint.

mod application;
mod handlers;
mod state;

#[cfg(test)]
mod tests;

use std::io;

#[actix_web::main]
async fn main() -> io::Result<()> {
    if let Err(err) = application::run().await {
        eprintln!("[backend] bootstrap failed: {err}");
        return Err(io::Error::other(err.to_string()));
    }

    Ok(())
}
