//! Serve command - runs the notehub web server.

use std::sync::Arc;

use tokio::signal::unix::{SignalKind, signal};
use tracing_subscriber::EnvFilter;

use notehub::api::{self, AppState};
use notehub::store::{NoteStore, UserStore};

use crate::cli::ServeArgs;
use crate::storage::{create_store, store_path};

/// Run the notehub server
pub async fn run(args: &ServeArgs) -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("notehub=info".parse()?))
        .init();

    // Create the store, loading persisted state if configured
    let store = create_store(args)?;
    let user_store: Arc<dyn UserStore> = store.clone();
    let note_store: Arc<dyn NoteStore> = store.clone();

    // Build router over the controllers
    let state = AppState::new(user_store, note_store);
    let app = api::router(state, api::cors_layer(&args.allowed_origins));

    // Bind server
    let addr = format!("{}:{}", args.host, args.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    let local_addr = listener.local_addr()?;

    // Print startup message
    println!(
        "notehub server listening on http://localhost:{}",
        local_addr.port()
    );
    println!();
    println!("Available endpoints:");
    println!("  GET    /users  - List users");
    println!("  POST   /users  - Create a user");
    println!("  PATCH  /users  - Update a user");
    println!("  DELETE /users  - Delete a user");
    println!("  GET    /notes  - List notes");
    println!("  POST   /notes  - Create a note");
    println!("  PATCH  /notes  - Update a note");
    println!("  DELETE /notes  - Delete a note");
    println!("  GET    /health - Health probe");
    println!();
    println!("Press Ctrl+C to shutdown");

    let persist_path = store_path(args);
    let store_for_shutdown = store.clone();

    // Start server with graceful shutdown
    axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            let mut sigterm =
                signal(SignalKind::terminate()).expect("failed to set up SIGTERM handler");
            let mut sigint =
                signal(SignalKind::interrupt()).expect("failed to set up SIGINT handler");

            tokio::select! {
                _ = sigterm.recv() => tracing::info!("Received SIGTERM, shutting down..."),
                _ = sigint.recv() => tracing::info!("Received SIGINT, shutting down..."),
            }

            // Save the store on shutdown when persistence is configured
            if let Some(path) = persist_path {
                match store_for_shutdown.save_to_file(&path) {
                    Ok(()) => tracing::info!("Store saved to {}", path.display()),
                    Err(e) => tracing::error!("Failed to save store: {e}"),
                }
            }
        })
        .await?;

    println!("Server shut down");
    Ok(())
}
