use std::{sync::Arc, time::Instant};

use axum::{
    Extension, Router,
    extract::Request,
    middleware::{self, Next},
    response::Response,
    routing::get,
};
use tokio::net::TcpListener;

use crate::{
    Res, api, info, management::TaskStore, spotify::SpotifySession, utils, warning,
};

/// Routes of the task API, wired to `store`.
pub fn task_router(store: Arc<TaskStore>) -> Router {
    Router::new()
        .route("/tasks", get(api::list_tasks).post(api::create_task))
        .route(
            "/tasks/{id}",
            get(api::get_task)
                .put(api::update_task)
                .patch(api::update_task)
                .delete(api::delete_task),
        )
        .route("/health", get(api::health))
        .layer(Extension(store))
        .layer(middleware::from_fn(log_requests))
}

/// Routes of the Spotify demo, wired to `session`.
pub fn spotify_router(session: Arc<SpotifySession>) -> Router {
    Router::new()
        .route("/", get(api::home))
        .route("/login", get(api::login))
        .route("/callback", get(api::callback))
        .layer(Extension(session))
        .layer(middleware::from_fn(log_requests))
}

/// Binds a listener to `addr`. A bare `:port` binds on all interfaces.
pub async fn bind(addr: &str) -> Res<TcpListener> {
    let addr = utils::parse_addr(addr)?;
    Ok(TcpListener::bind(addr).await?)
}

/// Serves `app` on `listener` until Ctrl-C is pressed.
pub async fn serve(listener: TcpListener, app: Router) -> Res<()> {
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

pub async fn start_task_server(addr: &str, store: Arc<TaskStore>) -> Res<()> {
    let listener = bind(addr).await?;
    info!(
        "Serving tasks from {} on http://{} (ids: {})",
        store.path().display(),
        listener.local_addr()?,
        store.id_assignment()
    );
    serve(listener, task_router(store)).await
}

async fn log_requests(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_string();
    let started = Instant::now();

    let response = next.run(request).await;

    info!(
        "{} {} -> {} ({} ms)",
        method,
        path,
        response.status().as_u16(),
        started.elapsed().as_millis()
    );
    response
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Shutting down"),
        Err(e) => {
            warning!("Cannot listen for Ctrl-C, serving until killed. Err: {}", e);
            std::future::pending::<()>().await;
        }
    }
}
