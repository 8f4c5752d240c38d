//! Web front end: a single form page served by axum.
//!
//! `GET /` shows the form, `POST /` scores the submitted password and shows
//! the result. The submitted password is never written back into the page,
//! only its mask.

mod page;

pub use page::{PageResult, escape_html, render};

use std::net::SocketAddr;

use axum::extract::rejection::FormRejection;
use axum::{Form, Router, response::Html, routing::get};
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use tower_http::trace::TraceLayer;

use crate::error::AppError;
use crate::evaluator::evaluate_password_strength;
use crate::mask::mask_password;

/// Form body posted by the page. A missing field reads as empty.
#[derive(Deserialize)]
pub struct PasswordForm {
    #[serde(default)]
    password: String,
}

/// Builds the application router.
pub fn router() -> Router {
    Router::new()
        .route("/", get(index).post(submit))
        .layer(TraceLayer::new_for_http())
}

async fn index() -> Html<String> {
    Html(render(None))
}

/// Any body that is not a urlencoded form reads as an empty submission.
async fn submit(form: Result<Form<PasswordForm>, FormRejection>) -> Html<String> {
    let form = match form {
        Ok(Form(form)) => form,
        Err(rejection) => {
            tracing::debug!("unreadable form submission: {}", rejection);
            return Html(render(None));
        }
    };
    let password = SecretString::new(form.password.trim().into());
    drop(form);

    if password.expose_secret().is_empty() {
        tracing::debug!("empty password submitted");
        return Html(render(None));
    }

    let evaluation = evaluate_password_strength(&password);
    tracing::info!(
        score = evaluation.score.value(),
        label = evaluation.strength().label(),
        "password evaluated"
    );

    let result = PageResult {
        masked: mask_password(password.expose_secret()),
        evaluation,
    };
    Html(render(Some(&result)))
}

/// Serves the router on `addr` until Ctrl-C is received.
///
/// # Errors
///
/// Returns [`AppError::Io`] if the address cannot be bound or the server fails.
pub async fn serve(addr: SocketAddr) -> Result<(), AppError> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{}", listener.local_addr()?);

    axum::serve(listener, router())
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        return;
    }
    tracing::info!("Shutdown signal received");
}
