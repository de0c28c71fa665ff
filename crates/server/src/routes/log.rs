//! Client log and health routes.

use axum::Json;
use tracing::info;
use web_types::{HealthResponse, LogRequest, LogResponse};

/// POST /api/log - Write a message from the browser to the server log.
pub async fn client_log(Json(req): Json<LogRequest>) -> Json<LogResponse> {
    info!(client_message = %req.message, "client log");
    Json(LogResponse { logged: true })
}

/// GET /api/health - Liveness probe.
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;
    use std::sync::{Arc, Mutex};
    use tracing_subscriber::fmt::MakeWriter;

    /// Collects formatted log output in memory.
    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<u8>>>);

    impl Captured {
        fn contents(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    impl io::Write for Captured {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl<'a> MakeWriter<'a> for Captured {
        type Writer = Captured;

        fn make_writer(&'a self) -> Self::Writer {
            self.clone()
        }
    }

    #[tokio::test]
    async fn test_client_log() {
        let Json(response) = client_log(Json(LogRequest {
            message: "sign-up failed: network error".to_string(),
        }))
        .await;

        assert!(response.logged);
    }

    #[tokio::test]
    async fn test_client_log_writes_message_field() {
        let captured = Captured::default();
        let subscriber = tracing_subscriber::fmt()
            .json()
            .with_writer(captured.clone())
            .finish();
        let _guard = tracing::subscriber::set_default(subscriber);

        client_log(Json(LogRequest {
            message: "sign-up failed: network error".to_string(),
        }))
        .await;

        let output = captured.contents();
        assert!(output.contains(r#""client_message":"sign-up failed: network error""#));
        assert_eq!(output.matches(r#""message":"#).count(), 1);
        assert!(output.contains(r#""message":"client log""#));
    }

    #[tokio::test]
    async fn test_health() {
        let Json(response) = health().await;
        assert_eq!(response.status, "ok");
    }
}
