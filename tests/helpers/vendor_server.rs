use std::sync::{Arc, Mutex};

use axum::Router;
use axum::http::{HeaderMap, StatusCode, Uri};
use axum::response::IntoResponse;
use tokio::net::TcpListener;
use tokio::sync::oneshot;

/// A request as seen by the fake vendor.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub uri: String,
    pub headers: HeaderMap,
}

/// Local HTTP server that plays back canned replies in order, repeating the
/// last one once the script runs out.
pub struct VendorServer {
    pub base_url: String,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
    shutdown_tx: Option<oneshot::Sender<()>>,
}

impl VendorServer {
    pub async fn start(replies: Vec<(u16, &'static str)>) -> Self {
        let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();
        let requests = Arc::new(Mutex::new(Vec::new()));
        let recorded = requests.clone();

        let app = Router::new().fallback(move |uri: Uri, headers: HeaderMap| {
            let recorded = recorded.clone();
            let replies = replies.clone();
            async move {
                let index = {
                    let mut log = recorded.lock().unwrap();
                    log.push(RecordedRequest {
                        uri: uri.to_string(),
                        headers,
                    });
                    log.len() - 1
                };
                let (status, body) = replies[index.min(replies.len() - 1)];
                (StatusCode::from_u16(status).unwrap(), body).into_response()
            }
        });

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            axum::serve(listener, app)
                .with_graceful_shutdown(async {
                    shutdown_rx.await.ok();
                })
                .await
                .ok();
        });

        Self {
            base_url: format!("http://{}", addr),
            requests,
            shutdown_tx: Some(shutdown_tx),
        }
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }
}

impl Drop for VendorServer {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            tx.send(()).ok();
        }
    }
}
