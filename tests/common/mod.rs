use std::{
    net::SocketAddr,
    path::Path,
    sync::{mpsc, Arc, Mutex},
    thread,
    time::Duration,
};
use warp::{http::Response, path::FullPath, Filter};

/// A canned-response HTTP server on an ephemeral port, running on its own
/// tokio runtime so tests can drive it with the blocking client.
pub struct StubServer {
    pub addr: SocketAddr,
    requests: Arc<Mutex<Vec<String>>>,
}

impl StubServer {
    pub fn base_url(&self) -> String {
        format!("http://{}/", self.addr)
    }

    /// Paths requested so far, in arrival order.
    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

pub fn serve(status: u16, content_type: &'static str, body: String) -> StubServer {
    serve_delayed(status, content_type, body, Duration::ZERO)
}

pub fn serve_delayed(
    status: u16,
    content_type: &'static str,
    body: String,
    delay: Duration,
) -> StubServer {
    let requests = Arc::new(Mutex::new(Vec::new()));
    let seen = Arc::clone(&requests);
    let (tx, rx) = mpsc::channel();

    thread::spawn(move || {
        let rt = tokio::runtime::Runtime::new().expect("tokio runtime");
        rt.block_on(async move {
            let route = warp::path::full().and_then(move |path: FullPath| {
                let seen = Arc::clone(&seen);
                let body = body.clone();
                async move {
                    seen.lock().unwrap().push(path.as_str().to_string());
                    tokio::time::sleep(delay).await;
                    Ok::<_, warp::Rejection>(
                        Response::builder()
                            .status(status)
                            .header("content-type", content_type)
                            .body(body)
                            .unwrap(),
                    )
                }
            });
            let (addr, server) = warp::serve(route).bind_ephemeral(([127, 0, 0, 1], 0));
            tx.send(addr).expect("report server address");
            server.await;
        });
    });

    let addr = rx.recv().expect("server address");
    StubServer { addr, requests }
}

pub fn fixture(name: &str) -> String {
    let path = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name);
    std::fs::read_to_string(&path).unwrap_or_else(|e| panic!("reading {}: {}", path.display(), e))
}

pub fn init_test_logging() {
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info,schedscraper=debug")),
        )
        .with_test_writer()
        .finish();
    let _ = tracing::subscriber::set_global_default(subscriber);
}
