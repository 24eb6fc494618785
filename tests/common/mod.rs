#![allow(dead_code)]

use axum::Router;
use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::post;
use std::collections::HashSet;
use std::fs::File;
use std::io::Write;
use std::path::Path;
use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use zip::write::FileOptions;
use zip::{CompressionMethod, ZipWriter};

/// Writes a zip archive at `path` with the given `(name, contents)` entries, in order.
pub fn write_archive(path: &Path, entries: &[(&str, &str)]) -> zip::result::ZipResult<()> {
    let file = File::create(path)?;
    let mut zip = ZipWriter::new(file);
    let options = FileOptions::default().compression_method(CompressionMethod::Deflated);

    for (name, contents) in entries {
        zip.start_file(*name, options)?;
        zip.write_all(contents.as_bytes())?;
    }

    zip.finish()?;
    Ok(())
}

#[derive(Clone, Default)]
struct CaptureState {
    received: Arc<Mutex<Vec<String>>>,
    rejected: Arc<HashSet<usize>>,
}

async fn new_account(State(state): State<CaptureState>, body: String) -> (StatusCode, String) {
    let mut received = state.received.lock().unwrap();
    let index = received.len();
    received.push(body);

    if state.rejected.contains(&index) {
        (StatusCode::BAD_REQUEST, format!("rejected record {index}"))
    } else {
        (StatusCode::CREATED, String::new())
    }
}

/// A local HTTP server that records every body posted to `/accounts/new`.
///
/// Requests whose zero-based position is listed in `rejected` get a 400 with
/// the body `rejected record <index>`.
pub struct CaptureServer {
    pub base_url: String,
    received: Arc<Mutex<Vec<String>>>,
}

impl CaptureServer {
    pub fn start(rejected: &[usize]) -> Self {
        let state = CaptureState {
            received: Arc::default(),
            rejected: Arc::new(rejected.iter().copied().collect()),
        };
        let received = state.received.clone();
        let (addr_tx, addr_rx) = mpsc::channel();

        std::thread::spawn(move || {
            let runtime = tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()
                .unwrap();
            runtime.block_on(async move {
                let app = Router::new()
                    .route("/accounts/new", post(new_account))
                    .with_state(state);
                let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
                addr_tx.send(listener.local_addr().unwrap()).unwrap();
                axum::serve(listener, app).await.unwrap();
            });
        });

        let addr = addr_rx.recv().unwrap();
        Self {
            base_url: format!("http://{addr}"),
            received,
        }
    }

    /// Bodies received so far, in arrival order.
    pub fn received(&self) -> Vec<String> {
        self.received.lock().unwrap().clone()
    }
}
