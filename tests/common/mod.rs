use std::net::SocketAddr;
use std::sync::mpsc;
use std::thread;

use anyhow::{Context, Result};
use axum::Router;

/// In-process mock of the remote services. The router runs on its own thread
/// and runtime so the blocking clients can call it from the test thread.
pub struct MockService {
    pub base_url: String,
    shutdown: Option<tokio::sync::oneshot::Sender<()>>,
    handle: Option<thread::JoinHandle<()>>,
}

impl Drop for MockService {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown.take() {
            let _ = tx.send(());
        }
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

pub fn spawn(router: Router) -> Result<MockService> {
    let (addr_tx, addr_rx) = mpsc::channel::<SocketAddr>();
    let (shutdown_tx, shutdown_rx) = tokio::sync::oneshot::channel::<()>();

    let handle = thread::spawn(move || {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .expect("build test runtime");
        rt.block_on(async move {
            let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
                .await
                .expect("bind mock listener");
            let addr = listener.local_addr().expect("mock local addr");
            addr_tx.send(addr).ok();
            axum::serve(listener, router)
                .with_graceful_shutdown(async {
                    shutdown_rx.await.ok();
                })
                .await
                .expect("serve mock");
        });
    });

    let addr = addr_rx.recv().context("mock service address")?;
    Ok(MockService {
        base_url: format!("http://{}", addr),
        shutdown: Some(shutdown_tx),
        handle: Some(handle),
    })
}
