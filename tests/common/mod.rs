//! Shared utilities for integration tests.

#![allow(dead_code)]

use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use restd::config::ServerConfig;
use restd::lifecycle::Shutdown;
use restd::routing::MatchArgs;
use restd::{Handler, HttpServer, Response, RouteRequest, Router};
use tokio::net::TcpListener;

/// One recorded handler invocation.
#[derive(Debug, Clone, PartialEq)]
pub struct Call {
    pub handler: &'static str,
    pub method: String,
    pub path: String,
    pub args: Option<MatchArgs>,
    pub body: Vec<u8>,
}

pub type CallLog = Arc<Mutex<Vec<Call>>>;

/// Handler that appends every invocation to a shared log.
pub struct Recorder {
    name: &'static str,
    log: CallLog,
}

impl Handler for Recorder {
    fn handle(&self, request: &RouteRequest<'_>, response: &mut Response) {
        self.log.lock().unwrap().push(Call {
            handler: self.name,
            method: request.method.to_string(),
            path: request.path.to_string(),
            args: request.args.cloned(),
            body: request.body.to_vec(),
        });
        response.write(self.name.as_bytes());
    }
}

pub fn recorder(name: &'static str, log: &CallLog) -> Arc<dyn Handler> {
    Arc::new(Recorder {
        name,
        log: log.clone(),
    })
}

pub fn names(log: &CallLog) -> Vec<&'static str> {
    log.lock().unwrap().iter().map(|c| c.handler).collect()
}

pub fn args<const N: usize>(pairs: [(&str, &str); N]) -> MatchArgs {
    pairs.into_iter().collect()
}

/// Serve `router` on an ephemeral port. Returns the address and the
/// coordinator that stops it.
pub async fn start_server(config: ServerConfig, router: Router) -> (SocketAddr, Shutdown) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let shutdown = Shutdown::new();
    let server = HttpServer::new(config, Arc::new(router));
    let server_shutdown = shutdown.subscribe();
    tokio::spawn(async move {
        let _ = server.run(listener, server_shutdown).await;
    });

    tokio::time::sleep(Duration::from_millis(50)).await;
    (addr, shutdown)
}

pub fn client() -> reqwest::Client {
    reqwest::Client::builder()
        .pool_max_idle_per_host(0)
        .no_proxy()
        .build()
        .unwrap()
}
