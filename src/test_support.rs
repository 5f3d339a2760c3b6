use std::{
    net::TcpListener,
    sync::{
        Arc,
        atomic::{AtomicUsize, Ordering},
    },
};

use iron::{Iron, IronResult, Listening, Request, Response, status};
use rand::{rng, seq::SliceRandom};

fn get_available_port() -> Option<u16> {
    let mut ports: Vec<u16> = (8000..9000).collect();
    ports.shuffle(&mut rng());
    ports.iter().find(|&&port| port_is_available(port)).copied()
}

fn port_is_available(port: u16) -> bool {
    TcpListener::bind(("127.0.0.1", port)).is_ok()
}

/// A local HTTP server answering every request with `code` and `content`.
pub struct MockServer {
    listening: Listening,
    port: u16,
    hits: Arc<AtomicUsize>,
}

impl MockServer {
    pub fn start(code: status::Status, content: &'static [u8]) -> Self {
        let port = get_available_port().expect("No available port found");
        let hits = Arc::new(AtomicUsize::new(0));
        let counter = hits.clone();

        let handler = move |_req: &mut Request| -> IronResult<Response> {
            counter.fetch_add(1, Ordering::SeqCst);
            Ok(Response::with((code, content)))
        };

        match Iron::new(handler).http(("127.0.0.1", port)) {
            Ok(listening) => MockServer {
                listening,
                port,
                hits,
            },
            Err(e) => panic!("Failed to start server: {}", e),
        }
    }

    pub fn ok(content: &'static [u8]) -> Self {
        Self::start(status::Ok, content)
    }

    pub fn url(&self, path: &str) -> String {
        format!("http://127.0.0.1:{}/{}", self.port, path.trim_start_matches('/'))
    }

    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }
}

impl Drop for MockServer {
    fn drop(&mut self) {
        let _ = self.listening.close();
    }
}
