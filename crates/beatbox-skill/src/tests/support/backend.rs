//! Single-shot HTTP server standing in for the playlist backend.

use std::io::{BufRead, BufReader, Write};
use std::net::{SocketAddr, TcpListener};
use std::thread::{self, JoinHandle};

use url::Url;

use crate::catalog::HttpCatalog;

/// Answers exactly one request with a canned response, then exits.
pub struct StubBackend {
    address: SocketAddr,
    handle: JoinHandle<()>,
}

impl StubBackend {
    /// Starts a server replying with `status_line` and a JSON `body`.
    pub fn respond_with(status_line: &str, body: &str) -> Self {
        let listener = TcpListener::bind(("127.0.0.1", 0)).expect("bind");
        let address = listener.local_addr().expect("addr");
        let response = format!(
            "HTTP/1.1 {status_line}\r\nContent-Type: application/json\r\n\
             Content-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        );
        let handle = thread::spawn(move || {
            let (mut stream, _) = listener.accept().expect("accept");
            let mut reader = BufReader::new(stream.try_clone().expect("clone stream"));
            let mut line = String::new();
            while reader.read_line(&mut line).expect("read request") > 0 {
                if line == "\r\n" {
                    break;
                }
                line.clear();
            }
            stream.write_all(response.as_bytes()).expect("write response");
            stream.flush().expect("flush");
        });
        Self { address, handle }
    }

    /// Catalog endpoint served by the stub.
    pub fn url(&self) -> String {
        format!("http://{}/playlists/all", self.address)
    }

    /// HTTP catalog client pointed at the stub.
    pub fn catalog(&self) -> HttpCatalog {
        HttpCatalog::new(Url::parse(&self.url()).expect("stub url"))
    }

    /// Waits for the stub to finish serving.
    pub fn join(self) {
        self.handle.join().expect("stub join");
    }
}

/// URL of a port nothing listens on.
pub fn unreachable_url() -> String {
    let listener = TcpListener::bind(("127.0.0.1", 0)).expect("bind");
    let address = listener.local_addr().expect("addr");
    drop(listener);
    format!("http://{address}/playlists/all")
}
