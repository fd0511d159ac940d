//! Shared test infrastructure for integration tests.

use std::io::{BufRead, BufReader, Write};
use std::net::{TcpListener, TcpStream};
use std::path::PathBuf;
use std::process::{Command, Output};
use std::thread::{self, JoinHandle};
use tempfile::TempDir;

/// Proxy variables that would reroute loopback requests.
const PROXY_VARS: &[&str] = &[
    "HTTP_PROXY",
    "http_proxy",
    "HTTPS_PROXY",
    "https_proxy",
    "ALL_PROXY",
    "all_proxy",
];

/// Serves exactly one canned HTTP response on 127.0.0.1.
pub struct OneShotServer {
    pub base_url: String,
    handle: JoinHandle<String>,
}

impl OneShotServer {
    pub fn start(status_line: &str, body: &str) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind loopback");
        let port = listener.local_addr().expect("local addr").port();
        let response = format!(
            "HTTP/1.1 {status_line}\r\nContent-Type: application/xml\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        );
        let handle = thread::spawn(move || {
            let (stream, _) = listener.accept().expect("accept connection");
            serve(stream, &response)
        });
        Self {
            base_url: format!("http://127.0.0.1:{port}/management/"),
            handle,
        }
    }

    /// The request line the server received, e.g. `GET /management/... HTTP/1.1`.
    pub fn request_line(self) -> String {
        self.handle.join().expect("server thread panicked")
    }
}

fn serve(stream: TcpStream, response: &str) -> String {
    let mut reader = BufReader::new(stream.try_clone().expect("clone stream"));
    let mut request_line = String::new();
    reader
        .read_line(&mut request_line)
        .expect("read request line");
    loop {
        let mut header = String::new();
        let read = reader.read_line(&mut header).expect("read header");
        if read == 0 || header == "\r\n" {
            break;
        }
    }
    let mut stream = stream;
    stream
        .write_all(response.as_bytes())
        .expect("write response");
    stream.flush().expect("flush response");
    request_line.trim_end().to_string()
}

/// A base URL nothing is listening on.
pub fn unreachable_base_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind loopback");
    let port = listener.local_addr().expect("local addr").port();
    drop(listener);
    format!("http://127.0.0.1:{port}/management/")
}

/// Runs the `mi` binary with an isolated config file.
pub struct MiCommand {
    _config_dir: TempDir,
    config_path: PathBuf,
}

impl MiCommand {
    pub fn with_base_url(base_url: &str) -> Self {
        let config_dir = tempfile::tempdir().expect("create temp config dir");
        let config_path = config_dir.path().join("config.json");
        let config = format!(r#"{{"base_url": "{base_url}", "timeout_secs": 5}}"#);
        std::fs::write(&config_path, config).expect("write config");
        Self {
            _config_dir: config_dir,
            config_path,
        }
    }

    pub fn run(&self, args: &[&str]) -> Output {
        let mut command = Command::new(env!("CARGO_BIN_EXE_mi"));
        command
            .arg("--config")
            .arg(&self.config_path)
            .args(args)
            .env_remove("MI_MANAGEMENT_URL")
            .env_remove("MI_ACCESS_TOKEN")
            .env_remove("MI_LOG");
        for var in PROXY_VARS {
            command.env_remove(var);
        }
        command.output().expect("run mi binary")
    }
}

pub fn stdout_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

pub fn stderr_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}
