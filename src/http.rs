use std::thread;

use tracing::{debug, warn};

use crate::config::HttpSettings;

fn should_retry_http_status(status: u16) -> bool {
    status == 408 || status == 429 || (500..=599).contains(&status)
}

// Only failures before the request reached the server are retried; a read
// timeout means the backend is already working on it.
fn should_retry_transport(kind: ureq::ErrorKind) -> bool {
    matches!(kind, ureq::ErrorKind::Dns | ureq::ErrorKind::ConnectionFailed)
}

pub(crate) fn post_json_with_retries(
    url: &str,
    body: &str,
    settings: &HttpSettings,
) -> Result<String, String> {
    let attempts = settings.attempts.max(1);
    let agent = ureq::AgentBuilder::new()
        .timeout_connect(settings.connect_timeout)
        .timeout_read(settings.read_timeout)
        .timeout_write(settings.read_timeout)
        .build();

    for attempt in 1..=attempts {
        debug!(url, attempt, "sending search request");
        let request = agent
            .post(url)
            .set("Content-Type", "application/json")
            .set("Accept", "application/json");

        match request.send_string(body) {
            Ok(response) => match response.into_string() {
                Ok(body) => return Ok(body),
                Err(err) => {
                    return Err(format!("request failed: response decode failed: {err}"));
                }
            },
            Err(ureq::Error::Status(status, response)) => {
                let response_body = response.into_string().ok().unwrap_or_default();
                let body_text = response_body.trim();
                let status_error = if body_text.is_empty() {
                    format!("HTTP status {status}")
                } else {
                    let truncated = body_text.chars().take(240).collect::<String>();
                    format!("HTTP status {status} ({truncated})")
                };

                if should_retry_http_status(status) && attempt < attempts {
                    warn!(attempt, "{status_error}, retrying");
                    thread::sleep(settings.retry_delay);
                    continue;
                }

                if should_retry_http_status(status) {
                    return Err(format!(
                        "request failed after {attempts} attempt(s): {status_error}"
                    ));
                }

                return Err(format!("request failed: {status_error}"));
            }
            Err(ureq::Error::Transport(err)) => {
                let transport_error = format!("transport error: {err}");
                if !should_retry_transport(err.kind()) {
                    return Err(format!("request failed: {transport_error}"));
                }
                if attempt < attempts {
                    warn!(attempt, "{transport_error}, retrying");
                    thread::sleep(settings.retry_delay);
                    continue;
                }
                return Err(format!(
                    "request failed after {attempts} attempt(s): {transport_error}"
                ));
            }
        }
    }

    Err("request failed: exhausted attempts without a concrete error".to_string())
}

#[cfg(test)]
pub(crate) mod test_server {
    use std::collections::VecDeque;
    use std::io::{Read, Write};
    use std::net::{TcpListener, TcpStream};
    use std::sync::mpsc;
    use std::sync::{Arc, Mutex};
    use std::time::Duration;

    #[derive(Debug, Clone)]
    pub(crate) enum Behavior {
        Respond(u16, String),
        DelayRespond(Duration, u16, String),
    }

    #[derive(Debug)]
    pub(crate) struct TestServer {
        pub(crate) base_url: String,
        bodies: Arc<Mutex<Vec<String>>>,
        shutdown_tx: mpsc::Sender<()>,
        join_handle: Option<std::thread::JoinHandle<()>>,
    }

    impl TestServer {
        pub(crate) fn spawn(behaviors: Vec<Behavior>) -> Self {
            let listener = TcpListener::bind(("127.0.0.1", 0)).expect("bind test server");
            listener.set_nonblocking(true).expect("set nonblocking");
            let addr = listener.local_addr().expect("local addr");

            let bodies = Arc::new(Mutex::new(Vec::new()));
            let bodies_clone = Arc::clone(&bodies);
            let shared_behaviors = Arc::new(Mutex::new(VecDeque::from(behaviors)));
            let (shutdown_tx, shutdown_rx) = mpsc::channel::<()>();

            let join_handle = std::thread::spawn(move || {
                loop {
                    if shutdown_rx.try_recv().is_ok() {
                        break;
                    }

                    match listener.accept() {
                        Ok((mut stream, _)) => {
                            let behavior = {
                                let mut queue = shared_behaviors.lock().expect("lock behaviors");
                                queue
                                    .pop_front()
                                    .unwrap_or_else(|| Behavior::Respond(200, "[]".to_string()))
                            };
                            let bodies = Arc::clone(&bodies_clone);
                            std::thread::spawn(move || {
                                stream.set_nonblocking(false).expect("blocking stream");
                                if let Ok(body) = read_request_body(&mut stream) {
                                    bodies.lock().expect("lock bodies").push(body);
                                }
                                serve_behavior(&mut stream, behavior);
                            });
                        }
                        Err(err) if err.kind() == std::io::ErrorKind::WouldBlock => {
                            std::thread::sleep(Duration::from_millis(5));
                        }
                        Err(_) => break,
                    }
                }
            });

            Self {
                base_url: format!("http://{addr}"),
                bodies,
                shutdown_tx,
                join_handle: Some(join_handle),
            }
        }

        pub(crate) fn request_count(&self) -> usize {
            self.bodies.lock().expect("lock bodies").len()
        }

        pub(crate) fn request_bodies(&self) -> Vec<String> {
            self.bodies.lock().expect("lock bodies").clone()
        }
    }

    impl Drop for TestServer {
        fn drop(&mut self) {
            let _ = self.shutdown_tx.send(());
            if let Some(handle) = self.join_handle.take() {
                let _ = handle.join();
            }
        }
    }

    fn read_request_body(stream: &mut TcpStream) -> std::io::Result<String> {
        stream.set_read_timeout(Some(Duration::from_millis(500)))?;
        let mut buf = [0_u8; 1024];
        let mut data = Vec::new();
        let header_end = loop {
            let read = stream.read(&mut buf)?;
            if read == 0 {
                return Ok(String::new());
            }
            data.extend_from_slice(&buf[..read]);
            if let Some(pos) = data.windows(4).position(|window| window == b"\r\n\r\n") {
                break pos + 4;
            }
        };

        let headers = String::from_utf8_lossy(&data[..header_end]).to_ascii_lowercase();
        let content_length = headers
            .lines()
            .find_map(|line| line.strip_prefix("content-length:"))
            .and_then(|value| value.trim().parse::<usize>().ok())
            .unwrap_or(0);

        while data.len() < header_end + content_length {
            let read = stream.read(&mut buf)?;
            if read == 0 {
                break;
            }
            data.extend_from_slice(&buf[..read]);
        }
        let end = data.len().min(header_end + content_length);
        Ok(String::from_utf8_lossy(&data[header_end..end]).into_owned())
    }

    fn reason_phrase(status: u16) -> &'static str {
        match status {
            200 => "OK",
            400 => "Bad Request",
            404 => "Not Found",
            408 => "Request Timeout",
            429 => "Too Many Requests",
            500 => "Internal Server Error",
            503 => "Service Unavailable",
            _ => "Status",
        }
    }

    fn serve_behavior(stream: &mut TcpStream, behavior: Behavior) {
        match behavior {
            Behavior::Respond(status, body) => {
                let _ = write_response(stream, status, &body);
            }
            Behavior::DelayRespond(delay, status, body) => {
                std::thread::sleep(delay);
                let _ = write_response(stream, status, &body);
            }
        }
    }

    fn write_response(stream: &mut TcpStream, status: u16, body: &str) -> std::io::Result<()> {
        let reason = reason_phrase(status);
        let payload = body.as_bytes();
        write!(
            stream,
            "HTTP/1.1 {status} {reason}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
            payload.len()
        )?;
        stream.write_all(payload)?;
        stream.flush()
    }
}
