use std::{
    io::{BufRead, BufReader, Read, Write},
    net::TcpListener,
    thread::JoinHandle,
};

/// serves a single canned HTTP response on a local port. returns the
/// endpoint URL and a handle yielding the request body that was received.
pub fn serve_once(status_line: &str, body: &str) -> (String, JoinHandle<String>) {
    let listener =
        TcpListener::bind("127.0.0.1:0").expect("test invariant failed: cannot bind local port");
    let addr = listener
        .local_addr()
        .expect("test invariant failed: listener has no address");
    let response = format!(
        "HTTP/1.1 {status_line}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
        body.len()
    );
    let handle = std::thread::spawn(move || {
        let (stream, _) = listener
            .accept()
            .expect("test invariant failed: no connection received");
        let mut reader = BufReader::new(
            stream
                .try_clone()
                .expect("test invariant failed: cannot clone stream"),
        );
        let mut content_length = 0;
        loop {
            let mut line = String::new();
            reader
                .read_line(&mut line)
                .expect("test invariant failed: cannot read request");
            let trimmed = line.trim_end();
            if trimmed.is_empty() {
                break;
            }
            if let Some((name, value)) = trimmed.split_once(':') {
                if name.eq_ignore_ascii_case("content-length") {
                    content_length = value.trim().parse().unwrap_or(0);
                }
            }
        }
        let mut request_body = vec![0; content_length];
        reader
            .read_exact(&mut request_body)
            .expect("test invariant failed: cannot read request body");
        let mut stream = stream;
        stream
            .write_all(response.as_bytes())
            .expect("test invariant failed: cannot write response");
        String::from_utf8_lossy(&request_body).into_owned()
    });
    (format!("http://{addr}/v2/directions/driving-car"), handle)
}
