#[cfg(test)]
pub mod test_helpers {
    use std::io::{BufRead, BufReader, Write};
    use std::net::TcpListener;
    use std::sync::Arc;
    use std::sync::mpsc::{self, Receiver, Sender};
    use std::thread::JoinHandle;

    use ratatui::crossterm::event::{
        KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
    };
    use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender, unbounded_channel};

    use crate::app::App;
    use crate::config::Config;
    use crate::lookup::{LookupRequest, LookupResponse};
    use crate::suggestion::{Suggestion, SuggestionRef};

    /// App wired to channels the test drives in place of the lookup worker
    pub struct TestHarness {
        pub app: App,
        pub requests: UnboundedReceiver<LookupRequest>,
        pub responses: Sender<LookupResponse>,
    }

    impl TestHarness {
        /// Drain every request the app has sent so far
        pub fn sent_terms(&mut self) -> Vec<String> {
            let mut terms = Vec::new();
            while let Ok(request) = self.requests.try_recv() {
                terms.push(request.term);
            }
            terms
        }

        /// Deliver a successful response and let the app apply it
        pub fn respond(&mut self, term: &str, suggestions: Vec<Suggestion>) {
            self.responses
                .send(LookupResponse::Suggestions {
                    term: term.to_string(),
                    suggestions,
                })
                .unwrap();
            self.app.tick();
        }
    }

    pub fn lookup_channels() -> (
        UnboundedSender<LookupRequest>,
        UnboundedReceiver<LookupRequest>,
        Sender<LookupResponse>,
        Receiver<LookupResponse>,
    ) {
        let (request_tx, request_rx) = unbounded_channel();
        let (response_tx, response_rx) = mpsc::channel();
        (request_tx, request_rx, response_tx, response_rx)
    }

    pub fn test_app() -> App {
        App::new(&Config::default())
    }

    pub fn test_harness() -> TestHarness {
        let (request_tx, requests, responses, response_rx) = lookup_channels();
        let app = App::with_lookup(&Config::default(), request_tx, response_rx);
        TestHarness {
            app,
            requests,
            responses,
        }
    }

    pub fn suggestion(id: i64, name: &str) -> Suggestion {
        Suggestion::new(id, name)
    }

    pub fn handle(id: i64, name: &str) -> SuggestionRef {
        Arc::new(Suggestion::new(id, name))
    }

    pub fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::empty())
    }

    pub fn key_with_mods(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    pub fn left_click(column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    /// Type text one character at a time, as a user would
    pub fn type_text(app: &mut App, text: &str) {
        for ch in text.chars() {
            app.handle_key_event(key(KeyCode::Char(ch)));
        }
    }

    /// Serve canned HTTP responses, one per connection, on a local port
    ///
    /// Returns the base URL to point a client at and a handle yielding the
    /// request lines that were received.
    pub fn serve_responses(responses: Vec<(u16, String)>) -> (String, JoinHandle<Vec<String>>) {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();

        let handle = std::thread::spawn(move || {
            let mut request_lines = Vec::new();
            for (status, body) in responses {
                let (mut stream, _) = listener.accept().unwrap();
                let mut reader = BufReader::new(stream.try_clone().unwrap());

                let mut request_line = String::new();
                reader.read_line(&mut request_line).unwrap();
                loop {
                    let mut header = String::new();
                    let read = reader.read_line(&mut header).unwrap();
                    if read == 0 || header == "\r\n" {
                        break;
                    }
                }
                request_lines.push(request_line.trim_end().to_string());

                let reason = if status == 200 { "OK" } else { "Error" };
                write!(
                    stream,
                    "HTTP/1.1 {} {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                    status,
                    reason,
                    body.len(),
                    body
                )
                .unwrap();
                stream.flush().unwrap();
            }
            request_lines
        });

        (format!("http://{}/api/entity", addr), handle)
    }
}
