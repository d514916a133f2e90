use std::io;
use std::sync::{Arc, Mutex};

use proptest::prelude::*;

pub fn arb_domain() -> impl Strategy<Value = String> {
    proptest::string::string_regex(r"([a-z0-9][a-z0-9-]{0,20}\.){1,3}[a-z]{2,10}")
        .expect("regex should be valid")
}

/// Runs `f` with a scoped subscriber and returns everything it logged
pub fn capture_logs<T>(f: impl FnOnce() -> T) -> (T, String) {
    let buf = Arc::new(Mutex::new(Vec::new()));
    let writer = {
        let buf = buf.clone();
        move || CapturedLogs(buf.clone())
    };

    let subscriber = tracing_subscriber::fmt()
        .with_writer(writer)
        .with_ansi(false)
        .with_max_level(tracing::Level::TRACE)
        .finish();
    let result = tracing::subscriber::with_default(subscriber, f);

    let logs = String::from_utf8(buf.lock().expect("lock shouldn't be poisoned").clone())
        .expect("logs should be valid UTF-8");
    (result, logs)
}

struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl io::Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().expect("lock shouldn't be poisoned").extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
