//! Output destinations for the standard logger

use super::error::{LoggerError, Result};
use parking_lot::{Mutex, MutexGuard};
use std::fmt;
use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::Path;
use std::sync::Arc;

/// Thread-safe writer shared between a root logger and its children
///
/// Each write takes the lock for the whole line, so concurrent emission never
/// interleaves partial lines.
#[derive(Clone)]
pub struct SharedWriter {
    label: Arc<str>,
    inner: Arc<Mutex<Box<dyn Write + Send>>>,
}

impl SharedWriter {
    pub fn new<W: Write + Send + 'static>(writer: W) -> Self {
        Self::labeled("custom", writer)
    }

    fn labeled<W: Write + Send + 'static>(label: &str, writer: W) -> Self {
        Self {
            label: Arc::from(label),
            inner: Arc::new(Mutex::new(Box::new(writer))),
        }
    }

    pub fn stdout() -> Self {
        Self::labeled("stdout", io::stdout())
    }

    pub fn stderr() -> Self {
        Self::labeled("stderr", io::stderr())
    }

    /// Append to the file at `path`, creating it if missing
    pub fn file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|e| {
                LoggerError::io_operation(
                    "opening log file",
                    format!("cannot open '{}'", path.display()),
                    e,
                )
            })?;
        Ok(Self::labeled(&path.display().to_string(), file))
    }

    /// In-memory sink and a handle to read back what was written
    pub fn buffer() -> (Self, CaptureBuffer) {
        let capture = CaptureBuffer::default();
        (Self::labeled("buffer", capture.clone()), capture)
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// Exclusive access for the duration of one rendered line
    pub fn lock(&self) -> MutexGuard<'_, Box<dyn Write + Send>> {
        self.inner.lock()
    }

    /// Write `bytes` in full as one locked operation
    pub fn write_all(&self, bytes: &[u8]) -> io::Result<()> {
        self.inner.lock().write_all(bytes)
    }

    pub fn flush(&self) -> io::Result<()> {
        self.inner.lock().flush()
    }
}

impl fmt::Debug for SharedWriter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SharedWriter")
            .field("label", &self.label)
            .finish_non_exhaustive()
    }
}

/// Cloneable in-memory byte sink
#[derive(Debug, Clone, Default)]
pub struct CaptureBuffer {
    bytes: Arc<Mutex<Vec<u8>>>,
}

impl CaptureBuffer {
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.bytes.lock()).into_owned()
    }

    pub fn lines(&self) -> Vec<String> {
        self.contents().lines().map(str::to_string).collect()
    }

    pub fn len(&self) -> usize {
        self.bytes.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.lock().is_empty()
    }

    pub fn clear(&self) {
        self.bytes.lock().clear();
    }
}

impl Write for CaptureBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.bytes.lock().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_buffer_round_trip() {
        let (writer, capture) = SharedWriter::buffer();
        writer.write_all(b"one\n").unwrap();
        writer.write_all(b"two\n").unwrap();

        assert_eq!(capture.lines(), vec!["one", "two"]);
        assert_eq!(writer.label(), "buffer");

        capture.clear();
        assert!(capture.is_empty());
    }

    #[test]
    fn test_file_sink_appends() {
        let dir = tempfile::TempDir::new().expect("temp dir");
        let path = dir.path().join("out.log");

        let writer = SharedWriter::file(&path).unwrap();
        writer.write_all(b"first\n").unwrap();
        let again = SharedWriter::file(&path).unwrap();
        again.write_all(b"second\n").unwrap();
        again.flush().unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content, "first\nsecond\n");
    }

    #[test]
    fn test_file_sink_error_has_context() {
        let dir = tempfile::TempDir::new().expect("temp dir");
        let err = SharedWriter::file(dir.path().join("missing/nested.log")).unwrap_err();
        assert!(err.to_string().contains("opening log file"));
    }
}
