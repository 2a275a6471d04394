use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;

pub struct AudioFixture {
    file: NamedTempFile,
}

impl AudioFixture {
    /// Creates a temp file whose name starts with `prefix` and ends in `suffix`.
    pub fn new(prefix: &str, suffix: &str, bytes: &[u8]) -> Self {
        let mut file = tempfile::Builder::new()
            .prefix(prefix)
            .suffix(suffix)
            .tempfile()
            .unwrap();
        file.write_all(bytes).unwrap();
        file.flush().unwrap();
        Self { file }
    }

    pub fn wav(prefix: &str) -> Self {
        Self::new(prefix, ".wav", b"RIFF fake wav payload")
    }

    pub fn path(&self) -> &Path {
        self.file.path()
    }

    pub fn path_string(&self) -> String {
        self.file.path().display().to_string()
    }
}
