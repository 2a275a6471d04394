use std::path::Path;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::time::Duration;

use language_detective::application::ports::{Detection, DetectorError, LanguageDetector};
use language_detective::domain::CostEstimate;

/// Answers after `delay` with either a language or a rejection message.
pub struct StubDetector {
    name: String,
    delay: Duration,
    answer: Result<&'static str, &'static str>,
    calls: Arc<AtomicUsize>,
}

impl StubDetector {
    pub fn succeeding(name: &str, language: &'static str, delay: Duration) -> Self {
        Self {
            name: name.to_string(),
            delay,
            answer: Ok(language),
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn failing(name: &str, message: &'static str, delay: Duration) -> Self {
        Self {
            name: name.to_string(),
            delay,
            answer: Err(message),
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn calls(&self) -> Arc<AtomicUsize> {
        Arc::clone(&self.calls)
    }
}

#[async_trait::async_trait]
impl LanguageDetector for StubDetector {
    fn name(&self) -> &str {
        &self.name
    }

    async fn identify(&self, _audio_path: &Path) -> Result<Detection, DetectorError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        tokio::time::sleep(self.delay).await;
        match self.answer {
            Ok(language) => Ok(Detection::new(language, Some(CostEstimate::new(10, 0.001)))),
            Err(message) => Err(DetectorError::Rejected(message.to_string())),
        }
    }
}

/// Sleeps for `delay` and then flags that it finished.
pub struct SlowDetector {
    name: String,
    delay: Duration,
    finished: Arc<AtomicBool>,
}

impl SlowDetector {
    pub fn new(name: &str, delay: Duration) -> Self {
        Self {
            name: name.to_string(),
            delay,
            finished: Arc::new(AtomicBool::new(false)),
        }
    }

    pub fn finished(&self) -> Arc<AtomicBool> {
        Arc::clone(&self.finished)
    }
}

#[async_trait::async_trait]
impl LanguageDetector for SlowDetector {
    fn name(&self) -> &str {
        &self.name
    }

    async fn identify(&self, _audio_path: &Path) -> Result<Detection, DetectorError> {
        tokio::time::sleep(self.delay).await;
        self.finished.store(true, Ordering::SeqCst);
        Ok(Detection::new("en", None))
    }
}

pub struct PanickingDetector;

#[async_trait::async_trait]
impl LanguageDetector for PanickingDetector {
    fn name(&self) -> &str {
        "panicking"
    }

    async fn identify(&self, _audio_path: &Path) -> Result<Detection, DetectorError> {
        panic!("connector exploded");
    }
}
