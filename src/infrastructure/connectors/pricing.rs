use serde::Deserialize;

use crate::domain::CostEstimate;

use super::audio_file;

const MIN_BILLED_MINUTES: f64 = 0.1;
const MIN_TOKENS: u64 = 100;

/// How a connector turns an audio file size into a cost estimate.
///
/// Duration is approximated from size: one MiB is billed as one minute.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(tag = "model", rename_all = "snake_case")]
pub enum Pricing {
    PerMinute {
        dollars_per_minute: f64,
        tokens_per_minute: u64,
    },
    PerMegabyte {
        dollars_per_megabyte: f64,
    },
    PerToken {
        dollars_per_token: f64,
    },
}

impl Pricing {
    pub fn estimate(&self, size_bytes: u64) -> CostEstimate {
        let megabytes = audio_file::megabytes(size_bytes);

        match *self {
            Pricing::PerMinute {
                dollars_per_minute,
                tokens_per_minute,
            } => {
                let minutes = megabytes.max(MIN_BILLED_MINUTES);
                CostEstimate::new(
                    (minutes * tokens_per_minute as f64) as u64,
                    minutes * dollars_per_minute,
                )
                .round_dollars(6)
            }
            Pricing::PerMegabyte {
                dollars_per_megabyte,
            } => CostEstimate::new(size_bytes / 100, megabytes * dollars_per_megabyte)
                .round_dollars(6),
            Pricing::PerToken { dollars_per_token } => {
                let tokens = (size_bytes / 4).max(MIN_TOKENS);
                CostEstimate::new(tokens, tokens as f64 * dollars_per_token).round_dollars(6)
            }
        }
    }
}
