use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CostEstimate {
    pub tokens: u64,
    pub dollars: f64,
}

impl CostEstimate {
    pub fn new(tokens: u64, dollars: f64) -> Self {
        Self { tokens, dollars }
    }

    /// Rounds the dollar amount to `places` decimal places.
    pub fn round_dollars(self, places: i32) -> Self {
        let factor = 10f64.powi(places);
        Self {
            tokens: self.tokens,
            dollars: (self.dollars * factor).round() / factor,
        }
    }
}
