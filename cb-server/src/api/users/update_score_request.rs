use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct UpdateScoreRequest {
    /// Signed credit delta; negative values spend credit.
    pub diff: i64,
}
