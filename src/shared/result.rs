/// Crate-wide result; typed failures travel as `StoreError` inside the `anyhow::Error`
pub type Result<T> = std::result::Result<T, anyhow::Error>;
