use async_trait::async_trait;

pub const STATUS_OK: &str = "ok";

/// Reports whether the service can take requests.
#[async_trait]
pub trait HealthChecker: Send + Sync {
    async fn check(&self) -> anyhow::Result<String>;
}

/// Always healthy. The service has no backing dependency that can go down.
#[derive(Debug, Default, Clone, Copy)]
pub struct StaticHealthChecker;

#[async_trait]
impl HealthChecker for StaticHealthChecker {
    async fn check(&self) -> anyhow::Result<String> {
        Ok(STATUS_OK.to_string())
    }
}
