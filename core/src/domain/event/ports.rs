use crate::domain::common::entities::app_errors::CoreError;

/// Fire-and-forget publish boundary. The catalog never depends on delivery
/// confirmation beyond the per-call success/failure.
#[cfg_attr(test, mockall::automock)]
pub trait EventPublisher: Send + Sync {
    fn publish(
        &self,
        topic: &str,
        key: &str,
        payload: Vec<u8>,
    ) -> impl Future<Output = Result<(), CoreError>> + Send;
}
