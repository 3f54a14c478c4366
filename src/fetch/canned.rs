//! Stand-in source returning a fixed list after a delay.

use std::time::Duration;

use super::{FetchFuture, Item, ItemSource};

/// Delay used when no override is configured.
pub const DEFAULT_CANNED_DELAY: Duration = Duration::from_millis(1000);

/// The three items every canned fetch resolves to.
pub fn canned_items() -> Vec<Item> {
    (1..=3)
        .map(|n| {
            Item::new(
                n.to_string(),
                format!("Item {}", n),
                format!("Description for item {}", n),
            )
        })
        .collect()
}

/// Source that ignores the query and resolves to [`canned_items`].
#[derive(Debug, Clone)]
pub struct CannedSource {
    delay: Duration,
}

impl CannedSource {
    pub fn new() -> Self {
        Self::with_delay(DEFAULT_CANNED_DELAY)
    }

    pub fn with_delay(delay: Duration) -> Self {
        Self { delay }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }
}

impl Default for CannedSource {
    fn default() -> Self {
        Self::new()
    }
}

impl ItemSource for CannedSource {
    fn fetch_items(&self, query: &str) -> FetchFuture {
        let delay = self.delay;
        tracing::trace!(query = %query, delay_ms = delay.as_millis() as u64, "Canned fetch");
        Box::pin(async move {
            if !delay.is_zero() {
                tokio::time::sleep(delay).await;
            }
            Ok(canned_items())
        })
    }
}
