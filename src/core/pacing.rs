use std::time::Duration;

/// Request pacing against the source sites.
///
/// This is a politeness throttle, not a retry policy: every paced call waits
/// once before it goes out, whether or not the previous request succeeded.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Pacing {
    /// Sleep for a fixed interval before each paced request.
    Fixed(Duration),
    /// Never sleep. Intended for tests and local mirrors.
    #[default]
    Disabled,
}

impl Pacing {
    /// Shorthand for `Pacing::Fixed(Duration::from_millis(ms))`.
    pub fn millis(ms: u64) -> Self {
        Self::Fixed(Duration::from_millis(ms))
    }

    /// The delay this policy applies, `None` when disabled or zero.
    pub fn delay(&self) -> Option<Duration> {
        match *self {
            Self::Fixed(d) if !d.is_zero() => Some(d),
            _ => None,
        }
    }

    pub async fn wait(&self) {
        if let Some(d) = self.delay() {
            tokio::time::sleep(d).await;
        }
    }
}
