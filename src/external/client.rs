use std::sync::LazyLock;
use std::time::Duration;

/// Global HTTP client instance shared by all outbound calls.
///
/// Initialized lazily on first access and reused across the application for
/// connection pooling and DNS caching. Individual calls layer their own
/// per-request timeout on top of the client-wide ceiling.
pub static HTTP_CLIENT: LazyLock<reqwest::Client> = LazyLock::new(|| {
    reqwest::Client::builder()
        // Timeouts
        .timeout(Duration::from_secs(30))
        .connect_timeout(Duration::from_secs(10))
        // Connection pooling
        .pool_max_idle_per_host(10)
        .pool_idle_timeout(Duration::from_secs(90))
        // Security
        .use_rustls_tls()
        .build()
        .expect("Failed to build HTTP client")
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_initialization() {
        // Access the client to ensure it initializes without panicking
        let _ = &*HTTP_CLIENT;
    }
}
