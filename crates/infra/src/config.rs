use tracing::warn;

#[derive(Debug, Clone)]
pub struct Config {
    /// Port for the application to run on
    pub port: usize,
}

impl Config {
    pub fn new() -> Self {
        let default_port = "5000";
        let port = std::env::var("PORT").unwrap_or_else(|_| default_port.into());
        let port = match port.parse::<usize>() {
            Ok(port) => port,
            Err(_) => {
                warn!(
                    "The given PORT: {} is not valid, falling back to the default port: {}.",
                    port, default_port
                );
                5000
            }
        };
        Self { port }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}
