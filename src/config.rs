//! Support for backend configuration options

/// Environment variable that holds the backend host name
pub const SERVER_ENV_VAR: &str = "PAYROLL_BACKEND_SERVER";
/// Environment variable that holds the backend port
pub const PORT_ENV_VAR: &str = "PAYROLL_BACKEND_PORT";
/// Port the backend listens to, unless told otherwise
pub const DEFAULT_PORT: u16 = 8090;

/// Where the backend lives.
///
/// This is given to [`HttpClient::new`](crate::client::HttpClient::new), so that building URLs does not depend on the environment.
#[derive(Clone, Debug, PartialEq)]
pub struct BackendConfig {
    host: Option<String>,
    port: u16,
}

impl BackendConfig {
    pub fn new<S: ToString>(host: S, port: u16) -> Self {
        Self { host: Some(host.to_string()), port }
    }

    /// Read the configuration from the `PAYROLL_BACKEND_SERVER` and `PAYROLL_BACKEND_PORT` environment variables.
    ///
    /// A missing host is not an error here: the resulting base URL is malformed, and requests will fail when they are sent.
    pub fn from_env() -> Self {
        let host = std::env::var(SERVER_ENV_VAR).ok();
        let port = match std::env::var(PORT_ENV_VAR) {
            Err(_) => DEFAULT_PORT,
            Ok(value) => match value.parse() {
                Ok(port) => port,
                Err(err) => {
                    log::warn!("Invalid {} value {:?} ({}). Using {}", PORT_ENV_VAR, value, err, DEFAULT_PORT);
                    DEFAULT_PORT
                },
            },
        };
        if host.is_none() {
            log::warn!("{} is not set, requests to the backend will fail", SERVER_ENV_VAR);
        }

        Self { host, port }
    }

    pub fn host(&self) -> Option<&str> { self.host.as_deref() }
    pub fn port(&self) -> u16 { self.port }

    /// The base URL every request is relative to, i.e. `http://<host>:<port>/api`
    pub fn base_url(&self) -> String {
        format!("http://{}:{}/api", self.host.as_deref().unwrap_or(""), self.port)
    }
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self { host: None, port: DEFAULT_PORT }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_base_url() {
        let config = BackendConfig::new("karting-app.example.com", 8090);
        assert_eq!(config.base_url(), "http://karting-app.example.com:8090/api");

        let config = BackendConfig::new("localhost", 3000);
        assert_eq!(config.base_url(), "http://localhost:3000/api");
    }

    #[test]
    fn test_missing_host() {
        let config = BackendConfig::default();
        assert_eq!(config.host(), None);
        assert_eq!(config.port(), DEFAULT_PORT);
        assert_eq!(config.base_url(), "http://:8090/api");
    }
}
