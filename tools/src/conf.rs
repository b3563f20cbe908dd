use std::time::Duration;

use envconfig::Envconfig;
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::error::BenchError;

#[derive(Envconfig, Debug, Clone)]
pub struct BenchConfig {
    #[envconfig(from = "VENTAS_HOST", default = "http://localhost:8080")]
    pub host: String,
    #[envconfig(from = "VENTAS_PATH", default = "/ventas")]
    pub path: String,
    #[envconfig(from = "VENTAS_TIMEOUT_SECS", default = "5")]
    pub timeout_secs: u64,
    #[envconfig(from = "VENTAS_WAIT_MIN_MS", default = "100")]
    pub wait_min_ms: u64,
    #[envconfig(from = "VENTAS_WAIT_MAX_MS", default = "800")]
    pub wait_max_ms: u64,
    /// Base seed for the payload generators. Unset means OS entropy.
    #[envconfig(from = "VENTAS_SEED")]
    pub seed: Option<u64>,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            host: "http://localhost:8080".into(),
            path: "/ventas".into(),
            timeout_secs: 5,
            wait_min_ms: 100,
            wait_max_ms: 800,
            seed: None,
        }
    }
}

impl BenchConfig {
    pub fn validate(&self) -> Result<(), BenchError> {
        let url = reqwest::Url::parse(&self.host)
            .map_err(|e| BenchError::InvalidHost(format!("{}: {e}", self.host)))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(BenchError::InvalidHost(format!(
                "{}: scheme must be http or https",
                self.host
            )));
        }
        if !self.path.starts_with('/') {
            return Err(BenchError::InvalidConfig(format!(
                "path '{}' must start with '/'",
                self.path
            )));
        }
        if self.timeout_secs == 0 {
            return Err(BenchError::InvalidConfig(
                "timeout must be at least 1 second".into(),
            ));
        }
        if self.wait_min_ms > self.wait_max_ms {
            return Err(BenchError::InvalidConfig(format!(
                "wait range {}..{} ms is empty",
                self.wait_min_ms, self.wait_max_ms
            )));
        }
        Ok(())
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn wait_min(&self) -> Duration {
        Duration::from_millis(self.wait_min_ms)
    }

    pub fn wait_max(&self) -> Duration {
        Duration::from_millis(self.wait_max_ms)
    }

    pub fn url(&self) -> String {
        format!("{}{}", self.host.trim_end_matches('/'), self.path)
    }

    /// Independent generator for one user or worker. With a seed set, the same
    /// `stream` always yields the same payloads.
    pub fn rng_for(&self, stream: u64) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed.wrapping_add(stream)),
            None => StdRng::from_os_rng(),
        }
    }
}
