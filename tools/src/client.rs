use std::time::Duration;

use rand::rngs::StdRng;
use tokio::time::Instant;
use tracing::debug;
use ventas_model::{Failure, SaleEvent, Verdict, classify};

use crate::conf::BenchConfig;
use crate::error::BenchError;

/// Outcome of one `POST /ventas`.
#[derive(Debug, Clone)]
pub struct Submission {
    pub verdict: Verdict,
    /// `None` when the request never got a status back.
    pub status: Option<u16>,
    pub bytes: usize,
    pub elapsed: Duration,
}

#[derive(Clone)]
pub struct SalesClient {
    http: reqwest::Client,
    url: String,
    timeout: Duration,
}

impl SalesClient {
    pub fn new(config: &BenchConfig) -> Result<Self, BenchError> {
        config.validate()?;
        let http = reqwest::Client::builder().build()?;
        Ok(Self {
            http,
            url: config.url(),
            timeout: config.timeout(),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Posts `event` and classifies whatever comes back. Never retries.
    pub async fn submit(&self, event: &SaleEvent) -> Submission {
        let t = Instant::now();
        let resp = self
            .http
            .post(&self.url)
            .json(event)
            .timeout(self.timeout)
            .send()
            .await;
        let resp = match resp {
            Ok(resp) => resp,
            Err(err) => {
                return transport_failure(err, None, t.elapsed());
            }
        };
        let status = resp.status().as_u16();
        let body = match resp.text().await {
            Ok(body) => body,
            Err(err) => {
                return transport_failure(err, Some(status), t.elapsed());
            }
        };
        let elapsed = t.elapsed();
        let verdict = classify(status, &body);
        if let Verdict::Failure(failure) = &verdict {
            debug!(
                category = %event.category,
                product_id = %event.product_id,
                "sale rejected: {failure}"
            );
        }
        Submission {
            verdict,
            status: Some(status),
            bytes: body.len(),
            elapsed,
        }
    }
}

fn transport_failure(
    err: reqwest::Error,
    status: Option<u16>,
    elapsed: Duration,
) -> Submission {
    debug!("transport failure: {err}");
    Submission {
        verdict: Failure::transport(err.is_timeout(), &err).into(),
        status,
        bytes: 0,
        elapsed,
    }
}

/// One generate → submit → classify cycle, callable from any harness.
#[async_trait::async_trait]
pub trait Iteration: Send {
    async fn iterate(&mut self) -> Verdict;
}

pub struct SalesIteration {
    client: SalesClient,
    rng: StdRng,
}

impl SalesIteration {
    pub fn new(client: SalesClient, rng: StdRng) -> Self {
        Self { client, rng }
    }

    pub async fn run_once(&mut self) -> Submission {
        let event = SaleEvent::random(&mut self.rng);
        self.client.submit(&event).await
    }
}

#[async_trait::async_trait]
impl Iteration for SalesIteration {
    async fn iterate(&mut self) -> Verdict {
        self.run_once().await.verdict
    }
}
