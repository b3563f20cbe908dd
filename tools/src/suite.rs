use rand::rngs::StdRng;
use rlt::{BenchSuite, IterInfo, IterReport, Status};
use ventas_model::{Failure, Verdict};

use crate::client::{SalesClient, SalesIteration, Submission};
use crate::conf::BenchConfig;

#[derive(Clone)]
pub struct SalesBench {
    client: SalesClient,
    config: BenchConfig,
}

impl SalesBench {
    pub fn new(config: BenchConfig) -> Result<Self, crate::BenchError> {
        let client = SalesClient::new(&config)?;
        Ok(Self { client, config })
    }
}

#[async_trait::async_trait]
impl BenchSuite for SalesBench {
    type WorkerState = SalesIteration;

    async fn state(&self, worker_id: u32) -> anyhow::Result<Self::WorkerState> {
        let rng: StdRng = self.config.rng_for(worker_id as u64);
        Ok(SalesIteration::new(self.client.clone(), rng))
    }

    async fn bench(
        &mut self,
        iteration: &mut Self::WorkerState,
        _: &IterInfo,
    ) -> anyhow::Result<IterReport> {
        let submission = iteration.run_once().await;
        Ok(iter_report(&submission))
    }
}

pub fn iter_status(verdict: &Verdict) -> Status {
    match verdict {
        Verdict::Success => Status::success(200),
        Verdict::Failure(Failure::Status { code, .. }) if (400..500).contains(code) => {
            Status::client_error(*code as i64)
        }
        Verdict::Failure(Failure::Status { code, .. }) => {
            Status::server_error(*code as i64)
        }
        Verdict::Failure(Failure::Semantic { .. }) => Status::server_error(200),
        Verdict::Failure(Failure::Transport { timed_out, .. }) => {
            Status::error(if *timed_out { 1 } else { 0 })
        }
    }
}

fn iter_report(submission: &Submission) -> IterReport {
    IterReport {
        duration: submission.elapsed,
        status: iter_status(&submission.verdict),
        bytes: submission.bytes as u64,
        items: 1,
    }
}
