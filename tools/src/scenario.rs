use std::sync::Arc;
use std::time::Duration;

use goose::metrics::GooseRequestMetric;
use goose::prelude::*;
use rand::rngs::StdRng;
use tracing::debug;
use ventas_model::{Failure, SaleEvent, Verdict, classify};

use crate::conf::BenchConfig;

pub const SCENARIO_NAME: &str = "VentasUser";
/// Metric name every sale request is grouped under.
pub const REQUEST_NAME: &str = "/ventas";

/// Per-user payload generator, kept in goose session data.
struct UserRng(StdRng);

struct Target {
    path: String,
    timeout: Duration,
}

/// A user that keeps posting random sales, pausing between the configured
/// wait bounds after each one.
pub fn ventas_scenario(config: &BenchConfig) -> Result<Scenario, GooseError> {
    let seed_conf = Arc::new(config.clone());
    let seed_rng: TransactionFunction = Arc::new(move |user| {
        let conf = seed_conf.clone();
        Box::pin(async move {
            let rng = conf.rng_for(user.weighted_users_index as u64);
            user.set_session_data(UserRng(rng));
            Ok(())
        })
    });

    let target = Arc::new(Target {
        path: config.path.clone(),
        timeout: config.timeout(),
    });
    let send_sale: TransactionFunction = Arc::new(move |user| {
        let target = target.clone();
        Box::pin(async move { enviar_venta(user, &target).await })
    });

    let scenario = Scenario::new(SCENARIO_NAME)
        .set_wait_time(config.wait_min(), config.wait_max())?
        .register_transaction(
            Transaction::new(seed_rng).set_name("seed").set_on_start(),
        )
        .register_transaction(
            Transaction::new(send_sale).set_name("enviar_venta"),
        );
    Ok(scenario)
}

async fn enviar_venta(user: &mut GooseUser, target: &Target) -> TransactionResult {
    let event = match user.get_session_data_mut::<UserRng>() {
        Some(UserRng(rng)) => SaleEvent::random(rng),
        None => SaleEvent::random(&mut rand::rng()),
    };

    let request_builder = user
        .get_request_builder(&GooseMethod::Post, &target.path)?
        .json(&event)
        .timeout(target.timeout);
    let goose_request = GooseRequest::builder()
        .set_request_builder(request_builder)
        .name(REQUEST_NAME)
        .expect_status_code(200)
        .build();
    let mut goose = user.request(goose_request).await?;

    let verdict = match goose.response {
        Ok(response) => {
            let status = response.status().as_u16();
            match response.text().await {
                Ok(body) => classify(status, &body),
                Err(err) => Failure::transport(err.is_timeout(), &err).into(),
            }
        }
        Err(err) => Failure::transport(err.is_timeout(), &err).into(),
    };
    report(user, &mut goose.request, verdict)
}

/// Exactly one success or failure signal per sale. Goose has already failed a
/// non-200 or transport error itself, so for those the message only reaches the
/// debug log.
fn report(
    user: &GooseUser,
    request: &mut GooseRequestMetric,
    verdict: Verdict,
) -> TransactionResult {
    match verdict {
        Verdict::Success => user.set_success(request),
        Verdict::Failure(failure) => {
            debug!("sale failed: {failure}");
            user.set_failure(&failure.to_string(), request, None, failure.body())
        }
    }
}
