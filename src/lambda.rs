use email_finder::core::processor::handle_batch_request;
use email_finder::domain::model::ContactResult;
use email_finder::utils::{logger, validation::Validate};
use email_finder::{ContactProcessor, HttpPageFetcher, LambdaConfig};
use lambda_runtime::{run, service_fn, Error, LambdaEvent};
use serde::Serialize;
use std::sync::Arc;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Response {
    pub status_code: u16,
    pub results: Vec<ContactResult>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

async fn function_handler(
    processor: &ContactProcessor<HttpPageFetcher>,
    event: LambdaEvent<serde_json::Value>,
) -> Result<Response, Error> {
    tracing::info!("Handling batch request {}", event.context.request_id);

    let (status, body) = handle_batch_request(processor, &event.payload).await;

    tracing::info!(
        "Batch request finished with {} ({} results)",
        status.code(),
        body.results.len()
    );
    Ok(Response {
        status_code: status.code(),
        results: body.results,
        message: body.message,
    })
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    logger::init_lambda_logger();

    let config = LambdaConfig::from_env();
    config
        .validate()
        .map_err(|e| Box::new(e) as Box<dyn std::error::Error + Send + Sync>)?;

    let fetcher = HttpPageFetcher::new(config.fetch_timeout_seconds, &config.user_agent)
        .map_err(|e| Box::new(e) as Box<dyn std::error::Error + Send + Sync>)?;
    let processor = Arc::new(ContactProcessor::new(fetcher, config.concurrent_requests));

    run(service_fn(move |event: LambdaEvent<serde_json::Value>| {
        let processor = Arc::clone(&processor);
        async move { function_handler(&processor, event).await }
    }))
    .await
}
