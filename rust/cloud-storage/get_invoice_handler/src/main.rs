use anyhow::Context;
use aws_config::meta::region::RegionProviderChain;
use handler::handler;
use intake_entrypoint::IntakeEntrypoint;
use lambda_runtime::{Error, LambdaEvent, run, service_fn, tracing};
use models_invoice::api::ApiRequest;
use std::sync::Arc;

mod config;
mod handler;
mod service;

#[tokio::main]
async fn main() -> Result<(), Error> {
    IntakeEntrypoint::default().init();

    tracing::trace!("initiating lambda");

    let config = config::Config::from_env().context("missing environment variables")?;
    tracing::trace!("initialized config");

    let aws_config = aws_config::defaults(aws_config::BehaviorVersion::latest())
        .region(RegionProviderChain::default_provider().or_else("us-east-1"))
        .load()
        .await;

    let reader = service::dynamodb::InvoiceReader::new(
        dynamodb_client::DynamodbClient::new(&aws_config, config.table_name.clone()).invoice,
    );
    tracing::trace!("initialized dynamodb client");

    let shared_reader = Arc::new(reader);
    let shared_config = Arc::new(config);

    let func = service_fn(move |event: LambdaEvent<ApiRequest>| {
        let reader = shared_reader.clone();
        let config = shared_config.clone();
        async move { handler(&reader, &config, event).await }
    });

    run(func).await
}
