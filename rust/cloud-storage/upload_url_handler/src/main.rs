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

    let storage = service::s3::UploadStorage::new(
        s3_client::S3::new(aws_sdk_s3::Client::new(&aws_config)),
        config.upload_bucket_name.clone(),
    );
    tracing::trace!("initialized s3 client");

    let shared_storage = Arc::new(storage);
    let shared_config = Arc::new(config);

    let func = service_fn(move |event: LambdaEvent<ApiRequest>| {
        let storage = shared_storage.clone();
        let config = shared_config.clone();
        async move { handler(&storage, &config, event).await }
    });

    run(func).await
}
