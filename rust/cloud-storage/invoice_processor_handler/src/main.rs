#![recursion_limit = "256"]

use anyhow::Context as _;
use aws_config::meta::region::RegionProviderChain;
use aws_lambda_events::s3::S3Event;
use intake_entrypoint::IntakeEntrypoint;
use lambda_runtime::{
    Error, LambdaEvent, run, service_fn,
    tracing::{self},
};
use std::sync::Arc;

mod config;
mod context;
mod handler;
mod models;
mod process;
mod service;

#[tokio::main]
async fn main() -> Result<(), Error> {
    IntakeEntrypoint::default().init();

    tracing::trace!("initiating lambda");

    let config = config::Config::from_env().context("missing environment variables")?;
    tracing::trace!(track_processing_status = config.track_processing_status, "initialized config");

    let aws_config = aws_config::defaults(aws_config::BehaviorVersion::latest())
        .region(RegionProviderChain::default_provider().or_else("us-east-1"))
        .load()
        .await;

    let analyzer = service::textract::DocumentAnalyzer::new(textract_client::Textract::new(
        aws_sdk_textract::Client::new(&aws_config),
    ));
    tracing::trace!("initialized textract client");

    let metadata = service::s3::ObjectMetadata::new(s3_client::S3::new(
        aws_sdk_s3::Client::new(&aws_config),
    ));
    tracing::trace!("initialized s3 client");

    let store = service::dynamodb::InvoiceStore::new(
        dynamodb_client::DynamodbClient::new(&aws_config, config.table_name.clone()).invoice,
    );
    tracing::trace!("initialized dynamodb client");

    let ctx = context::Context {
        analyzer: Arc::new(analyzer),
        metadata: Arc::new(metadata),
        store: Arc::new(store),
        config: Arc::new(config),
    };

    let func = service_fn(move |event: LambdaEvent<S3Event>| {
        let ctx = ctx.clone();
        async move { handler::handler(ctx, event).await }
    });

    run(func).await
}
