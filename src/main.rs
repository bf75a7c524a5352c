mod config;
mod context;
mod entrypoint;
mod error;
mod handler;
mod model;
mod service;

use handler::handler;

use aws_lambda_events::event::s3::S3Event;
use lambda_runtime::{Error, LambdaEvent, run, service_fn, tracing};
use std::sync::Arc;

use crate::config::Config;
use crate::context::Context;
use crate::entrypoint::Entrypoint;

#[tokio::main]
async fn main() -> Result<(), Error> {
    Entrypoint::default().init();

    tracing::trace!("initiating lambda");

    let config = Config::from_env()?;

    let aws_config = aws_config::defaults(aws_config::BehaviorVersion::latest())
        .load()
        .await;

    let s3_client = Arc::new(service::s3::S3::new(aws_sdk_s3::Client::new(&aws_config)));
    let db = Arc::new(service::db::DB::new(
        aws_sdk_dynamodb::Client::new(&aws_config),
        &config.dynamodb_table,
    ));
    let sns_client = Arc::new(service::sns::SNS::new(aws_sdk_sns::Client::new(
        &aws_config,
    )));

    tracing::trace!("initialized aws clients");

    let ctx = Context {
        s3_client,
        db,
        sns_client,
        config,
    };

    let func = service_fn(move |event: LambdaEvent<S3Event>| {
        let ctx = ctx.clone();

        async move { handler(ctx, event).await }
    });

    run(func).await
}
