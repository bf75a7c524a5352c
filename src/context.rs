use std::sync::Arc;

use crate::config::Config;
use crate::service;

#[derive(Clone)]
pub struct Context {
    pub s3_client: Arc<service::s3::S3>,
    pub db: Arc<service::db::DB>,
    pub sns_client: Arc<service::sns::SNS>,
    pub config: Config,
}
