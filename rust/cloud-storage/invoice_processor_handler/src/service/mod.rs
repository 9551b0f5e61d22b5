pub mod dynamodb;
pub mod s3;
pub mod textract;
