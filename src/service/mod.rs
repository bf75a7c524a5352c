pub mod db;
pub mod image;
pub mod s3;
pub mod sns;
