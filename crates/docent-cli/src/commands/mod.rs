pub mod dispatch;
pub mod export;
pub mod find;
pub mod lint;
pub mod schema;
pub mod show;
pub mod stats;
pub mod verify;
