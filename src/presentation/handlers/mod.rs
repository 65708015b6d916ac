mod download;
mod health;
mod status;
mod upload;

pub use download::{download_handler, set_downloaded_handler};
pub use health::health_handler;
pub use status::status_handler;
pub use upload::upload_handler;
