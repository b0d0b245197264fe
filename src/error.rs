// One error type for the whole app.
// Every variant states *where* things went wrong. The curve kernel itself never fails.
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Window init error: {0}")]
    WindowInit(String), // Creating the window failed
    #[error("Window update error: {0}")]
    WindowUpdate(String), // Updating the window buffer failed
    #[error("Config error: {0}")]
    Config(#[from] toml::de::Error), // Config file is not valid TOML for AppConfig
    #[error("Snapshot error: {0}")]
    Snapshot(#[from] image::ImageError), // Encoding/writing the PNG failed
}
