use std::path::PathBuf;
use std::sync::Arc;

use crate::config::{Config, DEFAULT_MAX_UPLOAD_BYTES};
use crate::pipeline::AppContext;

#[derive(Debug, Clone)]
pub struct HandlerState {
    pub context: Arc<AppContext>,

    pub upload_dir: PathBuf,

    pub static_dir: Option<PathBuf>,

    pub max_upload_bytes: usize,
}

impl HandlerState {
    pub fn new(context: Arc<AppContext>, upload_dir: PathBuf) -> Self {
        Self {
            context,
            upload_dir,
            static_dir: None,
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
        }
    }

    pub fn from_config(context: Arc<AppContext>, config: &Config) -> Self {
        Self {
            context,
            upload_dir: config.upload_dir.clone(),
            static_dir: config.static_dir.clone(),
            max_upload_bytes: config.max_upload_bytes,
        }
    }

    pub fn with_static_dir(mut self, static_dir: impl Into<PathBuf>) -> Self {
        self.static_dir = Some(static_dir.into());
        self
    }

    pub fn with_max_upload_bytes(mut self, max_upload_bytes: usize) -> Self {
        self.max_upload_bytes = max_upload_bytes;
        self
    }
}
