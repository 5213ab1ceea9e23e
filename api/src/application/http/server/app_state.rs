use std::sync::Arc;

use aahaara_core::application::AahaaraService;

use crate::args::Args;

#[derive(Clone)]
pub struct AppState {
    pub args: Arc<Args>,
    pub service: Arc<AahaaraService>,
}

impl AppState {
    pub fn new(args: Arc<Args>, service: AahaaraService) -> Self {
        Self {
            args,
            service: Arc::new(service),
        }
    }
}
