use std::sync::Arc;

use sajian_core::application::SajianService;

use crate::args::Args;

#[derive(Clone)]
pub struct AppState {
    pub args: Arc<Args>,
    pub service: SajianService,
}

impl AppState {
    pub fn new(args: Arc<Args>, service: SajianService) -> Self {
        Self { args, service }
    }
}
