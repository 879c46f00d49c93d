use std::sync::Arc;

use eatup_core::application::EatUpService;

use crate::args::Args;

#[derive(Clone)]
pub struct AppState {
    pub args: Arc<Args>,
    pub service: EatUpService,
}

impl AppState {
    pub fn new(args: Arc<Args>, service: EatUpService) -> Self {
        Self { args, service }
    }
}
