use std::sync::Arc;

use axum::extract::FromRef;

use crate::ai::ModelProvider;

#[derive(Clone)]
pub struct AppState {
    pub model: Arc<dyn ModelProvider>,
}

impl FromRef<AppState> for Arc<dyn ModelProvider> {
    fn from_ref(state: &AppState) -> Self {
        state.model.clone()
    }
}
