use crate::estimation::EmissionsModel;
use crate::estimation::linear::LinearModel;
use std::sync::Arc;

/// Shared, read-only state handed to every request handler.
#[derive(Debug, Clone)]
pub struct AppState {
    model: Arc<dyn EmissionsModel>,
}

impl AppState {
    pub fn new(model: Arc<dyn EmissionsModel>) -> Self {
        Self { model }
    }

    pub fn model(&self) -> &Arc<dyn EmissionsModel> {
        &self.model
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Arc::new(LinearModel::with_defaults()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::estimation::ComparisonBaselines;

    #[test]
    fn default_state_uses_linear_model() {
        let state = AppState::default();
        assert_eq!(state.model().name(), "linear");
        assert_eq!(state.model().baselines(), &ComparisonBaselines::default());
    }
}
