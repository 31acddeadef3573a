use std::sync::Arc;

use crate::domain::a001_supplier::repository::SupplierRepository;
use crate::shared::config::Config;
use crate::shared::data::DataGateway;

/// Состояние, которое axum клонирует в каждый handler.
#[derive(Clone)]
pub struct AppState {
    pub suppliers: SupplierRepository,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(gateway: Arc<dyn DataGateway>, config: Config) -> Self {
        Self {
            suppliers: SupplierRepository::new(gateway),
            config: Arc::new(config),
        }
    }
}
