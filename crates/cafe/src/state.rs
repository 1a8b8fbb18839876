use crate::{config::Config, di::DependenciesInject};
use prometheus_client::registry::Registry;
use shared::utils::{SystemMetrics, run_metrics_collector};
use std::{path::PathBuf, sync::Arc};
use tokio::sync::Mutex;

#[derive(Clone)]
pub struct AppState {
    pub di_container: DependenciesInject,
    pub registry: Arc<Mutex<Registry>>,
    pub system_metrics: Arc<SystemMetrics>,
    pub static_dir: PathBuf,
}

impl AppState {
    pub async fn new(config: &Config) -> Self {
        let registry = Arc::new(Mutex::new(Registry::default()));
        let system_metrics = Arc::new(SystemMetrics::new());

        let di_container = DependenciesInject::new(registry.clone()).await;

        registry.lock().await.register_metrics(&system_metrics);

        tokio::spawn(run_metrics_collector(system_metrics.clone()));

        Self {
            di_container,
            registry,
            system_metrics,
            static_dir: config.static_dir.clone(),
        }
    }
}

trait MetricsRegister {
    fn register_metrics(&mut self, metrics: &SystemMetrics);
}

impl MetricsRegister for Registry {
    fn register_metrics(&mut self, metrics: &SystemMetrics) {
        metrics.register(self);
    }
}
