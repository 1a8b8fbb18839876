use prometheus_client::metrics::histogram::Histogram;
use prometheus_client::metrics::{counter::Counter, family::Family, gauge::Gauge};
use prometheus_client::registry::Registry;
use prometheus_client_derive_encode::{EncodeLabelSet, EncodeLabelValue};
use std::{
    sync::{Arc, atomic::AtomicU64},
    time::{Duration, SystemTime, UNIX_EPOCH},
};
use sysinfo::{Pid, System};

#[derive(Debug, Clone, Default)]
pub struct SystemMetrics {
    pub memory_alloc_bytes: Gauge,
    pub memory_virtual_bytes: Gauge,
    pub available_memory_bytes: Gauge,
    pub thread_count: Gauge,
    pub cpu_usage_percent: Gauge<f64, AtomicU64>,
    pub process_start_time: Gauge,
}

impl SystemMetrics {
    pub fn new() -> Self {
        let metrics = Self::default();

        let start_time = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs() as i64)
            .unwrap_or_default();
        metrics.process_start_time.set(start_time);

        metrics
    }

    pub fn register(&self, registry: &mut Registry) {
        registry.register(
            "process_memory_alloc_bytes",
            "Resident memory of the process in bytes",
            self.memory_alloc_bytes.clone(),
        );
        registry.register(
            "process_memory_virtual_bytes",
            "Virtual memory of the process in bytes",
            self.memory_virtual_bytes.clone(),
        );
        registry.register(
            "system_memory_available_bytes",
            "Memory available on the host in bytes",
            self.available_memory_bytes.clone(),
        );
        registry.register(
            "process_thread_total",
            "Number of threads of the process",
            self.thread_count.clone(),
        );
        registry.register(
            "system_cpu_usage_percent",
            "Global CPU usage in percent",
            self.cpu_usage_percent.clone(),
        );
        registry.register(
            "process_start_time_seconds",
            "Start time of the process since unix epoch in seconds",
            self.process_start_time.clone(),
        );
    }

    pub fn update_metrics(&self, sys: &mut System) {
        sys.refresh_all();

        let pid = Pid::from(std::process::id() as usize);

        if let Some(process) = sys.process(pid) {
            self.memory_alloc_bytes.set(process.memory() as i64);
            self.memory_virtual_bytes.set(process.virtual_memory() as i64);

            if let Some(tasks) = process.tasks() {
                self.thread_count.set(tasks.len() as i64);
            }
        }

        self.available_memory_bytes.set(sys.available_memory() as i64);
        self.cpu_usage_percent.set(sys.global_cpu_usage() as f64);
    }
}

#[derive(Clone, Debug, Hash, PartialEq, Eq, EncodeLabelValue)]
pub enum Method {
    Get,
    Post,
}

#[derive(Clone, Debug, Hash, PartialEq, Eq, EncodeLabelValue)]
pub enum Status {
    Success,
    Error,
}

#[derive(Clone, Debug, Hash, PartialEq, Eq, EncodeLabelSet)]
pub struct Labels {
    pub method: Method,
    pub status: Status,
}

/// Request counter and latency histogram for one service.
#[derive(Clone, Debug)]
pub struct Metrics {
    pub request_counter: Family<Labels, Counter>,
    pub request_duration: Family<Labels, Histogram>,
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}

impl Metrics {
    pub fn new() -> Self {
        Self {
            request_counter: Family::default(),
            request_duration: Family::new_with_constructor(|| {
                Histogram::new(vec![
                    0.0005, 0.001, 0.005, 0.01, 0.025, 0.05, 0.1, 0.25, 0.5, 1.0,
                ])
            }),
        }
    }

    /// Registers both families under `<prefix>_request_counter` and
    /// `<prefix>_request_duration`.
    pub fn register(&self, registry: &mut Registry, prefix: &str, service: &str) {
        registry.register(
            format!("{prefix}_request_counter"),
            format!("Total number of requests to the {service}"),
            self.request_counter.clone(),
        );
        registry.register(
            format!("{prefix}_request_duration"),
            format!("Histogram of request durations for the {service}"),
            self.request_duration.clone(),
        );
    }

    pub fn record(&self, method: Method, status: Status, duration_secs: f64) {
        let labels = Labels { method, status };
        self.request_counter.get_or_create(&labels).inc();
        self.request_duration
            .get_or_create(&labels)
            .observe(duration_secs);
    }
}

pub async fn run_metrics_collector(system_metrics: Arc<SystemMetrics>) {
    let mut sys = System::new();
    let mut interval = tokio::time::interval(Duration::from_secs(15));
    loop {
        interval.tick().await;
        system_metrics.update_metrics(&mut sys);
    }
}
