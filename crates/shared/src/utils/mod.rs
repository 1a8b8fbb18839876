mod currency;
mod gracefullshutdown;
mod logs;
mod metrics;

pub use self::currency::format_rupiah;
pub use self::gracefullshutdown::shutdown_signal;
pub use self::logs::init_logger;
pub use self::metrics::{Method, Metrics, Status, SystemMetrics, run_metrics_collector};
