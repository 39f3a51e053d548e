pub(crate) const DEFAULT_WINDOW_SIZE: u32 = 800;
pub(crate) const MAX_WINDOW_SIZE: u32 = 8192;
// 800 px across a 5 m span
pub(crate) const DEFAULT_SCALE: f64 = 800. / 5.;
pub(crate) const DEFAULT_ACQUIRE_TIMEOUT_MS: u64 = 500;
pub(crate) const DEFAULT_RETRY_BACKOFF_MS: u64 = 50;
pub(crate) const DEFAULT_SWEEP_INTERVAL_MS: u64 = 100;
pub(crate) const SWEEP_CHANNEL_CAPACITY: usize = 10;
pub(crate) const TERMINATOR_CHANNEL_CAPACITY: usize = 10;
