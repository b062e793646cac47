use tracing_subscriber::EnvFilter;

pub fn init() {
	// Other tests in the same binary may have installed it already.
	let _ = tracing_subscriber::fmt().with_env_filter(EnvFilter::from_default_env()).with_test_writer().try_init();
}
