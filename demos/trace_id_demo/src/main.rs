use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use trace_id::{IdGenerator, RandomIdGenerator};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    // Handlers typically hold the generator behind the trait so it can be
    // swapped out in tests.
    let generator: Arc<dyn IdGenerator> = Arc::new(RandomIdGenerator::new());

    for request in 1..=3 {
        let trace_id = generator.generate();
        tracing::info!(trace_id = %trace_id, request, "handled request");
    }

    // Shorter suffixes trade collision resistance for readability.
    let short_id = RandomIdGenerator::new().suffix_len(4).generate();
    tracing::info!(trace_id = %short_id, "short suffix variant");
}
