use std::str::FromStr;

use anyhow::Context;

use bench_cpp::bench::{random_input, time_it, Timing};
use bench_cpp::{build_pool, run_series_in, sum_array, sum_array_in, SeriesStrategy};

fn env_or<T: FromStr>(var: &str, def: T) -> anyhow::Result<T>
where
    <T as FromStr>::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(var) {
        Ok(s) => s
            .parse::<T>()
            .with_context(|| format!("Could not parse {var}")),
        Err(_) => Ok(def),
    }
}

fn emit(timing: &Timing) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string(timing)?);
    Ok(())
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::filter::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    // setup
    let n = env_or("BENCH_N", 30_000_000usize)?;
    let seed = env_or("BENCH_SEED", 0u64)?;
    let threads = env_or("BENCH_THREADS", 4usize)?;
    let series_n = env_or("SERIES_N", 50_000_000usize)?;

    let values = random_input(n, seed);
    // one pool for every parallel run, so thread spawn stays out of the timings
    let pool = build_pool(threads)?;

    // array sum
    emit(&time_it("sum_array", n, || sum_array(&values)))?;
    emit(&time_it("sum_array_parallel", n, || sum_array_in(&pool, &values)))?;

    // sine series
    for strategy in SeriesStrategy::ALL {
        let label = format!("sine_series_{strategy}");
        emit(&time_it(&label, series_n, || {
            run_series_in(&pool, strategy, series_n)
        }))?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_or_default_when_unset() {
        std::env::remove_var("BENCH_SUM_TEST_UNSET");
        assert_eq!(env_or("BENCH_SUM_TEST_UNSET", 7usize).unwrap(), 7);
    }

    #[test]
    fn test_env_or_parses_value() {
        std::env::set_var("BENCH_SUM_TEST_VALID", "12");
        assert_eq!(env_or("BENCH_SUM_TEST_VALID", 7usize).unwrap(), 12);
    }

    #[test]
    fn test_env_or_malformed_is_error() {
        std::env::set_var("BENCH_SUM_TEST_MALFORMED", "lots");
        let err = env_or("BENCH_SUM_TEST_MALFORMED", 7usize).unwrap_err();
        assert_eq!(err.to_string(), "Could not parse BENCH_SUM_TEST_MALFORMED");
    }
}
