#![no_main]

use std::io::Cursor;

use libfuzzer_sys::fuzz_target;

use fibbench_core::benchmark::Benchmark;
use fibbench_core::interfaces::NullPresenter;
use fibbench_core::sequence::Width;
use fibbench_core::session::{run_benchmark_session, SessionConfig};

fuzz_target!(|data: &[u8]| {
    let bench = Benchmark::new(3, 1, Width::U64).expect("valid benchmark");
    let mut config = SessionConfig::new(bench);
    config.echo_sequence = false;
    config.max_runs = Some(64);

    let mut input = Cursor::new(data.to_vec());
    // Any byte sequence is an answer; only output failures may error.
    let summary = run_benchmark_session(&mut input, &mut std::io::sink(), &config, &NullPresenter)
        .expect("arbitrary input never fails the session");
    assert!(summary.runs() >= 1 && summary.runs() <= 64);
});
