use criterion::criterion_main;

mod common;

criterion_main!(core::core_benches, scenarios::scenario_benches);
