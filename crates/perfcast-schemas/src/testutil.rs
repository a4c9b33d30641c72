//! Shared proptest strategies for schema tests.

use std::collections::HashMap;

use proptest::prelude::*;

/// The nine microbenchmark fields every CPU description carries.
pub const BENCHMARK_FIELDS: [&str; 9] = [
    "T_float_gt",
    "T_int_add",
    "L1_linesize",
    "L2_linesize",
    "L3_linesize",
    "T_L1_read",
    "T_L2_read",
    "T_L3_read",
    "T_DRAM_read",
];

/// Strategy for a complete `cpus.benchmarks` mapping with finite,
/// non-negative measurements.
pub fn arb_benchmarks() -> impl Strategy<Value = HashMap<String, f64>> {
    proptest::collection::vec(0.0f64..1e6, BENCHMARK_FIELDS.len()).prop_map(
        |values| {
            BENCHMARK_FIELDS
                .iter()
                .map(|&name| name.to_owned())
                .zip(values)
                .collect()
        },
    )
}
