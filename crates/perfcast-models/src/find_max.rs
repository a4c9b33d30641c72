//! Performance model for the "find maximum" kernel on a GPU-class target.
//!
//! The model is split the same way as every kernel model in the pipeline:
//! a pure symbolic function over a fixed parameter tuple, plus an adapter
//! that extracts those parameters from a hardware description.

use perfcast_schemas::{CostExpr, HardwareDescription};

use crate::error::ModelError;
use crate::PerformanceModel;

/// Registry identifier for this model, in `{kernel}/{target}` form.
pub const MODEL_NAME: &str = "find_max/gpu";

/// Declared parameter names of [`symbolic_model`], in positional order.
///
/// Registry metadata only: external tooling enumerates model signatures
/// from this list without calling the function. Hand-maintained; must stay
/// in sync with the parameter list of [`symbolic_model`].
pub const SYMBOLIC_MODEL_PARAMETERS: [&str; 5] = [
    "T_float_gt",
    "T_int_add",
    "cache_linesizes",
    "mem_access_times",
    "int_size",
];

/// Symbolic execution-time model for find-max.
///
/// Takes the float-compare latency, integer-add latency, cache line sizes
/// (L1, L2, L3), memory access latencies (L1, L2, L3, DRAM), and the
/// integer width in bytes. Pure and total: no validation is performed on
/// the inputs.
///
/// The cost formula is an unfinished placeholder: the model returns the
/// bare linear term `n` and does not yet fold any of the measured
/// latencies into the expression. Callers get the correct asymptotic shape
/// with a unit coefficient.
pub fn symbolic_model(
    _t_float_gt: f64,
    _t_int_add: f64,
    _cache_linesizes: [f64; 3],
    _mem_access_times: [f64; 4],
    _int_size: u32,
) -> CostExpr {
    CostExpr::size()
}

/// Predicts the find-max cost for the given hardware.
///
/// Extracts the microbenchmark fields from `cpus.benchmarks`, shapes the
/// line sizes and access latencies into their level-ordered sequences
/// (L1 before L2 before L3, then DRAM), and forwards them to
/// [`symbolic_model`] with a 4-byte integer width.
///
/// Fails with a missing-field error when any of the nine required fields,
/// or the `cpus.benchmarks` path itself, is absent.
pub fn predict(hardware: &HardwareDescription) -> Result<CostExpr, ModelError> {
    let microbenchmarks = hardware.benchmarks()?;
    Ok(symbolic_model(
        microbenchmarks.value("T_float_gt")?,
        microbenchmarks.value("T_int_add")?,
        [
            microbenchmarks.value("L1_linesize")?,
            microbenchmarks.value("L2_linesize")?,
            microbenchmarks.value("L3_linesize")?,
        ],
        [
            microbenchmarks.value("T_L1_read")?,
            microbenchmarks.value("T_L2_read")?,
            microbenchmarks.value("T_L3_read")?,
            microbenchmarks.value("T_DRAM_read")?,
        ],
        4,
    ))
}

/// The find-max GPU model as a registry entry.
#[derive(Debug, Clone, Copy)]
pub struct FindMaxGpu;

impl PerformanceModel for FindMaxGpu {
    fn name(&self) -> &'static str {
        MODEL_NAME
    }

    fn kernel(&self) -> &'static str {
        "find_max"
    }

    fn target(&self) -> &'static str {
        "gpu"
    }

    fn parameters(&self) -> &'static [&'static str] {
        &SYMBOLIC_MODEL_PARAMETERS
    }

    fn predict(
        &self,
        hardware: &HardwareDescription,
    ) -> Result<CostExpr, ModelError> {
        predict(hardware)
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use serde_json::{Value, json};

    use super::*;

    /// The nine required benchmark fields with realistic values.
    fn benchmarks_json() -> Value {
        json!({
            "T_float_gt": 2.0,
            "T_int_add": 1.0,
            "L1_linesize": 64,
            "L2_linesize": 64,
            "L3_linesize": 64,
            "T_L1_read": 1,
            "T_L2_read": 4,
            "T_L3_read": 12,
            "T_DRAM_read": 60,
        })
    }

    fn hardware() -> HardwareDescription {
        HardwareDescription::new(json!({"cpus": {"benchmarks": benchmarks_json()}}))
    }

    #[test]
    fn test_predict_returns_linear_cost() {
        let cost = predict(&hardware()).unwrap();
        assert_eq!(cost, CostExpr::size());
        assert_eq!(cost.to_string(), "n");
    }

    #[test]
    fn test_predict_matches_direct_call() {
        // The adapter must agree with calling the model directly on the
        // extracted and reshaped arguments.
        let adapted = predict(&hardware()).unwrap();
        let direct = symbolic_model(
            2.0,
            1.0,
            [64.0, 64.0, 64.0],
            [1.0, 4.0, 12.0, 60.0],
            4,
        );
        assert_eq!(adapted, direct);
    }

    #[test]
    fn test_model_ignores_inputs() {
        // The placeholder formula is independent of every measurement.
        let zeros = symbolic_model(0.0, 0.0, [0.0; 3], [0.0; 4], 4);
        assert_eq!(zeros, predict(&hardware()).unwrap());
    }

    #[test]
    fn test_missing_benchmarks_fails() {
        let hardware = HardwareDescription::new(json!({"cpus": {}}));
        let err = predict(&hardware).unwrap_err();
        assert!(err.is_missing_field());
        assert_eq!(err.missing_field_path(), Some("cpus.benchmarks"));
    }

    #[test]
    fn test_missing_cpus_fails() {
        let hardware = HardwareDescription::new(json!({}));
        let err = predict(&hardware).unwrap_err();
        assert!(err.is_missing_field());
        assert_eq!(err.missing_field_path(), Some("cpus"));
    }

    #[test]
    fn test_each_missing_field_fails_with_its_path() {
        let Value::Object(full) = benchmarks_json() else {
            unreachable!("benchmarks fixture is an object");
        };
        for (name, _) in &full {
            let mut reduced = full.clone();
            reduced.remove(name);
            let hardware = HardwareDescription::new(
                json!({"cpus": {"benchmarks": reduced}}),
            );

            let err = predict(&hardware).unwrap_err();
            assert!(err.is_missing_field(), "removing {name} should fail");
            assert_eq!(
                err.missing_field_path(),
                Some(format!("cpus.benchmarks.{name}").as_str())
            );
        }
    }

    #[test]
    fn test_parameter_list_contract() {
        assert_eq!(SYMBOLIC_MODEL_PARAMETERS.len(), 5);
        assert_eq!(
            SYMBOLIC_MODEL_PARAMETERS,
            [
                "T_float_gt",
                "T_int_add",
                "cache_linesizes",
                "mem_access_times",
                "int_size"
            ]
        );
        assert_eq!(FindMaxGpu.parameters(), &SYMBOLIC_MODEL_PARAMETERS);
    }

    proptest! {
        /// The model output is independent of all nine measurements.
        #[test]
        fn prop_output_independent_of_measurements(
            t_float_gt in 0.0f64..1e6,
            t_int_add in 0.0f64..1e6,
            linesizes in proptest::array::uniform3(1.0f64..4096.0),
            access_times in proptest::array::uniform4(0.0f64..1e6),
        ) {
            let cost = symbolic_model(
                t_float_gt,
                t_int_add,
                linesizes,
                access_times,
                4,
            );
            prop_assert_eq!(cost, CostExpr::size());
        }
    }
}
