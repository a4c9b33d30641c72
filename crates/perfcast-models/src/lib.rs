//! Performance models for predicting symbolic kernel execution time.
//!
//! Each model covers one kernel on one hardware target and is identified
//! as `{kernel}/{target}` (e.g. `find_max/gpu`). A model is two pieces:
//!
//! - a pure **symbolic function** mapping a fixed tuple of microbenchmark
//!   parameters to a [`CostExpr`] in the problem size `n`
//! - a **predict adapter** that extracts those parameters from a
//!   [`HardwareDescription`] and forwards them in the declared order
//!
//! Models never evaluate their expressions numerically; the caller
//! substitutes concrete problem sizes downstream. Beside each symbolic
//! function sits a hand-maintained ordered list of its parameter names so
//! the registry can expose model signatures without calling them.

mod error;
pub mod find_max;

use std::io::{Read, Write};

use indexmap::IndexMap;
use perfcast_schemas::{CostExpr, HardwareDescription};
use serde::Serialize;
use tracing::debug;

pub use error::ModelError;
use error::ModelErrorKind;

/// A registered kernel performance model.
///
/// Implementors are stateless: both the symbolic function and the adapter
/// are pure, so concurrent calls need no synchronization.
pub trait PerformanceModel: std::fmt::Debug {
    /// Registry identifier in `{kernel}/{target}` form.
    fn name(&self) -> &'static str;

    /// The kernel this model covers (e.g. `find_max`).
    fn kernel(&self) -> &'static str;

    /// The hardware target class (e.g. `gpu`).
    fn target(&self) -> &'static str;

    /// Declared parameter names of the symbolic function, in positional
    /// order. Metadata for signature introspection; not used internally.
    fn parameters(&self) -> &'static [&'static str];

    /// Runs the predict adapter against a hardware description.
    fn predict(
        &self,
        hardware: &HardwareDescription,
    ) -> Result<CostExpr, ModelError>;
}

static FIND_MAX_GPU: find_max::FindMaxGpu = find_max::FindMaxGpu;

/// Returns the available models, keyed by name in registration order.
pub fn registry() -> IndexMap<&'static str, &'static dyn PerformanceModel> {
    let mut models: IndexMap<&'static str, &'static dyn PerformanceModel> =
        IndexMap::new();
    models.insert(FIND_MAX_GPU.name(), &FIND_MAX_GPU);
    models
}

/// Looks up a model by its `{kernel}/{target}` name.
pub fn model(name: &str) -> Result<&'static dyn PerformanceModel, ModelError> {
    registry()
        .get(name)
        .copied()
        .ok_or_else(|| ModelError::unknown_model(name))
}

/// Options for [`run`].
#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    /// Model to run; defaults to [`find_max::MODEL_NAME`].
    pub model: Option<String>,
    /// Emit the prediction as JSON instead of a text report.
    pub json: bool,
}

/// A prediction paired with the model that produced it.
///
/// The JSON output format of [`run`]; kept serializable so downstream
/// tooling can collect predictions across hardware descriptions.
#[derive(Debug, Clone, Serialize)]
pub struct Prediction {
    /// Name of the model that produced the cost.
    pub model: String,
    /// The symbolic cost expression.
    pub cost: CostExpr,
    /// Rendered formula text for human consumption.
    pub formula: String,
}

/// Reads a hardware description, runs a model, and writes the prediction.
///
/// This is the main entry point for the prediction phase: read a JSON
/// hardware description from `input`, run the selected model's adapter,
/// and write either a short text report or a JSON [`Prediction`] to
/// `output`.
pub fn run(
    mut input: impl Read,
    mut output: impl Write,
    options: &RunOptions,
) -> Result<(), ModelError> {
    let mut json = String::new();
    input.read_to_string(&mut json)?;

    let hardware: HardwareDescription = serde_json::from_str(&json)
        .map_err(|e| ModelError::new(ModelErrorKind::Deserialization(e)))?;

    let name = options.model.as_deref().unwrap_or(find_max::MODEL_NAME);
    let selected = model(name)?;
    debug!(model = name, "running prediction");

    let cost = selected.predict(&hardware)?;

    if options.json {
        let prediction = Prediction {
            model: name.to_owned(),
            formula: cost.to_string(),
            cost,
        };
        serde_json::to_writer_pretty(&mut output, &prediction)
            .map_err(|e| ModelError::new(ModelErrorKind::Serialization(e)))?;
        writeln!(output)?;
    } else {
        writeln!(output, "Model:   {name}")?;
        writeln!(output, "Kernel:  {}", selected.kernel())?;
        writeln!(output, "Target:  {}", selected.target())?;
        writeln!(output, "Cost:    {cost}")?;
    }

    Ok(())
}

/// Convenience function to predict from a JSON reader.
///
/// Use [`run`] for the standard read-predict-write workflow. This function
/// is useful when you need to inspect the expression programmatically.
pub fn predict_from_reader(
    input: impl Read,
    model_name: &str,
) -> Result<CostExpr, ModelError> {
    let hardware = HardwareDescription::from_reader(input)
        .map_err(|e| ModelError::new(ModelErrorKind::Deserialization(e)))?;
    model(model_name)?.predict(&hardware)
}
