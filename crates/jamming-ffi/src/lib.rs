// ─────────────────────────────────────────────────────────────────────
// Jamming Kernel — PyO3 FFI Bindings
// License: GNU AGPL v3
// ─────────────────────────────────────────────────────────────────────
// Note: #[deny(unsafe_code)] not applied — PyO3 proc macros generate
// unsafe blocks internally. All hand-written code in this crate is safe.
//! Python-callable parameter sets, name formatters, and order-parameter
//! extraction for the jamming analysis scripts.
//!
//! Parameter classes behave like the argument namespaces the scripts
//! already use: construct with defaults, then assign attributes.
//!
//! Install: `pip install -e crates/jamming-ffi` (requires maturin).
//!
//! Usage from Python:
//! ```python
//! from jamming_kernel import AnalysisParams, network_prefix, history2op
//!
//! param = AnalysisParams()
//! param.network_seed = -1
//! network_prefix(param)          # 'N10000L25000G2.2'
//! mean, sem = history2op(raw, param)
//! ```

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use jamming_analysis::history_to_op;
use jamming_naming as naming;
use jamming_types::{AnalysisParams, JammingError, RunParams};

fn to_py_err(e: JammingError) -> PyErr {
    PyValueError::new_err(e.to_string())
}

// ─── PyRunParams ────────────────────────────────────────────────────

/// Python-visible read-path parameter set.
#[pyclass(name = "RunParams", get_all, set_all)]
#[derive(Clone)]
struct PyRunParams {
    network_size: u32,
    link_size: u64,
    degree_exponent: f64,
    network_seed: i64,
    strategy: f64,
    new_packet: u32,
    max_iteration: u32,
    dynamics_seed: i64,
}

impl From<RunParams> for PyRunParams {
    fn from(p: RunParams) -> Self {
        Self {
            network_size: p.network_size,
            link_size: p.link_size,
            degree_exponent: p.degree_exponent,
            network_seed: p.network_seed,
            strategy: p.strategy,
            new_packet: p.new_packet,
            max_iteration: p.max_iteration,
            dynamics_seed: p.dynamics_seed,
        }
    }
}

impl From<&PyRunParams> for RunParams {
    fn from(p: &PyRunParams) -> Self {
        Self {
            network_size: p.network_size,
            link_size: p.link_size,
            degree_exponent: p.degree_exponent,
            network_seed: p.network_seed,
            strategy: p.strategy,
            new_packet: p.new_packet,
            max_iteration: p.max_iteration,
            dynamics_seed: p.dynamics_seed,
        }
    }
}

#[pymethods]
impl PyRunParams {
    #[new]
    fn new() -> Self {
        RunParams::default().into()
    }

    /// Construct from a JSON object naming every field.
    #[staticmethod]
    fn from_json(json: &str) -> PyResult<Self> {
        RunParams::from_json(json).map(Into::into).map_err(to_py_err)
    }

    fn to_json(&self) -> PyResult<String> {
        RunParams::from(self).to_json().map_err(to_py_err)
    }

    fn validate(&self) -> PyResult<()> {
        RunParams::from(self).validate().map_err(to_py_err)
    }

    fn __repr__(&self) -> String {
        let p = RunParams::from(self);
        format!(
            "RunParams({}, {})",
            naming::network_name(&p),
            naming::dynamics_name(&p)
        )
    }
}

// ─── PyAnalysisParams ───────────────────────────────────────────────

/// Python-visible analysis parameter set.
#[pyclass(name = "AnalysisParams", get_all, set_all)]
#[derive(Clone)]
struct PyAnalysisParams {
    network_size: u32,
    link_size: u64,
    degree_exponent: f64,
    network_seed: i64,
    strategy: f64,
    packet: u32,
    max_iteration: u32,
    dynamics_seed: i64,
    steady: usize,
    time_window: usize,
}

impl From<AnalysisParams> for PyAnalysisParams {
    fn from(p: AnalysisParams) -> Self {
        Self {
            network_size: p.network_size,
            link_size: p.link_size,
            degree_exponent: p.degree_exponent,
            network_seed: p.network_seed,
            strategy: p.strategy,
            packet: p.packet,
            max_iteration: p.max_iteration,
            dynamics_seed: p.dynamics_seed,
            steady: p.steady,
            time_window: p.time_window,
        }
    }
}

impl From<&PyAnalysisParams> for AnalysisParams {
    fn from(p: &PyAnalysisParams) -> Self {
        Self {
            network_size: p.network_size,
            link_size: p.link_size,
            degree_exponent: p.degree_exponent,
            network_seed: p.network_seed,
            strategy: p.strategy,
            packet: p.packet,
            max_iteration: p.max_iteration,
            dynamics_seed: p.dynamics_seed,
            steady: p.steady,
            time_window: p.time_window,
        }
    }
}

#[pymethods]
impl PyAnalysisParams {
    #[new]
    fn new() -> Self {
        AnalysisParams::default().into()
    }

    /// Construct from a JSON object naming every field.
    #[staticmethod]
    fn from_json(json: &str) -> PyResult<Self> {
        AnalysisParams::from_json(json)
            .map(Into::into)
            .map_err(to_py_err)
    }

    fn to_json(&self) -> PyResult<String> {
        AnalysisParams::from(self).to_json().map_err(to_py_err)
    }

    fn validate(&self) -> PyResult<()> {
        AnalysisParams::from(self).validate().map_err(to_py_err)
    }

    /// Near-critical packet loads for this network and strategy.
    fn near_critical_packets(&self) -> Vec<u32> {
        AnalysisParams::from(self).near_critical_packets()
    }

    /// Copy reconfigured for `packet`, with the matching horizon.
    fn for_packet(&self, packet: u32) -> Self {
        AnalysisParams::from(self).for_packet(packet).into()
    }

    fn __repr__(&self) -> String {
        let p = AnalysisParams::from(self);
        format!(
            "AnalysisParams({}, {}, steady={}, time_window={})",
            naming::network_prefix(&p),
            naming::dynamics_prefix(&p),
            p.steady,
            p.time_window
        )
    }
}

// ─── Name formatters ────────────────────────────────────────────────

#[pyfunction]
fn network_name(param: PyRef<'_, PyRunParams>) -> String {
    naming::network_name(&RunParams::from(&*param))
}

#[pyfunction]
fn dynamics_name(param: PyRef<'_, PyRunParams>) -> String {
    naming::dynamics_name(&RunParams::from(&*param))
}

#[pyfunction]
fn network_prefix(param: PyRef<'_, PyAnalysisParams>) -> String {
    naming::network_prefix(&AnalysisParams::from(&*param))
}

#[pyfunction]
fn dynamics_prefix(param: PyRef<'_, PyAnalysisParams>) -> String {
    naming::dynamics_prefix(&AnalysisParams::from(&*param))
}

#[pyfunction]
fn dynamics_prefix_wo_packet(param: PyRef<'_, PyAnalysisParams>) -> String {
    naming::dynamics_prefix_wo_packet(&AnalysisParams::from(&*param))
}

// ─── Order parameter ────────────────────────────────────────────────

/// `(mean, sem)` of the windowed order parameter of a cumulative history.
///
/// Raises `ValueError` for too-short histories, a single windowed
/// sample, or a zero window/packet divisor.
#[pyfunction]
fn history2op(raw: Vec<f64>, param: PyRef<'_, PyAnalysisParams>) -> PyResult<(f64, f64)> {
    history_to_op(&raw, &AnalysisParams::from(&*param))
        .map(|op| op.as_tuple())
        .map_err(to_py_err)
}

// ─── Module Registration ────────────────────────────────────────────

/// Jamming Kernel — naming helpers and order-parameter statistics.
///
/// - `RunParams`, `AnalysisParams` — parameter sets with defaults
/// - `network_name`, `dynamics_name` — run names
/// - `network_prefix`, `dynamics_prefix`, `dynamics_prefix_wo_packet` — result prefixes
/// - `history2op` — order parameter and its standard error
#[pymodule]
fn jamming_kernel(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyRunParams>()?;
    m.add_class::<PyAnalysisParams>()?;
    m.add_function(wrap_pyfunction!(network_name, m)?)?;
    m.add_function(wrap_pyfunction!(dynamics_name, m)?)?;
    m.add_function(wrap_pyfunction!(network_prefix, m)?)?;
    m.add_function(wrap_pyfunction!(dynamics_prefix, m)?)?;
    m.add_function(wrap_pyfunction!(dynamics_prefix_wo_packet, m)?)?;
    m.add_function(wrap_pyfunction!(history2op, m)?)?;
    Ok(())
}
