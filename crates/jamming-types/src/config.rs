// ─────────────────────────────────────────────────────────────────────
// Jamming Kernel — Parameter Sets
// ─────────────────────────────────────────────────────────────────────
//! Simulation parameter records and their canonical defaults.
//!
//! Two records exist. [`RunParams`] names the raw generator output on the
//! read path; [`AnalysisParams`] names aggregated results and carries the
//! observation settings used by the order-parameter extractor. Both are
//! plain values: `Default` returns a fresh copy, and callers override
//! fields with struct update syntax or the `with_*` builders.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::critical;
use crate::error::{JammingError, JammingResult};

/// Seed value marking results that are independent of (aggregated over)
/// the network seed. Names built from such records carry no seed suffix.
pub const SEED_INDEPENDENT: i64 = -1;

/// Base simulation horizon of the packet generator.
const BASE_MAX_ITERATION: u32 = 10_000;

/// Horizon multiplier applied near the jamming transition.
const NEAR_CRITICAL_FACTOR: u32 = 10;

/// Parameters naming one generator run on the read path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RunParams {
    /// Number of nodes.
    pub network_size: u32,
    /// Number of links.
    pub link_size: u64,
    /// Power-law exponent of the degree distribution.
    pub degree_exponent: f64,
    /// Network generator seed.
    pub network_seed: i64,
    /// Routing weight between shortest path (1.0) and queue length (0.0).
    pub strategy: f64,
    /// Packets injected per iteration.
    pub new_packet: u32,
    /// Simulation horizon.
    pub max_iteration: u32,
    /// Dynamics seed.
    pub dynamics_seed: i64,
}

impl Default for RunParams {
    fn default() -> Self {
        Self {
            network_size: 10_000,
            link_size: 200_000,
            degree_exponent: 2.2,
            network_seed: 0,
            strategy: 1.0,
            new_packet: 8,
            max_iteration: 200,
            dynamics_seed: 0,
        }
    }
}

impl RunParams {
    /// Field names in declaration order.
    pub const FIELDS: &'static [&'static str] = &[
        "network_size",
        "link_size",
        "degree_exponent",
        "network_seed",
        "strategy",
        "new_packet",
        "max_iteration",
        "dynamics_seed",
    ];

    pub fn with_network_seed(mut self, seed: i64) -> Self {
        self.network_seed = seed;
        self
    }

    pub fn with_strategy(mut self, strategy: f64) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn with_new_packet(mut self, new_packet: u32) -> Self {
        self.new_packet = new_packet;
        self
    }

    pub fn with_max_iteration(mut self, max_iteration: u32) -> Self {
        self.max_iteration = max_iteration;
        self
    }

    pub fn with_dynamics_seed(mut self, seed: i64) -> Self {
        self.dynamics_seed = seed;
        self
    }

    /// Validate parameter ranges.
    pub fn validate(&self) -> JammingResult<()> {
        check_network(self.network_size, self.link_size, self.degree_exponent)?;
        check_seed("network_seed", self.network_seed)?;
        check_dynamics(self.strategy, "new_packet", self.new_packet, self.max_iteration)?;
        check_seed("dynamics_seed", self.dynamics_seed)
    }

    /// Load from a JSON object that must name every field.
    pub fn from_json(json: &str) -> JammingResult<Self> {
        from_json_strict(json, Self::FIELDS)
    }

    /// Load defaults overlaid with the fields present in a JSON object.
    pub fn with_overrides_json(json: &str) -> JammingResult<Self> {
        overlay_json(&Self::default(), json)
    }

    pub fn to_json(&self) -> JammingResult<String> {
        serde_json::to_string(self)
            .map_err(|e| JammingError::Config(format!("JSON encode error: {e}")))
    }
}

/// Parameters naming aggregated results and driving the order-parameter
/// extractor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AnalysisParams {
    /// Number of nodes.
    pub network_size: u32,
    /// Number of links.
    pub link_size: u64,
    /// Power-law exponent of the degree distribution.
    pub degree_exponent: f64,
    /// Network generator seed; [`SEED_INDEPENDENT`] for aggregated results.
    pub network_seed: i64,
    /// Routing weight between shortest path (1.0) and queue length (0.0).
    pub strategy: f64,
    /// Packets injected per iteration. Also the load normaliser.
    pub packet: u32,
    /// Simulation horizon.
    pub max_iteration: u32,
    /// Dynamics seed.
    pub dynamics_seed: i64,
    /// Leading samples discarded as transient.
    pub steady: usize,
    /// Differencing lag.
    pub time_window: usize,
}

impl Default for AnalysisParams {
    fn default() -> Self {
        Self {
            network_size: 10_000,
            link_size: 25_000,
            degree_exponent: 2.2,
            network_seed: 0,
            strategy: 0.85,
            packet: 10,
            max_iteration: 10_000,
            dynamics_seed: 0,
            steady: 1_000,
            time_window: 10,
        }
    }
}

impl AnalysisParams {
    /// Field names in declaration order.
    pub const FIELDS: &'static [&'static str] = &[
        "network_size",
        "link_size",
        "degree_exponent",
        "network_seed",
        "strategy",
        "packet",
        "max_iteration",
        "dynamics_seed",
        "steady",
        "time_window",
    ];

    pub fn with_network_seed(mut self, seed: i64) -> Self {
        self.network_seed = seed;
        self
    }

    pub fn with_strategy(mut self, strategy: f64) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn with_packet(mut self, packet: u32) -> Self {
        self.packet = packet;
        self
    }

    pub fn with_max_iteration(mut self, max_iteration: u32) -> Self {
        self.max_iteration = max_iteration;
        self
    }

    pub fn with_dynamics_seed(mut self, seed: i64) -> Self {
        self.dynamics_seed = seed;
        self
    }

    /// Set the transient cut and differencing lag together.
    pub fn with_window(mut self, steady: usize, time_window: usize) -> Self {
        self.steady = steady;
        self.time_window = time_window;
        self
    }

    pub fn is_seed_independent(&self) -> bool {
        self.network_seed == SEED_INDEPENDENT
    }

    /// Packet loads near the jamming transition for this network and
    /// strategy. Empty when the configuration has no calibrated range.
    pub fn near_critical_packets(&self) -> Vec<u32> {
        critical::near_critical_packets(self.network_size, self.link_size, self.strategy)
    }

    /// Horizon the generator uses for `packet`: the base horizon, ten times
    /// longer inside the near-critical range.
    pub fn max_iteration_for_packet(&self, packet: u32) -> u32 {
        if self.near_critical_packets().contains(&packet) {
            BASE_MAX_ITERATION * NEAR_CRITICAL_FACTOR
        } else {
            BASE_MAX_ITERATION
        }
    }

    /// Copy reconfigured for another packet load, with the matching horizon.
    pub fn for_packet(&self, packet: u32) -> Self {
        Self {
            packet,
            max_iteration: self.max_iteration_for_packet(packet),
            ..self.clone()
        }
    }

    /// Validate parameter ranges.
    pub fn validate(&self) -> JammingResult<()> {
        check_network(self.network_size, self.link_size, self.degree_exponent)?;
        check_seed("network_seed", self.network_seed)?;
        check_dynamics(self.strategy, "packet", self.packet, self.max_iteration)?;
        check_seed("dynamics_seed", self.dynamics_seed)?;
        if self.time_window == 0 {
            return Err(JammingError::Config(
                "time_window must be >= 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Load from a JSON object that must name every field.
    pub fn from_json(json: &str) -> JammingResult<Self> {
        from_json_strict(json, Self::FIELDS)
    }

    /// Load defaults overlaid with the fields present in a JSON object.
    pub fn with_overrides_json(json: &str) -> JammingResult<Self> {
        overlay_json(&Self::default(), json)
    }

    pub fn to_json(&self) -> JammingResult<String> {
        serde_json::to_string(self)
            .map_err(|e| JammingError::Config(format!("JSON encode error: {e}")))
    }
}

fn check_network(network_size: u32, link_size: u64, degree_exponent: f64) -> JammingResult<()> {
    if network_size == 0 {
        return Err(JammingError::Config("network_size must be >= 1".to_string()));
    }
    if link_size == 0 {
        return Err(JammingError::Config("link_size must be >= 1".to_string()));
    }
    if !degree_exponent.is_finite() {
        return Err(JammingError::Config(format!(
            "degree_exponent must be finite, got {degree_exponent}"
        )));
    }
    Ok(())
}

fn check_dynamics(
    strategy: f64,
    load_name: &str,
    load: u32,
    max_iteration: u32,
) -> JammingResult<()> {
    if !(0.0..=1.0).contains(&strategy) {
        return Err(JammingError::Config(format!(
            "strategy must be in [0, 1], got {strategy}"
        )));
    }
    if load == 0 {
        return Err(JammingError::Config(format!("{load_name} must be >= 1")));
    }
    if max_iteration == 0 {
        return Err(JammingError::Config("max_iteration must be >= 1".to_string()));
    }
    Ok(())
}

fn check_seed(name: &str, seed: i64) -> JammingResult<()> {
    if seed < SEED_INDEPENDENT {
        return Err(JammingError::Config(format!(
            "{name} must be >= {SEED_INDEPENDENT}, got {seed}"
        )));
    }
    Ok(())
}

fn parse_object(json: &str) -> JammingResult<Map<String, Value>> {
    match serde_json::from_str(json) {
        Ok(Value::Object(map)) => Ok(map),
        Ok(_) => Err(JammingError::Config(
            "parameter set must be a JSON object".to_string(),
        )),
        Err(e) => Err(JammingError::Config(format!("JSON parse error: {e}"))),
    }
}

fn decode<T: for<'de> Deserialize<'de>>(map: Map<String, Value>) -> JammingResult<T> {
    serde_json::from_value(Value::Object(map))
        .map_err(|e| JammingError::Config(format!("JSON decode error: {e}")))
}

fn from_json_strict<T: for<'de> Deserialize<'de>>(
    json: &str,
    fields: &[&str],
) -> JammingResult<T> {
    let map = parse_object(json)?;
    if let Some(missing) = fields.iter().find(|f| !map.contains_key(**f)) {
        return Err(JammingError::IncompleteParameter {
            field: (*missing).to_string(),
        });
    }
    decode(map)
}

fn overlay_json<T>(base: &T, json: &str) -> JammingResult<T>
where
    T: Serialize + for<'de> Deserialize<'de>,
{
    let overrides = parse_object(json)?;
    let mut merged = match serde_json::to_value(base) {
        Ok(Value::Object(map)) => map,
        Ok(_) => {
            return Err(JammingError::Config(
                "parameter set did not encode as an object".to_string(),
            ))
        }
        Err(e) => return Err(JammingError::Config(format!("JSON encode error: {e}"))),
    };
    for (key, value) in overrides {
        log::debug!("parameter override: {key} = {value}");
        merged.insert(key, value);
    }
    decode(merged)
}
