// ─────────────────────────────────────────────────────────────────────
// Jamming Kernel — Packet Sweep
// ─────────────────────────────────────────────────────────────────────
//! Order parameter across a list of packet loads.
//!
//! The generator runs one history per packet load on a shared network;
//! each history is reduced with the parameter set reconfigured for its
//! load, so both the normaliser and the result prefix follow the packet.

use serde::{Deserialize, Serialize};

use jamming_naming::dynamics_prefix;
use jamming_types::{AnalysisParams, JammingResult};

use crate::order_param::history_to_op;

/// One point of an order-parameter curve.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SweepPoint {
    pub packet: u32,
    /// Dynamics prefix of the run the point came from.
    pub prefix: String,
    pub mean: f64,
    pub sem: f64,
}

/// Reduce `(packet, history)` pairs to order-parameter points.
///
/// Histories may hold any sample type [`history_to_op`] accepts, such as
/// the generator's `u32` packet counts. Stops at the first history that
/// cannot be reduced.
pub fn sweep<I, H, T>(histories: I, base: &AnalysisParams) -> JammingResult<Vec<SweepPoint>>
where
    I: IntoIterator<Item = (u32, H)>,
    H: AsRef<[T]>,
    T: Copy + Into<f64>,
{
    let mut points = Vec::new();
    for (packet, history) in histories {
        let param = base.for_packet(packet);
        let op = history_to_op(history.as_ref(), &param)?;
        points.push(SweepPoint {
            packet,
            prefix: dynamics_prefix(&param),
            mean: op.mean,
            sem: op.sem,
        });
    }
    log::info!("sweep: reduced {} packet loads", points.len());
    Ok(points)
}
