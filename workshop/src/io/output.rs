use serde::{Deserialize, Serialize};

use cutlayout::io::ext_repr::ExtWorkshopSnapshot;

use crate::config::WorkshopConfig;
use crate::io::job::ExtJob;

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct WorkshopOutput {
    pub job: ExtJob,
    pub snapshot: ExtWorkshopSnapshot,
    pub summary: RunSummary,
    pub config: WorkshopConfig,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct RunSummary {
    /// Cuts placed during this run
    pub n_placed: usize,
    /// Cut requests that were invalid or did not fit
    pub n_rejected: usize,
    /// Fraction of the base taken up by all cuts on it
    pub density: f64,
    pub n_probes: usize,
}
