//! Política fixa: sempre devolve o mesmo estado, ignorando CPU, previsão,
//! vetos e catálogo. Útil no bring-up de uma board (forçar SoftOff ou
//! RuntimeIdle) e como exemplo mínimo de política própria.

use crate::core::time::IdleForecast;
use crate::pm::catalog::CpuId;
use crate::pm::state::SleepState;

use super::PolicyEngine;

pub struct FixedPolicy {
    state: SleepState,
}

impl FixedPolicy {
    pub const fn new(state: SleepState) -> Self {
        Self { state }
    }

    pub const fn state(&self) -> &SleepState {
        &self.state
    }
}

impl PolicyEngine for FixedPolicy {
    #[inline]
    fn next_state(&self, _cpu: CpuId, _forecast: IdleForecast) -> Option<&SleepState> {
        Some(&self.state)
    }
}
