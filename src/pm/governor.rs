//! Arquivo: pm/governor.rs
//!
//! Propósito: Ponto de entrada do idle loop.
//! O scheduler calcula a previsão de ociosidade e chama `select`; o governor
//! delega à política escolhida no build e contabiliza o resultado.
//!
//! Detalhes de Implementação:
//! - Genérico sobre `P: PolicyEngine`: uma variante por binário, sem dispatch
//!   dinâmico.
//! - Contadores atômicos Relaxed (só estatística, sem ordem entre CPUs).
//!
//! ```ignore
//! static LOCKS: StateLocks = StateLocks::new();
//! let governor = IdleGovernor::new(DefaultPolicy::new(&CATALOG, &LOCKS));
//!
//! loop {
//!     let forecast = IdleForecast::from_raw(next_timeout_ticks());
//!     match governor.select(cpu, forecast) {
//!         Some(state) => platform_enter(state),
//!         None => cpu_relax(),
//!     }
//! }
//! ```

use crate::core::time::IdleForecast;
use crate::sync::AtomicCounter;

use super::catalog::CpuId;
use super::policy::PolicyEngine;
use super::state::{SleepState, SleepStateKind};

/// Estatísticas de decisão do idle loop.
pub struct GovernorStats {
    selections: [AtomicCounter; SleepStateKind::COUNT],
    no_sleep: AtomicCounter,
}

impl GovernorStats {
    pub const fn new() -> Self {
        const ZERO: AtomicCounter = AtomicCounter::new(0);
        Self {
            selections: [ZERO; SleepStateKind::COUNT],
            no_sleep: ZERO,
        }
    }

    #[inline]
    fn record(&self, outcome: Option<&SleepState>) {
        match outcome {
            Some(state) => {
                self.selections[state.kind.index()].inc();
            }
            None => {
                self.no_sleep.inc();
            }
        }
    }

    /// Quantas vezes `kind` foi escolhido.
    pub fn selections(&self, kind: SleepStateKind) -> u64 {
        self.selections[kind.index()].get()
    }

    /// Quantas vezes a decisão foi "não dormir".
    pub fn no_sleep(&self) -> u64 {
        self.no_sleep.get()
    }

    /// Total de decisões.
    pub fn total(&self) -> u64 {
        self.selections.iter().map(AtomicCounter::get).sum::<u64>() + self.no_sleep.get()
    }

    pub fn reset(&self) {
        for counter in self.selections.iter() {
            counter.reset();
        }
        self.no_sleep.reset();
    }

    /// Imprime estatísticas no log
    pub fn dump(&self) {
        crate::kinfo!("--- Estatísticas do Idle Governor ---");
        for kind in SleepStateKind::ALL {
            let count = self.selections(kind);
            if count != 0 {
                crate::kinfo_dec!(kind.name(), " selecionado: ", count);
            }
        }
        crate::kinfo_dec!("Sem sleep:       ", self.no_sleep());
        crate::kinfo!("--------------------");
    }
}

impl Default for GovernorStats {
    fn default() -> Self {
        Self::new()
    }
}

/// Fachada do idle loop sobre a política ativa.
pub struct IdleGovernor<P: PolicyEngine> {
    policy: P,
    stats: GovernorStats,
}

impl<P: PolicyEngine> IdleGovernor<P> {
    pub const fn new(policy: P) -> Self {
        Self {
            policy,
            stats: GovernorStats::new(),
        }
    }

    /// Decide o estado para `cpu`. `None` = continuar rodando.
    #[inline]
    pub fn select(&self, cpu: CpuId, forecast: IdleForecast) -> Option<&SleepState> {
        let next = self.policy.next_state(cpu, forecast);
        self.stats.record(next);
        next
    }

    /// Variante que recebe o valor bruto do scheduler (`TICKS_FOREVER` = -1).
    #[inline]
    pub fn select_raw(&self, cpu: CpuId, ticks: i32) -> Option<&SleepState> {
        self.select(cpu, IdleForecast::from_raw(ticks))
    }

    pub fn policy(&self) -> &P {
        &self.policy
    }

    pub fn stats(&self) -> &GovernorStats {
        &self.stats
    }
}
