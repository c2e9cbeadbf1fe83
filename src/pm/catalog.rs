//! Arquivo: pm/catalog.rs
//!
//! Propósito: Contrato com a camada de configuração da board, que fornece
//! por CPU a lista ordenada de sleep states disponíveis.
//!
//! Invariante: cada lista está em ordem crescente de `min_residency_us`;
//! índice 0 é o mais raso, o último é o mais profundo. A política confia
//! nisso em runtime; `validate()` existe para o bring-up.

use super::config::MAX_CPUS;
use super::error::PmError;
use super::state::SleepState;

/// Identificador de CPU (índice pequeno).
pub type CpuId = u8;

/// Fonte somente-leitura dos estados de cada CPU.
pub trait StateCatalog {
    /// Estados da CPU, do mais raso ao mais profundo. Vazio se a CPU não
    /// tem estados (ou não existe).
    fn states(&self, cpu: CpuId) -> &[SleepState];

    /// Número de CPUs descritas.
    fn cpu_count(&self) -> usize;
}

/// Catálogo em memória estática, indexado pelo id da CPU.
///
/// # Exemplo
///
/// ```ignore
/// static CPU0: [SleepState; 2] = [
///     SleepState::new(SleepStateKind::RuntimeIdle, 100_000, 10_000),
///     SleepState::new(SleepStateKind::SuspendToRam, 1_000_000, 100_000),
/// ];
/// static CATALOG: StaticCatalog<'static> = StaticCatalog::new(&[&CPU0]);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct StaticCatalog<'a> {
    cpus: &'a [&'a [SleepState]],
}

impl<'a> StaticCatalog<'a> {
    pub const fn new(cpus: &'a [&'a [SleepState]]) -> Self {
        Self { cpus }
    }

    /// Número de CPUs descritas.
    #[inline]
    pub const fn cpu_count(&self) -> usize {
        self.cpus.len()
    }

    /// Estados de uma CPU que precisa existir no catálogo.
    pub fn cpu_states(&self, cpu: CpuId) -> Result<&'a [SleepState], PmError> {
        self.cpus
            .get(cpu as usize)
            .copied()
            .ok_or(PmError::CpuOutOfRange)
    }

    /// Verifica o invariante de ordenação de todas as CPUs.
    pub fn validate(&self) -> Result<(), PmError> {
        if self.cpus.len() > MAX_CPUS {
            crate::kerror!("(PM) Catálogo excede MAX_CPUS: ", self.cpus.len());
            return Err(PmError::TooManyCpus);
        }

        for (cpu, states) in self.cpus.iter().enumerate() {
            if !is_sorted(states) {
                crate::kerror!("(PM) Catálogo fora de ordem na CPU ", cpu);
                return Err(PmError::UnsortedCatalog);
            }
            for state in states.iter() {
                if state.min_residency_us < state.exit_latency_us {
                    // Permitido, mas geralmente indica erro de unidade no DT.
                    crate::kwarn!("(PM) min_residency < exit_latency na CPU ", cpu);
                }
            }
        }

        crate::kinfo_dec!("(PM) Catálogo validado, CPUs=", self.cpus.len());
        Ok(())
    }
}

impl StateCatalog for StaticCatalog<'_> {
    #[inline]
    fn states(&self, cpu: CpuId) -> &[SleepState] {
        self.cpus.get(cpu as usize).copied().unwrap_or(&[])
    }

    #[inline]
    fn cpu_count(&self) -> usize {
        StaticCatalog::cpu_count(self)
    }
}

/// Verifica ordem crescente (não estrita) de `min_residency_us`.
pub fn is_sorted(states: &[SleepState]) -> bool {
    states
        .windows(2)
        .all(|pair| pair[0].min_residency_us <= pair[1].min_residency_us)
}
