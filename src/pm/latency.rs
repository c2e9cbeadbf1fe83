//! Arquivo: pm/latency.rs
//!
//! Propósito: Requisições de latência máxima de wake-up.
//! Um subsistema com prazo de resposta (ex: áudio, rádio) registra quantos µs
//! tolera para a CPU voltar a executar. O avaliador padrão descarta estados
//! cuja `exit_latency_us` excede o menor valor registrado.
//!
//! Detalhes de Implementação:
//! - `MAX_LATENCY_REQUESTS` slots atômicos; `FREE` marca slot livre.
//! - Slot é reivindicado por CAS; atualizar/remover é só um store.
//! - `effective_us` percorre os slots: custo fixo, sem lock.

use core::sync::atomic::{AtomicU32, Ordering};

use super::config::MAX_LATENCY_REQUESTS;
use super::error::PmError;

const FREE: u32 = u32::MAX;

/// Tabela de requisições de latência ativas.
pub struct LatencyRequests {
    slots: [AtomicU32; MAX_LATENCY_REQUESTS],
}

impl LatencyRequests {
    pub const fn new() -> Self {
        const EMPTY: AtomicU32 = AtomicU32::new(FREE);
        Self {
            slots: [EMPTY; MAX_LATENCY_REQUESTS],
        }
    }

    /// Registra uma latência máxima tolerada (µs).
    ///
    /// O valor `u32::MAX` é reservado e vira `u32::MAX - 1`
    /// (na prática: sem restrição).
    pub fn add(&self, max_latency_us: u32) -> Result<LatencyRequest<'_>, PmError> {
        let value = clamp(max_latency_us);
        for (slot, cell) in self.slots.iter().enumerate() {
            if cell
                .compare_exchange(FREE, value, Ordering::AcqRel, Ordering::Relaxed)
                .is_ok()
            {
                crate::kdebug!("(PM) Requisição de latência (us)=", value);
                return Ok(LatencyRequest {
                    owner: self,
                    slot,
                });
            }
        }
        crate::kwarn!("(PM) Sem slot para requisição de latência (us)=", value);
        Err(PmError::NoFreeSlot)
    }

    /// Menor latência requisitada, ou `None` se não há requisições.
    pub fn effective_us(&self) -> Option<u32> {
        let min = self
            .slots
            .iter()
            .map(|cell| cell.load(Ordering::Acquire))
            .min()
            .unwrap_or(FREE);
        if min == FREE {
            None
        } else {
            Some(min)
        }
    }

    /// `true` se um estado com essa latência de saída respeita as requisições.
    #[inline]
    pub fn allows(&self, exit_latency_us: u32) -> bool {
        match self.effective_us() {
            Some(budget) => exit_latency_us <= budget,
            None => true,
        }
    }

    /// Requisições ativas (diagnóstico).
    pub fn active(&self) -> usize {
        self.slots
            .iter()
            .filter(|cell| cell.load(Ordering::Relaxed) != FREE)
            .count()
    }
}

impl Default for LatencyRequests {
    fn default() -> Self {
        Self::new()
    }
}

#[inline]
fn clamp(us: u32) -> u32 {
    us.min(FREE - 1)
}

/// Requisição registrada. Removida no drop.
pub struct LatencyRequest<'a> {
    owner: &'a LatencyRequests,
    slot: usize,
}

impl LatencyRequest<'_> {
    /// Troca o valor tolerado sem perder o slot.
    pub fn update(&self, max_latency_us: u32) {
        self.owner.slots[self.slot].store(clamp(max_latency_us), Ordering::Release);
    }

    pub fn value_us(&self) -> u32 {
        self.owner.slots[self.slot].load(Ordering::Acquire)
    }

    /// Remove explicitamente (equivale ao drop).
    pub fn remove(self) {}
}

impl Drop for LatencyRequest<'_> {
    fn drop(&mut self) {
        self.owner.slots[self.slot].store(FREE, Ordering::Release);
    }
}
