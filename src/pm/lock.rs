//! Arquivo: pm/lock.rs
//!
//! Propósito: Vetos de sleep states (state locks).
//! Subsistemas que não toleram um estado (ex: periférico no meio de uma
//! transferência DMA proibindo SuspendToRam) fazem `acquire` do kind e
//! `release` quando terminam. Vários subsistemas podem vetar o mesmo estado
//! ao mesmo tempo sem se coordenar: cada kind tem um refcount.
//!
//! Detalhes de Implementação:
//! - Tabela fixa de `RefCount` (atômicos), sem lock e sem alocação.
//! - Um contador "kind inteiro" + `SUBSTATE_SLOTS` contadores por substate.
//! - Linearizável por contador; nenhuma ordem entre kinds diferentes.
//! - `release` sem `acquire`: assert em debug, satura em zero em release.
//!
//! A tabela é um handle explícito: o kernel hospedeiro coloca uma instância
//! num `static` e a entrega à política e aos drivers.
//!
//! ```ignore
//! static LOCKS: StateLocks = StateLocks::new();
//!
//! LOCKS.acquire(SleepStateKind::SuspendToRam);
//! start_dma();
//! // ...
//! LOCKS.release(SleepStateKind::SuspendToRam);
//! ```

use crate::sync::RefCount;

use super::config::SUBSTATE_SLOTS;
use super::state::{LockedStates, SleepState, SleepStateKind};

/// Contadores de um kind: `[0]` é o kind inteiro, `[1 + id]` o substate `id`.
struct KindLocks {
    counts: [RefCount; SUBSTATE_SLOTS + 1],
}

impl KindLocks {
    const fn new() -> Self {
        // RefCount não é Copy: inicialização via const item.
        const ZERO: RefCount = RefCount::new();
        Self {
            counts: [ZERO; SUBSTATE_SLOTS + 1],
        }
    }

    #[inline]
    fn slot(substate_id: Option<u8>) -> usize {
        match substate_id {
            Some(id) if (id as usize) < SUBSTATE_SLOTS => 1 + id as usize,
            // Ids sem slot próprio vetam o kind inteiro.
            _ => 0,
        }
    }
}

/// Tabela de vetos compartilhada por todas as CPUs e subsistemas.
pub struct StateLocks {
    kinds: [KindLocks; SleepStateKind::COUNT],
}

impl StateLocks {
    pub const fn new() -> Self {
        const EMPTY: KindLocks = KindLocks::new();
        Self {
            kinds: [EMPTY; SleepStateKind::COUNT],
        }
    }

    #[inline]
    fn counter(&self, kind: SleepStateKind, substate_id: Option<u8>) -> &RefCount {
        &self.kinds[kind.index()].counts[KindLocks::slot(substate_id)]
    }

    // =========================================================================
    // KIND INTEIRO
    // =========================================================================

    /// Veta `kind` (todos os substates). Sempre tem sucesso.
    #[inline]
    pub fn acquire(&self, kind: SleepStateKind) {
        self.acquire_slot(kind, None);
    }

    /// Remove um veto de `kind` colocado por `acquire`.
    #[inline]
    pub fn release(&self, kind: SleepStateKind) {
        self.release_slot(kind, None);
    }

    /// `true` se há ao menos um veto de `kind` inteiro.
    #[inline]
    pub fn is_locked(&self, kind: SleepStateKind) -> bool {
        !self.counter(kind, None).is_zero()
    }

    /// Contagem atual de vetos do kind inteiro (diagnóstico).
    #[inline]
    pub fn count(&self, kind: SleepStateKind) -> u32 {
        self.counter(kind, None).get()
    }

    // =========================================================================
    // SUBSTATES
    // =========================================================================

    /// Veta apenas a configuração `substate_id` de `kind`.
    #[inline]
    pub fn acquire_substate(&self, kind: SleepStateKind, substate_id: u8) {
        self.acquire_slot(kind, Some(substate_id));
    }

    #[inline]
    pub fn release_substate(&self, kind: SleepStateKind, substate_id: u8) {
        self.release_slot(kind, Some(substate_id));
    }

    /// `true` se o substate está vetado, diretamente ou pelo kind inteiro.
    #[inline]
    pub fn is_substate_locked(&self, kind: SleepStateKind, substate_id: u8) -> bool {
        self.is_locked(kind) || !self.counter(kind, Some(substate_id)).is_zero()
    }

    /// Consulta usada pelo avaliador para um candidato do catálogo.
    #[inline]
    pub fn is_state_locked(&self, state: &SleepState) -> bool {
        self.is_substate_locked(state.kind, state.substate_id)
    }

    // =========================================================================
    // DIAGNÓSTICO / RAII
    // =========================================================================

    /// Kinds com algum veto ativo (kind inteiro ou qualquer substate).
    pub fn snapshot(&self) -> LockedStates {
        let mut locked = LockedStates::empty();
        for kind in SleepStateKind::ALL {
            let any = self.kinds[kind.index()]
                .counts
                .iter()
                .any(|count| !count.is_zero());
            if any {
                locked |= kind.flag();
            }
        }
        locked
    }

    /// Veta `kind` até o guard sair de escopo.
    pub fn lock_guard(&self, kind: SleepStateKind) -> StateLockGuard<'_> {
        self.acquire(kind);
        StateLockGuard { locks: self, kind }
    }

    fn acquire_slot(&self, kind: SleepStateKind, substate_id: Option<u8>) {
        let previous = self.counter(kind, substate_id).inc();
        if previous == 0 {
            crate::ktrace!("(PM) Veto ativado, kind=", kind.index());
        }
    }

    fn release_slot(&self, kind: SleepStateKind, substate_id: Option<u8>) {
        match self.counter(kind, substate_id).dec() {
            Some(1) => crate::ktrace!("(PM) Veto removido, kind=", kind.index()),
            Some(_) => {}
            None => {
                crate::kerror!("(PM) release sem acquire, kind=", kind.index());
                debug_assert!(false, "state lock released more times than acquired");
            }
        }
    }
}

impl Default for StateLocks {
    fn default() -> Self {
        Self::new()
    }
}

/// Veto com escopo: libera `kind` no drop.
pub struct StateLockGuard<'a> {
    locks: &'a StateLocks,
    kind: SleepStateKind,
}

impl StateLockGuard<'_> {
    pub fn kind(&self) -> SleepStateKind {
        self.kind
    }
}

impl Drop for StateLockGuard<'_> {
    fn drop(&mut self) {
        self.locks.release(self.kind);
    }
}
