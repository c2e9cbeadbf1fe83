//! Operações atômicas

use core::sync::atomic::{AtomicU32, AtomicU64, Ordering};

/// Contador de referências lock-free que nunca dá a volta.
///
/// Cada operação é linearizável por contador. `inc` e `dec` usam CAS em vez
/// de `fetch_add`/`fetch_sub`: um wrap para 0 liberaria um veto ainda ativo,
/// um wrap para `u32::MAX` seria visto por outra CPU como contagem positiva.
pub struct RefCount(AtomicU32);

impl RefCount {
    pub const fn new() -> Self {
        Self(AtomicU32::new(0))
    }

    #[cfg(test)]
    pub(crate) const fn with_count(count: u32) -> Self {
        Self(AtomicU32::new(count))
    }

    #[inline]
    pub fn get(&self) -> u32 {
        self.0.load(Ordering::Acquire)
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.get() == 0
    }

    /// Incrementa; retorna valor anterior.
    ///
    /// Em `u32::MAX` a contagem fica parada (o veto continua ativo): debug
    /// aborta, release registra `kerror!` e segue.
    #[inline]
    pub fn inc(&self) -> u32 {
        match self
            .0
            .fetch_update(Ordering::AcqRel, Ordering::Acquire, |count| {
                count.checked_add(1)
            }) {
            Ok(previous) => previous,
            Err(saturated) => {
                crate::kerror!("(SYNC) RefCount saturado em ", saturated);
                debug_assert!(false, "reference count overflow");
                saturated
            }
        }
    }

    /// Decrementa se positivo.
    ///
    /// Retorna `Some(anterior)` ou `None` se a contagem já era zero
    /// (nada é alterado nesse caso).
    #[inline]
    pub fn dec(&self) -> Option<u32> {
        self.0
            .fetch_update(Ordering::AcqRel, Ordering::Acquire, |count| {
                count.checked_sub(1)
            })
            .ok()
    }
}

impl Default for RefCount {
    fn default() -> Self {
        Self::new()
    }
}

/// Contador atômico monotônico (estatísticas)
pub struct AtomicCounter(AtomicU64);

impl AtomicCounter {
    pub const fn new(value: u64) -> Self {
        Self(AtomicU64::new(value))
    }

    pub fn get(&self) -> u64 {
        self.0.load(Ordering::Relaxed)
    }

    pub fn inc(&self) -> u64 {
        self.0.fetch_add(1, Ordering::Relaxed)
    }

    pub fn reset(&self) {
        self.0.store(0, Ordering::Relaxed);
    }
}
