//! Forge PM Library.
//!
//! Política de seleção de sleep states do idle loop do Forge.
//! Recebe uma previsão de ociosidade por CPU e devolve o estado mais profundo
//! permitido, respeitando vetos de subsistemas.

#![cfg_attr(not(test), no_std)]

// --- Infraestrutura ---
pub mod core; // Logging, console, base de tempo
pub mod klib; // Framework de self-test
pub mod sync; // Atômicos lock-free

// --- Power Management ---
pub mod pm; // Catálogo, vetos, políticas, governor

pub use crate::core::time::{IdleForecast, TickRate, TICKS_FOREVER};
pub use crate::pm::{
    CpuId, FixedPolicy, IdleGovernor, LatencyRequests, PmError, PolicyEngine, SleepState,
    SleepStateKind, StateCatalog, StateLocks, StaticCatalog,
};
#[cfg(feature = "policy_default")]
pub use crate::pm::DefaultPolicy;
