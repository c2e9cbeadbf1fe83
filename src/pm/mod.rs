//! # Power Management: Seleção de Sleep State
//!
//! A cada entrada no idle loop, decide o estado de economia de energia mais
//! profundo que a CPU pode usar com segurança.
//!
//! ## Componentes
//!
//! | Módulo     | Papel                                              | Estado mutável   |
//! |------------|----------------------------------------------------|------------------|
//! | `state`    | Modelo: kinds, estados, snapshot de vetos          | Nenhum           |
//! | `catalog`  | Estados por CPU (fornecidos pela board)            | Nenhum           |
//! | `lock`     | Vetos refcounted por kind/substate                 | Atômicos         |
//! | `latency`  | Requisições de latência máxima de wake-up          | Atômicos         |
//! | `policy`   | Interface + avaliador padrão + política fixa       | Nenhum           |
//! | `governor` | Fachada do idle loop + estatísticas                | Contadores       |
//!
//! ## Fluxo
//!
//! ```text
//! idle loop ──► IdleGovernor::select(cpu, forecast)
//!                    │
//!                    ▼
//!               PolicyEngine::next_state ──► catálogo (leitura)
//!                    │                   └─► StateLocks::is_state_locked
//!                    ▼
//!               Some(estado) | None
//!
//! drivers ──► StateLocks::acquire / release   (a qualquer momento, qualquer CPU)
//! ```
//!
//! ## Regras
//!
//! - Nada bloqueia, dorme ou aloca.
//! - O catálogo é imutável após a configuração; os únicos dados mutáveis
//!   compartilhados são os contadores atômicos.

pub mod catalog;
pub mod config;
pub mod error;
pub mod governor;
pub mod latency;
pub mod lock;
pub mod policy;
pub mod state;

pub use catalog::{CpuId, StateCatalog, StaticCatalog};
pub use error::PmError;
pub use governor::{GovernorStats, IdleGovernor};
pub use latency::{LatencyRequest, LatencyRequests};
pub use lock::{StateLockGuard, StateLocks};
pub use policy::{FixedPolicy, PolicyEngine};
#[cfg(feature = "policy_default")]
pub use policy::DefaultPolicy;
pub use state::{LockedStates, SleepState, SleepStateKind};

// =============================================================================
// TESTS
// =============================================================================

#[cfg(any(test, feature = "self_test"))]
pub mod test;
