//! # Políticas de Seleção de Sleep State
//!
//! Uma política recebe a CPU e a previsão de ociosidade e devolve o estado a
//! entrar, ou `None` ("não dormir"). `None` é resultado normal e frequente.
//!
//! ## Variantes
//!
//! | Variante        | Feature          | Algoritmo                               |
//! |-----------------|------------------|-----------------------------------------|
//! | `DefaultPolicy` | `policy_default` | Mais profundo que qualifica e sem veto  |
//! | `FixedPolicy`   | sempre           | Sempre o mesmo estado (bring-up)        |
//! | própria         | -                | Qualquer `impl PolicyEngine` do kernel  |
//!
//! A escolha é de build: o `IdleGovernor` é genérico sobre a política, então
//! cada binário monomorfiza exatamente uma variante. Não há `dyn` aqui.

#[cfg(feature = "policy_default")]
pub mod default;
pub mod fixed;

#[cfg(feature = "policy_default")]
pub use default::DefaultPolicy;
pub use fixed::FixedPolicy;

use crate::core::time::IdleForecast;

use super::catalog::CpuId;
use super::state::SleepState;

/// Contrato de seleção chamado pelo idle loop.
///
/// Implementações NÃO podem bloquear nem alocar.
pub trait PolicyEngine {
    fn next_state(&self, cpu: CpuId, forecast: IdleForecast) -> Option<&SleepState>;
}

impl<P: PolicyEngine> PolicyEngine for &P {
    #[inline]
    fn next_state(&self, cpu: CpuId, forecast: IdleForecast) -> Option<&SleepState> {
        (**self).next_state(cpu, forecast)
    }
}
