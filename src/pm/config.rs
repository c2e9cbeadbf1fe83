//! Constantes de configuração da política de PM.
//!
//! Tudo aqui dimensiona tabelas estáticas: nenhuma estrutura cresce em runtime.

use crate::core::time::TickRate;

/// Número máximo de CPUs descritas por um catálogo.
pub const MAX_CPUS: usize = 16;

/// Substates com contador de veto próprio, por kind.
/// Ids maiores são tratados como veto do kind inteiro.
pub const SUBSTATE_SLOTS: usize = 8;

/// Requisições simultâneas de latência máxima.
pub const MAX_LATENCY_REQUESTS: usize = 16;

/// Frequência do timer usada quando a board não informa outra.
pub const DEFAULT_TICK_RATE: TickRate = TickRate::hz(10_000);
