//! Arquivo: core/time/tick.rs
//!
//! Propósito: Conversões entre ticks do timer do sistema e microssegundos.
//! O idle loop entrega a previsão de ociosidade em ticks; o catálogo de
//! estados descreve custos em µs.
//!
//! Detalhes de Implementação:
//! - Toda conversão é feita em u64: `u32::MAX * 1_000_000` cabe com folga.
//! - `ticks_to_us` arredonda para baixo (nunca superestima a ociosidade).

/// Valor bruto de ticks que significa "ocioso indefinidamente".
pub const TICKS_FOREVER: i32 = -1;

const USEC_PER_SEC: u64 = 1_000_000;

/// Frequência do timer do sistema (ticks por segundo).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickRate {
    hz: u32,
}

impl TickRate {
    /// Cria uma taxa de ticks.
    ///
    /// # Panics
    ///
    /// Em tempo de compilação (contexto const) ou execução se `hz == 0`.
    pub const fn hz(hz: u32) -> Self {
        assert!(hz != 0, "tick rate must be non-zero");
        Self { hz }
    }

    #[inline]
    pub const fn ticks_per_sec(self) -> u32 {
        self.hz
    }

    /// Converte ticks para µs (floor).
    #[inline]
    pub const fn ticks_to_us(self, ticks: u32) -> u64 {
        (ticks as u64 * USEC_PER_SEC) / self.hz as u64
    }

    /// Converte µs para ticks (floor). Satura em `u32::MAX`.
    #[inline]
    pub const fn us_to_ticks_floor(self, us: u64) -> u32 {
        let ticks = (us as u128 * self.hz as u128) / USEC_PER_SEC as u128;
        if ticks > u32::MAX as u128 {
            u32::MAX
        } else {
            ticks as u32
        }
    }

    /// Converte µs para ticks (ceil). Satura em `u32::MAX`.
    #[inline]
    pub const fn us_to_ticks_ceil(self, us: u64) -> u32 {
        let num = us as u128 * self.hz as u128;
        let ticks = (num + USEC_PER_SEC as u128 - 1) / USEC_PER_SEC as u128;
        if ticks > u32::MAX as u128 {
            u32::MAX
        } else {
            ticks as u32
        }
    }
}

/// Previsão de quanto tempo a CPU ficará ociosa.
///
/// Valor do chamador, passado por cópia e nunca retido pela política.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdleForecast {
    /// Ociosidade prevista em ticks do timer.
    Ticks(u32),
    /// Nenhum timeout pendente: ocioso indefinidamente.
    Forever,
}

impl IdleForecast {
    /// Converte o valor bruto do scheduler.
    ///
    /// `TICKS_FOREVER` vira `Forever`; qualquer outro negativo é tratado
    /// como zero (nenhuma ociosidade aproveitável).
    pub const fn from_raw(ticks: i32) -> Self {
        if ticks == TICKS_FOREVER {
            IdleForecast::Forever
        } else if ticks < 0 {
            IdleForecast::Ticks(0)
        } else {
            IdleForecast::Ticks(ticks as u32)
        }
    }

    /// Previsão a partir de µs, arredondando para baixo para ticks.
    pub const fn from_us(rate: TickRate, us: u64) -> Self {
        IdleForecast::Ticks(rate.us_to_ticks_floor(us))
    }

    #[inline]
    pub const fn is_zero(self) -> bool {
        matches!(self, IdleForecast::Ticks(0))
    }

    /// Duração em µs. `Forever` é `u64::MAX` (qualquer limiar é atendido).
    #[inline]
    pub const fn to_us(self, rate: TickRate) -> u64 {
        match self {
            IdleForecast::Ticks(ticks) => rate.ticks_to_us(ticks),
            IdleForecast::Forever => u64::MAX,
        }
    }
}
