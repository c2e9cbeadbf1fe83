//! Arquivo: pm/state.rs
//!
//! Propósito: Modelo de dados dos sleep states de CPU.
//! Um catálogo por CPU lista os estados disponíveis, do mais raso ao mais
//! profundo. Cada entrada informa quanto tempo precisa ficar no estado para
//! valer a pena (`min_residency_us`) e quanto custa sair dele
//! (`exit_latency_us`).
//!
//! Detalhes de Implementação:
//! - A ordem por economia de energia é propriedade do catálogo, NÃO do enum.
//! - `substate_id` diferencia configurações do mesmo kind (ex: dois
//!   SuspendToIdle com retenções de RAM diferentes).

use bitflags::bitflags;

/// Tipo de sleep state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum SleepStateKind {
    /// CPU rodando. Nunca é escolhido pela política, mas pode ser descrito.
    Active = 0,
    /// Clock da CPU parado, periféricos ligados.
    RuntimeIdle = 1,
    /// Sistema "congelado", retomada rápida.
    SuspendToIdle = 2,
    /// Maior parte do SoC desligada, contexto mantido.
    Standby = 3,
    /// Contexto na RAM, quase tudo desligado.
    SuspendToRam = 4,
    /// Contexto em storage não-volátil.
    SuspendToDisk = 5,
    /// Desligado via software; só volta por reset/wakeup pin.
    SoftOff = 6,
}

impl SleepStateKind {
    pub const COUNT: usize = 7;

    pub const ALL: [SleepStateKind; Self::COUNT] = [
        SleepStateKind::Active,
        SleepStateKind::RuntimeIdle,
        SleepStateKind::SuspendToIdle,
        SleepStateKind::Standby,
        SleepStateKind::SuspendToRam,
        SleepStateKind::SuspendToDisk,
        SleepStateKind::SoftOff,
    ];

    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    pub const fn from_index(index: usize) -> Option<Self> {
        if index < Self::COUNT {
            Some(Self::ALL[index])
        } else {
            None
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            SleepStateKind::Active => "active",
            SleepStateKind::RuntimeIdle => "runtime-idle",
            SleepStateKind::SuspendToIdle => "suspend-to-idle",
            SleepStateKind::Standby => "standby",
            SleepStateKind::SuspendToRam => "suspend-to-ram",
            SleepStateKind::SuspendToDisk => "suspend-to-disk",
            SleepStateKind::SoftOff => "soft-off",
        }
    }

    /// Bit correspondente em `LockedStates`.
    #[inline]
    pub const fn flag(self) -> LockedStates {
        LockedStates::from_bits_truncate(1 << self as u8)
    }
}

bitflags! {
    /// Conjunto de kinds com veto ativo (snapshot, não é atualizado sozinho).
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct LockedStates: u8 {
        const ACTIVE = 1 << 0;
        const RUNTIME_IDLE = 1 << 1;
        const SUSPEND_TO_IDLE = 1 << 2;
        const STANDBY = 1 << 3;
        const SUSPEND_TO_RAM = 1 << 4;
        const SUSPEND_TO_DISK = 1 << 5;
        const SOFT_OFF = 1 << 6;
    }
}

/// Um sleep state descrito pela board.
///
/// Imutável; pertence à camada de configuração e é emprestado pela política.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SleepState {
    pub kind: SleepStateKind,
    pub substate_id: u8,
    pub min_residency_us: u32,
    pub exit_latency_us: u32,
}

impl SleepState {
    pub const fn new(kind: SleepStateKind, min_residency_us: u32, exit_latency_us: u32) -> Self {
        Self {
            kind,
            substate_id: 0,
            min_residency_us,
            exit_latency_us,
        }
    }

    pub const fn with_substate(mut self, substate_id: u8) -> Self {
        self.substate_id = substate_id;
        self
    }

    /// Ociosidade mínima (µs) para este estado compensar: residência + saída.
    #[inline]
    pub const fn threshold_us(&self) -> u64 {
        self.min_residency_us as u64 + self.exit_latency_us as u64
    }
}
