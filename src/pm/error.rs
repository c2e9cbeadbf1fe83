//! # PM Error Codes
//!
//! Erros das operações de configuração (validação de catálogo, registro de
//! requisições de latência). O caminho quente (`select`, locks) é infalível:
//! "nenhum estado" é um resultado, não um erro.
//!
//! Numeração no estilo errno para o kernel hospedeiro repassar em syscalls.

#[repr(i32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PmError {
    /// Todos os slots de requisição de latência estão ocupados.
    NoFreeSlot = 12, // ENOMEM
    /// Catálogo fora da ordem crescente de `min_residency_us`.
    UnsortedCatalog = 22, // EINVAL
    /// CPU além do que o catálogo descreve.
    CpuOutOfRange = 19, // ENODEV
    /// Catálogo descreve mais CPUs que `MAX_CPUS`.
    TooManyCpus = 7, // E2BIG
}

impl PmError {
    pub fn as_isize(self) -> isize {
        -(self as i32) as isize
    }

    pub fn as_str(self) -> &'static str {
        match self {
            PmError::NoFreeSlot => "no free latency request slot",
            PmError::UnsortedCatalog => "catalog not sorted by min residency",
            PmError::CpuOutOfRange => "cpu id out of catalog range",
            PmError::TooManyCpus => "catalog exceeds MAX_CPUS",
        }
    }
}
