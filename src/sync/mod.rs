//! # Synchronization Primitives
//!
//! Primitivas lock-free usadas pela política de PM.
//!
//! ## Regras
//!
//! - Nada aqui bloqueia, dorme ou aloca: tudo é chamável do idle loop e de
//!   handlers de interrupção.
//! - Sem spinlocks no caminho de `select`: apenas atômicos.

/// Operações atômicas
pub mod atomic;

pub use atomic::{AtomicCounter, RefCount};
