//! Core Module
//!
//! Infraestrutura de base da política de PM: saída de log e base de tempo.
//! Não conhece estados de energia; isso vive em `pm`.

pub mod console;
pub mod logging;
pub mod time;
