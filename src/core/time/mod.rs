//! Base de tempo da política: ticks do timer do sistema e previsão de ociosidade.

pub mod tick;

pub use tick::{IdleForecast, TickRate, TICKS_FOREVER};
