// =============================================================================
// PM LOGGING SYSTEM - ZERO OVERHEAD
// =============================================================================
//
// Sistema de logging da política de PM com custo ZERO em release.
//
// ARQUITETURA:
// - Usa features do Cargo para compile-time filtering
// - Com feature "no_logs", TODOS os macros viram expressões vazias
//   (argumentos são apenas "tocados" dentro de `if false`, nunca avaliados)
// - SEM core::fmt - nada de formatação no caminho do idle loop
// - SEM alocação - Apenas strings literais + valores hex/decimais
// - Escreve no sink registrado em `core::console` (serial do hospedeiro)
//
// NÍVEIS DE LOG (do mais crítico ao menos):
// - ERROR: Violação de contrato (ex: release sem acquire)
// - WARN:  Situações suspeitas mas recuperáveis
// - INFO:  Fluxo normal (registro de catálogo, dumps)
// - DEBUG: Informações de debugging
// - TRACE: Cada decisão do avaliador
//
// FEATURES:
// - no_logs:   Remove 100% dos logs
// - log_error: ERROR, WARN
// - log_info:  ERROR, WARN, INFO
// - log_debug: ERROR, WARN, INFO, DEBUG
// - log_trace: Todos os níveis (padrão)
//
// COMO USAR:
//   kinfo!("(PM) Catálogo registrado");        // Apenas string
//   ktrace!("(PM) Estado escolhido=", idx);    // String + hex
//   klog!("cpu=", cpu, " ticks=", ticks);      // Múltiplos valores
//   kinfo_dec!("(PM) CPUs=", n);               // String + decimal
//
// =============================================================================

pub const P_ERROR: &str = "\x1b[1;31m[ERRO]\x1b[0m ";
pub const P_WARN: &str = "\x1b[1;33m[WARN]\x1b[0m ";
pub const P_INFO: &str = "\x1b[32m[INFO]\x1b[0m ";
pub const P_DEBUG: &str = "\x1b[36m[DEBG]\x1b[0m ";
pub const P_TRACE: &str = "\x1b[35m[TRAC]\x1b[0m ";

// =============================================================================
// MACRO INTERNA
// =============================================================================

#[doc(hidden)]
#[macro_export]
macro_rules! __pm_emit {
    ($prefix:expr, $msg:expr) => {{
        $crate::core::console::emit_str($prefix);
        $crate::core::console::emit_str($msg);
        $crate::core::console::emit_nl();
    }};
    ($prefix:expr, $msg:expr, $val:expr) => {{
        $crate::core::console::emit_str($prefix);
        $crate::core::console::emit_str($msg);
        $crate::core::console::emit_hex($val as u64);
        $crate::core::console::emit_nl();
    }};
}

// =============================================================================
// MACROS DE LOG - NÍVEL ERROR
// =============================================================================

#[cfg(not(feature = "no_logs"))]
#[macro_export]
macro_rules! kerror {
    ($msg:expr) => {
        $crate::__pm_emit!($crate::core::logging::P_ERROR, $msg)
    };
    ($msg:expr, $val:expr) => {
        $crate::__pm_emit!($crate::core::logging::P_ERROR, $msg, $val)
    };
}

#[cfg(feature = "no_logs")]
#[macro_export]
macro_rules! kerror {
    ($($arg:expr),* $(,)?) => {{
        if false {
            $(let _ = &$arg;)*
        }
    }};
}

// =============================================================================
// MACROS DE LOG - NÍVEL WARN
// =============================================================================

#[cfg(not(feature = "no_logs"))]
#[macro_export]
macro_rules! kwarn {
    ($msg:expr) => {
        $crate::__pm_emit!($crate::core::logging::P_WARN, $msg)
    };
    ($msg:expr, $val:expr) => {
        $crate::__pm_emit!($crate::core::logging::P_WARN, $msg, $val)
    };
}

#[cfg(feature = "no_logs")]
#[macro_export]
macro_rules! kwarn {
    ($($arg:expr),* $(,)?) => {{
        if false {
            $(let _ = &$arg;)*
        }
    }};
}

// =============================================================================
// MACROS DE LOG - NÍVEL INFO
// =============================================================================

#[cfg(any(
    feature = "log_info",
    feature = "log_debug",
    feature = "log_trace"
))]
#[macro_export]
macro_rules! kinfo {
    ($msg:expr) => {
        $crate::__pm_emit!($crate::core::logging::P_INFO, $msg)
    };
    ($msg:expr, $val:expr) => {
        $crate::__pm_emit!($crate::core::logging::P_INFO, $msg, $val)
    };
}

#[cfg(not(any(
    feature = "log_info",
    feature = "log_debug",
    feature = "log_trace"
)))]
#[macro_export]
macro_rules! kinfo {
    ($($arg:expr),* $(,)?) => {{
        if false {
            $(let _ = &$arg;)*
        }
    }};
}

/// kinfo_dec! - INFO com valor em decimal (contadores, índices de CPU).
#[cfg(any(
    feature = "log_info",
    feature = "log_debug",
    feature = "log_trace"
))]
#[macro_export]
macro_rules! kinfo_dec {
    ($msg:expr, $val:expr) => {{
        $crate::core::console::emit_str($crate::core::logging::P_INFO);
        $crate::core::console::emit_str($msg);
        $crate::core::console::emit_dec($val as u64);
        $crate::core::console::emit_nl();
    }};
    ($label:expr, $msg:expr, $val:expr) => {{
        $crate::core::console::emit_str($crate::core::logging::P_INFO);
        $crate::core::console::emit_str($label);
        $crate::core::console::emit_str($msg);
        $crate::core::console::emit_dec($val as u64);
        $crate::core::console::emit_nl();
    }};
}

#[cfg(not(any(
    feature = "log_info",
    feature = "log_debug",
    feature = "log_trace"
)))]
#[macro_export]
macro_rules! kinfo_dec {
    ($($arg:expr),* $(,)?) => {{
        if false {
            $(let _ = &$arg;)*
        }
    }};
}

// =============================================================================
// MACROS DE LOG - NÍVEL DEBUG
// =============================================================================

#[cfg(any(feature = "log_debug", feature = "log_trace"))]
#[macro_export]
macro_rules! kdebug {
    ($msg:expr) => {
        $crate::__pm_emit!($crate::core::logging::P_DEBUG, $msg)
    };
    ($msg:expr, $val:expr) => {
        $crate::__pm_emit!($crate::core::logging::P_DEBUG, $msg, $val)
    };
}

#[cfg(not(any(feature = "log_debug", feature = "log_trace")))]
#[macro_export]
macro_rules! kdebug {
    ($($arg:expr),* $(,)?) => {{
        if false {
            $(let _ = &$arg;)*
        }
    }};
}

// =============================================================================
// MACROS DE LOG - NÍVEL TRACE
// =============================================================================

#[cfg(feature = "log_trace")]
#[macro_export]
macro_rules! ktrace {
    ($msg:expr) => {
        $crate::__pm_emit!($crate::core::logging::P_TRACE, $msg)
    };
    ($msg:expr, $val:expr) => {
        $crate::__pm_emit!($crate::core::logging::P_TRACE, $msg, $val)
    };
}

#[cfg(not(feature = "log_trace"))]
#[macro_export]
macro_rules! ktrace {
    ($($arg:expr),* $(,)?) => {{
        if false {
            $(let _ = &$arg;)*
        }
    }};
}

// =============================================================================
// MACROS AUXILIARES
// =============================================================================

/// klog! - Log genérico sem prefixo de nível.
///
/// # Uso
/// ```ignore
/// klog!("cpu=", cpu);                       // String + hex
/// klog!("cpu=", cpu, " ticks=", ticks);     // Múltiplos
/// ```
#[cfg(not(feature = "no_logs"))]
#[macro_export]
macro_rules! klog {
    ($msg:expr) => {{
        $crate::core::console::emit_str($msg);
    }};
    ($msg:expr, $val:expr) => {{
        $crate::core::console::emit_str($msg);
        $crate::core::console::emit_hex($val as u64);
    }};
    ($msg1:expr, $val1:expr, $msg2:expr, $val2:expr) => {{
        $crate::core::console::emit_str($msg1);
        $crate::core::console::emit_hex($val1 as u64);
        $crate::core::console::emit_str($msg2);
        $crate::core::console::emit_hex($val2 as u64);
    }};
}

#[cfg(feature = "no_logs")]
#[macro_export]
macro_rules! klog {
    ($($arg:expr),* $(,)?) => {{
        if false {
            $(let _ = &$arg;)*
        }
    }};
}

/// knl! - Emite apenas newline.
#[cfg(not(feature = "no_logs"))]
#[macro_export]
macro_rules! knl {
    () => {{
        $crate::core::console::emit_nl();
    }};
}

#[cfg(feature = "no_logs")]
#[macro_export]
macro_rules! knl {
    () => {{}};
}

// =============================================================================
// MACROS DE STATUS (OK/FAIL)
// =============================================================================

/// kok! - Log de sucesso (prefixo verde [OK]).
#[cfg(not(feature = "no_logs"))]
#[macro_export]
macro_rules! kok {
    ($msg:expr) => {
        $crate::__pm_emit!("\x1b[32m[OK]\x1b[0m ", $msg)
    };
}

#[cfg(feature = "no_logs")]
#[macro_export]
macro_rules! kok {
    ($($arg:expr),* $(,)?) => {{
        if false {
            $(let _ = &$arg;)*
        }
    }};
}

/// kfail! - Log de falha (prefixo vermelho [FAIL]).
#[cfg(not(feature = "no_logs"))]
#[macro_export]
macro_rules! kfail {
    ($msg:expr) => {
        $crate::__pm_emit!("\x1b[1;31m[FAIL]\x1b[0m ", $msg)
    };
}

#[cfg(feature = "no_logs")]
#[macro_export]
macro_rules! kfail {
    ($($arg:expr),* $(,)?) => {{
        if false {
            $(let _ = &$arg;)*
        }
    }};
}
