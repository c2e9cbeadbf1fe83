//! Arquivo: core/console.rs
//!
//! Propósito: Saída de baixo nível usada pelas macros de log.
//! A política de PM roda dentro do kernel hospedeiro, que é quem sabe onde
//! escrever (serial, RTT, ring buffer). O hospedeiro registra um sink uma
//! única vez no boot; antes disso toda saída é descartada.
//!
//! Detalhes de Implementação:
//! - Registro via `spin::Once` (sem lock após a inicialização).
//! - SEM core::fmt, SEM alocação: apenas bytes, hex e decimal em buffer de stack.

use spin::Once;

/// Destino dos bytes de log (ex: driver serial do kernel hospedeiro).
///
/// A implementação NÃO pode bloquear: é chamada do idle loop e de
/// contextos de interrupção.
pub trait ConsoleSink: Sync {
    fn write_bytes(&self, bytes: &[u8]);
}

static SINK: Once<&'static dyn ConsoleSink> = Once::new();

/// Registra o sink do console.
///
/// Retorna `false` se já havia um sink registrado (o primeiro vence).
pub fn set_sink(sink: &'static dyn ConsoleSink) -> bool {
    let mut installed = false;
    SINK.call_once(|| {
        installed = true;
        sink
    });
    installed
}

/// Indica se já existe sink registrado.
#[inline]
pub fn has_sink() -> bool {
    SINK.is_completed()
}

#[inline]
fn write(bytes: &[u8]) {
    if let Some(sink) = SINK.get() {
        sink.write_bytes(bytes);
    }
}

/// Envia uma string.
#[inline(never)]
pub fn emit_str(s: &str) {
    write(s.as_bytes());
}

/// Envia quebra de linha (CRLF, como a serial do kernel).
#[inline(never)]
pub fn emit_nl() {
    write(b"\r\n");
}

/// Envia um valor u64 em hexadecimal com prefixo `0x`.
#[inline(never)]
pub fn emit_hex(value: u64) {
    let mut buf = [0u8; 18];
    buf[0] = b'0';
    buf[1] = b'x';
    for i in 0..16 {
        let shift = (15 - i) * 4;
        buf[2 + i] = nibble_to_ascii(((value >> shift) & 0xF) as u8);
    }
    write(&buf);
}

/// Envia um valor em formato decimal.
///
/// Útil para contadores e índices de CPU.
#[inline(never)]
pub fn emit_dec(mut value: u64) {
    // Buffer para dígitos (max 20 para u64)
    let mut buf: [u8; 20] = [0; 20];
    let mut pos = 20;

    if value == 0 {
        write(b"0");
        return;
    }

    while value > 0 {
        pos -= 1;
        buf[pos] = b'0' + (value % 10) as u8;
        value /= 10;
    }

    write(&buf[pos..]);
}

/// Converte nibble (0-15) para caractere ASCII ('0'-'9', 'A'-'F').
#[inline(always)]
const fn nibble_to_ascii(n: u8) -> u8 {
    if n < 10 {
        b'0' + n
    } else {
        b'A' + (n - 10)
    }
}
