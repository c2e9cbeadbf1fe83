//! Arquivo: pm/policy/default.rs
//!
//! Propósito: Avaliador padrão. Escolhe o estado mais profundo que
//! (1) não está vetado, (2) respeita as requisições de latência e
//! (3) cabe na ociosidade prevista: `idle_us >= min_residency + exit_latency`.
//!
//! Detalhes de Implementação:
//! - `Active` nunca é escolhido: não é um sleep state.
//! - Varre o catálogo do mais profundo para o mais raso e para no primeiro
//!   aceito. Pelo invariante do catálogo, o primeiro aceito domina os demais.
//! - Estado vetado é pulado e a varredura continua descendo; nada é
//!   reconsiderado depois.
//! - Custo O(estados da CPU), sem alocação, sem lock.

use crate::core::time::{IdleForecast, TickRate};
use crate::pm::catalog::{CpuId, StateCatalog};
use crate::pm::config::DEFAULT_TICK_RATE;
use crate::pm::latency::LatencyRequests;
use crate::pm::lock::StateLocks;
use crate::pm::state::{SleepState, SleepStateKind};

use super::PolicyEngine;

pub struct DefaultPolicy<'a, C: StateCatalog> {
    catalog: &'a C,
    locks: &'a StateLocks,
    latency: Option<&'a LatencyRequests>,
    rate: TickRate,
}

impl<'a, C: StateCatalog> DefaultPolicy<'a, C> {
    /// Avaliador sobre `catalog` e `locks`, com o timer em `DEFAULT_TICK_RATE`.
    ///
    /// Em debug confere a ordenação de todas as CPUs uma única vez; o caminho
    /// de seleção confia nela.
    pub fn new(catalog: &'a C, locks: &'a StateLocks) -> Self {
        debug_assert!(
            (0..catalog.cpu_count().min(CpuId::MAX as usize + 1))
                .all(|cpu| crate::pm::catalog::is_sorted(catalog.states(cpu as CpuId))),
            "sleep state catalog must be sorted by min residency"
        );

        Self {
            catalog,
            locks,
            latency: None,
            rate: DEFAULT_TICK_RATE,
        }
    }

    /// Frequência do timer da board.
    pub fn with_tick_rate(mut self, rate: TickRate) -> Self {
        self.rate = rate;
        self
    }

    /// Passa a respeitar requisições de latência máxima.
    pub fn with_latency_requests(mut self, latency: &'a LatencyRequests) -> Self {
        self.latency = Some(latency);
        self
    }

    #[inline]
    pub fn tick_rate(&self) -> TickRate {
        self.rate
    }

    /// Seleção propriamente dita (ver doc do módulo).
    pub fn select(&self, cpu: CpuId, forecast: IdleForecast) -> Option<&'a SleepState> {
        let states: &'a [SleepState] = self.catalog_states(cpu);
        if forecast.is_zero() || states.is_empty() {
            return None;
        }

        let idle_us = forecast.to_us(self.rate);
        let budget = self.latency.and_then(LatencyRequests::effective_us);

        for state in states.iter().rev() {
            if state.kind == SleepStateKind::Active {
                continue;
            }
            if self.locks.is_state_locked(state) {
                crate::ktrace!("(PM) Candidato vetado, kind=", state.kind.index());
                continue;
            }
            if let Some(max_us) = budget {
                if state.exit_latency_us > max_us {
                    crate::ktrace!("(PM) Latência excede requisição, kind=", state.kind.index());
                    continue;
                }
            }
            if idle_us >= state.threshold_us() {
                crate::ktrace!("(PM) Estado escolhido, kind=", state.kind.index());
                return Some(state);
            }
        }

        None
    }

    #[inline]
    fn catalog_states(&self, cpu: CpuId) -> &'a [SleepState] {
        let catalog: &'a C = self.catalog;
        catalog.states(cpu)
    }
}

impl<C: StateCatalog> PolicyEngine for DefaultPolicy<'_, C> {
    #[inline]
    fn next_state(&self, cpu: CpuId, forecast: IdleForecast) -> Option<&SleepState> {
        self.select(cpu, forecast)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pm::catalog::StaticCatalog;

    static CPU0: [SleepState; 2] = [
        SleepState::new(SleepStateKind::RuntimeIdle, 100_000, 10_000),
        SleepState::new(SleepStateKind::SuspendToRam, 1_000_000, 100_000),
    ];
    static CPU1: [SleepState; 1] = [SleepState::new(SleepStateKind::SuspendToRam, 500_000, 50_000)];
    static CPUS: [&[SleepState]; 2] = [&CPU0, &CPU1];
    static CATALOG: StaticCatalog<'static> = StaticCatalog::new(&CPUS);

    // 1 tick = 1 µs: as fronteiras do catálogo caem exatamente em ticks.
    const RATE: TickRate = TickRate::hz(1_000_000);

    fn us(value: u64) -> IdleForecast {
        IdleForecast::from_us(RATE, value)
    }

    fn kind_of(state: Option<&SleepState>) -> Option<SleepStateKind> {
        state.map(|s| s.kind)
    }

    #[test]
    fn test_two_state_catalog_thresholds() {
        let locks = StateLocks::new();
        let policy = DefaultPolicy::new(&CATALOG, &locks).with_tick_rate(RATE);

        assert_eq!(policy.select(0, IdleForecast::Ticks(0)), None);
        assert_eq!(policy.select(0, us(10_999)), None);
        assert_eq!(kind_of(policy.select(0, us(110_000))), Some(SleepStateKind::RuntimeIdle));
        assert_eq!(kind_of(policy.select(0, us(1_099_999))), Some(SleepStateKind::RuntimeIdle));
        assert_eq!(kind_of(policy.select(0, us(1_100_000))), Some(SleepStateKind::SuspendToRam));
        assert_eq!(kind_of(policy.select(0, IdleForecast::Forever)), Some(SleepStateKind::SuspendToRam));
    }

    #[test]
    fn test_threshold_is_sum_and_inclusive() {
        let locks = StateLocks::new();
        let policy = DefaultPolicy::new(&CATALOG, &locks).with_tick_rate(RATE);

        // Cobre a residência mas não residência + saída.
        assert_eq!(policy.select(0, us(100_000)), None);
        assert_eq!(policy.select(0, us(109_999)), None);
        let picked = policy.select(0, us(110_000));
        assert_eq!(picked, Some(&CPU0[0]));
    }

    #[test]
    fn test_single_state_catalog() {
        let locks = StateLocks::new();
        let policy = DefaultPolicy::new(&CATALOG, &locks).with_tick_rate(RATE);

        assert_eq!(policy.select(1, IdleForecast::Ticks(0)), None);
        assert_eq!(policy.select(1, us(549_999)), None);
        let state = policy.select(1, us(550_000));
        assert_eq!(state, Some(&CPU1[0]));
        assert_eq!(kind_of(policy.select(1, IdleForecast::Forever)), Some(SleepStateKind::SuspendToRam));
    }

    #[test]
    fn test_unknown_or_empty_cpu() {
        let locks = StateLocks::new();
        let policy = DefaultPolicy::new(&CATALOG, &locks).with_tick_rate(RATE);
        assert_eq!(policy.select(7, IdleForecast::Forever), None);
    }

    #[test]
    fn test_locked_shallow_state_has_no_fallback() {
        let locks = StateLocks::new();
        let policy = DefaultPolicy::new(&CATALOG, &locks).with_tick_rate(RATE);

        locks.acquire(SleepStateKind::RuntimeIdle);
        assert_eq!(policy.select(0, us(110_000)), None);
        // Estado profundo segue disponível quando a ociosidade basta.
        assert_eq!(kind_of(policy.select(0, us(1_100_000))), Some(SleepStateKind::SuspendToRam));

        locks.release(SleepStateKind::RuntimeIdle);
        assert_eq!(kind_of(policy.select(0, us(110_000))), Some(SleepStateKind::RuntimeIdle));
    }

    #[test]
    fn test_locked_deep_state_falls_to_shallower() {
        let locks = StateLocks::new();
        let policy = DefaultPolicy::new(&CATALOG, &locks).with_tick_rate(RATE);

        locks.acquire(SleepStateKind::SuspendToRam);
        assert_eq!(kind_of(policy.select(0, IdleForecast::Forever)), Some(SleepStateKind::RuntimeIdle));
        assert_eq!(policy.select(1, IdleForecast::Forever), None);
        locks.release(SleepStateKind::SuspendToRam);
    }

    #[test]
    fn test_latency_request_excludes_slow_states() {
        let locks = StateLocks::new();
        let latency = LatencyRequests::new();
        let policy = DefaultPolicy::new(&CATALOG, &locks)
            .with_tick_rate(RATE)
            .with_latency_requests(&latency);

        let req = latency.add(50_000).unwrap();
        assert_eq!(kind_of(policy.select(0, IdleForecast::Forever)), Some(SleepStateKind::RuntimeIdle));
        assert_eq!(kind_of(policy.select(1, IdleForecast::Forever)), Some(SleepStateKind::SuspendToRam));

        req.update(9_999);
        assert_eq!(policy.select(0, IdleForecast::Forever), None);

        drop(req);
        assert_eq!(kind_of(policy.select(0, IdleForecast::Forever)), Some(SleepStateKind::SuspendToRam));
    }

    #[test]
    fn test_monotonic_in_forecast() {
        let locks = StateLocks::new();
        let policy = DefaultPolicy::new(&CATALOG, &locks).with_tick_rate(RATE);

        let depth = |idle: u64| -> isize {
            match policy.select(0, us(idle)) {
                Some(s) => CPU0.iter().position(|c| c == s).map_or(-1, |i| i as isize),
                None => -1,
            }
        };

        let mut previous = -1;
        for idle in (0..2_000_000u64).step_by(9_973) {
            let d = depth(idle);
            assert!(d >= previous, "depth decreased at idle={}", idle);
            previous = d;
        }
    }

    #[test]
    fn test_tick_conversion_with_coarse_timer() {
        let locks = StateLocks::new();
        // 10 kHz: 110 000 µs = 1100 ticks exatos.
        let policy = DefaultPolicy::new(&CATALOG, &locks).with_tick_rate(TickRate::hz(10_000));
        assert_eq!(policy.tick_rate().ticks_per_sec(), 10_000);
        assert_eq!(policy.select(0, IdleForecast::Ticks(1_099)), None);
        assert_eq!(kind_of(policy.select(0, IdleForecast::Ticks(1_100))), Some(SleepStateKind::RuntimeIdle));
    }

    #[test]
    fn test_active_is_never_selected() {
        let locks = StateLocks::new();
        let only_active: [&[SleepState]; 1] = [&[SleepState::new(SleepStateKind::Active, 0, 0)]];
        let catalog = StaticCatalog::new(&only_active);
        let policy = DefaultPolicy::new(&catalog, &locks).with_tick_rate(RATE);
        assert_eq!(policy.select(0, IdleForecast::Ticks(1)), None);
        assert_eq!(policy.select(0, IdleForecast::Forever), None);

        let with_idle: [&[SleepState]; 1] = [&[
            SleepState::new(SleepStateKind::Active, 0, 0),
            SleepState::new(SleepStateKind::RuntimeIdle, 0, 0),
        ]];
        let catalog = StaticCatalog::new(&with_idle);
        let policy = DefaultPolicy::new(&catalog, &locks).with_tick_rate(RATE);
        assert_eq!(kind_of(policy.select(0, IdleForecast::Ticks(1))), Some(SleepStateKind::RuntimeIdle));

        // RuntimeIdle vetado: Active não serve de fallback.
        locks.acquire(SleepStateKind::RuntimeIdle);
        assert_eq!(policy.select(0, IdleForecast::Forever), None);
        locks.release(SleepStateKind::RuntimeIdle);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "sleep state catalog must be sorted")]
    fn test_unsorted_catalog_rejected_at_construction() {
        let locks = StateLocks::new();
        let cpus: [&[SleepState]; 2] = [&CPU1, &[CPU0[1], CPU0[0]]];
        let catalog = StaticCatalog::new(&cpus);
        let _ = DefaultPolicy::new(&catalog, &locks);
    }

    fn deepest_forever<P: PolicyEngine>(engine: &P) -> Option<SleepStateKind> {
        engine.next_state(0, IdleForecast::Forever).map(|s| s.kind)
    }

    #[test]
    fn test_engine_trait_dispatch() {
        let locks = StateLocks::new();
        let policy = DefaultPolicy::new(&CATALOG, &locks).with_tick_rate(RATE);
        assert_eq!(deepest_forever(&policy), Some(SleepStateKind::SuspendToRam));
        assert_eq!(deepest_forever(&&policy), Some(SleepStateKind::SuspendToRam));
    }
}
