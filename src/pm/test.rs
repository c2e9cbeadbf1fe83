//! # PM Self-Tests
//!
//! Suite executada dentro do kernel hospedeiro (feature `self_test`) para
//! validar a política na board real, com o console já registrado.

use crate::core::time::IdleForecast;
#[cfg(feature = "policy_default")]
use crate::core::time::TickRate;
use crate::klib::test_framework::{run_test_suite, SuiteReport, TestCase, TestResult};

use super::catalog::StaticCatalog;
use super::lock::StateLocks;
use super::policy::{FixedPolicy, PolicyEngine};
use super::state::{SleepState, SleepStateKind};

static CPU0: [SleepState; 2] = [
    SleepState::new(SleepStateKind::RuntimeIdle, 100_000, 10_000),
    SleepState::new(SleepStateKind::SuspendToRam, 1_000_000, 100_000),
];
static CPU1: [SleepState; 1] = [SleepState::new(SleepStateKind::SuspendToRam, 500_000, 50_000)];
static CPUS: [&[SleepState]; 2] = [&CPU0, &CPU1];
static CATALOG: StaticCatalog<'static> = StaticCatalog::new(&CPUS);

#[cfg(feature = "policy_default")]
const RATE: TickRate = TickRate::hz(10_000);

/// Casos de teste de PM
const PM_TESTS: &[TestCase] = &[
    TestCase::new("pm_catalog_valid", test_catalog_valid),
    TestCase::new("pm_lock_refcount", test_lock_refcount),
    TestCase::new("pm_policy_default", test_policy_default),
    TestCase::new("pm_policy_default_allowed", test_policy_default_allowed),
    TestCase::new("pm_policy_custom", test_policy_custom),
];

/// Executa todos os testes de PM
pub fn run_pm_tests() -> SuiteReport {
    run_test_suite("PM", PM_TESTS)
}

#[cfg(feature = "policy_default")]
fn us(value: u64) -> IdleForecast {
    IdleForecast::from_us(RATE, value)
}

fn is_kind(state: Option<&SleepState>, kind: SleepStateKind) -> bool {
    state.map(|s| s.kind) == Some(kind)
}

fn test_catalog_valid() -> TestResult {
    TestResult::check(CATALOG.validate().is_ok(), "(PM) Catálogo de teste inválido")
}

fn test_lock_refcount() -> TestResult {
    let locks = StateLocks::new();
    locks.acquire(SleepStateKind::Standby);
    locks.acquire(SleepStateKind::Standby);
    locks.release(SleepStateKind::Standby);
    let still_locked = locks.is_locked(SleepStateKind::Standby);
    locks.release(SleepStateKind::Standby);

    TestResult::check(
        still_locked && !locks.is_locked(SleepStateKind::Standby),
        "(PM) Refcount de veto incorreto",
    )
}

#[cfg(feature = "policy_default")]
fn test_policy_default() -> TestResult {
    use super::policy::DefaultPolicy;

    let locks = StateLocks::new();
    let policy = DefaultPolicy::new(&CATALOG, &locks).with_tick_rate(RATE);

    let ok = policy.select(0, IdleForecast::Ticks(0)).is_none()
        && policy.select(0, us(10_999)).is_none()
        && is_kind(policy.select(0, us(110_000)), SleepStateKind::RuntimeIdle)
        && is_kind(policy.select(0, us(1_099_999)), SleepStateKind::RuntimeIdle)
        && is_kind(policy.select(0, us(1_100_000)), SleepStateKind::SuspendToRam)
        && is_kind(policy.select(0, IdleForecast::Forever), SleepStateKind::SuspendToRam)
        && policy.select(1, IdleForecast::Ticks(0)).is_none()
        && policy.select(1, us(549_999)).is_none()
        && is_kind(policy.select(1, us(550_000)), SleepStateKind::SuspendToRam)
        && is_kind(policy.select(1, IdleForecast::Forever), SleepStateKind::SuspendToRam);

    TestResult::check(ok, "(PM) Política padrão escolheu estado errado")
}

#[cfg(feature = "policy_default")]
fn test_policy_default_allowed() -> TestResult {
    use super::policy::DefaultPolicy;

    let locks = StateLocks::new();
    let policy = DefaultPolicy::new(&CATALOG, &locks).with_tick_rate(RATE);

    if !is_kind(policy.select(0, us(110_000)), SleepStateKind::RuntimeIdle) {
        return TestResult::check(false, "(PM) RuntimeIdle deveria ser permitido");
    }

    let guard = locks.lock_guard(SleepStateKind::RuntimeIdle);
    let vetoed = locks.is_locked(SleepStateKind::RuntimeIdle)
        && policy.select(0, us(110_000)).is_none();
    drop(guard);

    TestResult::check(
        vetoed
            && !locks.is_locked(SleepStateKind::RuntimeIdle)
            && is_kind(policy.select(0, us(110_000)), SleepStateKind::RuntimeIdle),
        "(PM) Veto de RuntimeIdle não respeitado",
    )
}

#[cfg(not(feature = "policy_default"))]
fn test_policy_default() -> TestResult {
    TestResult::Skipped
}

#[cfg(not(feature = "policy_default"))]
fn test_policy_default_allowed() -> TestResult {
    TestResult::Skipped
}

fn test_policy_custom() -> TestResult {
    let policy = FixedPolicy::new(SleepState::new(SleepStateKind::SoftOff, 0, 0));
    TestResult::check(
        is_kind(policy.next_state(0, IdleForecast::Ticks(0)), SleepStateKind::SoftOff),
        "(PM) Política própria ignorada",
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_self_test_suite_passes() {
        let report = run_pm_tests();
        assert!(report.all_passed());
        assert_eq!(report.passed + report.skipped, PM_TESTS.len());
    }
}
