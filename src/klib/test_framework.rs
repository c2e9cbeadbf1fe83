//! Framework de self-test (executa dentro do kernel hospedeiro, sem std)

/// Resultado de teste
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TestResult {
    Passed,
    Failed,
    Skipped,
}

impl TestResult {
    /// `Passed` se a condição vale, senão loga e retorna `Failed`.
    #[inline]
    pub fn check(cond: bool, what: &'static str) -> TestResult {
        if cond {
            TestResult::Passed
        } else {
            crate::kerror!(what);
            TestResult::Failed
        }
    }
}

/// Um caso de teste
pub struct TestCase {
    pub name: &'static str,
    pub func: fn() -> TestResult,
}

impl TestCase {
    pub const fn new(name: &'static str, func: fn() -> TestResult) -> Self {
        Self { name, func }
    }
}

/// Placar de uma suite
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SuiteReport {
    pub passed: usize,
    pub failed: usize,
    pub skipped: usize,
}

impl SuiteReport {
    pub fn all_passed(&self) -> bool {
        self.failed == 0
    }
}

/// Executa suite de testes
pub fn run_test_suite(name: &'static str, tests: &[TestCase]) -> SuiteReport {
    crate::kinfo!("=== Executando suite:");
    crate::kinfo!(name);

    let mut report = SuiteReport::default();

    for test in tests {
        match (test.func)() {
            TestResult::Passed => {
                crate::kok!(test.name);
                report.passed += 1;
            }
            TestResult::Failed => {
                crate::kfail!(test.name);
                report.failed += 1;
            }
            TestResult::Skipped => {
                crate::kwarn!(test.name);
                report.skipped += 1;
            }
        }
    }

    crate::kinfo!("Resultados: passed=", report.passed);
    if report.failed != 0 {
        crate::kerror!("Resultados: failed=", report.failed);
    }
    report
}
