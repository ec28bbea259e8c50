//! Simulator: drives the CPU under a run policy.
//!
//! The CPU executes single cycles; the simulator decides what happens around them. It
//! applies the configured error policy, enforces the cycle budget, runs the caller's
//! continue predicate, and detects a PC that stops moving.

use crate::common::SimError;
use crate::config::{Config, ErrorPolicy};
use crate::core::{Cpu, CycleReport};
use crate::soc::System;

/// Why a run stopped without an error.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StopReason {
    /// The cycle budget was used up.
    CycleLimit,
    /// The continue predicate returned false.
    Predicate,
    /// The PC did not change for the hang threshold's worth of cycles.
    ///
    /// A threshold of 0 disables detection, as does `None`.
    Hang {
        /// PC the machine is stuck at.
        pc: u32,
    },
}

/// Result of a run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RunOutcome {
    /// Cycles executed by this run.
    pub cycles: u64,
    /// Why the run stopped.
    pub reason: StopReason,
}

/// Top-level simulator: CPU state plus run policy.
#[derive(Debug)]
pub struct Simulator {
    /// CPU architectural state.
    pub cpu: Cpu,
    policy: ErrorPolicy,
    hang_threshold: Option<u64>,
    same_pc_count: u64,
}

impl Simulator {
    /// Creates a simulator over `system` with the configured policy and hang threshold.
    pub fn new(system: System, config: &Config) -> Self {
        Self {
            cpu: Cpu::new(system, config),
            policy: config.general.error_policy,
            hang_threshold: config.general.hang_threshold,
            same_pc_count: 0,
        }
    }

    /// Error policy in effect.
    pub const fn policy(&self) -> ErrorPolicy {
        self.policy
    }

    /// Advances the machine by one cycle.
    ///
    /// # Errors
    ///
    /// Under [`ErrorPolicy::Halt`], returns [`SimError::Halted`] for a cycle that raised a
    /// fault other than a diagnostic. The cycle's state changes are committed either way.
    /// Callers that want to stop on diagnostics too can inspect
    /// [`CycleReport::faults`] from [`Simulator::run_while`].
    pub fn tick(&mut self) -> Result<CycleReport, SimError> {
        let report = self.cpu.tick();

        if report.next_pc == report.pc {
            self.same_pc_count += 1;
        } else {
            self.same_pc_count = 0;
        }

        match (self.policy, report.first_error()) {
            (ErrorPolicy::Halt, Some(source)) => Err(SimError::Halted {
                pc: report.pc,
                source,
            }),
            _ => Ok(report),
        }
    }

    /// Runs until the cycle budget is exhausted or the machine hangs.
    ///
    /// `None` runs without a budget.
    ///
    /// # Errors
    ///
    /// As [`Simulator::tick`].
    pub fn run(&mut self, max_cycles: Option<u64>) -> Result<RunOutcome, SimError> {
        self.run_while(max_cycles, |_| true)
    }

    /// Runs until the budget is exhausted, the machine hangs, or `keep_going` returns false.
    ///
    /// The predicate sees each completed cycle's report.
    ///
    /// # Errors
    ///
    /// As [`Simulator::tick`].
    pub fn run_while<F>(
        &mut self,
        max_cycles: Option<u64>,
        mut keep_going: F,
    ) -> Result<RunOutcome, SimError>
    where
        F: FnMut(&CycleReport) -> bool,
    {
        let mut cycles = 0;
        loop {
            if max_cycles.is_some_and(|max| cycles >= max) {
                return Ok(RunOutcome {
                    cycles,
                    reason: StopReason::CycleLimit,
                });
            }

            let report = self.tick()?;
            cycles += 1;

            if self.is_hung() {
                tracing::info!(
                    "pc stuck at {:#010x} for {} cycles, stopping",
                    report.pc,
                    self.same_pc_count
                );
                return Ok(RunOutcome {
                    cycles,
                    reason: StopReason::Hang { pc: report.pc },
                });
            }

            if !keep_going(&report) {
                return Ok(RunOutcome {
                    cycles,
                    reason: StopReason::Predicate,
                });
            }
        }
    }

    fn is_hung(&self) -> bool {
        self.hang_threshold
            .is_some_and(|threshold| threshold > 0 && self.same_pc_count >= threshold)
    }
}
