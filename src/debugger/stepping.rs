use super::Engine;
use crate::vm::VmError;

/// Result of asking the engine for one instruction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepOutcome {
    Advanced,
    Halted,
    Fatal(VmError),
}

pub fn step_once<E: Engine + ?Sized>(engine: &mut E) -> StepOutcome {
    match engine.step() {
        Ok(()) => StepOutcome::Advanced,
        Err(e) if e.is_halt() => StepOutcome::Halted,
        Err(e) => StepOutcome::Fatal(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vm::{Instruction, Machine};

    #[test]
    fn test_classifies_outcomes() {
        let mut m = Machine::with_default_stack(vec![Instruction::Lit(1), Instruction::Ill], 0);
        assert_eq!(step_once(&mut m), StepOutcome::Advanced);
        assert_eq!(step_once(&mut m), StepOutcome::Halted);
        assert_eq!(step_once(&mut m), StepOutcome::Halted);
        assert_eq!(m.ip(), 1);

        let mut m = Machine::with_default_stack(vec![Instruction::Wrt], 0);
        assert_eq!(
            step_once(&mut m),
            StepOutcome::Fatal(VmError::StackUnderflow { ip: 0 })
        );
    }
}
