//! Read-only text views over engine state.

use super::Engine;
use std::fmt::Write;

/// Up to `count` instructions starting at the current PC, clipped at the end
/// of the program. A non-positive count gives an empty listing.
pub fn instruction_window<E: Engine + ?Sized>(engine: &E, count: i32) -> String {
    let count = usize::try_from(count).unwrap_or(0);
    let start = engine.pc();
    let mut out = String::new();
    for (i, inst) in engine
        .instructions()
        .iter()
        .enumerate()
        .skip(start)
        .take(count)
    {
        let _ = writeln!(out, "[{}] {}", i, inst);
    }
    out
}

/// Up to `count` stack values counting down from the top.
pub fn stack_window<E: Engine + ?Sized>(engine: &E, count: i32) -> String {
    let count = usize::try_from(count).unwrap_or(0);
    let mut out = String::new();
    for (i, value) in engine.stack().iter().enumerate().rev().take(count) {
        let _ = writeln!(out, "Stack[{}]={}", i, value);
    }
    out
}

/// The `info` summary: PC, SP, the pending instruction and the stack top.
pub fn information<E: Engine + ?Sized>(engine: &E) -> String {
    let top = match engine.stack_top() {
        Some(value) => value.to_string(),
        None => "[Invalid]".to_string(),
    };
    format!(
        "IP={} SP={}\nInstructions[IP]:{}\nStack[SP-1]={}\n",
        engine.pc(),
        engine.sp(),
        engine.next_instruction(),
        top
    )
}
