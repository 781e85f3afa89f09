use super::ProgramError;
use crate::vm::Instruction;

/// Parse one line of assembler text. `None` means the line is not an instruction.
pub fn parse_instruction(line: &str) -> Option<Instruction> {
    let tokens = shlex::split(line.trim())?;
    match tokens.as_slice() {
        [op] => Instruction::from_parts(op, None),
        [op, arg] => {
            let x = arg.parse::<i32>().ok()?;
            Instruction::from_parts(op, Some(x))
        }
        _ => None,
    }
}

/// Check if line carries no instruction
pub fn is_comment(line: &str) -> bool {
    let trimmed = line.trim();
    trimmed.is_empty() || trimmed.starts_with('#')
}

/// Assemble a whole text listing. The first bad line aborts assembly.
pub fn assemble(text: &str) -> Result<Vec<Instruction>, ProgramError> {
    let mut instructions = Vec::new();
    for (i, line) in text.lines().enumerate() {
        if is_comment(line) {
            continue;
        }
        match parse_instruction(line) {
            Some(inst) => instructions.push(inst),
            None => {
                log::warn!("Line {}: bad instruction {:?}", i + 1, line);
                return Err(ProgramError::Syntax {
                    line: i + 1,
                    text: line.trim().to_string(),
                });
            }
        }
    }
    Ok(instructions)
}

/// Render instructions back to assembler text, one per line.
pub fn decompile(instructions: &[Instruction]) -> String {
    let mut out = String::new();
    for inst in instructions {
        out.push_str(&inst.to_string());
        out.push('\n');
    }
    out
}
