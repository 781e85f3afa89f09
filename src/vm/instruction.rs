use serde::{Deserialize, Serialize};
use std::fmt;

/// One miniplc0 instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", content = "arg", rename_all = "UPPERCASE")]
pub enum Instruction {
    Ill,
    Lit(i32),
    Lod(i32),
    Sto(i32),
    Add,
    Sub,
    Mul,
    Div,
    Wrt,
    Jmp(i32),
    Je(i32),
    Jne(i32),
    Jl(i32),
    Jge(i32),
    Jg(i32),
    Jle(i32),
}

impl Instruction {
    pub fn mnemonic(&self) -> &'static str {
        match self {
            Instruction::Ill => "ILL",
            Instruction::Lit(_) => "LIT",
            Instruction::Lod(_) => "LOD",
            Instruction::Sto(_) => "STO",
            Instruction::Add => "ADD",
            Instruction::Sub => "SUB",
            Instruction::Mul => "MUL",
            Instruction::Div => "DIV",
            Instruction::Wrt => "WRT",
            Instruction::Jmp(_) => "JMP",
            Instruction::Je(_) => "JE",
            Instruction::Jne(_) => "JNE",
            Instruction::Jl(_) => "JL",
            Instruction::Jge(_) => "JGE",
            Instruction::Jg(_) => "JG",
            Instruction::Jle(_) => "JLE",
        }
    }

    pub fn operand(&self) -> Option<i32> {
        match *self {
            Instruction::Lit(x)
            | Instruction::Lod(x)
            | Instruction::Sto(x)
            | Instruction::Jmp(x)
            | Instruction::Je(x)
            | Instruction::Jne(x)
            | Instruction::Jl(x)
            | Instruction::Jge(x)
            | Instruction::Jg(x)
            | Instruction::Jle(x) => Some(x),
            _ => None,
        }
    }

    /// Build an instruction from a mnemonic (any case) and its operand.
    ///
    /// Returns `None` when the mnemonic is unknown or the operand arity is wrong.
    pub fn from_parts(mnemonic: &str, operand: Option<i32>) -> Option<Self> {
        let upper = mnemonic.to_ascii_uppercase();
        let inst = match (upper.as_str(), operand) {
            ("ILL", None) => Instruction::Ill,
            ("ADD", None) => Instruction::Add,
            ("SUB", None) => Instruction::Sub,
            ("MUL", None) => Instruction::Mul,
            ("DIV", None) => Instruction::Div,
            ("WRT", None) => Instruction::Wrt,
            ("LIT", Some(x)) => Instruction::Lit(x),
            ("LOD", Some(x)) => Instruction::Lod(x),
            ("STO", Some(x)) => Instruction::Sto(x),
            ("JMP", Some(x)) => Instruction::Jmp(x),
            ("JE", Some(x)) => Instruction::Je(x),
            ("JNE", Some(x)) => Instruction::Jne(x),
            ("JL", Some(x)) => Instruction::Jl(x),
            ("JGE", Some(x)) => Instruction::Jge(x),
            ("JG", Some(x)) => Instruction::Jg(x),
            ("JLE", Some(x)) => Instruction::Jle(x),
            _ => return None,
        };
        Some(inst)
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.operand() {
            Some(x) => write!(f, "{} {}", self.mnemonic(), x),
            None => write!(f, "{}", self.mnemonic()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_canonical_form() {
        assert_eq!(Instruction::Lit(-3).to_string(), "LIT -3");
        assert_eq!(Instruction::Wrt.to_string(), "WRT");
        assert_eq!(Instruction::Jle(7).to_string(), "JLE 7");
    }

    #[test]
    fn test_from_parts_checks_arity() {
        assert_eq!(Instruction::from_parts("lit", Some(4)), Some(Instruction::Lit(4)));
        assert_eq!(Instruction::from_parts("Add", None), Some(Instruction::Add));
        assert_eq!(Instruction::from_parts("LIT", None), None);
        assert_eq!(Instruction::from_parts("ADD", Some(1)), None);
        assert_eq!(Instruction::from_parts("NOP", None), None);
    }

    #[test]
    fn test_json_shape() {
        let json = serde_json::to_string(&Instruction::Sto(2)).unwrap();
        assert_eq!(json, r#"{"op":"STO","arg":2}"#);
        let back: Instruction = serde_json::from_str(r#"{"op":"ADD"}"#).unwrap();
        assert_eq!(back, Instruction::Add);
    }
}
