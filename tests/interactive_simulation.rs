// tests/interactive_simulation.rs
// Simulates interactive debugging scenarios

use std::fs;
use std::io::Cursor;

#[cfg(test)]
mod interactive_tests {
    use super::*;
    use plc0_debugger::debugger::{DebugSession, SessionConfig, Termination, HELP};
    use plc0_debugger::executor;
    use plc0_debugger::vm::{Instruction, Machine};

    type Session = DebugSession<Machine, Cursor<Vec<u8>>, Vec<u8>>;

    fn three_instructions() -> Vec<Instruction> {
        vec![Instruction::Lit(7), Instruction::Lit(8), Instruction::Add]
    }

    fn quiet_session(program: Vec<Instruction>, script: &str) -> Session {
        let config = SessionConfig {
            banner: false,
            ..SessionConfig::default()
        };
        DebugSession::with_config(
            Machine::with_default_stack(program, 0),
            Cursor::new(script.as_bytes().to_vec()),
            Vec::new(),
            config,
        )
    }

    fn transcript(session: &Session) -> String {
        String::from_utf8(session.output().clone()).expect("output is utf-8")
    }

    #[test]
    fn test_end_to_end_scenario() {
        let mut session = quiet_session(three_instructions(), "info\nnext\nstack 5\nquit\n");
        let termination = session.run().unwrap();
        assert_eq!(termination, Termination::Quit);

        let expected = concat!(
            ">IP=0 SP=0\n",
            "Instructions[IP]:LIT 7\n",
            "Stack[SP-1]=[Invalid]\n",
            ">Next instruction: LIT 8\n",
            ">Stack[0]=7\n",
            ">",
        );
        assert_eq!(transcript(&session), expected);
        assert_eq!(session.engine().ip(), 1);
    }

    #[test]
    fn test_banner_printed_once() {
        let machine = Machine::with_default_stack(three_instructions(), 0);
        let mut session = DebugSession::new(machine, Cursor::new(b"h\nq\n".to_vec()), Vec::new());
        session.run().unwrap();

        let out = String::from_utf8(session.into_output()).unwrap();
        assert_eq!(out, format!("{HELP}>{HELP}>"));
    }

    #[test]
    fn test_next_after_halt_repeats() {
        let mut session = quiet_session(three_instructions(), "n\nn\nn\nn\nn\ni\nq\n");
        session.run().unwrap();

        let out = transcript(&session);
        assert_eq!(out.matches("The program has stopped.").count(), 2);
        assert!(out.contains("Next instruction: ILL"));
        assert!(out.contains("IP=3 SP=1"));
        assert!(out.contains("Stack[SP-1]=15"));
        assert_eq!(session.engine().ip(), 3);
    }

    #[test]
    fn test_list_is_clipped() {
        let mut session = quiet_session(three_instructions(), "list 100\nl\nL 2\nq\n");
        session.run().unwrap();

        let expected = concat!(
            ">[0] LIT 7\n[1] LIT 8\n[2] ADD\n",
            ">[0] LIT 7\n[1] LIT 8\n[2] ADD\n",
            ">[0] LIT 7\n[1] LIT 8\n",
            ">",
        );
        assert_eq!(transcript(&session), expected);
    }

    #[test]
    fn test_stack_never_exceeds_contents() {
        let mut session = quiet_session(three_instructions(), "n\nn\ns\ns 1\nq\n");
        session.run().unwrap();

        let out = transcript(&session);
        assert!(out.contains(">Stack[1]=8\nStack[0]=7\n>Stack[1]=8\n>"));
    }

    #[test]
    fn test_wrong_format_and_restart() {
        let mut session = quiet_session(three_instructions(), "list abc\nr\nfoo 5\nquit\n");
        session.run().unwrap();

        let out = transcript(&session);
        assert_eq!(out.matches("Wrong format.\nType 'help' to see more.\n").count(), 3);
        assert_eq!(session.engine().ip(), 0);
    }

    #[test]
    fn test_undecodable_line_is_wrong_format() {
        let mut script = b"info\n".to_vec();
        script.extend_from_slice(&[0xff, 0xfe, b'\n']);
        script.extend_from_slice(b"next\nquit\n");

        let config = SessionConfig {
            banner: false,
            ..SessionConfig::default()
        };
        let machine = Machine::with_default_stack(three_instructions(), 0);
        let mut session = DebugSession::with_config(machine, Cursor::new(script), Vec::new(), config);
        let termination = session.run().unwrap();
        assert_eq!(termination, Termination::Quit);

        let expected = concat!(
            ">IP=0 SP=0\n",
            "Instructions[IP]:LIT 7\n",
            "Stack[SP-1]=[Invalid]\n",
            ">Wrong format.\n",
            "Type 'help' to see more.\n",
            ">Next instruction: LIT 8\n",
            ">",
        );
        assert_eq!(transcript(&session), expected);
        assert_eq!(session.engine().ip(), 1);
    }

    #[test]
    fn test_fault_stops_session() {
        let program = vec![Instruction::Lit(1), Instruction::Lit(0), Instruction::Div];
        let mut session = quiet_session(program, "n\nn\nn\ninfo\nq\n");
        let termination = session.run().unwrap();

        match termination {
            Termination::EngineFault(fault) => assert!(!fault.is_halt()),
            other => panic!("expected a fault, got {other:?}"),
        }
        let out = transcript(&session);
        assert!(out.contains("division by zero at IP=2"));
        assert!(out.contains("->    2: DIV"));
        assert!(!out.contains("Instructions[IP]"));
    }

    #[test]
    fn test_debug_from_program_file() {
        let path = std::env::temp_dir().join("plc0_test_debug.json");
        fs::write(
            &path,
            r#"{"entry":1,"instructions":[{"op":"ILL"},{"op":"LIT","arg":9},{"op":"WRT"}]}"#,
        )
        .expect("Failed to write test file");

        let file = fs::File::open(&path).expect("Could not open test file");
        let mut out = Vec::new();
        let termination = executor::debug(
            file,
            16,
            Cursor::new(b"info\nnext\nnext\n".to_vec()),
            &mut out,
        )
        .unwrap();
        assert_eq!(termination, Termination::EndOfInput);

        let out = String::from_utf8(out).unwrap();
        assert!(out.starts_with(HELP));
        assert!(out.contains("IP=1 SP=0\nInstructions[IP]:LIT 9\n"));
        assert!(out.contains(">9\nNext instruction: ILL\n"));

        let _ = fs::remove_file(&path);
    }
}
