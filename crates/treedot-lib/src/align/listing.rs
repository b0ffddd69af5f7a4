//! Ingest for CPython `dis`-style disassembly listings.
//!
//! Typical input:
//!
//! ```text
//!   1           0 LOAD_CONST               0 (1)
//!               2 STORE_NAME               0 (x)
//!
//!   2           4 LOAD_NAME                0 (x)
//!         >>    6 RETURN_VALUE
//! ```
//!
//! The line-number column appears only on the first instruction of each
//! source line; subsequent rows inherit it. A `--` in that column marks an
//! instruction with no line information. Unrecognized lines (headers,
//! blanks) are skipped rather than failing.

use super::Instruction;

/// Parse a disassembly listing into instructions.
pub fn parse_listing(text: &str) -> Vec<Instruction> {
    let mut instructions = Vec::new();
    let mut current_line: Option<u32> = None;

    for raw in text.lines() {
        let indent = raw.len() - raw.trim_start().len();
        let mut tokens: Vec<&str> = raw.split_whitespace().collect();
        tokens.retain(|t| *t != ">>");
        if tokens.is_empty() {
            continue;
        }

        let mut rest = &tokens[..];
        // The line-number column hugs the left margin; offsets and opcodes
        // on continuation rows start much deeper.
        if indent < 8 {
            if rest[0] == "--" {
                current_line = None;
                rest = &rest[1..];
            } else if let Ok(line) = rest[0].parse::<u32>() {
                current_line = Some(line);
                rest = &rest[1..];
            }
        }

        // Optional bytecode offset before the opcode.
        if let Some(first) = rest.first() {
            if first.parse::<u32>().is_ok() {
                rest = &rest[1..];
            }
        }

        let Some((opcode, operand_tokens)) = rest.split_first() else {
            continue;
        };
        if !is_opcode(opcode) {
            continue;
        }

        let mut instruction = Instruction::new(*opcode);
        if !operand_tokens.is_empty() {
            instruction = instruction.with_operand(operand_tokens.join(" "));
        }
        if let Some(line) = current_line {
            instruction = instruction.with_line(line);
        }
        instructions.push(instruction);
    }

    instructions
}

/// Opcode names are uppercase with underscores, plus the odd digit
/// (`LOAD_FAST_LOAD_FAST`, `CALL_FUNCTION_EX`).
fn is_opcode(token: &str) -> bool {
    token.chars().any(|c| c.is_ascii_uppercase())
        && token
            .chars()
            .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit() || c == '_' || c == '+')
}
