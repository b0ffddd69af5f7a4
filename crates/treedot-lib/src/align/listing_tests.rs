//! Listing ingestion tests.
//!
//! Inputs are verbatim `dis` output; the column geometry matters, so no
//! dedenting helpers here.

use super::*;

#[test]
fn listing_rows_carry_lines_and_operands() {
    let listing = "  1           0 LOAD_CONST               0 (1)
              2 STORE_NAME               0 (x)

  2           4 LOAD_NAME                0 (x)
        >>    6 RETURN_VALUE
";

    let instructions = parse_listing(listing);
    assert_eq!(
        instructions,
        vec![
            Instruction::new("LOAD_CONST").with_operand("0 (1)").with_line(1),
            Instruction::new("STORE_NAME").with_operand("0 (x)").with_line(1),
            Instruction::new("LOAD_NAME").with_operand("0 (x)").with_line(2),
            Instruction::new("RETURN_VALUE").with_line(2),
        ]
    );
}

#[test]
fn continuation_rows_inherit_the_current_line() {
    let listing = "  3           0 LOAD_NAME                0 (print)
              2 CALL                     0
              4 POP_TOP
";

    let lines: Vec<Option<u32>> = parse_listing(listing).iter().map(|i| i.line).collect();
    assert_eq!(lines, vec![Some(3), Some(3), Some(3)]);
}

#[test]
fn double_dash_marks_synthetic_rows() {
    let listing = "  1           0 LOAD_CONST               0 (1)
 --           2 COPY                     3
";

    let instructions = parse_listing(listing);
    assert_eq!(instructions[0].line, Some(1));
    assert_eq!(instructions[1].opcode, "COPY");
    assert_eq!(instructions[1].line, None);
}

#[test]
fn offsetless_rows_parse() {
    // Python 3.13 omits offsets by default.
    let listing = "  1           RESUME                   0
              LOAD_CONST               0 (1)
";

    let instructions = parse_listing(listing);
    assert_eq!(
        instructions,
        vec![
            Instruction::new("RESUME").with_operand("0").with_line(1),
            Instruction::new("LOAD_CONST").with_operand("0 (1)").with_line(1),
        ]
    );
}

#[test]
fn headers_and_blanks_are_skipped() {
    let listing = "Disassembly of <code object f at 0x1010, file \"app.py\", line 1>:

  1           0 RETURN_CONST             0 (None)
";

    let instructions = parse_listing(listing);
    assert_eq!(instructions.len(), 1);
    assert_eq!(instructions[0].opcode, "RETURN_CONST");
}

#[test]
fn empty_listing_yields_no_instructions() {
    assert!(parse_listing("").is_empty());
    assert!(parse_listing("\n\n").is_empty());
}
