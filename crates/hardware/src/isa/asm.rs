//! LEGv8 Assembler.
//!
//! Turns one line of assembly text into an [`Instruction`] and its 32-bit word.
//! It performs:
//! 1. **Cleanup:** Strips a trailing `;` or `//` comment and surrounding whitespace.
//!    `#` is never a comment marker because it prefixes immediates.
//! 2. **Tokenizing:** Splits on commas and whitespace; the first token, case-folded,
//!    selects the mnemonic.
//! 3. **Operand parsing:** `X0`..`X31` registers and `#`-prefixed decimal or `0x` hex
//!    immediates, each range-checked against the field it is encoded into.
//!
//! # Syntax
//!
//! ```text
//! ADD  Xd, Xn, Xm        ADDI Xd, Xn, #imm12     LDUR Xt, [Xn, #imm9]
//! AND  Xd, Xn, Xm        SUBI Xd, Xn, #imm12     STUR Xt, [Xn, #imm9]
//! LSL  Xd, Xn, #shamt    CMP  Xn, Xm             CBZ  Xt, #imm19
//! B    #imm26            BL   #imm26             B.EQ #imm15
//! RET  [Xn]              NOP                     HALT
//! ```

use crate::common::constants::{LINK_REG, REG_31};
use crate::common::error::{AsmError, SourceError};
use crate::isa::encode::encode;
use crate::isa::instruction::{ArithOp, Instruction, MemOp};
use crate::isa::legv8::{Cond, XFunct};

/// Legal range of `B`/`BL` word offsets (26-bit signed).
pub const BRANCH_RANGE: (i64, i64) = (-(1 << 25), (1 << 25) - 1);
/// Legal range of `CBZ`/`CBNZ` word offsets (19-bit signed).
pub const CB_RANGE: (i64, i64) = (-(1 << 18), (1 << 18) - 1);
/// Legal range of `B.cond` word offsets (15-bit signed).
pub const COND_RANGE: (i64, i64) = (-(1 << 14), (1 << 14) - 1);
/// Legal range of `LDUR`/`STUR` byte offsets (9-bit signed).
pub const MEM_RANGE: (i64, i64) = (-(1 << 8), (1 << 8) - 1);
/// Legal range of `ADDI`/`SUBI` immediates (12-bit unsigned).
pub const IMM12_RANGE: (i64, i64) = (0, (1 << 12) - 1);
/// Legal range of `LSL`/`LSR` shift amounts (the 5-bit Rm slot).
pub const SHIFT_RANGE: (i64, i64) = (0, 31);

/// Assembles one line into an instruction word.
///
/// # Returns
///
/// `Ok(None)` for blank or comment-only lines, `Ok(Some(word))` for an
/// instruction.
///
/// # Errors
///
/// The [`AsmError`] describing why the line was rejected.
pub fn assemble(line: &str) -> Result<Option<u32>, AsmError> {
    Ok(parse_line(line)?.map(|inst| encode(&inst)))
}

/// Parses one line into an [`Instruction`] without encoding it.
///
/// # Errors
///
/// Same conditions as [`assemble`].
pub fn parse_line(line: &str) -> Result<Option<Instruction>, AsmError> {
    let tokens = tokenize(strip_comment(line));
    let Some(first) = tokens.first() else {
        return Ok(None);
    };
    let mnemonic = first.to_ascii_uppercase();
    let ops = &tokens[1..];

    let inst = match mnemonic.as_str() {
        "NOP" => {
            expect_arity(&mnemonic, ops, 0, "no operands")?;
            Instruction::Nop
        }
        "HALT" => {
            expect_arity(&mnemonic, ops, 0, "no operands")?;
            Instruction::Halt
        }
        "B" | "BL" => {
            expect_arity(&mnemonic, ops, 1, "#imm26")?;
            Instruction::Branch {
                link: mnemonic == "BL",
                offset: parse_ranged(ops[0], "branch offset", BRANCH_RANGE)?,
            }
        }
        "CBZ" | "CBNZ" => {
            expect_arity(&mnemonic, ops, 2, "Xt, #imm19")?;
            Instruction::CompareBranch {
                nonzero: mnemonic == "CBNZ",
                rt: parse_reg(ops[0])?,
                offset: parse_ranged(ops[1], "compare-branch offset", CB_RANGE)?,
            }
        }
        "LDUR" | "STUR" => {
            expect_arity(&mnemonic, ops, 3, "Xt, [Xn, #imm9]")?;
            let rt = parse_reg(ops[0])?;
            let base = ops[1].strip_prefix('[').ok_or_else(|| {
                AsmError::Syntax(format!("expected `[Xn` in {mnemonic}, found `{}`", ops[1]))
            })?;
            let offset = ops[2].strip_suffix(']').ok_or_else(|| {
                AsmError::Syntax(format!("expected `#imm]` in {mnemonic}, found `{}`", ops[2]))
            })?;
            Instruction::Memory {
                op: if mnemonic == "LDUR" {
                    MemOp::Load
                } else {
                    MemOp::Store
                },
                rt,
                rn: parse_reg(base)?,
                offset: parse_ranged(offset, "load/store offset", MEM_RANGE)?,
            }
        }
        "ADD" | "SUB" => {
            expect_arity(&mnemonic, ops, 3, "Xd, Xn, Xm")?;
            Instruction::Register {
                op: if mnemonic == "ADD" {
                    ArithOp::Add
                } else {
                    ArithOp::Sub
                },
                rd: parse_reg(ops[0])?,
                rn: parse_reg(ops[1])?,
                rm: parse_reg(ops[2])?,
                shamt: 0,
            }
        }
        "AND" | "ORR" | "EOR" | "MUL" => {
            expect_arity(&mnemonic, ops, 3, "Xd, Xn, Xm")?;
            let funct = match mnemonic.as_str() {
                "AND" => XFunct::And,
                "ORR" => XFunct::Orr,
                "EOR" => XFunct::Eor,
                _ => XFunct::Mul,
            };
            Instruction::Extended {
                funct,
                rd: parse_reg(ops[0])?,
                rn: parse_reg(ops[1])?,
                rm: parse_reg(ops[2])?,
            }
        }
        "LSL" | "LSR" => {
            expect_arity(&mnemonic, ops, 3, "Xd, Xn, #shamt")?;
            Instruction::Extended {
                funct: if mnemonic == "LSL" {
                    XFunct::Lsl
                } else {
                    XFunct::Lsr
                },
                rd: parse_reg(ops[0])?,
                rn: parse_reg(ops[1])?,
                rm: parse_ranged(ops[2], "shift amount", SHIFT_RANGE)? as usize,
            }
        }
        "ADDI" | "SUBI" => {
            expect_arity(&mnemonic, ops, 3, "Xd, Xn, #imm12")?;
            Instruction::Immediate {
                op: if mnemonic == "ADDI" {
                    ArithOp::Add
                } else {
                    ArithOp::Sub
                },
                rd: parse_reg(ops[0])?,
                rn: parse_reg(ops[1])?,
                imm: parse_ranged(ops[2], "immediate", IMM12_RANGE)? as u32,
            }
        }
        "CMP" => {
            expect_arity(&mnemonic, ops, 2, "Xn, Xm")?;
            Instruction::Extended {
                funct: XFunct::Cmp,
                rd: REG_31,
                rn: parse_reg(ops[0])?,
                rm: parse_reg(ops[1])?,
            }
        }
        "RET" => {
            let rn = match ops {
                [] => LINK_REG,
                [target] => parse_reg(target)?,
                _ => {
                    return Err(AsmError::Arity {
                        mnemonic: mnemonic.clone(),
                        expected: "RET or RET Xn",
                    });
                }
            };
            Instruction::Extended {
                funct: XFunct::Ret,
                rd: 0,
                rn,
                rm: 0,
            }
        }
        other => match other.strip_prefix("B.").map(Cond::from_suffix) {
            Some(Some(cond)) => {
                expect_arity(&mnemonic, ops, 1, "#imm15")?;
                Instruction::CondBranch {
                    cond,
                    offset: parse_ranged(ops[0], "conditional-branch offset", COND_RANGE)?,
                }
            }
            _ => return Err(AsmError::UnknownInstruction(mnemonic.clone())),
        },
    };

    Ok(Some(inst))
}

/// Assembles every line of `source`, skipping blank and comment-only lines.
///
/// # Returns
///
/// The words in source order.
///
/// # Errors
///
/// The first failing line's [`AsmError`], tagged with its 1-based line number.
pub fn assemble_source(source: &str) -> Result<Vec<u32>, SourceError> {
    let mut words = Vec::new();
    for (idx, line) in source.lines().enumerate() {
        match assemble(line) {
            Ok(Some(word)) => words.push(word),
            Ok(None) => {}
            Err(source) => {
                return Err(SourceError {
                    line: idx + 1,
                    source,
                });
            }
        }
    }
    Ok(words)
}

/// Removes a trailing `;` or `//` comment, whichever starts first, and trims.
fn strip_comment(line: &str) -> &str {
    let end = [line.find(';'), line.find("//")]
        .into_iter()
        .flatten()
        .min()
        .unwrap_or(line.len());
    line[..end].trim()
}

/// Splits on commas and whitespace, dropping empty pieces.
fn tokenize(line: &str) -> Vec<&str> {
    line.split(|c: char| c == ',' || c.is_whitespace())
        .filter(|t| !t.is_empty())
        .collect()
}

fn expect_arity(
    mnemonic: &str,
    ops: &[&str],
    count: usize,
    expected: &'static str,
) -> Result<(), AsmError> {
    if ops.len() == count {
        Ok(())
    } else {
        Err(AsmError::Arity {
            mnemonic: mnemonic.to_string(),
            expected,
        })
    }
}

/// Parses `X<n>` (case-insensitive) with `n` in 0..=31.
fn parse_reg(token: &str) -> Result<usize, AsmError> {
    let invalid = || AsmError::InvalidOperand {
        operand: token.to_string(),
        reason: "expected a register X0..X31",
    };
    let digits = token
        .strip_prefix('X')
        .or_else(|| token.strip_prefix('x'))
        .ok_or_else(invalid)?;
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }
    match digits.parse::<usize>() {
        Ok(n) if n <= REG_31 => Ok(n),
        _ => Err(invalid()),
    }
}

/// Parses `#imm`, decimal or `0x` hex, with an optional sign. The `#` may be omitted.
///
/// Well-formed values too large for `i64` saturate, so the caller's range
/// check reports them as out of range.
fn parse_imm(token: &str) -> Result<i64, AsmError> {
    let invalid = || AsmError::InvalidOperand {
        operand: token.to_string(),
        reason: "expected an immediate like #10 or #0x1F",
    };
    let body = token.strip_prefix('#').unwrap_or(token);
    let (negative, unsigned) = body.strip_prefix('-').map_or_else(
        || (false, body.strip_prefix('+').unwrap_or(body)),
        |rest| (true, rest),
    );
    let (radix, digits) = unsigned
        .strip_prefix("0x")
        .or_else(|| unsigned.strip_prefix("0X"))
        .map_or((10, unsigned), |hex| (16, hex));
    if digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix)) {
        return Err(invalid());
    }
    let magnitude = i64::from_str_radix(digits, radix).unwrap_or(i64::MAX);
    Ok(if negative { -magnitude } else { magnitude })
}

/// Parses an immediate and checks it against `range` (inclusive).
fn parse_ranged(token: &str, what: &'static str, range: (i64, i64)) -> Result<i64, AsmError> {
    let value = parse_imm(token)?;
    let (min, max) = range;
    if (min..=max).contains(&value) {
        Ok(value)
    } else {
        Err(AsmError::Range {
            what,
            value,
            min,
            max,
        })
    }
}
