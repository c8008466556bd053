//! # Disassembler Tests
//!
//! Verifies the mnemonic text produced for every instruction group and the
//! raw-hex fallback for words that match no format.

use legv8_core::isa::disasm::{disassemble, disassemble_at};
use rstest::rstest;

#[rstest]
#[case(0x9100_1401, "ADDI X1, X0, #5")]
#[case(0xD100_0421, "SUBI X1, X1, #1")]
#[case(0x8B03_0041, "ADD X1, X2, X3")]
#[case(0xCB03_0041, "SUB X1, X2, X3")]
#[case(0xF85F_8041, "LDUR X1, [X2, #-8]")]
#[case(0xF800_8005, "STUR X5, [X0, #8]")]
#[case(0x17FF_FFFD, "B #-3")]
#[case(0x9400_0004, "BL #4")]
#[case(0xB400_0041, "CBZ X1, #2")]
#[case(0xB620_005F, "B.LT #2")]
#[case(0xAAA2_003F, "CMP X1, X2")]
#[case(0xAAA3_1041, "LSL X1, X2, #3")]
#[case(0xAAA0_1FC0, "RET X30")]
#[case(0xD503_201F, "NOP")]
#[case(0xFFFF_FFFF, "HALT")]
fn test_disassemble_known_words(#[case] word: u32, #[case] text: &str) {
    assert_eq!(disassemble(word), text);
}

#[test]
fn test_disassemble_unknown_word_as_hex() {
    assert_eq!(disassemble(0), "0x00000000");
    assert_eq!(disassemble(0x1234_ABCD), "0x1234ABCD");
}

#[test]
fn test_disassemble_at_ignores_pc() {
    assert_eq!(disassemble_at(0x17FF_FFFD, 0x40), disassemble(0x17FF_FFFD));
}
