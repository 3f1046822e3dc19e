use pretty_assertions::assert_eq;

use hack_asm::{Dest, Jump, Operand, Tables};

// (mnemonic, a-bit and c1..c6 as one 7-bit value)
const COMP_7BIT: &[(&str, u8)] = &[
    ("0", 42), ("1", 63), ("-1", 58), ("D", 12), ("A", 48), ("!D", 13), ("!A", 49),
    ("-D", 15), ("-A", 51), ("D+1", 31), ("A+1", 55), ("D-1", 14), ("A-1", 50),
    ("D+A", 2), ("D-A", 19), ("A-D", 7), ("D&A", 0), ("D|A", 21),
    ("M", 112), ("!M", 113), ("-M", 115), ("M+1", 119), ("M-1", 114),
    ("D+M", 66), ("D-M", 83), ("M-D", 71), ("D&M", 64), ("D|M", 85),
];

#[test]
fn predefined_addresses() {
    let t = Tables::new();
    for i in 0..16u16 {
        assert_eq!(t.resolve_predefined(&format!("R{i}")), Some(i));
    }
    assert_eq!(t.resolve_predefined("SP"), Some(0));
    assert_eq!(t.resolve_predefined("LCL"), Some(1));
    assert_eq!(t.resolve_predefined("ARG"), Some(2));
    assert_eq!(t.resolve_predefined("THIS"), Some(3));
    assert_eq!(t.resolve_predefined("THAT"), Some(4));
    assert_eq!(t.resolve_predefined("SCREEN"), Some(16384));
    assert_eq!(t.resolve_predefined("KBD"), Some(24576));
    assert_eq!(t.predefined_len(), 23);

    assert_eq!(t.resolve_predefined("R16"), None);
    assert_eq!(t.resolve_predefined("sp"), None);
    assert_eq!(t.resolve_predefined(""), None);
}

#[test]
fn computation_codes_and_a_bit() {
    let t = Tables::new();
    for &(mn, expected) in COMP_7BIT {
        let c = t.resolve_computation(mn).unwrap_or_else(|| panic!("missing {mn}"));
        let a = match c.operand {
            Operand::A => 0,
            Operand::M => 1,
        };
        assert_eq!((a << 6) | c.code, expected, "comp {mn}");
    }
    assert_eq!(t.computation_len(), COMP_7BIT.len());
    assert_eq!(t.resolve_computation("A+D"), None);
    assert_eq!(t.resolve_computation(""), None);
}

#[test]
fn destination_codes_follow_enumeration_order() {
    let t = Tables::new();
    let names = ["", "M", "D", "MD", "A", "AM", "AD", "AMD"];
    for (code, name) in names.iter().enumerate() {
        assert_eq!(t.resolve_destination(name).map(|d| d.bits()), Some(code as u8), "dest {name:?}");
    }
    assert_eq!(t.resolve_destination("AM"), Some(Dest::A | Dest::M));
    assert_eq!(t.resolve_destination("DM"), None);
    assert_eq!(t.resolve_destination("X"), None);
}

#[test]
fn jump_codes_follow_enumeration_order() {
    let t = Tables::new();
    let names = ["", "JGT", "JEQ", "JGE", "JLT", "JNE", "JLE", "JMP"];
    for (code, name) in names.iter().enumerate() {
        assert_eq!(t.resolve_jump(name).map(Jump::code), Some(code as u8), "jump {name:?}");
    }
    assert_eq!(t.resolve_jump("jmp"), None);
}

#[test]
fn construction_is_deterministic() {
    let a = Tables::new();
    let b = Tables::new();
    assert_eq!(a, b);
    assert_eq!(Tables::default(), a);
}
