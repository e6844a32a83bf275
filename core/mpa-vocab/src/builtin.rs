//! The CDLI Sumerian morphological tag set.

/// Base part-of-speech tags.
pub const POSTAGS: &[&str] = &[
    // Common words
    "N", "V", "AJ", "AV", "NU", "CNJ", "DET", "DP", "IP", "J", "PP", "QP",
    "REL", "RP", "XP",
    // Proper nouns
    "AN", "CN", "DN", "EN", "FN", "GN", "LN", "MN", "ON", "PN", "QN", "RN",
    "SN", "TN", "WN", "YN",
    // Unanalysable forms
    "X", "U",
];

/// Postags that may carry prefix segments.
pub const SPECIAL_POSTAGS: &[&str] = &["V"];

pub const VERB_PREFIXES: &[&str] = &[
    // Modal and negative
    "NEG", "MOD1", "MOD2", "MOD3", "MOD4", "MOD5", "MOD6", "MOD7",
    // Finite marker and coordinator
    "FIN", "COOR",
    // Ventive and middle
    "VEN", "MID",
    // Initial person prefixes
    "1-SG", "2-SG", "3-SG-H", "3-SG-NH", "1-PL", "2-PL", "3-PL",
    // Dimensional prefixes
    "DAT", "COM", "ABL", "TERM", "L1", "L1-SYN", "L2", "L3", "L4",
    // Final person prefixes
    "1-SG-A", "2-SG-A", "3-SG-H-A", "3-SG-NH-A", "3-SG-NH-P", "3-SG-H-P",
    "3-SG-H-L3", "3-SG-NH-L3",
];

pub const VERB_SUFFIXES: &[&str] = &[
    // Stem modification
    "PF", "PLEN", "RDP",
    // Aspect and subordination
    "FUT", "PT", "NMZ", "SUB",
    // Person suffixes
    "1-SG-S", "2-SG-S", "3-SG-S", "1-PL-S", "2-PL-S", "3-PL-S",
    "1-SG-A", "2-SG-A", "3-SG-A", "1-PL-A", "2-PL-A", "3-PL-A",
    "1-SG-P", "2-SG-P", "3-SG-P", "1-PL-P", "2-PL-P", "3-PL-P",
    // Nominal morphology after a nominalised verb
    "ABS", "ERG", "GEN", "DAT-H", "DAT-NH", "COM", "ABL", "TERM", "EQU",
    "L1", "L2-H", "L2-NH", "L3-H", "L3-NH", "L4", "ADV", "PL",
    "COP-1-SG", "COP-2-SG", "COP-3-SG", "COP-3-PL",
];

pub const NOUN_MORPHS: &[&str] = &[
    // Case markers
    "ABS", "ERG", "GEN", "DAT-H", "DAT-NH", "COM", "ABL", "TERM", "EQU",
    "L1", "L2-H", "L2-NH", "L3-H", "L3-NH", "L4", "ADV",
    // Number and demonstratives
    "PL", "DEM1", "DEM2", "DEM3",
    // Possessives
    "1-SG-POSS", "2-SG-POSS", "3-SG-H-POSS", "3-SG-NH-POSS",
    "1-PL-POSS", "2-PL-POSS", "3-PL-POSS",
    // Copula
    "COP-1-SG", "COP-2-SG", "COP-3-SG", "COP-3-PL",
];
