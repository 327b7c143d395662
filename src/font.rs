//! Built-in 5x8 glyph table
//!
//! One entry per character code from `0x20` (space) to `0x9F`. Each glyph is
//! five column bytes, left to right; bit `n` of a column byte is row `n` of
//! the glyph. Codes `0x7F..=0x9F` hold line-drawing and bar-graph pieces.

/// First character code in the table
pub const FIRST_GLYPH: u8 = 0x20;

/// Last character code in the table
pub const LAST_GLYPH: u8 = 0x9F;

/// Columns per glyph
pub const GLYPH_WIDTH: usize = 5;

#[rustfmt::skip]
static GLYPHS: [[u8; GLYPH_WIDTH]; (LAST_GLYPH - FIRST_GLYPH) as usize + 1] = [
    [0x00, 0x00, 0x00, 0x00, 0x00], // 0x20
    [0x00, 0x00, 0xF2, 0x00, 0x00], // 0x21 !
    [0x00, 0xE0, 0x00, 0xE0, 0x00], // 0x22 "
    [0x28, 0xFE, 0x28, 0xFE, 0x28], // 0x23 #
    [0x24, 0x54, 0xFE, 0x54, 0x48], // 0x24 $
    [0xC6, 0xC8, 0x10, 0x26, 0xC6], // 0x25 %
    [0x6C, 0x92, 0xAA, 0x44, 0x0A], // 0x26 &
    [0x00, 0xA0, 0xC0, 0x00, 0x00], // 0x27 '
    [0x38, 0x44, 0x82, 0x00, 0x00], // 0x28 (
    [0x00, 0x00, 0x82, 0x44, 0x38], // 0x29 )
    [0x28, 0x10, 0x7C, 0x10, 0x28], // 0x2a *
    [0x10, 0x10, 0x7C, 0x10, 0x10], // 0x2b +
    [0x00, 0x00, 0x0A, 0x0C, 0x00], // 0x2c ,
    [0x10, 0x10, 0x10, 0x10, 0x10], // 0x2d -
    [0x00, 0x00, 0x02, 0x00, 0x00], // 0x2e .
    [0x04, 0x08, 0x10, 0x20, 0x40], // 0x2f /
    [0x7C, 0x8A, 0x92, 0xA2, 0x7C], // 0x30 0
    [0x00, 0x42, 0xFE, 0x02, 0x00], // 0x31 1
    [0x42, 0x86, 0x8A, 0x92, 0x62], // 0x32 2
    [0x84, 0x82, 0xA2, 0xD2, 0x8C], // 0x33 3
    [0x18, 0x28, 0x48, 0xFE, 0x08], // 0x34 4
    [0xE4, 0xA2, 0xA2, 0xA2, 0x9C], // 0x35 5
    [0x3C, 0x52, 0x92, 0x92, 0x0C], // 0x36 6
    [0x80, 0x8E, 0x90, 0xA0, 0xC0], // 0x37 7
    [0x6C, 0x92, 0x92, 0x92, 0x6C], // 0x38 8
    [0x60, 0x92, 0x92, 0x94, 0x78], // 0x39 9
    [0x00, 0x00, 0x6C, 0x6C, 0x00], // 0x3a :
    [0x00, 0x00, 0x6A, 0x6C, 0x00], // 0x3b ;
    [0x10, 0x28, 0x44, 0x82, 0x00], // 0x3c <
    [0x28, 0x28, 0x28, 0x28, 0x28], // 0x3d =
    [0x00, 0x82, 0x44, 0x28, 0x10], // 0x3e >
    [0x40, 0x80, 0x8A, 0x90, 0x60], // 0x3f ?
    [0x4C, 0x92, 0x9C, 0x42, 0x3C], // 0x40 @
    [0x7E, 0x88, 0x88, 0x88, 0x7E], // 0x41 A
    [0xFE, 0x92, 0x92, 0x92, 0x6C], // 0x42 B
    [0x7C, 0x82, 0x82, 0x82, 0x44], // 0x43 C
    [0xFE, 0x82, 0x82, 0x44, 0x38], // 0x44 D
    [0xFE, 0x92, 0x92, 0x92, 0x82], // 0x45 E
    [0xFE, 0x90, 0x90, 0x90, 0x80], // 0x46 F
    [0x7C, 0x82, 0x92, 0x92, 0x5E], // 0x47 G
    [0xFE, 0x10, 0x10, 0x10, 0xFE], // 0x48 H
    [0x00, 0x82, 0xFE, 0x82, 0x00], // 0x49 I
    [0x04, 0x02, 0x82, 0xFC, 0x80], // 0x4a J
    [0xFE, 0x10, 0x28, 0x44, 0x82], // 0x4b K
    [0xFE, 0x02, 0x02, 0x02, 0x02], // 0x4c L
    [0xFE, 0x40, 0x20, 0x40, 0xFE], // 0x4d M
    [0xFE, 0x20, 0x10, 0x08, 0xFE], // 0x4e N
    [0x7C, 0x82, 0x82, 0x82, 0x7C], // 0x4f O
    [0xFE, 0x90, 0x90, 0x90, 0x60], // 0x50 P
    [0x7C, 0x82, 0x8A, 0x84, 0x7A], // 0x51 Q
    [0xFE, 0x90, 0x98, 0x94, 0x62], // 0x52 R
    [0x62, 0x92, 0x92, 0x92, 0x8C], // 0x53 S
    [0x80, 0x80, 0xFE, 0x80, 0x80], // 0x54 T
    [0xFC, 0x02, 0x02, 0x02, 0xFC], // 0x55 U
    [0xF8, 0x04, 0x02, 0x04, 0xF8], // 0x56 V
    [0xFC, 0x02, 0x1C, 0x02, 0xFC], // 0x57 W
    [0xC6, 0x28, 0x10, 0x28, 0xC6], // 0x58 X
    [0xE0, 0x10, 0x1E, 0x10, 0xE0], // 0x59 Y
    [0x86, 0x8A, 0x92, 0xA2, 0xC2], // 0x5a Z
    [0x00, 0xFE, 0x82, 0x82, 0x00], // 0x5b [
    [0x18, 0x24, 0x7E, 0x24, 0x18], // 0x5c \
    [0x00, 0x82, 0x82, 0xFE, 0x00], // 0x5d ]
    [0x20, 0x40, 0x80, 0x40, 0x20], // 0x5e ^
    [0x02, 0x02, 0x02, 0x02, 0x02], // 0x5f _
    [0x00, 0x00, 0x80, 0x40, 0x00], // 0x60 `
    [0x04, 0x2A, 0x2A, 0x2A, 0x1E], // 0x61 a
    [0xFE, 0x12, 0x22, 0x22, 0x1C], // 0x62 b
    [0x1C, 0x22, 0x22, 0x22, 0x04], // 0x63 c
    [0x1C, 0x22, 0x22, 0x12, 0xFE], // 0x64 d
    [0x1C, 0x2A, 0x2A, 0x2A, 0x18], // 0x65 e
    [0x10, 0x7E, 0x90, 0x80, 0x40], // 0x66 f
    [0x10, 0x2A, 0x2A, 0x2A, 0x3C], // 0x67 g
    [0xFE, 0x10, 0x20, 0x20, 0x1E], // 0x68 h
    [0x00, 0x22, 0xBE, 0x02, 0x00], // 0x69 i
    [0x04, 0x02, 0x22, 0xBC, 0x00], // 0x6a j
    [0x00, 0xFE, 0x08, 0x14, 0x22], // 0x6b k
    [0x00, 0x82, 0xFE, 0x02, 0x00], // 0x6c l
    [0x3E, 0x20, 0x18, 0x20, 0x1E], // 0x6d m
    [0x3E, 0x10, 0x20, 0x20, 0x1E], // 0x6e n
    [0x1C, 0x22, 0x22, 0x22, 0x1C], // 0x6f o
    [0x3E, 0x28, 0x28, 0x28, 0x10], // 0x70 p
    [0x10, 0x28, 0x28, 0x28, 0x3E], // 0x71 q
    [0x3E, 0x10, 0x20, 0x20, 0x10], // 0x72 r
    [0x12, 0x2A, 0x2A, 0x2A, 0x24], // 0x73 s
    [0x20, 0xFC, 0x22, 0x02, 0x04], // 0x74 t
    [0x3C, 0x02, 0x02, 0x04, 0x3E], // 0x75 u
    [0x38, 0x04, 0x02, 0x04, 0x38], // 0x76 v
    [0x3C, 0x02, 0x0C, 0x02, 0x3C], // 0x77 w
    [0x22, 0x14, 0x08, 0x14, 0x22], // 0x78 x
    [0x30, 0x0A, 0x0A, 0x0A, 0x30], // 0x79 y
    [0x22, 0x26, 0x2A, 0x32, 0x22], // 0x7a z
    [0x00, 0x10, 0x6C, 0x82, 0x00], // 0x7b {
    [0x00, 0x00, 0xFE, 0x00, 0x00], // 0x7c |
    [0x00, 0x82, 0x6C, 0x10, 0x00], // 0x7d }
    [0x08, 0x10, 0x10, 0x08, 0x08], // 0x7e ~
    [0xFF, 0x80, 0x80, 0x80, 0x80], // 0x7f
    [0x80, 0x80, 0x80, 0x80, 0x80], // 0x80
    [0x80, 0x80, 0xFF, 0x80, 0x80], // 0x81
    [0x80, 0x80, 0x80, 0x80, 0xFF], // 0x82
    [0xFF, 0x00, 0x00, 0x00, 0x00], // 0x83
    [0x00, 0x00, 0xFF, 0x00, 0x00], // 0x84
    [0x00, 0x00, 0x00, 0x00, 0xFF], // 0x85
    [0xFF, 0x10, 0x10, 0x10, 0x10], // 0x86
    [0x10, 0x10, 0x10, 0x10, 0x10], // 0x87
    [0x10, 0x10, 0xFF, 0x10, 0x10], // 0x88
    [0x10, 0x10, 0x10, 0x10, 0xFF], // 0x89
    [0xFF, 0x10, 0x10, 0x10, 0x10], // 0x8a
    [0x10, 0x10, 0x10, 0x10, 0x10], // 0x8b
    [0x10, 0x10, 0xFF, 0x10, 0x10], // 0x8c
    [0x10, 0x10, 0x10, 0x10, 0xFF], // 0x8d
    [0xFF, 0x80, 0xBF, 0xA0, 0xA0], // 0x8e
    [0xA0, 0xA0, 0xA0, 0xA0, 0xA0], // 0x8f
    [0xA0, 0xBF, 0x80, 0xBF, 0xA0], // 0x90
    [0xA0, 0xA0, 0xBF, 0x80, 0xFF], // 0x91
    [0xFF, 0x00, 0xFF, 0x00, 0x00], // 0x92
    [0x00, 0xFF, 0x00, 0xFF, 0x00], // 0x93
    [0x00, 0x00, 0xFF, 0x00, 0xFF], // 0x94
    [0xFF, 0x00, 0xEF, 0x28, 0x28], // 0x95
    [0x28, 0x28, 0x28, 0x28, 0x28], // 0x96
    [0x28, 0xEF, 0x00, 0xEF, 0x28], // 0x97
    [0x28, 0x28, 0xEF, 0x00, 0xFF], // 0x98
    [0xFF, 0x01, 0xFD, 0x05, 0x05], // 0x99
    [0x05, 0x05, 0x05, 0x05, 0x05], // 0x9a
    [0x05, 0xFD, 0x01, 0xFD, 0x05], // 0x9b
    [0x05, 0x05, 0xFD, 0x01, 0xFF], // 0x9c
    [0x00, 0x00, 0x3E, 0x22, 0x3E], // 0x9d
    [0x00, 0x00, 0x00, 0x00, 0x3E], // 0x9e
    [0x00, 0x00, 0x2E, 0x2A, 0x3A], // 0x9f
];

/// Column bytes for character `code`, or `None` outside `0x20..=0x9F`
///
/// ```
/// use uc1601s::font::glyph_columns;
///
/// assert_eq!(glyph_columns(b'A'), Some([0x7E, 0x88, 0x88, 0x88, 0x7E]));
/// assert_eq!(glyph_columns(0x1F), None);
/// ```
pub fn glyph_columns(code: u8) -> Option<[u8; GLYPH_WIDTH]> {
    code.checked_sub(FIRST_GLYPH)
        .and_then(|index| GLYPHS.get(usize::from(index)))
        .copied()
}
