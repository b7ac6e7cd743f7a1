use std::fmt;

use bitflags::bitflags;

bitflags! {
    /// The three special permission bits, at their raw `st_mode` positions.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct SpecialBits: u16 {
        const SETUID = 0o4000;
        const SETGID = 0o2000;
        const STICKY = 0o1000;
    }
}

/// Permission half of an `st_mode`: the 9 rwx bits plus the special bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Mode {
    perm: u16,
    special: SpecialBits,
}

/// Owner, group, other: the shift of each triplet, the special bit that
/// overrides its execute slot, and the lowercase override letter.
const TRIPLETS: [(u16, SpecialBits, char); 3] = [
    (6, SpecialBits::SETUID, 's'),
    (3, SpecialBits::SETGID, 's'),
    (0, SpecialBits::STICKY, 't'),
];

impl Mode {
    pub fn new(perm: u16, special: SpecialBits) -> Self {
        Self {
            perm: perm & 0o777,
            special,
        }
    }

    /// Build from a raw `st_mode`. File-type bits are ignored.
    pub fn from_raw(raw: u32) -> Self {
        Self {
            perm: (raw & 0o777) as u16,
            special: SpecialBits::from_bits_truncate((raw & 0o7000) as u16),
        }
    }

    #[inline]
    pub fn perm(&self) -> u16 {
        self.perm
    }

    #[inline]
    pub fn special(&self) -> SpecialBits {
        self.special
    }

    /// Render the 9-character `rwxrwxrwx` form.
    ///
    /// A special bit replaces the execute slot of its triplet: lowercase
    /// (`s`/`t`) when the execute bit is set, uppercase (`S`/`T`) when not.
    pub fn permission_string(&self) -> String {
        let mut out = String::with_capacity(9);

        for (shift, flag, mark) in TRIPLETS {
            let mut chars = triplet(((self.perm >> shift) & 0o7) as u8);
            if self.special.contains(flag) {
                chars[2] = if chars[2] == 'x' {
                    mark
                } else {
                    mark.to_ascii_uppercase()
                };
            }
            out.extend(chars);
        }

        out
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.permission_string())
    }
}

/// Map one octal digit to its `rwx` triplet. Bits above 0o7 are ignored.
pub fn triplet(octet: u8) -> [char; 3] {
    [
        if octet & 0o4 != 0 { 'r' } else { '-' },
        if octet & 0o2 != 0 { 'w' } else { '-' },
        if octet & 0o1 != 0 { 'x' } else { '-' },
    ]
}

#[cfg(test)]
#[path = "mode_tests.rs"]
mod tests;
