use core::fmt;

/// Canonical names, indexed by register number.
const NAMES: [&str; Register::COUNT] = [
    "$zero", "$ra", "$sp", "$gp", "$tp", "$t0", "$t1", "$t2", "$s0", "$s1", "$a0", "$a1", "$a2",
    "$a3", "$a4", "$a5", "$a6", "$a7", "$s2", "$s3", "$s4", "$s5", "$s6", "$s7", "$s8", "$s9",
    "$s10", "$s11", "$t3", "$t4", "$t5", "$t6",
];

/// One of the 32 integer registers, addressed by its 5-bit index.
#[derive(PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Hash)]
pub struct Register(u8);

impl fmt::Debug for Register {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "X{}", self.0)
    }
}

impl fmt::Display for Register {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// all of these functions are super trivial and should *always* be inlined.
#[allow(clippy::inline_always)]
impl Register {
    #[inline(always)]
    #[must_use]
    pub const fn new(index: u8) -> Option<Self> {
        match index < 32 {
            true => Some(Self(index)),
            false => None,
        }
    }

    /// Builds a register from the low 5 bits of `bits`, which is always in range.
    #[inline(always)]
    #[must_use]
    pub const fn from_bits(bits: u32) -> Self {
        Self((bits & 0b1_1111) as u8)
    }

    #[inline(always)]
    #[must_use]
    pub const fn get(self) -> u8 {
        self.0
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        NAMES[self.0 as usize]
    }

    /// Resolves a canonical name such as `$t1`. Names are case sensitive and
    /// the leading `$` is required.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.as_bytes();

        hashify::tiny_map!(
            name,
            "$zero" => Self::ZERO,
            "$ra" => Self::RA,
            "$sp" => Self::SP,
            "$gp" => Self::GP,
            "$tp" => Self::TP,
            "$t0" => Self::T0,
            "$t1" => Self::T1,
            "$t2" => Self::T2,
            "$s0" => Self::S0,
            "$s1" => Self::S1,
            "$a0" => Self::A0,
            "$a1" => Self::A1,
            "$a2" => Self::A2,
            "$a3" => Self::A3,
            "$a4" => Self::A4,
            "$a5" => Self::A5,
            "$a6" => Self::A6,
            "$a7" => Self::A7,
            "$s2" => Self::S2,
            "$s3" => Self::S3,
            "$s4" => Self::S4,
            "$s5" => Self::S5,
            "$s6" => Self::S6,
            "$s7" => Self::S7,
            "$s8" => Self::S8,
            "$s9" => Self::S9,
            "$s10" => Self::S10,
            "$s11" => Self::S11,
            "$t3" => Self::T3,
            "$t4" => Self::T4,
            "$t5" => Self::T5,
            "$t6" => Self::T6,
        )
    }

    pub fn all() -> impl Iterator<Item = Self> {
        (0..Self::COUNT as u8).map(Self)
    }

    pub const ZERO: Self = Self(0);
    pub const RA: Self = Self(1);
    pub const SP: Self = Self(2);
    pub const GP: Self = Self(3);
    pub const TP: Self = Self(4);
    pub const T0: Self = Self(5);
    pub const T1: Self = Self(6);
    pub const T2: Self = Self(7);
    pub const S0: Self = Self(8);
    pub const S1: Self = Self(9);
    pub const A0: Self = Self(10);
    pub const A1: Self = Self(11);
    pub const A2: Self = Self(12);
    pub const A3: Self = Self(13);
    pub const A4: Self = Self(14);
    pub const A5: Self = Self(15);
    pub const A6: Self = Self(16);
    pub const A7: Self = Self(17);
    pub const S2: Self = Self(18);
    pub const S3: Self = Self(19);
    pub const S4: Self = Self(20);
    pub const S5: Self = Self(21);
    pub const S6: Self = Self(22);
    pub const S7: Self = Self(23);
    pub const S8: Self = Self(24);
    pub const S9: Self = Self(25);
    pub const S10: Self = Self(26);
    pub const S11: Self = Self(27);
    pub const T3: Self = Self(28);
    pub const T4: Self = Self(29);
    pub const T5: Self = Self(30);
    pub const T6: Self = Self(31);

    pub const COUNT: usize = 32;
}
