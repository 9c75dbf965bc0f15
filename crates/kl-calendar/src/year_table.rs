//! Lunar year table for 1391–2050.
//!
//! One [`LunarYearRecord`] per year: the length of each ordinary month, the
//! intercalary month (if any) and its length, and the leap flag of the solar
//! year with the same number.
//!
//! The records are decoded at compile time from one 32-bit word per year:
//!
//! | Bits    | Field                                  |
//! |---------|----------------------------------------|
//! | 0–11    | month 12 … month 1, set = 30-day month |
//! | 12–15   | intercalary month number (0 = none)    |
//! | 16      | intercalary month is 30 days           |
//! | 17–25   | total days in the lunar year           |
//! | 30      | solar year is a leap year              |
//!
//! Only [`LunarYearRecord`] is public; nothing outside this module looks at
//! bits.

use kl_core::ensure;
use kl_core::errors::Result;

use crate::day_count::{REFORM_GAP_DAYS, REFORM_YEAR};

/// First year covered by the table.
pub const FIRST_YEAR: i32 = 1391;

/// Last year covered by the table.
pub const LAST_YEAR: i32 = 2050;

/// Number of records in the table.
pub const YEAR_COUNT: usize = (LAST_YEAR - FIRST_YEAR + 1) as usize;

/// Days in a small (29-day) lunar month.
pub const SMALL_MONTH_DAYS: u32 = 29;

/// Days in a big (30-day) lunar month.
pub const BIG_MONTH_DAYS: u32 = 30;

/// Calendar data for one lunar year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LunarYearRecord {
    /// The year this record describes.
    pub year: i32,
    /// Total days in the lunar year (353–385).
    pub total_days: u16,
    /// `big_months[m - 1]` is `true` if ordinary month `m` has 30 days.
    pub big_months: [bool; 12],
    /// Ordinary month the intercalary month follows, `0` for none.
    pub intercalary_month: u8,
    /// `true` if the intercalary month has 30 days.
    pub intercalary_is_big: bool,
    /// `true` if the solar year has a 29 February.
    pub solar_is_leap: bool,
}

impl LunarYearRecord {
    /// Return `true` if the year contains an intercalary month.
    pub fn has_intercalary(&self) -> bool {
        self.intercalary_month != 0
    }

    /// Return `true` if `month` is this year's intercalary month.
    pub fn is_intercalary_month(&self, month: u32) -> bool {
        self.has_intercalary() && u32::from(self.intercalary_month) == month
    }

    /// Length of a lunar month, 29 or 30.
    ///
    /// The intercalary length is used only when `intercalary` is set *and*
    /// `month` is the intercalary month; otherwise the ordinary month's length
    /// is returned.
    ///
    /// # Panics
    /// Panics if `month` is not in `1..=12`.
    pub fn month_days(&self, month: u32, intercalary: bool) -> u32 {
        let big = if intercalary && self.is_intercalary_month(month) {
            self.intercalary_is_big
        } else {
            self.big_months[month as usize - 1]
        };
        if big {
            BIG_MONTH_DAYS
        } else {
            SMALL_MONTH_DAYS
        }
    }

    /// Sum of the month lengths, intercalary month included.
    pub fn month_days_sum(&self) -> u32 {
        let ordinary: u32 = (1..=12).map(|m| self.month_days(m, false)).sum();
        if self.has_intercalary() {
            ordinary + self.month_days(u32::from(self.intercalary_month), true)
        } else {
            ordinary
        }
    }

    /// Days in the solar year with the same number: 365 or 366, and 355 for
    /// 1582, which lost ten days in October.
    pub const fn solar_days_in_year(&self) -> u32 {
        let days = if self.solar_is_leap { 366 } else { 365 };
        if self.year == REFORM_YEAR {
            days - REFORM_GAP_DAYS
        } else {
            days
        }
    }
}

/// Look up the record for `year`.
///
/// # Errors
/// [`kl_core::Error::OutOfRange`] if `year` is outside 1391–2050.
pub fn lookup(year: i32) -> Result<&'static LunarYearRecord> {
    ensure!(
        (FIRST_YEAR..=LAST_YEAR).contains(&year),
        OutOfRange,
        "year {year} outside [{FIRST_YEAR}, {LAST_YEAR}]"
    );
    Ok(&TABLE[(year - FIRST_YEAR) as usize])
}

/// Iterate over every record in year order.
pub fn records() -> impl Iterator<Item = &'static LunarYearRecord> {
    TABLE.iter()
}

// ── Table ─────────────────────────────────────────────────────────────────────

pub(crate) const RECORDS: [LunarYearRecord; YEAR_COUNT] = decode_table(&PACKED);

static TABLE: [LunarYearRecord; YEAR_COUNT] = RECORDS;

const fn decode(year: i32, word: u32) -> LunarYearRecord {
    let mut big_months = [false; 12];
    let mut m = 1;
    while m <= 12 {
        big_months[m - 1] = (word >> (12 - m)) & 1 == 1;
        m += 1;
    }
    LunarYearRecord {
        year,
        total_days: ((word >> 17) & 0x1ff) as u16,
        big_months,
        intercalary_month: ((word >> 12) & 0xf) as u8,
        intercalary_is_big: (word >> 16) & 1 == 1,
        solar_is_leap: (word >> 30) & 1 == 1,
    }
}

const fn decode_table(packed: &[u32; YEAR_COUNT]) -> [LunarYearRecord; YEAR_COUNT] {
    let mut out = [decode(0, 0); YEAR_COUNT];
    let mut i = 0;
    while i < YEAR_COUNT {
        out[i] = decode(FIRST_YEAR + i as i32, packed[i]);
        i += 1;
    }
    out
}

#[rustfmt::skip]
const PACKED: [u32; YEAR_COUNT] = [
    // 1391
    0x82c40653, 0xc301c6a9, 0x82c405aa, 0x82c60ab5, 0x830092bd, 0xc2c402b6, 0x82c60c37, 0x82fe552e, 0x82c40c96, 0xc2c60e4b,
    // 1401
    0x82fe3752, 0x82c60daa, 0x8301b5b4, 0xc2c6056d, 0x82c402ae, 0x83007a3d, 0x82c40a2d, 0xc2c40d15, 0x83004d95, 0x82c40b52,
    // 1411
    0x8300cb69, 0xc2c60ada, 0x82c6055d, 0x8301925b, 0x82c4045b, 0xc2c40a2b, 0x83005aab, 0x82c40a95, 0x82c40b52, 0xc3001eaa,
    // 1421
    0x82c60ab6, 0x8300c55b, 0x82c604b7, 0xc2c40457, 0x83007537, 0x82c4052b, 0x82c40695, 0xc3014695, 0x82c405aa, 0x8300c9b5,
    // 1431
    0x82c60a6e, 0xc2c404ae, 0x83008a5e, 0x82c40a56, 0x82c40d2a, 0xc3006eaa, 0x82c60d55, 0x82c4056a, 0x8301295a, 0xc2c6095e,
    // 1441
    0x8300b4af, 0x82c4049b, 0x82c40a4d, 0xc3007d2e, 0x82c40b2a, 0x82c60b55, 0x830045d5, 0xc2c402da, 0x82c6095b, 0x83011157,
    // 1451
    0x82c4049b, 0xc3009a4f, 0x82c4064b, 0x82c406a9, 0x83006aea, 0xc2c606b5, 0x82c402b6, 0x83002aae, 0x82c60937, 0xc2ffb496,
    // 1461
    0x82c40c96, 0x82c60e4b, 0x82fe76b2, 0xc2c60daa, 0x82c605ad, 0x8300336d, 0x82c4026e, 0xc2c4092e, 0x83002d2d, 0x82c40c95,
    // 1471
    0x83009d4d, 0xc2c40b4a, 0x82c60b69, 0x8301655a, 0x82c6055b, 0xc2c4025d, 0x83002a5b, 0x82c4092b, 0x8300aa97, 0xc2c40695,
    // 1481
    0x82c4074a, 0x83008b5a, 0x82c60ab6, 0xc2c6053b, 0x830042b7, 0x82c40257, 0x82c4052b, 0xc3001d2b, 0x82c40695, 0x830096ad,
    // 1491
    0x82c405aa, 0xc2c60ab5, 0x830054ed, 0x82c404ae, 0x82c60a57, 0xc2ff344e, 0x82c40d2a, 0x8301bd94, 0x82c60b55, 0xc2c4056a,
    // 1501
    0x8300797a, 0x82c6095d, 0x82c404ae, 0xc3004a9b, 0x82c40a4d, 0x82c40d25, 0x83011aaa, 0xc2c60b55, 0x8300956d, 0x82c402da,
    // 1511
    0x82c6095b, 0xc30054b7, 0x82c40497, 0x82c40a4b, 0x83004b4b, 0xc2c406a9, 0x8300cad5, 0x82c605b5, 0x82c402b6, 0xc300895e,
    // 1521
    0x82c6092f, 0x82c40497, 0x82fe4696, 0xc2c40d4a, 0x8300cea5, 0x82c60d69, 0x82c6056d, 0xc301a2b5, 0x82c4026e, 0x82c4052e,
    // 1531
    0x83006cad, 0xc2c40c95, 0x82c40d4a, 0x83002f4a, 0x82c60b59, 0xc300c56d, 0x82c6055b, 0x82c4025d, 0x8300793b, 0xc2c4092b,
    // 1541
    0x82c40a95, 0x83015b15, 0x82c406ca, 0xc2c60ad5, 0x830112b6, 0x82c604bb, 0x8300925f, 0xc2c40257, 0x82c4052b, 0x82fe6aaa,
    // 1551
    0x82c60e95, 0xc2c406aa, 0x83003baa, 0x82c60ab5, 0x8300b4b7, 0xc2c404ae, 0x82c60a57, 0x82fe752d, 0x82c40d26, 0xc2c60d95,
    // 1561
    0x830055d5, 0x82c4056a, 0x82c6096d, 0xc300255d, 0x82c404ae, 0x8300aa4f, 0x82c40a4d, 0xc2c40d25, 0x83006d69, 0x82c60b55,
    // 1571
    0x82c4035a, 0xc3002aba, 0x82c6095b, 0x8301c49b, 0x82c40497, 0xc2c40a4b, 0x83008b2b, 0x82c406a5, 0x82c406d4, 0xc3034ab5,
    // 1581
    0x82c402b6, 0x82c60937, 0x8300252f, 0xc2c40497, 0x82fe964e, 0x82c40d4a, 0x82c60ea5, 0xc30166a9, 0x82c6056d, 0x82c402b6,
    // 1591
    0x8301385e, 0xc2c4092e, 0x8300bc97, 0x82c40a95, 0x82c40d4a, 0xc3008daa, 0x82c60b4d, 0x82c6056b, 0x830042db, 0xc2c4025d,
    // 1601
    0x82c4092d, 0x83002d33, 0x82c40a95, 0xc3009b4d, 0x82c406aa, 0x82c60ad5, 0x83006575, 0xc2c604bb, 0x82c4025b, 0x83013457,
    // 1611
    0x82c4052b, 0xc2ffba94, 0x82c60e95, 0x82c406aa, 0x83008ada, 0xc2c609b5, 0x82c404b6, 0x83004aae, 0x82c60a4f, 0xc2c20526,
    // 1621
    0x83012d26, 0x82c60d55, 0x8301a5a9, 0xc2c4056a, 0x82c6096d, 0x8301649d, 0x82c4049e, 0xc2c40a4d, 0x83004d4d, 0x82c40d25,
    // 1631
    0x8300bd53, 0xc2c40b54, 0x82c60b5a, 0x8301895a, 0x82c6095b, 0xc2c4049b, 0x83004a97, 0x82c40a4b, 0x82c40aa5, 0xc3001ea5,
    // 1641
    0x82c406d4, 0x8302badb, 0x82c402b6, 0xc2c60937, 0x830064af, 0x82c40497, 0x82c4064b, 0xc2fe374a, 0x82c60da5, 0x8300b6b5,
    // 1651
    0x82c6056d, 0xc2c402ba, 0x8300793e, 0x82c4092e, 0x82c40c96, 0xc3015d15, 0x82c40d4a, 0x82c60da5, 0x83013555, 0xc2c4056a,
    // 1661
    0x83007a7a, 0x82c60a5d, 0x82c4092d, 0xc3006aab, 0x82c40a95, 0x82c40b4a, 0x83004baa, 0xc2c60ad5, 0x82c4055a, 0x830128ba,
    // 1671
    0x82c60a5b, 0xc3007537, 0x82c4052b, 0x82c40693, 0x83015715, 0xc2c406aa, 0x82c60ad9, 0x830035b5, 0x82c404b6, 0xc3008a5e,
    // 1681
    0x82c40a4e, 0x82c40d26, 0x83006ea6, 0xc2c40d52, 0x82c60daa, 0x8301466a, 0x82c6056d, 0xc2c404ae, 0x83003a9d, 0x82c40a4d,
    // 1691
    0x83007d2b, 0xc2c40b25, 0x82c40d52, 0x83015d54, 0x82c60b5a, 0xc2c6055d, 0x8300355b, 0x82c4049d, 0x83007657, 0x82c40a4b,
    // 1701
    0x82c40aa5, 0x83006b65, 0x82c406d2, 0xc2c60ada, 0x830045b6, 0x82c60937, 0x82c40497, 0xc3003697, 0x82c40a4d, 0x82fe76aa,
    // 1711
    0x82c60da5, 0xc2c405aa, 0x83005aec, 0x82c60aae, 0x82c4092e, 0xc3003d2e, 0x82c40c96, 0x83018d45, 0x82c40d4a, 0xc2c60d55,
    // 1721
    0x83016595, 0x82c4056a, 0x82c60a6d, 0xc300455d, 0x82c4052d, 0x82c40a95, 0x83003e95, 0xc2c40b4a, 0x83017b4a, 0x82c609d5,
    // 1731
    0x82c4055a, 0xc3015a3a, 0x82c60a5b, 0x82c4052b, 0x83014a17, 0xc2c40693, 0x830096ab, 0x82c406aa, 0x82c60ab5, 0xc30064f5,
    // 1741
    0x82c404b6, 0x82c60a57, 0x82fe452e, 0xc2c40d16, 0x82c60e93, 0x82fe3752, 0x82c60daa, 0xc30175aa, 0x82c6056d, 0x82c404ae,
    // 1751
    0x83015a1b, 0xc2c40a2d, 0x82c40d15, 0x83004da5, 0x82c40b52, 0xc3009d6a, 0x82c60ada, 0x82c6055d, 0x8301629b, 0xc2c4045b,
    // 1761
    0x82c40a2b, 0x83005b2b, 0x82c40a95, 0xc2c40b52, 0x83012ab2, 0x82c60ad6, 0x83017556, 0xc2c60537, 0x82c40457, 0x83005657,
    // 1771
    0x82c4052b, 0xc2c40695, 0x83003795, 0x82c405aa, 0x8300aab6, 0xc2c60a6d, 0x82c404ae, 0x8300696e, 0x82c40a56, 0xc2c40d2a,
    // 1781
    0x83005eaa, 0x82c60d55, 0x82c405aa, 0xc3003b6a, 0x82c60a6d, 0x830074bd, 0x82c404ab, 0xc2c40a8d, 0x83005d55, 0x82c40b2a,
    // 1791
    0x82c60b55, 0xc30045d5, 0x82c404da, 0x82c6095d, 0x83002557, 0xc2c4049b, 0x83006a97, 0x82c4064b, 0x82c406a9, 0x83004baa,
    // 1801
    0x82c606b5, 0x82c402ba, 0x83002ab6, 0xc2c60937, 0x82fe652e, 0x82c40d16, 0x82c60e4b, 0xc2fe56d2, 0x82c60da9, 0x82c605b5,
    // 1811
    0x8300336d, 0xc2c402ae, 0x82c40a2e, 0x83002e2d, 0x82c40c95, 0xc3006d55, 0x82c40b52, 0x82c60b69, 0x830045da, 0xc2c6055d,
    // 1821
    0x82c4025d, 0x83003a5b, 0x82c40a2b, 0xc3017a8b, 0x82c40a95, 0x82c40b4a, 0x83015b2a, 0xc2c60ad5, 0x82c6055b, 0x830042b7,
    // 1831
    0x82c40257, 0xc300952f, 0x82c4052b, 0x82c40695, 0x830066d5, 0xc2c405aa, 0x82c60ab5, 0x8300456d, 0x82c404ae, 0xc2c60a57,
    // 1841
    0x82ff3456, 0x82c40d2a, 0x83017e8a, 0xc2c60d55, 0x82c405aa, 0x83005ada, 0x82c6095d, 0xc2c404ae, 0x83004aab, 0x82c40a4d,
    // 1851
    0x83008d2b, 0xc2c40b29, 0x82c60b55, 0x83007575, 0x82c402da, 0xc2c6095d, 0x830054d7, 0x82c4049b, 0x82c40a4b, 0xc3013a4b,
    // 1861
    0x82c406a9, 0x83008ad9, 0x82c606b5, 0xc2c402b6, 0x83015936, 0x82c60937, 0x82c40497, 0xc2fe4696, 0x82c40e4a, 0x8300aea6,
    // 1871
    0x82c60da9, 0xc2c605ad, 0x830162ad, 0x82c402ae, 0x82c4092e, 0xc3005cad, 0x82c40c95, 0x82c40d4a, 0x83013d4a, 0xc2c60b69,
    // 1881
    0x8300757a, 0x82c6055b, 0x82c4025d, 0xc300595b, 0x82c4092b, 0x82c40a95, 0x83004d95, 0xc2c40b4a, 0x82c60b55, 0x830026d5,
    // 1891
    0x82c6055b, 0xc3006277, 0x82c40257, 0x82c4052b, 0x82fe5aaa, 0xc2c60e95, 0x82c406aa, 0x83003baa, 0x82c60ab5, 0x830084bd,
    // 1901
    0x82c404ae, 0x82c60a57, 0x82fe554d, 0xc2c40d26, 0x82c60d95, 0x83014655, 0x82c4056a, 0xc2c609ad, 0x8300255d, 0x82c404ae,
    // 1911
    0x83006a5b, 0xc2c40a4d, 0x82c40d25, 0x83005da9, 0x82c60b55, 0xc2c4056a, 0x83002ada, 0x82c6095d, 0x830074bb, 0xc2c4049b,
    // 1921
    0x82c40a4b, 0x83005b4b, 0x82c406a9, 0xc2c40ad4, 0x83024bb5, 0x82c402b6, 0x82c6095b, 0xc3002537, 0x82c40497, 0x82fe6656,
    // 1931
    0x82c40e4a, 0xc2c60ea5, 0x830156a9, 0x82c605b5, 0x82c402b6, 0xc30138ae, 0x82c4092e, 0x83017c8d, 0x82c40c95, 0xc2c40d4a,
    // 1941
    0x83016d8a, 0x82c60b69, 0x82c6056d, 0xc301425b, 0x82c4025d, 0x82c4092d, 0x83002d2b, 0xc2c40a95, 0x83007d55, 0x82c40b4a,
    // 1951
    0x82c60b55, 0xc3015555, 0x82c604db, 0x82c4025b, 0x83013857, 0xc2c4052b, 0x83008a9b, 0x82c40695, 0x82c406aa, 0xc3006aea,
    // 1961
    0x82c60ab5, 0x82c404b6, 0x83004aae, 0xc2c60a57, 0x82c40527, 0x82fe3726, 0x82c60d95, 0xc30076b5, 0x82c4056a, 0x82c609ad,
    // 1971
    0x830054dd, 0xc2c404ae, 0x82c40a4e, 0x83004d4d, 0x82c40d25, 0xc3008d59, 0x82c40b54, 0x82c60d6a, 0x8301695a, 0xc2c6095b,
    // 1981
    0x82c4049b, 0x83004a9b, 0x82c40a4b, 0xc300ab27, 0x82c406a5, 0x82c406d4, 0x83026b75, 0xc2c402b6, 0x82c6095b, 0x830054b7,
    // 1991
    0x82c40497, 0xc2c4064b, 0x82fe374a, 0x82c60ea5, 0x830086d9, 0xc2c605ad, 0x82c402b6, 0x8300596e, 0x82c4092e, 0xc2c40c96,
    // 2001
    0x83004e95, 0x82c40d4a, 0x82c60da5, 0xc3002755, 0x82c4056c, 0x83027abb, 0x82c4025d, 0xc2c4092d, 0x83005cab, 0x82c40a95,
    // 2011
    0x82c40b4a, 0xc3013b4a, 0x82c60b55, 0x8300955d, 0x82c404ba, 0xc2c60a5b, 0x83005557, 0x82c4052b, 0x82c40a95, 0xc3004b95,
    // 2021
    0x82c406aa, 0x82c60ad5, 0x830026b5, 0xc2c404b6, 0x83006a6e, 0x82c60a57, 0x82c40527, 0xc2fe56a6, 0x82c60d93, 0x82c405aa,
    // 2031
    0x83003b6a, 0xc2c6096d, 0x8300b4af, 0x82c404ae, 0x82c40a4d, 0xc3016d0d, 0x82c40d25, 0x82c40d52, 0x83005dd4, 0xc2c60b6a,
    // 2041
    0x82c6096d, 0x8300255b, 0x82c4049b, 0xc3007a57, 0x82c40a4b, 0x82c40b25, 0x83015b25, 0xc2c406d4, 0x82c60ada, 0x830138b6,
];
