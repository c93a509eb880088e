//! 分值
//!
//! 以百分之一分为单位的定点数，扣分累加不产生浮点误差，
//! 四舍五入时 x.5 是真正的 x.5

use std::fmt;
use std::ops::{Add, Sub};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct Points(i64);

impl Points {
    pub const ZERO: Points = Points(0);

    /// 以百分之一分为单位构造
    pub const fn hundredths(h: i64) -> Self {
        Points(h)
    }

    /// 以整分构造
    pub const fn whole(p: i64) -> Self {
        Points(p * 100)
    }

    pub fn as_f64(self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// 四舍六入五成双，结果不小于 0
    pub fn round_to_grade(self) -> u32 {
        let q = self.0.div_euclid(100);
        let r = self.0.rem_euclid(100);
        let rounded = match r.cmp(&50) {
            std::cmp::Ordering::Less => q,
            std::cmp::Ordering::Greater => q + 1,
            std::cmp::Ordering::Equal if q % 2 == 0 => q,
            std::cmp::Ordering::Equal => q + 1,
        };
        u32::try_from(rounded.max(0)).unwrap_or(u32::MAX)
    }
}

impl Add for Points {
    type Output = Points;
    fn add(self, rhs: Points) -> Points {
        Points(self.0 + rhs.0)
    }
}

impl Sub for Points {
    type Output = Points;
    fn sub(self, rhs: Points) -> Points {
        Points(self.0 - rhs.0)
    }
}

/// 与成绩日志一致的写法：`20.0`、`19.75`、`-0.5`
impl fmt::Display for Points {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.as_f64())
    }
}
