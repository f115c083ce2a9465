//! Display formatting for a single qualifying row, independent of the widgets
//! that draw it.

use crate::app::QualifyingResult;

/// Shown in place of a Q2/Q3 time the driver never set.
pub const PLACEHOLDER: &str = "- -";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeAlign {
    Right,
    Center,
}

/// A Q2/Q3 lap time that may not exist. Empty strings count as missing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionTime(Option<String>);

impl SessionTime {
    pub fn new(raw: Option<&str>) -> Self {
        Self(raw.filter(|t| !t.is_empty()).map(str::to_string))
    }

    pub fn is_set(&self) -> bool {
        self.0.is_some()
    }

    pub fn display(&self) -> &str {
        self.0.as_deref().unwrap_or(PLACEHOLDER)
    }

    pub fn alignment(&self) -> TimeAlign {
        if self.is_set() {
            TimeAlign::Right
        } else {
            TimeAlign::Center
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowDisplay {
    pub position: String,
    pub number: String,
    pub driver_name: String,
    pub constructor: String,
    pub q1: String,
    pub q2: SessionTime,
    pub q3: SessionTime,
}

pub fn render_row(result: &QualifyingResult) -> RowDisplay {
    let number = result
        .driver
        .permanent_number
        .clone()
        .unwrap_or_else(|| result.number.clone());
    RowDisplay {
        position: result.position.clone(),
        number,
        driver_name: format!("{} {}", result.driver.given_name, result.driver.family_name),
        constructor: result.constructor.name.clone(),
        q1: result.q1.clone(),
        q2: SessionTime::new(result.q2.as_deref()),
        q3: SessionTime::new(result.q3.as_deref()),
    }
}
