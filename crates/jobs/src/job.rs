use serde::{Deserialize, Serialize};

/// How a job pays.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Compensation {
    /// Rate per hour worked.
    Hourly(f64),
    /// Fixed annual amount.
    Salary(u64),
}

impl core::fmt::Display for Compensation {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            // Debug formatting keeps the decimal point on whole rates ("10.0").
            Compensation::Hourly(rate) => write!(f, "Hourly({rate:?})"),
            Compensation::Salary(amount) => write!(f, "Salary({amount})"),
        }
    }
}

/// A job: a title plus a compensation that can be raised in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Job {
    title: String,
    compensation: Compensation,
}

impl Job {
    pub fn new(title: impl Into<String>, compensation: Compensation) -> Self {
        Self {
            title: title.into(),
            compensation,
        }
    }

    pub fn hourly(title: impl Into<String>, rate: f64) -> Self {
        Self::new(title, Compensation::Hourly(rate))
    }

    pub fn salaried(title: impl Into<String>, amount: u64) -> Self {
        Self::new(title, Compensation::Salary(amount))
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn compensation(&self) -> Compensation {
        self.compensation
    }

    /// Income for `hours` worked.
    ///
    /// Salaried jobs ignore `hours`. Hourly income is truncated toward zero.
    pub fn calculate_income(&self, hours: i64) -> i64 {
        match self.compensation {
            Compensation::Salary(amount) => i64::try_from(amount).unwrap_or(i64::MAX),
            Compensation::Hourly(rate) => (rate * hours as f64) as i64,
        }
    }

    /// Raise by a whole amount.
    ///
    /// An hourly rate loses its fractional part first: `Hourly(12.5)` raised by
    /// 1 becomes `Hourly(13.0)`. Salaries never drop below zero.
    pub fn raise_by_amount(&mut self, amount: i64) {
        self.compensation = match self.compensation {
            Compensation::Salary(salary) => {
                let raised = i128::from(salary) + i128::from(amount);
                Compensation::Salary(u64::try_from(raised.max(0)).unwrap_or(u64::MAX))
            }
            Compensation::Hourly(rate) => {
                Compensation::Hourly(((rate as i64).saturating_add(amount)) as f64)
            }
        };
        tracing::debug!(title = %self.title, compensation = %self.compensation, "raised by amount");
    }

    /// Raise by a fractional amount. Hourly rates keep full precision.
    pub fn raise_by_fixed(&mut self, amount: f64) {
        self.compensation = match self.compensation {
            Compensation::Salary(salary) => Compensation::Salary((salary as f64 + amount) as u64),
            Compensation::Hourly(rate) => Compensation::Hourly(rate + amount),
        };
        tracing::debug!(title = %self.title, compensation = %self.compensation, "raised by fixed amount");
    }

    /// Raise by a fraction of current pay (`0.1` is ten percent).
    pub fn raise_by_percent(&mut self, percent: f64) {
        let factor = 1.0 + percent;
        self.compensation = match self.compensation {
            Compensation::Salary(salary) => Compensation::Salary((salary as f64 * factor) as u64),
            Compensation::Hourly(rate) => Compensation::Hourly(rate * factor),
        };
        tracing::debug!(title = %self.title, compensation = %self.compensation, "raised by percent");
    }
}

impl core::fmt::Display for Job {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{} with {} pay", self.title, self.compensation)
    }
}
