//! Pearson correlation across the numeric columns
//!
//! Cells are `Option<f64>`: a zero-variance column (or fewer than two
//! paired observations) has no defined coefficient and is reported as
//! `None`, never as NaN or a silent zero. Missing optional fields are
//! handled by pairwise deletion: each cell uses only the rows where both
//! columns are present.

use crate::dataset::Dataset;
use crate::error::MetricsError;
use crate::record::CeoRecord;
use serde::Serialize;

/// Numeric columns the correlation matrix can cover.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NumericField {
    Compensation,
    MedianWorkerPay,
    TenureYears,
    MarketCap,
    Employees,
}

impl NumericField {
    /// Default field set for the performance view.
    pub const ALL: [NumericField; 5] = [
        NumericField::Compensation,
        NumericField::MedianWorkerPay,
        NumericField::TenureYears,
        NumericField::MarketCap,
        NumericField::Employees,
    ];

    /// Short column label for table headers.
    pub fn label(&self) -> &'static str {
        match self {
            NumericField::Compensation => "salary",
            NumericField::MedianWorkerPay => "worker_pay",
            NumericField::TenureYears => "tenure",
            NumericField::MarketCap => "market_cap",
            NumericField::Employees => "employees",
        }
    }

    fn value_of(&self, record: &CeoRecord) -> Option<f64> {
        match self {
            NumericField::Compensation => Some(record.compensation),
            NumericField::MedianWorkerPay => Some(record.median_worker_pay),
            NumericField::TenureYears => record.tenure_years,
            NumericField::MarketCap => record.market_cap_billions,
            NumericField::Employees => record.employees,
        }
    }
}

/// Symmetric Pearson correlation matrix over a set of numeric columns.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CorrelationMatrix {
    pub fields: Vec<NumericField>,
    /// `matrix[i][j]` is the coefficient between `fields[i]` and
    /// `fields[j]`; `None` where the statistic is undefined.
    pub matrix: Vec<Vec<Option<f64>>>,
}

/// Compute the pairwise Pearson matrix over the given columns.
pub fn correlation_matrix(
    dataset: &Dataset,
    fields: &[NumericField],
) -> Result<CorrelationMatrix, MetricsError> {
    if fields.is_empty() {
        return Err(MetricsError::InvalidInput(
            "correlation needs at least one field".to_string(),
        ));
    }
    if dataset.is_empty() {
        return Err(MetricsError::InvalidInput(
            "cannot correlate an empty dataset".to_string(),
        ));
    }

    let n = fields.len();
    let mut matrix = vec![vec![None; n]; n];

    for i in 0..n {
        for j in i..n {
            let mut xs = Vec::new();
            let mut ys = Vec::new();
            for record in dataset.records() {
                if let (Some(x), Some(y)) =
                    (fields[i].value_of(record), fields[j].value_of(record))
                {
                    xs.push(x);
                    ys.push(y);
                }
            }
            let cell = pearson(&xs, &ys);
            matrix[i][j] = cell;
            matrix[j][i] = cell;
        }
    }

    Ok(CorrelationMatrix {
        fields: fields.to_vec(),
        matrix,
    })
}

/// Pearson coefficient of two equal-length samples; `None` when either
/// sample has zero variance or fewer than two observations.
fn pearson(xs: &[f64], ys: &[f64]) -> Option<f64> {
    let n = xs.len();
    if n < 2 || n != ys.len() {
        return None;
    }

    let mean_x = xs.iter().sum::<f64>() / n as f64;
    let mean_y = ys.iter().sum::<f64>() / n as f64;

    let mut cov = 0.0;
    let mut var_x = 0.0;
    let mut var_y = 0.0;
    for (x, y) in xs.iter().zip(ys) {
        let dx = x - mean_x;
        let dy = y - mean_y;
        cov += dx * dy;
        var_x += dx * dx;
        var_y += dy * dy;
    }

    if var_x == 0.0 || var_y == 0.0 {
        return None;
    }
    // Rounding can push a perfect correlation a hair past 1.
    Some((cov / (var_x.sqrt() * var_y.sqrt())).clamp(-1.0, 1.0))
}

impl CorrelationMatrix {
    /// Strict cell access: an undefined coefficient is an error, never a
    /// NaN smuggled onward.
    pub fn coefficient(&self, i: usize, j: usize) -> Result<f64, MetricsError> {
        match self.matrix.get(i).and_then(|row| row.get(j)) {
            Some(Some(value)) => Ok(*value),
            Some(None) => Err(MetricsError::Undefined(format!(
                "correlation between {} and {}",
                self.fields[i].label(),
                self.fields[j].label()
            ))),
            None => Err(MetricsError::InvalidInput(format!(
                "no field at position ({i}, {j})"
            ))),
        }
    }

    /// Format the matrix as an aligned text table; undefined cells render
    /// as "--".
    pub fn format(&self) -> String {
        let mut output = String::new();

        output.push_str("            ");
        for field in &self.fields {
            output.push_str(&format!("{:>12}", field.label()));
        }
        output.push('\n');

        for (i, field) in self.fields.iter().enumerate() {
            output.push_str(&format!("{:12}", field.label()));
            for j in 0..self.fields.len() {
                match self.matrix[i][j] {
                    Some(value) => output.push_str(&format!("{:12.3}", value)),
                    None => output.push_str(&format!("{:>12}", "--")),
                }
            }
            output.push('\n');
        }

        output
    }
}
