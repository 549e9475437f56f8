use std::path::Path;

use nalgebra::DMatrix;
use polars::prelude::*;
use rayon::prelude::*;

use crate::common::checker;


/// Struct `AnchorSample` holds the labels `y` and
/// the anchor matrix `A` of a training set.
/// The `i`-th row of `A` holds the anchor variables of the `i`-th example.
///
/// The boosting engine owns the features;
/// objectives only need the labels and the anchor.
#[derive(Debug, Clone)]
pub struct AnchorSample {
    target: Vec<f64>,
    anchor: DMatrix<f64>,
}


impl AnchorSample {
    /// Construct a new sample from labels and an `n × m` anchor matrix.
    /// This method panics if the anchor does not have
    /// one row per label.
    pub fn new(target: Vec<f64>, anchor: DMatrix<f64>) -> Self {
        checker::anchor_rows(anchor.nrows(), target.len());
        Self { target, anchor }
    }


    /// Construct a new sample from labels and anchor rows.
    /// Each row must have the same length.
    pub fn from_rows<T>(target: Vec<f64>, rows: &[T]) -> Self
        where T: AsRef<[f64]>,
    {
        let n_examples = rows.len();
        let n_anchors = rows.first()
            .map(|row| row.as_ref().len())
            .unwrap_or(0);
        assert!(
            rows.iter().all(|row| row.as_ref().len() == n_anchors),
            "every anchor row must have {n_anchors} entries."
        );

        let anchor = DMatrix::from_fn(n_examples, n_anchors, |i, j| {
            rows[i].as_ref()[j]
        });
        Self::new(target, anchor)
    }


    /// Convert `polars::DataFrame` into `AnchorSample`.
    /// The column named `target` is used as the label and
    /// the columns in `anchors` form the anchor matrix.
    /// Each column is cast to `f64`.
    pub fn from_dataframe<S>(
        data: &DataFrame,
        target: &str,
        anchors: &[S],
    ) -> PolarsResult<Self>
        where S: AsRef<str> + Sync,
    {
        let target = column_values(data, target)?;
        let columns = anchors.par_iter()
            .map(|name| column_values(data, name.as_ref()))
            .collect::<PolarsResult<Vec<_>>>()?;

        let n_examples = target.len();
        let n_anchors = columns.len();
        let anchor = DMatrix::from_fn(n_examples, n_anchors, |i, j| {
            columns[j][i]
        });

        Ok(Self::new(target, anchor))
    }


    /// Read a CSV file with a header row into `AnchorSample`.
    /// See [`AnchorSample::from_dataframe`] for the meaning of
    /// `target` and `anchors`.
    pub fn from_csv<P, S>(
        file: P,
        target: &str,
        anchors: &[S],
    ) -> PolarsResult<Self>
        where P: AsRef<Path>,
              S: AsRef<str> + Sync,
    {
        let data = CsvReader::from_path(file.as_ref())?
            .has_header(true)
            .finish()?;
        Self::from_dataframe(&data, target, anchors)
    }


    /// Returns the slice of labels.
    #[inline(always)]
    pub fn target(&self) -> &[f64] {
        &self.target[..]
    }


    /// Returns the anchor matrix.
    #[inline(always)]
    pub fn anchor(&self) -> &DMatrix<f64> {
        &self.anchor
    }


    /// Returns the pair of the number of examples and
    /// the number of anchor variables.
    #[inline(always)]
    pub fn shape(&self) -> (usize, usize) {
        self.anchor.shape()
    }


    /// Returns the number of examples.
    #[inline(always)]
    pub fn n_examples(&self) -> usize {
        self.target.len()
    }
}


/// Returns the values of the column `name` as `f64`.
/// Null values are rejected.
fn column_values(data: &DataFrame, name: &str) -> PolarsResult<Vec<f64>> {
    let series = data.column(name)?
        .cast(&DataType::Float64)?;

    if series.null_count() > 0 {
        let message = format!("column `{name}` contains null values");
        return Err(PolarsError::ComputeError(message.into()));
    }

    let values = series.f64()?
        .into_no_null_iter()
        .collect::<Vec<_>>();
    Ok(values)
}
