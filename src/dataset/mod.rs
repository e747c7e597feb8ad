// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

/*!
The packaged, read-only measurement dataset.

A [`Dataset`] is the handle every lookup function takes; it is constructed
once, validated against the manifest of expected files, and then shared
freely (it holds nothing but the root path). The files themselves are
whitespace-delimited ASCII numeric tables; `#`-prefixed and blank lines are
ignored everywhere.
 */

mod error;

pub use error::DatasetError;

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::ops::Range;
use std::path::{Path, PathBuf};

use lazy_static::lazy_static;
use log::trace;
use ndarray::{Array1, Array2};

lazy_static! {
    /// Every relative path the lookup functions can resolve to. Used to
    /// validate a dataset root at construction, so that an incomplete data
    /// directory is caught up front rather than on the first unlucky lookup.
    pub(crate) static ref MANIFEST: Vec<&'static str> = {
        let mut paths: Vec<&'static str> = vec![];
        paths.extend(crate::wp::yang_2012::ARTIFACTS.iter().flatten().copied());
        paths.extend(crate::wp::zehavi_2011::artifacts());
        paths.extend(crate::wp::hearin_2014::ARTIFACTS);
        paths.extend(crate::wp::campbell_2016::ARTIFACTS);
        paths.extend(crate::phi::luminosity::ARTIFACTS);
        paths
    };
}

/// A read-only store of published measurement files under a fixed root
/// directory.
#[derive(Debug, Clone)]
pub struct Dataset {
    root: PathBuf,
}

impl Dataset {
    /// Create a dataset rooted at `root`, checking that every file named by
    /// the manifest exists there.
    pub fn new<P: Into<PathBuf>>(root: P) -> Result<Dataset, DatasetError> {
        let root = root.into();
        for rel in MANIFEST.iter() {
            let path = root.join(rel);
            if !path.exists() {
                return Err(DatasetError::MissingArtifact { path });
            }
        }
        Ok(Dataset { root })
    }

    /// The copy of the dataset bundled with this crate.
    pub fn packaged() -> Result<Dataset, DatasetError> {
        Dataset::new(Path::new(env!("CARGO_MANIFEST_DIR")).join("data"))
    }

    fn open(&self, rel: &str) -> Result<(PathBuf, BufReader<File>), DatasetError> {
        let path = self.root.join(rel);
        trace!("Reading measurement file {}", path.display());
        if !path.exists() {
            return Err(DatasetError::MissingArtifact { path });
        }
        let file = BufReader::new(File::open(&path)?);
        Ok((path, file))
    }

    /// Read a whitespace-delimited numeric table into a 2-D grid. All data
    /// rows must have the same number of columns.
    pub fn read_table(&self, rel: &str) -> Result<Array2<f64>, DatasetError> {
        let (path, file) = self.open(rel)?;
        let rows = parse_rows(&path, file)?;
        rows_to_array(&path, rows)
    }

    /// Read a row range (over data rows, comments not counted) of a
    /// whitespace-delimited numeric table. Some files stack several blocks
    /// of differing widths in one table; this is how a single block is
    /// pulled out, and only the requested block needs consistent columns.
    pub fn read_table_rows(
        &self,
        rel: &str,
        range: Range<usize>,
    ) -> Result<Array2<f64>, DatasetError> {
        let (path, file) = self.open(rel)?;
        let rows = parse_rows(&path, file)?;
        if range.end > rows.len() {
            return Err(DatasetError::RowRangeOutOfBounds {
                path,
                start: range.start,
                end: range.end,
                num_rows: rows.len(),
            });
        }
        rows_to_array(&path, rows[range].to_vec())
    }

    /// The absolute path of an artifact. The artifact may not exist.
    pub fn artifact_path(&self, rel: &str) -> PathBuf {
        self.root.join(rel)
    }

    /// For tests that must exercise resolution failures without a complete
    /// data directory on disk.
    #[cfg(test)]
    pub(crate) fn unvalidated<P: Into<PathBuf>>(root: P) -> Dataset {
        Dataset { root: root.into() }
    }

    /// Read every whitespace-separated float in the file, in order,
    /// ignoring line structure. Covariance matrices are published as flat
    /// dumps of M*M numbers with no guaranteed line layout.
    pub fn read_flat(&self, rel: &str) -> Result<Array1<f64>, DatasetError> {
        let (path, file) = self.open(rel)?;
        let mut values = vec![];
        for (i_line, line) in file.lines().enumerate() {
            let line = line?;
            if is_skippable(&line) {
                continue;
            }
            for token in line.split_whitespace() {
                let v = token
                    .parse::<f64>()
                    .map_err(|_| DatasetError::ParseFloat {
                        path: path.clone(),
                        line_num: i_line + 1,
                        text: token.to_string(),
                    })?;
                values.push(v);
            }
        }
        Ok(Array1::from(values))
    }

    /// Read a flat dump of exactly `n * n` floats as an n-by-n matrix.
    pub fn read_flat_matrix(&self, rel: &str, n: usize) -> Result<Array2<f64>, DatasetError> {
        let flat = self.read_flat(rel)?;
        if flat.len() != n * n {
            return Err(DatasetError::BadShape {
                path: self.root.join(rel),
                expected: n * n,
                got: flat.len(),
            });
        }
        // The length was just checked; into_shape cannot fail.
        Ok(flat
            .into_shape_with_order((n, n))
            .unwrap_or_else(|_| unreachable!()))
    }
}

fn is_skippable(line: &str) -> bool {
    let trimmed = line.trim_start();
    trimmed.is_empty() || trimmed.starts_with('#')
}

/// Parse every data line into (1-based line number, row of floats). Column
/// consistency is *not* enforced here; blocks of differing widths can share
/// a file.
fn parse_rows<T: BufRead>(path: &Path, file: T) -> Result<Vec<(usize, Vec<f64>)>, DatasetError> {
    let mut rows: Vec<(usize, Vec<f64>)> = vec![];
    for (i_line, line) in file.lines().enumerate() {
        let line = line?;
        if is_skippable(&line) {
            continue;
        }
        let row: Vec<f64> = line
            .split_whitespace()
            .map(|token| {
                token.parse::<f64>().map_err(|_| DatasetError::ParseFloat {
                    path: path.to_path_buf(),
                    line_num: i_line + 1,
                    text: token.to_string(),
                })
            })
            .collect::<Result<_, _>>()?;
        rows.push((i_line + 1, row));
    }
    Ok(rows)
}

fn rows_to_array(path: &Path, rows: Vec<(usize, Vec<f64>)>) -> Result<Array2<f64>, DatasetError> {
    let num_rows = rows.len();
    let num_cols = rows.first().map(|(_, r)| r.len()).unwrap_or(0);
    for (line_num, row) in &rows {
        if row.len() != num_cols {
            return Err(DatasetError::RaggedTable {
                path: path.to_path_buf(),
                line_num: *line_num,
                expected: num_cols,
                got: row.len(),
            });
        }
    }
    let flat: Vec<f64> = rows.into_iter().flat_map(|(_, r)| r).collect();
    // Consistency was just checked; the shape cannot mismatch.
    Ok(Array2::from_shape_vec((num_rows, num_cols), flat).unwrap_or_else(|_| unreachable!()))
}
