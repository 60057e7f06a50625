use std::path::Path;

use crate::data::dataset::Sample;
use crate::data::minibatch::Minibatch;
use crate::error::DataError;

/// Names one tagged value stream in a data file and how many values each
/// record must carry for it.
#[derive(Debug, Clone)]
pub struct StreamConfig {
    pub name: String,
    pub dim: usize,
}

impl StreamConfig {
    pub fn new(name: &str, dim: usize) -> StreamConfig {
        StreamConfig {
            name: name.to_string(),
            dim,
        }
    }
}

/// File-backed minibatch source over a delimited text file.
///
/// Each non-empty line is one record made of `|name v1 v2 ...` segments;
/// the configured feature and label streams must both be present with their
/// declared widths. The source repeats the file indefinitely and flags
/// `sweep_end` on every minibatch that consumed the file's final record.
#[derive(Debug)]
pub struct TextMinibatchSource {
    samples: Vec<Sample>,
    cursor: usize,
}

impl TextMinibatchSource {
    pub fn from_file<P: AsRef<Path>>(
        path: P,
        features: StreamConfig,
        labels: StreamConfig,
    ) -> Result<TextMinibatchSource, DataError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| DataError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let mut samples = Vec::new();
        for (idx, line) in contents.lines().enumerate() {
            let line_no = idx + 1;
            if line.trim().is_empty() {
                continue;
            }
            let input = parse_stream(line, &features, path, line_no)?;
            let label = parse_stream(line, &labels, path, line_no)?;
            samples.push(Sample::new(input, label));
        }

        if samples.is_empty() {
            return Err(DataError::Empty {
                path: path.to_path_buf(),
            });
        }

        Ok(TextMinibatchSource {
            samples,
            cursor: 0,
        })
    }

    /// Number of records in one full sweep of the file.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Returns the next minibatch of up to `size` records, wrapping around
    /// to the start of the file as needed.
    pub fn next_minibatch(&mut self, size: usize) -> Minibatch {
        assert!(size > 0, "next_minibatch: size must be at least 1");

        let mut batch = Vec::with_capacity(size);
        let mut sweep_end = false;
        for _ in 0..size {
            batch.push(self.samples[self.cursor].clone());
            self.cursor += 1;
            if self.cursor == self.samples.len() {
                self.cursor = 0;
                sweep_end = true;
            }
        }

        Minibatch::from_samples(&batch).with_sweep_end(sweep_end)
    }
}

/// Extracts the values of one named stream from a record line.
fn parse_stream(
    line: &str,
    stream: &StreamConfig,
    path: &Path,
    line_no: usize,
) -> Result<Vec<f64>, DataError> {
    for segment in line.split('|').skip(1) {
        let mut tokens = segment.split_whitespace();
        let Some(name) = tokens.next() else {
            return Err(malformed(path, line_no, "empty stream segment"));
        };
        if name != stream.name {
            continue;
        }

        let mut values = Vec::with_capacity(stream.dim);
        for token in tokens {
            let value = token.parse::<f64>().map_err(|_| {
                malformed(path, line_no, &format!("'{token}' is not a number"))
            })?;
            values.push(value);
        }

        if values.len() != stream.dim {
            return Err(DataError::DimensionMismatch {
                path: path.to_path_buf(),
                line: line_no,
                stream: stream.name.clone(),
                expected: stream.dim,
                found: values.len(),
            });
        }
        return Ok(values);
    }

    Err(DataError::MissingStream {
        path: path.to_path_buf(),
        line: line_no,
        stream: stream.name.clone(),
    })
}

fn malformed(path: &Path, line: usize, reason: &str) -> DataError {
    DataError::Malformed {
        path: path.to_path_buf(),
        line,
        reason: reason.to_string(),
    }
}
