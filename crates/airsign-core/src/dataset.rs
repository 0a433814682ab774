//! # Gesture dataset storage and file loading
//!
//! A [`GestureDataset`] groups recordings by category for evaluation, with a
//! separate bucket for recordings that should be rejected. On disk a dataset
//! is a flat directory with one text file per gesture: one `x,y,z` sample per
//! line, and the category encoded as a file-name prefix
//! (`circle_cw_0`, `circle_cw_1`, `junk_0`, ...).
//!
//! [`load_dir`] reads files in sorted name order so a dataset loads the same
//! way on every platform. Files whose name matches no requested prefix are
//! skipped.
//!
//! ## Example
//!
//! ```rust
//! use airsign_core::dataset::GestureDataset;
//! use airsign_core::types::{Gesture, Label, Sample, GESTURE_LENGTH};
//!
//! let circle = Label::category("circle_cw");
//! let mut dataset = GestureDataset::new(vec![circle.clone()]);
//!
//! let samples = vec![Sample::new(0.0, 0.0, 1.0); GESTURE_LENGTH];
//! dataset.add_gesture(circle.clone(), Gesture::from_samples(samples).unwrap())?;
//! assert_eq!(dataset.gestures_for(&circle).unwrap().len(), 1);
//! # Ok::<(), airsign_core::types::GestureError>(())
//! ```

use std::fs::{self, File};
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::types::{Gesture, GestureError, GestureResult, Label, Sample};

/// Gestures grouped by category, plus a bucket of known-junk recordings.
///
/// Category order is the declaration order and is preserved through
/// evaluation and reporting.
#[derive(Debug, Clone)]
pub struct GestureDataset {
    categories: Vec<(Label, Vec<Gesture>)>,
    unrecognized: Vec<Gesture>,
}

impl GestureDataset {
    /// Create an empty dataset over the given categories.
    ///
    /// [`Label::Unrecognized`] entries in the list are dropped; the junk
    /// bucket always exists and needs no declaration.
    pub fn new(categories: Vec<Label>) -> Self {
        let categories = categories
            .into_iter()
            .filter(|label| !label.is_unrecognized())
            .map(|label| (label, Vec::new()))
            .collect();
        Self {
            categories,
            unrecognized: Vec::new(),
        }
    }

    /// File a gesture under its category, or under the junk bucket for
    /// [`Label::Unrecognized`].
    pub fn add_gesture(&mut self, label: Label, gesture: Gesture) -> GestureResult<()> {
        match label {
            Label::Unrecognized => {
                self.unrecognized.push(gesture);
                Ok(())
            }
            Label::Category(name) => {
                let slot = self
                    .categories
                    .iter_mut()
                    .find(|(label, _)| label.name() == name);
                match slot {
                    Some((_, gestures)) => {
                        gestures.push(gesture);
                        Ok(())
                    }
                    None => Err(GestureError::UnknownCategory { label: name }),
                }
            }
        }
    }

    /// Declared categories with their gestures, in declaration order.
    pub fn categories(&self) -> &[(Label, Vec<Gesture>)] {
        &self.categories
    }

    /// Declared category labels, in declaration order.
    pub fn labels(&self) -> Vec<Label> {
        self.categories
            .iter()
            .map(|(label, _)| label.clone())
            .collect()
    }

    pub fn gestures_for(&self, label: &Label) -> Option<&[Gesture]> {
        self.categories
            .iter()
            .find(|(known, _)| known == label)
            .map(|(_, gestures)| gestures.as_slice())
    }

    /// Recordings that a good classifier should reject.
    pub fn unrecognized(&self) -> &[Gesture] {
        &self.unrecognized
    }

    pub fn category_count(&self) -> usize {
        self.categories.len()
    }

    /// Total recordings across categories and the junk bucket.
    pub fn total_gestures(&self) -> usize {
        let categorized: usize = self
            .categories
            .iter()
            .map(|(_, gestures)| gestures.len())
            .sum();
        categorized + self.unrecognized.len()
    }
}

fn bad_line(path: &Path, line_number: usize) -> io::Error {
    io::Error::new(
        io::ErrorKind::InvalidData,
        format!("Bad sample at {}:{}", path.display(), line_number),
    )
}

fn parse_sample(line: &str, path: &Path, line_number: usize) -> io::Result<Sample> {
    let mut values = [0.0f64; 3];
    let mut fields = line.split(',');
    for value in values.iter_mut() {
        let field = fields.next().ok_or_else(|| bad_line(path, line_number))?;
        *value = field
            .trim()
            .parse()
            .map_err(|_| bad_line(path, line_number))?;
    }
    if fields.next().is_some() {
        return Err(bad_line(path, line_number));
    }
    Ok(Sample::new(values[0], values[1], values[2]))
}

/// Read one gesture file: one `x,y,z` sample per line, blank lines ignored.
pub fn read_gesture_file(path: impl AsRef<Path>) -> io::Result<Gesture> {
    let path = path.as_ref();
    let reader = BufReader::new(File::open(path)?);
    let mut samples = Vec::new();
    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        samples.push(parse_sample(trimmed, path, index + 1)?);
    }
    Gesture::from_samples(samples)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e.to_string()))
}

/// Write one gesture file in the format [`read_gesture_file`] accepts.
pub fn write_gesture_file(path: impl AsRef<Path>, gesture: &Gesture) -> io::Result<()> {
    let mut writer = BufWriter::new(File::create(path.as_ref())?);
    for sample in gesture.samples() {
        writeln!(writer, "{},{},{}", sample.x, sample.y, sample.z)?;
    }
    writer.flush()
}

/// Load every matching gesture file under `dir`.
///
/// A file belongs to the first prefix in `prefixes` its name starts with;
/// `junk`-prefixed files land in the junk bucket, and unmatched files are
/// skipped. Files are read in sorted name order.
pub fn load_dir(dir: impl AsRef<Path>, prefixes: &[&str]) -> io::Result<GestureDataset> {
    let labels = prefixes.iter().map(|p| Label::from_prefix(p)).collect();
    let mut dataset = GestureDataset::new(labels);

    let mut paths: Vec<PathBuf> = fs::read_dir(dir.as_ref())?
        .collect::<io::Result<Vec<_>>>()?
        .into_iter()
        .map(|entry| entry.path())
        .filter(|path| path.is_file())
        .collect();
    paths.sort();

    for path in paths {
        let name = match path.file_name().and_then(|n| n.to_str()) {
            Some(name) => name.to_string(),
            None => continue,
        };
        let prefix = match prefixes.iter().find(|prefix| name.starts_with(*prefix)) {
            Some(prefix) => prefix,
            None => continue,
        };
        let gesture = read_gesture_file(&path)?;
        dataset
            .add_gesture(Label::from_prefix(prefix), gesture)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e.to_string()))?;
    }
    Ok(dataset)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::GESTURE_LENGTH;
    use std::env;

    fn temp_dir(name: &str) -> PathBuf {
        env::temp_dir().join(format!("airsign_dataset_test_{}", name))
    }

    fn gesture(offset: f64) -> Gesture {
        let samples = (0..GESTURE_LENGTH)
            .map(|i| Sample::new(offset + 0.01 * i as f64, -offset, 0.5))
            .collect();
        Gesture::from_samples(samples).unwrap()
    }

    #[test]
    fn test_add_and_query() {
        let circle = Label::category("circle_cw");
        let square = Label::category("square_ccw");
        let mut dataset = GestureDataset::new(vec![circle.clone(), square.clone()]);
        dataset.add_gesture(circle.clone(), gesture(0.0)).unwrap();
        dataset.add_gesture(circle.clone(), gesture(1.0)).unwrap();
        dataset.add_gesture(square.clone(), gesture(2.0)).unwrap();

        assert_eq!(dataset.category_count(), 2);
        assert_eq!(dataset.gestures_for(&circle).unwrap().len(), 2);
        assert_eq!(dataset.gestures_for(&square).unwrap().len(), 1);
        assert_eq!(dataset.total_gestures(), 3);
        assert_eq!(dataset.labels(), vec![circle, square]);
    }

    #[test]
    fn test_unknown_category_rejected() {
        let mut dataset = GestureDataset::new(vec![Label::category("circle_cw")]);
        match dataset.add_gesture(Label::category("wave"), gesture(0.0)) {
            Err(GestureError::UnknownCategory { label }) => assert_eq!(label, "wave"),
            other => panic!("expected UnknownCategory, got {:?}", other),
        }
    }

    #[test]
    fn test_unrecognized_bucket() {
        let mut dataset = GestureDataset::new(vec![Label::category("circle_cw")]);
        dataset
            .add_gesture(Label::Unrecognized, gesture(0.0))
            .unwrap();
        assert_eq!(dataset.unrecognized().len(), 1);
        assert_eq!(dataset.total_gestures(), 1);
    }

    #[test]
    fn test_new_drops_unrecognized_declaration() {
        let dataset = GestureDataset::new(vec![
            Label::category("circle_cw"),
            Label::Unrecognized,
        ]);
        assert_eq!(dataset.category_count(), 1);
    }

    #[test]
    fn test_file_roundtrip() {
        let dir = temp_dir("roundtrip");
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("circle_cw_0");
        let original = gesture(0.25);
        write_gesture_file(&path, &original).unwrap();
        let loaded = read_gesture_file(&path).unwrap();
        assert_eq!(loaded, original);
        fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_read_skips_blank_lines() {
        let dir = temp_dir("blank_lines");
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("circle_cw_0");
        let mut body = String::new();
        for i in 0..GESTURE_LENGTH {
            body.push_str(&format!("{}.0, 2.0, 3.0\n\n", i));
        }
        fs::write(&path, body).unwrap();

        let loaded = read_gesture_file(&path).unwrap();
        assert_eq!(loaded.samples().len(), GESTURE_LENGTH);
        assert_eq!(loaded.samples()[4].x, 4.0);
        fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_read_rejects_bad_line() {
        let dir = temp_dir("bad_line");
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("circle_cw_0");
        fs::write(&path, "1.0,2.0,not_a_number\n").unwrap();

        let err = read_gesture_file(&path).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);
        assert!(err.to_string().contains(":1"));
        fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_read_rejects_wrong_length() {
        let dir = temp_dir("wrong_length");
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("circle_cw_0");
        fs::write(&path, "1.0,2.0,3.0\n1.0,2.0,3.0\n").unwrap();

        let err = read_gesture_file(&path).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);
        fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_load_dir_groups_by_prefix() {
        let dir = temp_dir("load_groups");
        fs::create_dir_all(&dir).unwrap();
        write_gesture_file(dir.join("circle_cw_0"), &gesture(0.0)).unwrap();
        write_gesture_file(dir.join("circle_cw_1"), &gesture(1.0)).unwrap();
        write_gesture_file(dir.join("junk_0"), &gesture(2.0)).unwrap();
        fs::write(dir.join("notes.txt"), "ignored").unwrap();

        let dataset = load_dir(&dir, &["circle_cw", "junk"]).unwrap();
        let circle = Label::category("circle_cw");
        assert_eq!(dataset.category_count(), 1);
        assert_eq!(dataset.gestures_for(&circle).unwrap().len(), 2);
        assert_eq!(dataset.unrecognized().len(), 1);
        fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_load_dir_sorted_order() {
        let dir = temp_dir("load_sorted");
        fs::create_dir_all(&dir).unwrap();

        // Written out of order; loaded back sorted by name.
        write_gesture_file(dir.join("circle_cw_1"), &gesture(1.0)).unwrap();
        write_gesture_file(dir.join("circle_cw_0"), &gesture(0.0)).unwrap();

        let dataset = load_dir(&dir, &["circle_cw"]).unwrap();
        let circle = Label::category("circle_cw");
        let gestures = dataset.gestures_for(&circle).unwrap();
        assert_eq!(gestures[0].samples()[0].x, 0.0);
        assert_eq!(gestures[1].samples()[0].x, 1.0);
        fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_prefix_sibling_names_stay_separate() {
        let dir = temp_dir("prefix_siblings");
        fs::create_dir_all(&dir).unwrap();
        write_gesture_file(dir.join("circle_cw_0"), &gesture(0.0)).unwrap();
        write_gesture_file(dir.join("circle_ccw_0"), &gesture(1.0)).unwrap();

        let dataset = load_dir(&dir, &["circle_cw", "circle_ccw"]).unwrap();
        assert_eq!(
            dataset
                .gestures_for(&Label::category("circle_cw"))
                .unwrap()
                .len(),
            1
        );
        assert_eq!(
            dataset
                .gestures_for(&Label::category("circle_ccw"))
                .unwrap()
                .len(),
            1
        );
        fs::remove_dir_all(&dir).ok();
    }
}
