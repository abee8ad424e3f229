use std::borrow::Cow;

use crate::io::Rgb;

/// Index of a class in a [`ClassScheme`]; ordered from lowest to highest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Bucket(usize);

impl Bucket {
    pub const fn new(index: usize) -> Self { Self(index) }

    pub fn index(&self) -> usize { self.0 }
}

/// One row of a classification table: values `>= lower` (and below the next
/// row's bound) fall into this class.
#[derive(Debug, Clone, PartialEq)]
pub struct ClassBreak {
    pub lower: f64,
    pub color: Rgb,
    pub label: Cow<'static, str>,
}

impl ClassBreak {
    pub fn new(lower: f64, color: Rgb, label: impl Into<Cow<'static, str>>) -> Self {
        Self { lower, color, label: label.into() }
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SchemeError {
    #[error("a class scheme needs at least one class")]
    Empty,

    #[error("the first class must be unbounded below, found lower bound {0}")]
    BoundedFirstClass(f64),

    #[error("class {index} lower bound {lower} must be finite and above the previous bound {previous}")]
    NotAscending { index: usize, lower: f64, previous: f64 },
}

/// Educational attainment classes: (lower bound %, color, legend label).
const EDUCATION_BREAKS: [(f64, Rgb, &str); 5] = [
    (f64::NEG_INFINITY, Rgb::from_hex(0xF07167), "Less than 13%"),
    (13.0,              Rgb::from_hex(0xFED9B7), "13% - 26%"),
    (26.0,              Rgb::from_hex(0xFDFCDC), "26% - 39%"),
    (39.0,              Rgb::from_hex(0x00AFB9), "39% - 52%"),
    (52.0,              Rgb::from_hex(0x0081A7), "More than 52%"),
];

/// Ordered table of half-open, lower-inclusive value classes.
#[derive(Debug, Clone, PartialEq)]
pub struct ClassScheme {
    breaks: Vec<ClassBreak>,
}

impl ClassScheme {
    /// Build a scheme from rows ordered by strictly ascending lower bound.
    /// The first row must start at negative infinity so every value has a class.
    pub fn new(breaks: Vec<ClassBreak>) -> Result<Self, SchemeError> {
        let first = breaks.first().ok_or(SchemeError::Empty)?;
        if first.lower != f64::NEG_INFINITY {
            return Err(SchemeError::BoundedFirstClass(first.lower));
        }

        for (index, pair) in breaks.windows(2).enumerate() {
            let (previous, lower) = (pair[0].lower, pair[1].lower);
            if !lower.is_finite() || lower <= previous {
                return Err(SchemeError::NotAscending { index: index + 1, lower, previous });
            }
        }

        Ok(Self { breaks })
    }

    /// The five-class bachelor's-degree attainment scheme.
    pub fn education() -> Self {
        Self {
            breaks: EDUCATION_BREAKS.iter()
                .map(|&(lower, color, label)| ClassBreak::new(lower, color, label))
                .collect(),
        }
    }

    /// Class for a value: rows are read from the highest bound down and the
    /// first bound `<= value` wins. NaN has no ordering and lands in the
    /// lowest class.
    pub fn bucket_for(&self, value: f64) -> Bucket {
        self.breaks.iter()
            .rposition(|class| class.lower <= value)
            .map(Bucket)
            .unwrap_or(Bucket(0))
    }

    pub fn len(&self) -> usize { self.breaks.len() }

    pub fn is_empty(&self) -> bool { self.breaks.is_empty() }

    pub fn breaks(&self) -> &[ClassBreak] { &self.breaks }

    /// All buckets in ascending order, paired with their class row.
    pub fn buckets(&self) -> impl Iterator<Item = (Bucket, &ClassBreak)> {
        self.breaks.iter().enumerate().map(|(i, class)| (Bucket(i), class))
    }

    /// `None` when `bucket` is past the last class of this scheme.
    pub fn color(&self, bucket: Bucket) -> Option<Rgb> {
        self.breaks.get(bucket.0).map(|class| class.color)
    }

    pub fn label(&self, bucket: Bucket) -> Option<&str> {
        self.breaks.get(bucket.0).map(|class| class.label.as_ref())
    }
}

impl Default for ClassScheme {
    fn default() -> Self { Self::education() }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boundaries_are_lower_inclusive() {
        let scheme = ClassScheme::education();
        let cases = [
            (-1.0, 0), (0.0, 0), (12.999, 0),
            (13.0, 1), (25.9, 1),
            (26.0, 2), (38.99, 2),
            (39.0, 3), (51.5, 3),
            (52.0, 4), (60.0, 4), (100.0, 4),
        ];
        for (value, expected) in cases {
            assert_eq!(scheme.bucket_for(value), Bucket::new(expected), "value {value}");
        }
    }

    #[test]
    fn education_labels_and_colors() {
        let scheme = ClassScheme::education();
        assert_eq!(scheme.len(), 5);
        assert_eq!(scheme.label(Bucket::new(0)), Some("Less than 13%"));
        assert_eq!(scheme.label(Bucket::new(2)), Some("26% - 39%"));
        assert_eq!(scheme.label(Bucket::new(4)), Some("More than 52%"));
        assert_eq!(scheme.color(Bucket::new(0)).map(|c| c.to_string()).as_deref(), Some("#F07167"));
        assert_eq!(scheme.color(Bucket::new(4)).map(|c| c.to_string()).as_deref(), Some("#0081A7"));
    }

    #[test]
    fn foreign_bucket_has_no_color_or_label() {
        let scheme = ClassScheme::education();
        assert_eq!(scheme.color(Bucket::new(5)), None);
        assert_eq!(scheme.label(Bucket::new(usize::MAX)), None);
    }

    #[test]
    fn nan_falls_into_lowest_class() {
        assert_eq!(ClassScheme::education().bucket_for(f64::NAN), Bucket::new(0));
    }

    #[test]
    fn custom_scheme_validation() {
        let red = Rgb::from_hex(0xFF0000);
        assert_eq!(ClassScheme::new(vec![]), Err(SchemeError::Empty));
        assert!(matches!(
            ClassScheme::new(vec![ClassBreak::new(0.0, red, "a")]),
            Err(SchemeError::BoundedFirstClass(_)),
        ));
        assert!(matches!(
            ClassScheme::new(vec![
                ClassBreak::new(f64::NEG_INFINITY, red, "a"),
                ClassBreak::new(10.0, red, "b"),
                ClassBreak::new(10.0, red, "c"),
            ]),
            Err(SchemeError::NotAscending { index: 2, .. }),
        ));

        let two = ClassScheme::new(vec![
            ClassBreak::new(f64::NEG_INFINITY, red, "low"),
            ClassBreak::new(50.0, red, "high"),
        ]).unwrap();
        assert_eq!(two.bucket_for(49.9), Bucket::new(0));
        assert_eq!(two.bucket_for(50.0), Bucket::new(1));
    }
}
