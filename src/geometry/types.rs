//! City, city set and segment types.

use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

use crate::error::{Error, Result};

/// A point in the plane.
///
/// Cities compare by value: two cities with identical coordinates are the
/// same city. `-0.0` and `0.0` are treated as equal so that equality, hashing
/// and ordering agree. Ordering is lexicographic on `(x, y)`.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct City {
    pub x: f64,
    pub y: f64,
}

impl City {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    // Adding 0.0 folds -0.0 into 0.0.
    fn normalized(&self) -> (f64, f64) {
        (self.x + 0.0, self.y + 0.0)
    }
}

impl From<(f64, f64)> for City {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

impl PartialEq for City {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for City {}

impl Hash for City {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let (x, y) = self.normalized();
        x.to_bits().hash(state);
        y.to_bits().hash(state);
    }
}

impl PartialOrd for City {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for City {
    fn cmp(&self, other: &Self) -> Ordering {
        let (ax, ay) = self.normalized();
        let (bx, by) = other.normalized();
        ax.total_cmp(&bx).then_with(|| ay.total_cmp(&by))
    }
}

/// An immutable set of cities.
///
/// Stored sorted and deduplicated, so iteration order is deterministic and
/// the first city is the lexicographically smallest. Serializes as a plain
/// list; deserialization goes through [`CitySet::new`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "Vec<City>", into = "Vec<City>"))]
pub struct CitySet {
    cities: Vec<City>,
}

impl CitySet {
    /// Builds a set from any collection of cities.
    ///
    /// Duplicate cities collapse into one. Fails with
    /// [`Error::InvalidInput`] if any coordinate is NaN or infinite.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_tsp::geometry::{City, CitySet};
    ///
    /// let set = CitySet::new([
    ///     City::new(10.0, 0.0),
    ///     City::new(0.0, 0.0),
    ///     City::new(10.0, 0.0),
    /// ])
    /// .unwrap();
    /// assert_eq!(set.len(), 2);
    /// assert_eq!(set.as_slice()[0], City::new(0.0, 0.0));
    /// ```
    pub fn new<I: IntoIterator<Item = City>>(cities: I) -> Result<Self> {
        let mut cities: Vec<City> = cities.into_iter().collect();
        if let Some(bad) = cities.iter().find(|c| !c.is_finite()) {
            return Err(Error::invalid_input(format!(
                "city coordinates must be finite, got ({}, {})",
                bad.x, bad.y
            )));
        }
        cities.sort_unstable();
        cities.dedup();
        Ok(Self { cities })
    }

    /// Builds a set from `(x, y)` pairs.
    pub fn from_coords(coords: &[(f64, f64)]) -> Result<Self> {
        Self::new(coords.iter().copied().map(City::from))
    }

    pub fn len(&self) -> usize {
        self.cities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cities.is_empty()
    }

    pub fn contains(&self, city: &City) -> bool {
        self.cities.binary_search(city).is_ok()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, City> {
        self.cities.iter()
    }

    pub fn as_slice(&self) -> &[City] {
        &self.cities
    }
}

impl TryFrom<Vec<City>> for CitySet {
    type Error = Error;

    fn try_from(cities: Vec<City>) -> Result<Self> {
        Self::new(cities)
    }
}

impl From<CitySet> for Vec<City> {
    fn from(set: CitySet) -> Self {
        set.cities
    }
}

impl<'a> IntoIterator for &'a CitySet {
    type Item = &'a City;
    type IntoIter = std::slice::Iter<'a, City>;

    fn into_iter(self) -> Self::IntoIter {
        self.cities.iter()
    }
}

/// Result of the three-point orientation test.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    Collinear,
    Clockwise,
    CounterClockwise,
}

impl Orientation {
    /// The orientation obtained by swapping any two of the three points.
    pub fn reversed(self) -> Self {
        match self {
            Orientation::Collinear => Orientation::Collinear,
            Orientation::Clockwise => Orientation::CounterClockwise,
            Orientation::CounterClockwise => Orientation::Clockwise,
        }
    }
}

/// A straight line segment between two cities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Segment {
    pub start: City,
    pub end: City,
}

impl Segment {
    pub const fn new(start: City, end: City) -> Self {
        Self { start, end }
    }

    pub fn length(&self) -> f64 {
        super::distance(self.start, self.end)
    }
}
