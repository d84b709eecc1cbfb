//! Modular arithmetic over the twelve pitch classes.

/// The number of pitch classes within one octave.
pub const NUM_PITCH_CLASSES: u8 = 12;

/// Reduces an arbitrary integer to a pitch class between 0 and 11.
///
/// The result is *non-negative* even for negative inputs, i.e. the remainder is taken in the Euclidean sense.
///
/// # Examples
///
/// ```
/// # use pcset::math;
/// assert_eq!(math::pitch_class(0), 0);
/// assert_eq!(math::pitch_class(7), 7);
/// assert_eq!(math::pitch_class(12), 0);
/// assert_eq!(math::pitch_class(25), 1);
///
/// // Negative values wrap around
/// assert_eq!(math::pitch_class(-1), 11);
/// assert_eq!(math::pitch_class(-12), 0);
/// assert_eq!(math::pitch_class(-13), 11);
///
/// // Extreme values
/// assert_eq!(math::pitch_class(i32::MIN), 4);
/// assert_eq!(math::pitch_class(i32::MAX), 7);
/// ```
pub fn pitch_class(value: i32) -> u8 {
    value.rem_euclid(i32::from(NUM_PITCH_CLASSES)) as u8
}

/// Folds the distance between two pitch classes into an interval class between 0 and 6.
///
/// # Examples
///
/// ```
/// # use pcset::math;
/// assert_eq!(math::interval_class(0, 0), 0);
/// assert_eq!(math::interval_class(0, 4), 4);
/// assert_eq!(math::interval_class(4, 0), 4);
/// assert_eq!(math::interval_class(0, 6), 6);
/// assert_eq!(math::interval_class(0, 7), 5);
/// assert_eq!(math::interval_class(11, 1), 2);
/// ```
pub fn interval_class(a: u8, b: u8) -> u8 {
    let distance = pitch_class(i32::from(b) - i32::from(a));
    distance.min(NUM_PITCH_CLASSES - distance)
}
