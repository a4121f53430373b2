//! Lookup tables for the MGRS letter alphabet and the latitude band boundaries.
//!
//! MGRS uses the 24 letters `A`-`Z` with `I` and `O` omitted. Every letter has
//! a compact index in `[0, 23]` and all grid arithmetic is done on those
//! indices, never on raw character codes.

/// The 24 letters usable in an MGRS designation, in compact index order.
pub const ALPHABET: [char; 24] = [
    'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'J', 'K', 'L', 'M',
    'N', 'P', 'Q', 'R', 'S', 'T', 'U', 'V', 'W', 'X', 'Y', 'Z',
];

/// Compact index keyed by alphabet position (0 = `A` .. 25 = `Z`), -1 for `I` and `O`.
pub const LETTER_ID: [i8; 26] = [
    0, 1, 2, 3, 4, 5, 6, 7, -1, 8, 9, 10, 11,
    12, -1, 13, 14, 15, 16, 17, 18, 19, 20, 21, 22, 23,
];

/// Number of latitude bands covered by UTM (`C` through `X`)
pub const BAND_COUNT: usize = 20;

/// Compact index of band `C`; bands `A` and `B` are reserved for the south pole.
pub(crate) const BAND_LETTER_OFFSET: i32 = 2;

/// Northing in meters of the southern edge of each latitude band on the central
/// meridian, without false northing. Index 0 is band `C` (80°S), index 19 is
/// band `X` (72°N). Bands are 8° tall except `X` which spans 12°.
#[allow(clippy::unreadable_literal)]
pub const BAND_NORTHINGS: [f64; BAND_COUNT] = [
    -8_881_585.816, // C  80°S
    -7_988_932.503, // D  72°S
    -7_097_014.162, // E  64°S
    -6_206_079.587, // F  56°S
    -5_316_300.224, // G  48°S
    -4_427_757.219, // H  40°S
    -3_540_435.693, // J  32°S
    -2_654_226.538, // K  24°S
    -1_768_935.376, // L  16°S
    -884_297.851,   // M   8°S
    0.0,            // N   0°
    884_297.851,    // P   8°N
    1_768_935.376,  // Q  16°N
    2_654_226.538,  // R  24°N
    3_540_435.693,  // S  32°N
    4_427_757.219,  // T  40°N
    5_316_300.224,  // U  48°N
    6_206_079.587,  // V  56°N
    7_097_014.162,  // W  64°N
    7_988_932.503,  // X  72°N
];

/// Northing of the northern edge of band `X` (84°N).
#[allow(clippy::unreadable_literal)]
pub const BAND_X_NORTH_EDGE: f64 = 9_328_093.830;

/// Compact index of an MGRS letter. Returns [`None`] for `I`, `O`, lowercase
/// letters and anything outside `A`-`Z`.
///
/// # Usage
///
/// ```
/// use utm_mgrs::letters::letter_to_index;
///
/// assert_eq!(letter_to_index('A'), Some(0));
/// assert_eq!(letter_to_index('J'), Some(8));
/// assert_eq!(letter_to_index('Z'), Some(23));
/// assert_eq!(letter_to_index('I'), None);
/// assert_eq!(letter_to_index('a'), None);
/// ```
pub fn letter_to_index(ch: char) -> Option<i32> {
    if !ch.is_ascii_uppercase() {
        return None;
    }

    let id = LETTER_ID[usize::from(ch as u8 - b'A')];
    (id >= 0).then_some(i32::from(id))
}

/// Letter for a compact index in `[0, 23]`.
///
/// ```
/// use utm_mgrs::letters::index_to_letter;
///
/// assert_eq!(index_to_letter(8), Some('J'));
/// assert_eq!(index_to_letter(24), None);
/// ```
pub fn index_to_letter(index: i32) -> Option<char> {
    usize::try_from(index)
        .ok()
        .and_then(|i| ALPHABET.get(i))
        .copied()
}

/// Letter of the latitude band at `band_idx` in [`BAND_NORTHINGS`].
pub(crate) fn band_letter(band_idx: usize) -> Option<char> {
    i32::try_from(band_idx)
        .ok()
        .and_then(|idx| index_to_letter(idx + BAND_LETTER_OFFSET))
}

/// Position of a latitude band letter in [`BAND_NORTHINGS`], [`None`] unless
/// the letter is one of `C`-`X`.
pub(crate) fn band_index(letter: char) -> Option<usize> {
    letter_to_index(letter)
        .map(|idx| idx - BAND_LETTER_OFFSET)
        .and_then(|idx| usize::try_from(idx).ok())
        .filter(|idx| *idx < BAND_COUNT)
}
