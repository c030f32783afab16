// Golden ratio
#[allow(clippy::unreadable_literal, clippy::excessive_precision)]
const PHI: f64 = 1.61803398874989484820458683436563811772030917980576286213544862270526046281890244970720720418939113748475;

// Vertices of an icosahedron built from golden rectangles.
// These are _not_ on the unit sphere yet; `Mesh::d20` normalizes them.
#[rustfmt::skip]
pub const VERTICES: [[f64; 3]; 12] = [
    [-1.0,  PHI,  0.0],
    [ 1.0,  PHI,  0.0],
    [-1.0, -PHI,  0.0],
    [ 1.0, -PHI,  0.0],
    [ 0.0, -1.0,  PHI],
    [ 0.0,  1.0,  PHI],
    [ 0.0, -1.0, -PHI],
    [ 0.0,  1.0, -PHI],
    [ PHI,  0.0, -1.0],
    [ PHI,  0.0,  1.0],
    [-PHI,  0.0, -1.0],
    [-PHI,  0.0,  1.0],
];

// Wound so that `(b - a) x (c - a)` points away from the centre.
//
// Five faces around vertex 0, the five adjacent to those, the five
// around vertex 3, then the five adjacent to those. The order matters:
// it is also the label order (see `LABELS`).
#[rustfmt::skip]
pub const FACES: [[usize; 3]; 20] = [
    [ 0, 11,  5],
    [ 0,  5,  1],
    [ 0,  1,  7],
    [ 0,  7, 10],
    [ 0, 10, 11],

    [ 1,  5,  9],
    [ 5, 11,  4],
    [11, 10,  2],
    [10,  7,  6],
    [ 7,  1,  8],

    [ 3,  9,  4],
    [ 3,  4,  2],
    [ 3,  2,  6],
    [ 3,  6,  8],
    [ 3,  8,  9],

    [ 4,  9,  5],
    [ 2,  4, 11],
    [ 6,  2, 10],
    [ 8,  6,  7],
    [ 9,  8,  1],
];

// One label per face, in face declaration order.
//
// NOTE: this does not follow the "opposite faces sum to 21" convention
// of physical dice; don't "fix" it without also changing what rolls
// land on.
#[rustfmt::skip]
pub const LABELS: [u8; 20] = [
     1,  2,  3,  4,  5,
     6,  7,  8,  9, 10,
    11, 12, 13, 14, 15,
    16, 17, 18, 19, 20,
];
