//! Closed tours of the leaf boards, one orientation each (rows <= cols).
//!
//! Every table starts at `(0, 0)` and lists `(row, col)` pairs in visiting
//! order; the last cell is a knight move away from the first.

pub(super) const TOUR_6X6: [(u8, u8); 36] = [
    (0, 0), (2, 1), (4, 0), (5, 2), (3, 1), (5, 0), (4, 2), (5, 4), (3, 5), (1, 4), (0, 2), (1, 0),
    (2, 2), (0, 1), (2, 0), (4, 1), (3, 3), (4, 5), (5, 3), (3, 4), (5, 5), (4, 3), (5, 1), (3, 0),
    (1, 1), (2, 3), (1, 5), (0, 3), (2, 4), (0, 5), (1, 3), (3, 2), (4, 4), (2, 5), (0, 4), (1, 2),
];

pub(super) const TOUR_6X8: [(u8, u8); 48] = [
    (0, 0), (2, 1), (4, 0), (5, 2), (3, 3), (2, 5), (1, 3), (3, 2), (4, 4), (5, 6), (3, 7), (4, 5),
    (5, 7), (3, 6), (1, 7), (0, 5), (2, 6), (0, 7), (1, 5), (0, 3), (1, 1), (3, 0), (5, 1), (4, 3),
    (5, 5), (4, 7), (3, 5), (2, 7), (0, 6), (1, 4), (0, 2), (1, 0), (2, 2), (0, 1), (2, 0), (4, 1),
    (5, 3), (3, 4), (4, 6), (5, 4), (4, 2), (5, 0), (3, 1), (2, 3), (0, 4), (1, 6), (2, 4), (1, 2),
];

pub(super) const TOUR_8X8: [(u8, u8); 64] = [
    (0, 0), (2, 1), (4, 0), (6, 1), (7, 3), (5, 4), (7, 5), (6, 7), (4, 6), (6, 5), (7, 7), (5, 6),
    (3, 7), (2, 5), (1, 7), (0, 5), (1, 3), (0, 1), (2, 0), (4, 1), (6, 0), (7, 2), (5, 3), (3, 4),
    (4, 2), (5, 0), (7, 1), (6, 3), (5, 5), (7, 6), (5, 7), (3, 6), (4, 4), (3, 2), (2, 4), (4, 5),
    (3, 3), (5, 2), (6, 4), (4, 3), (3, 1), (2, 3), (1, 1), (3, 0), (5, 1), (7, 0), (6, 2), (7, 4),
    (6, 6), (4, 7), (2, 6), (0, 7), (1, 5), (0, 3), (2, 2), (1, 0), (0, 2), (1, 4), (0, 6), (2, 7),
    (3, 5), (1, 6), (0, 4), (1, 2),
];

pub(super) const TOUR_8X10: [(u8, u8); 80] = [
    (0, 0), (1, 2), (0, 4), (1, 6), (0, 8), (2, 9), (4, 8), (6, 9), (7, 7), (5, 8), (7, 9), (6, 7),
    (5, 9), (7, 8), (6, 6), (7, 4), (6, 2), (7, 0), (5, 1), (7, 2), (6, 0), (4, 1), (2, 0), (0, 1),
    (1, 3), (0, 5), (1, 7), (0, 9), (2, 8), (4, 9), (6, 8), (7, 6), (5, 7), (3, 8), (1, 9), (0, 7),
    (2, 6), (1, 8), (3, 9), (4, 7), (5, 5), (3, 6), (1, 5), (2, 7), (0, 6), (2, 5), (3, 7), (5, 6),
    (7, 5), (6, 3), (7, 1), (5, 0), (3, 1), (1, 0), (0, 2), (1, 4), (3, 5), (4, 3), (6, 4), (4, 5),
    (2, 4), (0, 3), (2, 2), (3, 0), (1, 1), (2, 3), (4, 4), (3, 2), (4, 0), (5, 2), (3, 3), (5, 4),
    (4, 6), (6, 5), (7, 3), (6, 1), (5, 3), (3, 4), (4, 2), (2, 1),
];

pub(super) const TOUR_10X10: [(u8, u8); 100] = [
    (0, 0), (1, 2), (0, 4), (1, 6), (0, 8), (2, 9), (4, 8), (6, 9), (8, 8), (9, 6), (7, 7), (5, 8),
    (3, 9), (1, 8), (0, 6), (2, 7), (1, 9), (0, 7), (1, 5), (0, 3), (1, 1), (3, 0), (2, 2), (1, 0),
    (0, 2), (1, 4), (2, 6), (3, 8), (5, 9), (6, 7), (4, 6), (2, 5), (3, 7), (5, 6), (7, 5), (8, 3),
    (9, 5), (7, 6), (5, 7), (3, 6), (2, 4), (3, 2), (4, 4), (6, 5), (8, 4), (6, 3), (5, 1), (7, 0),
    (9, 1), (7, 2), (6, 0), (8, 1), (9, 3), (8, 5), (7, 3), (5, 2), (6, 4), (4, 5), (3, 3), (5, 4),
    (6, 6), (4, 7), (3, 5), (2, 3), (3, 1), (4, 3), (5, 5), (7, 4), (5, 3), (3, 4), (4, 2), (5, 0),
    (6, 2), (4, 1), (2, 0), (0, 1), (1, 3), (0, 5), (1, 7), (0, 9), (2, 8), (4, 9), (6, 8), (8, 9),
    (9, 7), (7, 8), (9, 9), (8, 7), (7, 9), (9, 8), (8, 6), (9, 4), (8, 2), (9, 0), (7, 1), (9, 2),
    (8, 0), (6, 1), (4, 0), (2, 1),
];

pub(super) const TOUR_10X12: [(u8, u8); 120] = [
    (0, 0), (2, 1), (4, 0), (3, 2), (2, 0), (0, 1), (1, 3), (0, 5), (2, 4), (0, 3), (1, 1), (3, 0),
    (5, 1), (7, 0), (9, 1), (7, 2), (9, 3), (8, 1), (6, 0), (4, 1), (2, 2), (1, 0), (0, 2), (1, 4),
    (0, 6), (1, 8), (0, 10), (2, 11), (3, 9), (4, 11), (2, 10), (0, 11), (1, 9), (0, 7), (2, 6),
    (3, 8), (4, 10), (6, 11), (8, 10), (9, 8), (7, 9), (8, 11), (9, 9), (7, 10), (9, 11), (8, 9),
    (6, 10), (5, 8), (7, 7), (6, 9), (5, 11), (3, 10), (1, 11), (0, 9), (2, 8), (4, 9), (6, 8),
    (8, 7), (9, 5), (7, 6), (9, 7), (8, 5), (7, 3), (9, 4), (8, 2), (9, 0), (7, 1), (8, 3), (7, 5),
    (6, 3), (4, 2), (5, 0), (3, 1), (2, 3), (1, 5), (2, 7), (4, 8), (2, 9), (1, 7), (3, 6), (5, 7),
    (7, 8), (5, 9), (4, 7), (6, 6), (4, 5), (3, 7), (2, 5), (3, 3), (5, 2), (4, 4), (5, 6), (6, 4),
    (4, 3), (3, 5), (5, 4), (6, 2), (7, 4), (8, 6), (6, 7), (5, 5), (3, 4), (4, 6), (6, 5), (5, 3),
    (6, 1), (8, 0), (9, 2), (8, 4), (9, 6), (8, 8), (9, 10), (7, 11), (5, 10), (3, 11), (1, 10),
    (0, 8), (1, 6), (0, 4), (1, 2),
];
