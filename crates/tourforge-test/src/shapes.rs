//! Board lists shared by the solver and facade tests.

/// Boards small enough to build in every unit test run.
pub const ACCEPTED_SHAPES: &[(usize, usize)] = &[
    (6, 6),
    (6, 8),
    (8, 6),
    (8, 8),
    (10, 12),
    (12, 12),
    (14, 14),
    (14, 16),
    (24, 26),
    (34, 36),
    (38, 38),
    (40, 40),
    (48, 50),
    (64, 64),
    (70, 72),
    (76, 76),
    (78, 80),
];

/// Larger boards, for integration tests.
pub const LARGE_ACCEPTED_SHAPES: &[(usize, usize)] = &[
    (128, 128),
    (140, 142),
    (150, 150),
    (282, 284),
    (340, 342),
    (696, 698),
];

/// Requests that must fail with an unsupported configuration error.
pub const REJECTED_SHAPES: &[(i64, i64)] = &[
    (2, 2),
    (21, 22),
    (73, 73),
    (-20, 20),
    (40, 44),
    (0, 0),
    (1, 8),
    (4, 4),
    (7, 8),
];
