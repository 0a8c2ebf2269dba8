//! Integration tests for the OBJ parser.


/// One counter-clockwise triangle.
const TRIANGLE: &str = "v 0 0 0\nv 1 0 0\nv 1 1 0\nf 1 2 3\n";

/// One unit quad, corners declared counter-clockwise.
const QUAD: &str = "v 0 0 0\nv 1 0 0\nv 1 1 0\nv 0 1 0\nf 1 2 3 4\n";
