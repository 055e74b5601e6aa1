//! Black-box tests for the bank queue core live under `tests/`.
