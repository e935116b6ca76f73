//! Integration tests for the `sbor` and `scrypto-data` crates - see `tests/`.
