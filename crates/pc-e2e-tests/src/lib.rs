//! End-to-end tests live under `tests/`; this library target is empty.
