//! Single test binary entry point, following matklad's advice: one binary
//! links once instead of once per test file.
//!
//! - helpers: scene builders, pointer-event drivers, fake collaborators
//! - integration: full workflows through the public engine surface
//! - unit: single-component tests
