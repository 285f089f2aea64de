//! Internal test modules - whitebox tests with crate access
//!
//! Harness-based acceptance tests drive `TuiApp<TestBackend>` through key and
//! mouse events and assert on both state and the rendered screen.
