// Dialogue classification for Yama's overhead text.
//
// Architecture:
// - model.rs: Dialogue events and the static rule table
// - classifier.rs: Normalization and first-match-wins rule evaluation

pub mod classifier;
pub mod model;
