//! Type definitions for dot paths.

/// A single key of a dot path. Array indices are decimal strings.
pub type PathStep = String;

/// A parsed dot path, root first.
pub type Path = Vec<PathStep>;
