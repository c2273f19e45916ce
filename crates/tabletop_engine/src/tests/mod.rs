//! Cross-module scenarios: view controller and scene composer driving one
//! shared recording backend, the way the host runs a frame.
