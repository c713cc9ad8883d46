//! Resolver coverage split by strategy.
