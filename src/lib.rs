//! Maze generation and solving on a rectangular wall grid.
//!
//! Three carving algorithms (depth-first backtracker, randomized Kruskal,
//! Wilson's loop-erased random walk) turn a fully walled grid into a perfect
//! maze, optionally skipping a fixed decorative pattern of masked cells. The
//! flaw injector can then open extra walls to create cycles, and the A*
//! solver finds a shortest path as a string of `N`/`E`/`S`/`W` moves.

pub mod config;
pub mod flaw;
pub mod generators;
pub mod maze;
pub mod output;
pub mod render;
pub mod solvers;
