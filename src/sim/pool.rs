//! Recycling pool of pipe pairs
//!
//! The pool only ever grows, and only by one pair at a time when every
//! existing pair is on screen. After warm-up its size is the peak number of
//! simultaneous pipes and no further allocation happens.

use serde::{Deserialize, Serialize};

use super::Updatable;
use super::pipe::PipePair;
use crate::consts::PIPE_WIDTH;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipePool {
    pipes: Vec<PipePair>,
    pipe_width: f32,
}

impl Default for PipePool {
    fn default() -> Self {
        Self::new(crate::consts::PIPE_POOL_SIZE)
    }
}

impl PipePool {
    pub fn new(initial_size: usize) -> Self {
        Self::with_width(initial_size, PIPE_WIDTH)
    }

    pub fn with_width(initial_size: usize, pipe_width: f32) -> Self {
        Self {
            pipes: (0..initial_size).map(|_| PipePair::new(pipe_width)).collect(),
            pipe_width,
        }
    }

    /// First inactive pair, or a freshly appended one if all are in use.
    ///
    /// The caller is expected to `init` the returned pair immediately.
    pub fn get_pipe(&mut self) -> &mut PipePair {
        let idx = match self.pipes.iter().position(|p| !p.active) {
            Some(idx) => idx,
            None => {
                log::debug!(
                    "Pipe pool exhausted ({} in use), growing by one",
                    self.pipes.len()
                );
                self.pipes.push(PipePair::new(self.pipe_width));
                self.pipes.len() - 1
            }
        };
        &mut self.pipes[idx]
    }

    /// Deactivate every pair (no deallocation)
    pub fn reset(&mut self) {
        for pipe in &mut self.pipes {
            pipe.reset();
        }
    }

    /// Borrowed view of every pair, active or not
    pub fn pipes(&self) -> impl Iterator<Item = &PipePair> {
        self.pipes.iter()
    }

    pub fn pipes_mut(&mut self) -> impl Iterator<Item = &mut PipePair> {
        self.pipes.iter_mut()
    }

    /// Borrowed view of on-screen pairs only
    pub fn active(&self) -> impl Iterator<Item = &PipePair> {
        self.pipes.iter().filter(|p| p.active)
    }

    pub fn active_count(&self) -> usize {
        self.active().count()
    }

    /// Total pairs allocated
    pub fn len(&self) -> usize {
        self.pipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pipes.is_empty()
    }
}

impl Updatable for PipePool {
    fn update(&mut self, dt: f32) {
        for pipe in &mut self.pipes {
            pipe.update(dt);
        }
    }
}
