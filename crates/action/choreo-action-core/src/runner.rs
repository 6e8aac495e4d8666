//! Reference driver: owns running action graphs and advances them each tick.
//!
//! Targets are not owned here. Each run remembers a target key and a
//! `TargetResolver` hands back the live target on every tick.

use std::collections::HashMap;

use log::{debug, warn};

use crate::action::Action;
use crate::config::RunnerConfig;
use crate::error::ActionError;
use crate::ids::{IdAllocator, RunId};
use crate::outputs::{ActionEvent, Outputs};
use crate::target::{check_capabilities, Target};

/// Looks targets up by key. Hosts implement this over their node storage.
pub trait TargetResolver {
    fn resolve(&mut self, key: &str) -> Option<&mut dyn Target>;
}

impl<T: Target> TargetResolver for HashMap<String, T> {
    fn resolve(&mut self, key: &str) -> Option<&mut dyn Target> {
        self.get_mut(key).map(|t| t as &mut dyn Target)
    }
}

impl<T: Target> TargetResolver for hashbrown::HashMap<String, T> {
    fn resolve(&mut self, key: &str) -> Option<&mut dyn Target> {
        self.get_mut(key).map(|t| t as &mut dyn Target)
    }
}

#[derive(Debug)]
struct Running {
    id: RunId,
    target: String,
    action: Box<dyn Action>,
}

/// Capped event sink for one tick.
struct EventSink<'a> {
    outputs: &'a mut Outputs,
    cap: usize,
    dropped: usize,
}

impl EventSink<'_> {
    fn push(&mut self, event: ActionEvent) {
        if self.outputs.events.len() < self.cap {
            self.outputs.push_event(event);
        } else {
            self.dropped += 1;
        }
    }

    fn finish(self) {
        if self.dropped > 0 {
            self.outputs.push_event(ActionEvent::EventsDropped {
                count: self.dropped,
            });
        }
    }
}

#[derive(Debug)]
pub struct ActionRunner {
    cfg: RunnerConfig,
    ids: IdAllocator,
    running: Vec<Running>,
    /// Events raised outside tick() (run/cancel), flushed into the next tick.
    pending: Vec<ActionEvent>,
    outputs: Outputs,
}

impl Default for ActionRunner {
    fn default() -> Self {
        Self::new(RunnerConfig::default())
    }
}

impl ActionRunner {
    pub fn new(cfg: RunnerConfig) -> Self {
        Self {
            cfg,
            ids: IdAllocator::new(),
            running: Vec::new(),
            pending: Vec::new(),
            outputs: Outputs::default(),
        }
    }

    pub fn config(&self) -> &RunnerConfig {
        &self.cfg
    }

    /// Validate capabilities, start the action on `target` and track it
    /// under `key`.
    pub fn run(
        &mut self,
        mut action: Box<dyn Action>,
        key: &str,
        target: &mut dyn Target,
    ) -> Result<RunId, ActionError> {
        check_capabilities(action.as_ref(), target)?;
        action.start(target);

        let id = self.ids.alloc_run();
        debug!("run {id:?}: {} on '{key}'", action.name());
        self.pending.push(ActionEvent::Started {
            run: id,
            target: key.to_string(),
            action: action.name().to_string(),
        });
        self.running.push(Running {
            id,
            target: key.to_string(),
            action,
        });
        Ok(id)
    }

    /// Advance every run by `dt`. Finished runs are stopped once and retired.
    pub fn tick(&mut self, dt: f32, resolver: &mut dyn TargetResolver) -> &Outputs {
        self.outputs.clear();
        let dt = match self.cfg.max_step {
            Some(max) => dt.min(max),
            None => dt,
        }
        .max(0.0);
        let stop_on_missing = self.cfg.stop_on_missing_target;

        let mut sink = EventSink {
            outputs: &mut self.outputs,
            cap: self.cfg.max_events_per_tick,
            dropped: 0,
        };
        for event in self.pending.drain(..) {
            sink.push(event);
        }

        self.running.retain_mut(|run| {
            let Some(target) = resolver.resolve(&run.target) else {
                warn!("run {:?}: target '{}' not found", run.id, run.target);
                sink.push(ActionEvent::TargetMissing {
                    run: run.id,
                    target: run.target.clone(),
                });
                return !stop_on_missing;
            };

            run.action.step(dt, target);
            if run.action.is_done() {
                run.action.stop(target);
                debug!("run {:?}: finished", run.id);
                sink.push(ActionEvent::Finished {
                    run: run.id,
                    target: run.target.clone(),
                });
                false
            } else {
                true
            }
        });

        sink.finish();
        &self.outputs
    }

    /// Stop a run early. The target is left wherever the action had put it.
    pub fn cancel(&mut self, id: RunId, target: &mut dyn Target) -> Result<(), ActionError> {
        let idx = self
            .running
            .iter()
            .position(|r| r.id == id)
            .ok_or(ActionError::UnknownRun(id))?;
        let mut run = self.running.remove(idx);
        run.action.stop(target);
        debug!("run {id:?}: cancelled");
        self.pending.push(ActionEvent::Cancelled {
            run: id,
            target: run.target,
        });
        Ok(())
    }

    /// Cancel every run bound to `key`, returning how many were stopped.
    pub fn cancel_all_for(&mut self, key: &str, target: &mut dyn Target) -> usize {
        let ids: Vec<RunId> = self
            .running
            .iter()
            .filter(|r| r.target == key)
            .map(|r| r.id)
            .collect();
        let mut cancelled = 0;
        for id in ids {
            match self.cancel(id, target) {
                Ok(()) => cancelled += 1,
                Err(err) => warn!("cancel_all_for '{key}': {err}"),
            }
        }
        cancelled
    }

    pub fn is_running(&self, id: RunId) -> bool {
        self.running.iter().any(|r| r.id == id)
    }

    /// The live action for a run, for inspection.
    pub fn action(&self, id: RunId) -> Option<&dyn Action> {
        self.running
            .iter()
            .find(|r| r.id == id)
            .map(|r| r.action.as_ref())
    }

    pub fn len(&self) -> usize {
        self.running.len()
    }

    pub fn is_empty(&self) -> bool {
        self.running.is_empty()
    }
}
