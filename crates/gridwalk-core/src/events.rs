//! Progress reporting for searches and maze generation.
//!
//! Algorithms report every step through an [`EventSink`]. All methods have
//! no-op defaults, so a sink only overrides what it renders. Sinks are called
//! synchronously from inside the step and should return quickly.

use std::sync::mpsc::{Sender, SyncSender};

use crate::geom::Pos;
use crate::grid::Walls;

/// Receiver of progress callbacks.
pub trait EventSink {
    /// A cell moved from the frontier to expanded. Never called for the
    /// start cell.
    fn on_visit(&mut self, _pos: Pos) {}

    /// A cell of the final path, from nearest the start to the target.
    fn on_path_step(&mut self, _pos: Pos) {}

    /// The complete current wall set (a snapshot, not a delta).
    fn on_walls_changed(&mut self, _walls: &Walls) {}

    /// The cells currently being worked on. An empty slice means generation
    /// has finished.
    fn on_working_cells_changed(&mut self, _cells: &[Pos]) {}
}

/// Sink that ignores everything; used for headless runs.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopSink;

impl EventSink for NoopSink {}

impl<S: EventSink + ?Sized> EventSink for &mut S {
    fn on_visit(&mut self, pos: Pos) {
        (**self).on_visit(pos);
    }

    fn on_path_step(&mut self, pos: Pos) {
        (**self).on_path_step(pos);
    }

    fn on_walls_changed(&mut self, walls: &Walls) {
        (**self).on_walls_changed(walls);
    }

    fn on_working_cells_changed(&mut self, cells: &[Pos]) {
        (**self).on_working_cells_changed(cells);
    }
}

// ---------------------------------------------------------------------------
// Event / EventLog
// ---------------------------------------------------------------------------

/// One progress callback, as an owned value.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Event {
    Visit(Pos),
    PathStep(Pos),
    WallsChanged(Walls),
    WorkingCells(Vec<Pos>),
}

/// Sink that records every event in order, for replay or inspection.
#[derive(Debug, Clone, Default)]
pub struct EventLog {
    pub events: Vec<Event>,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Visited cells in expansion order.
    pub fn visits(&self) -> Vec<Pos> {
        self.events
            .iter()
            .filter_map(|e| match e {
                Event::Visit(p) => Some(*p),
                _ => None,
            })
            .collect()
    }

    /// Path cells in path order.
    pub fn path_steps(&self) -> Vec<Pos> {
        self.events
            .iter()
            .filter_map(|e| match e {
                Event::PathStep(p) => Some(*p),
                _ => None,
            })
            .collect()
    }

    /// The most recent wall snapshot.
    pub fn last_walls(&self) -> Option<&Walls> {
        self.events.iter().rev().find_map(|e| match e {
            Event::WallsChanged(w) => Some(w),
            _ => None,
        })
    }

    /// The most recent working-cell set.
    pub fn last_working_cells(&self) -> Option<&[Pos]> {
        self.events.iter().rev().find_map(|e| match e {
            Event::WorkingCells(c) => Some(c.as_slice()),
            _ => None,
        })
    }

    /// Feed the recorded events, in order, to another sink.
    pub fn replay(&self, sink: &mut impl EventSink) {
        for e in &self.events {
            e.deliver(sink);
        }
    }
}

impl Event {
    /// Invoke the matching callback on `sink`.
    pub fn deliver(&self, sink: &mut impl EventSink) {
        match self {
            Event::Visit(p) => sink.on_visit(*p),
            Event::PathStep(p) => sink.on_path_step(*p),
            Event::WallsChanged(w) => sink.on_walls_changed(w),
            Event::WorkingCells(c) => sink.on_working_cells_changed(c),
        }
    }
}

impl EventSink for EventLog {
    fn on_visit(&mut self, pos: Pos) {
        self.events.push(Event::Visit(pos));
    }

    fn on_path_step(&mut self, pos: Pos) {
        self.events.push(Event::PathStep(pos));
    }

    fn on_walls_changed(&mut self, walls: &Walls) {
        self.events.push(Event::WallsChanged(walls.clone()));
    }

    fn on_working_cells_changed(&mut self, cells: &[Pos]) {
        self.events.push(Event::WorkingCells(cells.to_vec()));
    }
}

// ---------------------------------------------------------------------------
// Channel sinks
// ---------------------------------------------------------------------------

// A renderer on another thread drains the receiving end. A hung-up receiver
// is not an error for the run.

impl EventSink for Sender<Event> {
    fn on_visit(&mut self, pos: Pos) {
        forward(self.send(Event::Visit(pos)).is_ok());
    }

    fn on_path_step(&mut self, pos: Pos) {
        forward(self.send(Event::PathStep(pos)).is_ok());
    }

    fn on_walls_changed(&mut self, walls: &Walls) {
        forward(self.send(Event::WallsChanged(walls.clone())).is_ok());
    }

    fn on_working_cells_changed(&mut self, cells: &[Pos]) {
        forward(self.send(Event::WorkingCells(cells.to_vec())).is_ok());
    }
}

/// Bounded channel: a full buffer blocks the run until the consumer catches
/// up, which paces the run at the consumer's rate.
impl EventSink for SyncSender<Event> {
    fn on_visit(&mut self, pos: Pos) {
        forward(self.send(Event::Visit(pos)).is_ok());
    }

    fn on_path_step(&mut self, pos: Pos) {
        forward(self.send(Event::PathStep(pos)).is_ok());
    }

    fn on_walls_changed(&mut self, walls: &Walls) {
        forward(self.send(Event::WallsChanged(walls.clone())).is_ok());
    }

    fn on_working_cells_changed(&mut self, cells: &[Pos]) {
        forward(self.send(Event::WorkingCells(cells.to_vec())).is_ok());
    }
}

fn forward(delivered: bool) {
    if !delivered {
        log::trace!("event receiver hung up, dropping event");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::mpsc;

    #[test]
    fn noop_sink_accepts_everything() {
        let mut s = NoopSink;
        s.on_visit(Pos::new(1, 1));
        s.on_walls_changed(&Walls::new());
        s.on_working_cells_changed(&[]);
    }

    #[test]
    fn log_records_in_order() {
        let mut log = EventLog::new();
        log.on_visit(Pos::new(0, 1));
        log.on_visit(Pos::new(1, 1));
        log.on_path_step(Pos::new(1, 1));
        let walls: Walls = [Pos::new(2, 2)].into_iter().collect();
        log.on_walls_changed(&walls);
        log.on_working_cells_changed(&[]);

        assert_eq!(log.visits(), vec![Pos::new(0, 1), Pos::new(1, 1)]);
        assert_eq!(log.path_steps(), vec![Pos::new(1, 1)]);
        assert_eq!(log.last_walls(), Some(&walls));
        assert_eq!(log.last_working_cells(), Some(&[][..]));
    }

    #[test]
    fn replay_reproduces_log() {
        let mut log = EventLog::new();
        log.on_visit(Pos::new(3, 4));
        log.on_working_cells_changed(&[Pos::new(1, 1), Pos::new(1, 2)]);

        let mut copy = EventLog::new();
        log.replay(&mut copy);
        assert_eq!(copy.events, log.events);
    }

    #[test]
    fn forwarding_through_mut_ref() {
        fn visit_twice(mut sink: impl EventSink) {
            sink.on_visit(Pos::new(0, 0));
            sink.on_visit(Pos::new(0, 1));
        }
        let mut log = EventLog::new();
        visit_twice(&mut log);
        assert_eq!(log.visits().len(), 2);
    }

    #[test]
    fn channel_sink_delivers() {
        let (mut tx, rx) = mpsc::channel::<Event>();
        tx.on_visit(Pos::new(2, 3));
        tx.on_path_step(Pos::new(2, 4));
        let got: Vec<_> = rx.try_iter().collect();
        assert_eq!(got, vec![Event::Visit(Pos::new(2, 3)), Event::PathStep(Pos::new(2, 4))]);
    }

    #[test]
    fn channel_sink_survives_hang_up() {
        let (mut tx, rx) = mpsc::sync_channel::<Event>(1);
        drop(rx);
        tx.on_visit(Pos::new(0, 0));
    }
}
