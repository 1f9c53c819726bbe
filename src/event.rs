use std::time::Duration;

use crossterm::event::{self, Event as CrosstermEvent, KeyEvent};
use futures::StreamExt;
use tokio::sync::mpsc;
use tokio::time::MissedTickBehavior;

#[derive(Clone, Debug)]
pub enum Event {
    Key(KeyEvent),
    Tick,
    Resize,
}

/// Multiplexes terminal input with the sampling interval onto one channel,
/// so the run loop stays a single consumer and `tick` calls are serialized.
pub struct EventHandler {
    rx: mpsc::UnboundedReceiver<Event>,
    _task: tokio::task::JoinHandle<()>,
}

impl EventHandler {
    pub fn new(tick_rate: Duration) -> Self {
        let (tx, rx) = mpsc::unbounded_channel::<Event>();

        let task = tokio::spawn(async move {
            let mut reader = event::EventStream::new();
            let mut tick_interval = tokio::time::interval(tick_rate);
            // A stalled terminal should not cause a burst of catch-up ticks.
            tick_interval.set_missed_tick_behavior(MissedTickBehavior::Skip);

            loop {
                tokio::select! {
                    maybe_event = reader.next() => {
                        let mapped = match maybe_event {
                            Some(Ok(CrosstermEvent::Key(key))) => Some(Event::Key(key)),
                            Some(Ok(CrosstermEvent::Resize(_, _))) => Some(Event::Resize),
                            Some(Ok(_)) => None,
                            Some(Err(_)) | None => break,
                        };
                        if let Some(e) = mapped
                            && tx.send(e).is_err()
                        {
                            break;
                        }
                    }
                    _ = tick_interval.tick() => {
                        if tx.send(Event::Tick).is_err() {
                            break;
                        }
                    }
                }
            }
        });

        Self { rx, _task: task }
    }

    pub async fn next(&mut self) -> Option<Event> {
        self.rx.recv().await
    }
}
