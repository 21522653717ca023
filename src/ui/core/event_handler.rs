use crossterm::event::{poll, Event, KeyEvent, KeyEventKind};
use tokio::time::Duration;

/// Delay between two polls of the terminal when no event is pending
const IDLE_POLL_INTERVAL: Duration = Duration::from_millis(50);

pub struct EventHandler {
    idle_interval: Duration,
}

impl EventHandler {
    pub fn new() -> Self {
        Self {
            idle_interval: IDLE_POLL_INTERVAL,
        }
    }

    pub async fn next_event(&mut self) -> anyhow::Result<EventType> {
        // Check for terminal events without blocking first
        if poll(Duration::from_millis(0))? {
            return Ok(Self::classify(crossterm::event::read()?));
        }

        // If no immediate event, wait a bit and return tick
        tokio::time::sleep(self.idle_interval).await;
        Ok(EventType::Tick)
    }

    /// Map a raw terminal event onto the events the app reacts to
    pub fn classify(event: Event) -> EventType {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => EventType::Key(key),
            Event::Resize(w, h) => EventType::Resize(w, h),
            _ => EventType::Other,
        }
    }

    pub fn idle_interval(&self) -> Duration {
        self.idle_interval
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventType {
    Key(KeyEvent),
    Resize(u16, u16),
    Tick,
    Other,
}

impl Default for EventHandler {
    fn default() -> Self {
        Self::new()
    }
}
