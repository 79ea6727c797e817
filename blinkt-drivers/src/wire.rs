//! Recording two-wire link for driver tests
//!
//! Both mock pins write into one shared [`Wire`], which keeps every state
//! change in order and can replay them through the receiver model.

use core::cell::RefCell;

use blinkt_hal::DigitalOutput;
use blinkt_protocol::{DecodedFrame, FrameDecoder, FrameError};
use heapless::Vec;

use crate::error::Line;

/// Room for two full frames
const MAX_EVENTS: usize = 2048;

/// One state change on the link
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Event {
    pub line: Line,
    pub high: bool,
}

/// Error returned by a mock pin once its budget runs out
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PinFault;

/// Shared record of both lines
#[derive(Debug, Default)]
pub struct Wire {
    pub events: Vec<Event, MAX_EVENTS>,
    /// Remaining successful writes before pins start failing
    budget: Option<usize>,
}

impl Wire {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fail every write after `writes` successful ones
    pub fn failing_after(writes: usize) -> Self {
        Self {
            events: Vec::new(),
            budget: Some(writes),
        }
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }

    fn record(&mut self, line: Line, high: bool) -> Result<(), PinFault> {
        if let Some(budget) = self.budget.as_mut() {
            if *budget == 0 {
                return Err(PinFault);
            }
            *budget -= 1;
        }
        self.events
            .push(Event { line, high })
            .expect("wire event log full");
        Ok(())
    }

    /// Data bit seen on each rising clock edge
    pub fn sampled_bits(&self) -> Vec<bool, MAX_EVENTS> {
        let mut bits = Vec::new();
        let mut clock = false;
        let mut data = false;
        for event in &self.events {
            match event.line {
                Line::Data => data = event.high,
                Line::Clock => {
                    if event.high && !clock {
                        bits.push(data).expect("bit log full");
                    }
                    clock = event.high;
                }
            }
        }
        bits
    }

    /// Replay the recorded bits through the receiver model
    pub fn decode(&self) -> Result<DecodedFrame, FrameError> {
        let mut decoder = FrameDecoder::new();
        for bit in self.sampled_bits() {
            decoder.feed_bit(bit)?;
        }
        decoder.finish()
    }

    /// Last level driven on a line
    pub fn level(&self, line: Line) -> Option<bool> {
        self.events
            .iter()
            .rev()
            .find(|event| event.line == line)
            .map(|event| event.high)
    }
}

/// Mock output pin writing into a shared [`Wire`]
pub struct WirePin<'a> {
    wire: &'a RefCell<Wire>,
    line: Line,
}

impl<'a> WirePin<'a> {
    pub fn clock(wire: &'a RefCell<Wire>) -> Self {
        Self {
            wire,
            line: Line::Clock,
        }
    }

    pub fn data(wire: &'a RefCell<Wire>) -> Self {
        Self {
            wire,
            line: Line::Data,
        }
    }
}

impl DigitalOutput for WirePin<'_> {
    type Error = PinFault;

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.wire.borrow_mut().record(self.line, true)
    }

    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.wire.borrow_mut().record(self.line, false)
    }
}
